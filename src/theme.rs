//! Visual theme for the settings workbench.

use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme};

/// Neutral base with a teal accent.
pub mod colors {
    use iced::Color;

    /// Teal accent for headings and primary actions.
    pub const PRIMARY: Color = Color::from_rgb(0.0, 0.45, 0.45);
    /// Hover shade of the accent.
    pub const PRIMARY_LIGHT: Color = Color::from_rgb(0.15, 0.6, 0.6);
    /// Pressed shade of the accent.
    pub const PRIMARY_DARK: Color = Color::from_rgb(0.0, 0.3, 0.3);

    /// Card and bar background.
    pub const SURFACE: Color = Color::from_rgb(1.0, 1.0, 1.0);
    /// Slightly darker surface for borders and hover fills.
    pub const SURFACE_DARK: Color = Color::from_rgb(0.95, 0.96, 0.96);
    /// Window background.
    pub const BACKGROUND: Color = Color::from_rgb(0.93, 0.94, 0.94);

    /// Main body text.
    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.1, 0.12, 0.12);
    /// De-emphasized text such as the version value.
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.35, 0.4, 0.4);
    /// Faint text for build info and idle status.
    pub const TEXT_MUTED: Color = Color::from_rgb(0.55, 0.6, 0.6);

    /// Success banners and the active-session dot.
    pub const SUCCESS: Color = Color::from_rgb(0.15, 0.65, 0.35);
    /// Error banners and the failed-session dot.
    pub const ERROR: Color = Color::from_rgb(0.85, 0.2, 0.2);
    /// Informational banners.
    pub const INFO: Color = Color::from_rgb(0.15, 0.45, 0.85);
}

/// Filled accent button, used for the session start action.
pub fn primary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(colors::PRIMARY)),
        text_color: Color::WHITE,
        border: Border {
            color: colors::PRIMARY_DARK,
            width: 1.0,
            radius: 4.0.into(),
        },
        shadow: Shadow::default(),
        snap: false,
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(colors::PRIMARY_LIGHT)),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(colors::PRIMARY_DARK)),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.7, 0.7, 0.7))),
            text_color: Color::from_rgb(0.5, 0.5, 0.5),
            ..base
        },
    }
}

/// Outlined neutral button, used for dismissing notices.
pub fn secondary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(colors::SURFACE)),
        text_color: colors::TEXT_PRIMARY,
        border: Border {
            color: Color::from_rgb(0.8, 0.82, 0.82),
            width: 1.0,
            radius: 4.0.into(),
        },
        shadow: Shadow::default(),
        snap: false,
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(colors::SURFACE_DARK)),
            border: Border {
                color: colors::PRIMARY,
                ..base.border
            },
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.88, 0.9, 0.9))),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.95, 0.95, 0.95))),
            text_color: Color::from_rgb(0.6, 0.6, 0.6),
            ..base
        },
    }
}

/// Used by the per-row remove buttons in the parameter lists.
pub fn danger_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(colors::ERROR)),
        text_color: Color::WHITE,
        border: Border {
            color: Color::from_rgb(0.65, 0.12, 0.12),
            width: 1.0,
            radius: 4.0.into(),
        },
        shadow: Shadow::default(),
        snap: false,
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.95, 0.3, 0.3))),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.65, 0.12, 0.12))),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.8, 0.5, 0.5))),
            text_color: Color::from_rgb(0.9, 0.9, 0.9),
            ..base
        },
    }
}

/// White card with a hairline border and soft shadow.
pub fn section_container_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(colors::SURFACE)),
        border: Border {
            color: Color::from_rgb(0.87, 0.89, 0.89),
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.05),
            offset: iced::Vector::new(0.0, 2.0),
            blur_radius: 4.0,
        },
        ..Default::default()
    }
}
