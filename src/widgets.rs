//! Widget helpers that compose iced primitives into consistent form controls.
//!
//! Centralizes styling so the settings view focuses purely on layout.

use iced::widget::{button, container, row, space, text, text_input};
use iced::{Alignment, Color, Element, Length, Theme};

use crate::message::Message;
use crate::params::{ParamGroup, ParamPair};
use crate::state::{Notice, NoticeLevel};
use crate::theme;

/// Section heading, start-aligned like the top-level form labels.
pub fn section_label<'a>(title: &'a str) -> Element<'a, Message> {
    text(title)
        .size(18)
        .style(|_theme| text::Style {
            color: Some(theme::colors::PRIMARY),
        })
        .into()
}

/// Centered sub-heading above each parameter list.
pub fn group_label<'a>(title: &'a str) -> Element<'a, Message> {
    text(title)
        .size(15)
        .width(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .style(|_theme| text::Style {
            color: Some(theme::colors::TEXT_PRIMARY),
        })
        .into()
}

/// Full-width settings text field.
pub fn settings_field<'a>(
    value: &'a str,
    placeholder: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    text_input(placeholder, value)
        .on_input(on_change)
        .width(Length::Fill)
        .into()
}

/// One key/value row: key field, value field, and the action button.
/// The last row's action appends a new pair, any other row's removes it.
pub fn key_value_row<'a>(
    group: ParamGroup,
    index: usize,
    pair: &'a ParamPair,
    is_last: bool,
) -> Element<'a, Message> {
    let action_label = if is_last { "+" } else { "−" };
    let action_style: fn(&Theme, button::Status) -> button::Style = if is_last {
        theme::primary_button_style
    } else {
        theme::danger_button_style
    };

    row![
        text_input("Enter Key", &pair.key)
            .on_input(move |key| Message::ParamKeyChanged(group, index, key))
            .width(Length::FillPortion(2)),
        text(":").size(16),
        text_input("Enter Value", &pair.value)
            .on_input(move |value| Message::ParamValueChanged(group, index, value))
            .width(Length::FillPortion(2)),
        button(text(action_label).size(16))
            .on_press(Message::ParamRowAction(group, index))
            .padding([6, 12])
            .style(action_style),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}

/// Dismissible notice banner.
pub fn notice_box<'a>(notice: &'a Notice, index: usize) -> Element<'a, Message> {
    let (icon, color) = match notice.level {
        NoticeLevel::Info => ("ⓘ", theme::colors::INFO),
        NoticeLevel::Success => ("✓", theme::colors::SUCCESS),
        NoticeLevel::Error => ("✗", theme::colors::ERROR),
    };

    container(
        row![
            text(icon).size(16),
            text(notice.text.as_str()).size(13),
            space().width(Length::Fill),
            button(text("Dismiss").size(12))
                .on_press(Message::DismissNotice(index))
                .padding([2, 8])
                .style(theme::secondary_button_style),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    )
    .padding([8, 12])
    .width(Length::Fill)
    .style(move |_theme| container::Style {
        background: Some(iced::Background::Color(color.scale_alpha(0.1))),
        border: iced::Border {
            color: color.scale_alpha(0.3),
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    })
    .into()
}

/// Colored dot plus status text, used in the footer.
pub fn status_indicator<'a>(color: Color, status_text: String) -> Element<'a, Message> {
    row![
        text("●")
            .size(16)
            .style(move |_theme| text::Style { color: Some(color) }),
        text(status_text).size(13),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}

/// White rounded box with "Version" on the left and the value on the right.
pub fn version_row<'a>(version: String) -> Element<'a, Message> {
    container(
        row![
            text("Version").size(14),
            space().width(Length::Fill),
            text(version).size(14).style(|_theme| text::Style {
                color: Some(theme::colors::TEXT_SECONDARY),
            }),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    )
    .padding([10, 12])
    .width(Length::Fill)
    .style(theme::section_container_style)
    .into()
}
