//! Main iced application for the settings window.
//!
//! Implements the Elm Architecture pattern: State -> View -> Message -> Update -> State

use std::time::Duration;

use iced::widget::{column, container, row, scrollable, space, text};
use iced::{Alignment, Element, Length, Subscription, Task};

use crate::message::Message;
use crate::model::SettingsModel;
use crate::session;
use crate::settings;
use crate::state::{AppState, NoticeLevel, SessionStatus};
use crate::theme as app_theme;
use crate::widgets;

/// The settings window.
#[derive(Default)]
pub struct SettingsApp {
    /// Shared application state.
    pub state: AppState,
}

impl SettingsApp {
    /// Start with a blank settings model.
    pub fn new() -> (Self, Task<Message>) {
        (Self::default(), Task::none())
    }

    /// Start from a model already seeded with CLI overrides.
    pub fn with_model(model: SettingsModel) -> (Self, Task<Message>) {
        (
            Self {
                state: AppState::with_model(model),
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // =================================================================
            // Identity & Inspector
            // =================================================================
            Message::EnvironmentFileIdChanged(id) => {
                self.state.model.environment_file_id = id;
                Task::none()
            }
            Message::InspectorUrlChanged(url) => {
                self.state.model.inspector_url = url;
                Task::none()
            }
            Message::StartInspectorSession => {
                if self.state.session.is_active() {
                    self.state.push_notice(
                        NoticeLevel::Info,
                        "Replacing the active inspector session".to_string(),
                    );
                }
                let url = self.state.model.inspector_url.clone();
                Task::perform(
                    async move { session::start(&url).map_err(|e| e.to_string()) },
                    Message::InspectorSessionStarted,
                )
            }
            Message::InspectorSessionStarted(result) => {
                match result {
                    Ok(info) => {
                        self.state.push_notice(
                            NoticeLevel::Success,
                            format!("Inspector session started: {}", info.url),
                        );
                        self.state.session = SessionStatus::Active {
                            url: info.url,
                            since: info.started_at,
                        };
                    }
                    Err(e) => {
                        self.state.session = SessionStatus::Failed(e.clone());
                        self.state.push_notice(NoticeLevel::Error, e);
                    }
                }
                Task::none()
            }

            // =================================================================
            // Decision Scopes
            // =================================================================
            Message::ScopeTextChanged(scope) => {
                self.state.model.scope_text = scope;
                Task::none()
            }
            Message::ScopeImageChanged(scope) => {
                self.state.model.scope_image = scope;
                Task::none()
            }
            Message::ScopeHtmlChanged(scope) => {
                self.state.model.scope_html = scope;
                Task::none()
            }
            Message::ScopeJsonChanged(scope) => {
                self.state.model.scope_json = scope;
                Task::none()
            }

            // =================================================================
            // Target
            // =================================================================
            Message::TargetMboxChanged(mbox) => {
                self.state.model.target_mbox = mbox;
                Task::none()
            }

            // =================================================================
            // Parameter Lists
            // =================================================================
            Message::ParamKeyChanged(group, index, key) => {
                self.state.model.params_mut(group).set_key(index, key);
                Task::none()
            }
            Message::ParamValueChanged(group, index, value) => {
                self.state.model.params_mut(group).set_value(index, value);
                Task::none()
            }
            Message::ParamRowAction(group, index) => {
                self.state.model.params_mut(group).press_action(index);
                Task::none()
            }

            // =================================================================
            // Order
            // =================================================================
            Message::OrderIdChanged(id) => {
                self.state.model.order_id = id;
                Task::none()
            }
            Message::OrderTotalChanged(total) => {
                self.state.model.order_total = total;
                Task::none()
            }
            Message::PurchasedProductIdsChanged(ids) => {
                self.state.model.purchased_product_ids = ids;
                Task::none()
            }

            // =================================================================
            // Product
            // =================================================================
            Message::ProductIdChanged(id) => {
                self.state.model.product_id = id;
                Task::none()
            }
            Message::ProductCategoryIdChanged(id) => {
                self.state.model.product_category_id = id;
                Task::none()
            }

            // =================================================================
            // UI State
            // =================================================================
            Message::DismissNotice(idx) => {
                self.state.dismiss_notice(idx);
                Task::none()
            }
            Message::Tick => {
                // Redraw only; the footer clock reads the session start time
                Task::none()
            }
        }
    }

    /// Render the main view
    pub fn view(&self) -> Element<'_, Message> {
        let header = self.view_header();
        let notices = self.view_notices();
        let form = scrollable(settings::view_settings(&self.state)).height(Length::Fill);
        let footer = self.view_footer();

        column![header, notices, form, footer].spacing(0).into()
    }

    /// Render the header
    fn view_header(&self) -> Element<'_, Message> {
        container(
            row![
                text("Scopeworks Settings")
                    .size(24)
                    .style(|_theme| text::Style {
                        color: Some(app_theme::colors::PRIMARY),
                    }),
                space().width(Length::Fill),
                text(format!("v{}", env!("CARGO_PKG_VERSION")))
                    .size(13)
                    .style(|_theme| text::Style {
                        color: Some(app_theme::colors::TEXT_MUTED),
                    }),
            ]
            .spacing(8)
            .align_y(Alignment::Center)
            .padding([12, 20]),
        )
        .style(|_theme| container::Style {
            background: Some(iced::Background::Color(app_theme::colors::SURFACE)),
            ..Default::default()
        })
        .width(Length::Fill)
        .into()
    }

    /// Render the notice banners, collapsing to nothing when there are none
    fn view_notices(&self) -> Element<'_, Message> {
        if self.state.notices.is_empty() {
            return space().height(0.0).into();
        }

        let banners: Vec<Element<'_, Message>> = self
            .state
            .notices
            .iter()
            .enumerate()
            .map(|(index, notice)| widgets::notice_box(notice, index))
            .collect();

        column(banners).spacing(4).padding([8, 20]).into()
    }

    /// Render the footer with the inspector session status
    fn view_footer(&self) -> Element<'_, Message> {
        let status_color = match &self.state.session {
            SessionStatus::Active { .. } => app_theme::colors::SUCCESS,
            SessionStatus::Failed(_) => app_theme::colors::ERROR,
            SessionStatus::Idle => app_theme::colors::TEXT_MUTED,
        };
        let status = widgets::status_indicator(status_color, self.state.session.display_text());

        let build_info = text(format!("Built {} {}", env!("BUILD_DATE"), env!("BUILD_TIME")))
            .size(12)
            .style(|_theme| text::Style {
                color: Some(app_theme::colors::TEXT_MUTED),
            });

        container(
            row![status, space().width(Length::Fill), build_info,]
                .spacing(8)
                .align_y(Alignment::Center)
                .padding([8, 20]),
        )
        .style(|_theme| container::Style {
            background: Some(iced::Background::Color(app_theme::colors::SURFACE)),
            border: iced::Border {
                color: app_theme::colors::SURFACE_DARK,
                width: 1.0,
                radius: 0.0.into(),
            },
            ..Default::default()
        })
        .width(Length::Fill)
        .into()
    }

    /// Subscriptions for async events
    pub fn subscription(&self) -> Subscription<Message> {
        // Periodic tick so the active-session clock stays current
        iced::time::every(Duration::from_secs(1)).map(|_| Message::Tick)
    }
}
