//! Application state for the settings window.
//!
//! Owns the settings model being edited plus transient UI state: the
//! inspector session status and dismissible user notices.

use std::time::{Instant, SystemTime};

use crate::model::SettingsModel;

/// Everything the window needs to render and update.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The settings model being edited.
    pub model: SettingsModel,
    /// Inspector session handoff status.
    pub session: SessionStatus,
    /// User notices (info/success/error banners).
    pub notices: Vec<Notice>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_model(SettingsModel::default())
    }
}

impl AppState {
    /// Create state around an already-seeded model.
    pub fn with_model(model: SettingsModel) -> Self {
        Self {
            model,
            session: SessionStatus::Idle,
            notices: Vec::new(),
        }
    }

    /// Add a user notice
    pub fn push_notice(&mut self, level: NoticeLevel, text: String) {
        self.notices.push(Notice {
            level,
            text,
            timestamp: SystemTime::now(),
        });
    }

    /// Drop the notice at `index`, ignoring stale indices.
    pub fn dismiss_notice(&mut self, index: usize) {
        if index < self.notices.len() {
            self.notices.remove(index);
        }
    }
}

/// Inspector session status shown in the footer
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionStatus {
    /// No session has been started.
    #[default]
    Idle,
    /// A session handoff succeeded.
    Active {
        /// URL the session was started against.
        url: String,
        /// When the handoff happened.
        since: Instant,
    },
    /// The last handoff failed.
    Failed(String),
}

impl SessionStatus {
    /// Check if a session is currently active
    pub fn is_active(&self) -> bool {
        matches!(self, SessionStatus::Active { .. })
    }

    /// Footer display text
    pub fn display_text(&self) -> String {
        match self {
            SessionStatus::Idle => "Inspector idle".to_string(),
            SessionStatus::Active { url, since } => format!(
                "Inspector session active: {} ({}s)",
                url,
                since.elapsed().as_secs()
            ),
            SessionStatus::Failed(reason) => format!("Inspector session failed: {}", reason),
        }
    }
}

/// A user-facing banner with a dismiss button.
#[derive(Debug, Clone)]
pub struct Notice {
    /// Severity, mapped to the banner color.
    pub level: NoticeLevel,
    /// Message shown to the user.
    pub text: String,
    /// When the notice was raised.
    pub timestamp: SystemTime,
}

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Neutral information.
    Info,
    /// Something went wrong.
    Error,
    /// An operation completed.
    Success,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_append_in_order_and_dismiss_by_index() {
        let mut state = AppState::default();
        state.push_notice(NoticeLevel::Info, "first".to_string());
        state.push_notice(NoticeLevel::Error, "second".to_string());

        state.dismiss_notice(0);
        assert_eq!(state.notices.len(), 1);
        assert_eq!(state.notices[0].text, "second");

        // Stale index after the list shrank
        state.dismiss_notice(5);
        assert_eq!(state.notices.len(), 1);
    }

    #[test]
    fn session_status_text_reflects_state() {
        assert_eq!(SessionStatus::Idle.display_text(), "Inspector idle");
        assert!(!SessionStatus::Idle.is_active());

        let active = SessionStatus::Active {
            url: "wss://inspect.example/s1".to_string(),
            since: Instant::now(),
        };
        assert!(active.is_active());
        assert!(active.display_text().contains("wss://inspect.example/s1"));

        let failed = SessionStatus::Failed("no URL".to_string());
        assert!(!failed.is_active());
        assert!(failed.display_text().contains("no URL"));
    }

    #[test]
    fn with_model_keeps_the_seeded_model() {
        let model = SettingsModel::default()
            .with_overrides(Some("env-42".to_string()), None);
        let state = AppState::with_model(model);

        assert_eq!(state.model.environment_file_id, "env-42");
        assert!(state.notices.is_empty());
        assert_eq!(state.session, SessionStatus::Idle);
    }
}
