//! Inspector session handoff.
//!
//! Starting a session is the screen's one side-effecting call. The heavy
//! lifting lives in the inspector service itself; this module records the
//! handoff and reports back to the UI.

use std::time::Instant;

use thiserror::Error;
use tracing::info;

/// Result type for session operations
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors starting an inspector session
#[derive(Error, Debug)]
pub enum SessionError {
    /// The start button was pressed with no URL entered
    #[error("no inspector session URL entered")]
    MissingUrl,
}

/// Details of a session handoff, echoed back to the UI.
#[derive(Debug, Clone)]
pub struct SessionInfo {
    /// The URL the session was started against.
    pub url: String,
    /// When the handoff happened.
    pub started_at: Instant,
}

/// Hand the session URL to the inspector. The URL is forwarded exactly as
/// typed; only a missing URL is rejected.
pub fn start(url: &str) -> Result<SessionInfo> {
    if url.trim().is_empty() {
        return Err(SessionError::MissingUrl);
    }

    info!("Starting inspector session: {}", url);
    Ok(SessionInfo {
        url: url.to_string(),
        started_at: Instant::now(),
    })
}
