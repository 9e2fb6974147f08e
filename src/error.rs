//! Error taxonomy for backend calls and the advisory text each one maps to.

use crate::api::ApiReply;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Fallback advisory when a poll fails without an `error` field
pub const POLL_FALLBACK: &str = "Unable to reach Spotify";
/// Fallback advisory when a command fails without an `error` field
pub const COMMAND_FALLBACK: &str = "Action failed";
pub const NETWORK_ERROR: &str = "Network error";
pub const POLL_UNAUTHORIZED: &str = "Not authorized. Sign in to Spotify.";
pub const COMMAND_UNAUTHORIZED: &str = "Re-link Spotify (Sign in).";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP 401
    #[error("not authorized")]
    Unauthorized,

    /// HTTP 429
    #[error("rate limited, retry after {retry_after}s")]
    RateLimited { retry_after: u64 },

    /// Any other non-2xx status
    #[error("backend returned HTTP {status}")]
    Backend { status: u16, message: Option<String> },

    /// The request never completed
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A JSON response that could not be decoded
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Which operation produced the error. Selects the advisory wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    Poll,
    Command,
}

impl ApiError {
    /// Classify a non-2xx reply. Returns `None` for success statuses.
    pub fn from_reply(reply: &ApiReply) -> Option<Self> {
        if reply.is_success() {
            return None;
        }
        Some(match reply.status {
            401 => ApiError::Unauthorized,
            429 => ApiError::RateLimited {
                retry_after: reply.retry_after(),
            },
            status => ApiError::Backend {
                status,
                message: reply.error_message(),
            },
        })
    }

    /// One-line advisory for the helper slot
    pub fn advisory(&self, context: Context) -> String {
        match self {
            ApiError::Unauthorized => match context {
                Context::Poll => POLL_UNAUTHORIZED.to_string(),
                Context::Command => COMMAND_UNAUTHORIZED.to_string(),
            },
            ApiError::RateLimited { retry_after } => {
                format!("Rate limited. Retry after {}s", retry_after)
            }
            ApiError::Backend { message, .. } => match message {
                Some(m) => m.clone(),
                None => match context {
                    Context::Poll => POLL_FALLBACK.to_string(),
                    Context::Command => COMMAND_FALLBACK.to_string(),
                },
            },
            ApiError::Transport(_) | ApiError::Decode(_) => NETWORK_ERROR.to_string(),
        }
    }
}
