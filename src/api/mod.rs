pub mod http;
pub mod types;

pub use http::HttpApi;
pub use types::{ApiReply, CommandRequest, Endpoints, PlaybackState};

use crate::error::Result;
use async_trait::async_trait;

/// The kiosk backend as seen by the controller.
///
/// Any completed HTTP exchange is `Ok`, whatever its status. `Err` means the
/// request never completed or its JSON body could not be read.
#[async_trait]
pub trait PlaybackApi: Send + Sync {
    async fn now_playing(&self) -> Result<ApiReply>;
    async fn send_command(&self, command: CommandRequest) -> Result<ApiReply>;
}
