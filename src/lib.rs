pub mod api;
pub mod app;
pub mod artwork;
pub mod controller;
pub mod error;
pub mod logging;
pub mod theme;
pub mod ui;

pub use api::{CommandRequest, HttpApi, PlaybackApi, PlaybackState};
pub use controller::{ControllerConfig, NowPlayingController};
pub use error::ApiError;
