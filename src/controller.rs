//! Poll / render / command loop.
//!
//! The controller owns no UI state. Every outcome goes to the injected
//! [`Surface`] as either a full render or an advisory line, and no error ever
//! leaves [`NowPlayingController::refresh`] or
//! [`NowPlayingController::send_command`].

use crate::api::{CommandRequest, PlaybackApi, PlaybackState};
use crate::app::surface::Surface;
use crate::app::DisplaySlots;
use crate::error::{ApiError, Context};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy)]
pub struct ControllerConfig {
    pub poll_interval: Duration,
    /// Drop poll outcomes that arrive after a newer poll was applied
    pub strict_ordering: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            strict_ordering: false,
        }
    }
}

enum Update {
    Render(DisplaySlots),
    Advisory(String),
}

pub struct NowPlayingController {
    api: Arc<dyn PlaybackApi>,
    surface: Arc<dyn Surface>,
    config: ControllerConfig,
    /// Sequence number of the last poll issued
    issued: AtomicU64,
    /// Sequence number of the last poll applied to the surface
    applied: Mutex<u64>,
}

impl NowPlayingController {
    pub fn new(
        api: Arc<dyn PlaybackApi>,
        surface: Arc<dyn Surface>,
        config: ControllerConfig,
    ) -> Self {
        Self {
            api,
            surface,
            config,
            issued: AtomicU64::new(0),
            applied: Mutex::new(0),
        }
    }

    /// Fetch the current playback state and show it (or the reason it failed)
    pub async fn refresh(&self) {
        let seq = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let update = self.poll().await;

        if self.config.strict_ordering {
            let mut applied = self.applied.lock().await;
            if seq < *applied {
                debug!(seq, applied = *applied, "Dropping stale poll");
                return;
            }
            *applied = seq;
            self.apply(update).await;
        } else {
            self.apply(update).await;
        }
    }

    async fn poll(&self) -> Update {
        let reply = match self.api.now_playing().await {
            Ok(reply) => reply,
            Err(err) => {
                warn!(error = %err, "Now playing request failed");
                return Update::Advisory(err.advisory(Context::Poll));
            }
        };

        if let Some(err) = ApiError::from_reply(&reply) {
            warn!(status = reply.status, error = %err, "Now playing rejected");
            return Update::Advisory(err.advisory(Context::Poll));
        }

        match serde_json::from_value::<PlaybackState>(reply.body) {
            Ok(state) => Update::Render(DisplaySlots::from_state(&state)),
            Err(err) => {
                warn!(error = %err, "Unreadable now playing body");
                Update::Advisory(ApiError::from(err).advisory(Context::Poll))
            }
        }
    }

    async fn apply(&self, update: Update) {
        match update {
            Update::Render(slots) => {
                self.surface.set_helper(String::new()).await;
                self.surface.render(slots).await;
            }
            Update::Advisory(message) => self.surface.set_helper(message).await,
        }
    }

    /// Send a command, report any failure, then poll once whatever happened
    pub async fn send_command(&self, command: CommandRequest) {
        self.surface.set_helper(String::new()).await;

        match self.api.send_command(command).await {
            Ok(reply) => match ApiError::from_reply(&reply) {
                Some(err) => {
                    warn!(command = command.label(), status = reply.status, error = %err, "Command rejected");
                    self.surface.set_helper(err.advisory(Context::Command)).await;
                }
                None => debug!(command = command.label(), status = reply.status, "Command accepted"),
            },
            Err(err) => {
                warn!(command = command.label(), error = %err, "Command request failed");
                self.surface.set_helper(err.advisory(Context::Command)).await;
            }
        }

        self.refresh().await;
    }

    /// Run a command in the background. Presses are never debounced.
    pub fn spawn_command(self: &Arc<Self>, command: CommandRequest) -> JoinHandle<()> {
        let this = Arc::clone(self);
        tokio::spawn(async move { this.send_command(command).await })
    }

    /// Poll now, then every `poll_interval`, forever.
    ///
    /// Each poll runs in its own task so a slow response never delays the next tick.
    pub async fn run_polling(self: Arc<Self>) {
        info!(interval_ms = self.config.poll_interval.as_millis() as u64, "Polling started");
        let mut interval = tokio::time::interval(self.config.poll_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            let this = Arc::clone(&self);
            tokio::spawn(async move { this.refresh().await });
        }
    }
}
