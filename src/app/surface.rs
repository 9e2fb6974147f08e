use crate::app::events::AppEvent;
use crate::app::DisplaySlots;
use async_trait::async_trait;
use tokio::sync::mpsc;

/// The UI the controller writes into.
///
/// `render` replaces every now-playing slot; `set_helper` replaces the advisory
/// line (empty string clears it).
#[async_trait]
pub trait Surface: Send + Sync {
    async fn render(&self, slots: DisplaySlots);
    async fn set_helper(&self, message: String);
}

/// Forwards updates to the draw loop, which owns the terminal state
#[derive(Clone)]
pub struct ChannelSurface {
    tx: mpsc::Sender<AppEvent>,
}

impl ChannelSurface {
    pub fn new(tx: mpsc::Sender<AppEvent>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl Surface for ChannelSurface {
    async fn render(&self, slots: DisplaySlots) {
        // Receiver is gone only during shutdown
        let _ = self.tx.send(AppEvent::Render(slots)).await;
    }

    async fn set_helper(&self, message: String) {
        let _ = self.tx.send(AppEvent::Helper(message)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_updates_reach_the_draw_loop_in_order() {
        let (tx, mut rx) = mpsc::channel(8);
        let surface = ChannelSurface::new(tx);

        surface.set_helper(String::new()).await;
        surface.render(DisplaySlots::default()).await;

        assert!(matches!(rx.recv().await, Some(AppEvent::Helper(m)) if m.is_empty()));
        assert!(matches!(rx.recv().await, Some(AppEvent::Render(_))));
    }
}
