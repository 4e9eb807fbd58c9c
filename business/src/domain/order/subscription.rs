use tokio::sync::mpsc;

use super::model::Order;

type ReleaseHook = Box<dyn FnOnce() + Send + Sync>;

/// Handle on a live order channel. Dropping the handle (or calling
/// `unsubscribe`) closes the channel and runs the adapter's release hook,
/// so the underlying listener never outlives its consumer.
pub struct OrderSubscription {
    receiver: mpsc::Receiver<Order>,
    on_release: Option<ReleaseHook>,
}

impl OrderSubscription {
    pub fn new(
        receiver: mpsc::Receiver<Order>,
        on_release: impl FnOnce() + Send + Sync + 'static,
    ) -> Self {
        Self {
            receiver,
            on_release: Some(Box::new(on_release)),
        }
    }

    /// Next delivered order, or `None` once the producer side is gone.
    pub async fn next(&mut self) -> Option<Order> {
        self.receiver.recv().await
    }

    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for OrderSubscription {
    fn drop(&mut self) {
        self.receiver.close();
        if let Some(release) = self.on_release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for OrderSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderSubscription")
            .field("released", &self.on_release.is_none())
            .finish()
    }
}
