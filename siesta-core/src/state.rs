use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;

/// Mutable runtime state shared across event handlers.
///
/// Serenity dispatches events on a multi-threaded runtime, so both the
/// do-not-disturb flag and the cooldown table sit behind synchronization
/// primitives rather than relying on single-flow execution.
#[derive(Clone, Debug, Default)]
pub struct ReplyState {
    dnd_enabled: Arc<AtomicBool>,
    last_replied_at: Arc<RwLock<HashMap<u64, i64>>>,
}

impl ReplyState {
    pub fn new(dnd_default: bool) -> Self {
        Self {
            dnd_enabled: Arc::new(AtomicBool::new(dnd_default)),
            last_replied_at: Arc::default(),
        }
    }

    pub fn dnd_enabled(&self) -> bool {
        self.dnd_enabled.load(Ordering::SeqCst)
    }

    pub fn set_dnd(&self, enabled: bool) {
        self.dnd_enabled.store(enabled, Ordering::SeqCst);
    }

    /// Check whether the last autoreply to this sender is still within the
    /// cooldown. Senders with no recorded reply are never on cooldown.
    pub async fn is_on_cooldown(&self, sender_id: u64, now_secs: i64, cooldown_secs: i64) -> bool {
        let table = self.last_replied_at.read().await;
        match table.get(&sender_id) {
            Some(last) => now_secs - last < cooldown_secs,
            None => false,
        }
    }

    /// Record an autoreply to this sender, overwriting any earlier entry.
    /// Entries are never evicted; the table lives for the process lifetime.
    pub async fn record_reply(&self, sender_id: u64, now_secs: i64) {
        let mut table = self.last_replied_at.write().await;
        table.insert(sender_id, now_secs);
    }
}

#[cfg(test)]
mod tests {
    use super::ReplyState;

    const HOUR: i64 = 3600;

    #[tokio::test]
    async fn unseen_sender_is_never_on_cooldown() {
        let state = ReplyState::new(false);
        assert!(!state.is_on_cooldown(42, 1_000_000, HOUR).await);
    }

    #[tokio::test]
    async fn cooldown_suppresses_then_expires() {
        let state = ReplyState::new(false);
        let t = 1_000_000;
        state.record_reply(42, t).await;

        // 30 minutes later: still cooling down.
        assert!(state.is_on_cooldown(42, t + 30 * 60, HOUR).await);
        // 61 minutes later: eligible again.
        assert!(!state.is_on_cooldown(42, t + 61 * 60, HOUR).await);
    }

    #[tokio::test]
    async fn cooldown_is_tracked_per_sender() {
        let state = ReplyState::new(false);
        state.record_reply(1, 1_000_000).await;

        assert!(state.is_on_cooldown(1, 1_000_100, HOUR).await);
        assert!(!state.is_on_cooldown(2, 1_000_100, HOUR).await);
    }

    #[tokio::test]
    async fn recording_again_overwrites_the_entry() {
        let state = ReplyState::new(false);
        let t = 1_000_000;
        state.record_reply(42, t).await;
        state.record_reply(42, t + 2 * HOUR).await;

        // Measured from the second reply, not the first.
        assert!(state.is_on_cooldown(42, t + 2 * HOUR + 100, HOUR).await);
    }

    #[tokio::test]
    async fn dnd_flag_starts_from_default_and_toggles() {
        let state = ReplyState::new(true);
        assert!(state.dnd_enabled());

        state.set_dnd(false);
        assert!(!state.dnd_enabled());

        state.set_dnd(true);
        assert!(state.dnd_enabled());
    }
}
