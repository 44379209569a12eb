use chrono::NaiveTime;

use crate::config::{Config, Mode};
use siesta_utils::time::is_within_window;

/// Decide whether an autoreply should fire at `now`, ignoring per-sender
/// state. The manual do-not-disturb override wins over everything; otherwise
/// `Always` replies unconditionally and `Schedule` replies only outside the
/// configured work window.
pub fn should_autoreply(config: &Config, dnd_enabled: bool, now: NaiveTime) -> bool {
    if dnd_enabled {
        return true;
    }

    match config.mode {
        Mode::Always => true,
        Mode::Schedule => !is_within_window(now, config.work_start, config.work_end),
    }
}

/// Check a sender against the ignore set, by exact numeric id or by handle.
/// Handle matching is case-insensitive; the set stores handles lowercased.
pub fn is_ignored(config: &Config, sender_id: u64, sender_handle: Option<&str>) -> bool {
    if config.ignore_users.is_empty() {
        return false;
    }

    if config.ignore_users.contains(&sender_id.to_string()) {
        return true;
    }

    sender_handle
        .map(|handle| config.ignore_users.contains(&handle.to_lowercase()))
        .unwrap_or(false)
}
