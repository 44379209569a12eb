use std::collections::HashSet;
use std::env;

use anyhow::anyhow;
use chrono::NaiveTime;
use tracing::warn;

use siesta_utils::time::parse_hhmm;

pub const DEFAULT_REPLY_TEXT: &str = "I'm away right now and will get back to you later.";
pub const DEFAULT_WORK_START: &str = "10:00";
pub const DEFAULT_WORK_END: &str = "19:00";
pub const DEFAULT_COOLDOWN_HOURS: i64 = 12;

/// Operating mode for the auto-responder.
///
/// `Schedule` replies only outside the configured work window; `Always`
/// replies whenever a qualifying message arrives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Always,
    Schedule,
}

impl Mode {
    /// Parse a mode string. Unrecognized values fall open to `Always` so a
    /// typo in the config never silently disables the responder.
    pub fn parse(raw: &str) -> Mode {
        match raw.trim().to_ascii_lowercase().as_str() {
            "always" => Mode::Always,
            "schedule" => Mode::Schedule,
            other => {
                warn!(mode = %other, "unrecognized MODE value; falling back to always");
                Mode::Always
            }
        }
    }
}

/// Immutable process-wide configuration, loaded once at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub reply_text: String,
    pub mode: Mode,
    pub work_start: NaiveTime,
    pub work_end: NaiveTime,
    pub cooldown_secs: i64,
    pub ignore_users: HashSet<String>,
    pub dnd_default: bool,
}

impl Config {
    /// Build the configuration from environment variables.
    ///
    /// Malformed `WORK_START`/`WORK_END` values are fatal: running with an
    /// undefined work window would make the schedule mode meaningless.
    pub fn from_env() -> anyhow::Result<Config> {
        let reply_text = env_or("AUTO_REPLY_TEXT", DEFAULT_REPLY_TEXT);
        let mode = Mode::parse(&env_or("MODE", "schedule"));

        let work_start_raw = env_or("WORK_START", DEFAULT_WORK_START);
        let work_start = parse_hhmm(&work_start_raw)
            .ok_or_else(|| anyhow!("WORK_START must be HH:MM, got `{work_start_raw}`"))?;

        let work_end_raw = env_or("WORK_END", DEFAULT_WORK_END);
        let work_end = parse_hhmm(&work_end_raw)
            .ok_or_else(|| anyhow!("WORK_END must be HH:MM, got `{work_end_raw}`"))?;

        let cooldown_secs =
            parse_cooldown_hours(env::var("REPLY_COOLDOWN_HOURS").ok().as_deref()) * 3600;

        let ignore_users = parse_ignore_list(&env_or("IGNORE_USERS", ""));

        let dnd_default = env_or("DND_DEFAULT", "off").trim().eq_ignore_ascii_case("on");

        Ok(Config {
            reply_text,
            mode,
            work_start,
            work_end,
            cooldown_secs,
            ignore_users,
            dnd_default,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}

/// Parse the per-user cooldown in hours. Missing, unparseable, or
/// non-positive values fall back to the default.
pub fn parse_cooldown_hours(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return DEFAULT_COOLDOWN_HOURS;
    };

    match raw.trim().parse::<i64>() {
        Ok(hours) if hours > 0 => hours,
        _ => {
            warn!(
                value = %raw,
                "REPLY_COOLDOWN_HOURS must be a positive integer; using default"
            );
            DEFAULT_COOLDOWN_HOURS
        }
    }
}

/// Parse the comma-separated ignore list into a lookup set.
///
/// Entries are trimmed; handles are stored lowercased with any leading `@`
/// stripped, so both `@Bob` and `bob` in the config match the same user.
/// Numeric ids pass through unchanged.
pub fn parse_ignore_list(raw: &str) -> HashSet<String> {
    raw.split(',')
        .map(|entry| entry.trim().trim_start_matches('@').to_lowercase())
        .filter(|entry| !entry.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_COOLDOWN_HOURS, Mode, parse_cooldown_hours, parse_ignore_list};

    #[test]
    fn parses_known_modes() {
        assert_eq!(Mode::parse("always"), Mode::Always);
        assert_eq!(Mode::parse("schedule"), Mode::Schedule);
        assert_eq!(Mode::parse(" Schedule "), Mode::Schedule);
    }

    #[test]
    fn unknown_mode_falls_open_to_always() {
        assert_eq!(Mode::parse("weekend"), Mode::Always);
        assert_eq!(Mode::parse(""), Mode::Always);
    }

    #[test]
    fn cooldown_accepts_positive_hours_only() {
        assert_eq!(parse_cooldown_hours(Some("1")), 1);
        assert_eq!(parse_cooldown_hours(Some(" 48 ")), 48);
        assert_eq!(parse_cooldown_hours(Some("0")), DEFAULT_COOLDOWN_HOURS);
        assert_eq!(parse_cooldown_hours(Some("-3")), DEFAULT_COOLDOWN_HOURS);
        assert_eq!(parse_cooldown_hours(Some("soon")), DEFAULT_COOLDOWN_HOURS);
        assert_eq!(parse_cooldown_hours(None), DEFAULT_COOLDOWN_HOURS);
    }

    #[test]
    fn ignore_list_is_trimmed_and_lowercased() {
        let set = parse_ignore_list("12345, @Bob , alice,, ");
        assert_eq!(set.len(), 3);
        assert!(set.contains("12345"));
        assert!(set.contains("bob"));
        assert!(set.contains("alice"));
    }

    #[test]
    fn empty_ignore_list_parses_to_empty_set() {
        assert!(parse_ignore_list("").is_empty());
        assert!(parse_ignore_list(" , ,").is_empty());
    }
}
