/// Single source of truth for the message-command prefix.
pub const COMMAND_PREFIX: char = '/';
/// Pure time-of-day parsing and work-window helpers.
pub mod time;
