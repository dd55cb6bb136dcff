//! Exit codes shared by every command.

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// Any failure: bad arguments, unreadable input, invalid game state.
pub const ERROR: i32 = 2;
