//! Exit codes returned by [`crate::run`].

/// Success, including a `check` whose move is legal.
pub const SUCCESS: i32 = 0;

/// General error, or a `check` whose move is illegal.
pub const ERROR: i32 = 2;
