/// Process exit codes for the bm CLI.
///
/// The shell contract is deliberately coarse: 0 for success, 1 for any
/// failure, so `cd "$(bm go name)"` can branch on the status alone.
///
/// Successful termination
pub const SUCCESS: i32 = 0;

/// Any command failure: bad usage, validation error, storage fault
pub const FAILURE: i32 = 1;
