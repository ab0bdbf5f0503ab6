pub mod errors;
pub mod log;
pub mod types;

/// Size of the default search space, candidates are drawn from `[0, SEARCH_SPACE)`.
pub const SEARCH_SPACE: u64 = 1_000_000_000;

/// Number of solution slots reported per challenge.
pub const NSOLUTIONS: usize = 8;

/// Inclusive bounds of the worker thread count.
pub const MIN_THREADS: usize = 1;
pub const MAX_THREADS: usize = 100;
