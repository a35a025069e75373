// Configuration constants for the solver module
pub const DEFAULT_MAX_CALLS: u64 = 3_000_000;
pub const MIN_NUMBERS: usize = 2;
