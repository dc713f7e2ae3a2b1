/// Smallest index in the sequence domain.
pub const FIRST_INDEX: u64 = 1;

/// Harness ceiling for the naive strategy. Indices above this are skipped
/// because naive evaluation grows exponentially.
pub const NAIVE_THRESHOLD: u64 = 50;

/// Default recursion depth ceiling for the recursive strategies.
/// Fits comfortably inside a 2MB thread stack in debug builds.
pub const DEFAULT_MAX_DEPTH: usize = 1_000;

/// Highest depth ceiling the CLI accepts. Deeper recursion can overflow an
/// 8MB main-thread stack before `ResourceExhausted` is reached, which
/// aborts the process. Library callers setting `Limits::max_depth` directly
/// must stay under their own thread's stack budget.
pub const MAX_DEPTH_CEILING: usize = 10_000;

/// Default benchmark sweep.
pub const DEFAULT_SIZES: [u64; 10] = [
    1_000, 2_000, 3_000, 4_000, 5_000, 6_000, 7_000, 8_000, 9_000, 10_000,
];
