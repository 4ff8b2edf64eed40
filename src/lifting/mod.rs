mod cache;
mod table;

pub use cache::TableCache;
pub use table::LiftingTable;

/// Widest row a lifting table enumerates: `2^26` states per level.
pub const MAX_LIFTING_SIZE: usize = 26;

/// Default upper bound on queried steps; any `u64` step count is below it.
pub const DEFAULT_MAX_STEPS: u128 = 1 << 64;

/// Number of levels needed for steps below `max_steps`: `ceil(log2(max_steps)) + 1`.
pub fn level_count(max_steps: u128) -> usize {
    let ceil_log2 = if max_steps <= 1 {
        0
    } else {
        u128::BITS - (max_steps - 1).leading_zeros()
    };
    ceil_log2 as usize + 1
}
