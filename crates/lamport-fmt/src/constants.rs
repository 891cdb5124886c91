pub use solana_clock::{DEFAULT_MS_PER_SLOT, DEFAULT_TICKS_PER_SECOND, DEFAULT_TICKS_PER_SLOT};

/// Coarse scale: lamports in one SOL.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;
pub const LAMPORTS_DECIMALS: u32 = 9;

/// Fine scale: micro-units in one whole unit.
pub const MICRO_UNITS_PER_WHOLE: u64 = 1_000_000;
pub const MICRO_UNITS_DECIMALS: u32 = 6;

/// Largest integer an `f64` represents exactly (2^53 - 1).
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

pub const DEFAULT_LOCALE: &str = "en";
pub const DEFAULT_LARGEST_UNITS: usize = 3;

pub const LAMPORT_FMT_CONFIG_RELATIVE_PATH: &str = ".config/lamport-fmt.toml";
