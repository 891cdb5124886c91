/// Tests for constant values defined in src/constants.rs
use lamport_fmt::constants::{
    DEFAULT_MS_PER_SLOT, DEFAULT_TICKS_PER_SECOND, DEFAULT_TICKS_PER_SLOT,
    LAMPORT_FMT_CONFIG_RELATIVE_PATH, LAMPORTS_DECIMALS, LAMPORTS_PER_SOL, MAX_SAFE_INTEGER,
    MICRO_UNITS_DECIMALS, MICRO_UNITS_PER_WHOLE,
};

#[test]
fn test_lamports_per_sol_value() {
    assert_eq!(
        LAMPORTS_PER_SOL, 1_000_000_000,
        "LAMPORTS_PER_SOL should be exactly 1 billion (1e9)"
    );
    assert_eq!(10u64.pow(LAMPORTS_DECIMALS), LAMPORTS_PER_SOL);
}

#[test]
fn test_micro_units_value() {
    assert_eq!(MICRO_UNITS_PER_WHOLE, 1_000_000);
    assert_eq!(10u64.pow(MICRO_UNITS_DECIMALS), MICRO_UNITS_PER_WHOLE);
}

#[test]
fn test_max_safe_integer_is_exact_in_f64() {
    assert_eq!(MAX_SAFE_INTEGER, (1i64 << 53) - 1);
    assert_eq!(MAX_SAFE_INTEGER as f64 as i64, MAX_SAFE_INTEGER);
}

#[test]
fn test_slot_timing() {
    assert_eq!(DEFAULT_TICKS_PER_SECOND, 160);
    assert_eq!(DEFAULT_TICKS_PER_SLOT, 64);
    assert_eq!(DEFAULT_MS_PER_SLOT, 400);
}

#[test]
fn test_config_path_no_leading_slash() {
    assert_eq!(LAMPORT_FMT_CONFIG_RELATIVE_PATH, ".config/lamport-fmt.toml");
    assert!(
        !LAMPORT_FMT_CONFIG_RELATIVE_PATH.starts_with('/'),
        "Config path should be relative, not absolute"
    );
}
