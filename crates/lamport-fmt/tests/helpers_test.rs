/// Conversion tests for lamport and micro-unit amounts
use {
    lamport_fmt::{
        BaseUnits, lamports_to_sol, lamports_to_sol_string, micro_to_whole,
        micro_to_whole_string, token_amount_to_ui,
    },
    num_bigint::BigInt,
    std::str::FromStr,
};

#[test]
fn test_lamports_to_sol_zero() {
    let result = lamports_to_sol(0);
    assert_eq!(result, 0.0, "0 lamports should convert to 0.0 SOL");
}

#[test]
fn test_lamports_to_sol_one_lamport() {
    assert_eq!(lamports_to_sol(1), 0.000000001);
}

#[test]
fn test_lamports_to_sol_one_sol() {
    let result = lamports_to_sol(1_000_000_000);
    assert_eq!(result, 1.0, "1 billion lamports should be exactly 1.0 SOL");
}

#[test]
fn test_lamports_to_sol_negative() {
    assert_eq!(lamports_to_sol(-5_000_000_000i64), -5.0);
    assert_eq!(
        lamports_to_sol(BigInt::from(-5_000_000_000i64)),
        -5.0,
        "sign must survive the digit-splitting path"
    );
}

#[test]
fn test_micro_to_whole_one() {
    assert_eq!(micro_to_whole(1_000_000), 1.0);
    assert_eq!(micro_to_whole(BigInt::from(1_000_000)), 1.0);
}

#[test]
fn test_micro_to_whole_beyond_safe_integer() {
    // 2^53 + 1 micro-units, not representable as an f64 integer
    let micro = 9_007_199_254_740_993i64;
    let expected: f64 = "9007199254.740993".parse().unwrap();

    assert_eq!(micro_to_whole(micro), expected);
    assert_eq!(micro_to_whole(BigInt::from(micro)), expected);
    assert_eq!(micro_to_whole(-micro), -expected);
}

#[test]
fn test_micro_to_whole_big_int_beyond_u64() {
    let micro = BigInt::from_str("123456789012345678901234").unwrap();
    let expected: f64 = "123456789012345678.901234".parse().unwrap();
    assert_eq!(micro_to_whole(micro), expected);
}

#[test]
fn test_big_and_native_agree() {
    for lamports in [0i64, 1, 999, 500_000_000, 12_345_678_900, -7] {
        assert_eq!(
            lamports_to_sol(lamports),
            lamports_to_sol(BigInt::from(lamports)),
            "native and big paths disagree for {lamports}"
        );
    }
}

#[test]
fn test_lamports_to_sol_big_int_beyond_u64() {
    let lamports = BigInt::from_str("123456789012345678901234567").unwrap();
    let expected: f64 = "123456789012345678.901234567".parse().unwrap();
    assert_eq!(lamports_to_sol(BaseUnits::from(lamports)), expected);
}

#[test]
fn test_lamports_to_sol_round_trips_up_to_1e18() {
    // deterministic spread over [0, 10^18]
    let mut n: u64 = 0x9E37_79B9_7F4A_7C15;
    let mut samples = vec![0u64, 1, 999_999_999, 10u64.pow(18), 10u64.pow(18) - 1];
    for _ in 0..1_000 {
        n = n.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        samples.push(n % (10u64.pow(18) + 1));
    }

    for lamports in samples {
        let back = lamports_to_sol(lamports) * 1e9;
        let tolerance = (lamports as f64 * 2.0 * f64::EPSILON).max(1e-6);
        assert!(
            (back - lamports as f64).abs() <= tolerance,
            "lamports_to_sol({lamports}) * 1e9 = {back}"
        );
    }
}

#[test]
fn test_lamports_to_sol_table_driven() {
    let test_cases = vec![
        (0u64, 0.0),
        (1, 0.000000001),
        (1_000, 0.000001),
        (1_000_000, 0.001),
        (1_000_000_000, 1.0),
        (2_500_000_000, 2.5),
        (10_000_000_000, 10.0),
    ];

    for (lamports, expected_sol) in test_cases {
        let result = lamports_to_sol(lamports);
        assert!(
            (result - expected_sol).abs() < 1e-10,
            "lamports_to_sol({}) = {}, expected {}",
            lamports,
            result,
            expected_sol
        );
    }
}

#[test]
fn test_token_amount_to_ui() {
    assert_eq!(token_amount_to_ui(1_500_000, 6), 1.5);
    assert_eq!(token_amount_to_ui(42, 0), 42.0);
}

#[test]
fn test_display_strings() {
    assert_eq!(lamports_to_sol_string(u64::MAX, 9), "18,446,744,073.709551615");
    assert_eq!(lamports_to_sol_string(1, 9), "0.000000001");
    assert_eq!(lamports_to_sol_string(1, 6), "0");
    assert_eq!(micro_to_whole_string(1_000_000_000_000i64, 6), "1,000,000");
}
