use setpick_utils::*;

#[test]
fn test_from_dec_str_each_width() {
    assert_eq!(<u64 as Points>::from_dec_str("1000").unwrap(), 1000u64);
    assert_eq!(
        <u128 as Points>::from_dec_str("100000000000000000000").unwrap(),
        100_000_000_000_000_000_000u128
    );
    assert_eq!(
        <U256 as Points>::from_dec_str("340282366920938463463374607431768211456").unwrap(),
        U256::from_u128(u128::MAX) + U256::one()
    );
}

#[test]
fn test_from_dec_str_rejects_overflow() {
    assert!(<u64 as Points>::from_dec_str("18446744073709551616").is_err());
    assert!(<u64 as Points>::from_dec_str("18446744073709551615").is_ok());
}

#[test]
fn test_from_dec_str_rejects_non_digits() {
    assert!(<u64 as Points>::from_dec_str("").is_err());
    assert!(<u128 as Points>::from_dec_str("-5").is_err());
    assert!(<U256 as Points>::from_dec_str("+5").is_err());
    assert!(<U256 as Points>::from_dec_str("1e3").is_err());
}

#[test]
fn test_saturating_sum() {
    assert_eq!(u64::MAX.saturating_sum(1), u64::MAX);
    assert_eq!(5u128.saturating_sum(7), 12);
    assert_eq!(U256::MAX.saturating_sum(U256::one()), U256::MAX);
    // a saturated total still meets any threshold of the same width
    assert!(u64::MAX.saturating_sum(u64::MAX) >= u64::MAX);
}

#[test]
fn test_value_width_roundtrip() {
    for width in [ValueWidth::U64, ValueWidth::U128, ValueWidth::U256] {
        assert_eq!(width.to_string().parse::<ValueWidth>().unwrap(), width);
    }
    assert_eq!(<u64 as Points>::WIDTH, ValueWidth::U64);
    assert_eq!(ValueWidth::default(), ValueWidth::U128);
    assert!("u32".parse::<ValueWidth>().is_err());
    assert_eq!(
        dejsonify::<ValueWidth>("\"u256\"").unwrap(),
        ValueWidth::U256
    );
}
