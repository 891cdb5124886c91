use {
    crate::{
        constants::{LAMPORTS_DECIMALS, LAMPORTS_PER_SOL, MAX_SAFE_INTEGER, MICRO_UNITS_DECIMALS},
        decimal::FixedDecimal,
        error::{FormatError, FormatResult},
    },
    num_bigint::{BigInt, BigUint},
    num_format::{Locale, ToFormattedString},
    std::fmt,
};

/// Default fraction digits shown for lamport amounts.
pub const DEFAULT_COARSE_FRACTION_DIGITS: u32 = LAMPORTS_DECIMALS;
/// Default fraction digits shown for micro-unit amounts.
pub const DEFAULT_FINE_FRACTION_DIGITS: u32 = MICRO_UNITS_DECIMALS;

/// Integer count of the smallest indivisible unit of a currency.
///
/// Small values stay native so the common case converts with a single float
/// division; anything that does not fit an `i64` is carried as a [`BigInt`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseUnits {
    Native(i64),
    Big(BigInt),
}

impl BaseUnits {
    /// The native value, if an `f64` holds it exactly.
    fn float_safe(&self) -> Option<i64> {
        match self {
            BaseUnits::Native(n) if n.unsigned_abs() <= MAX_SAFE_INTEGER as u64 => Some(*n),
            _ => None,
        }
    }

    pub fn to_big_int(&self) -> BigInt {
        match self {
            BaseUnits::Native(n) => BigInt::from(*n),
            BaseUnits::Big(n) => n.clone(),
        }
    }

    pub fn to_fixed(&self, decimals: u32) -> FixedDecimal {
        FixedDecimal::new(self.to_big_int(), decimals)
    }
}

impl From<i64> for BaseUnits {
    fn from(value: i64) -> Self {
        BaseUnits::Native(value)
    }
}

impl From<i32> for BaseUnits {
    fn from(value: i32) -> Self {
        BaseUnits::Native(value.into())
    }
}

impl From<u32> for BaseUnits {
    fn from(value: u32) -> Self {
        BaseUnits::Native(value.into())
    }
}

impl From<u64> for BaseUnits {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(n) => BaseUnits::Native(n),
            Err(_) => BaseUnits::Big(value.into()),
        }
    }
}

impl From<i128> for BaseUnits {
    fn from(value: i128) -> Self {
        match i64::try_from(value) {
            Ok(n) => BaseUnits::Native(n),
            Err(_) => BaseUnits::Big(value.into()),
        }
    }
}

impl From<u128> for BaseUnits {
    fn from(value: u128) -> Self {
        match i64::try_from(value) {
            Ok(n) => BaseUnits::Native(n),
            Err(_) => BaseUnits::Big(value.into()),
        }
    }
}

impl From<BigInt> for BaseUnits {
    fn from(value: BigInt) -> Self {
        BaseUnits::Big(value)
    }
}

impl From<BigUint> for BaseUnits {
    fn from(value: BigUint) -> Self {
        BaseUnits::Big(value.into())
    }
}

/// Converts base units into whole units with `decimals` fraction digits.
///
/// Float-safe native values take one division. Everything else goes through
/// [`FixedDecimal::to_f64`], which never divides in floating point.
pub fn to_whole_units(amount: impl Into<BaseUnits>, decimals: u32) -> f64 {
    let amount = amount.into();
    match amount.float_safe() {
        // 10^15 is the largest power of ten below 2^53
        Some(n) if decimals <= 15 => n as f64 / 10u64.pow(decimals) as f64,
        _ => amount.to_fixed(decimals).to_f64(),
    }
}

/// Lamports to SOL (scale 10^9), sign preserved.
pub fn lamports_to_sol(lamports: impl Into<BaseUnits>) -> f64 {
    to_whole_units(lamports, LAMPORTS_DECIMALS)
}

/// Micro-units to whole units (scale 10^6).
pub fn micro_to_whole(amount: impl Into<BaseUnits>) -> f64 {
    to_whole_units(amount, MICRO_UNITS_DECIMALS)
}

/// UI amount of a token account balance given its mint decimals.
pub fn token_amount_to_ui(amount: u64, decimals: u8) -> f64 {
    to_whole_units(amount, decimals.into())
}

/// Approximate inverse of [`lamports_to_sol`]. Negative and NaN input
/// saturates to zero.
pub fn sol_to_lamports(sol: f64) -> u64 {
    (sol * LAMPORTS_PER_SOL as f64) as u64
}

/// Exact inverse of the string conversions: `"1.5"` at scale 9 is
/// `1_500_000_000`.
pub fn parse_whole_units(text: &str, decimals: u32) -> FormatResult<BigInt> {
    let value = FixedDecimal::parse_with_scale(text, decimals)?;
    Ok(value.mantissa().clone())
}

/// `amount` with exactly `decimals` fraction digits and no grouping.
pub fn real_number_string(amount: u64, decimals: u8) -> String {
    FixedDecimal::new(amount, decimals.into()).to_string()
}

/// Like [`real_number_string`] without trailing zeros or a dangling point.
pub fn real_number_string_trimmed(amount: u64, decimals: u8) -> String {
    FixedDecimal::new(amount, decimals.into())
        .trim_trailing_zeros()
        .to_string()
}

/// Renders amounts with locale-aware digit grouping.
#[derive(Debug, Clone, Copy)]
pub struct AmountFormatter {
    locale: Locale,
}

impl Default for AmountFormatter {
    fn default() -> Self {
        Self { locale: Locale::en }
    }
}

impl AmountFormatter {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn from_locale_name(name: &str) -> FormatResult<Self> {
        let locale =
            Locale::from_name(name).map_err(|_| FormatError::UnknownLocale(name.to_string()))?;
        Ok(Self { locale })
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Groups the integer digits and shows at most `max_fraction_digits`
    /// fraction digits, rounded half away from zero with trailing zeros
    /// dropped. A value that rounds to zero is shown unsigned.
    pub fn format_decimal(&self, value: &FixedDecimal, max_fraction_digits: u32) -> String {
        let rounded = value.round_dp(max_fraction_digits).trim_trailing_zeros();
        let (_, fraction) = rounded.split_digits();
        let integer = rounded.mantissa().magnitude() / BigUint::from(10u32).pow(rounded.scale());

        let mut out = String::new();
        if rounded.is_negative() {
            out.push_str(self.locale.minus_sign());
        }
        out.push_str(&integer.to_formatted_string(&self.locale));
        if !fraction.is_empty() {
            out.push_str(self.locale.decimal());
            out.push_str(&fraction);
        }
        out
    }

    pub fn whole_units_string(
        &self,
        amount: impl Into<BaseUnits>,
        decimals: u32,
        max_fraction_digits: u32,
    ) -> String {
        self.format_decimal(&amount.into().to_fixed(decimals), max_fraction_digits)
    }

    pub fn lamports_to_sol_string(
        &self,
        lamports: impl Into<BaseUnits>,
        max_fraction_digits: u32,
    ) -> String {
        self.whole_units_string(lamports, LAMPORTS_DECIMALS, max_fraction_digits)
    }

    pub fn micro_to_whole_string(
        &self,
        amount: impl Into<BaseUnits>,
        max_fraction_digits: u32,
    ) -> String {
        self.whole_units_string(amount, MICRO_UNITS_DECIMALS, max_fraction_digits)
    }
}

/// Lamports as a display string in the `en` locale.
pub fn lamports_to_sol_string(lamports: impl Into<BaseUnits>, max_fraction_digits: u32) -> String {
    AmountFormatter::default().lamports_to_sol_string(lamports, max_fraction_digits)
}

/// Micro-units as a display string in the `en` locale.
pub fn micro_to_whole_string(amount: impl Into<BaseUnits>, max_fraction_digits: u32) -> String {
    AmountFormatter::default().micro_to_whole_string(amount, max_fraction_digits)
}

/// Lamport balance rendered as `◎1.000000000`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sol(pub u64);

impl Sol {
    fn write_in_sol(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "◎{}.{:09}",
            self.0 / LAMPORTS_PER_SOL,
            self.0 % LAMPORTS_PER_SOL
        )
    }
}

impl fmt::Display for Sol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_in_sol(f)
    }
}

impl fmt::Debug for Sol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_in_sol(f)
    }
}
