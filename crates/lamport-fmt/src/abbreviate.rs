use {
    crate::{
        decimal::FixedDecimal,
        error::{FormatError, FormatResult},
    },
    std::fmt,
};

/// Enough digits to print any `f64` of at least 1 exactly.
const EXACT_FRACTION_DIGITS: usize = 64;

const BUCKETS: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

/// Result of [`abbreviate_number`]: either the untouched value or a scaled
/// value with its unit suffix.
#[derive(Debug, Clone, PartialEq)]
pub enum AbbreviatedNumber {
    Raw(f64),
    Scaled(String),
}

impl fmt::Display for AbbreviatedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbbreviatedNumber::Raw(value) => write!(f, "{value}"),
            AbbreviatedNumber::Scaled(text) => f.write_str(text),
        }
    }
}

impl PartialEq<&str> for AbbreviatedNumber {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, AbbreviatedNumber::Scaled(text) if text == other)
    }
}

impl PartialEq<f64> for AbbreviatedNumber {
    fn eq(&self, other: &f64) -> bool {
        matches!(self, AbbreviatedNumber::Raw(value) if value == other)
    }
}

/// Shortens `value` with a K/M/B/T suffix and `fixed_digits` decimals,
/// dropping trailing zeros: `1500.0` is `1.5K`, `1000.0` is `1K`. Ties round
/// up (`1250.0` is `1.3K`).
///
/// Values below 1000, negatives included, come back raw. Values of 1e15 and
/// above stay in the `T` bucket (`2e15` is `2000T`).
pub fn abbreviate_number(value: f64, fixed_digits: usize) -> FormatResult<AbbreviatedNumber> {
    if !value.is_finite() {
        return Err(FormatError::NonFinite(value));
    }

    let Some((divisor, suffix)) = BUCKETS.iter().find(|(divisor, _)| value >= *divisor) else {
        return Ok(AbbreviatedNumber::Raw(value));
    };
    if value >= 1e15 {
        tracing::debug!(value, "abbreviating beyond the largest bucket");
    }

    let exact: FixedDecimal = format!("{:.*}", EXACT_FRACTION_DIGITS, value / divisor).parse()?;
    let rounded = exact.round_dp(fixed_digits as u32).trim_trailing_zeros();
    Ok(AbbreviatedNumber::Scaled(format!("{rounded}{suffix}")))
}
