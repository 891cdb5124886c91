//! Exact fixed-point decimal used by every amount conversion.
//!
//! A [`FixedDecimal`] is an arbitrary-precision integer mantissa together with
//! a scale, the number of decimal digits that sit to the right of the point.
//! `FixedDecimal::new(1_500_000_000, 9)` is `1.5`. Nothing in here divides by
//! the scale in floating point: conversions split the base-10 digit string of
//! the mantissa instead, so large magnitudes keep every digit until the final
//! (correctly rounded) string-to-float parse.

use {
    crate::error::{FormatError, FormatResult},
    num_bigint::{BigInt, BigUint, Sign},
    num_traits::{Signed, Zero},
    std::{fmt, str::FromStr},
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FixedDecimal {
    mantissa: BigInt,
    scale: u32,
}

impl FixedDecimal {
    pub fn new(mantissa: impl Into<BigInt>, scale: u32) -> Self {
        Self {
            mantissa: mantissa.into(),
            scale,
        }
    }

    pub fn zero(scale: u32) -> Self {
        Self::new(BigInt::zero(), scale)
    }

    pub fn mantissa(&self) -> &BigInt {
        &self.mantissa
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.mantissa.is_negative()
    }

    /// Splits the magnitude into its integer digits and exactly `scale`
    /// fraction digits. The sign is not part of either string.
    ///
    /// The digit string is left-padded to `scale + 1` characters first so the
    /// integer part is never empty: `1` at scale 9 becomes `("0", "000000001")`.
    pub fn split_digits(&self) -> (String, String) {
        let digits = self.mantissa.magnitude().to_str_radix(10);
        let scale = self.scale as usize;
        let padded = format!("{digits:0>width$}", width = scale + 1);
        let (integer, fraction) = padded.split_at(padded.len() - scale);
        (integer.to_string(), fraction.to_string())
    }

    /// Nearest `f64` to the exact value.
    ///
    /// The magnitude is parsed from its `"{integer}.{fraction}"` rendering and
    /// the sign re-applied afterwards, so a zero-padded string never has to
    /// carry a sign.
    pub fn to_f64(&self) -> f64 {
        let (integer, fraction) = self.split_digits();
        let text = if fraction.is_empty() {
            integer
        } else {
            format!("{integer}.{fraction}")
        };
        // digit-only text always parses; overflow saturates to infinity
        let magnitude = text.parse::<f64>().unwrap_or(f64::NAN);
        if self.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Rounds to at most `digits` fraction digits, half away from zero.
    /// Returns an unchanged copy when the value already fits.
    pub fn round_dp(&self, digits: u32) -> Self {
        if digits >= self.scale {
            return self.clone();
        }
        let divisor = BigUint::from(10u32).pow(self.scale - digits);
        let magnitude = self.mantissa.magnitude();
        let mut quotient = magnitude / &divisor;
        let remainder = magnitude % &divisor;
        if remainder * 2u32 >= divisor {
            quotient += 1u32;
        }
        Self {
            mantissa: BigInt::from_biguint(self.sign(), quotient),
            scale: digits,
        }
    }

    /// Drops trailing zero fraction digits: `1.500` becomes `1.5`, `2.000`
    /// becomes `2` (scale 0).
    pub fn trim_trailing_zeros(&self) -> Self {
        let ten = BigInt::from(10u32);
        let mut mantissa = self.mantissa.clone();
        let mut scale = self.scale;
        while scale > 0 && !mantissa.is_zero() && (&mantissa % &ten).is_zero() {
            mantissa /= &ten;
            scale -= 1;
        }
        if mantissa.is_zero() {
            scale = 0;
        }
        Self { mantissa, scale }
    }

    /// Widens the scale without changing the value. Narrowing is refused
    /// because it would drop digits; use [`FixedDecimal::round_dp`] for that.
    pub fn rescale(&self, scale: u32) -> FormatResult<Self> {
        if scale < self.scale {
            let trimmed = self.trim_trailing_zeros();
            if trimmed.scale > scale {
                return Err(FormatError::ExcessPrecision {
                    digits: trimmed.scale as usize,
                    scale,
                });
            }
            return trimmed.rescale(scale);
        }
        let factor = BigInt::from(10u32).pow(scale - self.scale);
        Ok(Self {
            mantissa: &self.mantissa * factor,
            scale,
        })
    }

    /// Parses a plain decimal (`"-12.5"`, `"0.000000001"`, `"7"`) into a
    /// value with exactly `scale` fraction digits.
    pub fn parse_with_scale(text: &str, scale: u32) -> FormatResult<Self> {
        text.parse::<FixedDecimal>()?.rescale(scale)
    }

    fn sign(&self) -> Sign {
        self.mantissa.sign()
    }
}

impl FromStr for FixedDecimal {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FormatError::InvalidAmount(s.to_string());
        let trimmed = s.trim();

        let (negative, unsigned) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            Some(_) => (false, trimmed),
            None => return Err(invalid()),
        };

        let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        if integer.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !integer.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let digits = format!("{integer}{fraction}");
        let magnitude = BigUint::parse_bytes(digits.as_bytes(), 10).ok_or_else(invalid)?;
        let sign = if negative { Sign::Minus } else { Sign::Plus };
        Ok(Self {
            mantissa: BigInt::from_biguint(sign, magnitude),
            scale: fraction.len() as u32,
        })
    }
}

impl fmt::Display for FixedDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match f.precision() {
            Some(precision) => self
                .round_dp(precision as u32)
                .rescale(precision as u32)
                .map_err(|_| fmt::Error)?,
            None => self.clone(),
        };
        let (integer, fraction) = value.split_digits();
        if value.is_negative() {
            f.write_str("-")?;
        }
        f.write_str(&integer)?;
        if !fraction.is_empty() {
            write!(f, ".{fraction}")?;
        }
        Ok(())
    }
}
