//! Currency amount value object.

use core::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// A non-negative currency amount with 2-digit precision.
///
/// Stored in minor units (e.g. cents) so aggregate sums stay exact. The
/// backend transmits amounts as decimal JSON numbers (`250.0`), while form
/// input arrives as text (`"250.00"`); both convert through this type.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    /// Build an amount from minor units (e.g. cents). Negative input is a
    /// validation error; claims never carry negative amounts.
    pub fn from_minor_units(minor: i64) -> DomainResult<Self> {
        if minor < 0 {
            return Err(DomainError::validation("amount cannot be negative"));
        }
        Ok(Self(minor))
    }

    pub fn minor_units(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    /// Addition that pins at `i64::MAX` minor units instead of wrapping.
    /// Used by aggregate sums, which must not fail a render.
    pub fn saturating_add(self, other: Amount) -> Amount {
        Amount(self.0.saturating_add(other.0))
    }

    /// Convert from a decimal number as received on the wire.
    ///
    /// The backend stores 2-digit amounts, so rounding to the nearest minor
    /// unit is lossless for well-formed data.
    pub fn from_decimal(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::validation("amount must be a finite number"));
        }
        if value < 0.0 {
            return Err(DomainError::validation("amount cannot be negative"));
        }
        let minor = (value * 100.0).round();
        if minor > i64::MAX as f64 {
            return Err(DomainError::validation("amount out of range"));
        }
        Ok(Self(minor as i64))
    }

    pub fn as_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl ValueObject for Amount {}

impl core::fmt::Display for Amount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Amount {
    type Err = DomainError;

    /// Parse decimal text such as `"250"`, `"250.5"` or `"250.00"`.
    ///
    /// Rejects negatives, more than two fraction digits, and anything that
    /// is not a plain decimal literal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (whole, frac) = match s.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (s, ""),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::validation(format!("invalid amount: {s:?}")));
        }
        if frac.len() > 2 || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::validation(format!("invalid amount: {s:?}")));
        }

        let whole: i64 = whole
            .parse()
            .map_err(|_| DomainError::validation(format!("invalid amount: {s:?}")))?;

        let mut minor_frac: i64 = 0;
        if !frac.is_empty() {
            minor_frac = frac
                .parse::<i64>()
                .map_err(|_| DomainError::validation(format!("invalid amount: {s:?}")))?;
            if frac.len() == 1 {
                minor_frac *= 10;
            }
        }

        whole
            .checked_mul(100)
            .and_then(|m| m.checked_add(minor_frac))
            .map(Amount)
            .ok_or_else(|| DomainError::validation("amount out of range"))
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_decimal())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Amount::from_decimal(n).map_err(D::Error::custom),
            Raw::Text(s) => s.parse().map_err(D::Error::custom),
        }
    }
}
