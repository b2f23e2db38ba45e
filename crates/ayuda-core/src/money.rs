// Rust guideline compliant 2026-02-06

//! Peso amounts stored as integer centavos.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

/// A non-negative peso amount in centavos.
///
/// Displays as `₱3,000` for whole pesos and `₱3,000.50` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(u64);

impl Amount {
    /// Zero pesos.
    pub const ZERO: Amount = Amount(0);

    /// Creates an amount from centavos.
    #[must_use]
    pub const fn from_centavos(centavos: u64) -> Self {
        Self(centavos)
    }

    /// Creates an amount from whole pesos.
    #[must_use]
    pub const fn from_pesos(pesos: u64) -> Self {
        Self(pesos * 100)
    }

    /// Returns the amount in centavos.
    #[must_use]
    pub const fn centavos(self) -> u64 {
        self.0
    }

    /// Returns the whole-peso part of the amount.
    #[must_use]
    pub const fn pesos(self) -> u64 {
        self.0 / 100
    }

    /// Adds two amounts, returning `None` on overflow.
    #[must_use]
    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, other: Amount) -> Amount {
        Amount(self.0.saturating_add(other.0))
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, |acc, amount| acc + amount)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.pesos().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        let cents = self.0 % 100;
        if cents == 0 {
            write!(f, "₱{}", grouped)
        } else {
            write!(f, "₱{}.{:02}", grouped, cents)
        }
    }
}

impl FromStr for Amount {
    type Err = Error;

    /// Parses `₱3,000`, `3000`, `PHP 3,000.50` and similar forms.
    fn from_str(value: &str) -> Result<Self> {
        let invalid = || Error::InvalidAmount(value.to_string());

        let trimmed = value.trim();
        let trimmed = trimmed
            .strip_prefix('₱')
            .or_else(|| trimmed.strip_prefix("PHP"))
            .unwrap_or(trimmed)
            .trim();
        if trimmed.is_empty() {
            return Err(invalid());
        }

        let (whole, fraction) = match trimmed.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (trimmed, None),
        };

        let digits = ungroup(whole).ok_or_else(invalid)?;
        let pesos: u64 = digits.parse().map_err(|_| invalid())?;

        let centavos = match fraction {
            None => 0,
            Some(f) if f.len() == 1 || f.len() == 2 => {
                if !f.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                let parsed: u64 = f.parse().map_err(|_| invalid())?;
                if f.len() == 1 {
                    parsed * 10
                } else {
                    parsed
                }
            }
            Some(_) => return Err(invalid()),
        };

        pesos
            .checked_mul(100)
            .and_then(|c| c.checked_add(centavos))
            .map(Amount)
            .ok_or_else(invalid)
    }
}

/// Strips thousands separators from the whole-peso part. Separators are
/// optional, but when present the first group holds 1 to 3 digits and every
/// later group exactly 3.
fn ungroup(whole: &str) -> Option<String> {
    let mut groups = whole.split(',');
    let first = groups.next()?;
    if first.is_empty() || !first.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let grouped = whole.contains(',');
    if grouped && first.len() > 3 {
        return None;
    }

    let mut digits = first.to_string();
    for group in groups {
        if group.len() != 3 || !group.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        digits.push_str(group);
    }
    Some(digits)
}
