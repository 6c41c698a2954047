// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// A non-negative amount in whole currency units.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct Money(i64);

impl Money {
    pub const ZERO: Self = Self(0);

    /// Creates an amount, rejecting negative values.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NegativeAmount` if `value` is below zero.
    pub const fn new(field: &'static str, value: i64) -> Result<Self, DomainError> {
        if value < 0 {
            return Err(DomainError::NegativeAmount { field, value });
        }
        Ok(Self(value))
    }

    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Adds two amounts.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AmountOverflow` if the sum does not fit.
    pub const fn checked_add(self, other: Self) -> Result<Self, DomainError> {
        match self.0.checked_add(other.0) {
            Some(sum) => Ok(Self(sum)),
            None => Err(DomainError::AmountOverflow {
                left: self.0,
                right: other.0,
            }),
        }
    }
}

impl TryFrom<i64> for Money {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new("amount", value)
    }
}

impl From<Money> for i64 {
    fn from(value: Money) -> Self {
        value.0
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
