// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Human-readable ticket identifiers.
//!
//! A service code has the shape `SRV-YYYYMMDD-NNN`: a fixed prefix, the
//! calendar day the ticket was created, and a per-day ordinal starting
//! at 1. The ordinal is zero-padded to at least three digits and widens
//! past 999 rather than wrapping.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, Month};

const PREFIX: &str = "SRV";
const MIN_ORDINAL_WIDTH: usize = 3;

/// A parsed service code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ServiceCode {
    day: Date,
    ordinal: u32,
}

impl ServiceCode {
    /// Builds the code for the `ordinal`-th ticket of `day`.
    ///
    /// # Errors
    ///
    /// Returns an error if `ordinal` is zero.
    pub fn new(day: Date, ordinal: u32) -> Result<Self, DomainError> {
        if ordinal == 0 {
            return Err(DomainError::InvalidServiceCode(String::from(
                "ordinal must start at 1",
            )));
        }
        Ok(Self { day, ordinal })
    }
}

/// Returns the `YYYYMMDD` key used to group tickets by creation day.
#[must_use]
pub fn day_key(day: Date) -> String {
    format!(
        "{:04}{:02}{:02}",
        day.year(),
        u8::from(day.month()),
        day.day()
    )
}

fn parse_day_key(value: &str) -> Result<Date, DomainError> {
    let invalid = || DomainError::InvalidServiceCode(format!("invalid date segment '{value}'"));

    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let year: i32 = value[0..4].parse().map_err(|_| invalid())?;
    let month: u8 = value[4..6].parse().map_err(|_| invalid())?;
    let day: u8 = value[6..8].parse().map_err(|_| invalid())?;
    let month: Month = Month::try_from(month).map_err(|_| invalid())?;

    Date::from_calendar_date(year, month, day).map_err(|_| invalid())
}

impl std::fmt::Display for ServiceCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{PREFIX}-{}-{:0width$}",
            day_key(self.day),
            self.ordinal,
            width = MIN_ORDINAL_WIDTH
        )
    }
}

impl FromStr for ServiceCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('-');
        let (Some(prefix), Some(day), Some(ordinal), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(DomainError::InvalidServiceCode(format!(
                "'{s}' is not of the form {PREFIX}-YYYYMMDD-NNN"
            )));
        };

        if prefix != PREFIX {
            return Err(DomainError::InvalidServiceCode(format!(
                "'{s}' does not start with {PREFIX}"
            )));
        }

        if ordinal.len() < MIN_ORDINAL_WIDTH || !ordinal.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidServiceCode(format!(
                "invalid ordinal segment '{ordinal}'"
            )));
        }
        let ordinal: u32 = ordinal.parse().map_err(|_| {
            DomainError::InvalidServiceCode(format!("invalid ordinal segment '{ordinal}'"))
        })?;

        let code: Self = Self::new(parse_day_key(day)?, ordinal)?;

        // Only the canonical rendering is accepted, so `SRV-20241201-0001`
        // and `SRV-20241201-001` never name the same ticket.
        if code.to_string() != s {
            return Err(DomainError::InvalidServiceCode(format!(
                "'{s}' is not in canonical form"
            )));
        }

        Ok(code)
    }
}

impl TryFrom<String> for ServiceCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ServiceCode> for String {
    fn from(value: ServiceCode) -> Self {
        value.to_string()
    }
}
