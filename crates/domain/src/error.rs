// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{Role, TicketStatus};

fn wire_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<&str>>().join(", ")
}

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// User name is empty or invalid.
    InvalidName(String),
    /// Email address is empty or malformed.
    InvalidEmail(String),
    /// Password is empty.
    InvalidPassword(String),
    /// Role string does not name a known role.
    InvalidRole(String),
    /// Status string does not name a known ticket status.
    InvalidStatus(String),
    /// Customer name is empty.
    InvalidCustomerName(String),
    /// Item type is empty.
    InvalidItemType(String),
    /// A monetary amount was negative.
    NegativeAmount {
        /// The field that carried the amount.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },
    /// Adding two amounts overflowed.
    AmountOverflow {
        /// The left-hand amount.
        left: i64,
        /// The right-hand amount.
        right: i64,
    },
    /// A service code could not be parsed or built.
    InvalidServiceCode(String),
    /// A timestamp could not be formatted or parsed.
    InvalidTimestamp(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidEmail(msg) => write!(f, "Invalid email: {msg}"),
            Self::InvalidPassword(msg) => write!(f, "Invalid password: {msg}"),
            Self::InvalidRole(value) => write!(
                f,
                "Invalid role: '{value}' (expected one of {})",
                wire_names(Role::ALL.iter().map(Role::as_str))
            ),
            Self::InvalidStatus(value) => write!(
                f,
                "Invalid status: '{value}' (expected one of {})",
                wire_names(TicketStatus::ALL.iter().map(TicketStatus::as_str))
            ),
            Self::InvalidCustomerName(msg) => write!(f, "Invalid customer name: {msg}"),
            Self::InvalidItemType(msg) => write!(f, "Invalid item type: {msg}"),
            Self::NegativeAmount { field, value } => {
                write!(f, "{field} must not be negative, got {value}")
            }
            Self::AmountOverflow { left, right } => {
                write!(f, "Amount overflow while adding {left} and {right}")
            }
            Self::InvalidServiceCode(msg) => write!(f, "Invalid service code: {msg}"),
            Self::InvalidTimestamp(msg) => write!(f, "Invalid timestamp: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
