// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::money::Money;
use crate::service_code::ServiceCode;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

/// Staff role.
///
/// Roles are stored and transmitted by their short wire names
/// (`admin`, `cs`, `teknisi`, `kasir`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Full access, including user management.
    #[serde(rename = "admin")]
    Admin,
    /// Customer service. Intakes tickets and assigns technicians.
    #[serde(rename = "cs")]
    CustomerService,
    /// Technician. Works on tickets assigned to them.
    #[serde(rename = "teknisi")]
    Technician,
    /// Cashier. Handles completed tickets at pickup.
    #[serde(rename = "kasir")]
    Cashier,
}

impl Role {
    /// Every role, in display order.
    pub const ALL: [Self; 4] = [
        Self::Admin,
        Self::CustomerService,
        Self::Technician,
        Self::Cashier,
    ];

    /// Returns the wire name of this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::CustomerService => "cs",
            Self::Technician => "teknisi",
            Self::Cashier => "kasir",
        }
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "cs" => Ok(Self::CustomerService),
            "teknisi" | "technician" => Ok(Self::Technician),
            "kasir" | "cashier" => Ok(Self::Cashier),
            other => Err(DomainError::InvalidRole(other.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle status of a service ticket.
///
/// Any status may follow any other; the authorization table decides
/// who may move a ticket, not where it may go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketStatus {
    /// Item received at the counter.
    #[serde(rename = "terima")]
    Received,
    /// Repair in progress.
    #[serde(rename = "proses")]
    InProgress,
    /// Repair finished, awaiting pickup.
    #[serde(rename = "selesai")]
    Completed,
    /// Cancelled.
    #[serde(rename = "batal")]
    Cancelled,
    /// Collected by the customer.
    #[serde(rename = "diambil")]
    PickedUp,
}

impl TicketStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 5] = [
        Self::Received,
        Self::InProgress,
        Self::Completed,
        Self::Cancelled,
        Self::PickedUp,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Received => "terima",
            Self::InProgress => "proses",
            Self::Completed => "selesai",
            Self::Cancelled => "batal",
            Self::PickedUp => "diambil",
        }
    }
}

impl FromStr for TicketStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "terima" => Ok(Self::Received),
            "proses" => Ok(Self::InProgress),
            "selesai" => Ok(Self::Completed),
            "batal" => Ok(Self::Cancelled),
            "diambil" => Ok(Self::PickedUp),
            other => Err(DomainError::InvalidStatus(other.to_string())),
        }
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A persisted service ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub ticket_id: i64,
    pub service_code: ServiceCode,
    /// Reserved for a future customer registry. Never populated today.
    pub customer_id: Option<i64>,
    pub customer_name: String,
    pub customer_phone: Option<String>,
    pub customer_address: Option<String>,
    pub technician_id: Option<i64>,
    pub item_type: String,
    pub completeness: Option<String>,
    pub serial_number: Option<String>,
    pub notes: Option<String>,
    pub damage_report: Option<String>,
    pub repair_cost: Money,
    pub parts_cost: Money,
    /// Always `repair_cost + parts_cost`.
    pub total_cost: Money,
    pub status: TicketStatus,
    pub created_at: String,
    pub updated_at: String,
}

/// Formats an instant the way every stored timestamp is written.
///
/// The format is fixed-width (`YYYY-MM-DD HH:MM:SS`, UTC) so that
/// text ordering matches chronological ordering.
///
/// # Errors
///
/// Returns an error if the instant cannot be formatted.
pub fn format_timestamp(at: OffsetDateTime) -> Result<String, DomainError> {
    let utc: OffsetDateTime = at.to_offset(time::UtcOffset::UTC);
    utc.format(format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second]"
    ))
    .map_err(|e| DomainError::InvalidTimestamp(e.to_string()))
}

/// Parses a stored timestamp back into a UTC instant.
///
/// # Errors
///
/// Returns an error if the text is not in the stored format.
pub fn parse_timestamp(value: &str) -> Result<OffsetDateTime, DomainError> {
    PrimitiveDateTime::parse(
        value,
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    )
    .map(PrimitiveDateTime::assume_utc)
    .map_err(|e| DomainError::InvalidTimestamp(format!("'{value}': {e}")))
}
