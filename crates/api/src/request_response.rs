// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Account records keep snake_case field names; ticket records are
//! camelCase. Both match what existing clients already send and read.

use repairdesk_domain::Ticket;
use repairdesk_persistence::{TicketStats, UserData};
use serde::{Deserialize, Serialize};

// ========================================================================
// Accounts
// ========================================================================

/// API request to create a staff account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    /// Opaque photo reference (URL or storage key).
    #[serde(default)]
    pub photo: Option<String>,
    /// One of `admin`, `cs`, `teknisi`, `kasir`.
    pub role: String,
    pub email: String,
    pub password: String,
}

/// A staff account as returned by the API. Never carries the credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub photo: Option<String>,
    pub role: String,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<UserData> for UserInfo {
    fn from(user: UserData) -> Self {
        Self {
            id: user.user_id,
            name: user.name,
            phone: user.phone,
            address: user.address,
            photo: user.photo,
            role: user.role,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// API response for listing staff accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListUsersResponse {
    /// Accounts, newest first.
    pub users: Vec<UserInfo>,
}

/// API request to log in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// API response for successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The logged-in account.
    pub user: UserInfo,
    /// The session token (opaque). Sent back as `Authorization: Bearer`.
    pub token: String,
    /// Session expiration timestamp (UTC, `YYYY-MM-DD HH:MM:SS`).
    pub expires_at: String,
}

// ========================================================================
// Capability Model
// ========================================================================

/// Represents whether an action is permitted.
///
/// This enum provides better type safety than raw booleans and serializes
/// to JSON as true/false for API compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// The action is permitted.
    Allowed,
    /// The action is not permitted.
    Denied,
}

impl Capability {
    /// Returns true if the capability is allowed.
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Creates a capability from a boolean value.
    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        if value { Self::Allowed } else { Self::Denied }
    }
}

impl Serialize for Capability {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_bool(self.is_allowed())
    }
}

impl<'de> Deserialize<'de> for Capability {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value: bool = bool::deserialize(deserializer)?;
        Ok(Self::from_bool(value))
    }
}

/// What the requesting user may do with one ticket.
///
/// Advisory only; the update path re-checks on every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketCapabilities {
    pub can_edit: Capability,
    pub can_assign_technician: Capability,
}

// ========================================================================
// Tickets
// ========================================================================

/// API request to open a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketRequest {
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub customer_address: Option<String>,
    pub item_type: String,
    #[serde(default)]
    pub completeness: Option<String>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// API request to update a ticket.
///
/// Absent fields are left unchanged. Amounts are whole rupiah: a
/// fractional number fails to deserialize and the server answers it as
/// invalid input. Negative amounts are rejected during validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTicketRequest {
    pub id: i64,
    #[serde(default)]
    pub technician_id: Option<i64>,
    #[serde(default)]
    pub damage_report: Option<String>,
    #[serde(default)]
    pub repair_cost: Option<i64>,
    #[serde(default)]
    pub parts_cost: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
}

/// A ticket as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketInfo {
    pub id: i64,
    pub service_code: String,
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
    pub repair_cost: i64,
    pub parts_cost: i64,
    pub total_cost: i64,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Ticket> for TicketInfo {
    fn from(ticket: Ticket) -> Self {
        Self {
            id: ticket.ticket_id,
            service_code: ticket.service_code.to_string(),
            customer_id: ticket.customer_id,
            customer_name: ticket.customer_name,
            customer_phone: ticket.customer_phone,
            customer_address: ticket.customer_address,
            technician_id: ticket.technician_id,
            item_type: ticket.item_type,
            completeness: ticket.completeness,
            serial_number: ticket.serial_number,
            notes: ticket.notes,
            damage_report: ticket.damage_report,
            repair_cost: ticket.repair_cost.value(),
            parts_cost: ticket.parts_cost.value(),
            total_cost: ticket.total_cost.value(),
            status: ticket.status.as_str().to_string(),
            created_at: ticket.created_at,
            updated_at: ticket.updated_at,
        }
    }
}

/// One row of the authenticated ticket list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketListEntry {
    #[serde(flatten)]
    pub ticket: TicketInfo,
    pub capabilities: TicketCapabilities,
}

/// API response for listing tickets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListTicketsResponse {
    /// Tickets, most recent first.
    pub services: Vec<TicketListEntry>,
}

/// Ticket counts per status, keyed by status wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketStatsResponse {
    pub total: u64,
    pub terima: u64,
    pub proses: u64,
    pub selesai: u64,
    pub batal: u64,
    pub diambil: u64,
}

impl From<TicketStats> for TicketStatsResponse {
    fn from(stats: TicketStats) -> Self {
        Self {
            total: stats.total,
            terima: stats.received,
            proses: stats.in_progress,
            selesai: stats.completed,
            batal: stats.cancelled,
            diambil: stats.picked_up,
        }
    }
}
