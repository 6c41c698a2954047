// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use repairdesk_domain::{Money, Ticket, TicketStatus};
use time::Date;

/// A validated ticket that has not been stored yet.
///
/// It has no id and no service code; both are assigned by the store
/// when the ticket is inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTicket {
    pub customer_name: String,
    pub customer_phone: Option<String>,
    pub customer_address: Option<String>,
    pub item_type: String,
    pub completeness: Option<String>,
    pub serial_number: Option<String>,
    pub notes: Option<String>,
    pub repair_cost: Money,
    pub parts_cost: Money,
    pub total_cost: Money,
    pub status: TicketStatus,
    /// The UTC calendar day the service code is drawn from.
    pub day: Date,
    pub created_at: String,
}

/// The result of a successful ticket transition.
///
/// Transitions are pure: the caller persists `new_ticket` or drops it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The ticket after the transition.
    pub new_ticket: Ticket,
    /// Names of the fields whose values changed.
    pub changed_fields: Vec<&'static str>,
}

impl TransitionResult {
    /// Returns true when only the update timestamp moved.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.changed_fields.is_empty()
    }

    /// Returns true when the named field changed.
    #[must_use]
    pub fn changed(&self, field: &str) -> bool {
        self.changed_fields.iter().any(|f| *f == field)
    }
}
