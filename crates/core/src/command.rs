// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use repairdesk_domain::{Money, TicketStatus};

/// A command represents staff intent as data only.
///
/// Commands are the only way to request ticket changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open a new ticket at the counter.
    CreateTicket {
        /// The customer's name. Required.
        customer_name: String,
        customer_phone: Option<String>,
        customer_address: Option<String>,
        /// What was brought in ("Laptop", "Printer"). Required.
        item_type: String,
        /// Accessories handed over with the item.
        completeness: Option<String>,
        serial_number: Option<String>,
        notes: Option<String>,
    },
    /// Partially update an existing ticket.
    ///
    /// Absent fields are left unchanged.
    UpdateTicket {
        technician_id: Option<i64>,
        damage_report: Option<String>,
        repair_cost: Option<Money>,
        parts_cost: Option<Money>,
        status: Option<TicketStatus>,
    },
}

impl Command {
    /// Returns the command's name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreateTicket { .. } => "CreateTicket",
            Self::UpdateTicket { .. } => "UpdateTicket",
        }
    }
}
