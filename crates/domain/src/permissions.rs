// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The role rule table.
//!
//! These predicates are pure. Callers evaluate them against the state
//! of a ticket *before* any change is applied.

use crate::types::{Role, Ticket, TicketStatus};

/// Returns whether `role` may open new tickets.
#[must_use]
pub const fn can_create_ticket(role: Role) -> bool {
    matches!(role, Role::Admin | Role::CustomerService)
}

/// Returns whether `role` may create staff accounts.
#[must_use]
pub const fn can_manage_users(role: Role) -> bool {
    matches!(role, Role::Admin)
}

/// Returns whether `role` may set or change a ticket's technician.
#[must_use]
pub const fn can_assign_technician(role: Role) -> bool {
    matches!(role, Role::Admin | Role::CustomerService)
}

/// Returns whether a user may edit a ticket.
///
/// | Role    | May edit when                  |
/// |---------|--------------------------------|
/// | admin   | always                         |
/// | cs      | status is `terima` or `proses` |
/// | teknisi | the ticket is assigned to them |
/// | kasir   | status is `selesai`            |
#[must_use]
pub const fn can_edit_ticket(
    role: Role,
    user_id: i64,
    status: TicketStatus,
    technician_id: Option<i64>,
) -> bool {
    match role {
        Role::Admin => true,
        Role::CustomerService => {
            matches!(status, TicketStatus::Received | TicketStatus::InProgress)
        }
        Role::Technician => match technician_id {
            Some(assigned) => assigned == user_id,
            None => false,
        },
        Role::Cashier => matches!(status, TicketStatus::Completed),
    }
}

/// Convenience wrapper over [`can_edit_ticket`] for a stored ticket.
#[must_use]
pub fn can_edit(role: Role, user_id: i64, ticket: &Ticket) -> bool {
    can_edit_ticket(role, user_id, ticket.status, ticket.technician_id)
}
