// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Capability computation for authorization-aware UI gating.
//!
//! Capabilities expose what a user may do with a ticket so clients can
//! hide controls. They are advisory only and do not replace the checks
//! in the update handler.

use repairdesk_domain::{Ticket, can_assign_technician, can_edit};

use crate::auth::AuthenticatedActor;
use crate::request_response::{Capability, TicketCapabilities};

/// Computes the capabilities `actor` has on `ticket`.
///
/// Assigning a technician is an edit, so it is only offered when the
/// ticket is editable by the actor at all.
#[must_use]
pub fn compute_ticket_capabilities(
    actor: &AuthenticatedActor,
    ticket: &Ticket,
) -> TicketCapabilities {
    let editable: bool = can_edit(actor.role, actor.user_id, ticket);

    TicketCapabilities {
        can_edit: Capability::from_bool(editable),
        can_assign_technician: Capability::from_bool(
            editable && can_assign_technician(actor.role),
        ),
    }
}
