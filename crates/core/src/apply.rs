// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{NewTicket, TransitionResult};
use repairdesk_domain::{
    Money, Ticket, TicketStatus, format_timestamp, normalize_customer_name, normalize_item_type,
    normalize_optional,
};
use time::OffsetDateTime;

/// Validates a `CreateTicket` command and builds the unsaved ticket.
///
/// New tickets start in `terima` with zero costs. The creation day is
/// taken from `now` in UTC.
///
/// # Errors
///
/// Returns an error if:
/// - The command is not `CreateTicket`
/// - The customer name or item type is blank
/// - `now` cannot be formatted as a timestamp
pub fn apply_create(command: Command, now: OffsetDateTime) -> Result<NewTicket, CoreError> {
    let command_name: &'static str = command.name();
    let Command::CreateTicket {
        customer_name,
        customer_phone,
        customer_address,
        item_type,
        completeness,
        serial_number,
        notes,
    } = command
    else {
        return Err(CoreError::UnsupportedCommand {
            command: command_name,
            entry_point: "apply_create",
        });
    };

    let customer_name: String = normalize_customer_name(&customer_name)?;
    let item_type: String = normalize_item_type(&item_type)?;
    let utc: OffsetDateTime = now.to_offset(time::UtcOffset::UTC);

    Ok(NewTicket {
        customer_name,
        customer_phone: normalize_optional(customer_phone),
        customer_address: normalize_optional(customer_address),
        item_type,
        completeness: normalize_optional(completeness),
        serial_number: normalize_optional(serial_number),
        notes: normalize_optional(notes),
        repair_cost: Money::ZERO,
        parts_cost: Money::ZERO,
        total_cost: Money::ZERO,
        status: TicketStatus::Received,
        day: utc.date(),
        created_at: format_timestamp(utc)?,
    })
}

/// Applies an `UpdateTicket` command to the current ticket.
///
/// Only supplied fields change. A blank damage report counts as not
/// supplied. Whenever either cost is supplied the total is recomputed
/// from the merged costs. The update timestamp always moves to `now`.
///
/// Authorization is not checked here; callers evaluate the rule table
/// against `ticket` before calling.
///
/// # Errors
///
/// Returns an error if:
/// - The command is not `UpdateTicket`
/// - The merged costs overflow when summed
/// - `now` cannot be formatted as a timestamp
pub fn apply(
    ticket: &Ticket,
    command: Command,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    let command_name: &'static str = command.name();
    let Command::UpdateTicket {
        technician_id,
        damage_report,
        repair_cost,
        parts_cost,
        status,
    } = command
    else {
        return Err(CoreError::UnsupportedCommand {
            command: command_name,
            entry_point: "apply",
        });
    };

    let mut new_ticket: Ticket = ticket.clone();
    let mut changed_fields: Vec<&'static str> = Vec::new();

    if let Some(technician_id) = technician_id {
        new_ticket.technician_id = Some(technician_id);
    }
    if let Some(damage_report) = normalize_optional(damage_report) {
        new_ticket.damage_report = Some(damage_report);
    }
    if let Some(repair_cost) = repair_cost {
        new_ticket.repair_cost = repair_cost;
    }
    if let Some(parts_cost) = parts_cost {
        new_ticket.parts_cost = parts_cost;
    }
    if repair_cost.is_some() || parts_cost.is_some() {
        new_ticket.total_cost = new_ticket.repair_cost.checked_add(new_ticket.parts_cost)?;
    }
    if let Some(status) = status {
        new_ticket.status = status;
    }

    if new_ticket.technician_id != ticket.technician_id {
        changed_fields.push("technicianId");
    }
    if new_ticket.damage_report != ticket.damage_report {
        changed_fields.push("damageReport");
    }
    if new_ticket.repair_cost != ticket.repair_cost {
        changed_fields.push("repairCost");
    }
    if new_ticket.parts_cost != ticket.parts_cost {
        changed_fields.push("partsCost");
    }
    if new_ticket.total_cost != ticket.total_cost {
        changed_fields.push("totalCost");
    }
    if new_ticket.status != ticket.status {
        changed_fields.push("status");
    }

    new_ticket.updated_at = format_timestamp(now)?;

    Ok(TransitionResult {
        new_ticket,
        changed_fields,
    })
}
