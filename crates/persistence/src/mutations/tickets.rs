// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Service ticket mutations.
//!
//! ## Service code allocation
//!
//! Codes come from `service_code_sequences`, one row per UTC day. The
//! first ticket of a day seeds that row from the number of tickets
//! already stored for the day, so databases that predate the sequence
//! table continue numbering where they left off. Increment, read-back
//! and ticket insert run in one transaction, so a failed insert never
//! consumes an ordinal.
//!
//! Two writers that both seed the same day race on the sequence
//! primary key; the loser gets a unique violation, rolls back, and
//! retries against the now-existing row.
//!
//! ## Updates
//!
//! `write_ticket` overwrites every mutable column, so it must only run
//! inside the transaction that read the row (see
//! `Persistence::update_ticket_with`).

use diesel::prelude::*;
#[cfg(feature = "mysql")]
use diesel::MysqlConnection;
use diesel::SqliteConnection;
use num_traits::ToPrimitive;
use repairdesk::NewTicket;
use repairdesk_domain::{ServiceCode, Ticket, day_key};
use tracing::{debug, info, warn};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::{service_code_sequences, service_tickets};
use crate::error::PersistenceError;

/// How many times ticket creation is attempted before giving up.
pub const MAX_SERVICE_CODE_ATTEMPTS: u32 = 3;

backend_fn! {
/// Inserts a new ticket and allocates its service code.
///
/// Returns the new ticket id and the code it was given.
///
/// # Errors
///
/// Returns `PersistenceError::ServiceCodeConflict` if every attempt hit
/// a uniqueness violation, or another error if the database fails.
pub fn create_ticket(
    conn: &mut _,
    new_ticket: &NewTicket,
) -> Result<(i64, ServiceCode), PersistenceError> {
    let day: String = day_key(new_ticket.day);

    for attempt in 1..=MAX_SERVICE_CODE_ATTEMPTS {
        let result: Result<(i64, ServiceCode), PersistenceError> =
            conn.transaction::<_, PersistenceError, _>(|conn| {
                let existing: Option<i64> = service_code_sequences::table
                    .filter(service_code_sequences::day.eq(&day))
                    .select(service_code_sequences::last_value)
                    .first(conn)
                    .optional()?;

                if existing.is_none() {
                    let seeded: i64 = service_tickets::table
                        .filter(service_tickets::created_day.eq(&day))
                        .count()
                        .get_result(conn)?;

                    debug!(day = %day, seeded, "Seeding service code sequence");

                    diesel::insert_into(service_code_sequences::table)
                        .values((
                            service_code_sequences::day.eq(&day),
                            service_code_sequences::last_value.eq(seeded),
                        ))
                        .execute(conn)?;
                }

                diesel::update(service_code_sequences::table)
                    .filter(service_code_sequences::day.eq(&day))
                    .set(
                        service_code_sequences::last_value
                            .eq(service_code_sequences::last_value + 1),
                    )
                    .execute(conn)?;

                let ordinal: i64 = service_code_sequences::table
                    .filter(service_code_sequences::day.eq(&day))
                    .select(service_code_sequences::last_value)
                    .first(conn)?;
                let ordinal: u32 = ordinal.to_u32().ok_or_else(|| {
                    PersistenceError::InvalidData(format!(
                        "Service code ordinal {ordinal} out of range"
                    ))
                })?;

                let service_code: ServiceCode = ServiceCode::new(new_ticket.day, ordinal)?;

                diesel::insert_into(service_tickets::table)
                    .values((
                        service_tickets::service_code.eq(service_code.to_string()),
                        service_tickets::customer_name.eq(&new_ticket.customer_name),
                        service_tickets::customer_phone.eq(new_ticket.customer_phone.as_deref()),
                        service_tickets::customer_address
                            .eq(new_ticket.customer_address.as_deref()),
                        service_tickets::item_type.eq(&new_ticket.item_type),
                        service_tickets::completeness.eq(new_ticket.completeness.as_deref()),
                        service_tickets::serial_number.eq(new_ticket.serial_number.as_deref()),
                        service_tickets::notes.eq(new_ticket.notes.as_deref()),
                        service_tickets::repair_cost.eq(new_ticket.repair_cost.value()),
                        service_tickets::parts_cost.eq(new_ticket.parts_cost.value()),
                        service_tickets::total_cost.eq(new_ticket.total_cost.value()),
                        service_tickets::status.eq(new_ticket.status.as_str()),
                        service_tickets::created_day.eq(&day),
                        service_tickets::created_at.eq(&new_ticket.created_at),
                        service_tickets::updated_at.eq(&new_ticket.created_at),
                    ))
                    .execute(conn)?;

                let ticket_id: i64 = conn.get_last_insert_rowid()?;
                Ok((ticket_id, service_code))
            });

        match result {
            Ok((ticket_id, service_code)) => {
                info!(ticket_id, service_code = %service_code, "Ticket created");
                return Ok((ticket_id, service_code));
            }
            Err(PersistenceError::UniqueViolation { constraint }) => {
                warn!(
                    attempt,
                    constraint = %constraint,
                    "Service code allocation collided, retrying"
                );
            }
            Err(e) => return Err(e),
        }
    }

    Err(PersistenceError::ServiceCodeConflict {
        attempts: MAX_SERVICE_CODE_ATTEMPTS,
    })
}
}

backend_fn! {
/// Writes the mutable fields of a ticket back to the database.
///
/// Identity and intake fields (code, customer, item, creation time)
/// are never written here. Callers hold a write transaction that also
/// covered the read `ticket` was derived from.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no ticket has this id, or
/// another error if the update fails.
pub fn write_ticket(conn: &mut _, ticket: &Ticket) -> Result<(), PersistenceError> {
    let rows_affected: usize = diesel::update(service_tickets::table)
        .filter(service_tickets::ticket_id.eq(ticket.ticket_id))
        .set((
            service_tickets::technician_id.eq(ticket.technician_id),
            service_tickets::damage_report.eq(ticket.damage_report.as_deref()),
            service_tickets::repair_cost.eq(ticket.repair_cost.value()),
            service_tickets::parts_cost.eq(ticket.parts_cost.value()),
            service_tickets::total_cost.eq(ticket.total_cost.value()),
            service_tickets::status.eq(ticket.status.as_str()),
            service_tickets::updated_at.eq(&ticket.updated_at),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Ticket with ID {} not found",
            ticket.ticket_id
        )));
    }

    debug!(ticket_id = ticket.ticket_id, "Ticket updated");
    Ok(())
}
}
