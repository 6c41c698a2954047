// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Service ticket queries.
//!
//! Rows are converted into domain `Ticket` values on the way out. A row
//! that cannot be converted (unknown status, malformed code, negative
//! amount) surfaces as `PersistenceError::InvalidData`.

use diesel::prelude::*;
#[cfg(feature = "mysql")]
use diesel::MysqlConnection;
use diesel::SqliteConnection;
use num_traits::ToPrimitive;
use repairdesk_domain::{Money, ServiceCode, Ticket, TicketStatus};
use tracing::debug;

use crate::data_models::TicketStats;
use crate::diesel_schema::service_tickets;
use crate::error::PersistenceError;

/// Diesel Queryable struct for ticket rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = service_tickets)]
struct TicketRow {
    ticket_id: i64,
    service_code: String,
    customer_id: Option<i64>,
    customer_name: String,
    customer_phone: Option<String>,
    customer_address: Option<String>,
    technician_id: Option<i64>,
    item_type: String,
    completeness: Option<String>,
    serial_number: Option<String>,
    notes: Option<String>,
    damage_report: Option<String>,
    repair_cost: i64,
    parts_cost: i64,
    total_cost: i64,
    status: String,
    created_at: String,
    updated_at: String,
}

impl TryFrom<TicketRow> for Ticket {
    type Error = PersistenceError;

    fn try_from(row: TicketRow) -> Result<Self, Self::Error> {
        Ok(Self {
            ticket_id: row.ticket_id,
            service_code: row.service_code.parse::<ServiceCode>()?,
            customer_id: row.customer_id,
            customer_name: row.customer_name,
            customer_phone: row.customer_phone,
            customer_address: row.customer_address,
            technician_id: row.technician_id,
            item_type: row.item_type,
            completeness: row.completeness,
            serial_number: row.serial_number,
            notes: row.notes,
            damage_report: row.damage_report,
            repair_cost: Money::new("repair_cost", row.repair_cost)?,
            parts_cost: Money::new("parts_cost", row.parts_cost)?,
            total_cost: Money::new("total_cost", row.total_cost)?,
            status: row.status.parse::<TicketStatus>()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

backend_fn! {
/// Retrieves a ticket by its database id.
///
/// # Errors
///
/// Returns an error if the query fails or the row is malformed.
/// Returns `Ok(None)` if the ticket is not found.
pub fn get_ticket_by_id(
    conn: &mut _,
    ticket_id: i64,
) -> Result<Option<Ticket>, PersistenceError> {
    debug!(ticket_id, "Looking up ticket by ID");

    let result: Result<TicketRow, diesel::result::Error> = service_tickets::table
        .filter(service_tickets::ticket_id.eq(ticket_id))
        .select(TicketRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(Ticket::try_from(row)?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

/// Retrieves a ticket by id and locks its row until the transaction ends.
///
/// `SQLite` has no row locks; there the immediate transaction opened by
/// `Persistence::update_ticket_with` already excludes other writers.
///
/// # Errors
///
/// Returns an error if the query fails or the row is malformed.
#[cfg(feature = "mysql")]
pub fn lock_ticket_by_id_mysql(
    conn: &mut MysqlConnection,
    ticket_id: i64,
) -> Result<Option<Ticket>, PersistenceError> {
    let row: Option<TicketRow> = service_tickets::table
        .filter(service_tickets::ticket_id.eq(ticket_id))
        .select(TicketRow::as_select())
        .for_update()
        .get_result(conn)
        .optional()?;

    row.map(Ticket::try_from).transpose()
}

backend_fn! {
/// Retrieves a ticket by its service code.
///
/// # Errors
///
/// Returns an error if the query fails or the row is malformed.
/// Returns `Ok(None)` if no ticket carries this code.
pub fn get_ticket_by_code(
    conn: &mut _,
    service_code: &str,
) -> Result<Option<Ticket>, PersistenceError> {
    debug!(service_code, "Looking up ticket by service code");

    let result: Result<TicketRow, diesel::result::Error> = service_tickets::table
        .filter(service_tickets::service_code.eq(service_code))
        .select(TicketRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(Ticket::try_from(row)?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Lists all tickets, newest first.
///
/// Tickets created within the same second are ordered by descending id,
/// which matches creation order.
///
/// # Errors
///
/// Returns an error if the query fails or any row is malformed.
pub fn list_tickets(conn: &mut _) -> Result<Vec<Ticket>, PersistenceError> {
    debug!("Listing all tickets");

    let rows: Vec<TicketRow> = service_tickets::table
        .select(TicketRow::as_select())
        .order_by((
            service_tickets::created_at.desc(),
            service_tickets::ticket_id.desc(),
        ))
        .load(conn)?;

    rows.into_iter().map(Ticket::try_from).collect()
}
}

backend_fn! {
/// Counts tickets per status.
///
/// # Errors
///
/// Returns an error if the query fails or a stored status is unknown.
pub fn ticket_stats(conn: &mut _) -> Result<TicketStats, PersistenceError> {
    let rows = service_tickets::table
        .group_by(service_tickets::status)
        .select((
            service_tickets::status,
            diesel::dsl::count(service_tickets::ticket_id),
        ))
        .load::<(String, i64)>(conn)?;

    let mut stats: TicketStats = TicketStats::default();
    for (status, count_i64) in rows {
        let status: TicketStatus = status.parse()?;
        let count: u64 = count_i64.to_u64().ok_or_else(|| {
            PersistenceError::DatabaseError("Count conversion failed".to_string())
        })?;
        stats.record(status, count);
    }

    debug!(total = stats.total, "Computed ticket stats");
    Ok(stats)
}
}
