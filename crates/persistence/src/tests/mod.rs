// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod initialization_tests;
mod ticket_tests;
mod user_tests;

use crate::{BackendConnection, NewUserData, Persistence};
use diesel::RunQueryDsl;
use repairdesk::{Command, NewTicket, apply_create};
use time::OffsetDateTime;
use time::macros::datetime;

pub const TEST_NOW: &str = "2024-12-01 10:30:00";

pub fn test_now() -> OffsetDateTime {
    datetime!(2024-12-01 10:30:00 UTC)
}

pub fn new_user<'a>(name: &'a str, email: &'a str, role: &'a str) -> NewUserData<'a> {
    NewUserData {
        name,
        phone: None,
        address: None,
        photo: None,
        role,
        email,
        password: "password",
    }
}

pub fn new_ticket_at(now: OffsetDateTime, customer_name: &str) -> NewTicket {
    apply_create(
        Command::CreateTicket {
            customer_name: customer_name.to_string(),
            customer_phone: Some(String::from("0812-555-0101")),
            customer_address: None,
            item_type: String::from("Laptop"),
            completeness: Some(String::from("charger")),
            serial_number: None,
            notes: None,
        },
        now,
    )
    .unwrap()
}

/// Runs raw SQL against the underlying connection.
pub fn try_execute_sql(
    persistence: &mut Persistence,
    statement: &str,
) -> Result<usize, diesel::result::Error> {
    match &mut persistence.conn {
        BackendConnection::Sqlite(conn) => diesel::sql_query(statement).execute(conn),
        #[cfg(feature = "mysql")]
        BackendConnection::Mysql(conn) => diesel::sql_query(statement).execute(conn),
    }
}

pub fn execute_sql(persistence: &mut Persistence, statement: &str) -> usize {
    try_execute_sql(persistence, statement).unwrap()
}
