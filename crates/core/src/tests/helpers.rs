// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Command;
use repairdesk_domain::{Money, ServiceCode, Ticket, TicketStatus};
use time::OffsetDateTime;
use time::macros::{date, datetime};

pub fn test_now() -> OffsetDateTime {
    datetime!(2024-12-01 10:30:00 UTC)
}

pub fn create_test_ticket() -> Ticket {
    Ticket {
        ticket_id: 1,
        service_code: ServiceCode::new(date!(2024 - 12 - 01), 1).unwrap(),
        customer_id: None,
        customer_name: String::from("Siti Rahma"),
        customer_phone: Some(String::from("0812-555-0101")),
        customer_address: None,
        technician_id: None,
        item_type: String::from("Laptop"),
        completeness: Some(String::from("charger")),
        serial_number: None,
        notes: None,
        damage_report: None,
        repair_cost: Money::ZERO,
        parts_cost: Money::ZERO,
        total_cost: Money::ZERO,
        status: TicketStatus::Received,
        created_at: String::from("2024-12-01 08:00:00"),
        updated_at: String::from("2024-12-01 08:00:00"),
    }
}

pub fn create_command(customer_name: &str, item_type: &str) -> Command {
    Command::CreateTicket {
        customer_name: customer_name.to_string(),
        customer_phone: None,
        customer_address: None,
        item_type: item_type.to_string(),
        completeness: None,
        serial_number: None,
        notes: None,
    }
}

pub const fn empty_update() -> Command {
    Command::UpdateTicket {
        technician_id: None,
        damage_report: None,
        repair_cost: None,
        parts_cost: None,
        status: None,
    }
}

pub fn money(value: i64) -> Money {
    Money::new("amount", value).unwrap()
}
