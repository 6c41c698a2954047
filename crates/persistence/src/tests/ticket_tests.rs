// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{execute_sql, new_ticket_at, test_now, try_execute_sql};
use crate::{PersistenceError, SqlitePersistence, TicketStats, TicketUpdateError};
use repairdesk::{Command, CoreError, TransitionResult, apply};
use repairdesk_domain::{Money, ServiceCode, Ticket, TicketStatus};
use time::macros::datetime;

#[test]
fn test_create_ticket_returns_stored_ticket() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    let ticket: Ticket = persistence
        .create_ticket(&new_ticket_at(test_now(), "Siti"))
        .unwrap();

    assert_eq!(ticket.service_code.to_string(), "SRV-20241201-001");
    assert_eq!(ticket.customer_name, "Siti");
    assert_eq!(ticket.customer_phone.as_deref(), Some("0812-555-0101"));
    assert_eq!(ticket.customer_id, None);
    assert_eq!(ticket.technician_id, None);
    assert_eq!(ticket.item_type, "Laptop");
    assert_eq!(ticket.completeness.as_deref(), Some("charger"));
    assert_eq!(ticket.status, TicketStatus::Received);
    assert_eq!(ticket.repair_cost, Money::ZERO);
    assert_eq!(ticket.total_cost, Money::ZERO);
    assert_eq!(ticket.created_at, "2024-12-01 10:30:00");
    assert_eq!(ticket.updated_at, ticket.created_at);
}

#[test]
fn test_get_ticket_by_code() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let created: Ticket = persistence
        .create_ticket(&new_ticket_at(test_now(), "Siti"))
        .unwrap();

    let found: Ticket = persistence
        .get_ticket_by_code(&created.service_code)
        .unwrap()
        .unwrap();

    assert_eq!(found, created);
}

#[test]
fn test_get_missing_ticket_returns_none() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let code: ServiceCode = "SRV-20241201-001".parse().unwrap();

    assert!(persistence.get_ticket_by_code(&code).unwrap().is_none());
    assert!(persistence.get_ticket_by_id(1).unwrap().is_none());
}

fn costs_update(repair: Option<i64>, status: Option<TicketStatus>) -> Command {
    Command::UpdateTicket {
        technician_id: None,
        damage_report: None,
        repair_cost: repair.map(|value| Money::new("repairCost", value).unwrap()),
        parts_cost: None,
        status,
    }
}

#[test]
fn test_update_ticket_with_persists_transition() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let ticket: Ticket = persistence
        .create_ticket(&new_ticket_at(test_now(), "Siti"))
        .unwrap();

    let result: TransitionResult = persistence
        .update_ticket_with(ticket.ticket_id, |current: &Ticket| {
            apply(
                current,
                Command::UpdateTicket {
                    technician_id: Some(5),
                    damage_report: Some(String::from("dead motherboard")),
                    repair_cost: Some(Money::new("repairCost", 200_000).unwrap()),
                    parts_cost: Some(Money::new("partsCost", 350_000).unwrap()),
                    status: Some(TicketStatus::InProgress),
                },
                datetime!(2024-12-01 12:00:00 UTC),
            )
        })
        .unwrap();

    let stored: Ticket = persistence
        .get_ticket_by_id(ticket.ticket_id)
        .unwrap()
        .unwrap();
    assert_eq!(stored, result.new_ticket);
    assert_eq!(stored.total_cost.value(), 550_000);
    assert_eq!(stored.updated_at, "2024-12-01 12:00:00");
    assert_eq!(stored.created_at, ticket.created_at);
}

#[test]
fn test_update_missing_ticket_is_not_found() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    persistence
        .create_ticket(&new_ticket_at(test_now(), "Siti"))
        .unwrap();

    let mut called: bool = false;
    let result: Result<TransitionResult, TicketUpdateError<CoreError>> = persistence
        .update_ticket_with(999, |current: &Ticket| {
            called = true;
            apply(current, costs_update(Some(1), None), test_now())
        });

    assert!(matches!(
        result,
        Err(TicketUpdateError::Store(PersistenceError::NotFound(_)))
    ));
    assert!(!called, "update closure must not run for a missing ticket");
}

#[test]
fn test_rejected_update_leaves_ticket_untouched() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let ticket: Ticket = persistence
        .create_ticket(&new_ticket_at(test_now(), "Siti"))
        .unwrap();

    let result: Result<TransitionResult, TicketUpdateError<&str>> = persistence
        .update_ticket_with(ticket.ticket_id, |_current: &Ticket| Err("not allowed"));

    assert_eq!(result, Err(TicketUpdateError::Rejected("not allowed")));
    let stored: Ticket = persistence
        .get_ticket_by_id(ticket.ticket_id)
        .unwrap()
        .unwrap();
    assert_eq!(stored, ticket);
}

#[test]
fn test_updates_from_separate_connections_keep_each_others_fields() {
    let path = std::env::temp_dir().join(format!(
        "repairdesk_concurrent_update_{}.db",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    let mut first = SqlitePersistence::new_with_file(&path).unwrap();
    let mut second = SqlitePersistence::new_with_file(&path).unwrap();
    let ticket: Ticket = first
        .create_ticket(&new_ticket_at(test_now(), "Siti"))
        .unwrap();

    // Both handles have seen the ticket before either writes.
    let stale: Ticket = second.get_ticket_by_id(ticket.ticket_id).unwrap().unwrap();
    assert_eq!(stale.repair_cost, Money::ZERO);

    first
        .update_ticket_with(ticket.ticket_id, |current: &Ticket| {
            apply(current, costs_update(Some(50_000), None), test_now())
        })
        .unwrap();
    second
        .update_ticket_with(ticket.ticket_id, |current: &Ticket| {
            apply(
                current,
                costs_update(None, Some(TicketStatus::InProgress)),
                test_now(),
            )
        })
        .unwrap();

    let stored: Ticket = first.get_ticket_by_id(ticket.ticket_id).unwrap().unwrap();
    assert_eq!(stored.repair_cost.value(), 50_000);
    assert_eq!(stored.total_cost.value(), 50_000);
    assert_eq!(stored.status, TicketStatus::InProgress);

    drop(first);
    drop(second);
    let _ = std::fs::remove_file(&path);
    let _ = std::fs::remove_file(path.with_extension("db-wal"));
    let _ = std::fs::remove_file(path.with_extension("db-shm"));
}

#[test]
fn test_list_tickets_newest_first() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    let first: Ticket = persistence
        .create_ticket(&new_ticket_at(datetime!(2024-11-30 09:00:00 UTC), "A"))
        .unwrap();
    let second: Ticket = persistence
        .create_ticket(&new_ticket_at(test_now(), "B"))
        .unwrap();
    let third: Ticket = persistence
        .create_ticket(&new_ticket_at(test_now(), "C"))
        .unwrap();

    let codes: Vec<String> = persistence
        .list_tickets()
        .unwrap()
        .into_iter()
        .map(|t| t.service_code.to_string())
        .collect();

    assert_eq!(
        codes,
        vec![
            third.service_code.to_string(),
            second.service_code.to_string(),
            first.service_code.to_string(),
        ]
    );
}

#[test]
fn test_ticket_stats_counts_each_status() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    for name in ["A", "B", "C", "D"] {
        persistence
            .create_ticket(&new_ticket_at(test_now(), name))
            .unwrap();
    }
    execute_sql(
        &mut persistence,
        "UPDATE service_tickets SET status = 'proses' WHERE customer_name IN ('A', 'B')",
    );
    execute_sql(
        &mut persistence,
        "UPDATE service_tickets SET status = 'diambil' WHERE customer_name = 'C'",
    );

    let stats: TicketStats = persistence.ticket_stats().unwrap();

    assert_eq!(stats.total, 4);
    assert_eq!(stats.received, 1);
    assert_eq!(stats.in_progress, 2);
    assert_eq!(stats.completed, 0);
    assert_eq!(stats.cancelled, 0);
    assert_eq!(stats.picked_up, 1);
    assert_eq!(stats.count(TicketStatus::InProgress), 2);
}

#[test]
fn test_schema_rejects_negative_costs() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    persistence
        .create_ticket(&new_ticket_at(test_now(), "Siti"))
        .unwrap();

    let result = try_execute_sql(&mut persistence, "UPDATE service_tickets SET repair_cost = -1");

    assert!(result.is_err(), "CHECK constraint should reject negative cost");
}
