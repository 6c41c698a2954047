// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, Money, Role, TicketStatus, format_timestamp, parse_timestamp};
use std::str::FromStr;
use time::macros::datetime;

#[test]
fn test_role_wire_names() {
    assert_eq!(Role::Admin.as_str(), "admin");
    assert_eq!(Role::CustomerService.as_str(), "cs");
    assert_eq!(Role::Technician.as_str(), "teknisi");
    assert_eq!(Role::Cashier.as_str(), "kasir");
}

#[test]
fn test_role_parses_every_wire_name() {
    for role in Role::ALL {
        assert_eq!(Role::from_str(role.as_str()).unwrap(), role);
    }
}

#[test]
fn test_role_accepts_english_aliases() {
    assert_eq!(Role::from_str("technician").unwrap(), Role::Technician);
    assert_eq!(Role::from_str("cashier").unwrap(), Role::Cashier);
}

#[test]
fn test_role_rejects_unknown_value() {
    let result: Result<Role, DomainError> = Role::from_str("manager");
    assert_eq!(result, Err(DomainError::InvalidRole(String::from("manager"))));
}

#[test]
fn test_role_serializes_as_wire_name() {
    let json: String = serde_json::to_string(&Role::CustomerService).unwrap();
    assert_eq!(json, "\"cs\"");

    let role: Role = serde_json::from_str("\"kasir\"").unwrap();
    assert_eq!(role, Role::Cashier);
}

#[test]
fn test_ticket_status_parses_every_wire_name() {
    for status in TicketStatus::ALL {
        assert_eq!(TicketStatus::from_str(status.as_str()).unwrap(), status);
    }
}

#[test]
fn test_ticket_status_rejects_unknown_value() {
    assert!(TicketStatus::from_str("lost").is_err());
    assert!(TicketStatus::from_str("Terima").is_err());
}

#[test]
fn test_money_rejects_negative_amount() {
    let result: Result<Money, DomainError> = Money::new("partsCost", -1);
    assert_eq!(
        result,
        Err(DomainError::NegativeAmount {
            field: "partsCost",
            value: -1,
        })
    );
}

#[test]
fn test_money_accepts_zero() {
    assert_eq!(Money::new("repairCost", 0).unwrap(), Money::ZERO);
}

#[test]
fn test_money_checked_add() {
    let repair: Money = Money::new("repairCost", 150_000).unwrap();
    let parts: Money = Money::new("partsCost", 75_000).unwrap();
    assert_eq!(repair.checked_add(parts).unwrap().value(), 225_000);
}

#[test]
fn test_money_checked_add_overflow() {
    let big: Money = Money::new("repairCost", i64::MAX).unwrap();
    let one: Money = Money::new("partsCost", 1).unwrap();
    assert!(matches!(
        big.checked_add(one),
        Err(DomainError::AmountOverflow { .. })
    ));
}

#[test]
fn test_money_deserialize_rejects_negative() {
    let result: Result<Money, serde_json::Error> = serde_json::from_str("-10");
    assert!(result.is_err());

    let money: Money = serde_json::from_str("2500").unwrap();
    assert_eq!(money.value(), 2500);
}

#[test]
fn test_timestamp_format_is_fixed_width() {
    let formatted: String = format_timestamp(datetime!(2024-12-01 09:05:03 UTC)).unwrap();
    assert_eq!(formatted, "2024-12-01 09:05:03");
}

#[test]
fn test_timestamp_format_converts_to_utc() {
    let formatted: String = format_timestamp(datetime!(2024-12-01 07:00:00 +07:00)).unwrap();
    assert_eq!(formatted, "2024-12-01 00:00:00");
}

#[test]
fn test_timestamp_parse_roundtrip() {
    let parsed = parse_timestamp("2024-12-01 09:05:03").unwrap();
    assert_eq!(parsed, datetime!(2024-12-01 09:05:03 UTC));
}

#[test]
fn test_timestamp_parse_rejects_other_formats() {
    assert!(parse_timestamp("2024-12-01T09:05:03Z").is_err());
    assert!(parse_timestamp("yesterday").is_err());
}
