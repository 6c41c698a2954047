// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Role, TicketStatus, can_assign_technician, can_create_ticket, can_edit_ticket,
    can_manage_users,
};

const TECH_ID: i64 = 7;
const OTHER_ID: i64 = 8;

#[test]
fn test_admin_can_edit_every_status() {
    for status in TicketStatus::ALL {
        assert!(can_edit_ticket(Role::Admin, 1, status, None));
        assert!(can_edit_ticket(Role::Admin, 1, status, Some(OTHER_ID)));
    }
}

#[test]
fn test_customer_service_edits_open_tickets_only() {
    assert!(can_edit_ticket(Role::CustomerService, 2, TicketStatus::Received, None));
    assert!(can_edit_ticket(Role::CustomerService, 2, TicketStatus::InProgress, None));
    assert!(!can_edit_ticket(Role::CustomerService, 2, TicketStatus::Completed, None));
    assert!(!can_edit_ticket(Role::CustomerService, 2, TicketStatus::Cancelled, None));
    assert!(!can_edit_ticket(Role::CustomerService, 2, TicketStatus::PickedUp, None));
}

#[test]
fn test_technician_edits_own_tickets_in_any_status() {
    for status in TicketStatus::ALL {
        assert!(can_edit_ticket(Role::Technician, TECH_ID, status, Some(TECH_ID)));
    }
}

#[test]
fn test_technician_cannot_edit_others_tickets() {
    assert!(!can_edit_ticket(
        Role::Technician,
        TECH_ID,
        TicketStatus::InProgress,
        Some(OTHER_ID)
    ));
}

#[test]
fn test_technician_cannot_edit_unassigned_tickets() {
    assert!(!can_edit_ticket(
        Role::Technician,
        TECH_ID,
        TicketStatus::Received,
        None
    ));
}

#[test]
fn test_cashier_edits_completed_tickets_only() {
    for status in TicketStatus::ALL {
        assert_eq!(
            can_edit_ticket(Role::Cashier, 3, status, Some(TECH_ID)),
            status == TicketStatus::Completed
        );
    }
}

#[test]
fn test_ticket_creation_roles() {
    assert!(can_create_ticket(Role::Admin));
    assert!(can_create_ticket(Role::CustomerService));
    assert!(!can_create_ticket(Role::Technician));
    assert!(!can_create_ticket(Role::Cashier));
}

#[test]
fn test_user_management_is_admin_only() {
    assert!(can_manage_users(Role::Admin));
    assert!(!can_manage_users(Role::CustomerService));
    assert!(!can_manage_users(Role::Technician));
    assert!(!can_manage_users(Role::Cashier));
}

#[test]
fn test_technician_assignment_roles() {
    assert!(can_assign_technician(Role::Admin));
    assert!(can_assign_technician(Role::CustomerService));
    assert!(!can_assign_technician(Role::Technician));
    assert!(!can_assign_technician(Role::Cashier));
}
