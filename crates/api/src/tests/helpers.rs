// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use repairdesk_persistence::Persistence;
use time::OffsetDateTime;
use time::macros::datetime;

use crate::{
    AuthenticatedActor, CreateTicketRequest, CreateUserRequest, Role, TicketInfo,
    UpdateTicketRequest, UserInfo, create_ticket, create_user,
};

pub const ADMIN_EMAIL: &str = "admin@shop.test";
pub const PASSWORD: &str = "correct horse";

pub fn test_now() -> OffsetDateTime {
    datetime!(2024-12-01 10:30:00 UTC)
}

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

pub fn user_request(name: &str, email: &str, role: &str) -> CreateUserRequest {
    CreateUserRequest {
        name: String::from(name),
        phone: None,
        address: None,
        photo: None,
        role: String::from(role),
        email: String::from(email),
        password: String::from(PASSWORD),
    }
}

pub fn actor_for(user: &UserInfo) -> AuthenticatedActor {
    let role: Role = user.role.parse().expect("stored role should parse");
    AuthenticatedActor::new(user.id, user.email.clone(), role)
}

/// Creates the first admin through the unauthenticated bootstrap path.
pub fn bootstrap_admin(persistence: &mut Persistence) -> AuthenticatedActor {
    let admin: UserInfo = create_user(
        persistence,
        user_request("Admin", ADMIN_EMAIL, "admin"),
        None,
        test_now(),
    )
    .expect("Failed to bootstrap admin");
    actor_for(&admin)
}

pub fn create_staff(
    persistence: &mut Persistence,
    admin: &AuthenticatedActor,
    name: &str,
    role: &str,
) -> AuthenticatedActor {
    let email: String = format!("{}@shop.test", name.to_lowercase());
    let user: UserInfo = create_user(
        persistence,
        user_request(name, &email, role),
        Some(admin),
        test_now(),
    )
    .expect("Failed to create staff account");
    actor_for(&user)
}

pub fn ticket_request(customer_name: &str, item_type: &str) -> CreateTicketRequest {
    CreateTicketRequest {
        customer_name: String::from(customer_name),
        customer_phone: None,
        customer_address: None,
        item_type: String::from(item_type),
        completeness: None,
        serial_number: None,
        notes: None,
    }
}

pub fn open_ticket(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    customer_name: &str,
) -> TicketInfo {
    create_ticket(
        persistence,
        ticket_request(customer_name, "Laptop"),
        actor,
        test_now(),
    )
    .expect("Failed to open ticket")
}

pub const fn empty_update(id: i64) -> UpdateTicketRequest {
    UpdateTicketRequest {
        id,
        technician_id: None,
        damage_report: None,
        repair_cost: None,
        parts_cost: None,
        status: None,
    }
}
