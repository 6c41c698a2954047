// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the `RepairDesk` backend.
//!
//! This crate sits between the HTTP server and the lower layers. It owns
//! the request/response shapes, resolves sessions into actors, enforces
//! the role rules, and translates domain, core and persistence errors
//! into [`ApiError`].

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod auth;
mod capabilities;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{
    AuthenticatedActor, AuthenticationService, AuthorizationService, INVALID_CREDENTIALS,
};
pub use capabilities::compute_ticket_capabilities;
pub use error::{
    ApiError, AuthError, translate_core_error, translate_domain_error,
    translate_persistence_error,
};
pub use handlers::{
    create_ticket, create_user, get_ticket, list_tickets, list_users, login, logout,
    ticket_stats, update_ticket, whoami,
};
pub use request_response::{
    Capability, CreateTicketRequest, CreateUserRequest, ListTicketsResponse, ListUsersResponse,
    LoginRequest, LoginResponse, TicketCapabilities, TicketInfo, TicketListEntry,
    TicketStatsResponse, UpdateTicketRequest, UserInfo,
};
pub use repairdesk_domain::Role;
