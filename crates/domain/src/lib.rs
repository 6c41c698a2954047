// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod error;
mod money;
mod permissions;
mod service_code;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use money::Money;
pub use permissions::{
    can_assign_technician, can_create_ticket, can_edit, can_edit_ticket, can_manage_users,
};
pub use service_code::{ServiceCode, day_key};
pub use types::{Role, Ticket, TicketStatus, format_timestamp, parse_timestamp};
pub use validation::{
    normalize_customer_name, normalize_email, normalize_item_type, normalize_name,
    normalize_optional, validate_password,
};
