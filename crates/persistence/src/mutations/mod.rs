// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations.
//!
//! ## Module Organization
//!
//! - `users`: Account creation (passwords are hashed here)
//! - `sessions`: Session creation, activity tracking and expiry
//! - `tickets`: Ticket insertion with service-code allocation, and updates
//!
//! The only backend-specific helper used is `get_last_insert_rowid()`,
//! reached through the `PersistenceBackend` trait.

pub mod sessions;
pub mod tickets;
pub mod users;
