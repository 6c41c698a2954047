// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! ## Module Organization
//!
//! - `users`: Staff account lookups and password verification
//! - `sessions`: Session lookups
//! - `tickets`: Ticket lookups, listing and per-status counts
//!
//! Every query is generated by `backend_fn!` in a `_sqlite` version and,
//! with the `mysql` feature, a `_mysql` version. The `Persistence`
//! adapter in `lib.rs` dispatches to the one matching its connection.

pub mod sessions;
pub mod tickets;
pub mod users;
