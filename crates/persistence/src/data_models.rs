// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use repairdesk_domain::TicketStatus;

/// A stored staff account.
///
/// `role` is kept as its wire string; the API layer parses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserData {
    pub user_id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub photo: Option<String>,
    pub role: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Fields for a new staff account. The password is plain text and is
/// hashed before it reaches the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUserData<'a> {
    pub name: &'a str,
    pub phone: Option<&'a str>,
    pub address: Option<&'a str>,
    pub photo: Option<&'a str>,
    pub role: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// A stored login session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionData {
    pub session_id: i64,
    pub session_token: String,
    pub user_id: i64,
    pub created_at: String,
    pub last_activity_at: String,
    pub expires_at: String,
}

/// Ticket counts grouped by status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketStats {
    pub total: u64,
    pub received: u64,
    pub in_progress: u64,
    pub completed: u64,
    pub cancelled: u64,
    pub picked_up: u64,
}

impl TicketStats {
    /// Adds `count` tickets in `status` to the tally.
    pub const fn record(&mut self, status: TicketStatus, count: u64) {
        match status {
            TicketStatus::Received => self.received += count,
            TicketStatus::InProgress => self.in_progress += count,
            TicketStatus::Completed => self.completed += count,
            TicketStatus::Cancelled => self.cancelled += count,
            TicketStatus::PickedUp => self.picked_up += count,
        }
        self.total += count;
    }

    /// Returns the count for one status.
    #[must_use]
    pub const fn count(&self, status: TicketStatus) -> u64 {
        match status {
            TicketStatus::Received => self.received,
            TicketStatus::InProgress => self.in_progress,
            TicketStatus::Completed => self.completed,
            TicketStatus::Cancelled => self.cancelled,
            TicketStatus::PickedUp => self.picked_up,
        }
    }
}
