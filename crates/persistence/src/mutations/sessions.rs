// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session mutations.
//!
//! Timestamps are passed in pre-formatted so that expiry comparisons
//! are plain text comparisons on a fixed-width format.

use diesel::prelude::*;
#[cfg(feature = "mysql")]
use diesel::MysqlConnection;
use diesel::SqliteConnection;
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::sessions;
use crate::error::PersistenceError;

backend_fn! {
/// Creates a new session.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `session_token` - The opaque bearer token
/// * `user_id` - The user the session belongs to
/// * `now` - The creation timestamp
/// * `expires_at` - The expiration timestamp
///
/// # Errors
///
/// Returns an error if the session cannot be created.
pub fn create_session(
    conn: &mut _,
    session_token: &str,
    user_id: i64,
    now: &str,
    expires_at: &str,
) -> Result<i64, PersistenceError> {
    debug!(user_id, "Creating session");

    diesel::insert_into(sessions::table)
        .values((
            sessions::session_token.eq(session_token),
            sessions::user_id.eq(user_id),
            sessions::created_at.eq(now),
            sessions::last_activity_at.eq(now),
            sessions::expires_at.eq(expires_at),
        ))
        .execute(conn)?;

    let session_id: i64 = conn.get_last_insert_rowid()?;

    info!(session_id, user_id, "Session created");
    Ok(session_id)
}
}

backend_fn! {
/// Records activity on a session.
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn update_session_activity(
    conn: &mut _,
    session_id: i64,
    now: &str,
) -> Result<(), PersistenceError> {
    diesel::update(sessions::table)
        .filter(sessions::session_id.eq(session_id))
        .set(sessions::last_activity_at.eq(now))
        .execute(conn)?;

    Ok(())
}
}

backend_fn! {
/// Deletes a session by token.
///
/// Returns the number of sessions removed (0 or 1).
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn delete_session(conn: &mut _, session_token: &str) -> Result<usize, PersistenceError> {
    let rows_affected: usize = diesel::delete(sessions::table)
        .filter(sessions::session_token.eq(session_token))
        .execute(conn)?;

    debug!(rows_affected, "Deleted session");
    Ok(rows_affected)
}
}

backend_fn! {
/// Deletes every session whose expiry is at or before `now`.
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn delete_expired_sessions(conn: &mut _, now: &str) -> Result<usize, PersistenceError> {
    let rows_affected: usize = diesel::delete(sessions::table)
        .filter(sessions::expires_at.le(now))
        .execute(conn)?;

    info!("Deleted {} expired sessions", rows_affected);
    Ok(rows_affected)
}
}
