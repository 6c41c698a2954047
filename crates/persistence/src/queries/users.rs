// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Staff account queries.

use diesel::prelude::*;
#[cfg(feature = "mysql")]
use diesel::MysqlConnection;
use diesel::SqliteConnection;
use tracing::debug;

use crate::data_models::UserData;
use crate::diesel_schema::users;
use crate::error::PersistenceError;

/// Diesel Queryable struct for user rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = users)]
struct UserRow {
    user_id: i64,
    name: String,
    phone: Option<String>,
    address: Option<String>,
    photo: Option<String>,
    role: String,
    email: String,
    password_hash: String,
    created_at: String,
    updated_at: String,
}

impl From<UserRow> for UserData {
    fn from(row: UserRow) -> Self {
        Self {
            user_id: row.user_id,
            name: row.name,
            phone: row.phone,
            address: row.address,
            photo: row.photo,
            role: row.role,
            email: row.email,
            password_hash: row.password_hash,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

backend_fn! {
/// Retrieves a user by email.
///
/// The email is expected to be normalized already (trimmed, lowercase).
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no user has this email.
pub fn get_user_by_email(
    conn: &mut _,
    email: &str,
) -> Result<Option<UserData>, PersistenceError> {
    debug!("Looking up user by email");

    let result: Result<UserRow, diesel::result::Error> = users::table
        .filter(users::email.eq(email))
        .select(UserRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(UserData::from(row))),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Retrieves a user by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the user is not found.
pub fn get_user_by_id(
    conn: &mut _,
    user_id: i64,
) -> Result<Option<UserData>, PersistenceError> {
    debug!(user_id, "Looking up user by ID");

    let result: Result<UserRow, diesel::result::Error> = users::table
        .filter(users::user_id.eq(user_id))
        .select(UserRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(UserData::from(row))),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Lists all users, newest first.
///
/// Users created within the same second are ordered by descending id.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_users(conn: &mut _) -> Result<Vec<UserData>, PersistenceError> {
    debug!("Listing all users");

    let rows: Vec<UserRow> = users::table
        .select(UserRow::as_select())
        .order_by((users::created_at.desc(), users::user_id.desc()))
        .load(conn)?;

    Ok(rows.into_iter().map(UserData::from).collect())
}
}

backend_fn! {
/// Counts all users.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_users(conn: &mut _) -> Result<i64, PersistenceError> {
    use diesel::dsl::count;

    let count: i64 = users::table
        .select(count(users::user_id))
        .first(conn)?;

    debug!("Total users: {}", count);
    Ok(count)
}
}

/// Verifies a password against a stored bcrypt hash.
///
/// # Errors
///
/// Returns an error if the hash is malformed.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, PersistenceError> {
    bcrypt::verify(password, password_hash)
        .map_err(|e| PersistenceError::Other(format!("Failed to verify password: {e}")))
}
