// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Staff account mutations.

use diesel::prelude::*;
#[cfg(feature = "mysql")]
use diesel::MysqlConnection;
use diesel::SqliteConnection;
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::data_models::NewUserData;
use crate::diesel_schema::users;
use crate::error::PersistenceError;

backend_fn! {
/// Creates a new staff account.
///
/// The password is hashed with bcrypt before it is stored. The email is
/// stored as given; callers normalize it first.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `new_user` - The account fields, with a plain-text password
/// * `now` - The creation timestamp, already formatted
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the email is taken,
/// or another error if hashing or the insert fails.
pub fn create_user(
    conn: &mut _,
    new_user: &NewUserData<'_>,
    now: &str,
) -> Result<i64, PersistenceError> {
    info!(role = new_user.role, "Creating user");

    let password_hash: String = bcrypt::hash(new_user.password, bcrypt::DEFAULT_COST)
        .map_err(|e| PersistenceError::Other(format!("Failed to hash password: {e}")))?;

    diesel::insert_into(users::table)
        .values((
            users::name.eq(new_user.name),
            users::phone.eq(new_user.phone),
            users::address.eq(new_user.address),
            users::photo.eq(new_user.photo),
            users::role.eq(new_user.role),
            users::email.eq(new_user.email),
            users::password_hash.eq(&password_hash),
            users::created_at.eq(now),
            users::updated_at.eq(now),
        ))
        .execute(conn)?;

    let user_id: i64 = conn.get_last_insert_rowid()?;

    info!(user_id, "User created successfully");
    Ok(user_id)
}
}
