// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! MySQL/MariaDB-specific persistence utilities.
//!
//! Compiled only with the `mysql` feature, which needs the `MySQL`
//! client libraries at build time.
//!
//! `migrations_mysql/` must stay schema-equivalent to `migrations/`:
//! same tables, columns, nullability, uniqueness, checks and foreign
//! keys, written in `MySQL` syntax. Change both directories together.

use diesel::dsl::sql;
use diesel::sql_types::{BigInt, Integer};
use diesel::{Connection, MysqlConnection, QueryableByName, RunQueryDsl};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

use crate::error::PersistenceError;

#[derive(QueryableByName)]
struct ForeignKeyCheck {
    #[diesel(sql_type = Integer)]
    fk_checks: i32,
}

/// Returns the `AUTO_INCREMENT` id of the most recent insert on this connection.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_last_insert_rowid(conn: &mut MysqlConnection) -> Result<i64, PersistenceError> {
    Ok(diesel::select(sql::<BigInt>("LAST_INSERT_ID()")).get_result(conn)?)
}

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations_mysql");

/// Connects to `MySQL`/`MariaDB` and runs pending migrations.
///
/// No session settings are changed; `foreign_key_checks` is left at the
/// server default and checked separately.
///
/// # Errors
///
/// Returns an error if connection or migration fails.
pub fn initialize_database(database_url: &str) -> Result<MysqlConnection, PersistenceError> {
    info!("Initializing MySQL database");

    let mut conn: MysqlConnection = MysqlConnection::establish(database_url)?;
    let applied: usize = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?
        .len();
    info!(applied, "MySQL migrations up to date");

    Ok(conn)
}

/// Verifies that `foreign_key_checks` is on for this session.
///
/// Session rows reference users; with checks off an orphaned session
/// would be accepted silently.
///
/// # Errors
///
/// Returns an error if the check is off or cannot be read.
pub fn verify_foreign_key_enforcement(conn: &mut MysqlConnection) -> Result<(), PersistenceError> {
    let check: ForeignKeyCheck =
        diesel::sql_query("SELECT @@foreign_key_checks AS fk_checks").get_result(conn)?;

    if check.fk_checks != 1 {
        return Err(PersistenceError::ForeignKeyEnforcementNotEnabled);
    }

    info!("MySQL foreign key enforcement is enabled");
    Ok(())
}
