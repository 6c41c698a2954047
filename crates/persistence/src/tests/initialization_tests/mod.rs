// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend initialization tests.
//!
//! Every other persistence test opens `SqlitePersistence::new_in_memory()`,
//! so connection setup and migrations are exercised throughout. These
//! tests cover isolation and file-backed databases explicitly.

use super::{TEST_NOW, new_user};
use crate::SqlitePersistence;

#[test]
fn test_persistence_initialization() {
    let result: Result<SqlitePersistence, crate::error::PersistenceError> =
        SqlitePersistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_foreign_key_enforcement_is_enabled() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    assert!(persistence.verify_foreign_key_enforcement().is_ok());
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let mut db1 = SqlitePersistence::new_in_memory().unwrap();
    let mut db2 = SqlitePersistence::new_in_memory().unwrap();

    db1.create_user(&new_user("Ana", "ana@shop.test", "admin"), TEST_NOW)
        .unwrap();

    assert_eq!(db1.count_users().unwrap(), 1, "db1 should have 1 user");
    assert_eq!(db2.count_users().unwrap(), 0, "db2 should be isolated");
}

#[test]
fn test_migrations_applied_on_initialization() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    assert!(persistence.list_users().unwrap().is_empty());
    assert!(persistence.list_tickets().unwrap().is_empty());
    assert_eq!(persistence.ticket_stats().unwrap().total, 0);
}

#[test]
fn test_file_database_survives_reopen() {
    let path = std::env::temp_dir().join(format!(
        "repairdesk_reopen_{}.db",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    {
        let mut persistence = SqlitePersistence::new_with_file(&path).unwrap();
        persistence
            .create_user(&new_user("Ana", "ana@shop.test", "admin"), TEST_NOW)
            .unwrap();
    }

    let mut reopened = SqlitePersistence::new_with_file(&path).unwrap();
    assert_eq!(reopened.count_users().unwrap(), 1);

    drop(reopened);
    let _ = std::fs::remove_file(&path);
    let _ = std::fs::remove_file(path.with_extension("db-wal"));
    let _ = std::fs::remove_file(path.with_extension("db-shm"));
}
