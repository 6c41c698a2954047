// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{TEST_NOW, new_user};
use crate::{NewUserData, PersistenceError, SqlitePersistence, UserData, verify_password};

#[test]
fn test_create_and_fetch_user() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    let new: NewUserData<'_> = NewUserData {
        name: "Budi Santoso",
        phone: Some("0812-000-111"),
        address: Some("Jl. Merdeka 1"),
        photo: None,
        role: "teknisi",
        email: "budi@shop.test",
        password: "rahasia",
    };
    let user_id: i64 = persistence.create_user(&new, TEST_NOW).unwrap();

    let user: UserData = persistence.get_user_by_id(user_id).unwrap().unwrap();
    assert_eq!(user.name, "Budi Santoso");
    assert_eq!(user.phone.as_deref(), Some("0812-000-111"));
    assert_eq!(user.address.as_deref(), Some("Jl. Merdeka 1"));
    assert_eq!(user.photo, None);
    assert_eq!(user.role, "teknisi");
    assert_eq!(user.created_at, TEST_NOW);
    assert_eq!(user.updated_at, TEST_NOW);

    let by_email: UserData = persistence
        .get_user_by_email("budi@shop.test")
        .unwrap()
        .unwrap();
    assert_eq!(by_email.user_id, user_id);
}

#[test]
fn test_password_is_hashed() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let user_id: i64 = persistence
        .create_user(&new_user("Ana", "ana@shop.test", "admin"), TEST_NOW)
        .unwrap();

    let user: UserData = persistence.get_user_by_id(user_id).unwrap().unwrap();
    assert_ne!(user.password_hash, "password");
    assert!(verify_password("password", &user.password_hash).unwrap());
    assert!(!verify_password("wrong", &user.password_hash).unwrap());
}

#[test]
fn test_duplicate_email_is_unique_violation() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    persistence
        .create_user(&new_user("Ana", "ana@shop.test", "admin"), TEST_NOW)
        .unwrap();

    let result: Result<i64, PersistenceError> =
        persistence.create_user(&new_user("Other Ana", "ana@shop.test", "cs"), TEST_NOW);

    assert!(matches!(
        result,
        Err(PersistenceError::UniqueViolation { .. })
    ));
    assert_eq!(persistence.count_users().unwrap(), 1);
}

#[test]
fn test_unknown_role_is_rejected_by_schema() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    let result: Result<i64, PersistenceError> =
        persistence.create_user(&new_user("Ana", "ana@shop.test", "manager"), TEST_NOW);

    assert!(result.is_err());
}

#[test]
fn test_missing_user_lookups_return_none() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    assert!(persistence.get_user_by_id(42).unwrap().is_none());
    assert!(
        persistence
            .get_user_by_email("nobody@shop.test")
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_list_users_newest_first() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    let older: i64 = persistence
        .create_user(
            &new_user("Old", "old@shop.test", "admin"),
            "2024-11-30 09:00:00",
        )
        .unwrap();
    let newer: i64 = persistence
        .create_user(&new_user("New", "new@shop.test", "cs"), TEST_NOW)
        .unwrap();
    let same_second: i64 = persistence
        .create_user(&new_user("Same", "same@shop.test", "kasir"), TEST_NOW)
        .unwrap();

    let ids: Vec<i64> = persistence
        .list_users()
        .unwrap()
        .into_iter()
        .map(|u| u.user_id)
        .collect();

    assert_eq!(ids, vec![same_second, newer, older]);
}
