// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, normalize_customer_name, normalize_email, normalize_item_type, normalize_name,
    normalize_optional, validate_password,
};

#[test]
fn test_name_is_trimmed() {
    assert_eq!(normalize_name("  Budi  ").unwrap(), "Budi");
}

#[test]
fn test_blank_name_is_rejected() {
    assert!(matches!(
        normalize_name("   "),
        Err(DomainError::InvalidName(_))
    ));
}

#[test]
fn test_email_is_trimmed_and_lowercased() {
    assert_eq!(
        normalize_email("  Alice@Shop.Test ").unwrap(),
        "alice@shop.test"
    );
}

#[test]
fn test_email_requires_local_and_domain_parts() {
    for input in ["", "   ", "alice", "@shop.test", "alice@", "a@b@c"] {
        assert!(
            matches!(normalize_email(input), Err(DomainError::InvalidEmail(_))),
            "expected '{input}' to be rejected"
        );
    }
}

#[test]
fn test_empty_password_is_rejected() {
    assert!(validate_password("").is_err());
    assert!(validate_password(" secret ").is_ok());
}

#[test]
fn test_customer_name_and_item_type_are_required() {
    assert!(matches!(
        normalize_customer_name(""),
        Err(DomainError::InvalidCustomerName(_))
    ));
    assert!(matches!(
        normalize_item_type("  "),
        Err(DomainError::InvalidItemType(_))
    ));
    assert_eq!(normalize_customer_name(" Siti ").unwrap(), "Siti");
    assert_eq!(normalize_item_type("Laptop").unwrap(), "Laptop");
}

#[test]
fn test_optional_fields_blank_becomes_none() {
    assert_eq!(normalize_optional(None), None);
    assert_eq!(normalize_optional(Some(String::new())), None);
    assert_eq!(normalize_optional(Some(String::from("  "))), None);
    assert_eq!(
        normalize_optional(Some(String::from(" charger "))),
        Some(String::from("charger"))
    );
}
