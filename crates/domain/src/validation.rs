// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// Trims a user's display name and requires it to be non-empty.
///
/// # Errors
///
/// Returns `DomainError::InvalidName` if the trimmed name is empty.
pub fn normalize_name(name: &str) -> Result<String, DomainError> {
    let trimmed: &str = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be empty",
        )));
    }
    Ok(trimmed.to_string())
}

/// Normalizes an email address for storage and lookup.
///
/// Emails are trimmed and lowercased so that `Alice@Shop.test` and
/// `alice@shop.test` are the same account.
///
/// # Errors
///
/// Returns `DomainError::InvalidEmail` if the address is empty or does
/// not have text on both sides of a single `@`.
pub fn normalize_email(email: &str) -> Result<String, DomainError> {
    let normalized: String = email.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(DomainError::InvalidEmail(String::from(
            "Email cannot be empty",
        )));
    }

    match normalized.split_once('@') {
        Some((local, domain))
            if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
        {
            Ok(normalized)
        }
        _ => Err(DomainError::InvalidEmail(format!(
            "'{normalized}' is not an email address"
        ))),
    }
}

/// Requires a password to be non-empty.
///
/// Passwords are not trimmed; leading and trailing spaces are significant.
///
/// # Errors
///
/// Returns `DomainError::InvalidPassword` if the password is empty.
pub fn validate_password(password: &str) -> Result<(), DomainError> {
    if password.is_empty() {
        return Err(DomainError::InvalidPassword(String::from(
            "Password cannot be empty",
        )));
    }
    Ok(())
}

/// Trims the customer name on a new ticket and requires it.
///
/// # Errors
///
/// Returns `DomainError::InvalidCustomerName` if the trimmed value is empty.
pub fn normalize_customer_name(value: &str) -> Result<String, DomainError> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidCustomerName(String::from(
            "Customer name cannot be empty",
        )));
    }
    Ok(trimmed.to_string())
}

/// Trims the item type on a new ticket and requires it.
///
/// # Errors
///
/// Returns `DomainError::InvalidItemType` if the trimmed value is empty.
pub fn normalize_item_type(value: &str) -> Result<String, DomainError> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidItemType(String::from(
            "Item type cannot be empty",
        )));
    }
    Ok(trimmed.to_string())
}

/// Trims an optional text field. Blank values become `None`.
#[must_use]
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
