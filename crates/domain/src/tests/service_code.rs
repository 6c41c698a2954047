// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ServiceCode, day_key};
use std::str::FromStr;
use time::macros::date;

#[test]
fn test_first_code_of_the_day() {
    let code: ServiceCode = ServiceCode::new(date!(2024 - 12 - 01), 1).unwrap();
    assert_eq!(code.to_string(), "SRV-20241201-001");
}

#[test]
fn test_ordinal_is_zero_padded_to_three_digits() {
    let code: ServiceCode = ServiceCode::new(date!(2024 - 12 - 01), 42).unwrap();
    assert_eq!(code.to_string(), "SRV-20241201-042");
}

#[test]
fn test_ordinal_widens_past_999() {
    let code: ServiceCode = ServiceCode::new(date!(2024 - 12 - 01), 1000).unwrap();
    assert_eq!(code.to_string(), "SRV-20241201-1000");
}

#[test]
fn test_ordinal_zero_is_rejected() {
    assert!(ServiceCode::new(date!(2024 - 12 - 01), 0).is_err());
}

#[test]
fn test_day_key() {
    assert_eq!(day_key(date!(2025 - 01 - 09)), "20250109");
}

#[test]
fn test_parse_valid_code() {
    let code: ServiceCode = ServiceCode::from_str("SRV-20241201-007").unwrap();
    assert_eq!(code, ServiceCode::new(date!(2024 - 12 - 01), 7).unwrap());
}

#[test]
fn test_parse_wide_code() {
    let code: ServiceCode = ServiceCode::from_str("SRV-20241201-1234").unwrap();
    assert_eq!(code, ServiceCode::new(date!(2024 - 12 - 01), 1234).unwrap());
}

#[test]
fn test_parse_rejects_malformed_codes() {
    for input in [
        "",
        "SRV",
        "SRV-20241201",
        "ABC-20241201-001",
        "SRV-2024121-001",
        "SRV-20241301-001",
        "SRV-20240230-001",
        "SRV-20241201-01",
        "SRV-20241201-000",
        "SRV-20241201-0001",
        "SRV-20241201-00a",
        "SRV-20241201-001-x",
        "srv-20241201-001",
    ] {
        assert!(
            ServiceCode::from_str(input).is_err(),
            "expected '{input}' to be rejected"
        );
    }
}

#[test]
fn test_serializes_as_string() {
    let code: ServiceCode = ServiceCode::new(date!(2024 - 12 - 01), 3).unwrap();
    assert_eq!(
        serde_json::to_string(&code).unwrap(),
        "\"SRV-20241201-003\""
    );
}
