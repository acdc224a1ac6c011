// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The melodex authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

#[test]
fn default_uid_is_nil_and_invalid() {
    assert!(EntityUid::default().is_nil());
    assert!(EntityUid::default().validate().is_err());
}

#[test]
fn random_uid_is_valid_and_unique() {
    let uid = EntityUid::random();
    assert!(uid.validate().is_ok());
    assert_ne!(uid, EntityUid::random());
}

#[test]
fn uid_string_roundtrip() {
    let uid = EntityUid::random();
    let encoded = uid.to_string();
    assert_eq!(uid, encoded.parse().unwrap());
}
