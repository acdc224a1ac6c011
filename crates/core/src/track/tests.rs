// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The melodex authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

fn original_track() -> Track {
    Track {
        uid: EntityUid::random(),
        title: "One Title".into(),
        ..Default::default()
    }
}

#[test]
fn validate_original() {
    assert!(original_track().validate().is_ok());
}

#[test]
fn validate_version_kind_requires_version_data() {
    let mut track = original_track();
    track.kind = TrackKind::Version;
    assert!(track.validate().is_err());

    track.version = Some(TrackVersion {
        token: "Acoustic".into(),
        kind: VersionKind::Acoustic,
        ..Default::default()
    });
    assert!(track.validate().is_ok());
}

#[test]
fn validate_version_data_requires_version_kind() {
    let mut track = original_track();
    track.version = Some(TrackVersion {
        token: "Remix".into(),
        ..Default::default()
    });
    assert!(track.validate().is_err());
}

#[test]
fn validate_version_token_must_not_be_empty() {
    let mut track = original_track();
    track.kind = TrackKind::Version;
    track.version = Some(TrackVersion::default());
    assert!(track.validate().is_err());
}

#[test]
fn validate_empty_title() {
    let mut track = original_track();
    track.title = " ".into();
    assert!(track.validate().is_err());
}
