// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The melodex authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Field name constants.
//!
//! The keys of the per-field score mappings built by the comparators.
//! Weight configurations refer to fields by these names, so they are
//! the only "schema" shared between configuration and engine.

use crate::weighting::FieldName;

/// All entities.
pub const UID: FieldName = "uid";

/// All genreable entities (albums, artists, tracks).
pub const GENRES: FieldName = "genres";

/// Albums and tracks.
pub const TITLE: FieldName = "title";

/// Artists, genres and playlists.
pub const NAME: FieldName = "name";

// Album fields
pub const RELEASE_TYPE: FieldName = "release_type";
pub const RELEASE_DATE: FieldName = "release_date";
pub const ARTISTS: FieldName = "artists";

/// Albums and playlists.
pub const TRACKS: FieldName = "tracks";

// Artist fields
pub const ALIASES: FieldName = "aliases";
pub const BEGIN_DATE: FieldName = "begin_date";
pub const END_DATE: FieldName = "end_date";
pub const EXTERNAL_IDS: FieldName = "external_ids";
pub const ORIGIN: FieldName = "origin";
pub const ARTIST_TYPE: FieldName = "artist_type";

// Track fields
pub const TRACK_TYPE: FieldName = "track_type";
pub const HIDDEN_TRACK_TITLE: FieldName = "hidden_track_title";
pub const BPM: FieldName = "bpm";
pub const MAIN_ARTISTS: FieldName = "main_artists";
pub const FEATURED_ARTISTS: FieldName = "featured_artists";
pub const PRODUCERS: FieldName = "producers";

// Version track fields, only scored when both tracks are versions
pub const VERSION_ARTISTS: FieldName = "version_artists";
pub const VERSION_TOKEN: FieldName = "version_token";
pub const VERSION_TYPE: FieldName = "version_type";
