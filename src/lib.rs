// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The melodex authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Music catalog deduplication.
//!
//! Facade crate that re-exports the workspace sub-crates.

pub use melodex_core::*;

#[cfg(feature = "similarity")]
pub use melodex_similarity as similarity;
