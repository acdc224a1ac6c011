// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The melodex authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;

use crate::prelude::*;

pub type DurationMsValue = f64;

/// Audio playback duration in milliseconds.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct DurationMs(DurationMsValue);

impl DurationMs {
    pub const UNIT_OF_MEASURE: &'static str = "ms";

    #[must_use]
    pub const fn new(value: DurationMsValue) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> DurationMsValue {
        let Self(value) = self;
        value
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self(0.0)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self <= Self::empty()
    }
}

#[derive(Copy, Clone, Debug)]
pub enum DurationMsInvalidity {
    OutOfRange,
}

impl Validate for DurationMs {
    type Invalidity = DurationMsInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .invalidate_if(
                !(self.value().is_finite() && *self >= Self::empty()),
                Self::Invalidity::OutOfRange,
            )
            .into()
    }
}

impl fmt::Display for DurationMs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{value} {unit}",
            value = self.value(),
            unit = Self::UNIT_OF_MEASURE
        )
    }
}
