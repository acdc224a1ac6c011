// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The melodex authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;

use jiff::{Timestamp, civil::Date};

use crate::prelude::*;

pub type TimestampMillis = i64;

/// UTC instant with milliseconds precision.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct UtcInstantMs(TimestampMillis);

impl UtcInstantMs {
    #[must_use]
    pub const fn from_unix_timestamp_millis(unix_timestamp_millis: TimestampMillis) -> Self {
        Self(unix_timestamp_millis)
    }

    #[must_use]
    pub const fn unix_timestamp_millis(self) -> TimestampMillis {
        let Self(millis) = self;
        millis
    }

    #[must_use]
    pub fn now() -> Self {
        Self(Timestamp::now().as_millisecond())
    }
}

// 4-digit year
pub type YearType = i16;

// 2-digit month
pub type MonthType = i8;

// 2-digit day of month
pub type DayOfMonthType = i8;

pub type CalendarDateValue = i32;

/// 8-digit year+month+day (YYYYMMDD).
///
/// Partial dates are permitted: the day and/or the month may be zero
/// when only coarser precision is known, e.g. `20240300` for
/// "March 2024" or `20240000` for just "2024".
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct CalendarDate(CalendarDateValue);

impl CalendarDate {
    pub const MIN: Self = Self(10_000);

    pub const MAX: Self = Self(99_991_231);

    #[must_use]
    pub const fn new_unchecked(value: CalendarDateValue) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> CalendarDateValue {
        let Self(value) = self;
        value
    }

    #[must_use]
    pub const fn year(self) -> YearType {
        (self.0 / 10_000) as YearType
    }

    #[must_use]
    pub const fn month(self) -> MonthType {
        ((self.0 % 10_000) / 100) as MonthType
    }

    #[must_use]
    pub const fn day_of_month(self) -> DayOfMonthType {
        (self.0 % 100) as DayOfMonthType
    }

    /// Months since the calendar epoch, ignoring the day of month.
    ///
    /// Used for calculating the distance between two dates in months.
    /// Year-only dates (month = 0) degrade gracefully to year
    /// precision.
    #[must_use]
    pub const fn total_months(self) -> i64 {
        self.year() as i64 * 12 + self.month() as i64
    }

    #[must_use]
    pub fn from_date(from: Date) -> Self {
        Self(
            CalendarDateValue::from(from.year()) * 10_000
                + CalendarDateValue::from(from.month()) * 100
                + CalendarDateValue::from(from.day()),
        )
    }

    #[must_use]
    pub fn from_year(year: YearType) -> Self {
        Self(CalendarDateValue::from(year) * 10_000)
    }

    #[must_use]
    pub fn from_year_month(year: YearType, month: MonthType) -> Self {
        Self(CalendarDateValue::from(year) * 10_000 + CalendarDateValue::from(month) * 100)
    }

    #[must_use]
    pub fn is_year(self) -> bool {
        Self::from_year(self.year()) == self
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        <Self as IsValid>::is_valid(self)
    }
}

#[derive(Copy, Clone, Debug)]
pub enum CalendarDateInvalidity {
    Min,
    Max,
    MonthOutOfRange,
    DayOfMonthOutOfRange,
    DayWithoutMonth,
    Invalid,
}

impl Validate for CalendarDate {
    type Invalidity = CalendarDateInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .invalidate_if(*self < Self::MIN, Self::Invalidity::Min)
            .invalidate_if(*self > Self::MAX, Self::Invalidity::Max)
            .invalidate_if(self.month() > 12, Self::Invalidity::MonthOutOfRange)
            .invalidate_if(
                self.day_of_month() > 31,
                Self::Invalidity::DayOfMonthOutOfRange,
            )
            .invalidate_if(
                self.month() < 1 && self.day_of_month() > 0,
                Self::Invalidity::DayWithoutMonth,
            )
            .invalidate_if(
                (1..=12).contains(&self.month())
                    && (1..=31).contains(&self.day_of_month())
                    && Date::new(self.year(), self.month(), self.day_of_month()).is_err(),
                Self::Invalidity::Invalid,
            )
            .into()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_year() {
            return write!(f, "{:04}", self.year());
        }
        if (1..=12).contains(&self.month()) && self.day_of_month() <= 31 {
            if let Ok(date) = Date::new(self.year(), self.month(), self.day_of_month()) {
                return write!(f, "{date}");
            }
        }
        if self.day_of_month() == 0 {
            return write!(f, "{:04}-{:02}", self.year(), self.month());
        }
        // Fallback
        let Self(inner) = self;
        write!(f, "{inner:08}")
    }
}
