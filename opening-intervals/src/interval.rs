//! Entries of an expanded schedule.
use std::fmt::Display;

use opening_intervals_syntax::rules::day::{SeasonRange, WeekDayRange, Weekday};
use opening_intervals_syntax::rules::time::TimeSpan;
use opening_intervals_syntax::TimeOfDay;

// Interval

/// One entry of an expanded schedule.
///
/// With the `serde` feature, this serializes to
/// `{"type": "open", "dayOfWeek": 1, "startTime": "10:00", "endTime": "18:00"}`
/// (plus `startDay` and `endDay` for seasonal entries), or to
/// `{"type": "publicHoliday", "isOpen": true, "startTime": …, "endTime": …}`.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "camelCase"))]
pub enum Interval {
    Open(OpenInterval),
    PublicHoliday(PublicHoliday),
}

impl Interval {
    #[inline]
    pub fn as_open(&self) -> Option<&OpenInterval> {
        match self {
            Self::Open(open) => Some(open),
            Self::PublicHoliday(_) => None,
        }
    }

    #[inline]
    pub fn as_public_holiday(&self) -> Option<&PublicHoliday> {
        match self {
            Self::Open(_) => None,
            Self::PublicHoliday(holiday) => Some(holiday),
        }
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open(open) => write!(f, "{open}"),
            Self::PublicHoliday(holiday) => write!(f, "{holiday}"),
        }
    }
}

impl From<OpenInterval> for Interval {
    #[inline]
    fn from(open: OpenInterval) -> Self {
        Self::Open(open)
    }
}

impl From<PublicHoliday> for Interval {
    #[inline]
    fn from(holiday: PublicHoliday) -> Self {
        Self::PublicHoliday(holiday)
    }
}

// OpenInterval

/// A weekday opening span, optionally restricted to a season of the year.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct OpenInterval {
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_weekday"))]
    pub day_of_week: Weekday,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: TimeSpan,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub season: Option<SeasonRange>,
}

impl OpenInterval {
    /// Day of the week as a number, from 1 for monday to 7 for sunday.
    ///
    /// ```
    /// use opening_intervals::{OpenInterval, TimeSpan, Weekday};
    ///
    /// let interval = OpenInterval {
    ///     day_of_week: Weekday::Sun,
    ///     span: TimeSpan::FULL_DAY,
    ///     season: None,
    /// };
    ///
    /// assert_eq!(interval.day_number(), 7);
    /// ```
    #[inline]
    pub fn day_number(&self) -> u8 {
        self.day_of_week.number_from_monday() as u8
    }

    #[inline]
    pub fn start_time(&self) -> TimeOfDay {
        self.span.start
    }

    #[inline]
    pub fn end_time(&self) -> TimeOfDay {
        self.span.end
    }
}

impl Display for OpenInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", WeekDayRange::single(self.day_of_week), self.span)?;

        if let Some(season) = &self.season {
            write!(f, " from {} to {}", season.start, season.end)?;
        }

        Ok(())
    }
}

#[cfg(feature = "serde")]
fn serialize_weekday<S: serde::Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u32(day.number_from_monday())
}

// PublicHoliday

/// Opening state on public holidays. Only the last `PH` clause of an
/// expression is kept.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PublicHoliday {
    pub is_open: bool,
    /// Always `None` when closed.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Option<TimeSpan>,
}

impl PublicHoliday {
    #[inline]
    pub const fn open(span: TimeSpan) -> Self {
        Self { is_open: true, span: Some(span) }
    }

    #[inline]
    pub const fn closed() -> Self {
        Self { is_open: false, span: None }
    }
}

impl Display for PublicHoliday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.span {
            Some(span) if self.is_open => write!(f, "PH {span}"),
            _ => write!(f, "PH off"),
        }
    }
}
