use std::fmt::Display;

use crate::display::write_selector;
use crate::time_of_day::TimeOfDay;

// TimeSpec

/// What a clause does to the days it selects.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum TimeSpec {
    /// Open during each of these spans, in the order they were written.
    Open(Vec<TimeSpan>),
    /// The `off` keyword: selected days are closed.
    Off,
}

impl TimeSpec {
    #[inline]
    pub fn is_off(&self) -> bool {
        matches!(self, Self::Off)
    }

    /// Return `true` if this is the implicit *00:00-24:00* selector.
    #[inline]
    pub fn is_full_day(&self) -> bool {
        matches!(self, Self::Open(spans) if spans.as_slice() == [TimeSpan::FULL_DAY])
    }

    /// List open spans, which is empty when closed.
    #[inline]
    pub fn spans(&self) -> &[TimeSpan] {
        match self {
            Self::Open(spans) => spans,
            Self::Off => &[],
        }
    }
}

impl Default for TimeSpec {
    #[inline]
    fn default() -> Self {
        Self::Open(vec![TimeSpan::FULL_DAY])
    }
}

impl Display for TimeSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open(spans) => write_selector(f, spans),
            Self::Off => write!(f, "off"),
        }
    }
}

// TimeSpan

/// A start and end time, passed through as written: the end may come before
/// the start and spans are not checked for overlaps.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct TimeSpan {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl TimeSpan {
    /// The whole day, from *00:00* to *24:00*.
    pub const FULL_DAY: Self = Self::new(TimeOfDay::MIDNIGHT, TimeOfDay::END_OF_DAY);

    #[inline]
    pub const fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }
}

impl Display for TimeSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TimeSpan {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("TimeSpan", 2)?;
        state.serialize_field("startTime", &self.start)?;
        state.serialize_field("endTime", &self.end)?;
        state.end()
    }
}
