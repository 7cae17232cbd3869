use std::convert::TryFrom;
use std::fmt::Display;
use std::iter;

// Reexport Weekday from chrono as part of the public type.
pub use chrono::Weekday;

use crate::display::write_selector;

// Display

fn wday_str(wday: Weekday) -> &'static str {
    match wday {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}

// Errors

#[derive(Clone, Debug)]
pub struct InvalidMonth;

// DaySpec

/// The days a clause applies to.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum DaySpec {
    /// A list of weekday ranges, kept in the order they were written.
    Weekdays(Vec<WeekDayRange>),
    /// The `PH` keyword.
    PublicHoliday,
}

impl DaySpec {
    /// Return `true` if this selects exactly the whole week, which is what an
    /// omitted day selector stands for.
    pub fn is_every_day(&self) -> bool {
        matches!(self, Self::Weekdays(ranges) if ranges.as_slice() == [WeekDayRange::EVERY_DAY])
    }

    /// Expand the selector into the sequence of weekdays it covers. Ranges are
    /// concatenated in listed order and are not deduplicated.
    ///
    /// ```
    /// use opening_intervals_syntax::rules::day::{DaySpec, WeekDayRange, Weekday};
    ///
    /// let spec = DaySpec::Weekdays(vec![
    ///     WeekDayRange::new(Weekday::Sat, Weekday::Mon),
    ///     WeekDayRange::single(Weekday::Thu),
    /// ]);
    ///
    /// assert_eq!(
    ///     spec.weekdays().collect::<Vec<_>>(),
    ///     [Weekday::Sat, Weekday::Sun, Weekday::Mon, Weekday::Thu],
    /// );
    ///
    /// assert_eq!(DaySpec::PublicHoliday.weekdays().count(), 0);
    /// ```
    pub fn weekdays(&self) -> impl Iterator<Item = Weekday> + '_ {
        let ranges: &[WeekDayRange] = match self {
            Self::Weekdays(ranges) => ranges.as_slice(),
            Self::PublicHoliday => &[],
        };

        ranges.iter().flat_map(WeekDayRange::days)
    }
}

impl Default for DaySpec {
    #[inline]
    fn default() -> Self {
        Self::Weekdays(vec![WeekDayRange::EVERY_DAY])
    }
}

impl Display for DaySpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weekdays(ranges) => write_selector(f, ranges),
            Self::PublicHoliday => write!(f, "PH"),
        }
    }
}

// WeekDayRange

/// An inclusive range of weekdays, walking forward through the week. When
/// `end` comes before `start`, the range wraps over the end of the week.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct WeekDayRange {
    pub start: Weekday,
    pub end: Weekday,
}

impl WeekDayRange {
    /// All seven days, starting on monday.
    pub const EVERY_DAY: Self = Self::new(Weekday::Mon, Weekday::Sun);

    #[inline]
    pub const fn new(start: Weekday, end: Weekday) -> Self {
        Self { start, end }
    }

    #[inline]
    pub const fn single(day: Weekday) -> Self {
        Self::new(day, day)
    }

    /// Number of days covered by this range, between 1 and 7.
    ///
    /// ```
    /// use opening_intervals_syntax::rules::day::{WeekDayRange, Weekday};
    ///
    /// assert_eq!(WeekDayRange::new(Weekday::Mon, Weekday::Fri).num_days(), 5);
    /// assert_eq!(WeekDayRange::new(Weekday::Fri, Weekday::Mon).num_days(), 4);
    /// assert_eq!(WeekDayRange::new(Weekday::Sat, Weekday::Fri).num_days(), 7);
    /// assert_eq!(WeekDayRange::single(Weekday::Wed).num_days(), 1);
    /// ```
    #[inline]
    pub fn num_days(&self) -> usize {
        let start = self.start.num_days_from_monday();
        let end = self.end.num_days_from_monday();
        ((7 + end - start) % 7 + 1) as usize
    }

    /// Iterate over the days of this range, in order, starting from `start`.
    pub fn days(&self) -> impl Iterator<Item = Weekday> {
        iter::successors(Some(self.start), |day| Some(day.succ())).take(self.num_days())
    }
}

impl Display for WeekDayRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", wday_str(self.start))?;

        if self.start != self.end {
            write!(f, "-{}", wday_str(self.end))?;
        }

        Ok(())
    }
}

// SeasonRange

/// A period of the year, bounds included, during which a clause applies.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct SeasonRange {
    pub start: MonthDay,
    pub end: MonthDay,
}

impl SeasonRange {
    #[inline]
    pub const fn new(start: MonthDay, end: MonthDay) -> Self {
        Self { start, end }
    }

    /// A season which is open-ended through the end of the year.
    ///
    /// ```
    /// use opening_intervals_syntax::rules::day::{Month, MonthDay, SeasonRange};
    ///
    /// let season = SeasonRange::starting_at(MonthDay::new(Month::August, 1));
    /// assert_eq!(season.end.to_string(), "12-31");
    /// ```
    #[inline]
    pub const fn starting_at(start: MonthDay) -> Self {
        Self::new(start, MonthDay::END_OF_YEAR)
    }
}

impl Display for SeasonRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {:02} - {} {:02}",
            self.start.month, self.start.day, self.end.month, self.end.day,
        )
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SeasonRange {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("SeasonRange", 2)?;
        state.serialize_field("startDay", &self.start)?;
        state.serialize_field("endDay", &self.end)?;
        state.end()
    }
}

// MonthDay

/// A day of the year without any year attached, displayed as `MM-DD`.
///
/// The day is only checked to be in `1..=31`: `Feb 30` is a valid value.
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub struct MonthDay {
    pub month: Month,
    pub day: u8,
}

impl MonthDay {
    /// The last day of the year, *December 31*.
    pub const END_OF_YEAR: Self = Self::new(Month::December, 31);

    #[inline]
    pub const fn new(month: Month, day: u8) -> Self {
        Self { month, day }
    }
}

impl Display for MonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}-{:02}", self.month as u8, self.day)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MonthDay {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// Month

#[derive(Copy, Clone, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl Month {
    /// The month that follows, wrapping back to January after December.
    ///
    /// ```
    /// use opening_intervals_syntax::rules::day::Month;
    ///
    /// assert_eq!(Month::March.next(), Month::April);
    /// assert_eq!(Month::December.next(), Month::January);
    /// ```
    #[inline]
    pub fn next(self) -> Self {
        let num = self as u8;

        match Self::try_from((num % 12) + 1) {
            Ok(month) => month,
            Err(InvalidMonth) => unreachable!("month number out of 1..=12"),
        }
    }

    /// Abbreviated name of the month (`"Jan"`, `"Feb"`, ...).
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::January => "Jan",
            Self::February => "Feb",
            Self::March => "Mar",
            Self::April => "Apr",
            Self::May => "May",
            Self::June => "Jun",
            Self::July => "Jul",
            Self::August => "Aug",
            Self::September => "Sep",
            Self::October => "Oct",
            Self::November => "Nov",
            Self::December => "Dec",
        }
    }
}

impl Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<u8> for Month {
    type Error = InvalidMonth;

    #[inline]
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => Self::January,
            2 => Self::February,
            3 => Self::March,
            4 => Self::April,
            5 => Self::May,
            6 => Self::June,
            7 => Self::July,
            8 => Self::August,
            9 => Self::September,
            10 => Self::October,
            11 => Self::November,
            12 => Self::December,
            _ => return Err(InvalidMonth),
        })
    }
}

impl From<Month> for u8 {
    #[inline]
    fn from(val: Month) -> Self {
        val as _
    }
}
