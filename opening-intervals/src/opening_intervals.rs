use std::fmt::Display;
use std::str::FromStr;

use opening_intervals_syntax::rules::ScheduleExpression;

use crate::accumulator::Accumulator;
use crate::error::ParserError;
use crate::interval::{Interval, OpenInterval, PublicHoliday};

/// Expand a raw expression into its ordered list of intervals.
///
/// ```
/// use opening_intervals::{parse, Interval};
///
/// let intervals = parse("Mo-Fr 10:00-18:00; We off").unwrap();
/// assert_eq!(intervals.len(), 4);
/// assert!(parse("").unwrap().is_empty());
/// assert!(parse("not a schedule").is_err());
/// ```
pub fn parse(raw: &str) -> Result<Vec<Interval>, ParserError> {
    Ok(OpeningIntervals::parse(raw)?.into_vec())
}

// OpeningIntervals

/// The expansion of an expression: open intervals ordered by the first clause
/// that introduced their weekday, followed by the public holiday entry.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct OpeningIntervals {
    intervals: Vec<Interval>,
}

impl OpeningIntervals {
    /// Parse and expand a raw expression.
    ///
    /// ```
    /// use opening_intervals::OpeningIntervals;
    ///
    /// assert!(OpeningIntervals::parse("24/7").is_ok());
    /// assert!(OpeningIntervals::parse("not a valid expression").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, ParserError> {
        let expr = opening_intervals_syntax::parse(raw)?;
        Ok(Self::from_expression(&expr))
    }

    /// Expand an already parsed expression.
    pub fn from_expression(expr: &ScheduleExpression) -> Self {
        let mut acc = Accumulator::new();

        for clause in &expr.clauses {
            acc.apply(clause);
        }

        Self { intervals: acc.flatten() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Interval] {
        &self.intervals
    }

    #[inline]
    pub fn into_vec(self) -> Vec<Interval> {
        self.intervals
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    /// Iterate over weekday intervals, skipping the public holiday entry.
    ///
    /// ```
    /// use opening_intervals::OpeningIntervals;
    ///
    /// let oi = OpeningIntervals::parse("Sa-Su; PH off").unwrap();
    /// let days: Vec<_> = oi.open().map(|open| open.day_number()).collect();
    /// assert_eq!(days, [6, 7]);
    /// ```
    pub fn open(&self) -> impl Iterator<Item = &OpenInterval> {
        self.intervals.iter().filter_map(Interval::as_open)
    }

    /// Get the public holiday entry, if any `PH` clause was found.
    ///
    /// ```
    /// use opening_intervals::OpeningIntervals;
    ///
    /// let oi = OpeningIntervals::parse("Mo-Fr; PH off").unwrap();
    /// assert!(!oi.public_holiday().unwrap().is_open);
    /// assert!(OpeningIntervals::parse("Mo-Fr").unwrap().public_holiday().is_none());
    /// ```
    pub fn public_holiday(&self) -> Option<&PublicHoliday> {
        self.intervals.last()?.as_public_holiday()
    }

    /// Serialize intervals as a JSON array.
    ///
    /// ```
    /// use opening_intervals::OpeningIntervals;
    ///
    /// let oi = OpeningIntervals::parse("Mo 10:00-18:00").unwrap();
    ///
    /// assert_eq!(
    ///     oi.to_json().unwrap(),
    ///     r#"[{"type":"open","dayOfWeek":1,"startTime":"10:00","endTime":"18:00"}]"#,
    /// );
    /// ```
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl FromStr for OpeningIntervals {
    type Err = ParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<OpeningIntervals> for Vec<Interval> {
    #[inline]
    fn from(val: OpeningIntervals) -> Self {
        val.into_vec()
    }
}

impl IntoIterator for OpeningIntervals {
    type Item = Interval;
    type IntoIter = std::vec::IntoIter<Interval>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.intervals.into_iter()
    }
}

impl<'a> IntoIterator for &'a OpeningIntervals {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl Display for OpeningIntervals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for interval in &self.intervals {
            writeln!(f, "{interval}")?;
        }

        Ok(())
    }
}
