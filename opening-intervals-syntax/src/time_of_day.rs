use std::fmt::{Debug, Display};

/// An hour+minute struct going from *00:00* to *24:00*, the latter being the
/// end of the day.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// The beginning of the day, *00:00*.
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };

    /// The end of the day, *24:00*.
    pub const END_OF_DAY: Self = Self { hour: 24, minute: 0 };

    /// Create a new time of day, this may return `None` if input values are
    /// out of range.
    ///
    /// ```
    /// use opening_intervals_syntax::TimeOfDay;
    ///
    /// assert!(TimeOfDay::new(18, 30).is_some());
    /// assert!(TimeOfDay::new(24, 0).is_some());
    /// assert!(TimeOfDay::new(24, 30).is_none()); // only 24:00 is allowed past 23:59
    /// assert!(TimeOfDay::new(12, 60).is_none()); // minutes are out of bound
    /// ```
    #[inline]
    pub const fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour > 24 || minute > 59 || (hour == 24 && minute > 0) {
            None
        } else {
            Some(Self { hour, minute })
        }
    }

    /// Get the number of full hours in this time.
    ///
    /// ```
    /// use opening_intervals_syntax::TimeOfDay;
    ///
    /// let time = TimeOfDay::new(17, 35).unwrap();
    /// assert_eq!(time.hour(), 17);
    /// ```
    #[inline]
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Get the number of remaining minutes in this time.
    ///
    /// ```
    /// use opening_intervals_syntax::TimeOfDay;
    ///
    /// let time = TimeOfDay::new(17, 35).unwrap();
    /// assert_eq!(time.minute(), 35);
    /// ```
    #[inline]
    pub fn minute(self) -> u8 {
        self.minute
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Debug for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::result::Result<(), std::fmt::Error> {
        write!(f, "{self}")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TimeOfDay {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
