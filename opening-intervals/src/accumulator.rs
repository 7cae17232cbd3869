//! Apply clauses one after the other, in source order, so that later clauses
//! override earlier ones.
//!
//! Each weekday owns a single slot. Writing to an occupied slot replaces its
//! content but keeps its position in the output, writing to an empty slot
//! appends it after all other days.
use opening_intervals_syntax::rules::day::{DaySpec, SeasonRange, WeekDayRange, Weekday};
use opening_intervals_syntax::rules::time::{TimeSpan, TimeSpec};
use opening_intervals_syntax::rules::Clause;

use crate::interval::{Interval, OpenInterval, PublicHoliday};

// DaySlot

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
struct DaySlot {
    /// Position of the day in the output, lower comes first.
    rank: usize,
    spans: Vec<TimeSpan>,
    season: Option<SeasonRange>,
}

// Accumulator

/// Ordered state of a schedule while its clauses are applied.
///
/// ```
/// use opening_intervals::accumulator::Accumulator;
/// use opening_intervals::{TimeSpan, Weekday};
///
/// let mut acc = Accumulator::new();
/// acc.upsert_open(Weekday::Sun, vec![TimeSpan::FULL_DAY], None);
/// acc.upsert_open(Weekday::Mon, vec![TimeSpan::FULL_DAY], None);
/// acc.upsert_open(Weekday::Sun, vec![], None);
///
/// assert_eq!(acc.open_days().collect::<Vec<_>>(), [Weekday::Sun, Weekday::Mon]);
/// ```
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct Accumulator {
    /// Indexed by the number of days from monday.
    slots: [Option<DaySlot>; 7],
    holiday: Option<PublicHoliday>,
    next_rank: usize,
}

impl Accumulator {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `true` if no day is open and there is no public holiday entry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.holiday.is_none() && self.slots.iter().all(Option::is_none)
    }

    /// Apply the effect of a clause on current state.
    pub fn apply(&mut self, clause: &Clause) {
        if clause.days == DaySpec::PublicHoliday {
            self.apply_public_holiday(clause);
            return;
        }

        for day in clause.days.weekdays() {
            match &clause.times {
                TimeSpec::Off => self.remove_open(day),
                TimeSpec::Open(spans) => self.upsert_open(day, spans.clone(), clause.season),
            }
        }
    }

    fn apply_public_holiday(&mut self, clause: &Clause) {
        if clause.season.is_some() {
            #[cfg(feature = "log")]
            log::debug!("Season is ignored for public holidays in `{clause}`");
        }

        let holiday = match &clause.times {
            TimeSpec::Off => PublicHoliday::closed(),
            TimeSpec::Open(spans) => {
                if spans.len() > 1 {
                    #[cfg(feature = "log")]
                    log::warn!("Only the last time span is kept for public holidays in `{clause}`");
                }

                PublicHoliday::open(spans.last().copied().unwrap_or(TimeSpan::FULL_DAY))
            }
        };

        self.set_holiday(holiday);
    }

    /// Set the opening spans of a day. An existing day keeps its position,
    /// otherwise it is appended after all other days.
    pub fn upsert_open(&mut self, day: Weekday, spans: Vec<TimeSpan>, season: Option<SeasonRange>) {
        let index = day.num_days_from_monday() as usize;

        if let Some(slot) = &mut self.slots[index] {
            slot.spans = spans;
            slot.season = season;
        } else {
            self.slots[index] = Some(DaySlot { rank: self.next_rank, spans, season });
            self.next_rank += 1;
        }
    }

    /// Close a day, this is a no-op if the day is not open.
    #[inline]
    pub fn remove_open(&mut self, day: Weekday) {
        self.slots[day.num_days_from_monday() as usize] = None;
    }

    #[inline]
    pub fn set_holiday(&mut self, holiday: PublicHoliday) {
        self.holiday = Some(holiday);
    }

    #[inline]
    pub fn clear_holiday(&mut self) {
        self.holiday = None;
    }

    #[inline]
    pub fn holiday(&self) -> Option<&PublicHoliday> {
        self.holiday.as_ref()
    }

    /// List days that currently have a slot, in output order.
    pub fn open_days(&self) -> impl Iterator<Item = Weekday> {
        let mut days: Vec<_> = WeekDayRange::EVERY_DAY
            .days()
            .zip(&self.slots)
            .filter_map(|(day, slot)| Some((slot.as_ref()?.rank, day)))
            .collect();

        days.sort_unstable_by_key(|(rank, _)| *rank);
        days.into_iter().map(|(_, day)| day)
    }

    /// Build the final list of intervals: each open day in order, with all of
    /// its spans, followed by the public holiday entry if any.
    pub fn flatten(self) -> Vec<Interval> {
        let mut days: Vec<_> = WeekDayRange::EVERY_DAY
            .days()
            .zip(self.slots)
            .filter_map(|(day, slot)| Some((day, slot?)))
            .collect();

        days.sort_unstable_by_key(|(_, slot)| slot.rank);

        days.into_iter()
            .flat_map(|(day_of_week, slot)| {
                let season = slot.season;

                slot.spans.into_iter().map(move |span| {
                    Interval::Open(OpenInterval { day_of_week, span, season })
                })
            })
            .chain(self.holiday.map(Interval::PublicHoliday))
            .collect()
    }
}
