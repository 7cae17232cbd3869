pub mod day;
pub mod time;

use std::fmt::Display;

// ScheduleExpression

/// A parsed expression: its clauses in source order.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct ScheduleExpression {
    pub clauses: Vec<Clause>,
}

impl ScheduleExpression {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

impl Display for ScheduleExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Some(first) = self.clauses.first() else {
            return Ok(());
        };

        write!(f, "{first}")?;

        for clause in &self.clauses[1..] {
            write!(f, " ; {clause}")?;
        }

        Ok(())
    }
}

// Clause

/// One `;`-separated part of an expression. The default value is `24/7`.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct Clause {
    pub season: Option<day::SeasonRange>,
    pub days: day::DaySpec,
    pub times: time::TimeSpec,
}

impl Clause {
    #[inline]
    pub fn is_always_open(&self) -> bool {
        self.season.is_none() && self.days.is_every_day() && self.times.is_full_day()
    }
}

impl Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_always_open() {
            return write!(f, "24/7");
        }

        let mut is_empty = true;

        let mut write_part = |f: &mut std::fmt::Formatter<'_>, part: &dyn Display| {
            if !is_empty {
                write!(f, " ")?;
            }

            is_empty = false;
            write!(f, "{part}")
        };

        if let Some(season) = &self.season {
            write_part(f, season)?;
        }

        if !self.days.is_every_day() {
            write_part(f, &self.days)?;
        }

        if !self.times.is_full_day() {
            write_part(f, &self.times)?;
        }

        Ok(())
    }
}
