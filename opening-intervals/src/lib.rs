#![doc = include_str!("../../README.md")]
// Enable doc_auto_cfg feature when building docs on the nightly channel
// (which will be the case for docs.rs).
#![allow(unexpected_cfgs)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]

pub mod accumulator;
pub mod error;
pub mod interval;
pub mod opening_intervals;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::error::ParserError;
pub use crate::interval::{Interval, OpenInterval, PublicHoliday};
pub use crate::opening_intervals::{parse, OpeningIntervals};
pub use opening_intervals_syntax::rules::day::{MonthDay, SeasonRange, Weekday};
pub use opening_intervals_syntax::rules::time::TimeSpan;
pub use opening_intervals_syntax::TimeOfDay;
