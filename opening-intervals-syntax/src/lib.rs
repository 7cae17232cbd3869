#![doc = include_str!("../README.md")]

#[macro_use]
extern crate pest_derive;

pub mod error;
pub mod rules;
pub mod time_of_day;

mod display;
mod parser;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use parser::parse;
pub use time_of_day::TimeOfDay;
