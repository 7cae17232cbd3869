use std::borrow::Cow;
use std::fmt;

use pest::error::{ErrorVariant, InputLocation, LineColLocation};
use pest::Span;

use crate::parser::Rule;

pub type Result<T> = std::result::Result<T, Error>;

/// The input is not a valid expression.
///
/// This is raised for the whole input as soon as one clause can't be read,
/// no partial result is ever built.
#[derive(Clone, Debug)]
pub struct Error(Box<pest::error::Error<Rule>>);

impl Error {
    /// Reject a token which is well formed but holds an out of range value.
    pub(crate) fn invalid_value(span: Span<'_>, message: impl Into<String>) -> Self {
        let variant = ErrorVariant::CustomError { message: message.into() };
        Self(Box::new(pest::error::Error::new_from_span(variant, span)))
    }

    /// Byte offset in the input where the error starts.
    pub fn position(&self) -> usize {
        match self.0.location {
            InputLocation::Pos(pos) => pos,
            InputLocation::Span((start, _)) => start,
        }
    }

    /// Line and column, both starting at 1, where the error starts.
    pub fn line_col(&self) -> (usize, usize) {
        match self.0.line_col {
            LineColLocation::Pos(pos) => pos,
            LineColLocation::Span(start, _) => start,
        }
    }

    /// Description of the error, without the input excerpt.
    pub fn message(&self) -> Cow<'_, str> {
        self.0.variant.message()
    }
}

impl From<pest::error::Error<Rule>> for Error {
    fn from(pest_err: pest::error::Error<Rule>) -> Self {
        Self(Box::new(pest_err))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for Error {}
