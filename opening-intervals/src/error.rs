pub use opening_intervals_syntax::error::Error as ParserError;
