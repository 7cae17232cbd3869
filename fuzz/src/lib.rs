//! Development module that shares the fuzzing logic between unit tests and
//! the actual fuzzing.

use arbitrary::Arbitrary;

use opening_intervals::OpeningIntervals;

/// A fuzzing example
#[derive(Arbitrary, Clone, Debug)]
pub struct Data {
    pub expression: String,
    pub operation: Operation,
}

/// What operation to perform on the input
#[derive(Arbitrary, Clone, Debug)]
pub enum Operation {
    /// Only check that expanding the expression doesn't panic.
    Expand,
    /// Check that the expansion is unchanged after a transformation.
    Compare(CompareWith),
}

/// What transformation to apply on the input before comparing
#[derive(Arbitrary, Clone, Debug)]
pub enum CompareWith {
    /// Format the parsed expression back to a string.
    Stringified,
    /// Change the case of all keywords.
    Uppercased,
}

/// Run a fuzzing test and return `true` if the example should be kept in
/// corpus.
pub fn run_fuzz_oi(data: Data) -> bool {
    let Ok(expr) = opening_intervals_syntax::parse(&data.expression) else {
        return false;
    };

    let oi_1 = OpeningIntervals::from_expression(&expr);

    match &data.operation {
        Operation::Expand => {
            let _ = oi_1.to_string();
        }
        Operation::Compare(compare_with) => {
            let raw_2 = match compare_with {
                CompareWith::Stringified => expr.to_string(),
                CompareWith::Uppercased => data.expression.to_uppercase(),
            };

            let oi_2 = OpeningIntervals::parse(&raw_2).unwrap_or_else(|err| {
                eprintln!("[ERR] Initial Expression: {}", data.expression);
                eprintln!("[ERR] Invalid transformed Expression: {raw_2}");
                panic!("{err}")
            });

            assert_eq!(oi_1, oi_2);
        }
    }

    true
}
