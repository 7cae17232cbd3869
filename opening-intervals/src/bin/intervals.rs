use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use opening_intervals::OpeningIntervals;

fn main() -> ExitCode {
    let expression = env::args().nth(1);
    run(expression.as_deref(), &mut io::stdout(), &mut io::stderr())
}

fn run(expression: Option<&str>, out: &mut impl Write, err: &mut impl Write) -> ExitCode {
    let Some(expression) = expression else {
        let _ = writeln!(err, "Usage: ./intervals <EXPRESSION>");
        return ExitCode::FAILURE;
    };

    match print_intervals(expression, out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            let _ = writeln!(err, "{message}");
            ExitCode::FAILURE
        }
    }
}

fn print_intervals(expression: &str, out: &mut impl Write) -> Result<(), String> {
    let expr = opening_intervals_syntax::parse(expression).map_err(|err| err.to_string())?;
    let intervals = OpeningIntervals::from_expression(&expr);

    #[cfg(feature = "serde")]
    {
        let json = serde_json::to_string_pretty(&intervals).map_err(|err| err.to_string())?;
        writeln!(out, "{json}").map_err(|err| err.to_string())?;
    }

    #[cfg(not(feature = "serde"))]
    {
        let write = |out: &mut dyn Write| -> io::Result<()> {
            writeln!(out, " - expression: {expression}")?;
            writeln!(out, " - formatted: {expr}")?;
            writeln!(out, "---")?;

            if intervals.is_empty() {
                writeln!(out, " (empty)")?;
            }

            for interval in &intervals {
                writeln!(out, " - {interval}")?;
            }

            Ok(())
        };

        write(out).map_err(|err| err.to_string())?;
    }

    Ok(())
}
