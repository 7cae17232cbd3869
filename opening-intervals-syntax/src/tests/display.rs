use crate::error::Result;
use crate::parser::parse;

macro_rules! ex {
    ( $( $tt: expr ),* $( , )? ) => {
        (file!(), line!() $( , $tt )*)
    };
}

const EXAMPLES: &[(&str, u32, &str, &str)] = &[
    ex!("", ""),
    ex!("24/7", "24/7"),
    ex!("00:00-24:00", "24/7"),
    ex!("Mo-Su", "24/7"),
    ex!("Mo-Su open", "24/7"),
    ex!("off", "off"),
    ex!("mo-fr", "Mo-Fr"),
    ex!("Mo open", "Mo"),
    ex!("Mo,Tu", "Mo,Tu"),
    ex!("Sa-Fr", "Sa-Fr"),
    ex!("Su-We; Tu-Th 10:00-18:00", "Su-We ; Tu-Th 10:00-18:00"),
    ex!(
        "Mo-Fr 10:00-18:00;Sa-Su 10:00-12:00",
        "Mo-Fr 10:00-18:00 ; Sa-Su 10:00-12:00",
    ),
    ex!(
        "Mo-Fr 08:00 - 12:00 , 13:00-17:00",
        "Mo-Fr 08:00-12:00,13:00-17:00",
    ),
    ex!("We-Su; Fr,Sa off; ph 00:00-24:00", "We-Su ; Fr,Sa off ; PH"),
    ex!("Mo-Fr; PH closed", "Mo-Fr ; PH off"),
    ex!("PH 10:00-12:00 off", "PH off"),
    ex!("Aug 01 - Oct 31 00:00-24:00", "Aug 01 - Oct 31"),
    ex!("Aug 01 Mo 00:00-24:00", "Aug 01 - Dec 31 Mo"),
    ex!("aug 1-15 10:00-12:00", "Aug 01 - Aug 15 10:00-12:00"),
    ex!("Dec 20-05", "Dec 20 - Jan 05"),
    ex!("Feb 30 Sa", "Feb 30 - Dec 31 Sa"),
];

#[test]
fn canonical_form() -> Result<()> {
    for (file, line, raw, expected) in EXAMPLES {
        let formatted = parse(raw)?.to_string();

        assert_eq!(
            &formatted, expected,
            "unexpected canonical form for `{raw}` ({file}:{line})",
        );
    }

    Ok(())
}

#[test]
fn canonical_form_is_stable() -> Result<()> {
    for (file, line, raw, _) in EXAMPLES {
        let expr = parse(raw)?;
        let reparsed = parse(&expr.to_string())?;

        assert_eq!(
            expr.to_string(),
            reparsed.to_string(),
            "formatting `{raw}` is not stable ({file}:{line})",
        );
    }

    Ok(())
}
