use opening_intervals_syntax::rules::day::{Month, MonthDay, WeekDayRange, Weekday};
use opening_intervals_syntax::TimeOfDay;

/// Build an expected open interval from literals:
/// `open!(1, "10:00" => "18:00")` or `open!(1, "10:00" => "18:00", "08-01" => "12-31")`.
macro_rules! open {
    ( $day: expr, $start: expr => $end: expr ) => {{
        use opening_intervals_syntax::rules::time::TimeSpan;
        use $crate::interval::{Interval, OpenInterval};
        use $crate::tests::{time, weekday};

        Interval::Open(OpenInterval {
            day_of_week: weekday($day),
            span: TimeSpan::new(time($start), time($end)),
            season: None,
        })
    }};
    ( $day: expr, $start: expr => $end: expr, $from: expr => $to: expr ) => {{
        use opening_intervals_syntax::rules::day::SeasonRange;
        use opening_intervals_syntax::rules::time::TimeSpan;
        use $crate::interval::{Interval, OpenInterval};
        use $crate::tests::{month_day, time, weekday};

        Interval::Open(OpenInterval {
            day_of_week: weekday($day),
            span: TimeSpan::new(time($start), time($end)),
            season: Some(SeasonRange::new(month_day($from), month_day($to))),
        })
    }};
}

/// Build an expected public holiday entry: `holiday!(off)` or
/// `holiday!("08:00" => "12:00")`.
macro_rules! holiday {
    ( off ) => {{
        use $crate::interval::{Interval, PublicHoliday};
        Interval::PublicHoliday(PublicHoliday::closed())
    }};
    ( $start: expr => $end: expr ) => {{
        use opening_intervals_syntax::rules::time::TimeSpan;
        use $crate::interval::{Interval, PublicHoliday};
        use $crate::tests::time;

        Interval::PublicHoliday(PublicHoliday::open(TimeSpan::new(time($start), time($end))))
    }};
}



pub(crate) fn time(raw: &str) -> TimeOfDay {
    let (hour, minute) = raw.split_once(':').expect("invalid time literal");

    TimeOfDay::new(
        hour.parse().expect("invalid hour literal"),
        minute.parse().expect("invalid minute literal"),
    )
    .expect("time literal out of range")
}

pub(crate) fn weekday(num: u8) -> Weekday {
    WeekDayRange::EVERY_DAY
        .days()
        .nth(usize::from(num) - 1)
        .expect("weekday number out of range")
}

pub(crate) fn month_day(raw: &str) -> MonthDay {
    let (month, day) = raw.split_once('-').expect("invalid date literal");
    let month: u8 = month.parse().expect("invalid month literal");

    MonthDay::new(
        Month::try_from(month).expect("month literal out of range"),
        day.parse().expect("invalid day literal"),
    )
}

/// All seven days open from midnight to midnight, monday first.
pub(crate) fn full_week() -> Vec<crate::Interval> {
    (1..=7).map(|day| open!(day, "00:00" => "24:00")).collect()
}
