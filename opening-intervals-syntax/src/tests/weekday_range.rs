use crate::rules::day::{WeekDayRange, Weekday};

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[test]
fn expansion_length_is_cyclic_distance() {
    for start in WEEK {
        for end in WEEK {
            let range = WeekDayRange::new(start, end);
            let days: Vec<_> = range.days().collect();
            let distance = (7 + end.num_days_from_monday() - start.num_days_from_monday()) % 7;

            assert_eq!(days.len(), distance as usize + 1, "{range}");
            assert_eq!(days.len(), range.num_days(), "{range}");
            assert_eq!(days.first(), Some(&start), "{range}");
            assert_eq!(days.last(), Some(&end), "{range}");
        }
    }
}

#[test]
fn expansion_wraps_over_sunday() {
    let days: Vec<_> = WeekDayRange::new(Weekday::Sat, Weekday::Fri).days().collect();

    assert_eq!(
        days,
        [
            Weekday::Sat,
            Weekday::Sun,
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
        ]
    );

    let days: Vec<_> = WeekDayRange::new(Weekday::Fri, Weekday::Sun).days().collect();
    assert_eq!(days, [Weekday::Fri, Weekday::Sat, Weekday::Sun]);
}

#[test]
fn every_day_starts_on_monday() {
    let days: Vec<_> = WeekDayRange::EVERY_DAY.days().collect();
    assert_eq!(days, WEEK);
}
