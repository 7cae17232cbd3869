use pest::iterators::Pair;
use pest::Parser;

use crate::error::{Error, Result};
use crate::rules as rl;
use crate::rules::day as ds;
use crate::rules::time as ts;
use crate::time_of_day::TimeOfDay;

#[derive(Parser)]
#[grammar = "grammar.pest"]
struct OIParser;

/// Just used while collecting a clause
#[derive(PartialEq, Eq)]
enum Modifier {
    Open,
    Closed,
}

/// Parse a raw expression into its list of clauses.
///
/// ```
/// use opening_intervals_syntax::parse;
///
/// let expr = parse("Mo-Fr 10:00-18:00; PH off").unwrap();
/// assert_eq!(expr.clauses.len(), 2);
/// assert!(parse("").unwrap().is_empty());
/// assert!(parse("not a schedule").is_err());
/// ```
pub fn parse(data: &str) -> Result<rl::ScheduleExpression> {
    let schedule_pair = OIParser::parse(Rule::input_schedule, data)
        .map_err(Error::from)?
        .next()
        .expect("grammar error: no schedule found");

    let clauses = build_schedule(schedule_pair)?;
    Ok(rl::ScheduleExpression { clauses })
}

fn unexpected_token<T>(token: Rule, parent: Rule) -> T {
    unreachable!("Grammar error: found `{token:?}` inside of `{parent:?}`")
}

// ---
// --- Clauses
// ---

fn build_schedule(pair: Pair<Rule>) -> Result<Vec<rl::Clause>> {
    assert_eq!(pair.as_rule(), Rule::schedule);
    pair.into_inner().map(build_clause).collect()
}

fn build_clause(pair: Pair<Rule>) -> Result<rl::Clause> {
    assert_eq!(pair.as_rule(), Rule::clause);
    let mut clause = rl::Clause::default();
    let mut modifier = None;

    for pair in pair.into_inner() {
        match pair.as_rule() {
            Rule::always_open => {}
            Rule::season_selector => clause.season = Some(build_season_selector(pair)?),
            Rule::day_selector => clause.days = build_day_selector(pair),
            Rule::time_selector => clause.times = ts::TimeSpec::Open(build_time_selector(pair)?),
            Rule::rule_modifier => modifier = Some(build_rule_modifier(pair)),
            other => unexpected_token(other, Rule::clause),
        }
    }

    if modifier == Some(Modifier::Closed) {
        clause.times = ts::TimeSpec::Off;
    }

    Ok(clause)
}

fn build_rule_modifier(pair: Pair<Rule>) -> Modifier {
    assert_eq!(pair.as_rule(), Rule::rule_modifier);

    match pair
        .into_inner()
        .next()
        .expect("grammar error: empty rule modifier")
        .as_rule()
    {
        Rule::rule_modifier_closed => Modifier::Closed,
        Rule::rule_modifier_open => Modifier::Open,
        other => unexpected_token(other, Rule::rule_modifier),
    }
}

// ---
// --- Season selector
// ---

fn build_season_selector(pair: Pair<Rule>) -> Result<ds::SeasonRange> {
    assert_eq!(pair.as_rule(), Rule::season_selector);
    let mut pairs = pair.into_inner();
    let start = build_date_from(pairs.next().expect("empty season selector"))?;

    let end = match pairs.next() {
        Some(pair) => build_date_to(pair, start)?,
        None => ds::MonthDay::END_OF_YEAR,
    };

    Ok(ds::SeasonRange { start, end })
}

fn build_date_from(pair: Pair<Rule>) -> Result<ds::MonthDay> {
    assert_eq!(pair.as_rule(), Rule::date_from);
    let mut pairs = pair.into_inner();
    let month = build_month(pairs.next().expect("missing month"));
    let day = build_daynum(pairs.next().expect("missing day"))?;
    Ok(ds::MonthDay { month, day })
}

fn build_date_to(pair: Pair<Rule>, from: ds::MonthDay) -> Result<ds::MonthDay> {
    assert_eq!(pair.as_rule(), Rule::date_to);
    let pair = pair.into_inner().next().expect("empty date (to)");

    Ok(match pair.as_rule() {
        Rule::date_from => build_date_from(pair)?,
        Rule::daynum => {
            let day = build_daynum(pair)?;

            // A bare day number ends in the same month, or the next one when
            // it comes before the starting day (`Jan 25-05` ends in February).
            let month = {
                if from.day > day {
                    from.month.next()
                } else {
                    from.month
                }
            };

            ds::MonthDay { month, day }
        }
        other => unexpected_token(other, Rule::date_to),
    })
}

// ---
// --- Day selector
// ---

fn build_day_selector(pair: Pair<Rule>) -> ds::DaySpec {
    assert_eq!(pair.as_rule(), Rule::day_selector);
    let pair = pair.into_inner().next().expect("empty day selector");

    match pair.as_rule() {
        Rule::public_holiday => ds::DaySpec::PublicHoliday,
        Rule::weekday_sequence => {
            ds::DaySpec::Weekdays(pair.into_inner().map(build_weekday_range).collect())
        }
        other => unexpected_token(other, Rule::day_selector),
    }
}

fn build_weekday_range(pair: Pair<Rule>) -> ds::WeekDayRange {
    assert_eq!(pair.as_rule(), Rule::weekday_range);
    let mut pairs = pair.into_inner();
    let start = build_wday(pairs.next().expect("empty weekday range"));
    let end = pairs.next().map(build_wday).unwrap_or(start);
    ds::WeekDayRange { start, end }
}

// ---
// --- Time selector
// ---

fn build_time_selector(pair: Pair<Rule>) -> Result<Vec<ts::TimeSpan>> {
    assert_eq!(pair.as_rule(), Rule::time_selector);
    pair.into_inner().map(build_timespan).collect()
}

fn build_timespan(pair: Pair<Rule>) -> Result<ts::TimeSpan> {
    assert_eq!(pair.as_rule(), Rule::timespan);
    let mut pairs = pair.into_inner();
    let start = build_time(pairs.next().expect("empty timespan"))?;
    let end = build_time(pairs.next().expect("missing end of timespan"))?;
    Ok(ts::TimeSpan { start, end })
}

fn build_time(pair: Pair<Rule>) -> Result<TimeOfDay> {
    assert_eq!(pair.as_rule(), Rule::time);
    let span = pair.as_span();
    let mut pairs = pair.into_inner();

    let hour = pairs
        .next()
        .expect("missing hour")
        .as_str()
        .parse()
        .expect("invalid hour");

    let minute = pairs
        .next()
        .expect("missing minutes")
        .as_str()
        .parse()
        .expect("invalid minutes");

    TimeOfDay::new(hour, minute).ok_or_else(|| {
        Error::invalid_value(
            span,
            format!("`{}` is not a valid time, expected 00:00 to 24:00", span.as_str()),
        )
    })
}

// ---
// --- Basic elements
// ---

fn build_wday(pair: Pair<Rule>) -> ds::Weekday {
    assert_eq!(pair.as_rule(), Rule::wday);
    let pair = pair.into_inner().next().expect("empty week day");

    match pair.as_rule() {
        Rule::sunday => ds::Weekday::Sun,
        Rule::monday => ds::Weekday::Mon,
        Rule::tuesday => ds::Weekday::Tue,
        Rule::wednesday => ds::Weekday::Wed,
        Rule::thursday => ds::Weekday::Thu,
        Rule::friday => ds::Weekday::Fri,
        Rule::saturday => ds::Weekday::Sat,
        other => unexpected_token(other, Rule::wday),
    }
}

fn build_daynum(pair: Pair<Rule>) -> Result<u8> {
    assert_eq!(pair.as_rule(), Rule::daynum);
    let daynum: u8 = pair.as_str().parse().expect("invalid day number format");

    if !(1..=31).contains(&daynum) {
        #[cfg(feature = "log")]
        log::debug!("Rejected day number {daynum} in expression");

        return Err(Error::invalid_value(
            pair.as_span(),
            format!("day number {daynum} is out of range, expected 1 to 31"),
        ));
    }

    Ok(daynum)
}

fn build_month(pair: Pair<Rule>) -> ds::Month {
    assert_eq!(pair.as_rule(), Rule::month);
    let pair = pair.into_inner().next().expect("empty month");

    match pair.as_rule() {
        Rule::january => ds::Month::January,
        Rule::february => ds::Month::February,
        Rule::march => ds::Month::March,
        Rule::april => ds::Month::April,
        Rule::may => ds::Month::May,
        Rule::june => ds::Month::June,
        Rule::july => ds::Month::July,
        Rule::august => ds::Month::August,
        Rule::september => ds::Month::September,
        Rule::october => ds::Month::October,
        Rule::november => ds::Month::November,
        Rule::december => ds::Month::December,
        other => unexpected_token(other, Rule::month),
    }
}
