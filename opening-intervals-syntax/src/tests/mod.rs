mod display;
mod weekday_range;
