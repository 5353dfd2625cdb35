use chrono::{Datelike, NaiveDate, Weekday};
use chore_chart::WeekRange;

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn week_of_a_friday_runs_sunday_to_saturday() {
    // 2026-10-16 is a Friday
    let week = WeekRange::containing(d(2026, 10, 16));
    assert_eq!(week.start(), d(2026, 10, 11));
    assert_eq!(week.end(), d(2026, 10, 17));
    assert_eq!(week.start().weekday(), Weekday::Sun);
    assert_eq!(week.end().weekday(), Weekday::Sat);
}

#[test]
fn sunday_starts_its_own_week() {
    let week = WeekRange::containing(d(2026, 10, 11));
    assert_eq!(week.start(), d(2026, 10, 11));
}

#[test]
fn saturday_belongs_to_the_preceding_sunday() {
    let week = WeekRange::containing(d(2026, 10, 17));
    assert_eq!(week.start(), d(2026, 10, 11));
}

#[test]
fn every_day_of_a_week_maps_to_the_same_range() {
    let expected = WeekRange::containing(d(2025, 3, 2));
    for day in 2..=8 {
        let date = d(2025, 3, day);
        let week = WeekRange::containing(date);
        assert_eq!(week, expected, "{date}");
        assert!(week.contains(date));
    }
    assert!(!expected.contains(d(2025, 3, 9)));
    assert!(!expected.contains(d(2025, 3, 1)));
}

#[test]
fn caption_uses_month_day_year() {
    let week = WeekRange::containing(d(2026, 10, 16));
    assert_eq!(week.caption(), "10/11/2026 - 10/17/2026");
    assert_eq!(week.to_string(), week.caption());
}

#[test]
fn week_can_span_a_new_year() {
    // 2026-01-01 is a Thursday
    let week = WeekRange::containing(d(2026, 1, 1));
    assert_eq!(week.caption(), "12/28/2025 - 01/03/2026");
}

#[test]
fn day_resolves_weekday_within_the_week() {
    let week = WeekRange::containing(d(2026, 10, 16));
    assert_eq!(week.day(Weekday::Sun), d(2026, 10, 11));
    assert_eq!(week.day(Weekday::Wed), d(2026, 10, 14));
    assert_eq!(week.day(Weekday::Sat), d(2026, 10, 17));
}
