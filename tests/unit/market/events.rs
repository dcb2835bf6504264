//! Unit tests for the risk-event calendar

use chrono::NaiveDate;
use goldsight::market::generate_risk_events;
use goldsight::models::EventImpact;

#[test]
fn test_calendar_projected_from_last_date() {
    let last = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
    let events = generate_risk_events(last);

    assert_eq!(events.len(), 12);
    assert_eq!(events[0].title, "US CPI Release");
    assert_eq!(events[0].date, last + chrono::Duration::days(2));
    assert_eq!(events[11].date, last + chrono::Duration::days(35));
}

#[test]
fn test_events_are_ordered_and_classified() {
    let last = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
    let events = generate_risk_events(last);

    for pair in events.windows(2) {
        assert!(pair[0].date < pair[1].date);
    }
    assert!(events.iter().any(|e| e.impact == EventImpact::High));
    assert!(events.iter().any(|e| e.impact == EventImpact::Low));
}
