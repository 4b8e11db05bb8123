use chrono::{DateTime, Local, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTier {
    Past,
    Today,
    Tomorrow,
    Week,
    Future,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventStatus {
    pub tier: StatusTier,
    pub label: String,
}

/// Classify an event date relative to `now`.
///
/// The badge follows `ceil((date at local midnight - now) / 1 day)`; since the
/// event anchors at midnight, that ceiling is exactly the calendar-day
/// difference between `date` and `now`'s date. Pure and deterministic given
/// `now`; callers pass a fresh `now` on every draw so badges roll over as time
/// advances.
pub fn classify(date: NaiveDate, now: DateTime<Local>) -> EventStatus {
    let days_diff = date.signed_duration_since(now.date_naive()).num_days();

    let (tier, label) = match days_diff {
        d if d < 0 => (StatusTier::Past, "Past".to_string()),
        0 => (StatusTier::Today, "Today".to_string()),
        1 => (StatusTier::Tomorrow, "Tomorrow".to_string()),
        d if d <= 7 => (StatusTier::Week, format!("In {} days", d)),
        d => (StatusTier::Future, format!("In {} days", d)),
    };

    EventStatus { tier, label }
}
