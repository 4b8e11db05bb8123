use chrono::{NaiveDate, NaiveTime};

use super::event::Event;

pub const NAME_MAX: usize = 100;
pub const LOCATION_MAX: usize = 200;
pub const DESCRIPTION_MAX: usize = 500;

/// Form field a validation message is tagged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Date,
    Time,
    Location,
    Description,
}

/// Field-keyed validation messages. Each violated rule contributes exactly one
/// message for its field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    errors: Vec<(Field, String)>,
}

impl FieldErrors {
    fn push(&mut self, field: Field, message: impl Into<String>) {
        self.errors.push((field, message.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, m)| m.as_str())
    }
}

/// Raw form input, as typed. The image is attached separately (already
/// encoded) and is never a validation subject here.
#[derive(Debug, Clone, Default)]
pub struct EventInput {
    pub name: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
    pub image: Option<String>,
}

/// A validated event waiting for an id from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub name: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl EventDraft {
    pub fn into_event(self, id: String) -> Event {
        Event {
            id,
            name: self.name,
            date: self.date,
            time: self.time,
            location: self.location,
            description: self.description,
            image: self.image,
        }
    }
}

/// Validate raw input against the event rules. Produces either a draft
/// carrying the exact input values or the full set of per-field messages,
/// never both. `today` is the calendar date at submit time; dates before it
/// are rejected (a past time-of-day on a valid date is accepted, the date and
/// time fields are independent).
pub fn validate(input: &EventInput, today: NaiveDate) -> Result<EventDraft, FieldErrors> {
    let mut errors = FieldErrors::default();

    let name = input.name.as_str();
    if name.is_empty() {
        errors.push(Field::Name, "Event name is required");
    } else if name.chars().count() > NAME_MAX {
        errors.push(Field::Name, "Name must be less than 100 characters");
    }

    let mut date = None;
    if input.date.trim().is_empty() {
        errors.push(Field::Date, "Please select a date");
    } else {
        match NaiveDate::parse_from_str(input.date.trim(), "%Y-%m-%d") {
            Ok(d) if d < today => {
                errors.push(Field::Date, "Date cannot be in the past");
            }
            Ok(d) => date = Some(d),
            Err(_) => errors.push(Field::Date, "Please enter a valid date (YYYY-MM-DD)"),
        }
    }

    let time = input.time.as_str();
    if time.is_empty() {
        errors.push(Field::Time, "Time is required");
    } else if !is_valid_time(time) {
        errors.push(Field::Time, "Please enter a valid time (HH:MM)");
    }

    let location = input.location.as_str();
    if location.is_empty() {
        errors.push(Field::Location, "Location is required");
    } else if location.chars().count() > LOCATION_MAX {
        errors.push(Field::Location, "Location must be less than 200 characters");
    }

    let description = input.description.as_str();
    if description.chars().count() > DESCRIPTION_MAX {
        errors.push(
            Field::Description,
            "Description must be less than 500 characters",
        );
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(EventDraft {
        name: name.to_string(),
        date: date.expect("date validated above"),
        time: time.to_string(),
        location: location.to_string(),
        description: if description.is_empty() {
            None
        } else {
            Some(description.to_string())
        },
        image: input.image.clone(),
    })
}

/// 24-hour `HH:MM`, single-digit hour accepted ("9:30"), 00-23 / 00-59.
fn is_valid_time(s: &str) -> bool {
    let Some((h, m)) = s.split_once(':') else {
        return false;
    };
    if h.is_empty() || h.len() > 2 || m.len() != 2 {
        return false;
    }
    if !h.bytes().all(|b| b.is_ascii_digit()) || !m.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    NaiveTime::parse_from_str(&format!("{:0>2}:{}", h, m), "%H:%M").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()
    }

    fn valid_input() -> EventInput {
        EventInput {
            name: "Launch Party".to_string(),
            date: "2026-06-16".to_string(),
            time: "18:30".to_string(),
            location: "Rooftop".to_string(),
            description: String::new(),
            image: None,
        }
    }

    #[test]
    fn valid_input_keeps_exact_values() {
        let draft = validate(&valid_input(), today()).unwrap();
        assert_eq!(draft.name, "Launch Party");
        assert_eq!(draft.date, NaiveDate::from_ymd_opt(2026, 6, 16).unwrap());
        assert_eq!(draft.time, "18:30");
        assert_eq!(draft.location, "Rooftop");
        assert_eq!(draft.description, None);
        assert_eq!(draft.image, None);
    }

    #[test]
    fn empty_name_tags_only_name() {
        let mut input = valid_input();
        input.name = String::new();
        let errors = validate(&input, today()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Name), Some("Event name is required"));
    }

    #[test]
    fn name_length_boundaries() {
        let mut input = valid_input();
        input.name = "x".repeat(100);
        assert!(validate(&input, today()).is_ok());

        input.name = "x".repeat(101);
        let errors = validate(&input, today()).unwrap_err();
        assert_eq!(errors.get(Field::Name), Some("Name must be less than 100 characters"));
        assert!(errors.get(Field::Location).is_none());
    }

    #[test]
    fn date_today_is_accepted() {
        let mut input = valid_input();
        input.date = "2026-06-15".to_string();
        assert!(validate(&input, today()).is_ok());
    }

    #[test]
    fn date_in_the_past_is_rejected() {
        let mut input = valid_input();
        input.date = (today() - Duration::days(1)).format("%Y-%m-%d").to_string();
        let errors = validate(&input, today()).unwrap_err();
        assert_eq!(errors.get(Field::Date), Some("Date cannot be in the past"));
    }

    #[test]
    fn unparseable_date_is_rejected() {
        let mut input = valid_input();
        input.date = "June 16".to_string();
        let errors = validate(&input, today()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.get(Field::Date).is_some());
    }

    #[test]
    fn time_rules() {
        for ok in ["00:00", "9:30", "09:30", "23:59"] {
            let mut input = valid_input();
            input.time = ok.to_string();
            assert!(validate(&input, today()).is_ok(), "{} should pass", ok);
        }
        for bad in ["24:00", "12:60", "noon", "12", "12:5", "1230", ""] {
            let mut input = valid_input();
            input.time = bad.to_string();
            let errors = validate(&input, today()).unwrap_err();
            assert!(errors.get(Field::Time).is_some(), "{} should fail", bad);
            assert_eq!(errors.len(), 1, "{} should only tag the time field", bad);
        }
    }

    #[test]
    fn location_length_boundaries() {
        let mut input = valid_input();
        input.location = "x".repeat(200);
        assert!(validate(&input, today()).is_ok());

        input.location = "x".repeat(201);
        let errors = validate(&input, today()).unwrap_err();
        assert_eq!(
            errors.get(Field::Location),
            Some("Location must be less than 200 characters")
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn description_is_optional_but_bounded() {
        let mut input = valid_input();
        input.description = "x".repeat(500);
        let draft = validate(&input, today()).unwrap();
        assert_eq!(draft.description.as_deref(), Some(input.description.as_str()));

        input.description = "x".repeat(501);
        let errors = validate(&input, today()).unwrap_err();
        assert_eq!(
            errors.get(Field::Description),
            Some("Description must be less than 500 characters")
        );
    }

    #[test]
    fn multiple_violations_tag_each_field() {
        let input = EventInput::default();
        let errors = validate(&input, today()).unwrap_err();
        assert!(errors.get(Field::Name).is_some());
        assert!(errors.get(Field::Date).is_some());
        assert!(errors.get(Field::Time).is_some());
        assert!(errors.get(Field::Location).is_some());
        // Empty description is fine.
        assert!(errors.get(Field::Description).is_none());
    }

    #[test]
    fn past_time_on_todays_date_is_accepted() {
        // Date and time are independent fields; only the date is checked
        // against today.
        let mut input = valid_input();
        input.date = "2026-06-15".to_string();
        input.time = "00:01".to_string();
        assert!(validate(&input, today()).is_ok());
    }
}
