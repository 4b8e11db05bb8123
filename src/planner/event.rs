use chrono::NaiveDate;

/// A single planned occasion. Immutable once added to the store; removed only
/// by an explicit user delete.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub date: NaiveDate,
    /// Validated `HH:MM` string, kept exactly as entered.
    pub time: String,
    pub location: String,
    pub description: Option<String>,
    /// `data:<mime>;base64,…` string when an image was attached.
    pub image: Option<String>,
}

impl Event {
    pub fn date_display(&self) -> String {
        self.date.format("%b %-d, %Y").to_string()
    }
}
