use std::path::Path;

use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::planner::image::{self, EncodedImage, ImageError};
use crate::planner::{EventInput, Field, FieldErrors};
use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FormField {
    #[default]
    Name,
    Date,
    Time,
    Location,
    Description,
    Image,
}

impl FormField {
    pub fn next(&self) -> Self {
        match self {
            FormField::Name => FormField::Date,
            FormField::Date => FormField::Time,
            FormField::Time => FormField::Location,
            FormField::Location => FormField::Description,
            FormField::Description => FormField::Image,
            FormField::Image => FormField::Name,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FormField::Name => FormField::Image,
            FormField::Date => FormField::Name,
            FormField::Time => FormField::Date,
            FormField::Location => FormField::Time,
            FormField::Description => FormField::Location,
            FormField::Image => FormField::Description,
        }
    }

    fn error_key(&self) -> Option<Field> {
        match self {
            FormField::Name => Some(Field::Name),
            FormField::Date => Some(Field::Date),
            FormField::Time => Some(Field::Time),
            FormField::Location => Some(Field::Location),
            FormField::Description => Some(Field::Description),
            FormField::Image => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EventFormState {
    pub name: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
    /// Path typed into the image field; the attach action resolves it.
    pub image_path: String,
    pub image: Option<EncodedImage>,
    pub errors: FieldErrors,
    pub active_field: FormField,
}

impl EventFormState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            date: today.format("%Y-%m-%d").to_string(),
            ..Self::default()
        }
    }

    pub fn input_char(&mut self, c: char) {
        self.active_value_mut().push(c);
    }

    pub fn backspace(&mut self) {
        if self.active_field == FormField::Image && self.image.is_some() {
            self.image = None;
            return;
        }
        self.active_value_mut().pop();
    }

    fn active_value_mut(&mut self) -> &mut String {
        match self.active_field {
            FormField::Name => &mut self.name,
            FormField::Date => &mut self.date,
            FormField::Time => &mut self.time,
            FormField::Location => &mut self.location,
            FormField::Description => &mut self.description,
            FormField::Image => &mut self.image_path,
        }
    }

    /// Attach the image at the typed path. On rejection (too large, not an
    /// image, unreadable) the image stays unset; the event remains creatable
    /// without one.
    pub fn attach_image(&mut self) -> Result<&EncodedImage, ImageError> {
        self.image = None;
        let encoded = image::load_image(Path::new(self.image_path.trim()))?;
        Ok(self.image.insert(encoded))
    }

    pub fn to_input(&self) -> EventInput {
        EventInput {
            name: self.name.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            location: self.location.clone(),
            description: self.description.clone(),
            image: self.image.as_ref().map(|img| img.data_url.clone()),
        }
    }
}

pub struct EventForm;

impl EventForm {
    pub fn render(frame: &mut Frame, area: Rect, state: &EventFormState) {
        // Center the form popup
        let form_w = area.width.min(64).max(34);
        let form_h = area.height.min(12).max(10);
        let x = area.x + (area.width.saturating_sub(form_w)) / 2;
        let y = area.y + (area.height.saturating_sub(form_h)) / 2;
        let form_area = Rect::new(x, y, form_w, form_h);

        frame.render_widget(Clear, form_area);

        let block = Block::default()
            .title(" New Event ")
            .title_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green));

        let inner = block.inner(form_area);
        frame.render_widget(block, form_area);

        let rows = Layout::vertical([
            Constraint::Length(1), // name
            Constraint::Length(1), // date
            Constraint::Length(1), // time
            Constraint::Length(1), // location
            Constraint::Length(1), // description
            Constraint::Length(1), // image
            Constraint::Length(1), // spacer
            Constraint::Length(1), // help
            Constraint::Min(0),
        ])
        .split(inner);

        render_field(frame, rows[0], "Name:", &state.name, state, FormField::Name);
        render_field(frame, rows[1], "Date:", &state.date, state, FormField::Date);
        render_field(frame, rows[2], "Time:", &state.time, state, FormField::Time);
        render_field(frame, rows[3], "Where:", &state.location, state, FormField::Location);
        render_field(frame, rows[4], "Notes:", &state.description, state, FormField::Description);

        let image_value = match &state.image {
            Some(img) => format!("[{} attached, {} KB]", img.mime, img.source_len / 1024),
            None => state.image_path.clone(),
        };
        render_field(frame, rows[5], "Image:", &image_value, state, FormField::Image);

        let help = Line::from(vec![
            Span::styled("Tab", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(":Next ", theme::current().dim),
            Span::styled("^A", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(":Attach ", theme::current().dim),
            Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(":Save ", theme::current().dim),
            Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(":Cancel", theme::current().dim),
        ]);
        frame.render_widget(Paragraph::new(help), rows[7]);
    }
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    state: &EventFormState,
    field: FormField,
) {
    let active = state.active_field == field;
    let cursor = if active { "_" } else { "" };

    let style = if active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let mut spans = vec![
        Span::styled(format!("{:<7}", label), theme::current().dim),
        Span::styled(format!("{}{}", value, cursor), style),
    ];

    if let Some(msg) = field.error_key().and_then(|key| state.errors.get(key)) {
        spans.push(Span::styled(
            format!("  {}", msg),
            Style::default().fg(Color::Red),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use crate::planner::image::MAX_IMAGE_BYTES;
    use crate::planner::validate::validate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()
    }

    fn filled_form() -> EventFormState {
        let mut form = EventFormState::new(today());
        form.name = "Launch Party".to_string();
        form.date = "2026-06-16".to_string();
        form.time = "18:30".to_string();
        form.location = "Rooftop".to_string();
        form
    }

    #[test]
    fn typing_edits_the_active_field() {
        let mut form = EventFormState::new(today());
        for c in "Demo".chars() {
            form.input_char(c);
        }
        assert_eq!(form.name, "Demo");

        form.active_field = form.active_field.next();
        form.backspace();
        assert_eq!(form.date, "2026-06-1");
    }

    #[test]
    fn tab_cycles_through_every_field() {
        let mut field = FormField::Name;
        for _ in 0..6 {
            field = field.next();
        }
        assert_eq!(field, FormField::Name);
        assert_eq!(FormField::Name.prev(), FormField::Image);
    }

    #[test]
    fn oversized_image_is_rejected_and_event_still_creatable() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&vec![0u8; (MAX_IMAGE_BYTES + 1) as usize])
            .unwrap();
        file.flush().unwrap();

        let mut form = filled_form();
        form.image_path = file.path().display().to_string();
        assert!(form.attach_image().is_err());
        assert!(form.image.is_none());

        // The form still validates without the image.
        let draft = validate(&form.to_input(), today()).unwrap();
        assert_eq!(draft.image, None);
    }

    #[test]
    fn attached_image_flows_into_the_input() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"\x89PNG\r\n\x1a\n0000").unwrap();
        file.flush().unwrap();

        let mut form = filled_form();
        form.image_path = file.path().display().to_string();
        form.attach_image().unwrap();

        let input = form.to_input();
        assert!(input
            .image
            .as_deref()
            .unwrap()
            .starts_with("data:image/png;base64,"));
    }

    #[test]
    fn backspace_on_image_field_clears_the_attachment_first() {
        let mut form = filled_form();
        form.active_field = FormField::Image;
        form.image_path = "party.png".to_string();
        form.image = Some(EncodedImage {
            data_url: "data:image/png;base64,".to_string(),
            mime: "image/png",
            source_len: 12,
        });

        form.backspace();
        assert!(form.image.is_none());
        assert_eq!(form.image_path, "party.png");

        form.backspace();
        assert_eq!(form.image_path, "party.pn");
    }
}
