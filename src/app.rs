use std::time::{Duration, Instant};

use chrono::Local;

use crate::components::event_form::EventFormState;
use crate::planner::{validate, EventStore};

/// Cosmetic delay between confirming a delete and the actual removal, so the
/// card gets one last dimmed draw.
pub const DELETE_ANIMATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal,
    Form,
    Confirm,
}

#[derive(Debug)]
struct PendingDelete {
    id: String,
    name: String,
    due: Instant,
}

pub struct App {
    pub running: bool,
    pub input_mode: InputMode,
    pub store: EventStore,
    pub selected: usize,
    pub scroll: usize,
    pub form_state: Option<EventFormState>,
    /// Id of the event the open confirmation dialog is about.
    pub delete_prompt: Option<String>,
    pending_delete: Option<PendingDelete>,
    pub status_message: Option<String>,
    pub show_help: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            running: true,
            input_mode: InputMode::Normal,
            store: EventStore::new(),
            selected: 0,
            scroll: 0,
            form_state: None,
            delete_prompt: None,
            pending_delete: None,
            status_message: None,
            show_help: false,
        }
    }

    // ── form ──

    pub fn open_event_form(&mut self) {
        self.form_state = Some(EventFormState::new(Local::now().date_naive()));
        self.input_mode = InputMode::Form;
    }

    pub fn close_event_form(&mut self) {
        self.form_state = None;
        self.input_mode = InputMode::Normal;
    }

    /// Validate the form; on success append the event and close, on failure
    /// keep the form open with per-field messages. The store is untouched on
    /// failure.
    pub fn submit_event_form(&mut self) {
        let Some(form) = self.form_state.as_mut() else {
            return;
        };

        match validate::validate(&form.to_input(), Local::now().date_naive()) {
            Ok(draft) => {
                let name = draft.name.clone();
                let id = self.store.next_id();
                self.store.add(draft.into_event(id));
                self.selected = self.store.len() - 1;
                self.close_event_form();
                self.status_message = Some(format!("Event created: \"{}\"", name));
            }
            Err(errors) => {
                form.errors = errors;
                self.status_message = Some("Please check your form for errors".to_string());
            }
        }
    }

    pub fn form_tab(&mut self) {
        if let Some(ref mut form) = self.form_state {
            form.active_field = form.active_field.next();
        }
    }

    pub fn form_backtab(&mut self) {
        if let Some(ref mut form) = self.form_state {
            form.active_field = form.active_field.prev();
        }
    }

    pub fn form_input_char(&mut self, c: char) {
        if let Some(ref mut form) = self.form_state {
            form.input_char(c);
        }
    }

    pub fn form_backspace(&mut self) {
        if let Some(ref mut form) = self.form_state {
            form.backspace();
        }
    }

    /// Attach the image at the path typed in the form. Rejections leave the
    /// field unset and only surface a status message.
    pub fn form_attach_image(&mut self) {
        if let Some(ref mut form) = self.form_state {
            self.status_message = Some(match form.attach_image() {
                Ok(img) => format!("Attached {} ({} KB)", img.mime, img.source_len / 1024),
                Err(err) => err.to_string(),
            });
        }
    }

    // ── selection ──

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.store.len() {
            self.selected += 1;
        }
        self.sync_scroll();
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.sync_scroll();
    }

    // Keep a couple of cards of context above the selection.
    fn sync_scroll(&mut self) {
        self.scroll = self.selected.saturating_sub(2);
    }

    // ── delete ──

    /// Open the confirmation dialog for the selected event.
    pub fn request_delete_selected(&mut self) {
        if let Some(ev) = self.store.get(self.selected) {
            self.delete_prompt = Some(ev.id.clone());
            self.input_mode = InputMode::Confirm;
        }
    }

    pub fn confirmed_event_name(&self) -> Option<&str> {
        let id = self.delete_prompt.as_deref()?;
        self.store
            .list()
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.name.as_str())
    }

    /// Confirm the open dialog: schedule the removal after the animation
    /// delay. The event stays listed (dimmed) until the deadline passes.
    pub fn confirm_delete(&mut self) {
        if let Some(id) = self.delete_prompt.take() {
            // A confirm arriving while another delete is animating flushes
            // the earlier one immediately.
            self.flush_pending_delete();
            let name = self
                .store
                .list()
                .iter()
                .find(|e| e.id == id)
                .map(|e| e.name.clone())
                .unwrap_or_default();
            self.pending_delete = Some(PendingDelete {
                id,
                name,
                due: Instant::now() + DELETE_ANIMATION,
            });
        }
        self.input_mode = InputMode::Normal;
    }

    /// Decline the dialog; the event remains.
    pub fn cancel_delete(&mut self) {
        self.delete_prompt = None;
        self.input_mode = InputMode::Normal;
    }

    pub fn pending_delete_id(&self) -> Option<&str> {
        self.pending_delete.as_ref().map(|p| p.id.as_str())
    }

    /// Advance time-driven state; called once per poll cycle.
    pub fn tick(&mut self) {
        if let Some(ref pending) = self.pending_delete {
            if Instant::now() >= pending.due {
                self.flush_pending_delete();
            }
        }
    }

    fn flush_pending_delete(&mut self) {
        if let Some(pending) = self.pending_delete.take() {
            if self.store.remove(&pending.id) {
                self.status_message = Some(format!("Event deleted: \"{}\"", pending.name));
            }
            self.selected = self.selected.min(self.store.len().saturating_sub(1));
            self.sync_scroll();
        }
    }
}
