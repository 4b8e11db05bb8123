pub mod confirm_dialog;
pub mod event_form;
pub mod event_list;

pub use confirm_dialog::ConfirmDialog;
pub use event_form::EventForm;
pub use event_list::EventList;
