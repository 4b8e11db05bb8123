pub mod event;
pub mod image;
pub mod status;
pub mod store;
pub mod validate;

pub use event::Event;
pub use status::{classify, StatusTier};
pub use store::EventStore;
pub use validate::{EventInput, Field, FieldErrors};
