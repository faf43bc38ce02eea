pub mod controller;
pub mod document;
pub mod form;
pub mod render;

pub use controller::PageController;
pub use document::{DisplayRegion, Document, MemoryRegion, RegionState};
pub use form::{FormPost, ReservationForm, SubmitEvent};
