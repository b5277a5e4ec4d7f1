pub mod api;
pub mod form;
pub mod page;
pub mod pending;
pub mod submission;

pub use api::{BookingApi, HttpBookingApi};
pub use form::BookingForm;
pub use page::{Alert, BookingPage};
pub use pending::PendingStore;
pub use submission::{Notice, SubmissionController, SubmitError, SubmitOutcome};
