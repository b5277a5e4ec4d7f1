pub mod booking;

pub use booking::{iso_timestamp, Booking, BookingRequest, CreatedResponse, PendingBooking};
