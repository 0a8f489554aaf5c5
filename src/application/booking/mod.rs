mod booking_service;
mod errors;

pub use booking_service::{ServiceDependencies, cancel_booking, get_booking_details};
pub use errors::{BookingApplicationError, Result};
