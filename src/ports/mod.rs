pub mod booking_repository;
pub mod clock;

pub use booking_repository::BookingRepository;
pub use clock::Clock;
