pub mod checkin;
pub mod clock;
pub mod window;
