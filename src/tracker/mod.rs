pub mod display;
pub mod open_notify;
pub mod tracker_errors;
pub mod transport;
