pub mod booking;
pub mod catalog;
pub mod slot;
pub mod types;
