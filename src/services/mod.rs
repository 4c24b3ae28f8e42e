pub use self::errors::{ServiceError, ServiceResult};

pub mod bookings;
pub mod calendar;
pub mod catalog;
pub mod dashboard;
pub mod errors;
