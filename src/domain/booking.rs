use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    BookingId, BookingStatus, ClientName, ClientType, LocationId, ServiceId, StaffId,
};

/// A booking projected from a booked slot.
///
/// The date, times and catalog references are copied verbatim from the
/// source slot and are never assigned independently.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: BookingId,
    pub client_name: ClientName,
    pub client_type: ClientType,
    pub service_id: ServiceId,
    pub staff_id: StaffId,
    pub location_id: LocationId,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub status: BookingStatus,
    pub created_at: NaiveDateTime,
}

impl Booking {
    /// The combined chronological instant of the booking's date and start
    /// time, used for chronological ordering.
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.start)
    }
}
