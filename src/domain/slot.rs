use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::{LocationId, ServiceId, SlotId, SlotStatus, StaffId};

/// A fixed-duration bookable window tied to one service, staff member and
/// location.
///
/// Slots are created once by the generator and never mutated; the status is
/// assigned at generation time and does not transition afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeSlot {
    pub id: SlotId,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub status: SlotStatus,
    pub service_id: ServiceId,
    pub staff_id: StaffId,
    pub location_id: LocationId,
}

impl TimeSlot {
    /// The combined chronological instant of the slot's date and start time.
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.start)
    }
}
