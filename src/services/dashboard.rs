use std::collections::HashSet;

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::domain::booking::Booking;
use crate::domain::slot::TimeSlot;
use crate::domain::types::{BookingStatus, SlotId, SlotStatus};
use crate::repository::{BookingListQuery, BookingReader, SlotListQuery, SlotReader};

use super::{ServiceError, ServiceResult};

/// Number of days covered by the dashboard chart.
pub const DEFAULT_CHART_WINDOW_DAYS: u32 = 30;

/// Aggregate counters shown on the dashboard header cards.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct BookingStats {
    pub total: usize,
    /// Bookings dated today or later; time of day is ignored.
    pub upcoming: usize,
    pub cancelled: usize,
    /// Share of generated slots whose status is booked, rounded to the
    /// nearest whole percent. Zero when no slots exist.
    pub utilization_percent: u32,
}

/// Daily booking counts for the dashboard area chart.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DailyBookingCount {
    pub date: NaiveDate,
    pub total: usize,
    pub confirmed: usize,
    pub pending: usize,
    pub cancelled: usize,
}

/// Core business logic for the dashboard header cards.
pub fn booking_stats<R>(repo: &R, today: NaiveDate) -> ServiceResult<BookingStats>
where
    R: BookingReader + SlotReader,
{
    let (_, slots) = match repo.list_slots(SlotListQuery::default()) {
        Ok(result) => result,
        Err(e) => {
            log::error!("Failed to list slots: {e}");
            return Err(ServiceError::Internal);
        }
    };
    let (_, bookings) = match repo.list_bookings(BookingListQuery::default()) {
        Ok(result) => result,
        Err(e) => {
            log::error!("Failed to list bookings: {e}");
            return Err(ServiceError::Internal);
        }
    };
    Ok(compute_stats(&bookings, &slots, today))
}

fn compute_stats(bookings: &[Booking], slots: &[TimeSlot], today: NaiveDate) -> BookingStats {
    let slot_ids: HashSet<&SlotId> = slots.iter().map(|slot| &slot.id).collect();

    let mut total = 0;
    let mut upcoming = 0;
    let mut cancelled = 0;
    for booking in bookings {
        // Derivation order guarantees a matching slot; skip strays instead
        // of letting them distort the counters.
        let known = booking
            .id
            .source_slot_id()
            .is_some_and(|slot_id| slot_ids.contains(&slot_id));
        if !known {
            log::warn!("Skipping booking {} with no matching slot", booking.id);
            continue;
        }
        total += 1;
        if booking.date >= today {
            upcoming += 1;
        }
        if booking.status == BookingStatus::Cancelled {
            cancelled += 1;
        }
    }

    let booked = slots
        .iter()
        .filter(|slot| slot.status == SlotStatus::Booked)
        .count();
    let utilization_percent = if slots.is_empty() {
        0
    } else {
        (100.0 * booked as f64 / slots.len() as f64).round() as u32
    };

    BookingStats {
        total,
        upcoming,
        cancelled,
        utilization_percent,
    }
}

/// Core business logic for the dashboard area chart.
///
/// Produces one row per day in the `window_days`-long window ending today,
/// oldest first; days with no bookings yield all-zero rows.
pub fn booking_time_series<R>(
    repo: &R,
    today: NaiveDate,
    window_days: u32,
) -> ServiceResult<Vec<DailyBookingCount>>
where
    R: BookingReader,
{
    if window_days == 0 {
        return Err(ServiceError::InvalidArgument(
            "window_days must be greater than zero".into(),
        ));
    }
    let (_, bookings) = match repo.list_bookings(BookingListQuery::default()) {
        Ok(result) => result,
        Err(e) => {
            log::error!("Failed to list bookings: {e}");
            return Err(ServiceError::Internal);
        }
    };
    Ok(compute_time_series(&bookings, today, window_days))
}

fn compute_time_series(
    bookings: &[Booking],
    today: NaiveDate,
    window_days: u32,
) -> Vec<DailyBookingCount> {
    (0..window_days)
        .map(|offset| {
            let date = today - Duration::days(i64::from(window_days - 1 - offset));
            let mut row = DailyBookingCount {
                date,
                total: 0,
                confirmed: 0,
                pending: 0,
                cancelled: 0,
            };
            for booking in bookings.iter().filter(|booking| booking.date == date) {
                row.total += 1;
                match booking.status {
                    BookingStatus::Confirmed => row.confirmed += 1,
                    BookingStatus::Pending => row.pending += 1,
                    BookingStatus::Cancelled => row.cancelled += 1,
                }
            }
            row
        })
        .collect()
}
