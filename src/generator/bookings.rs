use chrono::{Duration, NaiveDateTime};
use rand::Rng;

use crate::domain::booking::Booking;
use crate::domain::slot::TimeSlot;
use crate::domain::types::{BookingId, ClientName, ClientType, SlotStatus};
use crate::generator::GeneratorConfig;

/// Fixed pool of client display names cycled through derived bookings.
pub const CLIENT_NAMES: [&str; 16] = [
    "John Smith",
    "Emma Wilson",
    "Robert Johnson",
    "Maria Garcia",
    "David Brown",
    "Jennifer Davis",
    "Michael Miller",
    "Sarah Anderson",
    "Christopher Martinez",
    "Ashley Taylor",
    "Daniel Thomas",
    "Jessica Moore",
    "Matthew Jackson",
    "Amanda White",
    "Anthony Harris",
    "Melissa Martin",
];

/// Projects the booked subset of the inventory into booking records.
///
/// Bookings preserve the inventory order of their source slots and copy the
/// slot's date, times and catalog references verbatim. The client name is
/// assigned deterministically by position in the booked subset; status,
/// client type and `created_at` are drawn from the configured policy.
pub(crate) fn derive_bookings(
    slots: &[TimeSlot],
    config: &GeneratorConfig,
    now: NaiveDateTime,
    rng: &mut impl Rng,
) -> Vec<Booking> {
    slots
        .iter()
        .filter(|slot| slot.status == SlotStatus::Booked)
        .enumerate()
        .map(|(index, slot)| {
            let client_name = ClientName::from_pool(CLIENT_NAMES[index % CLIENT_NAMES.len()]);
            let days_back = rng.gen_range(0..i64::from(config.created_at_window_days));
            let status = config.booking_distribution.draw(rng.gen_range(0.0..1.0));
            let client_type = if rng.gen_bool(config.business_ratio) {
                ClientType::Business
            } else {
                ClientType::Individual
            };

            Booking {
                id: BookingId::from_slot(&slot.id),
                client_name,
                client_type,
                service_id: slot.service_id,
                staff_id: slot.staff_id,
                location_id: slot.location_id,
                date: slot.date,
                start: slot.start,
                end: slot.end,
                status,
                created_at: now - Duration::days(days_back),
            }
        })
        .collect()
}
