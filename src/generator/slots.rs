use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};
use rand::Rng;

use crate::domain::catalog::Catalog;
use crate::domain::slot::TimeSlot;
use crate::domain::types::{SlotId, SlotStatus};
use crate::generator::GeneratorConfig;

/// Generates the full slot inventory over the configured horizon.
///
/// Output is ordered day-major, time-minor. Each slot draws its status from
/// the configured distribution; slots on the current day whose start hour
/// precedes `now`'s hour are forced to `Disabled` regardless of the draw.
/// The hour comparison intentionally ignores minutes, so a slot sharing
/// `now`'s hour keeps its drawn status even when its start minute has
/// already elapsed.
pub(crate) fn generate_slots(
    catalog: &Catalog,
    config: &GeneratorConfig,
    now: NaiveDateTime,
    rng: &mut impl Rng,
) -> Vec<TimeSlot> {
    let today = now.date();
    let now_hour = now.time().hour();
    let capacity = (config.horizon_days * config.slots_per_day()) as usize;
    let mut slots = Vec::with_capacity(capacity);

    for day_offset in 0..config.horizon_days {
        let date = today + Duration::days(i64::from(day_offset));
        let first_minute = config.start_hour * 60;
        let last_minute = config.end_hour * 60;

        let mut minute = first_minute;
        while minute < last_minute {
            // NaiveTime + Duration wraps at midnight, but validation caps
            // the window at 23:00 so no slot ever crosses it.
            let start = NaiveTime::MIN + Duration::minutes(i64::from(minute));
            let end =
                NaiveTime::MIN + Duration::minutes(i64::from(minute + config.granularity_minutes));

            let mut status = config.slot_distribution.draw(rng.gen_range(0.0..1.0));
            if day_offset == 0 && minute / 60 < now_hour {
                status = SlotStatus::Disabled;
            }

            let service = &catalog.services()[rng.gen_range(0..catalog.services().len())];
            let staff = &catalog.staff()[rng.gen_range(0..catalog.staff().len())];
            let location = &catalog.locations()[rng.gen_range(0..catalog.locations().len())];

            slots.push(TimeSlot {
                id: SlotId::from_parts(date, start),
                date,
                start,
                end,
                status,
                service_id: service.id,
                staff_id: staff.id,
                location_id: location.id,
            });

            minute += config.granularity_minutes;
        }
    }

    slots
}
