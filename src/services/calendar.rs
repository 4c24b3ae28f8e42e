use chrono::NaiveDate;

use crate::domain::slot::TimeSlot;
use crate::repository::{SlotListQuery, SlotReader};

use super::{ServiceError, ServiceResult};

/// Slots for one calendar day, in inventory (time-of-day) order.
///
/// The supplied query narrows the listing to a service, staff member,
/// location or status; its date field is overridden with `date`.
pub fn slots_for_date<R>(
    repo: &R,
    date: NaiveDate,
    query: SlotListQuery,
) -> ServiceResult<Vec<TimeSlot>>
where
    R: SlotReader,
{
    match repo.list_slots(query.date(date)) {
        Ok((_total, slots)) => Ok(slots),
        Err(e) => {
            log::error!("Failed to list slots: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Catalog;
    use crate::domain::types::{LocationId, ServiceId, SlotId, SlotStatus, StaffId};
    use crate::generator::Inventory;
    use crate::repository::InMemoryRepository;
    use chrono::NaiveTime;

    fn sample_slot(date: NaiveDate, hour: u32, service: i32, status: SlotStatus) -> TimeSlot {
        let start = NaiveTime::from_hms_opt(hour, 0, 0).unwrap();
        TimeSlot {
            id: SlotId::from_parts(date, start),
            date,
            start,
            end: NaiveTime::from_hms_opt(hour, 30, 0).unwrap(),
            status,
            service_id: ServiceId::new(service).unwrap(),
            staff_id: StaffId::new(1).unwrap(),
            location_id: LocationId::new(1).unwrap(),
        }
    }

    fn sample_repository() -> InMemoryRepository {
        let monday = NaiveDate::from_ymd_opt(2024, 3, 18).unwrap();
        let tuesday = NaiveDate::from_ymd_opt(2024, 3, 19).unwrap();
        InMemoryRepository::new(Inventory {
            catalog: Catalog::builtin(),
            slots: vec![
                sample_slot(monday, 9, 1, SlotStatus::Available),
                sample_slot(monday, 10, 2, SlotStatus::Booked),
                sample_slot(tuesday, 9, 1, SlotStatus::Available),
            ],
            bookings: vec![],
        })
    }

    #[test]
    fn returns_only_the_requested_date() {
        let repo = sample_repository();
        let monday = NaiveDate::from_ymd_opt(2024, 3, 18).unwrap();

        let slots = slots_for_date(&repo, monday, SlotListQuery::default()).unwrap();

        assert_eq!(slots.len(), 2);
        assert!(slots.iter().all(|slot| slot.date == monday));
    }

    #[test]
    fn filters_compose_as_conjunction() {
        let repo = sample_repository();
        let monday = NaiveDate::from_ymd_opt(2024, 3, 18).unwrap();
        let query = SlotListQuery::default()
            .service(ServiceId::new(2).unwrap())
            .status(SlotStatus::Booked);

        let slots = slots_for_date(&repo, monday, query).unwrap();

        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].service_id, 2);
    }

    #[test]
    fn empty_day_yields_no_slots() {
        let repo = sample_repository();
        let sunday = NaiveDate::from_ymd_opt(2024, 3, 17).unwrap();

        let slots = slots_for_date(&repo, sunday, SlotListQuery::default()).unwrap();

        assert!(slots.is_empty());
    }
}
