use crate::domain::slot::TimeSlot;
use crate::domain::types::SlotId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{InMemoryRepository, SlotListQuery, SlotReader};

impl SlotReader for InMemoryRepository {
    fn list_slots(&self, query: SlotListQuery) -> RepositoryResult<(usize, Vec<TimeSlot>)> {
        let items: Vec<TimeSlot> = self
            .inventory()
            .slots
            .iter()
            .filter(|slot| {
                query.date.is_none_or(|date| slot.date == date)
                    && query.service_id.is_none_or(|id| slot.service_id == id)
                    && query.staff_id.is_none_or(|id| slot.staff_id == id)
                    && query.location_id.is_none_or(|id| slot.location_id == id)
                    && query.status.is_none_or(|status| slot.status == status)
            })
            .cloned()
            .collect();

        let total = items.len();
        Ok((total, items))
    }

    fn get_slot_by_id(&self, id: &SlotId) -> RepositoryResult<Option<TimeSlot>> {
        Ok(self
            .inventory()
            .slots
            .iter()
            .find(|slot| &slot.id == id)
            .cloned())
    }
}
