use crate::domain::catalog::{Location, Service, StaffMember};
use crate::domain::types::{LocationId, ServiceId, StaffId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CatalogReader, InMemoryRepository};

impl CatalogReader for InMemoryRepository {
    fn get_service_by_id(&self, id: ServiceId) -> RepositoryResult<Option<Service>> {
        Ok(self.inventory().catalog.service_by_id(id).cloned())
    }

    fn get_staff_by_id(&self, id: StaffId) -> RepositoryResult<Option<StaffMember>> {
        Ok(self.inventory().catalog.staff_by_id(id).cloned())
    }

    fn get_location_by_id(&self, id: LocationId) -> RepositoryResult<Option<Location>> {
        Ok(self.inventory().catalog.location_by_id(id).cloned())
    }
}
