use crate::domain::catalog::{Location, Service, StaffMember};
use crate::domain::types::{LocationId, ServiceId, StaffId};
use crate::repository::CatalogReader;

use super::{ServiceError, ServiceResult};

/// Retrieve a service by its raw identifier.
///
/// Unknown and malformed identifiers resolve to `None`; callers routinely
/// probe optional references, so a miss is never an error. Missing entries
/// render as blank fields upstream.
pub fn service_by_id<R>(repo: &R, id: i32) -> ServiceResult<Option<Service>>
where
    R: CatalogReader,
{
    let id = match ServiceId::new(id) {
        Ok(id) => id,
        Err(_) => return Ok(None),
    };
    match repo.get_service_by_id(id) {
        Ok(service) => Ok(service),
        Err(e) => {
            log::error!("Failed to get service: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Retrieve a staff member by their raw identifier.
pub fn staff_by_id<R>(repo: &R, id: i32) -> ServiceResult<Option<StaffMember>>
where
    R: CatalogReader,
{
    let id = match StaffId::new(id) {
        Ok(id) => id,
        Err(_) => return Ok(None),
    };
    match repo.get_staff_by_id(id) {
        Ok(member) => Ok(member),
        Err(e) => {
            log::error!("Failed to get staff member: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Retrieve a location by its raw identifier.
pub fn location_by_id<R>(repo: &R, id: i32) -> ServiceResult<Option<Location>>
where
    R: CatalogReader,
{
    let id = match LocationId::new(id) {
        Ok(id) => id,
        Err(_) => return Ok(None),
    };
    match repo.get_location_by_id(id) {
        Ok(location) => Ok(location),
        Err(e) => {
            log::error!("Failed to get location: {e}");
            Err(ServiceError::Internal)
        }
    }
}
