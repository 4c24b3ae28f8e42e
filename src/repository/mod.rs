use chrono::NaiveDate;

use crate::domain::booking::Booking;
use crate::domain::catalog::{Location, Service, StaffMember};
use crate::domain::slot::TimeSlot;
use crate::domain::types::{
    BookingId, BookingStatus, ClientType, LocationId, ServiceId, SlotId, SlotStatus, StaffId,
};
use crate::generator::Inventory;
use crate::pagination::Pagination;
use self::errors::RepositoryResult;

pub mod booking;
pub mod catalog;
pub mod errors;
pub mod slot;

/// Repository over an immutable generated inventory snapshot.
///
/// The snapshot is produced once by the generator; the repository never
/// mutates it, so the whole read path needs no synchronization when shared.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    inventory: Inventory,
}

impl InMemoryRepository {
    /// Wraps a generated snapshot.
    pub fn new(inventory: Inventory) -> Self {
        Self { inventory }
    }

    /// Borrow the underlying snapshot.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }
}

/// Column a booking listing is ordered by.
///
/// A closed set of comparator strategies; free-form column names resolve
/// through [`BookingSortField::from_name`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BookingSortField {
    /// Chronological order of the combined (date, start) instant.
    #[default]
    Date,
    ClientName,
    Status,
    CreatedAt,
}

impl BookingSortField {
    /// Resolves a column name, falling back to the date column for any
    /// unknown name rather than failing.
    pub fn from_name(name: &str) -> Self {
        match name {
            "client_name" => Self::ClientName,
            "status" => Self::Status,
            "created_at" => Self::CreatedAt,
            _ => Self::Date,
        }
    }
}

/// Direction a booking listing is ordered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    /// Newest-first, the bookings table's initial state.
    #[default]
    Desc,
}

/// Query parameters used when listing or searching bookings.
///
/// Absent filters pass every record; `None` plays the role of the UI's
/// "all" sentinel.
#[derive(Debug, Clone, Default)]
pub struct BookingListQuery {
    /// Case-insensitive substring matched against the client name and the
    /// resolved service and staff names.
    pub search: Option<String>,
    pub status: Option<BookingStatus>,
    pub client_type: Option<ClientType>,
    pub sort: BookingSortField,
    pub direction: SortDirection,
    pub pagination: Option<Pagination>,
}

impl BookingListQuery {
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
    pub fn status(mut self, status: BookingStatus) -> Self {
        self.status = Some(status);
        self
    }
    pub fn client_type(mut self, client_type: ClientType) -> Self {
        self.client_type = Some(client_type);
        self
    }
    pub fn sort(mut self, sort: BookingSortField, direction: SortDirection) -> Self {
        self.sort = sort;
        self.direction = direction;
        self
    }
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Query parameters used when listing slots.
#[derive(Debug, Clone, Default)]
pub struct SlotListQuery {
    pub date: Option<NaiveDate>,
    pub service_id: Option<ServiceId>,
    pub staff_id: Option<StaffId>,
    pub location_id: Option<LocationId>,
    pub status: Option<SlotStatus>,
}

impl SlotListQuery {
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
    pub fn service(mut self, service_id: ServiceId) -> Self {
        self.service_id = Some(service_id);
        self
    }
    pub fn staff(mut self, staff_id: StaffId) -> Self {
        self.staff_id = Some(staff_id);
        self
    }
    pub fn location(mut self, location_id: LocationId) -> Self {
        self.location_id = Some(location_id);
        self
    }
    pub fn status(mut self, status: SlotStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Read-only lookup of catalog reference entries.
pub trait CatalogReader {
    /// Retrieve a service by its identifier.
    fn get_service_by_id(&self, id: ServiceId) -> RepositoryResult<Option<Service>>;
    /// Retrieve a staff member by their identifier.
    fn get_staff_by_id(&self, id: StaffId) -> RepositoryResult<Option<StaffMember>>;
    /// Retrieve a location by its identifier.
    fn get_location_by_id(&self, id: LocationId) -> RepositoryResult<Option<Location>>;
}

/// Read-only operations over the slot inventory.
pub trait SlotReader {
    /// List slots matching the supplied query parameters, preserving
    /// inventory order. Returns the match count alongside the items.
    fn list_slots(&self, query: SlotListQuery) -> RepositoryResult<(usize, Vec<TimeSlot>)>;
    /// Retrieve a slot by its identifier.
    fn get_slot_by_id(&self, id: &SlotId) -> RepositoryResult<Option<TimeSlot>>;
}

/// Read-only operations over the derived booking collection.
pub trait BookingReader {
    /// List bookings matching the supplied query parameters, filtered then
    /// sorted then paginated. Returns the filtered count alongside the
    /// requested page.
    fn list_bookings(&self, query: BookingListQuery) -> RepositoryResult<(usize, Vec<Booking>)>;
    /// Retrieve a booking by its identifier.
    fn get_booking_by_id(&self, id: &BookingId) -> RepositoryResult<Option<Booking>>;
}
