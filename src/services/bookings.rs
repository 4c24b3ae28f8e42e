use crate::domain::booking::Booking;
use crate::pagination::Paginated;
use crate::repository::{BookingListQuery, BookingReader, BookingSortField, SortDirection};

use super::{ServiceError, ServiceResult};

/// Core business logic for rendering the bookings table.
///
/// Applies the query's filters and ordering, then serves the requested
/// 1-indexed page. Any pagination already set on `query` is replaced by
/// `page` and `per_page`. Repository errors are converted into
/// `ServiceError` variants so that callers can remain thin wrappers.
pub fn list_bookings<R>(
    repo: &R,
    query: BookingListQuery,
    page: usize,
    per_page: usize,
) -> ServiceResult<Paginated<Booking>>
where
    R: BookingReader,
{
    if per_page == 0 {
        return Err(ServiceError::InvalidArgument(
            "per_page must be greater than zero".into(),
        ));
    }

    let page = page.max(1);
    match repo.list_bookings(query.paginate(page, per_page)) {
        Ok((total, items)) => Ok(Paginated::new(
            items,
            page,
            total.div_ceil(per_page).max(1),
            total,
        )),
        Err(e) => {
            log::error!("Failed to list bookings: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Most recently created bookings, newest first, for the dashboard side
/// panel.
pub fn recent_bookings<R>(repo: &R, limit: usize) -> ServiceResult<Vec<Booking>>
where
    R: BookingReader,
{
    let query =
        BookingListQuery::default().sort(BookingSortField::CreatedAt, SortDirection::Desc);
    match repo.list_bookings(query) {
        Ok((_total, mut items)) => {
            items.truncate(limit);
            Ok(items)
        }
        Err(e) => {
            log::error!("Failed to list recent bookings: {e}");
            Err(ServiceError::Internal)
        }
    }
}
