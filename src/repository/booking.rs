use std::cmp::Ordering;

use crate::domain::booking::Booking;
use crate::domain::catalog::Catalog;
use crate::domain::types::BookingId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    BookingListQuery, BookingReader, BookingSortField, InMemoryRepository, SortDirection,
};

/// Case-insensitive substring match against the client name and the
/// resolved service and staff names. Catalog references that do not
/// resolve contribute nothing to the match.
fn matches_search(booking: &Booking, term: &str, catalog: &Catalog) -> bool {
    if booking.client_name.as_str().to_lowercase().contains(term) {
        return true;
    }
    if catalog
        .service_by_id(booking.service_id)
        .is_some_and(|service| service.name.to_lowercase().contains(term))
    {
        return true;
    }
    catalog
        .staff_by_id(booking.staff_id)
        .is_some_and(|member| member.name.to_lowercase().contains(term))
}

fn compare(a: &Booking, b: &Booking, sort: BookingSortField) -> Ordering {
    match sort {
        BookingSortField::Date => a.starts_at().cmp(&b.starts_at()),
        BookingSortField::ClientName => a
            .client_name
            .as_str()
            .to_lowercase()
            .cmp(&b.client_name.as_str().to_lowercase()),
        BookingSortField::Status => a.status.as_str().cmp(b.status.as_str()),
        BookingSortField::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}

impl BookingReader for InMemoryRepository {
    fn list_bookings(&self, query: BookingListQuery) -> RepositoryResult<(usize, Vec<Booking>)> {
        let catalog = &self.inventory().catalog;
        let term = query
            .search
            .as_deref()
            .map(str::to_lowercase)
            .filter(|term| !term.is_empty());

        let mut items: Vec<Booking> = self
            .inventory()
            .bookings
            .iter()
            .filter(|booking| {
                term.as_deref()
                    .is_none_or(|term| matches_search(booking, term, catalog))
                    && query.status.is_none_or(|status| booking.status == status)
                    && query
                        .client_type
                        .is_none_or(|client_type| booking.client_type == client_type)
            })
            .cloned()
            .collect();

        let total = items.len();

        // Stable sort keeps equal keys in their derivation order.
        items.sort_by(|a, b| {
            let ordering = compare(a, b, query.sort);
            match query.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        if let Some(pagination) = &query.pagination {
            let offset = (pagination.page.max(1) - 1) * pagination.per_page;
            items = items
                .into_iter()
                .skip(offset)
                .take(pagination.per_page)
                .collect();
        }

        Ok((total, items))
    }

    fn get_booking_by_id(&self, id: &BookingId) -> RepositoryResult<Option<Booking>> {
        Ok(self
            .inventory()
            .bookings
            .iter()
            .find(|booking| &booking.id == id)
            .cloned())
    }
}
