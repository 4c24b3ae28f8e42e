use std::collections::HashSet;

use bookwell::domain::types::{BookingStatus, ClientType, SlotStatus};
use bookwell::pagination::DEFAULT_ITEMS_PER_PAGE;
use bookwell::repository::{
    BookingListQuery, BookingReader, BookingSortField, SlotListQuery, SlotReader, SortDirection,
};
use bookwell::services::dashboard::{self, DEFAULT_CHART_WINDOW_DAYS};
use bookwell::services::{bookings, calendar};
use chrono::Duration;

mod common;

#[test]
fn concatenated_pages_reproduce_the_filtered_sequence() {
    let repo = common::seeded_repository();

    let everything = bookings::list_bookings(
        &repo,
        BookingListQuery::default(),
        1,
        common::seeded_inventory().bookings.len().max(1),
    )
    .unwrap();

    let first_page =
        bookings::list_bookings(&repo, BookingListQuery::default(), 1, DEFAULT_ITEMS_PER_PAGE)
            .unwrap();
    let mut collected = Vec::new();
    for page in 1..=first_page.total_pages {
        let paginated = bookings::list_bookings(
            &repo,
            BookingListQuery::default(),
            page,
            DEFAULT_ITEMS_PER_PAGE,
        )
        .unwrap();
        assert!(paginated.items.len() <= DEFAULT_ITEMS_PER_PAGE);
        collected.extend(paginated.items);
    }

    assert_eq!(collected, everything.items);
    let unique: HashSet<_> = collected.iter().map(|booking| &booking.id).collect();
    assert_eq!(unique.len(), collected.len());
}

#[test]
fn pages_past_the_end_are_empty_but_valid() {
    let repo = common::seeded_repository();
    let first =
        bookings::list_bookings(&repo, BookingListQuery::default(), 1, DEFAULT_ITEMS_PER_PAGE)
            .unwrap();

    let beyond = bookings::list_bookings(
        &repo,
        BookingListQuery::default(),
        first.total_pages + 1,
        DEFAULT_ITEMS_PER_PAGE,
    )
    .unwrap();

    assert!(beyond.items.is_empty());
    assert_eq!(beyond.total_items, first.total_items);
}

#[test]
fn filters_agree_with_a_manual_scan() {
    let inventory = common::seeded_inventory();
    let repo = common::seeded_repository();

    let query = BookingListQuery::default()
        .status(BookingStatus::Confirmed)
        .client_type(ClientType::Business);
    let (total, items) = repo.list_bookings(query).unwrap();

    let expected: Vec<_> = inventory
        .bookings
        .iter()
        .filter(|booking| {
            booking.status == BookingStatus::Confirmed
                && booking.client_type == ClientType::Business
        })
        .collect();

    assert_eq!(total, expected.len());
    let returned: HashSet<_> = items.iter().map(|booking| &booking.id).collect();
    let scanned: HashSet<_> = expected.iter().map(|booking| &booking.id).collect();
    assert_eq!(returned, scanned);
}

#[test]
fn search_is_case_insensitive_over_resolved_names() {
    let inventory = common::seeded_inventory();
    let repo = common::seeded_repository();

    let (total, items) = repo
        .list_bookings(BookingListQuery::default().search("SARAH"))
        .unwrap();

    let expected: HashSet<_> = inventory
        .bookings
        .iter()
        .filter(|booking| {
            let client = booking.client_name.as_str().to_lowercase().contains("sarah");
            let staff = inventory
                .catalog
                .staff_by_id(booking.staff_id)
                .is_some_and(|member| member.name.to_lowercase().contains("sarah"));
            client || staff
        })
        .map(|booking| &booking.id)
        .collect();

    assert_eq!(total, expected.len());
    assert!(total > 0);
    let returned: HashSet<_> = items.iter().map(|booking| &booking.id).collect();
    assert_eq!(returned, expected);
}

#[test]
fn blank_search_passes_everything_through() {
    let inventory = common::seeded_inventory();
    let repo = common::seeded_repository();

    let (total, _) = repo
        .list_bookings(BookingListQuery::default().search(""))
        .unwrap();

    assert_eq!(total, inventory.bookings.len());
}

#[test]
fn client_name_sort_ignores_case() {
    let repo = common::seeded_repository();
    let query =
        BookingListQuery::default().sort(BookingSortField::ClientName, SortDirection::Asc);

    let (_, items) = repo.list_bookings(query).unwrap();

    for window in items.windows(2) {
        assert!(
            window[0].client_name.as_str().to_lowercase()
                <= window[1].client_name.as_str().to_lowercase()
        );
    }
}

#[test]
fn descending_date_reverses_ascending_date() {
    let repo = common::seeded_repository();
    let asc = repo
        .list_bookings(BookingListQuery::default().sort(BookingSortField::Date, SortDirection::Asc))
        .unwrap()
        .1;
    let mut desc = repo
        .list_bookings(
            BookingListQuery::default().sort(BookingSortField::Date, SortDirection::Desc),
        )
        .unwrap()
        .1;

    desc.reverse();
    assert_eq!(asc, desc);
}

#[test]
fn slots_for_date_returns_one_business_day() {
    let repo = common::seeded_repository();
    let date = common::fixture_now().date() + Duration::days(10);

    let slots = calendar::slots_for_date(&repo, date, SlotListQuery::default()).unwrap();

    assert_eq!(slots.len(), 16);
    assert!(slots.iter().all(|slot| slot.date == date));
}

#[test]
fn slot_and_booking_lookups_resolve_generated_ids() {
    let inventory = common::seeded_inventory();
    let repo = common::seeded_repository();

    let slot = &inventory.slots[42];
    assert_eq!(repo.get_slot_by_id(&slot.id).unwrap().as_ref(), Some(slot));

    let booking = &inventory.bookings[0];
    assert_eq!(
        repo.get_booking_by_id(&booking.id).unwrap().as_ref(),
        Some(booking)
    );
}

#[test]
fn stats_are_consistent_with_the_inventory() {
    let inventory = common::seeded_inventory();
    let repo = common::seeded_repository();
    let today = common::fixture_now().date();

    let stats = dashboard::booking_stats(&repo, today).unwrap();

    assert_eq!(stats.total, inventory.bookings.len());
    assert!(stats.upcoming <= stats.total);
    assert!(stats.cancelled <= stats.total);
    assert!(stats.utilization_percent <= 100);

    let booked = inventory
        .slots
        .iter()
        .filter(|slot| slot.status == SlotStatus::Booked)
        .count();
    let expected =
        (100.0 * booked as f64 / inventory.slots.len() as f64).round() as u32;
    assert_eq!(stats.utilization_percent, expected);
}

#[test]
fn time_series_totals_match_bookings_in_window() {
    let inventory = common::seeded_inventory();
    let repo = common::seeded_repository();
    let today = common::fixture_now().date();

    let series =
        dashboard::booking_time_series(&repo, today, DEFAULT_CHART_WINDOW_DAYS).unwrap();

    assert_eq!(series.len(), DEFAULT_CHART_WINDOW_DAYS as usize);
    for window in series.windows(2) {
        assert_eq!(window[1].date, window[0].date + Duration::days(1));
    }

    let window_start = today - Duration::days(i64::from(DEFAULT_CHART_WINDOW_DAYS) - 1);
    let in_window = inventory
        .bookings
        .iter()
        .filter(|booking| booking.date >= window_start && booking.date <= today)
        .count();
    let total: usize = series.iter().map(|row| row.total).sum();
    assert_eq!(total, in_window);
}
