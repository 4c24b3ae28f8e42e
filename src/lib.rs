//! Core library for the Bookwell appointment dashboard.
//!
//! This crate synthesizes a bookable-slot inventory over a forward horizon,
//! derives booking records from the booked subset and exposes repository and
//! service layers that serve filtered, sorted and paginated booking views
//! plus summary statistics to the dashboard pages.

pub mod domain;
pub mod error_conversions;
pub mod generator;
pub mod pagination;
pub mod repository;
pub mod services;
