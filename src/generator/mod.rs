//! Slot inventory synthesis and booking derivation.
//!
//! The generator builds the full slot inventory over a fixed forward
//! horizon, then projects the booked subset into booking records. Both
//! collections are produced once and published as an immutable
//! [`Inventory`] snapshot; consumers never mutate them in place.

use chrono::NaiveDateTime;
use rand::Rng;
use thiserror::Error;

use crate::domain::booking::Booking;
use crate::domain::catalog::Catalog;
use crate::domain::slot::TimeSlot;
use crate::domain::types::{BookingStatus, SlotStatus};

mod bookings;
mod slots;

pub use self::bookings::CLIENT_NAMES;

/// Errors produced when validating generator configuration.
///
/// Configuration is rejected eagerly, before any slot is produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A count or size parameter was zero.
    #[error("{0} must be greater than zero")]
    NonPositive(&'static str),
    /// The business-hour window was empty, inverted or out of range.
    #[error("business hours must satisfy start_hour < end_hour <= 23")]
    InvalidBusinessWindow,
    /// The slot granularity does not tile the business window.
    #[error("granularity_minutes must divide the business window evenly")]
    UnevenGranularity,
    /// A probability parameter fell outside `[0.0, 1.0]`.
    #[error("{0} must be a probability in [0.0, 1.0]")]
    InvalidProbability(&'static str),
    /// A catalog collection required for uniform draws was empty.
    #[error("catalog {0} must not be empty")]
    EmptyCatalog(&'static str),
}

/// Probability split used when drawing a slot status.
///
/// The residual probability mass is assigned to `Available`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotStatusDistribution {
    pub booked: f64,
    pub disabled: f64,
}

impl Default for SlotStatusDistribution {
    fn default() -> Self {
        Self {
            booked: 0.2,
            disabled: 0.1,
        }
    }
}

impl SlotStatusDistribution {
    /// Maps a uniform roll in `[0, 1)` to a slot status.
    pub fn draw(&self, roll: f64) -> SlotStatus {
        if roll < self.booked {
            SlotStatus::Booked
        } else if roll < self.booked + self.disabled {
            SlotStatus::Disabled
        } else {
            SlotStatus::Available
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.booked) {
            return Err(ConfigError::InvalidProbability("booked"));
        }
        if !(0.0..=1.0).contains(&self.disabled) {
            return Err(ConfigError::InvalidProbability("disabled"));
        }
        if self.booked + self.disabled > 1.0 {
            return Err(ConfigError::InvalidProbability("booked + disabled"));
        }
        Ok(())
    }
}

/// Probability split used when drawing a booking status.
///
/// The residual probability mass is assigned to `Confirmed`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookingStatusDistribution {
    pub cancelled: f64,
    pub pending: f64,
}

impl Default for BookingStatusDistribution {
    fn default() -> Self {
        Self {
            cancelled: 0.1,
            pending: 0.1,
        }
    }
}

impl BookingStatusDistribution {
    /// Maps a uniform roll in `[0, 1)` to a booking status.
    pub fn draw(&self, roll: f64) -> BookingStatus {
        if roll < self.cancelled {
            BookingStatus::Cancelled
        } else if roll < self.cancelled + self.pending {
            BookingStatus::Pending
        } else {
            BookingStatus::Confirmed
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.cancelled) {
            return Err(ConfigError::InvalidProbability("cancelled"));
        }
        if !(0.0..=1.0).contains(&self.pending) {
            return Err(ConfigError::InvalidProbability("pending"));
        }
        if self.cancelled + self.pending > 1.0 {
            return Err(ConfigError::InvalidProbability("cancelled + pending"));
        }
        Ok(())
    }
}

/// Tunable parameters for slot synthesis and booking derivation.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Number of forward days for which slots are pre-generated.
    pub horizon_days: u32,
    /// First business hour of each day (inclusive).
    pub start_hour: u32,
    /// Last business hour of each day (exclusive).
    pub end_hour: u32,
    /// Length of each slot in minutes.
    pub granularity_minutes: u32,
    pub slot_distribution: SlotStatusDistribution,
    pub booking_distribution: BookingStatusDistribution,
    /// Probability that a derived booking belongs to a business client.
    pub business_ratio: f64,
    /// `created_at` is drawn uniformly from this many whole days back.
    pub created_at_window_days: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            horizon_days: 60,
            start_hour: 9,
            end_hour: 17,
            granularity_minutes: 30,
            slot_distribution: SlotStatusDistribution::default(),
            booking_distribution: BookingStatusDistribution::default(),
            business_ratio: 0.3,
            created_at_window_days: 30,
        }
    }
}

impl GeneratorConfig {
    /// Validates all parameters, rejecting invalid configuration before any
    /// generation work starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.horizon_days == 0 {
            return Err(ConfigError::NonPositive("horizon_days"));
        }
        if self.granularity_minutes == 0 {
            return Err(ConfigError::NonPositive("granularity_minutes"));
        }
        if self.created_at_window_days == 0 {
            return Err(ConfigError::NonPositive("created_at_window_days"));
        }
        if self.start_hour >= self.end_hour || self.end_hour > 23 {
            return Err(ConfigError::InvalidBusinessWindow);
        }
        if ((self.end_hour - self.start_hour) * 60) % self.granularity_minutes != 0 {
            return Err(ConfigError::UnevenGranularity);
        }
        self.slot_distribution.validate()?;
        self.booking_distribution.validate()?;
        if !(0.0..=1.0).contains(&self.business_ratio) {
            return Err(ConfigError::InvalidProbability("business_ratio"));
        }
        Ok(())
    }

    /// Number of slots generated for each day in the horizon.
    ///
    /// Zero for configurations `validate` would reject, such as an
    /// inverted business window or a zero granularity.
    pub fn slots_per_day(&self) -> u32 {
        if self.granularity_minutes == 0 {
            return 0;
        }
        self.end_hour.saturating_sub(self.start_hour) * 60 / self.granularity_minutes
    }
}

/// Immutable snapshot of the generated slot inventory and derived bookings.
///
/// Generated once per horizon and handed to consumers by reference; any
/// future mutation produces a new snapshot rather than editing this one.
#[derive(Debug, Clone)]
pub struct Inventory {
    pub catalog: Catalog,
    pub slots: Vec<TimeSlot>,
    pub bookings: Vec<Booking>,
}

impl Inventory {
    /// Generates a fresh inventory using a non-deterministic random source.
    pub fn generate(
        catalog: Catalog,
        config: &GeneratorConfig,
        now: NaiveDateTime,
    ) -> Result<Self, ConfigError> {
        Self::generate_with_rng(catalog, config, now, &mut rand::thread_rng())
    }

    /// Generates a fresh inventory from an injected random source, allowing
    /// seeded, reproducible generation under test.
    pub fn generate_with_rng(
        catalog: Catalog,
        config: &GeneratorConfig,
        now: NaiveDateTime,
        rng: &mut impl Rng,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if catalog.services().is_empty() {
            return Err(ConfigError::EmptyCatalog("services"));
        }
        if catalog.staff().is_empty() {
            return Err(ConfigError::EmptyCatalog("staff"));
        }
        if catalog.locations().is_empty() {
            return Err(ConfigError::EmptyCatalog("locations"));
        }

        let slots = slots::generate_slots(&catalog, config, now, rng);
        let bookings = bookings::derive_bookings(&slots, config, now, rng);
        Ok(Self {
            catalog,
            slots,
            bookings,
        })
    }
}
