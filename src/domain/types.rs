//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs should carry these wrappers instead of raw primitives so
//! that identifiers and enumerated states are enforced at the boundary.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// An identifier was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveId(&'static str),
    /// A required text field was empty or whitespace only.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    /// Catch-all for custom validation failures.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId($field))
                }
            }

            /// Identifier for the 1-based catalog position `index`.
            pub(crate) const fn from_index(index: usize) -> Self {
                Self(index as i32 + 1)
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for i32 {
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }
    };
}

id_newtype!(ServiceId, "Unique identifier for a service.", "service_id");
id_newtype!(StaffId, "Unique identifier for a staff member.", "staff_id");
id_newtype!(LocationId, "Unique identifier for a location.", "location_id");

/// Deterministic identifier for a time slot, derived from its date and
/// start time: `slot-{YYYY-MM-DD}-{HH:MM}`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct SlotId(String);

impl SlotId {
    /// Builds the canonical identifier for a slot starting at `start` on `date`.
    pub fn from_parts(date: NaiveDate, start: NaiveTime) -> Self {
        Self(format!(
            "slot-{}-{}",
            date.format("%Y-%m-%d"),
            start.format("%H:%M")
        ))
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SlotId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Deterministic identifier for a booking, derived from its source slot:
/// `booking-{slot_id}`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct BookingId(String);

impl BookingId {
    /// Builds the canonical identifier for the booking derived from `slot_id`.
    pub fn from_slot(slot_id: &SlotId) -> Self {
        Self(format!("booking-{slot_id}"))
    }

    /// Identifier of the slot this booking was derived from, when the
    /// identifier carries the canonical prefix.
    pub fn source_slot_id(&self) -> Option<SlotId> {
        self.0
            .strip_prefix("booking-")
            .map(|raw| SlotId(raw.to_owned()))
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for BookingId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Name of the client a booking was made for. Always trimmed and never
/// empty.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ClientName(String);

impl ClientName {
    /// Creates a client name, trimming surrounding whitespace and
    /// rejecting empty input.
    pub fn new(value: impl Into<String>) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_owned();
        if trimmed.is_empty() {
            Err(TypeConstraintError::EmptyField("client_name"))
        } else {
            Ok(Self(trimmed))
        }
    }

    /// Name taken from the built-in sample pool, known to be non-empty.
    pub(crate) fn from_pool(value: &'static str) -> Self {
        Self(value.to_owned())
    }

    /// Borrow the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ClientName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for ClientName {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl PartialEq<&str> for ClientName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<ClientName> for &str {
    fn eq(&self, other: &ClientName) -> bool {
        *self == other.0
    }
}

/// Availability state assigned to a slot once at generation time.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SlotStatus {
    Available,
    Booked,
    Disabled,
}

impl SlotStatus {
    /// String representation used in filters and serialized payloads.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Booked => "booked",
            Self::Disabled => "disabled",
        }
    }
}

impl Display for SlotStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for SlotStatus {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "available" => Ok(Self::Available),
            "booked" => Ok(Self::Booked),
            "disabled" => Ok(Self::Disabled),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "slot status: {other}"
            ))),
        }
    }
}

/// Confirmation state assigned to a booking once at derivation time.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Cancelled,
}

impl BookingStatus {
    /// String representation used in filters and serialized payloads.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Pending => "pending",
            Self::Cancelled => "cancelled",
        }
    }
}

impl Display for BookingStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for BookingStatus {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "confirmed" => Ok(Self::Confirmed),
            "pending" => Ok(Self::Pending),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "booking status: {other}"
            ))),
        }
    }
}

/// Kind of client a booking was made for.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ClientType {
    Individual,
    Business,
}

impl ClientType {
    /// String representation used in filters and serialized payloads.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Business => "business",
        }
    }
}

impl Display for ClientType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for ClientType {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "individual" => Ok(Self::Individual),
            "business" => Ok(Self::Business),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "client type: {other}"
            ))),
        }
    }
}
