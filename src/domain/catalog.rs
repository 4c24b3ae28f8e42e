use serde::{Deserialize, Serialize};

use crate::domain::types::{LocationId, ServiceId, StaffId};

/// A bookable service offering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    pub duration_minutes: u32,
    /// Display color used by the calendar, as a `#rrggbb` hex string.
    pub color: String,
}

/// A staff member who can be assigned to slots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StaffMember {
    pub id: StaffId,
    pub name: String,
    pub avatar: String,
    pub role: String,
}

/// A physical or virtual location where appointments take place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
}

/// Static reference collections loaded once and shared immutably.
///
/// Lookups return `None` for unknown identifiers; callers routinely probe
/// optional references, so a miss is never an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    services: Vec<Service>,
    staff: Vec<StaffMember>,
    locations: Vec<Location>,
}

const BUILTIN_SERVICES: [(&str, u32, &str); 5] = [
    ("Consultation", 60, "#6366f1"),
    ("Follow-up", 30, "#10b981"),
    ("Workshop", 120, "#f59e0b"),
    ("Assessment", 90, "#ef4444"),
    ("Therapy Session", 45, "#8b5cf6"),
];

const BUILTIN_STAFF: [(&str, &str, &str); 5] = [
    ("Dr. Sarah Johnson", "/avatars/sarah.jpg", "Senior Consultant"),
    ("Dr. Michael Chen", "/avatars/michael.jpg", "Therapist"),
    ("Lisa Rodriguez", "/avatars/lisa.jpg", "Specialist"),
    ("Dr. Emily Davis", "/avatars/emily.jpg", "Senior Therapist"),
    ("James Wilson", "/avatars/james.jpg", "Consultant"),
];

const BUILTIN_LOCATIONS: [&str; 4] = [
    "Downtown Office",
    "Medical Center",
    "Wellness Clinic",
    "Virtual Meeting",
];

impl Catalog {
    /// Builds a catalog from caller-supplied collections.
    pub fn new(services: Vec<Service>, staff: Vec<StaffMember>, locations: Vec<Location>) -> Self {
        Self {
            services,
            staff,
            locations,
        }
    }

    /// The built-in reference catalog used by the dashboard.
    pub fn builtin() -> Self {
        let services = BUILTIN_SERVICES
            .iter()
            .enumerate()
            .map(|(index, (name, duration_minutes, color))| Service {
                id: ServiceId::from_index(index),
                name: (*name).to_owned(),
                duration_minutes: *duration_minutes,
                color: (*color).to_owned(),
            })
            .collect();
        let staff = BUILTIN_STAFF
            .iter()
            .enumerate()
            .map(|(index, (name, avatar, role))| StaffMember {
                id: StaffId::from_index(index),
                name: (*name).to_owned(),
                avatar: (*avatar).to_owned(),
                role: (*role).to_owned(),
            })
            .collect();
        let locations = BUILTIN_LOCATIONS
            .iter()
            .enumerate()
            .map(|(index, name)| Location {
                id: LocationId::from_index(index),
                name: (*name).to_owned(),
            })
            .collect();
        Self::new(services, staff, locations)
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn staff(&self) -> &[StaffMember] {
        &self.staff
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Retrieve a service by its identifier.
    pub fn service_by_id(&self, id: ServiceId) -> Option<&Service> {
        self.services.iter().find(|service| service.id == id)
    }

    /// Retrieve a staff member by their identifier.
    pub fn staff_by_id(&self, id: StaffId) -> Option<&StaffMember> {
        self.staff.iter().find(|member| member.id == id)
    }

    /// Retrieve a location by its identifier.
    pub fn location_by_id(&self, id: LocationId) -> Option<&Location> {
        self.locations.iter().find(|location| location.id == id)
    }
}
