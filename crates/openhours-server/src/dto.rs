//! Data Transfer Objects for the HTTP API.

use openhours_core::{Availability, Slot};
use serde::{Deserialize, Serialize};

/// Query parameters for the availability endpoint.
///
/// Both are required by the contract, but they are modeled as optional raw
/// strings so the handler can reject missing or unparseable values with a
/// 400 and an explanatory body instead of axum's default rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AvailabilityQuery {
    /// Requested date (YYYY-MM-DD)
    pub date: Option<String>,
    /// Requested time (HH:mm)
    pub time: Option<String>,
}

/// A concrete slot in wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotDto {
    /// Slot date (YYYY-MM-DD)
    pub date: String,
    /// Slot time (HH:mm)
    pub time: String,
}

impl From<Slot> for SlotDto {
    fn from(slot: Slot) -> Self {
        Self {
            date: slot.date.to_string(),
            time: slot.time.format("%H:%M").to_string(),
        }
    }
}

/// Response payload for the availability endpoint.
///
/// `nextAvailableSlot` is present exactly when the provider is unavailable
/// and a later opening exists; a fully closed schedule answers
/// `isAvailable: false` with no slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub is_available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_available_slot: Option<SlotDto>,
}

impl From<Availability> for AvailabilityResponse {
    fn from(availability: Availability) -> Self {
        match availability {
            Availability::Available => Self {
                is_available: true,
                next_available_slot: None,
            },
            Availability::Unavailable { next_slot } => Self {
                is_available: false,
                next_available_slot: Some(next_slot.into()),
            },
            Availability::NoUpcomingSlot => Self {
                is_available: false,
                next_available_slot: None,
            },
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
