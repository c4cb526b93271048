//! Itinerary data model.
//!
//! A [`Trip`] is the root record: trip-level fields plus an ordered list of
//! [`Day`]s, each holding zero-or-more [`Activity`]s, at most one [`Transfer`]
//! and at most one [`Stay`] (the one-per-day cap is an interactive affordance
//! enforced by the mutation layer in [`crate::core`]; the schema itself allows
//! more). Field names serialize in camelCase, matching the JSON shape the
//! submission endpoint expects.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Root itinerary record spanning a departure/return date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    /// Traveler-facing trip name
    #[validate(length(min = 2, message = "name must be at least 2 characters"))]
    pub name: String,
    /// City the trip departs from
    pub departure_city: String,
    /// Destination city
    pub arrival_city: String,
    /// First day of the trip
    pub departure_date: NaiveDate,
    /// Last day of the trip; expected on or after `departure_date`, but the
    /// schema validator deliberately does not cross-check this (see
    /// [`crate::validate::validate_trip_strict`] for the strict variant)
    pub return_date: NaiveDate,
    /// Number of people traveling
    #[validate(range(min = 1, message = "at least one traveler is required"))]
    pub travelers: u32,
    /// One entry per planned calendar day, in trip order
    #[validate(length(min = 1, message = "at least one day is required"), nested)]
    pub days: Vec<Day>,
}

/// One calendar day within a [`Trip`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    /// Activities in display order (unbounded)
    #[validate(nested)]
    pub activities: Vec<Activity>,
    /// Transfers for this day; the UI caps this at one
    #[serde(default)]
    #[validate(nested)]
    pub transfers: Vec<Transfer>,
    /// Hotel stays starting on this day; the UI caps this at one
    #[serde(default)]
    #[validate(nested)]
    pub stays: Vec<Stay>,
}

/// A titled, time-of-day-tagged event within a [`Day`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Opaque unique identifier, generated at creation
    pub id: String,
    /// Rough slot within the day; not required to be unique per day
    pub time: TimeOfDay,
    /// Short activity title
    pub title: String,
    /// Longer free-text description
    pub description: String,
    /// Display price; free text, never parsed or summed
    pub price: String,
}

/// A single flight movement associated with a [`Day`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    /// Opaque unique identifier, generated at creation
    pub id: String,
    /// Flight date, derived at creation as departure date + day index
    pub date: NaiveDate,
    /// Carrier/flight label, defaulted from the configured carrier name
    pub flight_name: String,
    /// Origin city, snapshotted from the trip at creation time
    pub from: String,
    /// Destination city, snapshotted from the trip at creation time
    pub to: String,
    /// Per-transfer traveler count override; `None` falls back to the
    /// trip-level number
    #[serde(skip_serializing_if = "Option::is_none", default)]
    #[validate(range(min = 1, message = "at least one traveler is required"))]
    pub num_travelers: Option<u32>,
}

/// A hotel booking spanning a sub-range of the trip's dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Stay {
    /// Opaque unique identifier, generated at creation
    pub id: String,
    /// Check-in date
    pub check_in: NaiveDate,
    /// Check-out date; the mutation layer keeps this >= `check_in`
    pub check_out: NaiveDate,
    /// Selected hotel name; defaults come from the configured hotel list
    pub hotel: String,
}

/// Coarse slot within a day used to tag activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeOfDay {
    /// Before noon (the default for new activities)
    #[default]
    Morning,
    /// Noon to evening
    Afternoon,
    /// After dark
    Evening,
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_trip_serializes_camel_case() {
        let trip = Trip {
            name: "Summer Break".to_string(),
            departure_city: "Mumbai".to_string(),
            arrival_city: "Paris".to_string(),
            departure_date: date(2025, 6, 1),
            return_date: date(2025, 6, 3),
            travelers: 2,
            days: vec![Day::default()],
        };

        let json = serde_json::to_value(&trip).unwrap();
        assert_eq!(json["departureCity"], "Mumbai");
        assert_eq!(json["departureDate"], "2025-06-01");
        assert_eq!(json["returnDate"], "2025-06-03");
        assert_eq!(json["travelers"], 2);
        assert!(json["days"][0]["activities"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_day_deserializes_without_optional_lists() {
        // transfers/stays are optional on the wire
        let day: Day = serde_json::from_str(r#"{"activities": []}"#).unwrap();
        assert!(day.transfers.is_empty());
        assert!(day.stays.is_empty());
    }

    #[test]
    fn test_time_of_day_round_trip() {
        let json = serde_json::to_string(&TimeOfDay::Afternoon).unwrap();
        assert_eq!(json, "\"Afternoon\"");
        let parsed: TimeOfDay = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, TimeOfDay::Afternoon);
    }

    #[test]
    fn test_transfer_omits_absent_traveler_override() {
        let transfer = Transfer {
            id: "t-1".to_string(),
            date: date(2025, 6, 1),
            flight_name: "Indigo".to_string(),
            from: "Mumbai".to_string(),
            to: "Paris".to_string(),
            num_travelers: None,
        };
        let json = serde_json::to_value(&transfer).unwrap();
        assert!(json.get("numTravelers").is_none());
    }
}
