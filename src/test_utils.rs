//! Shared test utilities for `itinera`.
//!
//! Provides builders for sample trips with sensible defaults and a
//! deterministic id generator so mutation tests produce stable output.

use crate::ids::IdGenerator;
use crate::models::{Activity, Day, Stay, TimeOfDay, Transfer, Trip};
use chrono::NaiveDate;
use std::cell::Cell;

/// Builds a `NaiveDate`, panicking on invalid input (tests only).
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// A three-day Mumbai → Paris trip with one fully-populated day.
///
/// # Defaults
/// * departure 2025-06-01, return 2025-06-03, 2 travelers
/// * day 1: one Morning activity ("Louvre Visit"), one transfer, one stay
pub fn sample_trip() -> Trip {
    Trip {
        name: "Paris Getaway".to_string(),
        departure_city: "Mumbai".to_string(),
        arrival_city: "Paris".to_string(),
        departure_date: date(2025, 6, 1),
        return_date: date(2025, 6, 3),
        travelers: 2,
        days: vec![Day {
            activities: vec![Activity {
                id: "activity-1".to_string(),
                time: TimeOfDay::Morning,
                title: "Louvre Visit".to_string(),
                description: "Guided tour of the Louvre".to_string(),
                price: String::new(),
            }],
            transfers: vec![Transfer {
                id: "transfer-1".to_string(),
                date: date(2025, 6, 1),
                flight_name: "Indigo".to_string(),
                from: "Mumbai".to_string(),
                to: "Paris".to_string(),
                num_travelers: None,
            }],
            stays: vec![Stay {
                id: "stay-1".to_string(),
                check_in: date(2025, 6, 1),
                check_out: date(2025, 6, 2),
                hotel: "Hotel Taj".to_string(),
            }],
        }],
    }
}

/// A trip over the given date range holding `day_count` empty days.
pub fn trip_with_days(departure: NaiveDate, ret: NaiveDate, day_count: usize) -> Trip {
    Trip {
        name: "Test Trip".to_string(),
        departure_city: "Mumbai".to_string(),
        arrival_city: "Paris".to_string(),
        departure_date: departure,
        return_date: ret,
        travelers: 1,
        days: vec![Day::default(); day_count],
    }
}

/// Deterministic id generator producing `test-id-1`, `test-id-2`, ...
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    counter: Cell<u32>,
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self) -> String {
        let next = self.counter.get() + 1;
        self.counter.set(next);
        format!("test-id-{next}")
    }
}
