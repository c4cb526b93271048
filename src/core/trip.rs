//! Day-count rules: adding and removing days.
//!
//! A trip may hold at most one day per calendar day in its date range, both
//! endpoints inclusive. Attempts past that cap are silent no-ops - the UI is
//! expected to disable the triggering affordance rather than show an error.

use crate::models::{Day, Trip};
use tracing::debug;

/// Number of days the trip's date range allows, both endpoints inclusive.
///
/// For an inverted range (return before departure) this can be zero or
/// negative, which disables adding days entirely - matching the interactive
/// behavior where the affordance simply never enables.
#[must_use]
pub fn allowed_day_count(trip: &Trip) -> i64 {
    (trip.return_date - trip.departure_date).num_days() + 1
}

/// Whether the trip has room for another day.
#[must_use]
pub fn can_add_day(trip: &Trip) -> bool {
    (trip.days.len() as i64) < allowed_day_count(trip)
}

/// Appends a new empty day if the date range allows it.
///
/// No-op when the trip already holds `allowed_day_count` days.
#[must_use]
pub fn add_day(trip: &Trip) -> Trip {
    let mut updated = trip.clone();
    if can_add_day(trip) {
        updated.days.push(Day::default());
    } else {
        debug!(
            day_count = trip.days.len(),
            allowed = allowed_day_count(trip),
            "ignoring add_day: trip already holds the allowed number of days"
        );
    }
    updated
}

/// Removes the day at `day_index`, discarding all of its activities,
/// transfers and stays with it.
///
/// Remaining days keep their relative order; display numbering is positional,
/// so nothing is renumbered in storage. Out-of-range indices are no-ops.
#[must_use]
pub fn remove_day(trip: &Trip, day_index: usize) -> Trip {
    let mut updated = trip.clone();
    if day_index < updated.days.len() {
        updated.days.remove(day_index);
    } else {
        debug!(day_index, "ignoring remove_day: index out of range");
    }
    updated
}
