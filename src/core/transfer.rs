//! Transfer mutation rules.
//!
//! A day holds at most one transfer interactively. The data model permits
//! more, so the cap lives here as a guard the UI mirrors by disabling the
//! "add transfer" affordance.

use crate::config::reference::ReferenceData;
use crate::ids::IdGenerator;
use crate::models::{Day, Transfer, Trip};
use chrono::Days;
use tracing::debug;

/// Whether the day can take a transfer (it currently holds none).
#[must_use]
pub fn can_add_transfer(day: &Day) -> bool {
    day.transfers.is_empty()
}

/// Appends a transfer to the day at `day_index` if the day holds none yet.
///
/// The transfer date is derived as departure date + day index; origin and
/// destination snapshot the trip's current cities and are not dynamically
/// linked afterward; the flight name defaults to the configured carrier.
/// A second invocation on the same day is a no-op, as is an out-of-range
/// index.
#[must_use]
pub fn add_transfer(
    trip: &Trip,
    day_index: usize,
    ids: &dyn IdGenerator,
    reference: &ReferenceData,
) -> Trip {
    let mut updated = trip.clone();
    let departure_city = updated.departure_city.clone();
    let arrival_city = updated.arrival_city.clone();
    let date = updated.departure_date + Days::new(day_index as u64);

    let Some(day) = updated.days.get_mut(day_index) else {
        debug!(day_index, "ignoring add_transfer: day index out of range");
        return updated;
    };
    if !can_add_transfer(day) {
        debug!(day_index, "ignoring add_transfer: day already has a transfer");
        return updated;
    }

    day.transfers.push(Transfer {
        id: ids.generate(),
        date,
        flight_name: reference.default_carrier.clone(),
        from: departure_city,
        to: arrival_city,
        num_travelers: None,
    });
    updated
}

/// Overrides the traveler count on one transfer.
///
/// `None` clears the override, falling back to the trip-level number.
/// Out-of-range indices are no-ops.
#[must_use]
pub fn set_transfer_travelers(
    trip: &Trip,
    day_index: usize,
    transfer_index: usize,
    travelers: Option<u32>,
) -> Trip {
    let mut updated = trip.clone();
    let Some(transfer) = updated
        .days
        .get_mut(day_index)
        .and_then(|day| day.transfers.get_mut(transfer_index))
    else {
        debug!(
            day_index,
            transfer_index, "ignoring set_transfer_travelers: index out of range"
        );
        return updated;
    };

    transfer.num_travelers = travelers;
    updated
}
