//! Stay mutation rules and date-picker option sets.
//!
//! Stays carry the only interactively-edited date pair in the model, so this
//! module owns the check-in/check-out invariant: after any update,
//! `check_out >= check_in` holds, and both dates stay within the option sets
//! offered by the pickers.

use crate::config::reference::ReferenceData;
use crate::ids::IdGenerator;
use crate::models::{Day, Stay, Trip};
use chrono::{Days, NaiveDate};
use tracing::debug;

/// Whether the day can take a stay (it currently holds none).
#[must_use]
pub fn can_add_stay(day: &Day) -> bool {
    day.stays.is_empty()
}

/// Appends a stay to the day at `day_index` if the day holds none yet.
///
/// Defaults: check-in = departure date + day index, check-out = check-in + 1
/// day clamped so it never exceeds the return date, hotel = first entry of
/// the configured hotel list. A second invocation on the same day is a no-op,
/// as is an out-of-range index.
#[must_use]
pub fn add_stay(
    trip: &Trip,
    day_index: usize,
    ids: &dyn IdGenerator,
    reference: &ReferenceData,
) -> Trip {
    let mut updated = trip.clone();
    let check_in = updated.departure_date + Days::new(day_index as u64);
    let check_out = (check_in + Days::new(1)).min(updated.return_date);
    let hotel = reference.hotels.first().cloned().unwrap_or_default();

    let Some(day) = updated.days.get_mut(day_index) else {
        debug!(day_index, "ignoring add_stay: day index out of range");
        return updated;
    };
    if !can_add_stay(day) {
        debug!(day_index, "ignoring add_stay: day already has a stay");
        return updated;
    }

    day.stays.push(Stay {
        id: ids.generate(),
        check_in,
        check_out,
        hotel,
    });
    updated
}

/// Sets a stay's check-in date.
///
/// If the stored check-out would end up before the new check-in, check-out is
/// forced equal to check-in so the `check_out >= check_in` invariant holds.
#[must_use]
pub fn update_stay_check_in(
    trip: &Trip,
    day_index: usize,
    stay_index: usize,
    check_in: NaiveDate,
) -> Trip {
    with_stay(trip, day_index, stay_index, |stay| {
        stay.check_in = check_in;
        if stay.check_out < stay.check_in {
            stay.check_out = stay.check_in;
        }
    })
}

/// Sets a stay's check-out date.
///
/// Symmetric to [`update_stay_check_in`]: if the stored check-in would end up
/// after the new check-out, check-in is forced equal to check-out.
#[must_use]
pub fn update_stay_check_out(
    trip: &Trip,
    day_index: usize,
    stay_index: usize,
    check_out: NaiveDate,
) -> Trip {
    with_stay(trip, day_index, stay_index, |stay| {
        stay.check_out = check_out;
        if stay.check_in > stay.check_out {
            stay.check_in = stay.check_out;
        }
    })
}

/// Replaces a stay's hotel selection.
#[must_use]
pub fn update_stay_hotel(trip: &Trip, day_index: usize, stay_index: usize, hotel: &str) -> Trip {
    with_stay(trip, day_index, stay_index, |stay| {
        stay.hotel = hotel.to_string();
    })
}

/// Every calendar date a stay picker may offer: the trip's full date range,
/// both endpoints inclusive. Empty for an inverted range.
#[must_use]
pub fn stay_date_options(trip: &Trip) -> Vec<NaiveDate> {
    let mut options = Vec::new();
    let mut current = trip.departure_date;
    while current <= trip.return_date {
        options.push(current);
        current = current + Days::new(1);
    }
    options
}

/// The dates the check-out picker offers for a stay with the given check-in:
/// exactly the subset of [`stay_date_options`] on or after it.
#[must_use]
pub fn check_out_options(trip: &Trip, check_in: NaiveDate) -> Vec<NaiveDate> {
    stay_date_options(trip)
        .into_iter()
        .filter(|d| *d >= check_in)
        .collect()
}

fn with_stay(
    trip: &Trip,
    day_index: usize,
    stay_index: usize,
    apply: impl FnOnce(&mut Stay),
) -> Trip {
    let mut updated = trip.clone();
    let Some(stay) = updated
        .days
        .get_mut(day_index)
        .and_then(|day| day.stays.get_mut(stay_index))
    else {
        debug!(day_index, stay_index, "ignoring stay update: index out of range");
        return updated;
    };

    apply(stay);
    updated
}
