//! Activity mutation rules.

use crate::ids::IdGenerator;
use crate::models::{Activity, TimeOfDay, Trip};
use tracing::debug;

/// Appends a blank activity to the day at `day_index`.
///
/// The new activity defaults to a Morning slot with empty title, description
/// and price, and receives a fresh id from the injected generator. Activities
/// per day are unbounded. Out-of-range indices are no-ops.
#[must_use]
pub fn add_activity(trip: &Trip, day_index: usize, ids: &dyn IdGenerator) -> Trip {
    let mut updated = trip.clone();
    let Some(day) = updated.days.get_mut(day_index) else {
        debug!(day_index, "ignoring add_activity: day index out of range");
        return updated;
    };

    day.activities.push(Activity {
        id: ids.generate(),
        time: TimeOfDay::Morning,
        title: String::new(),
        description: String::new(),
        price: String::new(),
    });
    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{SequentialIdGenerator, date, trip_with_days};

    #[test]
    fn test_add_activity_defaults() {
        let ids = SequentialIdGenerator::default();
        let trip = trip_with_days(date(2025, 6, 1), date(2025, 6, 3), 1);

        let updated = add_activity(&trip, 0, &ids);

        let activity = &updated.days[0].activities[0];
        assert_eq!(activity.id, "test-id-1");
        assert_eq!(activity.time, TimeOfDay::Morning);
        assert!(activity.title.is_empty());
        assert!(activity.description.is_empty());
        assert!(activity.price.is_empty());
    }

    #[test]
    fn test_add_activity_is_unbounded_per_day() {
        let ids = SequentialIdGenerator::default();
        let mut trip = trip_with_days(date(2025, 6, 1), date(2025, 6, 3), 1);

        for _ in 0..5 {
            trip = add_activity(&trip, 0, &ids);
        }

        assert_eq!(trip.days[0].activities.len(), 5);
    }

    #[test]
    fn test_add_activity_generates_unique_ids() {
        let ids = SequentialIdGenerator::default();
        let trip = trip_with_days(date(2025, 6, 1), date(2025, 6, 3), 1);

        let updated = add_activity(&add_activity(&trip, 0, &ids), 0, &ids);

        let first = &updated.days[0].activities[0].id;
        let second = &updated.days[0].activities[1].id;
        assert_ne!(first, second);
    }

    #[test]
    fn test_add_activity_out_of_range_is_noop() {
        let ids = SequentialIdGenerator::default();
        let trip = trip_with_days(date(2025, 6, 1), date(2025, 6, 3), 1);

        let updated = add_activity(&trip, 3, &ids);
        assert_eq!(updated, trip);
    }
}
