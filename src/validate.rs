//! Schema validation for itinerary records.
//!
//! Wraps the derived [`validator::Validate`] rules on the model types and
//! flattens the nested error structure into a flat list of field-path /
//! message pairs. Paths use the wire-format (camelCase) field names with
//! bracketed indices, e.g. `days[0].transfers[0].numTravelers`, so the form
//! layer can attach each error to the exact offending input.
//!
//! Faithful asymmetry: [`validate_trip`] checks the schema only. It does NOT
//! cross-check that the return date follows the departure date, nor that stay
//! or transfer dates fall inside the trip range; those invariants are
//! maintained constructively by the mutation layer ([`crate::core`]).
//! [`validate_trip_strict`] adds the cross-field checks for callers that want
//! the record-level guarantees.

use crate::models::Trip;
use serde::Serialize;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct FieldError {
    /// Wire-format path to the offending field, e.g. `days[1].stays[0].checkOut`
    pub path: String,
    /// Human-readable description of the violation
    pub message: String,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Validates a candidate trip against the schema rules.
///
/// Synchronous, deterministic, and never panics on malformed input: every
/// failure surfaces as returned error data. The resulting list is sorted by
/// field path so output is stable across runs.
///
/// # Errors
/// Returns the flat list of field errors when any schema rule is violated.
pub fn validate_trip(trip: &Trip) -> Result<(), Vec<FieldError>> {
    match trip.validate() {
        Ok(()) => Ok(()),
        Err(errors) => {
            let mut flat = Vec::new();
            flatten_errors("", &errors, &mut flat);
            flat.sort();
            Err(flat)
        }
    }
}

/// Validates schema rules plus the cross-field date invariants.
///
/// This closes the gaps [`validate_trip`] leaves open on purpose: the return
/// date must not precede the departure date, every transfer date and stay
/// check-in/check-out must fall within the trip range, and check-out must not
/// precede check-in.
///
/// # Errors
/// Returns the combined, sorted list of schema and cross-field errors.
pub fn validate_trip_strict(trip: &Trip) -> Result<(), Vec<FieldError>> {
    let mut errors = match validate_trip(trip) {
        Ok(()) => Vec::new(),
        Err(errors) => errors,
    };
    errors.extend(cross_field_errors(trip));

    if errors.is_empty() {
        Ok(())
    } else {
        errors.sort();
        errors.dedup();
        Err(errors)
    }
}

fn cross_field_errors(trip: &Trip) -> Vec<FieldError> {
    let mut out = Vec::new();
    let lo = trip.departure_date;
    let hi = trip.return_date;

    if hi < lo {
        out.push(FieldError {
            path: "returnDate".to_string(),
            message: "must not be earlier than the departure date".to_string(),
        });
    }

    for (i, day) in trip.days.iter().enumerate() {
        for (j, transfer) in day.transfers.iter().enumerate() {
            if transfer.date < lo || transfer.date > hi {
                out.push(FieldError {
                    path: format!("days[{i}].transfers[{j}].date"),
                    message: "must fall within the trip date range".to_string(),
                });
            }
        }
        for (j, stay) in day.stays.iter().enumerate() {
            if stay.check_out < stay.check_in {
                out.push(FieldError {
                    path: format!("days[{i}].stays[{j}].checkOut"),
                    message: "must not be earlier than the check-in date".to_string(),
                });
            }
            if stay.check_in < lo || stay.check_in > hi {
                out.push(FieldError {
                    path: format!("days[{i}].stays[{j}].checkIn"),
                    message: "must fall within the trip date range".to_string(),
                });
            }
            if stay.check_out < lo || stay.check_out > hi {
                out.push(FieldError {
                    path: format!("days[{i}].stays[{j}].checkOut"),
                    message: "must fall within the trip date range".to_string(),
                });
            }
        }
    }

    out
}

/// Recursively flattens validator's nested error tree into path/message pairs.
fn flatten_errors(prefix: &str, errors: &ValidationErrors, out: &mut Vec<FieldError>) {
    for (field, kind) in errors.errors() {
        let segment = camel_case(field);
        let path = if prefix.is_empty() {
            segment
        } else {
            format!("{prefix}.{segment}")
        };

        match kind {
            ValidationErrorsKind::Field(violations) => {
                for violation in violations {
                    let message = violation
                        .message
                        .as_ref()
                        .map_or_else(|| default_message(&violation.code), ToString::to_string);
                    out.push(FieldError {
                        path: path.clone(),
                        message,
                    });
                }
            }
            ValidationErrorsKind::Struct(inner) => flatten_errors(&path, inner, out),
            ValidationErrorsKind::List(entries) => {
                for (index, inner) in entries {
                    flatten_errors(&format!("{path}[{index}]"), inner, out);
                }
            }
        }
    }
}

fn default_message(code: &str) -> String {
    match code {
        "length" => "does not satisfy the required length".to_string(),
        "range" => "is out of the allowed range".to_string(),
        other => format!("failed the {other} check"),
    }
}

/// Converts a snake_case Rust field name to its camelCase wire name.
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{date, sample_trip};

    #[test]
    fn test_valid_trip_passes() {
        assert!(validate_trip(&sample_trip()).is_ok());
    }

    #[test]
    fn test_short_name_reports_field_path() {
        let mut trip = sample_trip();
        trip.name = "A".to_string();

        let errors = validate_trip(&trip).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "name");
        assert!(errors[0].message.contains('2'));
    }

    #[test]
    fn test_multiple_errors_sorted_by_path() {
        let mut trip = sample_trip();
        trip.name = "A".to_string();
        trip.travelers = 0;
        trip.days.clear();

        let errors = validate_trip(&trip).unwrap_err();
        let paths: Vec<&str> = errors.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["days", "name", "travelers"]);
    }

    #[test]
    fn test_nested_error_path_uses_wire_names() {
        let mut trip = sample_trip();
        trip.days[0].transfers[0].num_travelers = Some(0);

        let errors = validate_trip(&trip).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "days[0].transfers[0].numTravelers");
    }

    #[test]
    fn test_schema_validator_ignores_inverted_date_range() {
        // The faithful validator leaves cross-field checks to the UI layer.
        let mut trip = sample_trip();
        trip.return_date = date(2025, 5, 1);

        assert!(validate_trip(&trip).is_ok());
    }

    #[test]
    fn test_strict_validator_rejects_inverted_date_range() {
        let mut trip = sample_trip();
        trip.return_date = date(2025, 5, 1);

        let errors = validate_trip_strict(&trip).unwrap_err();
        assert!(errors.iter().any(|e| e.path == "returnDate"));
    }

    #[test]
    fn test_strict_validator_rejects_out_of_range_stay() {
        let mut trip = sample_trip();
        trip.days[0].stays[0].check_out = date(2025, 7, 15);

        let errors = validate_trip_strict(&trip).unwrap_err();
        assert!(
            errors
                .iter()
                .any(|e| e.path == "days[0].stays[0].checkOut"
                    && e.message.contains("trip date range"))
        );
    }

    #[test]
    fn test_strict_validator_rejects_inverted_stay() {
        let mut trip = sample_trip();
        trip.days[0].stays[0].check_in = date(2025, 6, 3);
        trip.days[0].stays[0].check_out = date(2025, 6, 1);

        let errors = validate_trip_strict(&trip).unwrap_err();
        assert!(
            errors
                .iter()
                .any(|e| e.path == "days[0].stays[0].checkOut"
                    && e.message.contains("check-in"))
        );
    }

    #[test]
    fn test_camel_case_conversion() {
        assert_eq!(camel_case("num_travelers"), "numTravelers");
        assert_eq!(camel_case("days"), "days");
        assert_eq!(camel_case("check_in"), "checkIn");
    }
}
