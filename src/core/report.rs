//! Report derivation: projecting a trip record into a printable document.
//!
//! [`derive_report`] maps a finalized [`Trip`] plus the static
//! [`ReferenceData`] to a single-page layout tree ready for pagination by the
//! external engine. It is a pure projection: no mutation, no I/O, and the
//! same inputs always produce the same tree. The row-builder functions are
//! public so callers (and tests) can inspect derived content without walking
//! the tree.

use crate::config::reference::ReferenceData;
use crate::core::layout::{LayoutNode, TextStyle};
use crate::models::{Day, Stay, Trip};
use chrono::{Days, NaiveDate};

/// Formats a calendar date as zero-padded `DD/MM/YYYY`, the convention used
/// throughout the document.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Total trip length in calendar days, both endpoints inclusive, never less
/// than one. A departure on Jan 1 returning Jan 5 is a 5-day trip.
#[must_use]
pub fn total_days(trip: &Trip) -> i64 {
    ((trip.return_date - trip.departure_date).num_days() + 1).max(1)
}

/// Number of nights: one less than the total days.
#[must_use]
pub fn nights(trip: &Trip) -> i64 {
    total_days(trip) - 1
}

/// Nights for a single stay, never reported as less than one.
#[must_use]
pub fn stay_nights(stay: &Stay) -> i64 {
    (stay.check_out - stay.check_in).num_days().max(1)
}

/// Values for the trip info block, in display order: departure city, arrival
/// city, departure date, arrival date, traveler count.
#[must_use]
pub fn info_values(trip: &Trip) -> Vec<String> {
    vec![
        trip.departure_city.clone(),
        trip.arrival_city.clone(),
        format_date(trip.departure_date),
        format_date(trip.return_date),
        trip.travelers.to_string(),
    ]
}

/// One row per activity across all days, in day order then stored order:
/// city, activity title, placeholder type, placeholder duration. Type and
/// duration come from the reference data, not from the activity itself.
#[must_use]
pub fn activity_rows(trip: &Trip, reference: &ReferenceData) -> Vec<Vec<String>> {
    trip.days
        .iter()
        .flat_map(|day| &day.activities)
        .map(|activity| {
            vec![
                trip.arrival_city.clone(),
                activity.title.clone(),
                reference.activity_type.clone(),
                reference.activity_duration.clone(),
            ]
        })
        .collect()
}

/// One row per transfer across all days, in day order then in-day order:
/// formatted date, flight name, route sentence.
#[must_use]
pub fn flight_rows(trip: &Trip) -> Vec<Vec<String>> {
    trip.days
        .iter()
        .flat_map(|day| &day.transfers)
        .map(|transfer| {
            vec![
                format_date(transfer.date),
                transfer.flight_name.clone(),
                format!("From {} To {}.", transfer.from, transfer.to),
            ]
        })
        .collect()
}

/// One row per stay across all days: city, check-in, check-out, nights,
/// hotel name.
#[must_use]
pub fn hotel_rows(trip: &Trip) -> Vec<Vec<String>> {
    trip.days
        .iter()
        .flat_map(|day| &day.stays)
        .map(|stay| {
            vec![
                trip.arrival_city.clone(),
                format_date(stay.check_in),
                format_date(stay.check_out),
                stay_nights(stay).to_string(),
                stay.hotel.clone(),
            ]
        })
        .collect()
}

/// Derives the full document tree for a trip.
///
/// Sections appear in a fixed order: header, title block, trip info, one
/// block per day, flight summary, hotel bookings, the static reference
/// tables, payment plan, visa details, closing call-to-action and footer.
#[must_use]
pub fn derive_report(trip: &Trip, reference: &ReferenceData) -> LayoutNode {
    let mut children = vec![
        header(reference),
        title_block(trip),
        info_block(trip),
    ];

    children.extend(
        trip.days
            .iter()
            .enumerate()
            .map(|(index, day)| day_block(trip, day, index)),
    );

    children.push(flight_summary(trip, reference));
    children.push(hotel_bookings(trip, reference));
    children.push(titled_table(
        "Important",
        "Notes",
        &["Point", "Details"],
        reference.important_notes.clone(),
        None,
    ));
    children.push(titled_table(
        "Scope Of",
        "Service",
        &["Service", "Details"],
        reference.scope_of_service.clone(),
        None,
    ));
    children.push(titled_table(
        "Inclusion",
        "Summary",
        &["Category", "Count", "Details", "Status/Comments"],
        reference.inclusion_summary.clone(),
        Some(reference.transfer_policy_note.clone()),
    ));
    children.push(titled_table(
        "Activity",
        "Details",
        &["City", "Activity", "Type", "Time Required"],
        activity_rows(trip, reference),
        None,
    ));
    children.push(LayoutNode::section(
        24,
        vec![
            section_title("Terms And", "Conditions"),
            LayoutNode::text(reference.terms_note.clone()),
        ],
    ));
    children.push(payment_block(reference));
    children.push(visa_block(trip, reference));
    children.push(closing_block(reference));
    children.push(footer(reference));

    LayoutNode::Page { children }
}

/// Fixed page header carrying the company logo.
fn header(reference: &ReferenceData) -> LayoutNode {
    LayoutNode::fixed(vec![LayoutNode::Image {
        path: reference.company.logo_path.clone(),
    }])
}

/// Greeting, destination line and the days/nights summary.
fn title_block(trip: &Trip) -> LayoutNode {
    LayoutNode::group(
        0,
        vec![
            LayoutNode::styled(format!("Hi, {}!", trip.name), TextStyle::heading(18)),
            LayoutNode::styled(
                format!("{} Itinerary", trip.arrival_city),
                TextStyle::heading(16),
            ),
            LayoutNode::text(format!(
                "{} Days {} Nights",
                total_days(trip),
                nights(trip)
            )),
        ],
    )
}

/// Two-row info table: fixed headers over the trip values.
fn info_block(trip: &Trip) -> LayoutNode {
    LayoutNode::Table {
        headers: [
            "Departure",
            "Arrival",
            "Departure Date",
            "Arrival Date",
            "No. of Travelers",
        ]
        .map(ToString::to_string)
        .to_vec(),
        rows: vec![info_values(trip)],
        column_flex: Vec::new(),
    }
}

/// One unbreakable block per day: positional label, the calendar date for
/// that position, and the activity timeline in stored order.
fn day_block(trip: &Trip, day: &Day, index: usize) -> LayoutNode {
    let date = trip.departure_date + Days::new(index as u64);
    let mut children = vec![
        LayoutNode::styled(format!("Day {}", index + 1), TextStyle::heading(13)),
        LayoutNode::styled(format_date(date), TextStyle::bold()),
        LayoutNode::text(format!("Arrival In {}", trip.arrival_city)),
    ];

    for activity in &day.activities {
        let line = if activity.description.is_empty() {
            format!("\u{2022} {}", activity.title)
        } else {
            format!("\u{2022} {} - {}", activity.title, activity.description)
        };
        children.push(LayoutNode::Row {
            children: vec![
                LayoutNode::styled(activity.time.to_string(), TextStyle::bold()),
                LayoutNode::text(line),
            ],
        });
    }

    LayoutNode::group(16, children)
}

/// Flight summary: one bordered row per transfer plus the fixed baggage note.
fn flight_summary(trip: &Trip, reference: &ReferenceData) -> LayoutNode {
    let mut children = vec![section_title("Flight", "Summary")];
    for row in flight_rows(trip) {
        let mut cells = row.into_iter();
        let date = cells.next().unwrap_or_default();
        let flight = cells.next().unwrap_or_default();
        let route = cells.next().unwrap_or_default();
        children.push(LayoutNode::Row {
            children: vec![
                LayoutNode::styled(date, TextStyle::bold()),
                LayoutNode::styled(flight, TextStyle::bold()),
                LayoutNode::text(route),
            ],
        });
    }
    children.push(LayoutNode::text(reference.flight_note.clone()));

    LayoutNode::section(24, children)
}

/// Hotel bookings table, or a placeholder notice when no stays exist.
fn hotel_bookings(trip: &Trip, reference: &ReferenceData) -> LayoutNode {
    let rows = hotel_rows(trip);
    let mut children = vec![section_title("Hotel", "Bookings")];

    if rows.is_empty() {
        children.push(LayoutNode::text("No hotel bookings available."));
    } else {
        children.push(LayoutNode::Table {
            headers: ["City", "Check In", "Check Out", "Nights", "Hotel Name"]
                .map(ToString::to_string)
                .to_vec(),
            rows,
            column_flex: vec![1, 1, 1, 1, 2],
        });
        for note in &reference.hotel_notes {
            children.push(LayoutNode::text(note.clone()));
        }
    }

    LayoutNode::section(24, children)
}

/// Payment plan: total amount and TCS lines above the installment table.
fn payment_block(reference: &ReferenceData) -> LayoutNode {
    LayoutNode::section(
        24,
        vec![
            section_title("Payment", "Plan"),
            bordered_info("Total Amount", &reference.payment.total_amount),
            bordered_info("TCS", &reference.payment.tcs),
            LayoutNode::Table {
                headers: ["Installment", "Amount", "Due Date"]
                    .map(ToString::to_string)
                    .to_vec(),
                rows: reference.payment.installments.clone(),
                column_flex: Vec::new(),
            },
        ],
    )
}

/// Visa details: static type/validity plus the trip's departure date as the
/// processing date.
fn visa_block(trip: &Trip, reference: &ReferenceData) -> LayoutNode {
    LayoutNode::section(
        24,
        vec![
            section_title("Visa", "Details"),
            LayoutNode::Table {
                headers: ["Visa Type", "Validity", "Processing Date"]
                    .map(ToString::to_string)
                    .to_vec(),
                rows: vec![vec![
                    reference.visa.visa_type.clone(),
                    reference.visa.validity.clone(),
                    format_date(trip.departure_date),
                ]],
                column_flex: Vec::new(),
            },
        ],
    )
}

/// Tagline and call-to-action button.
fn closing_block(reference: &ReferenceData) -> LayoutNode {
    LayoutNode::group(
        32,
        vec![
            LayoutNode::styled(reference.company.tagline.clone(), TextStyle::heading(14)),
            LayoutNode::styled("Book Now", TextStyle::accent()),
        ],
    )
}

/// Fixed page footer with the company block.
fn footer(reference: &ReferenceData) -> LayoutNode {
    let company = &reference.company;
    LayoutNode::fixed(vec![LayoutNode::Row {
        children: vec![
            LayoutNode::group(
                0,
                vec![
                    LayoutNode::styled(company.name.clone(), TextStyle::bold()),
                    LayoutNode::text(company.address.clone()),
                ],
            ),
            LayoutNode::group(
                0,
                vec![
                    LayoutNode::styled("Contact", TextStyle::bold()),
                    LayoutNode::text(format!("Phone: {}", company.phone)),
                    LayoutNode::text(format!("Email ID: {}", company.email)),
                ],
            ),
            LayoutNode::Image {
                path: company.logo_path.clone(),
            },
        ],
    }])
}

/// Section heading split into a plain lead and an accent-colored tail.
fn section_title(lead: &str, accent: &str) -> LayoutNode {
    LayoutNode::Row {
        children: vec![
            LayoutNode::styled(lead, TextStyle::bold()),
            LayoutNode::styled(accent, TextStyle::accent()),
        ],
    }
}

fn bordered_info(label: &str, value: &str) -> LayoutNode {
    LayoutNode::Row {
        children: vec![
            LayoutNode::styled(label, TextStyle::bold()),
            LayoutNode::styled(value, TextStyle::bold()),
        ],
    }
}

/// A titled static table with an optional trailing note.
fn titled_table(
    lead: &str,
    accent: &str,
    headers: &[&str],
    rows: Vec<Vec<String>>,
    note: Option<String>,
) -> LayoutNode {
    let mut children = vec![
        section_title(lead, accent),
        LayoutNode::Table {
            headers: headers.iter().map(ToString::to_string).collect(),
            rows,
            column_flex: Vec::new(),
        },
    ];
    if let Some(note) = note {
        children.push(LayoutNode::text(note));
    }
    LayoutNode::section(24, children)
}
