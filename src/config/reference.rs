//! Static reference data consumed by report derivation.
//!
//! The generated document mixes trip-derived content with fixed reference
//! tables: hotel options, the default carrier, policy notes, the payment
//! plan, visa details and the company block. None of it is computed from
//! business logic; it is injected configuration so the derivation functions
//! stay free of magic constants. A `reference.toml` file can override any
//! part of it; absent keys fall back to the built-in defaults.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// All static content the report needs, independent of any particular trip.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReferenceData {
    /// Hotel options offered by the stay picker; the first entry is the
    /// default for new stays
    pub hotels: Vec<String>,
    /// Carrier name new transfers default to
    pub default_carrier: String,
    /// Placeholder activity type shown in the activity-details table
    pub activity_type: String,
    /// Placeholder duration shown in the activity-details table
    pub activity_duration: String,
    /// Note printed under the flight summary
    pub flight_note: String,
    /// Notes printed under the hotel-bookings table, one line each
    pub hotel_notes: Vec<String>,
    /// "Important Notes" table rows (point, details)
    pub important_notes: Vec<Vec<String>>,
    /// "Scope Of Service" table rows (service, details)
    pub scope_of_service: Vec<Vec<String>>,
    /// "Inclusion Summary" table rows (category, count, details, status)
    pub inclusion_summary: Vec<Vec<String>>,
    /// Transfer policy note printed under the inclusion summary
    pub transfer_policy_note: String,
    /// Terms-and-conditions pointer text
    pub terms_note: String,
    /// Payment plan block
    pub payment: PaymentPlan,
    /// Visa details block
    pub visa: VisaDetails,
    /// Company identity for header and footer
    pub company: CompanyInfo,
}

/// Static payment plan content.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PaymentPlan {
    /// Formatted total amount line
    pub total_amount: String,
    /// TCS status line
    pub tcs: String,
    /// Installment rows (name, amount, due date)
    pub installments: Vec<Vec<String>>,
}

/// Static visa information; the processing date comes from the trip.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VisaDetails {
    /// Visa category label
    pub visa_type: String,
    /// Validity period label
    pub validity: String,
}

/// Company identity printed in the document header and footer.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CompanyInfo {
    /// Legal company name
    pub name: String,
    /// Registered office address
    pub address: String,
    /// Contact phone number
    pub phone: String,
    /// Contact email address
    pub email: String,
    /// Path to the logo image, resolved by the rendering engine
    pub logo_path: String,
    /// Closing tagline above the call-to-action
    pub tagline: String,
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self {
            hotels: vec![
                "Hotel Taj".to_string(),
                "Hotel Oberoi".to_string(),
                "Hotel Leela".to_string(),
            ],
            default_carrier: "Indigo".to_string(),
            activity_type: "Sightseeing".to_string(),
            activity_duration: "2-3 hours".to_string(),
            flight_note: "Note: All Flights Include Meals, Seat Choice (Excluding XL), And \
                          20kg/25kg Checked Baggage."
                .to_string(),
            hotel_notes: vec![
                "1. All Hotels Are Tentative And Can Be Replaced With Similar.".to_string(),
                "2. Breakfast Included For All Hotel Stays".to_string(),
                "3. All Hotels Will Be 4* And Above Category".to_string(),
                "4. A maximum occupancy of 2 people/room is allowed in most hotels.".to_string(),
            ],
            important_notes: rows(&[
                &[
                    "Airlines Standard Policy",
                    "In Case Of Visa Rejection, Visa Fees Or Any Other Non Cancellable Component \
                     Cannot Be Reimbursed At Any Cost.",
                ],
                &[
                    "Flight/Hotel Cancellation",
                    "In Case Of Flight Or Hotel Cancellation, The Cancellation Charges Will Be \
                     Applicable As Per The Airlines/Hotel Policy.",
                ],
                &[
                    "Travel Insurance",
                    "Travel Insurance Is Mandatory For All International Trips.",
                ],
                &[
                    "Hotel Check-In/Check-Out",
                    "Hotel Check-In Is At 2 PM And Check-Out Is At 12 PM.",
                ],
                &[
                    "Visa Rejection",
                    "In Case Of Visa Rejection, The Visa Fees Or Any Other Non-Cancellable \
                     Component Cannot Be Reimbursed At Any Cost.",
                ],
            ]),
            scope_of_service: rows(&[
                &[
                    "Flight Tickets & Hotel Vouchers",
                    "Delivered 3 Days Post Full Payment",
                ],
                &["Web Check-In", "Boarding Pass Delivery Via Email/WhatsApp"],
                &["Support", "Chat Support - Response Within 4 Hours"],
                &["Cancellation Support", "Provided"],
                &["Trip Support", "Response Time: 5 Minutes"],
            ]),
            inclusion_summary: rows(&[
                &["Flight", "2", "All Flights Mentioned", "Awaiting Confirmation"],
                &[
                    "Tourist Tax",
                    "2",
                    "Hotel Taj, Hotel Oberoi, Hotel Leela",
                    "Confirmed",
                ],
                &["Hotel", "2", "Airport To Hotel - Hotel To Attractions", "Included"],
            ]),
            transfer_policy_note: "Transfer Policy (Refundable Upon Claim): If Any Transfer Is \
                                   Delayed Beyond 15 Minutes, Customers May Book An App-Based Or \
                                   Radio Taxi And Claim A Refund For That Specific Leg."
                .to_string(),
            terms_note: "View all terms and conditions".to_string(),
            payment: PaymentPlan::default(),
            visa: VisaDetails::default(),
            company: CompanyInfo::default(),
        }
    }
}

impl Default for PaymentPlan {
    fn default() -> Self {
        Self {
            total_amount: "9,00,000 For 3 Pax (Inclusive Of GST)".to_string(),
            tcs: "Not Collected".to_string(),
            installments: rows(&[
                &["Installment 1", "3,50,000", "Initial Payment"],
                &["Installment 2", "3,50,000", "Post Visa Approval"],
                &["Installment 3", "Remaining", "20 Days Before Departure"],
            ]),
        }
    }
}

impl Default for VisaDetails {
    fn default() -> Self {
        Self {
            visa_type: "Tourist Visa".to_string(),
            validity: "30 Days".to_string(),
        }
    }
}

impl Default for CompanyInfo {
    fn default() -> Self {
        Self {
            name: "Vigovia Tech Pvt. Ltd".to_string(),
            address: "Registered Office: Hd-109 Cinnabar Hills, Links Business Park, Karnataka, \
                      India."
                .to_string(),
            phone: "+91-9999999999".to_string(),
            email: "contact@vigovia.com".to_string(),
            logo_path: "vigovia.png".to_string(),
            tagline: "PLAN.PACK.GO!".to_string(),
        }
    }
}

fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
    data.iter()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect()
}

/// Loads reference data from a TOML file.
///
/// Any key absent from the file keeps its built-in default.
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_reference<P: AsRef<Path>>(path: P) -> Result<ReferenceData> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read reference file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse reference TOML: {e}"),
    })
}

/// Loads reference data from the default location (./reference.toml),
/// falling back to the built-in defaults when the file does not exist.
///
/// # Errors
/// Returns an error only when the file exists but cannot be parsed.
pub fn load_default_reference() -> Result<ReferenceData> {
    let path = Path::new("reference.toml");
    if path.exists() {
        load_reference(path)
    } else {
        info!("No reference.toml found, using built-in reference data");
        Ok(ReferenceData::default())
    }
}
