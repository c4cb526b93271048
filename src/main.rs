//! Binary harness wiring the library together: reads a trip record from a
//! JSON file, validates it, emits the derived layout tree on stdout for the
//! downstream rendering engine, and optionally submits the record when
//! `ITINERA_ENDPOINT` is set.

use dotenvy::dotenv;
use itinera::config::reference;
use itinera::core::report::derive_report;
use itinera::errors::{Error, Result};
use itinera::models::Trip;
use itinera::submit::{Session, SubmissionClient, SubmitOutcome};
use itinera::validate::validate_trip;
use std::env;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize tracing as early as possible
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load .env if present; env vars can also be set externally
    dotenv().ok();

    let reference = reference::load_default_reference()?;

    let path = env::args().nth(1).ok_or_else(|| Error::Config {
        message: "usage: itinera <trip.json>".to_string(),
    })?;
    let raw = std::fs::read_to_string(&path)?;
    let trip: Trip = serde_json::from_str(&raw)?;
    info!(%path, days = trip.days.len(), "loaded trip record");

    if let Err(errors) = validate_trip(&trip) {
        for field_error in &errors {
            error!(path = %field_error.path, message = %field_error.message, "validation error");
        }
        return Err(Error::Validation { errors });
    }

    let report = derive_report(&trip, &reference);
    println!("{}", serde_json::to_string_pretty(&report)?);

    // Rendering above is local; submission to the remote PDF service is a
    // separate, explicitly opt-in step.
    if let Ok(endpoint) = env::var("ITINERA_ENDPOINT") {
        let client = SubmissionClient::new(endpoint);
        let mut session = Session::new(trip);
        match session.submit(&client).await {
            SubmitOutcome::Accepted { pdf_url } => info!(%pdf_url, "PDF generated"),
            SubmitOutcome::Failed => error!("submission failed, see notifications"),
            SubmitOutcome::Invalid(_) | SubmitOutcome::AlreadyInFlight => {}
        }
    }

    Ok(())
}
