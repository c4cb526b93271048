//! Itinerary submission and transient session state.
//!
//! Submission is a single POST of the serialized trip record to the remote
//! `/itinerary` endpoint, which is expected to answer with a hosted PDF URL.
//! There is no retry and no cancellation; [`Session`] keeps the one piece of
//! transient UI state around it: the current trip, a boolean loading guard
//! preventing duplicate in-flight submissions, and the notification list.

use crate::errors::{Error, Result};
use crate::models::Trip;
use crate::validate::{FieldError, validate_trip};
use serde::Deserialize;
use tracing::{debug, error, info};

/// HTTP client for the remote itinerary service.
#[derive(Debug, Clone)]
pub struct SubmissionClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    pdf_url: Option<String>,
}

impl SubmissionClient {
    /// Creates a client for the service at `base_url` (scheme + authority,
    /// with or without a trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Submits the trip record once and returns the hosted PDF URL.
    ///
    /// # Errors
    /// * [`Error::SubmissionFailed`] for any non-success HTTP status
    /// * [`Error::MissingPdfUrl`] when the service reports success but the
    ///   response carries no usable URL
    /// * [`Error::Http`] for transport-level failures
    pub async fn submit(&self, trip: &Trip) -> Result<String> {
        let url = format!("{}/itinerary", self.base_url.trim_end_matches('/'));
        debug!(%url, "submitting itinerary");

        let response = self.http.post(&url).json(trip).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::SubmissionFailed {
                status: status.as_u16(),
            });
        }

        let body: SubmitResponse = response.json().await?;
        match body.pdf_url {
            Some(pdf_url) if !pdf_url.is_empty() => Ok(pdf_url),
            _ => Err(Error::MissingPdfUrl),
        }
    }
}

/// A user-visible notification produced by a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// The document was generated; carries the hosted URL
    Success {
        /// URL of the generated PDF
        pdf_url: String,
    },
    /// Submission failed; carries the underlying message
    Error {
        /// Human-readable failure description
        message: String,
    },
}

/// Outcome of a [`Session::submit`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Another submission is still outstanding; nothing was sent
    AlreadyInFlight,
    /// The record failed validation; nothing was sent
    Invalid(Vec<FieldError>),
    /// The service accepted the record and returned a PDF URL
    Accepted {
        /// URL of the generated PDF
        pdf_url: String,
    },
    /// The network call failed; an error notification was recorded
    Failed,
}

/// Transient per-session form state: the living trip record plus the
/// submission guard and notifications.
///
/// The trip is replaced wholesale by the mutation functions in
/// [`crate::core`]; nothing here mutates it in place and submission never
/// alters it.
#[derive(Debug, Clone)]
pub struct Session {
    trip: Trip,
    loading: bool,
    notifications: Vec<Notification>,
}

impl Session {
    /// Starts a session around an initial trip record.
    #[must_use]
    pub fn new(trip: Trip) -> Self {
        Self {
            trip,
            loading: false,
            notifications: Vec::new(),
        }
    }

    /// The current trip record.
    #[must_use]
    pub fn trip(&self) -> &Trip {
        &self.trip
    }

    /// Installs an updated trip record as the new current state. Called with
    /// the return value of the mutation functions.
    pub fn replace_trip(&mut self, trip: Trip) {
        self.trip = trip;
    }

    /// Whether a submission is currently outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Notifications recorded so far, oldest first.
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Validates and submits the current trip once.
    ///
    /// Duplicate calls while a submission is outstanding are ignored, and
    /// field-level validation errors block the network call entirely. Exactly
    /// one notification is recorded per completed attempt, and the loading
    /// guard is released on every exit path.
    pub async fn submit(&mut self, client: &SubmissionClient) -> SubmitOutcome {
        if self.loading {
            debug!("ignoring submit: a submission is already in flight");
            return SubmitOutcome::AlreadyInFlight;
        }
        if let Err(errors) = validate_trip(&self.trip) {
            debug!(count = errors.len(), "submit blocked by validation errors");
            return SubmitOutcome::Invalid(errors);
        }

        self.loading = true;
        let result = client.submit(&self.trip).await;
        self.loading = false;

        match result {
            Ok(pdf_url) => {
                info!(%pdf_url, "itinerary submitted");
                self.notifications.push(Notification::Success {
                    pdf_url: pdf_url.clone(),
                });
                SubmitOutcome::Accepted { pdf_url }
            }
            Err(e) => {
                error!(error = %e, "itinerary submission failed");
                self.notifications.push(Notification::Error {
                    message: e.to_string(),
                });
                SubmitOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::sample_trip;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    /// Serves exactly one canned HTTP response on a loopback port and returns
    /// the base URL to reach it.
    async fn spawn_stub(status_line: &'static str, body: &'static str) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            if let Ok((mut stream, _)) = listener.accept().await {
                let mut buf = [0u8; 8192];
                let _ = stream.read(&mut buf).await;
                let response = format!(
                    "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\n\
                     Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_submit_success_returns_pdf_url() {
        let base = spawn_stub("200 OK", r#"{"pdf_url": "https://example.com/out.pdf"}"#).await;
        let client = SubmissionClient::new(base);
        let mut session = Session::new(sample_trip());

        let outcome = session.submit(&client).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Accepted {
                pdf_url: "https://example.com/out.pdf".to_string()
            }
        );
        assert!(!session.is_loading());
        assert_eq!(
            session.notifications(),
            &[Notification::Success {
                pdf_url: "https://example.com/out.pdf".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn test_server_error_releases_guard_and_records_one_notification() {
        let base = spawn_stub("500 Internal Server Error", "{}").await;
        let client = SubmissionClient::new(base);
        let trip = sample_trip();
        let mut session = Session::new(trip.clone());

        let outcome = session.submit(&client).await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert!(!session.is_loading());
        assert_eq!(session.notifications().len(), 1);
        assert!(matches!(
            &session.notifications()[0],
            Notification::Error { message } if message.contains("500")
        ));
        // The in-memory record is untouched by a failed submission.
        assert_eq!(session.trip(), &trip);
    }

    #[tokio::test]
    async fn test_success_without_pdf_url_is_a_distinct_error() {
        let base = spawn_stub("200 OK", r#"{"status": "ok"}"#).await;
        let client = SubmissionClient::new(base);
        let mut session = Session::new(sample_trip());

        let outcome = session.submit(&client).await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert!(matches!(
            &session.notifications()[0],
            Notification::Error { message } if message.contains("no usable PDF URL")
        ));
    }

    #[tokio::test]
    async fn test_invalid_trip_blocks_the_network_call() {
        // Unroutable endpoint: reaching it would fail the test with a
        // transport error notification instead of the Invalid outcome.
        let client = SubmissionClient::new("http://127.0.0.1:9");
        let mut trip = sample_trip();
        trip.name = "A".to_string();
        let mut session = Session::new(trip);

        let outcome = session.submit(&client).await;

        let SubmitOutcome::Invalid(errors) = outcome else {
            panic!("expected validation to block submission");
        };
        assert_eq!(errors[0].path, "name");
        assert!(session.notifications().is_empty());
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn test_duplicate_submit_is_ignored_while_in_flight() {
        let client = SubmissionClient::new("http://127.0.0.1:9");
        let mut session = Session::new(sample_trip());
        session.loading = true;

        let outcome = session.submit(&client).await;

        assert_eq!(outcome, SubmitOutcome::AlreadyInFlight);
        assert!(session.notifications().is_empty());
    }
}
