//! `itinera` - structured travel itinerary building and report derivation
//!
//! This crate models multi-day travel itineraries (trips holding days of
//! activities, transfers and hotel stays), validates them against the form
//! schema, applies pure mutation rules with date-range constraints, and
//! derives a printable document as a typed layout-node tree for an external
//! rendering engine. A small submission client posts the finished record to
//! the remote PDF service.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,

    // Performance
    clippy::inefficient_to_string,
    clippy::needless_pass_by_value,

    // Correctness
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Style consistency
    clippy::enum_glob_use,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,       // Will add gradually
    clippy::cast_possible_wrap,       // Day counts are tiny
)]

/// Static reference data configuration
pub mod config;
/// Core business logic - mutation rules and report derivation
pub mod core;
/// Unified error types and result handling
pub mod errors;
/// Identifier generation for itinerary sub-entities
pub mod ids;
/// Itinerary data model
pub mod models;
/// Submission client and transient session state
pub mod submit;
/// Schema validation with field-path errors
pub mod validate;

#[cfg(test)]
pub mod test_utils;
