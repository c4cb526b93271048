//! Core business logic - framework-agnostic itinerary operations.
//!
//! Every function here is a pure transformation: it takes the current trip
//! record (plus indices or injected capabilities), and returns an updated
//! record. The presentation layer is responsible for persisting the returned
//! record as the new current state; no ambient mutable state exists.

/// Activity mutation rules
pub mod activity;
/// Rendering-engine boundary: typed layout node tree
pub mod layout;
/// Report derivation from a finalized trip record
pub mod report;
/// Stay mutation rules and date-picker option sets
pub mod stay;
/// Transfer mutation rules
pub mod transfer;
/// Day-count rules: adding and removing days
pub mod trip;
