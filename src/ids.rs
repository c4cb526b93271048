//! Identifier generation for itinerary sub-entities.
//!
//! New activities, transfers and stays each receive an opaque unique id at
//! creation. The generator is an injected capability so the mutation
//! functions stay deterministic under test; any collision-resistant strategy
//! satisfies the contract.

use uuid::Uuid;

/// A source of opaque, globally-unique identifier tokens.
pub trait IdGenerator {
    /// Produces the next identifier.
    fn generate(&self) -> String;
}

/// Default generator backed by random (v4) UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
