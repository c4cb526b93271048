/// Static reference data for report derivation, loaded from reference.toml
pub mod reference;
