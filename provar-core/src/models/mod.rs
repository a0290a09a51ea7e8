//! Data model for per-residue variant annotation.

pub mod annotation;
pub mod ser;
pub mod variant;

pub use annotation::{EntityRecord, EntityTable, ProteinInfo, ResidueRecord, ResidueTable, Summary};
pub use variant::VariantRecord;
