//! Ensembl REST client.
//!
//! Queries the sequence, overlap and variation endpoints, cross-checks
//! residue identity against the UniProt sequence, and normalizes the
//! heterogeneous JSON into flat [`provar_core::models::VariantRecord`]s.

pub mod client;
pub mod consts;
pub mod records;
pub mod variants;
