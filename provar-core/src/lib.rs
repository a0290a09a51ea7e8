//! Core library for provar.
//!
//! Holds the shared data model (variant, entity, residue and summary
//! records), the amino-acid alphabet and property tables, the REST fetch
//! helper with bounded retry, and the error-log utilities used by the
//! client crates.

pub mod alphabet;
pub mod errors;
pub mod http;
pub mod models;
pub mod utils;
