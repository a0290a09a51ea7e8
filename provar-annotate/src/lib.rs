//! Per-residue annotation assembly and the session orchestrator.
//!
//! [`assemble`] holds the pure table builders: entities (which sources
//! touch each position), residues (base columns plus per-variant
//! columns) and the alignment-style summary. [`session`] sequences the
//! UniProt and Ensembl clients through those builders and memoizes every
//! stage per identifier.

pub mod assemble;
pub mod session;

pub use session::{Annotation, Session, SessionBuilder};
