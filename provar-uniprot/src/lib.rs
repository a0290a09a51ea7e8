//! UniProt record client.
//!
//! Fetches `.fasta` and `.txt` records for a UniProt accession, caches
//! them under a local data folder, and parses out the sequence, display
//! name, gene, species and Ensembl cross-reference triples.

pub mod client;
pub mod consts;
pub mod parsers;
