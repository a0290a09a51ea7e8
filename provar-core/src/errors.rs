use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Retry budget exhausted after {attempts} attempts: {url}")]
    RetryBudgetExceeded { url: String, attempts: u32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum AnnotateError {
    #[error("Entity and residue tables differ in length: {entities} vs {residues}")]
    TableLengthMismatch { entities: usize, residues: usize },

    #[error("Invalid UniProt identifier: {0}")]
    InvalidIdentifier(String),
}
