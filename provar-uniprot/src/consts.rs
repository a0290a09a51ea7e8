//! Constants for UniProt fetching and local caching.

/// Environment variable overriding the local data folder.
pub const DATA_FOLDER_ENV: &str = "PROVAR_DATA";

/// Environment variable overriding the UniProt REST endpoint.
pub const UNIPROT_API_ENV: &str = "PROVAR_UNIPROT_URL";

/// Default data folder, resolved against the working directory.
pub const DEFAULT_DATA_FOLDER: &str = "Data";

/// Default UniProt REST endpoint.
pub const DEFAULT_UNIPROT_API: &str = "https://rest.uniprot.org/uniprotkb";

/// Extension of the cached FASTA record.
pub const FASTA_EXT: &str = "fasta";

/// Extension of the cached flat-text record.
pub const FLAT_EXT: &str = "txt";
