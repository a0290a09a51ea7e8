//! Caching UniProt client.

use std::env;
use std::fs::{create_dir_all, read_to_string, write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use provar_core::errors::AnnotateError;
use provar_core::http::RestFetcher;
use provar_core::utils::{UNIPROT_ERROR_LOG, URL_ERROR_LOG, append_log, current_time};

use super::consts::{
    DATA_FOLDER_ENV, DEFAULT_DATA_FOLDER, DEFAULT_UNIPROT_API, FASTA_EXT, FLAT_EXT, UNIPROT_API_ENV,
};

/// The two raw files backing one accession. Either may be unavailable;
/// derived stages then yield empty results instead of failing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UniProtRecord {
    pub identifier: String,
    pub fasta: Option<Vec<String>>,
    pub flat: Option<Vec<String>>,
}

impl UniProtRecord {
    /// True when both raw files loaded.
    pub fn is_complete(&self) -> bool {
        self.fasta.is_some() && self.flat.is_some()
    }
}

/// Builder for constructing a [`UniProtClient`] with custom configuration.
#[derive(Default)]
pub struct UniProtClientBuilder {
    data_folder: Option<PathBuf>,
    uniprot_api: Option<String>,
    verbose: bool,
}

impl UniProtClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the local folder where `.fasta`/`.txt` records are cached.
    pub fn with_data_folder(mut self, path: PathBuf) -> Self {
        self.data_folder = Some(path);
        self
    }

    /// Sets the UniProt REST endpoint.
    pub fn with_uniprot_api(mut self, api: String) -> Self {
        self.uniprot_api = Some(api);
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Consumes the builder and creates a UniProtClient.
    pub fn finish(self) -> Result<UniProtClient> {
        let data_folder = self.data_folder.unwrap_or_else(get_default_data_folder);
        create_dir_all(&data_folder).with_context(|| {
            format!("Failed to create data folder {}", data_folder.display())
        })?;

        let uniprot_api = self.uniprot_api.unwrap_or_else(get_default_uniprot_api);
        let fetcher = RestFetcher::new()
            .with_verbose(self.verbose)
            .with_error_log(PathBuf::from(URL_ERROR_LOG));

        Ok(UniProtClient {
            data_folder,
            uniprot_api,
            fetcher,
            verbose: self.verbose,
        })
    }
}

/// Client for loading UniProt records from the local cache or the REST
/// endpoint.
pub struct UniProtClient {
    pub data_folder: PathBuf,
    pub uniprot_api: String,
    fetcher: RestFetcher,
    verbose: bool,
}

impl UniProtClient {
    pub fn builder() -> UniProtClientBuilder {
        UniProtClientBuilder::default()
    }

    /// Loads both raw files for one accession, fetching and caching
    /// whatever is not on disk yet. A file that cannot be downloaded is
    /// logged and left as `None`.
    pub fn load(&self, identifier: &str) -> Result<UniProtRecord> {
        if !is_valid_identifier(identifier) {
            return Err(AnnotateError::InvalidIdentifier(identifier.to_string()).into());
        }

        if self.verbose {
            println!("Loading UniProt ID {}...", identifier);
        }

        let fasta = self.load_file(identifier, FASTA_EXT)?;
        let flat = self.load_file(identifier, FLAT_EXT)?;

        Ok(UniProtRecord {
            identifier: identifier.to_string(),
            fasta,
            flat,
        })
    }

    fn load_file(&self, identifier: &str, extension: &str) -> Result<Option<Vec<String>>> {
        let path = self.record_path(identifier, extension);
        if path.exists() {
            if self.verbose {
                println!("Loading cached record from {}", path.display());
            }
            let text = read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            return Ok(Some(text.lines().map(str::to_string).collect()));
        }

        let url = format!("{}/{}.{}", self.uniprot_api, identifier, extension);
        let lines = self.fetcher.get_lines(&url)?;

        match lines {
            Some(lines) if !lines.is_empty() => {
                write(&path, format!("{}\n", lines.join("\n")))
                    .with_context(|| format!("Failed to cache {}", path.display()))?;
                Ok(Some(lines))
            }
            _ => {
                let message = format!(
                    "{}\tWarning: {}.{} not available for download.",
                    current_time(),
                    identifier,
                    extension
                );
                println!("Warning: {}.{} not available for download.", identifier, extension);
                let _ = append_log(Path::new(UNIPROT_ERROR_LOG), &message);
                Ok(None)
            }
        }
    }

    /// Path of the cached record file for an accession.
    pub fn record_path(&self, identifier: &str, extension: &str) -> PathBuf {
        self.data_folder.join(format!("{}.{}", identifier, extension))
    }
}

/// UniProt accessions are 6 or 10 alphanumeric characters.
pub fn is_valid_identifier(identifier: &str) -> bool {
    (identifier.len() == 6 || identifier.len() == 10)
        && identifier.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Data folder from the environment, falling back to `Data` under the
/// working directory.
pub fn get_default_data_folder() -> PathBuf {
    match env::var(DATA_FOLDER_ENV) {
        Ok(value) => PathBuf::from(value),
        Err(_) => PathBuf::from(DEFAULT_DATA_FOLDER),
    }
}

/// UniProt endpoint from the environment, falling back to the public API.
pub fn get_default_uniprot_api() -> String {
    env::var(UNIPROT_API_ENV).unwrap_or_else(|_| DEFAULT_UNIPROT_API.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn accepts_six_and_ten_character_accessions() {
        assert!(is_valid_identifier("P00439"));
        assert!(is_valid_identifier("A0A024R161"));
        assert!(!is_valid_identifier("P0043"));
        assert!(!is_valid_identifier("P00-39"));
    }

    #[test]
    fn rejects_invalid_identifier() {
        let dir = tempfile::tempdir().unwrap();
        let client = UniProtClient::builder()
            .with_data_folder(dir.path().to_path_buf())
            .finish()
            .unwrap();

        assert!(client.load("bogus").is_err());
    }

    #[test]
    fn loads_cached_records_without_network() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("TEST01.fasta"),
            ">sp|TEST01|TST_HUMAN Test protein OS=Homo sapiens GN=TST PE=1 SV=1\nMAGT\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("TEST01.txt"),
            "DR   Ensembl; ENST00000000001; ENSP00000000001; ENSG00000000001.\n",
        )
        .unwrap();

        let client = UniProtClient::builder()
            .with_data_folder(dir.path().to_path_buf())
            .finish()
            .unwrap();
        let record = client.load("TEST01").unwrap();

        assert!(record.is_complete());
        assert_eq!(record.fasta.as_ref().unwrap().len(), 2);
        assert_eq!(record.flat.as_ref().unwrap().len(), 1);
    }
}
