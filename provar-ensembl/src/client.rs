//! Thin client over the Ensembl REST endpoints.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use provar_core::http::RestFetcher;
use provar_core::utils::URL_ERROR_LOG;

use super::consts::{DEFAULT_ENSEMBL_API, ENSEMBL_API_ENV};
use super::records::{OverlapTranscript, OverlapVariant, VariationDetails};

/// Which variation feature to query on the translation overlap endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantScope {
    /// Germline transcript variation (dbSNP et al.).
    Germline,
    /// Somatic variation (COSMIC).
    Somatic,
}

impl VariantScope {
    pub fn feature(&self) -> &'static str {
        match self {
            VariantScope::Germline => "transcript_variation",
            VariantScope::Somatic => "somatic_transcript_variation",
        }
    }
}

/// Builder for constructing an [`EnsemblClient`] with custom configuration.
#[derive(Default)]
pub struct EnsemblClientBuilder {
    ensembl_api: Option<String>,
    verbose: bool,
}

impl EnsemblClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Ensembl REST endpoint.
    pub fn with_ensembl_api(mut self, api: String) -> Self {
        self.ensembl_api = Some(api);
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Consumes the builder and creates an EnsemblClient.
    pub fn finish(self) -> EnsemblClient {
        let ensembl_api = self.ensembl_api.unwrap_or_else(get_default_ensembl_api);
        let fetcher = RestFetcher::new()
            .with_verbose(self.verbose)
            .with_error_log(PathBuf::from(URL_ERROR_LOG));

        EnsemblClient {
            ensembl_api,
            fetcher,
        }
    }
}

/// Blocking client for the Ensembl REST API.
pub struct EnsemblClient {
    pub ensembl_api: String,
    fetcher: RestFetcher,
}

impl EnsemblClient {
    pub fn builder() -> EnsemblClientBuilder {
        EnsemblClientBuilder::default()
    }

    /// Protein sequence of a translation, as plain text.
    pub fn protein_sequence(&self, protein: &str) -> Result<Option<String>> {
        let url = format!(
            "{}/sequence/id/{}?content-type=text/plain;type=protein",
            self.ensembl_api, protein
        );
        let body = self.fetcher.get_text(&url)?;
        Ok(body.map(|text| text.lines().next().unwrap_or("").trim().to_string()))
    }

    /// Parent gene of a transcript, resolved via the overlap endpoint.
    pub fn parent_gene(&self, transcript: &str) -> Result<Option<String>> {
        let url = format!(
            "{}/overlap/id/{}?feature=transcript;content-type=application/json",
            self.ensembl_api, transcript
        );
        let Some(body) = self.fetcher.get_text(&url)? else {
            return Ok(None);
        };
        let entries: Vec<OverlapTranscript> = serde_json::from_str(&body)
            .with_context(|| format!("Failed to parse overlap response for {}", transcript))?;
        Ok(entries
            .into_iter()
            .find(|entry| entry.id == transcript)
            .and_then(|entry| entry.parent))
    }

    /// Variation calls overlapping a translation, for one scope.
    pub fn translation_variants(
        &self,
        protein: &str,
        scope: VariantScope,
    ) -> Result<Vec<OverlapVariant>> {
        let url = format!(
            "{}/overlap/translation/{}?feature={};content-type=application/json",
            self.ensembl_api,
            protein,
            scope.feature()
        );
        let Some(body) = self.fetcher.get_text(&url)? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&body)
            .with_context(|| format!("Failed to parse translation overlap for {}", protein))
    }

    /// Essential per-variant details: genomic location, assembly and the
    /// first associated phenotype.
    pub fn variation_details(
        &self,
        species: &str,
        variant_id: &str,
    ) -> Result<Option<VariationDetails>> {
        let url = format!(
            "{}/variation/{}/{}?phenotypes=1;content-type=application/json",
            self.ensembl_api, species, variant_id
        );
        let Some(body) = self.fetcher.get_text(&url)? else {
            return Ok(None);
        };
        let details = serde_json::from_str(&body)
            .with_context(|| format!("Failed to parse variation details for {}", variant_id))?;
        Ok(Some(details))
    }
}

/// Ensembl endpoint from the environment, falling back to the public API.
pub fn get_default_ensembl_api() -> String {
    env::var(ENSEMBL_API_ENV).unwrap_or_else(|_| DEFAULT_ENSEMBL_API.to_string())
}
