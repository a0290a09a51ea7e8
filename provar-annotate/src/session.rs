//! Per-identifier annotation session.
//!
//! The session is a thin orchestrator over the UniProt and Ensembl
//! clients and the pure table builders: every stage takes the previous
//! stage's output explicitly and its result is memoized per identifier,
//! so accessors are idempotent and may be called in any order. When the
//! raw UniProt files could not be loaded, every derived stage yields
//! empty results instead of failing.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use serde::Serialize;

use provar_core::models::ser::map_or_empty;
use provar_core::models::{EntityTable, ProteinInfo, ResidueTable, Summary, VariantRecord};
use provar_ensembl::client::{EnsemblClient, VariantScope};
use provar_ensembl::consts::is_supported_species;
use provar_ensembl::variants::fetch_variants;
use provar_uniprot::client::{UniProtClient, UniProtRecord};
use provar_uniprot::parsers::protein_info;

use super::assemble::{build_entities, build_residues, summarize};

/// Full annotation document for one identifier, in output key order.
/// The entity table is internal to summary assembly and not emitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    #[serde(rename = "INFORMATION", serialize_with = "map_or_empty")]
    pub information: Option<ProteinInfo>,
    #[serde(rename = "VARIANTS")]
    pub variants: Vec<VariantRecord>,
    #[serde(rename = "MUTATIONS")]
    pub mutations: Vec<VariantRecord>,
    #[serde(rename = "RESIDUES")]
    pub residues: ResidueTable,
    #[serde(rename = "SUMMARY", serialize_with = "map_or_empty")]
    pub summary: Option<Summary>,
}

/// Memoized stage outputs for one identifier.
#[derive(Default)]
struct ProteinState {
    record: Option<UniProtRecord>,
    info: Option<ProteinInfo>,
    variants: Option<Vec<VariantRecord>>,
    mutations: Option<Vec<VariantRecord>>,
    entities: Option<EntityTable>,
    residues: Option<ResidueTable>,
    summary: Option<Summary>,
}

/// Builder for constructing a [`Session`] with custom configuration.
#[derive(Default)]
pub struct SessionBuilder {
    data_folder: Option<PathBuf>,
    uniprot_api: Option<String>,
    ensembl_api: Option<String>,
    verbose: bool,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the local folder where UniProt records are cached.
    pub fn with_data_folder(mut self, path: PathBuf) -> Self {
        self.data_folder = Some(path);
        self
    }

    pub fn with_uniprot_api(mut self, api: String) -> Self {
        self.uniprot_api = Some(api);
        self
    }

    pub fn with_ensembl_api(mut self, api: String) -> Self {
        self.ensembl_api = Some(api);
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Consumes the builder and creates a Session.
    pub fn finish(self) -> Result<Session> {
        let mut uniprot = UniProtClient::builder().with_verbose(self.verbose);
        if let Some(folder) = self.data_folder {
            uniprot = uniprot.with_data_folder(folder);
        }
        if let Some(api) = self.uniprot_api {
            uniprot = uniprot.with_uniprot_api(api);
        }

        let mut ensembl = EnsemblClient::builder().with_verbose(self.verbose);
        if let Some(api) = self.ensembl_api {
            ensembl = ensembl.with_ensembl_api(api);
        }

        Ok(Session {
            uniprot: uniprot.finish()?,
            ensembl: ensembl.finish(),
            verbose: self.verbose,
            cache: HashMap::new(),
        })
    }
}

/// Stateful façade caching fetched and derived results per identifier.
pub struct Session {
    uniprot: UniProtClient,
    ensembl: EnsemblClient,
    verbose: bool,
    cache: HashMap<String, ProteinState>,
}

impl Session {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::default()
    }

    fn ensure_record(&mut self, identifier: &str) -> Result<()> {
        let loaded = self
            .cache
            .get(identifier)
            .map(|state| state.record.is_some())
            .unwrap_or(false);
        if loaded {
            return Ok(());
        }
        let record = self.uniprot.load(identifier)?;
        self.cache.entry(identifier.to_string()).or_default().record = Some(record);
        Ok(())
    }

    fn state_mut(&mut self, identifier: &str) -> Result<&mut ProteinState> {
        self.cache
            .get_mut(identifier)
            .ok_or_else(|| anyhow!("No session state for {}", identifier))
    }

    /// The INFORMATION block, or `None` when either raw file is
    /// unavailable.
    pub fn information(&mut self, identifier: &str) -> Result<Option<ProteinInfo>> {
        self.ensure_record(identifier)?;
        let verbose = self.verbose;
        let state = self.state_mut(identifier)?;
        if state.info.is_none() {
            if verbose {
                println!("Getting information...");
            }
            if let Some(record) = &state.record {
                state.info = protein_info(record);
            }
        }
        Ok(state.info.clone())
    }

    /// Germline variant list; empty when the record is unavailable or
    /// the species has no Ensembl variation data.
    pub fn variants(&mut self, identifier: &str) -> Result<Vec<VariantRecord>> {
        if self.verbose {
            println!("Getting variants (Ensembl)...");
        }
        self.fetch_scope(identifier, VariantScope::Germline)
    }

    /// Somatic mutation list; empty under the same conditions.
    pub fn mutations(&mut self, identifier: &str) -> Result<Vec<VariantRecord>> {
        if self.verbose {
            println!("Getting mutations (Ensembl)...");
        }
        self.fetch_scope(identifier, VariantScope::Somatic)
    }

    fn fetch_scope(
        &mut self,
        identifier: &str,
        scope: VariantScope,
    ) -> Result<Vec<VariantRecord>> {
        let info = self.information(identifier)?;

        if let Some(state) = self.cache.get(identifier) {
            let cached = match scope {
                VariantScope::Germline => &state.variants,
                VariantScope::Somatic => &state.mutations,
            };
            if let Some(list) = cached {
                return Ok(list.clone());
            }
        }

        let fetched = match &info {
            Some(info) if is_supported_species(&info.species) => {
                fetch_variants(&self.ensembl, info, identifier, scope, self.verbose)?
            }
            _ => Vec::new(),
        };

        let state = self.state_mut(identifier)?;
        match scope {
            VariantScope::Germline => state.variants = Some(fetched.clone()),
            VariantScope::Somatic => state.mutations = Some(fetched.clone()),
        }
        Ok(fetched)
    }

    /// Entity table; empty when the record is unavailable.
    pub fn entities(&mut self, identifier: &str) -> Result<EntityTable> {
        if let Some(table) = self.cache.get(identifier).and_then(|s| s.entities.clone()) {
            return Ok(table);
        }
        if self.verbose {
            println!("Getting entities...");
        }
        let info = self.information(identifier)?;
        let variants = self.variants(identifier)?;
        let mutations = self.mutations(identifier)?;

        let table = match &info {
            Some(info) => build_entities(&info.sequence, &variants, &mutations),
            None => EntityTable::default(),
        };
        self.state_mut(identifier)?.entities = Some(table.clone());
        Ok(table)
    }

    /// Residue table; empty when the record is unavailable.
    pub fn residues(&mut self, identifier: &str) -> Result<ResidueTable> {
        if let Some(table) = self.cache.get(identifier).and_then(|s| s.residues.clone()) {
            return Ok(table);
        }
        if self.verbose {
            println!("Getting residues...");
        }
        let info = self.information(identifier)?;
        let variants = self.variants(identifier)?;
        let mutations = self.mutations(identifier)?;

        let table = match &info {
            Some(info) => build_residues(&info.sequence, identifier, &variants, &mutations),
            None => ResidueTable::default(),
        };
        self.state_mut(identifier)?.residues = Some(table.clone());
        Ok(table)
    }

    /// Summary tracks over the entity and residue tables.
    pub fn summary(&mut self, identifier: &str) -> Result<Summary> {
        if let Some(summary) = self.cache.get(identifier).and_then(|s| s.summary.clone()) {
            return Ok(summary);
        }
        if self.verbose {
            println!("Getting summary...");
        }
        let entities = self.entities(identifier)?;
        let residues = self.residues(identifier)?;

        let summary = summarize(&entities, &residues)?;
        self.state_mut(identifier)?.summary = Some(summary.clone());
        Ok(summary)
    }

    /// Runs the whole pipeline for one identifier and returns the full
    /// document.
    pub fn annotate(&mut self, identifier: &str) -> Result<Annotation> {
        let information = self.information(identifier)?;
        let variants = self.variants(identifier)?;
        let mutations = self.mutations(identifier)?;
        let residues = self.residues(identifier)?;
        let summary = self.summary(identifier)?;

        let summary = information.as_ref().map(|_| summary);
        Ok(Annotation {
            information,
            variants,
            mutations,
            residues,
            summary,
        })
    }
}
