//! Per-residue tables and the summary tracks.
//!
//! Tables are ordered vectors of integer-keyed records; the site-string
//! keys of the JSON output are produced at serialization time, in table
//! order, so position 10 never sorts before position 2.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// Parsed UniProt metadata plus the Ensembl cross-reference ID lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ProteinInfo {
    pub name: String,
    pub sequence: String,
    pub gene: String,
    pub species: String,
    pub ensembl_gene: Vec<String>,
    pub ensembl_transcript: Vec<String>,
    pub ensembl_protein: Vec<String>,
}

/// Variant and mutation sources observed at one residue position.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct EntityRecord {
    #[serde(skip)]
    pub site: usize,
    pub variants: Vec<String>,
    pub mutations: Vec<String>,
}

/// One entity record per residue position, ascending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityTable(pub Vec<EntityRecord>);

impl EntityTable {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, site: usize) -> Option<&EntityRecord> {
        self.0.iter().find(|record| record.site == site)
    }
}

impl Serialize for EntityTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for record in &self.0 {
            map.serialize_entry(&record.site.to_string(), record)?;
        }
        map.end()
    }
}

/// Base residue columns plus the per-variant columns present at this site.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidueRecord {
    pub site: usize,
    pub residue: char,
    pub accession: String,
    /// `{SOURCE}:{VARIATION}` keys recorded at this site, each valued with
    /// the sequence letter observed here.
    pub variant_columns: Vec<(String, char)>,
}

impl Serialize for ResidueRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3 + self.variant_columns.len()))?;
        map.serialize_entry("UNIPROT_ID", &self.site.to_string())?;
        map.serialize_entry("UNIPROT_NAME", &self.residue.to_string())?;
        map.serialize_entry("UNIPROT_ACC", &self.accession)?;
        for (key, letter) in &self.variant_columns {
            map.serialize_entry(key, &letter.to_string())?;
        }
        map.end()
    }
}

/// One residue record per position, ascending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResidueTable(pub Vec<ResidueRecord>);

impl ResidueTable {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for ResidueTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for record in &self.0 {
            map.serialize_entry(&record.site.to_string(), record)?;
        }
        map.end()
    }
}

/// Alignment-style view: three strings with one character per position.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    /// Residue letters, concatenated.
    #[serde(rename = "UNIPROT_NAME")]
    pub residues: String,
    /// `V` where at least one variant was observed, `-` elsewhere.
    #[serde(rename = "VARIANTS")]
    pub variants: String,
    /// `M` where at least one mutation was observed, `-` elsewhere.
    #[serde(rename = "MUTATIONS")]
    pub mutations: String,
}
