//! Wire records for the Ensembl REST endpoints, consumed read-only.

use serde::Deserialize;

/// One entry of `/overlap/translation/{protein}` with a variation feature.
///
/// `start`/`end` are 1-based residue positions on the translation;
/// `residues` is a `X/Y` pair of one-letter codes for simple missense
/// calls and is empty or longer for intronic/frameshift entries.
#[derive(Debug, Clone, Deserialize)]
pub struct OverlapVariant {
    pub id: String,
    #[serde(rename = "type")]
    pub consequence: String,
    pub start: i64,
    #[serde(default)]
    pub end: i64,
    #[serde(default)]
    pub residues: String,
    #[serde(default)]
    pub codons: String,
    #[serde(default)]
    pub allele: String,
    #[serde(default)]
    pub feature_type: String,
    #[serde(default)]
    pub translation: String,
    #[serde(default)]
    pub minor_allele_frequency: Option<f64>,
}

/// One entry of `/overlap/id/{transcript}?feature=transcript`.
#[derive(Debug, Clone, Deserialize)]
pub struct OverlapTranscript {
    pub id: String,
    #[serde(rename = "Parent", default)]
    pub parent: Option<String>,
}

/// Essential fields of `/variation/{species}/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VariationDetails {
    #[serde(default)]
    pub mappings: Vec<VariationMapping>,
    #[serde(default)]
    pub phenotypes: Vec<VariationPhenotype>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VariationMapping {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub assembly_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VariationPhenotype {
    #[serde(rename = "trait", default)]
    pub trait_name: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}
