//! Flat variant record assembled from the Ensembl overlap and variation
//! endpoints.

use serde::Serialize;

use super::ser::{f64_or_dash, site_as_string, str_or_dash};

/// One protein-level variant call, normalized from the Ensembl REST JSON.
///
/// Germline records come from the `transcript_variation` feature and carry
/// dbSNP (`rs...`) sources; somatic records come from
/// `somatic_transcript_variation` and carry COSMIC (`COSM...`) sources.
/// The record shape is identical for both. Records are deduplicated by
/// full equality within one fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct VariantRecord {
    /// Notation such as `p.G350V`.
    pub variation: String,
    /// 1-based residue position within the protein sequence.
    #[serde(serialize_with = "site_as_string")]
    pub site: usize,
    /// Reference residue, three-letter code.
    pub res1: String,
    /// Variant residue, three-letter code.
    pub res2: String,
    pub res1_prop: Vec<String>,
    pub res2_prop: Vec<String>,
    /// dbSNP or COSMIC identifier.
    pub source: String,
    pub ensembl_gene: String,
    pub ensembl_transcript: String,
    pub ensembl_protein: String,
    /// Consequence type with underscores replaced by spaces.
    #[serde(rename = "TYPE")]
    pub consequence: String,
    pub feature_type: String,
    pub codons: String,
    pub allele: String,
    #[serde(serialize_with = "f64_or_dash")]
    pub allele_frequency: Option<f64>,
    #[serde(serialize_with = "str_or_dash")]
    pub location: Option<String>,
    #[serde(serialize_with = "str_or_dash")]
    pub chromosome: Option<String>,
    #[serde(rename = "TRAIT", serialize_with = "str_or_dash")]
    pub trait_name: Option<String>,
    #[serde(serialize_with = "str_or_dash")]
    pub trait_db: Option<String>,
}

impl VariantRecord {
    /// The `{SOURCE}:{VARIATION}` key used for per-variant residue columns.
    pub fn column_key(&self) -> String {
        format!("{}:{}", self.source, self.variation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn record() -> VariantRecord {
        VariantRecord {
            variation: "p.G350V".to_string(),
            site: 350,
            res1: "Gly".to_string(),
            res2: "Val".to_string(),
            res1_prop: vec!["hydrophobic".into(), "small".into(), "tiny".into()],
            res2_prop: vec!["hydrophobic".into(), "aliphatic".into(), "small".into()],
            source: "COSM48634".to_string(),
            ensembl_gene: "ENSG00000171759".to_string(),
            ensembl_transcript: "ENST00000553106".to_string(),
            ensembl_protein: "ENSP00000448059".to_string(),
            consequence: "missense variant".to_string(),
            feature_type: "somatic_transcript_variation".to_string(),
            codons: "gGg/gTg".to_string(),
            allele: "G/T".to_string(),
            allele_frequency: None,
            location: None,
            chromosome: None,
            trait_name: None,
            trait_db: None,
        }
    }

    #[test]
    fn serializes_with_uppercase_keys_and_sentinels() {
        let value = serde_json::to_value(record()).unwrap();

        assert_eq!(value["VARIATION"], json!("p.G350V"));
        assert_eq!(value["SITE"], json!("350"));
        assert_eq!(value["TYPE"], json!("missense variant"));
        assert_eq!(value["ALLELE_FREQUENCY"], json!("-"));
        assert_eq!(value["TRAIT"], json!("-"));
        assert_eq!(value["TRAIT_DB"], json!("-"));
        assert_eq!(value["CHROMOSOME"], json!("-"));
    }

    #[test]
    fn present_frequency_stays_numeric() {
        let mut rec = record();
        rec.allele_frequency = Some(0.0025);
        let value = serde_json::to_value(rec).unwrap();
        assert_eq!(value["ALLELE_FREQUENCY"], json!(0.0025));
    }

    #[test]
    fn column_key_joins_source_and_variation() {
        assert_eq!(record().column_key(), "COSM48634:p.G350V");
    }
}
