//! Variant retrieval and normalization.
//!
//! Walks the (transcript, protein) pairs of one UniProt record, pulls the
//! overlap calls for the requested scope, reshapes each usable entry into
//! a flat [`VariantRecord`], enriches it from the variation endpoint, and
//! cross-checks the reference residue against the UniProt sequence.

use std::path::Path;

use anyhow::Result;

use provar_core::alphabet;
use provar_core::models::{ProteinInfo, VariantRecord};
use provar_core::utils::{VARIANTS_ERROR_LOG, append_log};

use super::client::{EnsemblClient, VariantScope};
use super::records::OverlapVariant;

/// Reshapes one overlap entry into a flat record, or `None` when the
/// entry is filtered out.
///
/// Kept entries have a three-character `X/Y` residue pair, a consequence
/// other than `synonymous_variant`, a dbSNP or COSMIC source, and a site
/// within the sequence.
pub fn normalize_overlap_variant(
    entry: &OverlapVariant,
    sequence: &str,
    gene: &str,
    transcript: &str,
    protein: &str,
) -> Option<VariantRecord> {
    if entry.residues.len() != 3 || !entry.residues.contains('/') {
        return None;
    }
    if entry.consequence == "synonymous_variant" {
        return None;
    }
    if !entry.id.starts_with("rs") && !entry.id.starts_with("COSM") {
        return None;
    }
    if entry.start < 1 || entry.start as usize > sequence.len() {
        return None;
    }
    let site = entry.start as usize;

    let (res1, res2) = entry.residues.split_once('/')?;
    let res1 = res1.chars().next()?;
    let res2 = res2.chars().next()?;
    let res1_three = alphabet::three_letter(res1)?;
    let res2_three = alphabet::three_letter(res2)?;

    Some(VariantRecord {
        variation: format!("p.{}{}{}", res1, site, res2),
        site,
        res1: res1_three.to_string(),
        res2: res2_three.to_string(),
        res1_prop: alphabet::properties(res1)
            .iter()
            .map(|p| p.to_string())
            .collect(),
        res2_prop: alphabet::properties(res2)
            .iter()
            .map(|p| p.to_string())
            .collect(),
        source: entry.id.clone(),
        ensembl_gene: gene.to_string(),
        ensembl_transcript: transcript.to_string(),
        ensembl_protein: protein.to_string(),
        consequence: entry.consequence.replace('_', " "),
        feature_type: entry.feature_type.clone(),
        codons: entry.codons.clone(),
        allele: entry.allele.clone(),
        allele_frequency: entry.minor_allele_frequency,
        location: None,
        chromosome: None,
        trait_name: None,
        trait_db: None,
    })
}

/// Checks the record's reference residue against the UniProt sequence.
/// Gap and stop codes are exempt from the check.
pub fn reference_matches(record: &VariantRecord, sequence: &str) -> bool {
    let Some(expected) = alphabet::one_letter(&record.res1) else {
        return false;
    };
    if expected == '-' || expected == '*' {
        return true;
    }
    sequence.as_bytes().get(record.site - 1) == Some(&(expected as u8))
}

/// Fetches the normalized variant list for one UniProt record and scope.
///
/// A (transcript, protein) pair is skipped when the Ensembl protein
/// sequence is unavailable or differs in length from the UniProt
/// sequence, since residue numbering could not be reconciled. Records
/// whose reference residue disagrees with the UniProt sequence are
/// logged to the variants error log and dropped.
pub fn fetch_variants(
    client: &EnsemblClient,
    info: &ProteinInfo,
    identifier: &str,
    scope: VariantScope,
    verbose: bool,
) -> Result<Vec<VariantRecord>> {
    let mut variants: Vec<VariantRecord> = Vec::new();

    let pairs = info
        .ensembl_transcript
        .iter()
        .zip(info.ensembl_protein.iter());
    for (transcript, protein) in pairs {
        if verbose {
            println!("Ensembl protein {}...", protein);
        }

        let Some(ensembl_seq) = client.protein_sequence(protein)? else {
            continue;
        };
        if ensembl_seq.len() != info.sequence.len() {
            continue;
        }

        let gene = if info.ensembl_gene.len() == 1 {
            info.ensembl_gene[0].clone()
        } else {
            client
                .parent_gene(transcript)?
                .unwrap_or_else(|| "-".to_string())
        };

        for entry in client.translation_variants(protein, scope)? {
            let Some(mut record) =
                normalize_overlap_variant(&entry, &info.sequence, &gene, transcript, protein)
            else {
                continue;
            };

            if let Some(details) = client.variation_details(&info.species, &record.source)? {
                if let Some(mapping) = details.mappings.first() {
                    record.location = mapping.location.clone();
                    record.chromosome = mapping.assembly_name.clone();
                }
                if let Some(phenotype) = details.phenotypes.first() {
                    record.trait_name = phenotype.trait_name.clone();
                    record.trait_db = phenotype.source.clone();
                }
            }

            if !reference_matches(&record, &info.sequence) {
                let observed = info
                    .sequence
                    .as_bytes()
                    .get(record.site - 1)
                    .map(|b| *b as char)
                    .unwrap_or('-');
                let message = format!(
                    "{}\tWarning: {} at sequence position {} does not match {} for {}",
                    identifier, record.res1, record.site, observed, protein
                );
                println!("{}", message);
                let _ = append_log(Path::new(VARIANTS_ERROR_LOG), &message);
                continue;
            }

            if !variants.contains(&record) {
                variants.push(record);
            }
        }
    }

    Ok(variants)
}
