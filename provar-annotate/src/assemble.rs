//! Pure table builders over (sequence, variants, mutations).

use provar_core::errors::AnnotateError;
use provar_core::models::{
    EntityRecord, EntityTable, ResidueRecord, ResidueTable, Summary, VariantRecord,
};

/// Builds the entity table: one record per residue position holding the
/// variant and mutation source IDs observed there, in input order.
/// Positions with no matching record get empty lists.
pub fn build_entities(
    sequence: &str,
    variants: &[VariantRecord],
    mutations: &[VariantRecord],
) -> EntityTable {
    let mut table = Vec::with_capacity(sequence.len());
    for site in 1..=sequence.len() {
        table.push(EntityRecord {
            site,
            variants: sources_at(variants, site),
            mutations: sources_at(mutations, site),
        });
    }
    EntityTable(table)
}

fn sources_at(records: &[VariantRecord], site: usize) -> Vec<String> {
    records
        .iter()
        .filter(|record| record.site == site)
        .map(|record| record.source.clone())
        .collect()
}

/// Insertion-ordered `{SOURCE}:{VARIATION}` -> site lookup. A repeated
/// key keeps its first position in the ordering but takes the later
/// site: source data is not expected to repeat a source+variation pair
/// at two sites, and no validation is performed.
fn site_lookup(records: &[VariantRecord]) -> Vec<(String, usize)> {
    let mut lookup: Vec<(String, usize)> = Vec::new();
    for record in records {
        let key = record.column_key();
        match lookup.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, site)) => *site = record.site,
            None => lookup.push((key, record.site)),
        }
    }
    lookup
}

/// Builds the residue table: base columns (position, residue letter,
/// accession) plus one column per `{SOURCE}:{VARIATION}` key at the
/// site where that variation occurs, valued with the sequence letter
/// observed at that site.
pub fn build_residues(
    sequence: &str,
    accession: &str,
    variants: &[VariantRecord],
    mutations: &[VariantRecord],
) -> ResidueTable {
    let variant_lookup = site_lookup(variants);
    let mutation_lookup = site_lookup(mutations);

    let mut table = Vec::with_capacity(sequence.len());
    for (index, byte) in sequence.bytes().enumerate() {
        let site = index + 1;
        let residue = byte as char;

        let variant_columns = variant_lookup
            .iter()
            .chain(mutation_lookup.iter())
            .filter(|(_, recorded)| *recorded == site)
            .map(|(key, _)| (key.clone(), residue))
            .collect();

        table.push(ResidueRecord {
            site,
            residue,
            accession: accession.to_string(),
            variant_columns,
        });
    }
    ResidueTable(table)
}

/// Builds the three aligned summary tracks. The tables must describe
/// the same number of positions.
pub fn summarize(entities: &EntityTable, residues: &ResidueTable) -> Result<Summary, AnnotateError> {
    if entities.len() != residues.len() {
        return Err(AnnotateError::TableLengthMismatch {
            entities: entities.len(),
            residues: residues.len(),
        });
    }

    let letters: String = residues.0.iter().map(|record| record.residue).collect();
    let variants: String = entities
        .0
        .iter()
        .map(|record| if record.variants.is_empty() { '-' } else { 'V' })
        .collect();
    let mutations: String = entities
        .0
        .iter()
        .map(|record| if record.mutations.is_empty() { '-' } else { 'M' })
        .collect();

    Ok(Summary {
        residues: letters,
        variants,
        mutations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn variant(source: &str, site: usize, res1: char, res2: char) -> VariantRecord {
        VariantRecord {
            variation: format!("p.{}{}{}", res1, site, res2),
            site,
            res1: res1.to_string(),
            res2: res2.to_string(),
            res1_prop: vec![],
            res2_prop: vec![],
            source: source.to_string(),
            ensembl_gene: "ENSG1".to_string(),
            ensembl_transcript: "ENST1".to_string(),
            ensembl_protein: "ENSP1".to_string(),
            consequence: "missense variant".to_string(),
            feature_type: "transcript_variation".to_string(),
            codons: String::new(),
            allele: String::new(),
            allele_frequency: None,
            location: None,
            chromosome: None,
            trait_name: None,
            trait_db: None,
        }
    }

    #[test]
    fn entities_cover_every_position() {
        let variants = vec![variant("rs1", 2, 'A', 'V')];
        let entities = build_entities("MAGT", &variants, &[]);

        assert_eq!(entities.len(), 4);
        assert_eq!(entities.get(1).unwrap().variants, Vec::<String>::new());
        assert_eq!(entities.get(2).unwrap().variants, vec!["rs1"]);
        assert_eq!(entities.get(2).unwrap().mutations, Vec::<String>::new());
        assert_eq!(entities.get(3).unwrap().variants, Vec::<String>::new());
        assert_eq!(entities.get(4).unwrap().variants, Vec::<String>::new());
    }

    #[test]
    fn residue_table_matches_sequence_length() {
        let variants = vec![variant("rs1", 2, 'A', 'V')];
        let mutations = vec![variant("COSM7", 4, 'T', 'M')];
        let residues = build_residues("MAGT", "P00439", &variants, &mutations);

        assert_eq!(residues.len(), 4);
        let row = &residues.0[1];
        assert_eq!(row.residue, 'A');
        assert_eq!(row.accession, "P00439");
        assert_eq!(row.variant_columns, vec![("rs1:p.A2V".to_string(), 'A')]);
        assert_eq!(
            residues.0[3].variant_columns,
            vec![("COSM7:p.T4M".to_string(), 'T')]
        );
        assert!(residues.0[0].variant_columns.is_empty());
    }

    #[test]
    fn duplicate_column_key_takes_last_site() {
        // same SOURCE:VARIATION key recorded at two sites
        let mut first = variant("rs9", 1, 'M', 'V');
        first.variation = "p.M1V".to_string();
        let mut second = variant("rs9", 3, 'M', 'V');
        second.variation = "p.M1V".to_string();

        let residues = build_residues("MAGT", "P00439", &[first, second], &[]);

        assert!(residues.0[0].variant_columns.is_empty());
        assert_eq!(
            residues.0[2].variant_columns,
            vec![("rs9:p.M1V".to_string(), 'G')]
        );
    }

    #[test]
    fn summary_tracks_align_with_sequence() {
        let variants = vec![variant("rs1", 2, 'A', 'V')];
        let entities = build_entities("MAGT", &variants, &[]);
        let residues = build_residues("MAGT", "P00439", &variants, &[]);
        let summary = summarize(&entities, &residues).unwrap();

        assert_eq!(summary.residues, "MAGT");
        assert_eq!(summary.variants, "-V--");
        assert_eq!(summary.mutations, "----");
    }

    #[test]
    fn empty_inputs_give_dash_tracks() {
        let entities = build_entities("MAGTC", &[], &[]);
        let residues = build_residues("MAGTC", "P00439", &[], &[]);
        let summary = summarize(&entities, &residues).unwrap();

        assert_eq!(summary.residues, "MAGTC");
        assert_eq!(summary.variants, "-----");
        assert_eq!(summary.mutations, "-----");
    }

    #[test]
    fn letter_track_round_trips_the_sequence() {
        let sequence = "MSMLVVFLLLWGVTWGPVTE";
        let variants = vec![variant("rs1", 7, 'F', 'L'), variant("COSM2", 11, 'W', 'C')];
        let entities = build_entities(sequence, &variants, &[]);
        let residues = build_residues(sequence, "P04217", &variants, &[]);

        let summary = summarize(&entities, &residues).unwrap();
        assert_eq!(summary.residues, sequence);
    }

    #[test]
    fn mismatched_table_lengths_fail() {
        let entities = build_entities("MAGT", &[], &[]);
        let residues = build_residues("MAG", "P00439", &[], &[]);

        let err = summarize(&entities, &residues).unwrap_err();
        assert!(matches!(
            err,
            provar_core::errors::AnnotateError::TableLengthMismatch {
                entities: 4,
                residues: 3
            }
        ));
    }
}
