//! Parsers for the raw UniProt records.
//!
//! The FASTA header carries the display name, gene symbol and species;
//! the flat-text record carries the `DR   Ensembl;` cross-reference
//! lines. Malformed header fields fall back to the `-` sentinel rather
//! than failing the whole record.

use provar_core::models::ProteinInfo;

use super::client::UniProtRecord;

/// Fields parsed from the FASTA record.
#[derive(Debug, Clone, PartialEq)]
pub struct FastaInfo {
    pub sequence: String,
    pub name: String,
    pub gene: String,
    pub species: String,
}

/// Ensembl gene/transcript/protein identifier lists parsed from the
/// flat-text record. Transcripts and proteins stay aligned pairwise.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnsemblRefs {
    pub genes: Vec<String>,
    pub transcripts: Vec<String>,
    pub proteins: Vec<String>,
}

/// Parses sequence, name, gene and species out of the FASTA lines.
///
/// Header shape:
/// `>sp|P04217|A1BG_HUMAN Alpha-1B-glycoprotein OS=Homo sapiens GN=A1BG PE=1 SV=4`
pub fn parse_fasta(lines: &[String]) -> FastaInfo {
    let header = lines.first().map(String::as_str).unwrap_or("");

    let name = header
        .split('|')
        .nth(2)
        .and_then(|rest| rest.split_whitespace().next())
        .unwrap_or("-")
        .to_string();

    let gene = header
        .split_once("GN=")
        .and_then(|(_, rest)| rest.split_whitespace().next())
        .unwrap_or("-")
        .to_string();

    let species = header
        .split_once("OS=")
        .map(|(_, rest)| {
            rest.split_whitespace()
                .take(2)
                .collect::<Vec<_>>()
                .join("_")
                .to_lowercase()
        })
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "-".to_string());

    let sequence: String = lines.iter().skip(1).map(|line| line.trim_end()).collect();

    FastaInfo {
        sequence,
        name,
        gene,
        species,
    }
}

/// Parses the `DR   Ensembl;` cross-reference lines.
///
/// Line shapes:
/// `DR   Ensembl; ENST00000553106; ENSP00000448059; ENSG00000171759.`
/// `DR   Ensembl; ENST00000269305; ENSP00000269305; ENSG00000141510. [P04637-1]`
///
/// When an isoform tag is present, only the canonical isoform (`ACC` or
/// `ACC-1`) is kept. Each list is deduplicated preserving order.
pub fn parse_ensembl_refs(identifier: &str, lines: &[String]) -> EnsemblRefs {
    let mut refs = EnsemblRefs::default();

    for line in lines {
        if !line.starts_with("DR   Ensembl;") {
            continue;
        }
        let fields: Vec<&str> = line.trim_end().split(';').collect();
        if fields.len() < 4 {
            continue;
        }
        let transcript = fields[1].trim();
        let protein = fields[2].trim();
        let gene_field = fields[3].trim();

        let gene = if gene_field.contains('[') {
            let mut parts = gene_field.split_whitespace();
            let gene = parts.next().unwrap_or("").trim_end_matches('.');
            let isoform = parts
                .next()
                .map(|tag| tag.trim_start_matches('[').trim_end_matches(']'))
                .unwrap_or("");
            if isoform != identifier && isoform != format!("{}-1", identifier) {
                continue;
            }
            gene
        } else {
            gene_field.trim_end_matches('.')
        };

        if !refs.genes.iter().any(|g| g == gene) {
            refs.genes.push(gene.to_string());
        }
        if !refs.transcripts.iter().any(|t| t == transcript) {
            refs.transcripts.push(transcript.to_string());
        }
        if !refs.proteins.iter().any(|p| p == protein) {
            refs.proteins.push(protein.to_string());
        }
    }

    refs
}

/// Combines both parsers into the INFORMATION block, or `None` when
/// either raw file is unavailable.
pub fn protein_info(record: &UniProtRecord) -> Option<ProteinInfo> {
    let fasta = record.fasta.as_ref()?;
    let flat = record.flat.as_ref()?;

    let info = parse_fasta(fasta);
    let refs = parse_ensembl_refs(&record.identifier, flat);

    Some(ProteinInfo {
        name: info.name,
        sequence: info.sequence,
        gene: info.gene,
        species: info.species,
        ensembl_gene: refs.genes,
        ensembl_transcript: refs.transcripts,
        ensembl_protein: refs.proteins,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_full_fasta_header() {
        let fasta = lines(&[
            ">sp|P04217|A1BG_HUMAN Alpha-1B-glycoprotein OS=Homo sapiens GN=A1BG PE=1 SV=4",
            "MSMLVVFLLL",
            "WGVTWGPVTE",
        ]);
        let info = parse_fasta(&fasta);

        assert_eq!(info.name, "A1BG_HUMAN");
        assert_eq!(info.gene, "A1BG");
        assert_eq!(info.species, "homo_sapiens");
        assert_eq!(info.sequence, "MSMLVVFLLLWGVTWGPVTE");
    }

    #[test]
    fn malformed_header_fields_default_to_dash() {
        let fasta = lines(&[">sp|P04217", "MAGT"]);
        let info = parse_fasta(&fasta);

        assert_eq!(info.name, "-");
        assert_eq!(info.gene, "-");
        assert_eq!(info.species, "-");
        assert_eq!(info.sequence, "MAGT");
    }

    #[test]
    fn parses_plain_ensembl_lines() {
        let flat = lines(&[
            "ID   TEST_HUMAN              Reviewed;         453 AA.",
            "DR   Ensembl; ENST00000553106; ENSP00000448059; ENSG00000171759.",
        ]);
        let refs = parse_ensembl_refs("P00439", &flat);

        assert_eq!(refs.genes, vec!["ENSG00000171759"]);
        assert_eq!(refs.transcripts, vec!["ENST00000553106"]);
        assert_eq!(refs.proteins, vec!["ENSP00000448059"]);
    }

    #[test]
    fn keeps_only_canonical_isoform_lines() {
        let flat = lines(&[
            "DR   Ensembl; ENST00000269305; ENSP00000269305; ENSG00000141510. [P04637-1]",
            "DR   Ensembl; ENST00000420246; ENSP00000391127; ENSG00000141510. [P04637-2]",
            "DR   Ensembl; ENST00000445888; ENSP00000391478; ENSG00000141510. [P04637-1]",
        ]);
        let refs = parse_ensembl_refs("P04637", &flat);

        assert_eq!(refs.genes, vec!["ENSG00000141510"]);
        assert_eq!(
            refs.transcripts,
            vec!["ENST00000269305", "ENST00000445888"]
        );
        assert_eq!(refs.proteins, vec!["ENSP00000269305", "ENSP00000391478"]);
    }

    #[test]
    fn protein_info_requires_both_files() {
        let record = UniProtRecord {
            identifier: "P04637".to_string(),
            fasta: Some(lines(&[
                ">sp|P04637|P53_HUMAN Cellular tumor antigen p53 OS=Homo sapiens GN=TP53",
                "MEEPQ",
            ])),
            flat: None,
        };
        assert_eq!(protein_info(&record), None);
    }
}
