//! Offline session tests against a pre-seeded data folder.
//!
//! The seeded record names a species without Ensembl variation data, so
//! no stage touches the network: variant and mutation lists stay empty
//! and the derived tables are built from the cached record alone.

use std::fs;

use pretty_assertions::assert_eq;
use provar_annotate::Session;

const FASTA: &str = "\
>sp|TEST01|TST_IMAGB Test protein OS=Imaginary beast GN=TST PE=1 SV=1
MAGT
";

const FLAT: &str = "\
ID   TST_IMAGB               Reviewed;           4 AA.
DR   Ensembl; ENST00000000001; ENSP00000000001; ENSG00000000001.
";

fn seeded_session() -> (tempfile::TempDir, Session) {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("TEST01.fasta"), FASTA).unwrap();
    fs::write(dir.path().join("TEST01.txt"), FLAT).unwrap();

    let session = Session::builder()
        .with_data_folder(dir.path().to_path_buf())
        .finish()
        .unwrap();
    (dir, session)
}

#[test]
fn annotates_cached_record_without_network() {
    let (_dir, mut session) = seeded_session();
    let annotation = session.annotate("TEST01").unwrap();

    let info = annotation.information.expect("information should parse");
    assert_eq!(info.name, "TST_IMAGB");
    assert_eq!(info.gene, "TST");
    assert_eq!(info.species, "imaginary_beast");
    assert_eq!(info.sequence, "MAGT");
    assert_eq!(info.ensembl_transcript, vec!["ENST00000000001"]);

    assert!(annotation.variants.is_empty());
    assert!(annotation.mutations.is_empty());
    assert_eq!(annotation.residues.len(), 4);

    let summary = annotation.summary.expect("summary should be present");
    assert_eq!(summary.residues, "MAGT");
    assert_eq!(summary.variants, "----");
    assert_eq!(summary.mutations, "----");
}

#[test]
fn stages_are_idempotent_and_memoized() {
    let (_dir, mut session) = seeded_session();

    // out-of-order access triggers required prior stages
    let summary_first = session.summary("TEST01").unwrap();
    let summary_again = session.summary("TEST01").unwrap();
    assert_eq!(summary_first, summary_again);

    let entities = session.entities("TEST01").unwrap();
    assert_eq!(entities.len(), 4);
    for record in &entities.0 {
        assert!(record.variants.is_empty());
        assert!(record.mutations.is_empty());
    }
}

#[test]
fn document_serializes_with_expected_shape() {
    let (_dir, mut session) = seeded_session();
    let annotation = session.annotate("TEST01").unwrap();

    let value = serde_json::to_value(&annotation).unwrap();
    assert_eq!(value["INFORMATION"]["NAME"], "TST_IMAGB");
    assert_eq!(value["VARIANTS"], serde_json::json!([]));
    assert_eq!(value["RESIDUES"]["1"]["UNIPROT_NAME"], "M");
    assert_eq!(value["RESIDUES"]["4"]["UNIPROT_ACC"], "TEST01");
    assert_eq!(value["SUMMARY"]["VARIANTS"], "----");

    // top-level key order follows the output contract
    let text = serde_json::to_string(&annotation).unwrap();
    let order: Vec<usize> = ["INFORMATION", "VARIANTS", "MUTATIONS", "RESIDUES", "SUMMARY"]
        .iter()
        .map(|key| text.find(&format!("\"{}\":", key)).unwrap())
        .collect();
    assert!(order.windows(2).all(|pair| pair[0] < pair[1]));
}
