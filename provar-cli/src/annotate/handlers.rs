use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::ArgMatches;

use provar_annotate::Session;

/// Annotates each input identifier and prints one JSON document per
/// identifier to stdout. A failing identifier is reported to stderr and
/// processing continues; the run fails only if every identifier failed.
pub fn run_annotate(matches: &ArgMatches) -> Result<()> {
    let identifiers: Vec<&String> = matches
        .get_many::<String>("identifier")
        .expect("At least one identifier is required")
        .collect();
    let verbose = matches.get_flag("verbose");

    let mut builder = Session::builder().with_verbose(verbose);
    if let Some(folder) = matches.get_one::<String>("data-folder") {
        builder = builder.with_data_folder(PathBuf::from(folder));
    }
    let mut session = builder.finish()?;

    let mut failures = 0usize;
    for identifier in &identifiers {
        match session.annotate(identifier) {
            Ok(annotation) => {
                println!("{}", serde_json::to_string_pretty(&annotation)?);
            }
            Err(error) => {
                eprintln!("{}: {:#}", identifier, error);
                failures += 1;
            }
        }
    }

    if failures == identifiers.len() {
        bail!("All {} identifier(s) failed", failures);
    }
    Ok(())
}
