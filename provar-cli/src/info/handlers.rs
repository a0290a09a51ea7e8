use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::ArgMatches;

use provar_annotate::Session;

/// Prints the INFORMATION block for each input identifier. An identifier
/// whose record could not be loaded yields an empty object.
pub fn run_info(matches: &ArgMatches) -> Result<()> {
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
        match session.information(identifier) {
            Ok(Some(info)) => println!("{}", serde_json::to_string_pretty(&info)?),
            Ok(None) => println!("{{}}"),
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
