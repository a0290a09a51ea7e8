mod annotate;
mod info;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "provar";
    pub const BIN_NAME: &str = "provar";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Per-residue protein variant annotation: scrapes UniProt records, queries the Ensembl REST API and assembles variant/mutation tables per UniProt identifier.")
        .subcommand_required(true)
        .subcommand(annotate::cli::create_annotate_cli())
        .subcommand(info::cli::create_info_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // ANNOTATE
        //
        Some((annotate::cli::ANNOTATE_CMD, matches)) => {
            annotate::handlers::run_annotate(matches)?;
        }

        //
        // INFO
        //
        Some((info::cli::INFO_CMD, matches)) => {
            info::handlers::run_info(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
