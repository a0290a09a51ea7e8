use clap::{Arg, ArgAction, Command};

pub const ANNOTATE_CMD: &str = "annotate";

pub fn create_annotate_cli() -> Command {
    Command::new(ANNOTATE_CMD)
        .about("Gets variants and mutations for input UniProt ID(s) (example P00439)")
        .arg(
            Arg::new("identifier")
                .long("identifier")
                .short('i')
                .num_args(1..)
                .required(true)
                .help("Input UniProt ID(s)"),
        )
        .arg(
            Arg::new("data-folder")
                .long("data-folder")
                .short('d')
                .help("Folder where UniProt records are cached"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .help("Turns verbosity on"),
        )
}
