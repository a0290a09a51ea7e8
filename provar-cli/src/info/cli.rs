use clap::{Arg, ArgAction, Command};

pub const INFO_CMD: &str = "info";

pub fn create_info_cli() -> Command {
    Command::new(INFO_CMD)
        .about("Gets the parsed UniProt/Ensembl information block for input UniProt ID(s)")
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
