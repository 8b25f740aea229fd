//! # linelid
//!
//! Per-line language identification for transcription TSV files.
//!
//! ```sh
//! linelid 0.1.0
//! transcription language tagging tool.
//!
//! USAGE:
//!     linelid <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     help    Prints this message or the help of the given subcommand(s)
//!     tag     Tag transcription tables with per-line language identifications
//! ```
use structopt::StructOpt;

use log::debug;

use linelid::cli;
use linelid::error::Error;
use linelid::identifiers::LidProcess;
use linelid::lang;
use linelid::pipeline::{LineTag, Pipeline};

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Linelid::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Linelid::Tag(t) => {
            let langs = lang::parse_cli_list(&t.langs)?;
            let identifier = LidProcess::new(t.command, langs, t.threshold);

            let pipeline = if t.files.is_empty() {
                LineTag::discover(&t.src, identifier)?
            } else {
                LineTag::new(t.files, identifier)
            };
            pipeline.run()?;
        }
    };
    Ok(())
}
