//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "linelid", about = "transcription language tagging tool.")]
/// Holds every command that is callable by the `linelid` command.
pub enum Linelid {
    #[structopt(about = "Tag transcription tables with per-line language identifications")]
    Tag(Tag),
}

#[derive(Debug, StructOpt)]
/// Tag command and parameters.
///
/// ```sh
/// linelid-tag 0.1.0
/// Tag transcription tables with per-line language identifications
///
/// USAGE:
///     linelid tag [OPTIONS] [src]
///
/// FLAGS:
///     -h, --help       Prints help information
///     -V, --version    Prints version information
///
/// OPTIONS:
///     -f, --file <files>...          explicit source files (skips discovery)
///         --langs <langs>            comma-separated candidate languages
///         --lid-command <command>    classifier command
///         --threshold <threshold>    confidence threshold passed to the classifier
///
/// ARGS:
///     <src>    directory holding <name>-lines.tsv files
/// ```
pub struct Tag {
    #[structopt(
        parse(from_os_str),
        default_value = ".",
        help = "directory holding <name>-lines.tsv files"
    )]
    pub src: PathBuf,
    #[structopt(
        long = "lid-command",
        default_value = "lid",
        help = "classifier command"
    )]
    pub command: String,
    #[structopt(
        long = "langs",
        default_value = "nl,en,fr,de,la,it,es",
        help = "comma-separated candidate languages"
    )]
    pub langs: String,
    #[structopt(
        long = "threshold",
        help = "confidence threshold passed to the classifier"
    )]
    pub threshold: Option<f32>,
    #[structopt(
        short = "f",
        long = "file",
        parse(from_os_str),
        help = "explicit source files (skips discovery)"
    )]
    pub files: Vec<PathBuf>,
}
