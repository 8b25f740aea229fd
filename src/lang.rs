//! Candidate language set.
//!
//! The corpus targets a fixed, closed set of languages found in the
//! transcriptions: Dutch, English, French, German, Latin, Italian and Spanish.
//! Lines the classifier cannot decide on are tagged [Lang::Unknown].
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::error::Error;

lazy_static! {
    /// Languages sent to the classifier on every run, in stable order.
    pub static ref LANG: Vec<Lang> = vec![
        Lang::Nl,
        Lang::En,
        Lang::Fr,
        Lang::De,
        Lang::La,
        Lang::It,
        Lang::Es,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Nl,
    En,
    Fr,
    De,
    La,
    It,
    Es,
    /// sentinel for lines the classifier could not decide on.
    Unknown,
}

impl Lang {
    pub fn code(&self) -> &'static str {
        match self {
            Lang::Nl => "nl",
            Lang::En => "en",
            Lang::Fr => "fr",
            Lang::De => "de",
            Lang::La => "la",
            Lang::It => "it",
            Lang::Es => "es",
            Lang::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Lang {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nl" => Ok(Lang::Nl),
            "en" => Ok(Lang::En),
            "fr" => Ok(Lang::Fr),
            "de" => Ok(Lang::De),
            "la" => Ok(Lang::La),
            "it" => Ok(Lang::It),
            "es" => Ok(Lang::Es),
            // classifiers disagree on how they spell indecision
            "" | "unknown" | "unk" => Ok(Lang::Unknown),
            other => Err(Error::UnknownLang(other.to_string())),
        }
    }
}

/// Parses a comma-separated candidate list as given on the command line.
pub fn parse_cli_list(s: &str) -> Result<Vec<Lang>, Error> {
    s.split(',').map(|code| code.trim().parse()).collect()
}

/// Joins langs into the comma-separated form the classifier command expects.
pub fn to_cli_list(langs: &[Lang]) -> String {
    langs
        .iter()
        .filter(|l| **l != Lang::Unknown)
        .map(Lang::code)
        .collect::<Vec<_>>()
        .join(",")
}
