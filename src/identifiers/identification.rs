/*! Identifier trait

All identifiers should implement [Identifier] to be useable in the tagging
pipeline. !*/
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{error::Error, lang::Lang};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(from = "IdentificationSer", into = "IdentificationSer")]
pub struct Identification {
    label: Lang,
    prob: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct IdentificationSer {
    label: String,
    prob: f32,
}

impl From<Identification> for IdentificationSer {
    fn from(i: Identification) -> Self {
        Self {
            label: i.label.to_string(),
            prob: i.prob,
        }
    }
}

impl From<IdentificationSer> for Identification {
    fn from(i: IdentificationSer) -> Self {
        Self {
            label: Lang::from_str(&i.label).unwrap_or(Lang::Unknown),
            prob: i.prob,
        }
    }
}

impl Identification {
    pub fn new(label: Lang, prob: f32) -> Self {
        Self { label, prob }
    }

    /// Get a reference to the identification's label.
    pub fn label(&self) -> &Lang {
        &self.label
    }

    /// Get a reference to the identification's prob.
    pub fn prob(&self) -> &f32 {
        &self.prob
    }
}

/// Line-batch language identification.
///
/// The contract is positional: implementations must return exactly one
/// [Identification] per input line, in input order, with the same candidate
/// set on every call within a run. A line that cannot be identified yields
/// [Lang::Unknown] rather than an error; errors are reserved for the backend
/// itself misbehaving.
pub trait Identifier {
    fn identify(&self, lines: &[String]) -> Result<Vec<Identification>, Error>;

    /// Availability check, run once per run before any file is processed.
    fn check(&self) -> Result<(), Error> {
        Ok(())
    }
}
