//! External classifier adapter.
//!
//! The classifier is an opaque command with a line-oriented interface: lines
//! of free text on stdin, one `lang<TAB>confidence` record per line on stdout,
//! in input order. The candidate set is fixed per run and passed on the
//! command line.
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};
use std::str::FromStr;

use log::debug;

use crate::error::Error;
use crate::lang::{self, Lang};

use super::identification::{Identification, Identifier};

/// Default classifier command, expected on `PATH`.
pub const DEFAULT_COMMAND: &str = "lid";

pub struct LidProcess {
    command: String,
    langs: Vec<Lang>,
    threshold: Option<f32>,
}

impl LidProcess {
    pub fn new(command: String, langs: Vec<Lang>, threshold: Option<f32>) -> Self {
        Self {
            command,
            langs,
            threshold,
        }
    }

    /// Adapter over the deployment's default candidate set.
    pub fn with_default_langs(command: String) -> Self {
        Self::new(command, lang::LANG.clone(), None)
    }

    fn build_command(&self) -> Command {
        let mut cmd = Command::new(&self.command);
        cmd.arg("--languages").arg(lang::to_cli_list(&self.langs));
        if let Some(threshold) = self.threshold {
            cmd.arg("--threshold").arg(threshold.to_string());
        }
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }

    fn spawn_error(&self, e: std::io::Error) -> Error {
        if e.kind() == ErrorKind::NotFound {
            Error::MissingDependency(self.command.clone())
        } else {
            Error::Io(e)
        }
    }

    /// Parse one `lang<TAB>confidence` record.
    fn parse_result(&self, idx: usize, line: &str) -> Result<Identification, Error> {
        let (label, prob) = line.split_once('\t').ok_or_else(|| {
            Error::Classifier(format!("malformed result on line {}: {:?}", idx + 1, line))
        })?;

        let prob: f32 = prob.trim().parse().map_err(|_| {
            Error::Classifier(format!("unparseable confidence on line {}: {:?}", idx + 1, prob))
        })?;

        if !(0.0..=1.0).contains(&prob) {
            return Err(Error::Classifier(format!(
                "confidence out of [0,1] on line {}: {}",
                idx + 1,
                prob
            )));
        }

        Ok(Identification::new(Lang::from_str(label)?, prob))
    }
}

impl Identifier for LidProcess {
    /// Verify the command is spawnable before any file is touched.
    ///
    /// An empty stdin is a valid (zero-line) request for a well-behaved line
    /// classifier, so the probe also requires a clean exit.
    fn check(&self) -> Result<(), Error> {
        let mut child = self
            .build_command()
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        // close stdin right away, the child sees EOF
        drop(child.stdin.take());
        let output = child.wait_with_output()?;
        if output.status.success() {
            Ok(())
        } else {
            Err(Error::Classifier(format!(
                "{} probe exited with {}: {}",
                self.command,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )))
        }
    }

    fn identify(&self, lines: &[String]) -> Result<Vec<Identification>, Error> {
        let mut child = self
            .build_command()
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| Error::Custom("could not open classifier stdin".to_string()))?;

        // feed from a separate thread so a chatty classifier can't deadlock us
        // on a full stdout pipe.
        let mut payload = lines.join("\n");
        if !lines.is_empty() {
            payload.push('\n');
        }
        let feeder = std::thread::spawn(move || -> std::io::Result<()> {
            stdin.write_all(payload.as_bytes())
        });

        let output = child.wait_with_output()?;

        match feeder
            .join()
            .map_err(|_| Error::Custom("classifier feeder thread panicked".to_string()))?
        {
            // an early-exiting child closes its end first; the status check
            // below is the authoritative signal in that case.
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                debug!("classifier closed stdin early");
            }
            other => other?,
        }

        if !output.status.success() {
            return Err(Error::Classifier(format!(
                "{} exited with {}: {}",
                self.command,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        stdout
            .lines()
            .enumerate()
            .map(|(idx, line)| self.parse_result(idx, line))
            .collect()
    }
}
