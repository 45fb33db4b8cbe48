//! Script execution command.
//!
//! Runs every line of a file through the shell interpreter. By default the
//! first failing line stops the script and its error decides the exit code;
//! with `--keep-going` every line runs and any failure exits with code 1.

use crate::error::CliError;
use crate::repl::{Flow, Interpreter};
use crate::utils::{open_session, GlobalOptions};
use anyhow::Context;
use clap::Args;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Run a script of shell lines
#[derive(Args)]
pub struct RunCommand {
    /// Script file, one shell line per line
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Keep running after a line fails
    #[arg(long)]
    pub keep_going: bool,
}

impl RunCommand {
    /// Execute the run command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let script = fs::read_to_string(&self.file)
            .with_context(|| format!("failed to read script {}", self.file.display()))?;

        let (session, format) = open_session(global)?;
        let mut repl = Interpreter::new(session, format, io::stdout());
        let mut failed = 0usize;

        for (index, line) in script.lines().enumerate() {
            let number = index + 1;
            match repl.run_line(line) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => {
                    log::debug!("{}:{number}: exit", self.file.display());
                    break;
                }
                Err(e) if self.keep_going => {
                    eprintln!("Error: line {number}: {e}");
                    failed += 1;
                }
                Err(e) => {
                    log::warn!("{}:{number}: stopping at '{}'", self.file.display(), line.trim());
                    return Err(e);
                }
            }
        }

        if failed > 0 {
            return Err(CliError::SemanticFailure(format!(
                "{failed} line(s) of {} failed",
                self.file.display()
            )));
        }

        Ok(())
    }
}
