//! Interactive shell command.
//!
//! Reads lines from standard input and runs each against one session. A
//! failing line prints its error and the shell keeps going; `exit` or end of
//! input leaves it. The prompt is only printed when stdin is a terminal, so
//! piped input produces clean output.

use crate::error::CliError;
use crate::repl::{Flow, Interpreter};
use crate::utils::{open_session, GlobalOptions};
use clap::Args;
use std::io::{self, BufRead, IsTerminal, Write};

/// Start an interactive shell
#[derive(Args)]
pub struct ShellCommand {}

impl ShellCommand {
    /// Execute the shell command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (session, format) = open_session(global)?;
        let stdin = io::stdin();
        let interactive = stdin.is_terminal();

        if interactive && !global.quiet {
            eprintln!("Type 'help' for commands, 'exit' to leave.");
        }

        let mut repl = Interpreter::new(session, format, io::stdout());
        let mut lines = stdin.lock().lines();

        loop {
            if interactive {
                print!("{}", repl.prompt());
                io::stdout().flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };

            match repl.run_line(&line?) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(e) => eprintln!("Error: {e}"),
            }
        }

        Ok(())
    }
}
