//! Grammar of a single shell line.

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};

use crate::error::CliError;

/// One parsed shell line.
#[derive(Parser, Debug)]
#[command(name = "marks", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub action: Action,
}

/// Commands available inside the shell.
///
/// Every `NAME` is looked up in the current folder unless it contains a
/// `/`, in which case it is a path relative to the current folder.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// List a folder (the current one by default)
    #[command(alias = "list")]
    Ls {
        /// Folder to list
        path: Option<String>,
    },

    /// Enter a child folder by name, or any folder by path
    Cd {
        /// Child name or path; the root folder if omitted
        target: Option<String>,
    },

    /// Go back to the previous folder
    Back,

    /// Print the current folder
    Pwd,

    /// Create a folder
    Mkdir {
        /// Folder name
        name: String,

        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,
    },

    /// Create a bookmark
    Add {
        /// Bookmark name
        name: String,

        /// Absolute http(s) URL
        url: String,

        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,

        /// Mark as favorite
        #[arg(long)]
        favorite: bool,
    },

    /// Rename an item
    Mv {
        /// Current name
        old: String,

        /// New name
        new: String,
    },

    /// Delete an item and everything below it
    Rm {
        /// Item name
        name: String,
    },

    /// Toggle a bookmark's favorite flag
    Fav {
        /// Bookmark name
        name: String,
    },

    /// Print a bookmark's URL
    Open {
        /// Bookmark name
        name: String,
    },

    /// Replace an item's tags
    Tag {
        /// Item name
        name: String,

        /// Comma-separated tags; empty clears them
        tags: String,
    },

    /// Mark an item to be moved by the next paste
    Cut {
        /// Item name
        name: String,
    },

    /// Copy an item for the next paste
    Copy {
        /// Item name
        name: String,
    },

    /// Insert the clipboard item (into the current folder by default)
    Paste {
        /// Destination folder
        path: Option<String>,
    },

    /// Draw the whole tree
    Tree,

    /// Search names, tags and URLs
    Find {
        /// Case-insensitive text to look for
        query: String,
    },

    /// Leave the shell
    #[command(alias = "quit")]
    Exit,
}

/// Result of parsing a line.
#[derive(Debug)]
pub enum Parsed {
    /// An action to run.
    Action(Action),
    /// Help text requested with `help` or `--help`.
    Help(String),
}

/// Parses the words of one line.
///
/// # Errors
///
/// Returns `InvalidArguments` with clap's first error line for unknown
/// commands, missing arguments and the like.
pub fn parse_words(words: &[String]) -> Result<Parsed, CliError> {
    match ShellLine::try_parse_from(words) {
        Ok(line) => Ok(Parsed::Action(line.action)),
        Err(e) if e.kind() == ErrorKind::DisplayHelp => Ok(Parsed::Help(e.to_string())),
        Err(e) => {
            let rendered = e.to_string();
            let first = rendered.lines().next().unwrap_or_default();
            Err(CliError::InvalidArguments(
                first.trim_start_matches("error: ").to_string(),
            ))
        }
    }
}
