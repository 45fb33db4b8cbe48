//! Build script for marks-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("marks")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Organize bookmarks in a folder tree")
        .long_about(
            "Interactive bookmark manager over an in-memory tree of folders and bookmarks",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Listing format (overrides configuration)")
                .value_parser(["human", "json", "yaml"])
                .global(true),
        )
        .arg(
            Arg::new("empty")
                .long("empty")
                .help("Start from an empty root folder instead of the starter bookmarks")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Override the user configuration directory")
                .value_name("PATH")
                .global(true)
                .env("MARKS_CONFIG_DIR"),
        )
        .subcommands(vec![
            Command::new("shell")
                .about("Start an interactive shell")
                .long_about("Read shell lines from standard input and run them against one session"),
            Command::new("run")
                .about("Run a script of shell lines")
                .long_about("Run every line of a file, stopping at the first error unless --keep-going"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
            Command::new("show-config")
                .about("Print the resolved configuration")
                .long_about("Print the configuration after files, environment and flags are applied"),
        ])
}

fn main() -> std::io::Result<()> {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").unwrap_or_default());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("marks.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
