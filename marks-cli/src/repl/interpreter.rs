//! Executes shell lines against a session.

use std::io::Write;

use marks::operations::{dispatch, Command, Outcome};
use marks::output::{render_tree, OutputFormat};
use marks::path::normalize::normalize;
use marks::path::TreePath;
use marks::{parse_tags, ItemSpec, Session};

use crate::error::CliError;
use crate::repl::line::{parse_words, Action, Parsed};
use crate::repl::tokenize::split_line;

/// Whether the shell should keep reading lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Stop reading.
    Exit,
}

/// Runs shell lines against one session, writing results to `out`.
pub struct Interpreter<W: Write> {
    session: Session,
    format: OutputFormat,
    out: W,
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter over `session`.
    pub fn new(session: Session, format: OutputFormat, out: W) -> Self {
        Self {
            session,
            format,
            out,
        }
    }

    /// The session lines run against.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Consumes the interpreter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// The prompt showing the current folder.
    pub fn prompt(&self) -> String {
        format!("{}> ", self.session.current())
    }

    /// Runs one line. Blank lines and lines starting with `#` do nothing.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArguments` for lines that do not parse, and the
    /// library error of a failed operation otherwise. The session is
    /// unchanged when a line fails.
    pub fn run_line(&mut self, line: &str) -> Result<Flow, CliError> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(Flow::Continue);
        }

        let words = split_line(trimmed)?;
        match parse_words(&words)? {
            Parsed::Help(text) => {
                write!(self.out, "{text}")?;
                Ok(Flow::Continue)
            }
            Parsed::Action(Action::Exit) => Ok(Flow::Exit),
            Parsed::Action(action) => {
                self.execute(action)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn execute(&mut self, action: Action) -> Result<(), CliError> {
        let command = match action {
            Action::Ls { path } => Command::List {
                path: self.folder(path.as_deref())?,
            },
            Action::Cd { target: None } => Command::Enter {
                path: TreePath::root(),
            },
            Action::Cd {
                target: Some(target),
            } => {
                if is_plain_name(&target) {
                    Command::EnterChild { name: target }
                } else {
                    Command::Enter {
                        path: self.folder(Some(&target))?,
                    }
                }
            }
            Action::Back => Command::Back,
            Action::Pwd => {
                writeln!(self.out, "{}", self.session.current())?;
                return Ok(());
            }
            Action::Mkdir { name, tags } => {
                let (parent, name) = self.locate(&name)?;
                let spec = ItemSpec::folder(name).with_tags(split_tags(tags.as_deref()));
                Command::Create { parent, spec }
            }
            Action::Add {
                name,
                url,
                tags,
                favorite,
            } => {
                let (parent, name) = self.locate(&name)?;
                let spec = ItemSpec::bookmark(name, url)
                    .with_tags(split_tags(tags.as_deref()))
                    .with_favorite(favorite);
                Command::Create { parent, spec }
            }
            Action::Mv { old, new } => {
                let (path, old) = self.locate(&old)?;
                Command::Rename { path, old, new }
            }
            Action::Rm { name } => {
                let (path, name) = self.locate(&name)?;
                Command::Delete { path, name }
            }
            Action::Fav { name } => {
                let (path, name) = self.locate(&name)?;
                Command::ToggleFavorite { path, name }
            }
            Action::Open { name } => {
                let (path, name) = self.locate(&name)?;
                Command::Open { path, name }
            }
            Action::Tag { name, tags } => {
                let (path, name) = self.locate(&name)?;
                Command::SetTags {
                    path,
                    name,
                    tags: parse_tags(&tags),
                }
            }
            Action::Cut { name } => {
                let (path, name) = self.locate(&name)?;
                Command::Cut { path, name }
            }
            Action::Copy { name } => {
                let (path, name) = self.locate(&name)?;
                Command::Copy { path, name }
            }
            Action::Paste { path } => Command::Paste {
                dest: self.folder(path.as_deref())?,
            },
            Action::Tree => {
                writeln!(self.out, "{}", render_tree(self.session.tree()))?;
                return Ok(());
            }
            Action::Find { query } => return self.find(&query),
            Action::Exit => return Ok(()),
        };

        let outcome = dispatch(&mut self.session, command)?;
        self.report(outcome)
    }

    fn report(&mut self, outcome: Outcome) -> Result<(), CliError> {
        match outcome {
            Outcome::Listing { items, ok } => {
                if !ok {
                    log::warn!("folder not found; showing the deepest folder reached");
                }
                let text = self.format.create_formatter().format(&items)?;
                writeln!(self.out, "{}", text.trim_end())?;
            }
            Outcome::Location(path) => log::info!("now in {path}"),
            Outcome::Inserted(node) => log::info!("added {} '{}'", node.kind(), node.name()),
            Outcome::Removed(node) => log::info!(
                "removed {} '{}' ({} items)",
                node.kind(),
                node.name(),
                node.descendant_count() + 1
            ),
            Outcome::Favorite(on) => {
                let state = if on { "on" } else { "off" };
                writeln!(self.out, "favorite: {state}")?;
            }
            Outcome::Url(url) => writeln!(self.out, "{url}")?,
            Outcome::Done => {}
        }
        Ok(())
    }

    fn find(&mut self, query: &str) -> Result<(), CliError> {
        let hits = self.session.tree().find(query);
        if hits.is_empty() {
            writeln!(self.out, "no matches for '{query}'")?;
        }
        for (path, node) in hits {
            writeln!(self.out, "{}", path.join(node.name()))?;
        }
        Ok(())
    }

    /// A folder argument, or the current folder when absent.
    fn folder(&self, arg: Option<&str>) -> Result<TreePath, CliError> {
        let here = self.session.current();
        match arg {
            Some(arg) => Ok(normalize(here, arg)?),
            None => Ok(here.clone()),
        }
    }

    /// Splits an item argument into its folder and name.
    fn locate(&self, arg: &str) -> Result<(TreePath, String), CliError> {
        let here = self.session.current();
        if !arg.contains('/') {
            return Ok((here.clone(), arg.to_string()));
        }

        let full = normalize(here, arg)?;
        match (full.parent(), full.file_name()) {
            (Some(parent), Some(name)) if parent.is_rooted() => Ok((parent, name.to_string())),
            _ => Err(CliError::InvalidArguments(format!(
                "'{arg}' does not name an item"
            ))),
        }
    }
}

fn is_plain_name(target: &str) -> bool {
    !target.contains('/') && target != "." && target != ".."
}

fn split_tags(tags: Option<&str>) -> Vec<String> {
    tags.map(parse_tags).unwrap_or_default()
}
