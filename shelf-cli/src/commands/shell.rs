//! Shell command implementation
//!
//! Reads one command per line and re-renders the whole library after every
//! change. Books are picked either by their number in the listing or by id.

use super::starting_library;
use crate::render::render_view;
use anyhow::{anyhow, bail, Context, Result};
use shelf_core::{BookId, Library, Pages};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  add <title> | <author> | <pages> | <read>   add a book (read: yes/no)
  remove <n|id>                               remove a book
  toggle <n|id>                               flip a book's read status
  list                                        show the library
  help                                        show this help
  quit                                        leave the shell";

/// A parsed shell line
#[derive(Debug, PartialEq)]
enum ShellCommand {
    Add {
        title: String,
        author: String,
        pages: Pages,
        read: bool,
    },
    Remove(String),
    Toggle(String),
    List,
    Help,
    Quit,
}

impl ShellCommand {
    fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "add" => {
                let fields: Vec<&str> = rest.split('|').map(str::trim).collect();
                match fields.as_slice() {
                    [title, author, pages] => Ok(Self::Add {
                        title: title.to_string(),
                        author: author.to_string(),
                        pages: Pages::parse(pages),
                        read: false,
                    }),
                    [title, author, pages, read] => Ok(Self::Add {
                        title: title.to_string(),
                        author: author.to_string(),
                        pages: Pages::parse(pages),
                        read: parse_read_flag(read),
                    }),
                    _ => bail!("usage: add <title> | <author> | <pages> | <read>"),
                }
            }
            "remove" | "rm" => Ok(Self::Remove(selector(rest, "remove")?)),
            "toggle" => Ok(Self::Toggle(selector(rest, "toggle")?)),
            "list" | "ls" => Ok(Self::List),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => bail!("unknown command '{}' (try 'help')", other),
        }
    }
}

fn selector(rest: &str, verb: &str) -> Result<String> {
    if rest.is_empty() {
        bail!("usage: {} <n|id>", verb);
    }
    Ok(rest.to_string())
}

/// Checkbox semantics: anything that does not say "read" means unread
fn parse_read_flag(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "yes" | "y" | "true" | "1" | "read"
    )
}

/// Resolve a listing number or a book id
fn resolve(library: &Library, selector: &str) -> Result<BookId> {
    if let Ok(number) = selector.parse::<usize>() {
        return library
            .books()
            .get(number.wrapping_sub(1))
            .map(|book| book.id())
            .ok_or_else(|| anyhow!("no book #{} in the list", number));
    }
    selector
        .parse::<BookId>()
        .with_context(|| format!("'{}' is neither a list number nor a book id", selector))
}

/// Run the interactive shell on stdin/stdout
pub fn shell(empty: bool) -> Result<()> {
    let mut library = starting_library(empty);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    run_session(&mut library, stdin.lock(), &mut stdout.lock(), &mut stderr.lock())
}

/// Drive a session until `quit` or end of input
fn run_session(
    library: &mut Library,
    input: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    render_view(&library.view(), out)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match ShellCommand::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(err, "error: {:#}", e)?;
                continue;
            }
        };

        match command {
            ShellCommand::Add {
                title,
                author,
                pages,
                read,
            } => {
                let book = library.add(title, author, pages, read);
                writeln!(out, "Added \"{}\"", book.title())?;
            }
            ShellCommand::Remove(selector) => {
                let removed = resolve(library, &selector)
                    .and_then(|id| library.remove(id).map_err(Into::into));
                match removed {
                    Ok(book) => writeln!(out, "Removed \"{}\"", book.title())?,
                    Err(e) => writeln!(err, "error: {:#}", e)?,
                }
            }
            ShellCommand::Toggle(selector) => match resolve(library, &selector) {
                Ok(id) => {
                    library.toggle_read(id);
                }
                Err(e) => writeln!(err, "error: {:#}", e)?,
            },
            ShellCommand::List => {}
            ShellCommand::Help => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            ShellCommand::Quit => break,
        }

        render_view(&library.view(), out)?;
    }

    out.flush()?;
    Ok(())
}
