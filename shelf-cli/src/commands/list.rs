//! List command implementation

use super::starting_library;
use crate::render::render_view;
use anyhow::{Context, Result};
use std::io::{self, Write};

/// Print the starting library as cards or JSON
pub fn list(empty: bool, json: bool) -> Result<()> {
    let library = starting_library(empty);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if json {
        let books = library.snapshot();
        let text = serde_json::to_string_pretty(&books).context("Failed to serialize library")?;
        writeln!(out, "{}", text)?;
    } else {
        render_view(&library.view(), &mut out)?;
    }

    Ok(())
}
