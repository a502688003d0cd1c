//! Demo command implementation

use crate::render::render_view;
use anyhow::{Context, Result};
use shelf_core::{Library, Pages};
use std::io::{self, Write};

/// Walk through the basic store operations, printing the library after each
pub fn demo() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_demo(&mut out)
}

fn run_demo(out: &mut impl Write) -> Result<()> {
    let mut library = Library::new();

    writeln!(out, "== add \"1984\"")?;
    let orwell = library.add("1984", "George Orwell", Pages::Count(328), false);
    render_view(&library.view(), out)?;

    writeln!(out, "\n== mark \"1984\" as read")?;
    library.toggle_read(orwell.id());
    render_view(&library.view(), out)?;

    writeln!(out, "\n== add \"Dune\"")?;
    library.add("Dune", "Frank Herbert", Pages::Count(412), true);
    render_view(&library.view(), out)?;

    writeln!(out, "\n== remove \"1984\"")?;
    library
        .remove(orwell.id())
        .context("Demo book disappeared")?;
    render_view(&library.view(), out)?;

    Ok(())
}
