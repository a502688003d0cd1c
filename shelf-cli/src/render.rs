//! Plain-text rendering of library cards

use shelf_core::LibraryView;
use std::io::{self, Write};

/// Render every card followed by a summary line
pub fn render_view(view: &LibraryView, out: &mut impl Write) -> io::Result<()> {
    if view.is_empty() {
        writeln!(out, "The library is empty.")?;
        return Ok(());
    }

    for (number, card) in view.cards.iter().enumerate() {
        let status = if card.read { "read" } else { "unread" };
        writeln!(out, "{:>3}. {}", number + 1, card.title)?;
        writeln!(out, "     by {}, {} pages  [{}]", card.author, card.pages, status)?;
        writeln!(out, "     id: {}", card.id)?;
    }
    writeln!(out, "{} books, {} read", view.total, view.read_count)?;
    Ok(())
}
