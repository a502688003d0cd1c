//! HTML rendering of the library page
//!
//! The whole page is regenerated from a [`LibraryView`] on every request.

use shelf_core::{BookCard, LibraryView};
use std::fmt::Write;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 2rem; background: #f6f4ef; }
header { display: flex; align-items: baseline; gap: 1rem; }
#library-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr)); gap: 1rem; }
.book-card { background: #fff; border-radius: 8px; padding: 1rem; box-shadow: 0 1px 3px rgba(0,0,0,.15); display: flex; flex-direction: column; justify-content: space-between; }
.book-card-actions { display: flex; gap: .5rem; }
.btn-base { border: 0; border-radius: 4px; padding: .4rem .8rem; cursor: pointer; }
.read-true { background: #3c8d5a; color: #fff; }
.read-false { background: #c9a227; color: #fff; }
.remove-btn { background: #b33a3a; color: #fff; }
"#;

/// Render the full library page
pub fn render_page(view: &LibraryView) -> String {
    let mut html = String::with_capacity(2048 + view.cards.len() * 512);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n<title>My Library</title>\n");
    let _ = writeln!(html, "<style>{}</style>", STYLE);
    html.push_str("</head>\n<body>\n");

    let _ = writeln!(
        html,
        "<header><h1>My Library</h1><p>{} books, {} read</p></header>",
        view.total, view.read_count
    );

    html.push_str(NEW_BOOK_FORM);

    html.push_str("<main id=\"library-grid\">\n");
    if view.is_empty() {
        html.push_str("<p class=\"empty\">No books yet.</p>\n");
    }
    for card in &view.cards {
        render_card(&mut html, card);
    }
    html.push_str("</main>\n</body>\n</html>\n");

    html
}

const NEW_BOOK_FORM: &str = r#"<details id="book-dialog">
<summary class="btn-base" id="new-book-btn">New Book</summary>
<form id="book-form" method="post" action="/books">
<label>Title <input id="title" name="title" required></label>
<label>Author <input id="author" name="author" required></label>
<label>Pages <input id="pages" name="pages" type="number" required></label>
<label><input id="read" name="read" type="checkbox"> Read it</label>
<button type="submit" class="btn-base">Add Book</button>
</form>
</details>
"#;

/// Render one book card
fn render_card(html: &mut String, card: &BookCard) {
    let id = card.id.to_string();
    let _ = write!(
        html,
        r#"<div class="book-card" data-id="{id}">
<div>
<h3>{title}</h3>
<p>by {author}</p>
<p>{pages}</p>
</div>
<div class="book-card-actions">
<form method="post" action="/books/{id}/toggle-read"><button data-action="toggle-read" class="btn-base {class}">{label}</button></form>
<form method="post" action="/books/{id}/remove"><button data-action="remove" class="btn-base remove-btn">Remove</button></form>
</div>
</div>
"#,
        id = id,
        title = escape_html(&card.title),
        author = escape_html(&card.author),
        pages = escape_html(&card.pages),
        class = card.status_class,
        label = card.toggle_label,
    );
}

/// Escape text for use in HTML content and attribute values
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
