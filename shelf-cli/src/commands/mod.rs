//! CLI command implementations

mod demo;
mod list;
mod shell;

pub use demo::demo;
pub use list::list;
pub use shell::shell;

use shelf_core::Library;

/// The library a command starts from
fn starting_library(empty: bool) -> Library {
    if empty {
        Library::new()
    } else {
        Library::with_sample_books()
    }
}
