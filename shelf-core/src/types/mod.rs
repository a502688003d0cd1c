//! Record types held by the library store

mod book;
mod pages;

pub use book::{Book, BookId};
pub use pages::Pages;
