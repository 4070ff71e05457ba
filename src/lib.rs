//! Console catalog for tracking which library books are borrowed.
//!
//! The crate holds a small in-memory catalog of books and an interactive
//! shell that lets one user list, borrow, return and add books.

pub mod book;
pub mod catalog;
pub mod config;
pub mod events;
pub mod observers;
pub mod shell;
pub mod user;

pub use book::{Book, BookStatus};
pub use catalog::{Catalog, LibraryError};
pub use config::Args;
pub use events::CatalogEvent;
pub use observers::{CatalogObserver, EventLogger};
pub use shell::{SessionEnd, Shell, ShellError};
pub use user::User;
