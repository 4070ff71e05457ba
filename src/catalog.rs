use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::{book::Book, events::CatalogEvent, observers::CatalogObserver, user::User};

/// Books present in every freshly constructed catalog, as (title, author)
const SEED_BOOKS: [(&str, &str); 3] = [
    ("The Hobbit", "J.R.R. Tolkien"),
    ("Pride and Prejudice", "Jane Austen"),
    ("Moby-Dick", "Herman Melville"),
];

/// Rejected borrow or return requests.
///
/// These are ordinary outcomes shown to the user, not faults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    /// No book matches the requested title
    #[error("Book '{title}' not found.")]
    NotFound {
        /// Title as requested
        title: String,
    },
    /// The book is already out
    #[error("'{title}' is already borrowed.")]
    AlreadyBorrowed {
        /// Stored title of the book
        title: String,
    },
    /// The book is on the shelf, so there is nothing to return
    #[error("'{title}' was not borrowed.")]
    NotBorrowed {
        /// Stored title of the book
        title: String,
    },
}

/// Ordered, in-memory collection of books
pub struct Catalog {
    /// Books in insertion order; duplicate titles allowed
    books: Vec<Book>,
    /// Registered change observers
    observers: Vec<Box<dyn CatalogObserver>>,
}

// Manual implementation of Debug for Catalog
impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("books", &self.books)
            .field("observers_count", &self.observers.len())
            .finish()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Create a catalog holding the three seed books, all available
    #[must_use]
    pub fn new() -> Self {
        let mut catalog = Self::empty();
        catalog.books.extend(SEED_BOOKS.iter().map(|&(title, author)| Book::new(title, author)));
        catalog
    }

    /// Create a catalog with no books
    #[must_use]
    pub fn empty() -> Self {
        Self { books: Vec::new(), observers: Vec::new() }
    }

    /// Register an observer to be notified of catalog changes
    pub fn register_observer(&mut self, observer: Box<dyn CatalogObserver>) {
        self.observers.push(observer);
    }

    /// Number of books in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the catalog holds no books
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Append a new available book. Titles are not checked for duplicates.
    pub fn add_book(&mut self, title: &str, author: &str) -> CatalogEvent {
        self.books.push(Book::new(title, author));
        let event = CatalogEvent::Added { title: title.to_owned(), author: author.to_owned() };
        self.notify(&event);
        event
    }

    /// Find the first book whose title matches, ignoring case
    #[must_use]
    pub fn find_by_title(&self, title: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.matches_title(title))
    }

    /// Mutable variant of [`Catalog::find_by_title`]
    fn find_by_title_mut(&mut self, title: &str) -> Result<&mut Book, LibraryError> {
        self.books.iter_mut().find(|book| book.matches_title(title)).ok_or_else(|| {
            debug!(%title, "no book with this title");
            LibraryError::NotFound { title: title.to_owned() }
        })
    }

    /// Lend a book to `user`
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::NotFound` if no title matches and
    /// `LibraryError::AlreadyBorrowed` if the book is already out. The
    /// catalog is left unchanged in both cases.
    pub fn borrow_book(&mut self, title: &str, user: &User) -> Result<CatalogEvent, LibraryError> {
        let book = self.find_by_title_mut(title)?;
        if book.is_borrowed() {
            debug!(title = book.title(), "borrow rejected, book is out");
            return Err(LibraryError::AlreadyBorrowed { title: book.title().to_owned() });
        }

        book.mark_borrowed();
        let event =
            CatalogEvent::Borrowed { user: user.name().to_owned(), title: book.title().to_owned() };
        self.notify(&event);
        Ok(event)
    }

    /// Take a book back from `user`
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::NotFound` if no title matches and
    /// `LibraryError::NotBorrowed` if the book is already available. The
    /// catalog is left unchanged in both cases.
    pub fn return_book(&mut self, title: &str, user: &User) -> Result<CatalogEvent, LibraryError> {
        let book = self.find_by_title_mut(title)?;
        if !book.is_borrowed() {
            debug!(title = book.title(), "return rejected, book is on the shelf");
            return Err(LibraryError::NotBorrowed { title: book.title().to_owned() });
        }

        book.mark_returned();
        let event =
            CatalogEvent::Returned { user: user.name().to_owned(), title: book.title().to_owned() };
        self.notify(&event);
        Ok(event)
    }

    /// Iterate over all books in insertion order, reflecting current state
    pub fn list_books(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    /// Tell every observer about an applied change
    fn notify(&self, event: &CatalogEvent) {
        for observer in &self.observers {
            observer.on_event(event);
        }
    }
}

#[cfg(test)]
mod tests;
