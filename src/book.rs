use std::fmt;

use serde::Serialize;

/// Lending status of a book
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum BookStatus {
    /// Book is on the shelf
    #[default]
    Available,
    /// Book is out with a user
    Borrowed,
}

impl BookStatus {
    /// Label shown next to the book in listings
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Borrowed => "Borrowed",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single catalog entry.
///
/// The status is private: it only changes through [`Book::mark_borrowed`]
/// and [`Book::mark_returned`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    /// Title as entered, case preserved
    title: String,
    /// Author as entered
    author: String,
    /// Current lending status
    status: BookStatus,
}

impl Book {
    /// Create an available book
    #[must_use]
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self { title: title.into(), author: author.into(), status: BookStatus::Available }
    }

    /// Title of the book
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Author of the book
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Current lending status
    #[must_use]
    pub fn status(&self) -> BookStatus {
        self.status
    }

    /// Whether the book is currently out
    #[must_use]
    pub fn is_borrowed(&self) -> bool {
        self.status == BookStatus::Borrowed
    }

    /// Mark the book as borrowed. Availability is the caller's concern.
    pub fn mark_borrowed(&mut self) {
        self.status = BookStatus::Borrowed;
    }

    /// Mark the book as back on the shelf
    pub fn mark_returned(&mut self) {
        self.status = BookStatus::Available;
    }

    /// Case-insensitive exact comparison against the stored title.
    ///
    /// Characters are compared one to one after simple uppercase mapping, so
    /// both strings must have the same number of characters. Whitespace and
    /// punctuation must match as stored.
    #[must_use]
    pub fn matches_title(&self, title: &str) -> bool {
        self.title.chars().count() == title.chars().count()
            && self.title.chars().map(simple_uppercase).eq(title.chars().map(simple_uppercase))
    }
}

/// Uppercase form of `c` when it is a single character, `c` itself otherwise
fn simple_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} ({})", self.title, self.author, self.status)
    }
}
