use std::fmt;

/// Successful catalog mutations
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CatalogEvent {
    /// A book was appended to the catalog
    Added {
        /// Title of the new book
        title: String,
        /// Author of the new book
        author: String,
    },
    /// A book was lent out
    Borrowed {
        /// Name of the borrowing user
        user: String,
        /// Stored title of the book
        title: String,
    },
    /// A book came back
    Returned {
        /// Name of the returning user
        user: String,
        /// Stored title of the book
        title: String,
    },
}

impl CatalogEvent {
    /// Title of the book the event is about
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Added { title, .. } | Self::Borrowed { title, .. } | Self::Returned { title, .. } => {
                title
            }
        }
    }
}

impl fmt::Display for CatalogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added { title, author } => write!(f, "Book added: {title} by {author}"),
            Self::Borrowed { user, title } => write!(f, "{user} borrowed '{title}'"),
            Self::Returned { user, title } => write!(f, "{user} returned '{title}'"),
        }
    }
}
