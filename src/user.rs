use std::fmt;

/// The person at the desk. Only used to name who borrowed or returned a book.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    /// Display name, accepted as typed (may be empty)
    name: String,
}

impl User {
    /// Create a user with the given display name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
