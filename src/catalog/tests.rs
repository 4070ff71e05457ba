use std::{cell::RefCell, rc::Rc};

use crate::{
    book::{Book, BookStatus},
    catalog::{Catalog, LibraryError},
    events::CatalogEvent,
    observers::CatalogObserver,
    user::User,
};

/// Observer that keeps a copy of everything it is told
struct Recorder(Rc<RefCell<Vec<CatalogEvent>>>);

impl CatalogObserver for Recorder {
    fn on_event(&self, event: &CatalogEvent) {
        self.0.borrow_mut().push(event.clone());
    }
}

/// Helper function to get the rendered listing lines
fn listing(catalog: &Catalog) -> Vec<String> {
    catalog.list_books().map(ToString::to_string).collect()
}

#[test]
fn test_seed_books() {
    let catalog = Catalog::new();
    assert_eq!(
        listing(&catalog),
        vec![
            "The Hobbit by J.R.R. Tolkien (Available)",
            "Pride and Prejudice by Jane Austen (Available)",
            "Moby-Dick by Herman Melville (Available)",
        ]
    );
    assert!(Catalog::empty().is_empty());
}

#[test]
fn test_borrow_available_book() {
    let mut catalog = Catalog::new();
    let user = User::new("Ada");

    let event = catalog.borrow_book("Moby-Dick", &user);
    assert_eq!(event.map(|e| e.to_string()), Ok("Ada borrowed 'Moby-Dick'".to_string()));
    assert!(catalog.find_by_title("Moby-Dick").is_some_and(|book| book.is_borrowed()));
}

#[test]
fn test_second_borrow_is_rejected() {
    let mut catalog = Catalog::new();
    let user = User::new("Ada");

    assert!(catalog.borrow_book("The Hobbit", &user).is_ok());
    let result = catalog.borrow_book("The Hobbit", &user);
    assert_eq!(result, Err(LibraryError::AlreadyBorrowed { title: "The Hobbit".to_string() }));
    assert_eq!(
        result.map_err(|e| e.to_string()),
        Err("'The Hobbit' is already borrowed.".to_string())
    );
    assert!(catalog.find_by_title("The Hobbit").is_some_and(|book| book.is_borrowed()));
}

#[test]
fn test_return_cycle() {
    let mut catalog = Catalog::new();
    let user = User::new("Ada");

    let result = catalog.return_book("Pride and Prejudice", &user);
    assert_eq!(
        result.map_err(|e| e.to_string()),
        Err("'Pride and Prejudice' was not borrowed.".to_string())
    );
    assert_eq!(
        catalog.find_by_title("Pride and Prejudice").map(Book::status),
        Some(BookStatus::Available)
    );

    assert!(catalog.borrow_book("Pride and Prejudice", &user).is_ok());
    let event = catalog.return_book("Pride and Prejudice", &user);
    assert_eq!(event.map(|e| e.to_string()), Ok("Ada returned 'Pride and Prejudice'".to_string()));
    assert_eq!(
        catalog.find_by_title("Pride and Prejudice").map(|book| book.status()),
        Some(BookStatus::Available)
    );
}

#[test]
fn test_unknown_title_leaves_catalog_unchanged() {
    let mut catalog = Catalog::new();
    let user = User::new("Ada");
    let before = listing(&catalog);

    for title in ["Dune", "Hobbit", "The Hobbit ", ""] {
        let expected = Err(LibraryError::NotFound { title: title.to_string() });
        assert_eq!(catalog.borrow_book(title, &user), expected);
        assert_eq!(catalog.return_book(title, &user), expected);
    }

    assert_eq!(listing(&catalog), before);
    assert_eq!(
        catalog.return_book("Dune", &user).map_err(|e| e.to_string()),
        Err("Book 'Dune' not found.".to_string())
    );
}

#[test]
fn test_title_match_ignores_case_only() {
    let mut catalog = Catalog::new();
    let user = User::new("Ada");

    // Messages use the stored title, not the typed one
    let event = catalog.borrow_book("the hobbit", &user);
    assert_eq!(event.map(|e| e.to_string()), Ok("Ada borrowed 'The Hobbit'".to_string()));
    assert!(catalog.find_by_title("MOBY-DICK").is_some());
    assert!(catalog.find_by_title("moby dick").is_none());
}

#[test]
fn test_title_match_uses_simple_uppercase() {
    let mut catalog = Catalog::empty();
    // Final and medial sigma both map to capital sigma
    catalog.add_book("\u{39F}\u{3B4}\u{3C5}\u{3C3}\u{3C3}\u{3B5}\u{3CD}\u{3C2}", "Homer");
    assert!(catalog.find_by_title("\u{39F}\u{394}\u{3A5}\u{3A3}\u{3A3}\u{395}\u{38E}\u{3A3}").is_some());

    // The Kelvin sign is already uppercase and is not the letter K
    catalog.add_book("k", "Anonymous");
    assert!(catalog.find_by_title("\u{212A}").is_none());
    assert!(catalog.find_by_title("K").is_some());

    // Characters whose uppercase form is several characters compare as themselves
    catalog.add_book("stra\u{DF}e", "Anonymous");
    assert!(catalog.find_by_title("STRA\u{DF}E").is_some());
    assert!(catalog.find_by_title("STRASSE").is_none());
}

#[test]
fn test_add_book_appends_verbatim() {
    let mut catalog = Catalog::new();

    let event = catalog.add_book("dune", "frank herbert");
    assert_eq!(event.to_string(), "Book added: dune by frank herbert");
    assert_eq!(catalog.len(), 4);

    let last = catalog.list_books().last().map(ToString::to_string);
    assert_eq!(last.as_deref(), Some("dune by frank herbert (Available)"));
}

#[test]
fn test_duplicate_titles_first_match_wins() {
    let mut catalog = Catalog::new();
    let user = User::new("Ada");
    catalog.add_book("THE HOBBIT", "Someone Else");

    assert!(catalog.borrow_book("The Hobbit", &user).is_ok());
    assert_eq!(catalog.find_by_title("the hobbit").map(|book| book.author()), Some("J.R.R. Tolkien"));
    assert_eq!(
        listing(&catalog).last().map(String::as_str),
        Some("THE HOBBIT by Someone Else (Available)")
    );
}

#[test]
fn test_listing_after_add_and_borrow() {
    let mut catalog = Catalog::new();
    let user = User::new("Ada");

    catalog.add_book("Dune", "Frank Herbert");
    assert!(catalog.borrow_book("Dune", &user).is_ok());

    let lines = listing(&catalog);
    assert_eq!(lines.len(), 4);
    assert_eq!(lines.last().map(String::as_str), Some("Dune by Frank Herbert (Borrowed)"));
}

#[test]
fn test_observers_see_only_applied_changes() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut catalog = Catalog::new();
    catalog.register_observer(Box::new(Recorder(Rc::clone(&seen))));
    let user = User::new("Ada");

    catalog.add_book("Dune", "Frank Herbert");
    drop(catalog.borrow_book("Dune", &user));
    drop(catalog.borrow_book("Dune", &user));
    drop(catalog.return_book("Emma", &user));
    drop(catalog.return_book("dune", &user));

    let titles: Vec<String> = seen.borrow().iter().map(|e| e.title().to_string()).collect();
    assert_eq!(titles, vec!["Dune", "Dune", "Dune"]);
    assert!(matches!(seen.borrow().last(), Some(CatalogEvent::Returned { user, .. }) if user == "Ada"));
}

#[test]
fn test_book_serialized_shape() {
    let catalog = Catalog::new();
    let json = catalog
        .find_by_title("Moby-Dick")
        .map(serde_json::to_value)
        .transpose()
        .map_err(|e| e.to_string());
    assert_eq!(
        json,
        Ok(Some(serde_json::json!({
            "title": "Moby-Dick",
            "author": "Herman Melville",
            "status": "Available",
        })))
    );
}
