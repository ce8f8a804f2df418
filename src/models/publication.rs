//! Publication (catalog entry) model and related types.
//!
//! A publication is a tagged variant: every kind shares title, author and
//! year, and each variant decides which extra fields it carries and shows.
//! `Book` is the only kind today.

use uuid::Uuid;
use validator::Validate;

use crate::error::AppResult;

/// Catalog identity of a publication. Titles are not unique, so loans refer
/// to publications through this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicationId(Uuid);

impl PublicationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PublicationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PublicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Book variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: PublicationId,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub isbn: String,
    /// Free-text category (e.g. "Gaming", "Novel")
    pub book_type: String,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        isbn: impl Into<String>,
        book_type: impl Into<String>,
    ) -> Self {
        Self {
            id: PublicationId::new(),
            title: title.into(),
            author: author.into(),
            year,
            isbn: isbn.into(),
            book_type: book_type.into(),
        }
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Author: {}", self.author)?;
        writeln!(f, "Year: {}", self.year)?;
        writeln!(f, "ISBN: {}", self.isbn)?;
        write!(f, "Type: {}", self.book_type)
    }
}

/// Lendable catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Publication {
    Book(Book),
}

impl Publication {
    pub fn id(&self) -> PublicationId {
        match self {
            Publication::Book(book) => book.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Publication::Book(book) => &book.title,
        }
    }

    pub fn author(&self) -> &str {
        match self {
            Publication::Book(book) => &book.author,
        }
    }

    pub fn year(&self) -> i32 {
        match self {
            Publication::Book(book) => book.year,
        }
    }

    /// Category, for the variants that carry one.
    pub fn book_type(&self) -> Option<&str> {
        match self {
            Publication::Book(book) => Some(&book.book_type),
        }
    }
}

impl From<Book> for Publication {
    fn from(book: Book) -> Self {
        Publication::Book(book)
    }
}

impl std::fmt::Display for Publication {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Publication::Book(book) => std::fmt::Display::fmt(book, f),
        }
    }
}

/// Book registration input
#[derive(Debug, Clone, Validate)]
pub struct NewBook {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
    pub year: i32,
    #[validate(length(min = 1, message = "ISBN is required"))]
    pub isbn: String,
    #[validate(length(min = 1, message = "Book type is required"))]
    pub book_type: String,
}

impl NewBook {
    pub fn into_publication(self) -> AppResult<Publication> {
        self.validate()?;
        Ok(Book::new(self.title, self.author, self.year, self.isbn, self.book_type).into())
    }
}

/// Catalog search filters. Every supplied, non-empty filter must match
/// exactly; no filters match everything.
#[derive(Debug, Clone, Default)]
pub struct PublicationQuery {
    pub title: Option<String>,
    pub author: Option<String>,
    pub book_type: Option<String>,
}

impl PublicationQuery {
    pub fn by_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn matches(&self, publication: &Publication) -> bool {
        fn active(filter: &Option<String>) -> Option<&str> {
            filter.as_deref().filter(|s| !s.is_empty())
        }

        if let Some(title) = active(&self.title) {
            if publication.title() != title {
                return false;
            }
        }
        if let Some(author) = active(&self.author) {
            if publication.author() != author {
                return false;
            }
        }
        if let Some(book_type) = active(&self.book_type) {
            if publication.book_type() != Some(book_type) {
                return false;
            }
        }
        true
    }
}
