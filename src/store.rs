use std::{
    collections::BTreeMap,
    sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use crate::book::Book;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Item already exists")]
    AlreadyExists,
    #[error("Item is missing a required field")]
    MissingField,
    #[error("Item does not exist")]
    DoesNotExist,
}

/// In-memory books keyed by ISBN.
///
/// Every operation holds the lock for its whole check-then-act sequence,
/// so concurrent writers are serialized and readers never see a half-applied change.
#[derive(Debug, Default)]
pub struct BookStore {
    books: RwLock<BTreeMap<String, Book>>,
}

impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the two books every fresh server starts with.
    pub fn seeded() -> Self {
        Self::from_books([
            Book::new("Cloud Native Go", "M. L. Reimer", "0123456789"),
            Book::new("Hello World", "E. Pavlova", "0987654321"),
        ])
    }

    pub fn from_books(books: impl IntoIterator<Item = Book>) -> Self {
        let books: BTreeMap<String, Book> = books
            .into_iter()
            .map(|book| (book.isbn.clone(), book))
            .collect();

        Self {
            books: RwLock::new(books),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<String, Book>> {
        self.books.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<String, Book>> {
        self.books.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Returns all books sorted ascending by title.
    ///
    /// Books sharing a title keep ISBN order.
    pub fn list(&self) -> Vec<Book> {
        let mut books: Vec<Book> = self.read().values().cloned().collect();

        books.sort_by(|a, b| a.title.as_bytes().cmp(b.title.as_bytes()));

        books
    }

    pub fn get(&self, isbn: &str) -> Option<Book> {
        self.read().get(isbn).cloned()
    }

    pub fn create(&self, book: Book) -> Result<Book, StoreError> {
        if book.is_missing_field() {
            return Err(StoreError::MissingField);
        }

        let mut books = self.write();

        if books.contains_key(&book.isbn) {
            return Err(StoreError::AlreadyExists);
        }

        tracing::debug!(isbn = %book.isbn, "Creating book");

        books.insert(book.isbn.clone(), book.clone());

        Ok(book)
    }

    /// Replaces the book stored at `isbn` with `book`.
    ///
    /// The replacement is stored under `book.isbn`, which may differ from `isbn`.
    /// A book already stored under the new key is overwritten.
    pub fn update(&self, isbn: &str, book: Book) -> Result<Book, StoreError> {
        if book.is_missing_field() {
            return Err(StoreError::MissingField);
        }

        let mut books = self.write();

        if books.remove(isbn).is_none() {
            return Err(StoreError::DoesNotExist);
        }

        if isbn != book.isbn {
            tracing::debug!(from = %isbn, to = %book.isbn, "Re-keying book");
        } else {
            tracing::debug!(%isbn, "Updating book");
        }

        books.insert(book.isbn.clone(), book.clone());

        Ok(book)
    }

    pub fn delete(&self, isbn: &str) -> Result<Book, StoreError> {
        let book = self.write().remove(isbn).ok_or(StoreError::DoesNotExist)?;

        tracing::debug!(%isbn, "Deleted book");

        Ok(book)
    }
}
