use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::models::{Book, BookId, User, UserId};

/// Immutable catalog of books and readers for one process.
///
/// Built once at startup and shared read-only afterwards. Lookups go through
/// id indexes so they stay O(1) even though the records live in flat lists;
/// iteration preserves the load order of those lists, which is meaningful
/// for "favorites first" and "featured" display semantics.
///
/// The catalog has no mutation operations and no interior mutability, so any
/// number of threads may query a shared instance without coordination.
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<Book>,
    users: Vec<User>,
    books_by_id: HashMap<BookId, usize>,
    users_by_id: HashMap<UserId, usize>,
}

impl Catalog {
    /// Build a catalog from already-loaded records.
    ///
    /// Duplicate ids keep their first occurrence in the index; later
    /// duplicates stay iterable but cannot be addressed by id.
    pub fn new(books: Vec<Book>, users: Vec<User>) -> Self {
        let mut books_by_id = HashMap::with_capacity(books.len());
        for (position, book) in books.iter().enumerate() {
            match books_by_id.entry(book.id) {
                Entry::Vacant(slot) => {
                    slot.insert(position);
                }
                Entry::Occupied(_) => {
                    tracing::warn!(
                        book_id = book.id,
                        "duplicate book id in catalog; keeping the first occurrence"
                    );
                }
            }
        }

        let mut users_by_id = HashMap::with_capacity(users.len());
        for (position, user) in users.iter().enumerate() {
            match users_by_id.entry(user.id) {
                Entry::Vacant(slot) => {
                    slot.insert(position);
                }
                Entry::Occupied(_) => {
                    tracing::warn!(
                        user_id = user.id,
                        "duplicate user id in catalog; keeping the first occurrence"
                    );
                }
            }
        }

        tracing::debug!(
            books = books.len(),
            users = users.len(),
            "catalog indexes built"
        );

        Self {
            books,
            users,
            books_by_id,
            users_by_id,
        }
    }

    /// All books in load order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// All readers in load order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Look up a book by id. Absent ids are `None`, never an error.
    pub fn book(&self, id: BookId) -> Option<&Book> {
        self.books_by_id.get(&id).map(|&position| &self.books[position])
    }

    /// Look up a reader by id. Absent ids are `None`, never an error.
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users_by_id.get(&id).map(|&position| &self.users[position])
    }

    /// Whether a book id resolves in this catalog.
    pub fn contains_book(&self, id: BookId) -> bool {
        self.books_by_id.contains_key(&id)
    }

    /// Number of books in the catalog.
    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Number of readers in the catalog.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}
