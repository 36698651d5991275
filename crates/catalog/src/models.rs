use serde::{Deserialize, Serialize};

/// Unique identifier of a book within a catalog.
pub type BookId = u64;

/// Unique identifier of a reader within a catalog.
pub type UserId = u64;

/// A book record as the catalog knows it.
///
/// Records never change after the catalog is built. Sharing eligibility is a
/// property of the catalog entry itself; whether a particular reader offers
/// the book is tracked on [`User::shareable_books`] and both must agree
/// before a copy is actually on offer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique identifier for the book
    pub id: BookId,
    /// Title of the book
    pub title: String,
    /// Author of the book
    pub author: String,
    /// Path or URL of the cover image
    pub cover_image: String,
    /// Genre tag used by browse filters
    pub genre: String,
    /// Whether the catalog permits lending this book at all
    pub shareable: bool,
    /// Format offered when shared (paperback, hardcover, e-book, audiobook)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharing_format: Option<String>,
    /// Condition disclosed when shared
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharing_condition: Option<String>,
}

/// A reader profile with four referential shelves.
///
/// Shelves hold book ids, not books. Resolution happens against the catalog
/// at query time and tolerates ids that resolve to nothing, since shelf data
/// is not validated at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier for the reader
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Path or URL of the avatar image
    pub avatar: String,
    /// Free-form location string
    pub location: String,
    /// Free-text bio
    pub bio: String,
    /// Ordered affinity descriptors ("Deep Thinker", "Fiction Explorer", ...)
    #[serde(default)]
    pub reading_vibe: Vec<String>,
    /// Favorite books, most meaningful first
    #[serde(default)]
    pub favorite_books: Vec<BookId>,
    /// Books currently being read
    #[serde(default)]
    pub reading_now: Vec<BookId>,
    /// Books the reader wants to get to
    #[serde(default)]
    pub wishlist: Vec<BookId>,
    /// Books the reader personally offers for lending
    #[serde(default)]
    pub shareable_books: Vec<BookId>,
}
