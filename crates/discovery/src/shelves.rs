//! Per-reader shelf resolution.

use booklet_catalog::{Book, BookId, Catalog, UserId};
use serde::Serialize;

/// The four resolved shelves of one reader, in the reader's own order.
///
/// Every entry borrows from the catalog the bundle was resolved against, so
/// a bundle is a cheap view rather than a copy of the records.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookBundle<'a> {
    pub favorites: Vec<&'a Book>,
    pub reading_now: Vec<&'a Book>,
    pub wishlist: Vec<&'a Book>,
    pub shareable: Vec<&'a Book>,
}

impl BookBundle<'_> {
    /// True when every shelf resolved empty (unknown reader or bare profile).
    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
            && self.reading_now.is_empty()
            && self.wishlist.is_empty()
            && self.shareable.is_empty()
    }
}

/// Resolve a reader's shelves against the catalog.
///
/// An unknown reader yields an empty bundle rather than an error, so callers
/// render an empty state instead of failing a whole page. Ids that resolve
/// to nothing are dropped entry by entry. The shareable shelf additionally
/// requires the catalog-level eligibility flag: a personal listing alone
/// never puts a book on offer.
pub fn resolve_user_books(catalog: &Catalog, user_id: UserId) -> BookBundle<'_> {
    let user = match catalog.user(user_id) {
        Some(user) => user,
        None => {
            tracing::debug!(user_id, "shelf resolution for unknown reader");
            return BookBundle::default();
        }
    };

    BookBundle {
        favorites: resolve_ids(catalog, &user.favorite_books),
        reading_now: resolve_ids(catalog, &user.reading_now),
        wishlist: resolve_ids(catalog, &user.wishlist),
        shareable: resolve_ids(catalog, &user.shareable_books)
            .into_iter()
            .filter(|book| book.shareable)
            .collect(),
    }
}

/// Resolve ids in order, dropping the ones that point at nothing.
fn resolve_ids<'a>(catalog: &'a Catalog, ids: &[BookId]) -> Vec<&'a Book> {
    ids.iter()
        .filter_map(|&id| {
            let book = catalog.book(id);
            if book.is_none() {
                tracing::debug!(book_id = id, "dropping dangling book reference");
            }
            book
        })
        .collect()
}
