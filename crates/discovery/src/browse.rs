//! Catalog-wide browse queries backing the landing and sharing views.

use booklet_catalog::{Book, Catalog, User};

/// Every book the catalog is willing to lend, in load order.
///
/// This is the global sharing listing: it consults only the catalog-level
/// eligibility flag, independent of any reader's personal shelf.
pub fn shareable_books(catalog: &Catalog) -> Vec<&Book> {
    catalog
        .books()
        .iter()
        .filter(|book| book.shareable)
        .collect()
}

/// The leading books of the catalog, for the featured rail.
pub fn featured_books(catalog: &Catalog, limit: usize) -> &[Book] {
    let end = limit.min(catalog.books().len());
    &catalog.books()[..end]
}

/// The leading readers of the catalog, for the featured rail.
pub fn featured_readers(catalog: &Catalog, limit: usize) -> &[User] {
    let end = limit.min(catalog.users().len());
    &catalog.users()[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use booklet_catalog::{BookId, UserId};

    fn book(id: BookId, shareable: bool) -> Book {
        Book {
            id,
            title: format!("Book {id}"),
            author: "Author".to_string(),
            cover_image: format!("/images/covers/{id}.jpg"),
            genre: "fiction".to_string(),
            shareable,
            sharing_format: shareable.then(|| "Paperback".to_string()),
            sharing_condition: shareable.then(|| "Good".to_string()),
        }
    }

    fn reader(id: UserId, shareable_books: Vec<BookId>) -> User {
        User {
            id,
            name: format!("Reader {id}"),
            avatar: format!("/images/avatars/{id}.jpg"),
            location: "Testville".to_string(),
            bio: String::new(),
            reading_vibe: Vec::new(),
            favorite_books: Vec::new(),
            reading_now: Vec::new(),
            wishlist: Vec::new(),
            shareable_books,
        }
    }

    #[test]
    fn only_eligible_books_are_listed() {
        // Reader 1 personally lists book 2, but the flag decides: 2 stays
        // out, and 3 is in despite no reader listing it.
        let catalog = Catalog::new(
            vec![book(1, true), book(2, false), book(3, true)],
            vec![reader(1, vec![2])],
        );

        let listed: Vec<BookId> = shareable_books(&catalog).iter().map(|b| b.id).collect();
        assert_eq!(listed, [1, 3]);
    }

    #[test]
    fn featured_slices_keep_load_order() {
        let catalog = Catalog::new(
            vec![book(5, true), book(1, true), book(7, true)],
            vec![reader(1, vec![]), reader(2, vec![])],
        );

        let featured: Vec<BookId> = featured_books(&catalog, 2).iter().map(|b| b.id).collect();
        assert_eq!(featured, [5, 1]);
    }

    #[test]
    fn featured_limits_clamp_to_collection_size() {
        let catalog = Catalog::new(vec![book(1, true)], vec![reader(1, vec![])]);

        assert_eq!(featured_books(&catalog, 10).len(), 1);
        assert_eq!(featured_readers(&catalog, 10).len(), 1);
        assert!(featured_books(&catalog, 0).is_empty());
    }
}
