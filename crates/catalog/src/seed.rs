//! Seed documents: how a catalog gets into memory.
//!
//! The wire format is the JSON export of the original Booklet dataset
//! (camelCase keys). Installations point at a seed file through settings; a
//! compiled-in copy backs processes that configure nothing.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::SeedError;
use crate::models::{Book, User};
use crate::store::Catalog;

/// Top-level seed document: the full record set for one catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub books: Vec<Book>,
    #[serde(default)]
    pub users: Vec<User>,
}

const BUILTIN_SEED: &str = include_str!("../data/seed.json");

impl Catalog {
    /// Parse a catalog from a JSON seed document held in memory.
    pub fn from_json_str(raw: &str) -> Result<Self, SeedError> {
        let seed: Seed = serde_json::from_str(raw)?;
        Ok(Self::new(seed.books, seed.users))
    }

    /// Load a catalog from a seed file on disk.
    pub fn from_path(path: &Path) -> Result<Self, SeedError> {
        let raw = fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), bytes = raw.len(), "catalog seed read");
        Self::from_json_str(&raw)
    }

    /// The dataset compiled into the crate.
    ///
    /// Panics only if the bundled JSON is corrupt, which
    /// `builtin_seed_parses` guards at test time.
    pub fn builtin() -> Self {
        Self::from_json_str(BUILTIN_SEED).expect("bundled seed data is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::path::PathBuf;

    #[test]
    fn minimal_seed_parses() {
        let catalog = Catalog::from_json_str(
            r#"{
                "books": [
                    {
                        "id": 1,
                        "title": "Dune",
                        "author": "Frank Herbert",
                        "coverImage": "/images/covers/dune.jpg",
                        "genre": "science-fiction",
                        "shareable": true,
                        "sharingFormat": "Paperback",
                        "sharingCondition": "Good"
                    }
                ],
                "users": [
                    {
                        "id": 1,
                        "name": "Amelia Chen",
                        "avatar": "/images/avatars/amelia.jpg",
                        "location": "Portland, OR",
                        "bio": "Reads in the rain.",
                        "readingVibe": ["Fiction Explorer"],
                        "favoriteBooks": [1]
                    }
                ]
            }"#,
        )
        .expect("seed parses");

        assert_eq!(catalog.book_count(), 1);
        assert_eq!(catalog.user_count(), 1);
        assert_eq!(
            catalog.book(1).and_then(|b| b.sharing_format.as_deref()),
            Some("Paperback")
        );
        // Omitted shelves default to empty rather than failing the load.
        assert_eq!(catalog.user(1).map(|u| u.reading_now.len()), Some(0));
    }

    #[test]
    fn empty_document_yields_an_empty_catalog() {
        let catalog = Catalog::from_json_str("{}").expect("empty seed parses");

        assert_eq!(catalog.book_count(), 0);
        assert_eq!(catalog.user_count(), 0);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let error = Catalog::from_json_str("{\"books\": [").expect_err("must fail");
        assert!(matches!(error, SeedError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = PathBuf::from("/definitely/not/here/seed.json");
        let error = Catalog::from_path(&path).expect_err("must fail");

        match error {
            SeedError::Io { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn seed_file_on_disk_loads() {
        let path = PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/data/seed.json"));
        let catalog = Catalog::from_path(&path).expect("bundled file loads");

        assert!(catalog.book_count() > 0);
    }

    #[test]
    fn builtin_seed_parses() {
        let catalog = Catalog::builtin();

        assert!(catalog.book_count() > 0);
        assert!(catalog.user_count() > 0);
    }

    #[test]
    fn builtin_seed_ids_are_unique() {
        let catalog = Catalog::builtin();

        let book_ids: HashSet<_> = catalog.books().iter().map(|b| b.id).collect();
        let user_ids: HashSet<_> = catalog.users().iter().map(|u| u.id).collect();

        assert_eq!(book_ids.len(), catalog.book_count());
        assert_eq!(user_ids.len(), catalog.user_count());
    }

    #[test]
    fn builtin_seed_references_resolve() {
        let catalog = Catalog::builtin();

        for user in catalog.users() {
            for &id in user
                .favorite_books
                .iter()
                .chain(&user.reading_now)
                .chain(&user.wishlist)
                .chain(&user.shareable_books)
            {
                assert!(
                    catalog.contains_book(id),
                    "user {} references missing book {id}",
                    user.id
                );
            }
        }
    }

    #[test]
    fn builtin_seed_personal_shares_are_eligible() {
        // Shipped data honors the flag-and-listing policy so every listed
        // copy is actually on offer.
        let catalog = Catalog::builtin();

        for user in catalog.users() {
            for &id in &user.shareable_books {
                let book = catalog.book(id).expect("reference resolves");
                assert!(
                    book.shareable,
                    "user {} lists ineligible book {id}",
                    user.id
                );
            }
        }
    }
}
