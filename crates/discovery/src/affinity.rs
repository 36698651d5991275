//! Reader affinity: who shares your taste, and through which books.

use std::collections::HashSet;

use booklet_catalog::{Book, BookId, Catalog, User, UserId};
use serde::Serialize;

/// Threshold applied by callers that do not raise the bar: any overlap
/// qualifies. The threshold is always an explicit argument to
/// [`find_similar_users`]; profile-style callers typically pass 2.
pub const DEFAULT_MIN_COMMON: usize = 1;

/// One scored connection between the target reader and another reader.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Affinity<'a> {
    /// The matched reader.
    pub user: &'a User,
    /// Books both interest sets contain, in the order the target reader
    /// listed them.
    pub common_books: Vec<&'a Book>,
    /// Number of books in common; always equals `common_books.len()`.
    pub common_count: usize,
}

/// Find readers whose interest set overlaps the target reader's.
///
/// The interest set is favorites plus currently-reading, the shelves that
/// reflect established taste. Wishlist and shareable shelves represent
/// intent and supply and do not score. Candidates below `min_common` are
/// skipped; the target is never included. Results are ordered by overlap
/// size, largest first, with ties broken by ascending reader id so the
/// ordering is reproducible.
///
/// An unknown target yields no matches, as does a catalog with no other
/// readers.
pub fn find_similar_users<'a>(
    catalog: &'a Catalog,
    user_id: UserId,
    min_common: usize,
) -> Vec<Affinity<'a>> {
    let target = match catalog.user(user_id) {
        Some(user) => user,
        None => {
            tracing::debug!(user_id, "affinity query for unknown reader");
            return Vec::new();
        }
    };

    let target_interest = interest_ids(catalog, target);
    let mut matches = Vec::new();

    for candidate in catalog.users() {
        if candidate.id == target.id {
            continue;
        }

        let candidate_interest: HashSet<BookId> =
            interest_ids(catalog, candidate).into_iter().collect();

        let common_books: Vec<&Book> = target_interest
            .iter()
            .copied()
            .filter(|id| candidate_interest.contains(id))
            .filter_map(|id| catalog.book(id))
            .collect();

        let common_count = common_books.len();
        if common_count < min_common {
            continue;
        }

        matches.push(Affinity {
            user: candidate,
            common_books,
            common_count,
        });
    }

    matches.sort_by(|a, b| {
        b.common_count
            .cmp(&a.common_count)
            .then_with(|| a.user.id.cmp(&b.user.id))
    });

    tracing::debug!(
        user_id,
        min_common,
        matches = matches.len(),
        "affinity query resolved"
    );

    matches
}

/// A reader's interest set: favorites then currently-reading, first listing
/// wins on repeats. Ids that resolve nowhere in the catalog are excluded so
/// they can never contribute to a score.
fn interest_ids(catalog: &Catalog, user: &User) -> Vec<BookId> {
    let mut seen = HashSet::new();
    user.favorite_books
        .iter()
        .chain(user.reading_now.iter())
        .copied()
        .filter(|&id| catalog.contains_book(id) && seen.insert(id))
        .collect()
}
