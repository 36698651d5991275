//! Discovery queries for the Booklet catalog.
//!
//! Everything here is a pure, synchronous function over an immutable
//! [`Catalog`](booklet_catalog::Catalog): resolve one reader's shelves, find
//! readers with overlapping taste, list what the community lends. Each call
//! recomputes its projection with no caches and no locks, so any number of
//! threads may query one catalog at the same time.
//!
//! "Not found" is never an error at this layer. Unknown readers resolve to
//! empty bundles or empty match lists, and dangling book references drop out
//! entry by entry, so one bad id cannot fail an entire page's data.

pub mod affinity;
pub mod browse;
pub mod shelves;

pub use affinity::{find_similar_users, Affinity, DEFAULT_MIN_COMMON};
pub use browse::{featured_books, featured_readers, shareable_books};
pub use shelves::{resolve_user_books, BookBundle};
