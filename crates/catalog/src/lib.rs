//! The Booklet catalog: every book and reader record for one process.
//!
//! A [`Catalog`] is populated once at startup, from a JSON seed file or the
//! compiled-in dataset, and never mutated afterwards. All downstream queries
//! are pure projections over it, so a single instance can back any number of
//! concurrent readers.

pub mod error;
pub mod models;
pub mod seed;
pub mod store;

pub use error::SeedError;
pub use models::{Book, BookId, User, UserId};
pub use seed::Seed;
pub use store::Catalog;
