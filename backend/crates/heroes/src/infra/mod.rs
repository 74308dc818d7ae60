//! Infrastructure Layer
//!
//! Database implementations, schema bootstrap and seed data.

pub mod schema;
pub mod seed;
pub mod sqlite;

pub use sqlite::SqliteHeroesRepository;
