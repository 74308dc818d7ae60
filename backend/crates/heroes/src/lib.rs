//! Heroes Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases
//! - `infra/` - SQLite implementations, schema bootstrap, seed data
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Write Model
//! - Input is validated into value objects before any storage access
//! - Every write runs in its own transaction; any failure rolls it back
//! - Heroes and powers are read-only over HTTP, associations are insert-only

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{HeroesError, HeroesResult};
pub use infra::sqlite::SqliteHeroesRepository;
pub use presentation::router::{heroes_router, heroes_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod store {
    pub use crate::infra::sqlite::SqliteHeroesRepository as HeroesStore;
}
