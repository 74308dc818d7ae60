//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Hero, Power, HeroPower)
//! - Domain value objects (Strength, PowerDescription)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod value_objects;
