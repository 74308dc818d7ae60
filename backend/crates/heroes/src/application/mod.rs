//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! Contains use case implementations.

pub mod create_hero_power;
pub mod query_heroes;
pub mod query_powers;
pub mod update_power;

pub use create_hero_power::{CreateHeroPowerInput, CreateHeroPowerOutput, CreateHeroPowerUseCase};
pub use query_heroes::HeroQueryUseCase;
pub use query_powers::PowerQueryUseCase;
pub use update_power::{UpdatePowerInput, UpdatePowerUseCase};
