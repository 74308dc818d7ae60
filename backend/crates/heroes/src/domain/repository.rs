//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entities::{Hero, HeroDetails, HeroPower, NewHeroPower, Power};
use crate::domain::value_objects::PowerDescription;
use crate::error::HeroesResult;
use kernel::id::{HeroId, PowerId};

/// Hero repository trait
#[trait_variant::make(HeroRepository: Send)]
pub trait LocalHeroRepository {
    /// All heroes in storage order
    async fn list(&self) -> HeroesResult<Vec<Hero>>;

    async fn find(&self, hero_id: HeroId) -> HeroesResult<Option<Hero>>;

    /// Hero with its associations and their powers
    async fn find_details(&self, hero_id: HeroId) -> HeroesResult<Option<HeroDetails>>;
}

/// Power repository trait
#[trait_variant::make(PowerRepository: Send)]
pub trait LocalPowerRepository {
    /// All powers in storage order
    async fn list(&self) -> HeroesResult<Vec<Power>>;

    async fn find(&self, power_id: PowerId) -> HeroesResult<Option<Power>>;

    /// Replace the description in a single transaction.
    /// Returns `None` if the row no longer exists.
    async fn update_description(
        &self,
        power_id: PowerId,
        description: &PowerDescription,
    ) -> HeroesResult<Option<Power>>;
}

/// HeroPower repository trait
#[trait_variant::make(HeroPowerRepository: Send)]
pub trait LocalHeroPowerRepository {
    /// Insert an association in a single transaction, rolling back on failure
    async fn create(&self, hero_power: &NewHeroPower) -> HeroesResult<HeroPower>;
}
