//! Hero Query Use Case

use crate::domain::entities::{Hero, HeroDetails};
use crate::domain::repository::HeroRepository;
use crate::error::{HeroesError, HeroesResult};
use kernel::id::HeroId;
use std::sync::Arc;

/// Read-only access to heroes
pub struct HeroQueryUseCase<H>
where
    H: HeroRepository,
{
    hero_repo: Arc<H>,
}

impl<H> HeroQueryUseCase<H>
where
    H: HeroRepository,
{
    pub fn new(hero_repo: Arc<H>) -> Self {
        Self { hero_repo }
    }

    pub async fn list(&self) -> HeroesResult<Vec<Hero>> {
        self.hero_repo.list().await
    }

    /// A single hero with its associations
    pub async fn details(&self, hero_id: HeroId) -> HeroesResult<HeroDetails> {
        self.hero_repo
            .find_details(hero_id)
            .await?
            .ok_or(HeroesError::HeroNotFound)
    }
}
