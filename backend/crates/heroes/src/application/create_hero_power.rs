//! Create HeroPower Use Case

use crate::domain::entities::{Hero, HeroPower, NewHeroPower, Power};
use crate::domain::repository::{HeroPowerRepository, HeroRepository, PowerRepository};
use crate::domain::value_objects::Strength;
use crate::error::{HeroesError, HeroesResult, ReferencedEntity};
use kernel::id::{HeroId, PowerId};
use std::sync::Arc;

/// Input DTO for create hero power
#[derive(Debug, Clone)]
pub struct CreateHeroPowerInput {
    pub strength: Option<String>,
    pub hero_id: Option<HeroId>,
    pub power_id: Option<PowerId>,
}

/// Output DTO for create hero power
#[derive(Debug, Clone)]
pub struct CreateHeroPowerOutput {
    pub hero_power: HeroPower,
    pub hero: Hero,
    pub power: Power,
}

/// Create HeroPower Use Case
pub struct CreateHeroPowerUseCase<H, P, L>
where
    H: HeroRepository,
    P: PowerRepository,
    L: HeroPowerRepository,
{
    hero_repo: Arc<H>,
    power_repo: Arc<P>,
    hero_power_repo: Arc<L>,
}

impl<H, P, L> CreateHeroPowerUseCase<H, P, L>
where
    H: HeroRepository,
    P: PowerRepository,
    L: HeroPowerRepository,
{
    pub fn new(hero_repo: Arc<H>, power_repo: Arc<P>, hero_power_repo: Arc<L>) -> Self {
        Self {
            hero_repo,
            power_repo,
            hero_power_repo,
        }
    }

    pub async fn execute(&self, input: CreateHeroPowerInput) -> HeroesResult<CreateHeroPowerOutput> {
        // Rejected before any lookup
        let strength = Strength::parse(input.strength.as_deref())?;

        let hero = match input.hero_id {
            Some(hero_id) => self.hero_repo.find(hero_id).await?,
            None => None,
        }
        .ok_or(HeroesError::MissingReference(ReferencedEntity::Hero))?;

        let power = match input.power_id {
            Some(power_id) => self.power_repo.find(power_id).await?,
            None => None,
        }
        .ok_or(HeroesError::MissingReference(ReferencedEntity::Power))?;

        let hero_power = self
            .hero_power_repo
            .create(&NewHeroPower::new(strength, &hero, &power))
            .await?;

        tracing::info!(
            hero_power_id = %hero_power.id,
            hero = %hero.name,
            power = %power.name,
            "Linked power to hero"
        );

        Ok(CreateHeroPowerOutput {
            hero_power,
            hero,
            power,
        })
    }
}
