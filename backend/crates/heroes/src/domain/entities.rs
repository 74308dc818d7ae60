//! Domain Entities
//!
//! Stored records of the heroes domain.

use crate::domain::value_objects::Strength;
use kernel::id::{HeroId, HeroPowerId, PowerId};

/// Hero entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    pub id: HeroId,
    pub name: String,
    pub super_name: String,
}

/// Power entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Power {
    pub id: PowerId,
    pub name: String,
    pub description: String,
}

/// HeroPower entity - association between a hero and a power
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroPower {
    pub id: HeroPowerId,
    pub strength: Strength,
    pub hero_id: HeroId,
    pub power_id: PowerId,
}

/// A validated association waiting to be inserted
#[derive(Debug, Clone)]
pub struct NewHeroPower {
    pub strength: Strength,
    pub hero_id: HeroId,
    pub power_id: PowerId,
}

impl NewHeroPower {
    /// Link an existing hero and power
    pub fn new(strength: Strength, hero: &Hero, power: &Power) -> Self {
        Self {
            strength,
            hero_id: hero.id,
            power_id: power.id,
        }
    }
}

/// An association together with the power it points to
#[derive(Debug, Clone)]
pub struct HeroPowerLink {
    pub hero_power: HeroPower,
    pub power: Power,
}

/// A hero with all of its associations
#[derive(Debug, Clone)]
pub struct HeroDetails {
    pub hero: Hero,
    pub hero_powers: Vec<HeroPowerLink>,
}
