//! API DTOs (Data Transfer Objects)
//!
//! Each response type lists exactly the fields exposed for its entity.
//! Associations embed condensed sub-objects, never a back-reference to
//! their owner.

use crate::domain::entities::{Hero, HeroDetails, HeroPower, HeroPowerLink, Power};
use crate::domain::value_objects::Strength;
use kernel::id::{HeroId, HeroPowerId, PowerId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Hero in list form, and the condensed hero of an association
#[derive(Debug, Clone, Serialize)]
pub struct HeroSummary {
    pub id: HeroId,
    pub name: String,
    pub super_name: String,
}

impl From<Hero> for HeroSummary {
    fn from(hero: Hero) -> Self {
        Self {
            id: hero.id,
            name: hero.name,
            super_name: hero.super_name,
        }
    }
}

/// Response for GET /heroes/{id}
#[derive(Debug, Clone, Serialize)]
pub struct HeroDetail {
    pub id: HeroId,
    pub name: String,
    pub super_name: String,
    pub hero_powers: Vec<HeroPowerEntry>,
}

impl From<HeroDetails> for HeroDetail {
    fn from(details: HeroDetails) -> Self {
        Self {
            id: details.hero.id,
            name: details.hero.name,
            super_name: details.hero.super_name,
            hero_powers: details
                .hero_powers
                .into_iter()
                .map(HeroPowerEntry::from)
                .collect(),
        }
    }
}

/// An association as seen from its hero
#[derive(Debug, Clone, Serialize)]
pub struct HeroPowerEntry {
    pub id: HeroPowerId,
    pub strength: Strength,
    pub hero_id: HeroId,
    pub power_id: PowerId,
    pub power: PowerResponse,
}

impl From<HeroPowerLink> for HeroPowerEntry {
    fn from(link: HeroPowerLink) -> Self {
        Self {
            id: link.hero_power.id,
            strength: link.hero_power.strength,
            hero_id: link.hero_power.hero_id,
            power_id: link.hero_power.power_id,
            power: link.power.into(),
        }
    }
}

/// Power in both list and single form
#[derive(Debug, Clone, Serialize)]
pub struct PowerResponse {
    pub id: PowerId,
    pub name: String,
    pub description: String,
}

impl From<Power> for PowerResponse {
    fn from(power: Power) -> Self {
        Self {
            id: power.id,
            name: power.name,
            description: power.description,
        }
    }
}

/// Response for POST /hero_powers
#[derive(Debug, Clone, Serialize)]
pub struct HeroPowerResponse {
    pub id: HeroPowerId,
    pub strength: Strength,
    pub hero_id: HeroId,
    pub power_id: PowerId,
    pub hero: HeroSummary,
    pub power: PowerResponse,
}

impl HeroPowerResponse {
    pub fn new(hero_power: HeroPower, hero: Hero, power: Power) -> Self {
        Self {
            id: hero_power.id,
            strength: hero_power.strength,
            hero_id: hero_power.hero_id,
            power_id: hero_power.power_id,
            hero: hero.into(),
            power: power.into(),
        }
    }
}

/// Request for PATCH /powers/{id}
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePowerRequest {
    #[serde(default)]
    pub description: Option<String>,
}

/// Request for POST /hero_powers
///
/// Fields are kept as raw JSON so a wrongly typed value reaches validation
/// instead of failing in the decoder.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateHeroPowerRequest {
    #[serde(default)]
    pub strength: Option<Value>,
    #[serde(default)]
    pub hero_id: Option<Value>,
    #[serde(default)]
    pub power_id: Option<Value>,
}

impl CreateHeroPowerRequest {
    /// `None` unless the value is a JSON string
    pub fn strength(&self) -> Option<&str> {
        self.strength.as_ref().and_then(Value::as_str)
    }

    pub fn hero_id(&self) -> Option<HeroId> {
        self.hero_id.as_ref().and_then(reference_id).map(HeroId::new)
    }

    pub fn power_id(&self) -> Option<PowerId> {
        self.power_id.as_ref().and_then(reference_id).map(PowerId::new)
    }
}

// Integers and integer strings; anything else matches no row.
fn reference_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
