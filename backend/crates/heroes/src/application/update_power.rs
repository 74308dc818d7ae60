//! Update Power Use Case

use crate::domain::entities::Power;
use crate::domain::repository::PowerRepository;
use crate::domain::value_objects::PowerDescription;
use crate::error::{HeroesError, HeroesResult};
use kernel::id::PowerId;
use std::sync::Arc;

/// Input DTO for update power
#[derive(Debug, Clone)]
pub struct UpdatePowerInput {
    pub power_id: PowerId,
    /// Unvalidated; `None` when the field was absent
    pub description: Option<String>,
}

/// Update Power Use Case
pub struct UpdatePowerUseCase<P>
where
    P: PowerRepository,
{
    power_repo: Arc<P>,
}

impl<P> UpdatePowerUseCase<P>
where
    P: PowerRepository,
{
    pub fn new(power_repo: Arc<P>) -> Self {
        Self { power_repo }
    }

    pub async fn execute(&self, input: UpdatePowerInput) -> HeroesResult<Power> {
        // Existence is checked before the body is validated
        if self.power_repo.find(input.power_id).await?.is_none() {
            return Err(HeroesError::PowerNotFound);
        }

        let description = PowerDescription::parse(input.description)?;

        let power = self
            .power_repo
            .update_description(input.power_id, &description)
            .await?
            .ok_or(HeroesError::PowerNotFound)?;

        tracing::info!(
            power_id = %power.id,
            description_len = power.description.chars().count(),
            "Power updated"
        );

        Ok(power)
    }
}
