//! Power Query Use Case

use crate::domain::entities::Power;
use crate::domain::repository::PowerRepository;
use crate::error::{HeroesError, HeroesResult};
use kernel::id::PowerId;
use std::sync::Arc;

/// Read-only access to powers
pub struct PowerQueryUseCase<P>
where
    P: PowerRepository,
{
    power_repo: Arc<P>,
}

impl<P> PowerQueryUseCase<P>
where
    P: PowerRepository,
{
    pub fn new(power_repo: Arc<P>) -> Self {
        Self { power_repo }
    }

    pub async fn list(&self) -> HeroesResult<Vec<Power>> {
        self.power_repo.list().await
    }

    pub async fn get(&self, power_id: PowerId) -> HeroesResult<Power> {
        self.power_repo
            .find(power_id)
            .await?
            .ok_or(HeroesError::PowerNotFound)
    }
}
