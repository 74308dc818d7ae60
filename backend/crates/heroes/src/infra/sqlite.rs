//! SQLite Repository Implementations

use crate::domain::entities::{Hero, HeroDetails, HeroPower, HeroPowerLink, NewHeroPower, Power};
use crate::domain::repository::{HeroPowerRepository, HeroRepository, PowerRepository};
use crate::domain::value_objects::{PowerDescription, Strength};
use crate::error::{HeroesError, HeroesResult};
use kernel::id::{HeroId, PowerId};
use sqlx::{Sqlite, SqlitePool, Transaction};

/// SQLite-backed repository
#[derive(Clone)]
pub struct SqliteHeroesRepository {
    pool: SqlitePool,
}

impl SqliteHeroesRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn begin(&self) -> HeroesResult<Transaction<'static, Sqlite>> {
        self.pool.begin().await.map_err(HeroesError::Commit)
    }
}

/// Commit on success, roll back on failure. Every error inside a write
/// transaction surfaces as [`HeroesError::Commit`].
async fn finish<T>(
    tx: Transaction<'static, Sqlite>,
    result: Result<T, sqlx::Error>,
) -> HeroesResult<T> {
    match result {
        Ok(value) => {
            tx.commit().await.map_err(HeroesError::Commit)?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::error!(error = %rollback_err, "Rollback failed");
            } else {
                tracing::warn!(error = %e, "Transaction rolled back");
            }
            Err(HeroesError::Commit(e))
        }
    }
}

impl HeroRepository for SqliteHeroesRepository {
    async fn list(&self) -> HeroesResult<Vec<Hero>> {
        let rows = sqlx::query_as::<_, HeroRow>("SELECT id, name, super_name FROM heroes ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(HeroRow::into_hero).collect())
    }

    async fn find(&self, hero_id: HeroId) -> HeroesResult<Option<Hero>> {
        let row =
            sqlx::query_as::<_, HeroRow>("SELECT id, name, super_name FROM heroes WHERE id = ?")
                .bind(hero_id.get())
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(HeroRow::into_hero))
    }

    async fn find_details(&self, hero_id: HeroId) -> HeroesResult<Option<HeroDetails>> {
        let Some(hero) = HeroRepository::find(self, hero_id).await? else {
            return Ok(None);
        };

        let rows = sqlx::query_as::<_, HeroPowerLinkRow>(
            r#"
            SELECT
                hp.id,
                hp.strength,
                hp.hero_id,
                hp.power_id,
                p.name AS power_name,
                p.description AS power_description
            FROM hero_powers hp
            JOIN powers p ON p.id = hp.power_id
            WHERE hp.hero_id = ?
            ORDER BY hp.id
            "#,
        )
        .bind(hero_id.get())
        .fetch_all(&self.pool)
        .await?;

        let hero_powers = rows
            .into_iter()
            .map(HeroPowerLinkRow::into_link)
            .collect::<HeroesResult<Vec<_>>>()?;

        Ok(Some(HeroDetails { hero, hero_powers }))
    }
}

impl PowerRepository for SqliteHeroesRepository {
    async fn list(&self) -> HeroesResult<Vec<Power>> {
        let rows =
            sqlx::query_as::<_, PowerRow>("SELECT id, name, description FROM powers ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(PowerRow::into_power).collect())
    }

    async fn find(&self, power_id: PowerId) -> HeroesResult<Option<Power>> {
        let row =
            sqlx::query_as::<_, PowerRow>("SELECT id, name, description FROM powers WHERE id = ?")
                .bind(power_id.get())
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(PowerRow::into_power))
    }

    async fn update_description(
        &self,
        power_id: PowerId,
        description: &PowerDescription,
    ) -> HeroesResult<Option<Power>> {
        let mut tx = self.begin().await?;

        let result = sqlx::query_as::<_, PowerRow>(
            r#"
            UPDATE powers
            SET description = ?
            WHERE id = ?
            RETURNING id, name, description
            "#,
        )
        .bind(description.as_str())
        .bind(power_id.get())
        .fetch_optional(&mut *tx)
        .await;

        let row = finish(tx, result).await?;

        if row.is_some() {
            tracing::info!(power_id = %power_id, "Power description updated");
        }

        Ok(row.map(PowerRow::into_power))
    }
}

impl HeroPowerRepository for SqliteHeroesRepository {
    async fn create(&self, hero_power: &NewHeroPower) -> HeroesResult<HeroPower> {
        let mut tx = self.begin().await?;

        let result = sqlx::query_as::<_, HeroPowerRow>(
            r#"
            INSERT INTO hero_powers (strength, hero_id, power_id)
            VALUES (?, ?, ?)
            RETURNING id, strength, hero_id, power_id
            "#,
        )
        .bind(hero_power.strength.as_str())
        .bind(hero_power.hero_id.get())
        .bind(hero_power.power_id.get())
        .fetch_one(&mut *tx)
        .await;

        let created = finish(tx, result).await?.into_hero_power()?;

        tracing::info!(
            hero_power_id = %created.id,
            hero_id = %created.hero_id,
            power_id = %created.power_id,
            strength = %created.strength,
            "HeroPower created"
        );

        Ok(created)
    }
}

// Internal row types for sqlx mapping
#[derive(sqlx::FromRow)]
struct HeroRow {
    id: i64,
    name: String,
    super_name: String,
}

impl HeroRow {
    fn into_hero(self) -> Hero {
        Hero {
            id: HeroId::new(self.id),
            name: self.name,
            super_name: self.super_name,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PowerRow {
    id: i64,
    name: String,
    description: String,
}

impl PowerRow {
    fn into_power(self) -> Power {
        Power {
            id: PowerId::new(self.id),
            name: self.name,
            description: self.description,
        }
    }
}

#[derive(sqlx::FromRow)]
struct HeroPowerRow {
    id: i64,
    strength: String,
    hero_id: i64,
    power_id: i64,
}

impl HeroPowerRow {
    fn into_hero_power(self) -> HeroesResult<HeroPower> {
        Ok(HeroPower {
            id: self.id.into(),
            strength: parse_stored_strength(self.id, &self.strength)?,
            hero_id: self.hero_id.into(),
            power_id: self.power_id.into(),
        })
    }
}

#[derive(sqlx::FromRow)]
struct HeroPowerLinkRow {
    id: i64,
    strength: String,
    hero_id: i64,
    power_id: i64,
    power_name: String,
    power_description: String,
}

impl HeroPowerLinkRow {
    fn into_link(self) -> HeroesResult<HeroPowerLink> {
        Ok(HeroPowerLink {
            hero_power: HeroPower {
                id: self.id.into(),
                strength: parse_stored_strength(self.id, &self.strength)?,
                hero_id: self.hero_id.into(),
                power_id: self.power_id.into(),
            },
            power: Power {
                id: self.power_id.into(),
                name: self.power_name,
                description: self.power_description,
            },
        })
    }
}

fn parse_stored_strength(hero_power_id: i64, raw: &str) -> HeroesResult<Strength> {
    raw.parse().map_err(|_| {
        HeroesError::Internal(format!(
            "hero_power {hero_power_id} has unknown strength {raw:?}"
        ))
    })
}
