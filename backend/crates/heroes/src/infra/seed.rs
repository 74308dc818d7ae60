//! Sample data for development databases
//!
//! Heroes and powers have no create endpoint, so a fresh database is only
//! useful once seeded.

use crate::domain::value_objects::Strength;
use sqlx::SqlitePool;

const HEROES: &[(&str, &str)] = &[
    ("Kamala Khan", "Ms. Marvel"),
    ("Doreen Green", "Squirrel Girl"),
    ("Gwen Stacy", "Spider-Gwen"),
    ("Janet Van Dyne", "The Wasp"),
    ("Wanda Maximoff", "Scarlet Witch"),
    ("Carol Danvers", "Captain Marvel"),
    ("Jean Grey", "Dark Phoenix"),
    ("Ororo Munroe", "Storm"),
    ("Kitty Pryde", "Shadowcat"),
    ("Elektra Natchios", "Elektra"),
];

const POWERS: &[(&str, &str)] = &[
    ("super strength", "gives the wielder super-human strengths"),
    (
        "flight",
        "gives the wielder the ability to fly through the skies at supersonic speed",
    ),
    (
        "super human senses",
        "allows the wielder to use her senses at a super-human level",
    ),
    (
        "elasticity",
        "can stretch the human body to extreme lengths",
    ),
];

/// (hero index, power index, strength), 1-based to match row ids
const HERO_POWERS: &[(i64, i64, Strength)] = &[
    (1, 2, Strength::Strong),
    (1, 3, Strength::Average),
    (2, 1, Strength::Weak),
    (3, 3, Strength::Strong),
    (4, 2, Strength::Average),
    (5, 4, Strength::Strong),
    (6, 1, Strength::Strong),
    (6, 2, Strength::Strong),
    (8, 2, Strength::Average),
    (9, 4, Strength::Weak),
];

/// Counts of inserted rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedReport {
    pub heroes: u64,
    pub powers: u64,
    pub hero_powers: u64,
}

/// Insert the sample data set in one transaction.
/// Does nothing if any hero already exists.
pub async fn seed_sample_data(pool: &SqlitePool) -> Result<SeedReport, sqlx::Error> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM heroes")
        .fetch_one(pool)
        .await?;

    if existing > 0 {
        tracing::info!(heroes = existing, "Database already seeded, skipping");
        return Ok(SeedReport::default());
    }

    let mut tx = pool.begin().await?;
    let mut report = SeedReport::default();

    for &(name, super_name) in HEROES {
        report.heroes += sqlx::query("INSERT INTO heroes (name, super_name) VALUES (?, ?)")
            .bind(name)
            .bind(super_name)
            .execute(&mut *tx)
            .await?
            .rows_affected();
    }

    for &(name, description) in POWERS {
        report.powers += sqlx::query("INSERT INTO powers (name, description) VALUES (?, ?)")
            .bind(name)
            .bind(description)
            .execute(&mut *tx)
            .await?
            .rows_affected();
    }

    for &(hero_id, power_id, strength) in HERO_POWERS {
        report.hero_powers +=
            sqlx::query("INSERT INTO hero_powers (strength, hero_id, power_id) VALUES (?, ?, ?)")
                .bind(strength.as_str())
                .bind(hero_id)
                .bind(power_id)
                .execute(&mut *tx)
                .await?
                .rows_affected();
    }

    tx.commit().await?;

    tracing::info!(
        heroes = report.heroes,
        powers = report.powers,
        hero_powers = report.hero_powers,
        "Seeded sample data"
    );

    Ok(report)
}
