//! Heroes Router

use crate::domain::repository::{HeroPowerRepository, HeroRepository, PowerRepository};
use crate::infra::sqlite::SqliteHeroesRepository;
use crate::presentation::handlers::{self, HeroesAppState};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

/// Create the heroes router with the SQLite repository
pub fn heroes_router(repo: SqliteHeroesRepository) -> Router {
    heroes_router_generic(repo)
}

/// Create a generic heroes router for any repository implementation
pub fn heroes_router_generic<R>(repo: R) -> Router
where
    R: HeroRepository + PowerRepository + HeroPowerRepository + Clone + Send + Sync + 'static,
{
    let state = HeroesAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/", get(handlers::index))
        .route("/heroes", get(handlers::list_heroes::<R>))
        .route("/heroes/{id}", get(handlers::get_hero::<R>))
        .route("/powers", get(handlers::list_powers::<R>))
        .route(
            "/powers/{id}",
            get(handlers::get_power::<R>).patch(handlers::update_power::<R>),
        )
        .route("/hero_powers", post(handlers::create_hero_power::<R>))
        .with_state(state)
}
