//! HTTP Handlers

use crate::application::{
    CreateHeroPowerInput, CreateHeroPowerUseCase, HeroQueryUseCase, PowerQueryUseCase,
    UpdatePowerInput, UpdatePowerUseCase,
};
use crate::domain::repository::{HeroPowerRepository, HeroRepository, PowerRepository};
use crate::domain::value_objects::ValidationError;
use crate::error::{HeroesError, HeroesResult};
use crate::presentation::dto::{
    CreateHeroPowerRequest, HeroDetail, HeroPowerResponse, HeroSummary, PowerResponse,
    UpdatePowerRequest,
};
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use kernel::id::{HeroId, PowerId};
use std::sync::Arc;

/// Shared state for heroes handlers
#[derive(Clone)]
pub struct HeroesAppState<R>
where
    R: HeroRepository + PowerRepository + HeroPowerRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// GET /
pub async fn index() -> Html<&'static str> {
    Html("<h1>Code Challenge</h1>")
}

// ============================================================================
// Heroes
// ============================================================================

/// GET /heroes
pub async fn list_heroes<R>(
    State(state): State<HeroesAppState<R>>,
) -> HeroesResult<Json<Vec<HeroSummary>>>
where
    R: HeroRepository + PowerRepository + HeroPowerRepository + Clone + Send + Sync + 'static,
{
    let heroes = HeroQueryUseCase::new(state.repo.clone()).list().await?;

    Ok(Json(heroes.into_iter().map(HeroSummary::from).collect()))
}

/// GET /heroes/{id}
pub async fn get_hero<R>(
    State(state): State<HeroesAppState<R>>,
    path: Result<Path<i64>, PathRejection>,
) -> HeroesResult<Json<HeroDetail>>
where
    R: HeroRepository + PowerRepository + HeroPowerRepository + Clone + Send + Sync + 'static,
{
    // A non-integer id cannot match any row
    let Ok(Path(id)) = path else {
        return Err(HeroesError::HeroNotFound);
    };

    let details = HeroQueryUseCase::new(state.repo.clone())
        .details(HeroId::new(id))
        .await?;

    Ok(Json(details.into()))
}

// ============================================================================
// Powers
// ============================================================================

/// GET /powers
pub async fn list_powers<R>(
    State(state): State<HeroesAppState<R>>,
) -> HeroesResult<Json<Vec<PowerResponse>>>
where
    R: HeroRepository + PowerRepository + HeroPowerRepository + Clone + Send + Sync + 'static,
{
    let powers = PowerQueryUseCase::new(state.repo.clone()).list().await?;

    Ok(Json(powers.into_iter().map(PowerResponse::from).collect()))
}

/// GET /powers/{id}
pub async fn get_power<R>(
    State(state): State<HeroesAppState<R>>,
    path: Result<Path<i64>, PathRejection>,
) -> HeroesResult<Json<PowerResponse>>
where
    R: HeroRepository + PowerRepository + HeroPowerRepository + Clone + Send + Sync + 'static,
{
    let power_id = power_id_from_path(path)?;

    let power = PowerQueryUseCase::new(state.repo.clone())
        .get(power_id)
        .await?;

    Ok(Json(power.into()))
}

/// PATCH /powers/{id}
pub async fn update_power<R>(
    State(state): State<HeroesAppState<R>>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<UpdatePowerRequest>, JsonRejection>,
) -> HeroesResult<Json<PowerResponse>>
where
    R: HeroRepository + PowerRepository + HeroPowerRepository + Clone + Send + Sync + 'static,
{
    let power_id = power_id_from_path(path)?;

    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => {
            // A missing power is reported before a malformed body
            PowerQueryUseCase::new(state.repo.clone())
                .get(power_id)
                .await?;
            return Err(malformed_body(rejection));
        }
    };

    let power = UpdatePowerUseCase::new(state.repo.clone())
        .execute(UpdatePowerInput {
            power_id,
            description: req.description,
        })
        .await?;

    Ok(Json(power.into()))
}

// ============================================================================
// Hero Powers
// ============================================================================

/// POST /hero_powers
pub async fn create_hero_power<R>(
    State(state): State<HeroesAppState<R>>,
    body: Result<Json<CreateHeroPowerRequest>, JsonRejection>,
) -> HeroesResult<(StatusCode, Json<HeroPowerResponse>)>
where
    R: HeroRepository + PowerRepository + HeroPowerRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = body.map_err(malformed_body)?;

    let use_case =
        CreateHeroPowerUseCase::new(state.repo.clone(), state.repo.clone(), state.repo.clone());

    let output = use_case
        .execute(CreateHeroPowerInput {
            strength: req.strength().map(str::to_owned),
            hero_id: req.hero_id(),
            power_id: req.power_id(),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(HeroPowerResponse::new(
            output.hero_power,
            output.hero,
            output.power,
        )),
    ))
}

fn power_id_from_path(path: Result<Path<i64>, PathRejection>) -> HeroesResult<PowerId> {
    match path {
        Ok(Path(id)) => Ok(PowerId::new(id)),
        Err(_) => Err(HeroesError::PowerNotFound),
    }
}

fn malformed_body(rejection: JsonRejection) -> HeroesError {
    ValidationError::MalformedBody(rejection.body_text()).into()
}
