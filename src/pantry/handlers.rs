use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::json;
use tracing::{info, instrument};

use crate::{auth::jwt::AuthUser, error::ApiError, state::AppState};

use super::dto::{AddIngredientRequest, PantryList, RemoveParams};
use super::repo;

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/user/ingredients",
        get(list_pantry).post(add_ingredient).delete(remove_ingredient),
    )
}

#[instrument(skip(state))]
pub async fn list_pantry(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<PantryList>, ApiError> {
    let ingredients = repo::list_for_user(&state.db, user.user_id).await?;
    Ok(Json(PantryList { ingredients }))
}

#[instrument(skip(state, payload))]
pub async fn add_ingredient(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<AddIngredientRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    if !repo::ingredient_exists(&state.db, payload.ingredient_id).await? {
        return Err(ApiError::not_found("Ingredient not found"));
    }

    if !repo::add(&state.db, user.user_id, payload.ingredient_id).await? {
        return Err(ApiError::conflict("Ingredient already added"));
    }

    info!(user_id = %user.user_id, ingredient_id = %payload.ingredient_id, "pantry ingredient added");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Ingredient added successfully" })),
    ))
}

#[instrument(skip(state))]
pub async fn remove_ingredient(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<RemoveParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let ingredient_id = params
        .ingredient_id
        .ok_or_else(|| ApiError::validation("Ingredient ID is required"))?;

    repo::remove(&state.db, user.user_id, ingredient_id).await?;

    info!(user_id = %user.user_id, ingredient_id = %ingredient_id, "pantry ingredient removed");
    Ok(Json(json!({ "message": "Ingredient removed successfully" })))
}
