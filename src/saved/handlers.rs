use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::json;
use tracing::{info, instrument};

use crate::{auth::jwt::AuthUser, error::ApiError, recipes, state::AppState};

use super::dto::{SaveRecipeRequest, SavedRecipeList, UnsaveParams};
use super::repo;

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/saved-recipes",
        get(list_saved).post(save_recipe).delete(unsave_recipe),
    )
}

#[instrument(skip(state))]
pub async fn list_saved(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<SavedRecipeList>, ApiError> {
    let saved_recipes = repo::list_for_user(&state.db, user.user_id).await?;
    Ok(Json(SavedRecipeList { saved_recipes }))
}

#[instrument(skip(state, payload))]
pub async fn save_recipe(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<SaveRecipeRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    if !recipes::repo::exists(&state.db, payload.recipe_id).await? {
        return Err(ApiError::not_found("Recipe not found"));
    }

    if !repo::save(&state.db, user.user_id, payload.recipe_id).await? {
        return Err(ApiError::conflict("Recipe already saved"));
    }

    info!(user_id = %user.user_id, recipe_id = %payload.recipe_id, "recipe saved");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Recipe saved successfully" })),
    ))
}

#[instrument(skip(state))]
pub async fn unsave_recipe(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<UnsaveParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let recipe_id = params
        .recipe_id
        .ok_or_else(|| ApiError::validation("Recipe ID is required"))?;

    repo::unsave(&state.db, user.user_id, recipe_id).await?;

    info!(user_id = %user.user_id, recipe_id = %recipe_id, "recipe unsaved");
    Ok(Json(json!({ "message": "Recipe removed from saved successfully" })))
}
