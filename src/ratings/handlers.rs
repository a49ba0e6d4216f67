use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde_json::json;
use tracing::{info, instrument};

use crate::{auth::jwt::AuthUser, error::ApiError, recipes, state::AppState};

use super::dto::SubmitRatingRequest;
use super::repo;

pub fn routes() -> Router<AppState> {
    Router::new().route("/ratings", post(submit_rating))
}

fn validate_rating(rating: i32) -> Result<(), ApiError> {
    if !(1..=5).contains(&rating) {
        return Err(ApiError::validation("Rating must be between 1 and 5"));
    }
    Ok(())
}

#[instrument(skip(state, payload))]
pub async fn submit_rating(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<SubmitRatingRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    // Range check happens before any query.
    validate_rating(payload.rating)?;

    if !recipes::repo::exists(&state.db, payload.recipe_id).await? {
        return Err(ApiError::not_found("Recipe not found"));
    }

    let inserted = repo::upsert(
        &state.db,
        user.user_id,
        payload.recipe_id,
        payload.rating,
        &payload.review,
    )
    .await?;

    info!(
        user_id = %user.user_id,
        recipe_id = %payload.recipe_id,
        rating = %payload.rating,
        inserted,
        "rating submitted"
    );

    if inserted {
        Ok((
            StatusCode::CREATED,
            Json(json!({ "message": "Rating submitted successfully" })),
        ))
    } else {
        Ok((
            StatusCode::OK,
            Json(json!({ "message": "Rating updated successfully" })),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_ratings_pass() {
        for r in 1..=5 {
            assert!(validate_rating(r).is_ok());
        }
    }

    #[test]
    fn out_of_range_ratings_fail_validation() {
        for r in [0, 6, -1, 100] {
            assert!(matches!(
                validate_rating(r),
                Err(ApiError::Validation(_))
            ));
        }
    }
}
