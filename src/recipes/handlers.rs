use std::collections::BTreeSet;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

use super::dto::{NutrientSummary, RecipeDetail, RecipeList, SearchParams};
use super::repo;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/recipes", get(search_recipes))
        .route("/recipes/:id", get(recipe_detail))
}

/// Splits the comma-separated `ingredients` query parameter into the search
/// set: entries are trimmed, lower-cased and deduplicated, blanks dropped.
/// The resulting length is the matcher threshold, so repeats must collapse
/// to one entry.
fn parse_ingredient_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[instrument(skip(state))]
pub async fn search_recipes(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<RecipeList>, ApiError> {
    let names = params
        .ingredients
        .as_deref()
        .map(parse_ingredient_names)
        .unwrap_or_default();

    let recipes = repo::search(&state.db, &names).await?;
    Ok(Json(RecipeList { recipes }))
}

/// Composes the five facts of the detail view. Absent ingredients, steps or
/// nutrients render as empty/default sections; only a missing base recipe
/// row is a 404.
#[instrument(skip(state))]
pub async fn recipe_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<RecipeDetail>, ApiError> {
    let base = repo::fetch_base(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Recipe not found"))?;

    let ingredients = repo::fetch_ingredients(&state.db, id).await?;
    let steps = repo::fetch_steps(&state.db, id).await?;
    let total_cal = repo::fetch_calories(&state.db, id).await?.unwrap_or(0);
    let rating = repo::rating_summary(&state.db, id).await?;

    Ok(Json(RecipeDetail {
        id: base.id,
        title: base.title,
        description: base.description,
        prep_time: base.prep_time,
        servings: base.servings,
        ingredients,
        steps,
        nutrients: NutrientSummary { total_cal },
        rating,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_drops_blanks() {
        assert_eq!(
            parse_ingredient_names(" egg , flour ,, ,sugar"),
            vec!["egg", "flour", "sugar"]
        );
    }

    #[test]
    fn parse_of_blank_input_is_empty() {
        assert!(parse_ingredient_names("").is_empty());
        assert!(parse_ingredient_names(" , ,").is_empty());
    }

    #[test]
    fn parse_collapses_case_insensitive_repeats() {
        // Repeats must not inflate the match threshold: searching for
        // "Egg,egg" is a one-ingredient search.
        assert_eq!(parse_ingredient_names("Egg,egg"), vec!["egg"]);
        assert_eq!(
            parse_ingredient_names("Egg, FLOUR ,egg,flour"),
            vec!["egg", "flour"]
        );
    }
}
