use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// Saved-recipe listing entry: recipe summary plus when it was saved.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SavedRecipeSummary {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub prep_time: i32,
    pub servings: i32,
    pub avg_rating: f64,
    pub saved_at: OffsetDateTime,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRecipeList {
    pub saved_recipes: Vec<SavedRecipeSummary>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRecipeRequest {
    pub recipe_id: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnsaveParams {
    pub recipe_id: Option<i64>,
}
