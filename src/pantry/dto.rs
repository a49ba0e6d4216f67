use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PantryItem {
    pub ingredient_id: i64,
    pub name: String,
    pub category: String,
}

#[derive(Debug, Serialize)]
pub struct PantryList {
    pub ingredients: Vec<PantryItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddIngredientRequest {
    pub ingredient_id: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveParams {
    pub ingredient_id: Option<i64>,
}
