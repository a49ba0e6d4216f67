use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One entry of the ranked search result.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub prep_time: i32,
    pub servings: i32,
    pub avg_rating: f64,
}

#[derive(Debug, Serialize)]
pub struct RecipeList {
    pub recipes: Vec<RecipeSummary>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub ingredients: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct RecipeBase {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub prep_time: i32,
    pub servings: i32,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct IngredientLine {
    pub name: String,
    pub quantity: String,
    pub unit: String,
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CookingStep {
    pub step_no: i32,
    pub instruction: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientSummary {
    pub total_cal: i32,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RatingSummary {
    pub average: f64,
    pub count: i64,
}

/// Everything the detail view needs about one recipe.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub prep_time: i32,
    pub servings: i32,
    pub ingredients: Vec<IngredientLine>,
    pub steps: Vec<CookingStep>,
    pub nutrients: NutrientSummary,
    pub rating: RatingSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipe_summary_serializes_camel_case() {
        let json = serde_json::to_string(&RecipeSummary {
            id: 1,
            title: "Pancakes".into(),
            description: None,
            prep_time: 15,
            servings: 4,
            avg_rating: 4.5,
        })
        .unwrap();
        assert!(json.contains(r#""prepTime":15"#));
        assert!(json.contains(r#""avgRating":4.5"#));
    }

    #[test]
    fn detail_serializes_nested_sections() {
        let json = serde_json::to_string(&RecipeDetail {
            id: 2,
            title: "Omelette".into(),
            description: Some("Quick".into()),
            prep_time: 10,
            servings: 1,
            ingredients: vec![IngredientLine {
                name: "egg".into(),
                quantity: "2".into(),
                unit: "pcs".into(),
            }],
            steps: vec![CookingStep {
                step_no: 1,
                instruction: "Whisk the eggs".into(),
            }],
            nutrients: NutrientSummary { total_cal: 0 },
            rating: RatingSummary {
                average: 0.0,
                count: 0,
            },
        })
        .unwrap();
        assert!(json.contains(r#""stepNo":1"#));
        assert!(json.contains(r#""totalCal":0"#));
        assert!(json.contains(r#""count":0"#));
    }
}
