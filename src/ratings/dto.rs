use serde::Deserialize;

/// Request body for submitting or updating a rating.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRatingRequest {
    pub recipe_id: i64,
    pub rating: i32,
    #[serde(default)]
    pub review: String,
}
