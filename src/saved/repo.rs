use sqlx::PgPool;

use super::dto::SavedRecipeSummary;

pub async fn list_for_user(
    db: &PgPool,
    user_id: i64,
) -> Result<Vec<SavedRecipeSummary>, sqlx::Error> {
    sqlx::query_as::<_, SavedRecipeSummary>(
        r#"
        SELECT r.id, r.title, r.description, r.prep_time, r.servings,
               COALESCE(AVG(rt.rating), 0)::float8 AS avg_rating,
               sr.saved_at
        FROM saved_recipes sr
        JOIN recipes r ON r.id = sr.recipe_id
        LEFT JOIN ratings rt ON rt.recipe_id = r.id
        WHERE sr.user_id = $1
        GROUP BY r.id, sr.saved_at
        ORDER BY sr.saved_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
}

/// Returns `false` when the recipe was already saved; the conditional insert
/// is atomic against concurrent save attempts.
pub async fn save(db: &PgPool, user_id: i64, recipe_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO saved_recipes (user_id, recipe_id, saved_at)
        VALUES ($1, $2, now())
        ON CONFLICT (user_id, recipe_id) DO NOTHING
        "#,
    )
    .bind(user_id)
    .bind(recipe_id)
    .execute(db)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Idempotent: deleting an absent row is not an error.
pub async fn unsave(db: &PgPool, user_id: i64, recipe_id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM saved_recipes WHERE user_id = $1 AND recipe_id = $2")
        .bind(user_id)
        .bind(recipe_id)
        .execute(db)
        .await?;
    Ok(())
}
