use sqlx::PgPool;

use super::dto::PantryItem;

pub async fn list_for_user(db: &PgPool, user_id: i64) -> Result<Vec<PantryItem>, sqlx::Error> {
    sqlx::query_as::<_, PantryItem>(
        r#"
        SELECT i.id AS ingredient_id, i.name, i.category
        FROM user_ingredients ui
        JOIN ingredients i ON i.id = ui.ingredient_id
        WHERE ui.user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
}

pub async fn ingredient_exists(db: &PgPool, ingredient_id: i64) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM ingredients WHERE id = $1)")
        .bind(ingredient_id)
        .fetch_one(db)
        .await
}

/// Returns `false` when the ingredient is already in the pantry; the
/// conditional insert is atomic against concurrent add attempts.
pub async fn add(db: &PgPool, user_id: i64, ingredient_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO user_ingredients (user_id, ingredient_id)
        VALUES ($1, $2)
        ON CONFLICT (user_id, ingredient_id) DO NOTHING
        "#,
    )
    .bind(user_id)
    .bind(ingredient_id)
    .execute(db)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Idempotent: removing an ingredient not present is not an error.
pub async fn remove(db: &PgPool, user_id: i64, ingredient_id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM user_ingredients WHERE user_id = $1 AND ingredient_id = $2")
        .bind(user_id)
        .bind(ingredient_id)
        .execute(db)
        .await?;
    Ok(())
}
