use sqlx::PgPool;

/// Insert-or-update in one atomic statement, so two concurrent submissions
/// for the same (user, recipe) can never leave two rows. Returns `true`
/// when the row was freshly inserted: `xmax = 0` holds only for rows
/// created by this statement.
pub async fn upsert(
    db: &PgPool,
    user_id: i64,
    recipe_id: i64,
    rating: i32,
    review: &str,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        r#"
        INSERT INTO ratings (user_id, recipe_id, rating, review)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (user_id, recipe_id)
        DO UPDATE SET rating = EXCLUDED.rating, review = EXCLUDED.review
        RETURNING (xmax = 0) AS inserted
        "#,
    )
    .bind(user_id)
    .bind(recipe_id)
    .bind(rating)
    .bind(review)
    .fetch_one(db)
    .await
}
