use sqlx::{PgPool, Postgres, QueryBuilder};

use super::dto::{CookingStep, IngredientLine, RatingSummary, RecipeBase, RecipeSummary};

/// Builds the ranked-search query.
///
/// A recipe qualifies when the number of distinct required ingredients whose
/// names (case-insensitively) appear in `names` is at least `names.len()`;
/// with no names the catalog is returned unfiltered. Ranked by average
/// rating descending (unrated recipes average 0), ties broken by id, capped
/// at 20 rows. The IN-list is bound parameter by parameter, never spliced
/// into the SQL text.
fn search_query(names: &[String]) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(
        "SELECT r.id, r.title, r.description, r.prep_time, r.servings, \
         COALESCE(AVG(rt.rating), 0)::float8 AS avg_rating \
         FROM recipes r \
         LEFT JOIN ratings rt ON rt.recipe_id = r.id",
    );

    if !names.is_empty() {
        qb.push(
            " WHERE r.id IN (\
             SELECT ri.recipe_id \
             FROM recipe_ingredients ri \
             JOIN ingredients i ON i.id = ri.ingredient_id \
             WHERE lower(i.name) IN (",
        );
        let mut list = qb.separated(", ");
        for name in names {
            list.push_bind(name.trim().to_lowercase());
        }
        qb.push(") GROUP BY ri.recipe_id HAVING COUNT(DISTINCT ri.ingredient_id) >= ");
        qb.push_bind(names.len() as i64);
        qb.push(")");
    }

    qb.push(" GROUP BY r.id ORDER BY avg_rating DESC, r.id ASC LIMIT 20");
    qb
}

pub async fn search(db: &PgPool, names: &[String]) -> Result<Vec<RecipeSummary>, sqlx::Error> {
    let mut qb = search_query(names);
    qb.build_query_as::<RecipeSummary>().fetch_all(db).await
}

pub async fn exists(db: &PgPool, recipe_id: i64) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM recipes WHERE id = $1)")
        .bind(recipe_id)
        .fetch_one(db)
        .await
}

pub async fn fetch_base(db: &PgPool, recipe_id: i64) -> Result<Option<RecipeBase>, sqlx::Error> {
    sqlx::query_as::<_, RecipeBase>(
        r#"
        SELECT id, title, description, prep_time, servings
        FROM recipes
        WHERE id = $1
        "#,
    )
    .bind(recipe_id)
    .fetch_optional(db)
    .await
}

pub async fn fetch_ingredients(
    db: &PgPool,
    recipe_id: i64,
) -> Result<Vec<IngredientLine>, sqlx::Error> {
    sqlx::query_as::<_, IngredientLine>(
        r#"
        SELECT i.name, ri.quantity, ri.unit
        FROM recipe_ingredients ri
        JOIN ingredients i ON i.id = ri.ingredient_id
        WHERE ri.recipe_id = $1
        "#,
    )
    .bind(recipe_id)
    .fetch_all(db)
    .await
}

pub async fn fetch_steps(db: &PgPool, recipe_id: i64) -> Result<Vec<CookingStep>, sqlx::Error> {
    sqlx::query_as::<_, CookingStep>(
        r#"
        SELECT step_no, instruction
        FROM cooking_steps
        WHERE recipe_id = $1
        ORDER BY step_no
        "#,
    )
    .bind(recipe_id)
    .fetch_all(db)
    .await
}

/// Calories for a recipe; `None` when no nutrients row exists. The caller
/// defaults to 0.
pub async fn fetch_calories(db: &PgPool, recipe_id: i64) -> Result<Option<i32>, sqlx::Error> {
    sqlx::query_scalar::<_, i32>("SELECT total_cal FROM nutrients WHERE recipe_id = $1")
        .bind(recipe_id)
        .fetch_optional(db)
        .await
}

/// Recomputed on every read; never cached.
pub async fn rating_summary(db: &PgPool, recipe_id: i64) -> Result<RatingSummary, sqlx::Error> {
    sqlx::query_as::<_, RatingSummary>(
        r#"
        SELECT COALESCE(AVG(rating), 0)::float8 AS average, COUNT(*) AS count
        FROM ratings
        WHERE recipe_id = $1
        "#,
    )
    .bind(recipe_id)
    .fetch_one(db)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    // Scans up from $1 until the first absent index, so the count cannot
    // saturate at an arbitrary cap.
    fn placeholder_count(sql: &str) -> usize {
        (1..).take_while(|n| sql.contains(&format!("${n}"))).count()
    }

    #[test]
    fn empty_set_builds_unfiltered_catalog_query() {
        let mut qb = search_query(&[]);
        let sql = qb.sql();
        assert!(!sql.contains("WHERE"));
        assert_eq!(placeholder_count(sql), 0);
        assert!(sql.contains("ORDER BY avg_rating DESC, r.id ASC"));
        assert!(sql.contains("LIMIT 20"));
    }

    #[test]
    fn one_placeholder_per_name_plus_threshold() {
        let names = vec!["egg".to_string(), "flour".to_string(), "sugar".to_string()];
        let mut qb = search_query(&names);
        let sql = qb.sql();
        assert_eq!(placeholder_count(sql), names.len() + 1);
        assert!(sql.contains("HAVING COUNT(DISTINCT ri.ingredient_id) >= "));
    }

    #[test]
    fn filtered_query_matches_on_lowered_name() {
        let names = vec!["Egg".to_string()];
        let mut qb = search_query(&names);
        assert!(qb.sql().contains("lower(i.name) IN ($1)"));
    }
}
