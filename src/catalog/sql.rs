use sqlx::MySqlPool;

use crate::{
    catalog::Catalog,
    error::AppResult,
    models::{Movie, MovieRow},
};

const MOVIE_COLUMNS: &str =
    "id, title, original_title, rating, synopsis, metadata, review_excerpts";

/// Catalog backed by the MySQL table the crawler populates.
pub struct SqlCatalog {
    pool: MySqlPool,
}

impl SqlCatalog {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl Catalog for SqlCatalog {
    async fn fetch_by_id(&self, id: i64) -> AppResult<Option<Movie>> {
        let sql = format!("SELECT {MOVIE_COLUMNS} FROM movies WHERE id = ?");
        let row = sqlx::query_as::<_, MovieRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Movie::from))
    }

    async fn fetch_all_except(&self, exclude: &[i64]) -> AppResult<Vec<Movie>> {
        // MySQL has no array binds; expand one placeholder per excluded id.
        let mut sql = format!("SELECT {MOVIE_COLUMNS} FROM movies");
        if !exclude.is_empty() {
            let placeholders = vec!["?"; exclude.len()].join(", ");
            sql.push_str(&format!(" WHERE id NOT IN ({placeholders})"));
        }
        sql.push_str(" ORDER BY id");

        let mut query = sqlx::query_as::<_, MovieRow>(&sql);
        for id in exclude {
            query = query.bind(id);
        }

        let rows = query.fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(Movie::from).collect())
    }
}
