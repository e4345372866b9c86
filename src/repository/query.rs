use crate::{
    abstract_trait::product::ProductQueryRepositoryTrait, config::ConnectionPool,
    errors::RepositoryError, model::Product,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_filtered(
        &self,
        gender: Option<&str>,
        category: Option<&str>,
    ) -> Result<Vec<Product>, RepositoryError> {
        info!("🔍 Fetching products with gender: {gender:?}, category: {category:?}");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })?;

        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price, description, category, gender, image_url, stock
            FROM products
            WHERE (?1 IS NULL OR gender = ?1)
              AND (?2 IS NULL OR category = ?2)
            ORDER BY id
            "#,
        )
        .bind(gender)
        .bind(category)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch products: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(products)
    }

    async fn distinct_categories(&self) -> Result<Vec<String>, RepositoryError> {
        info!("🏷️ Fetching distinct product categories");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })?;

        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT DISTINCT category FROM products ORDER BY category")
                .fetch_all(&mut *conn)
                .await
                .map_err(|e| {
                    error!("❌ Failed to fetch categories: {e:?}");
                    RepositoryError::from(e)
                })?;

        Ok(rows.into_iter().map(|(category,)| category).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError> {
        info!("🆔 Fetching product by ID: {id}");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price, description, category, gender, image_url, stock
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch product {id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(product)
    }
}
