use crate::{config::ConnectionPool, errors::RepositoryError, model::NewProduct};
use tracing::{error, info};

/// Seeds the catalog with the six fixed sample items when the table is empty.
pub struct ProductSeeder {
    db: ConnectionPool,
}

impl ProductSeeder {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    pub fn sample_products() -> Vec<NewProduct> {
        vec![
            NewProduct {
                name: "Classic White T-Shirt".into(),
                price: 29.99,
                description: "Comfortable cotton t-shirt perfect for everyday wear".into(),
                category: "T-Shirts".into(),
                gender: "Men".into(),
                image_url: "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=60".into(),
                stock: 10,
            },
            NewProduct {
                name: "Floral Summer Dress".into(),
                price: 59.99,
                description: "Beautiful floral dress perfect for summer days".into(),
                category: "Dresses".into(),
                gender: "Women".into(),
                image_url: "https://images.unsplash.com/photo-1515372039744-b8f87a3f3b00?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=60".into(),
                stock: 10,
            },
            NewProduct {
                name: "Slim Fit Jeans".into(),
                price: 79.99,
                description: "Modern slim fit jeans with stretch comfort".into(),
                category: "Jeans".into(),
                gender: "Men".into(),
                image_url: "https://images.unsplash.com/photo-1542272604-787c3835535d?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=60".into(),
                stock: 10,
            },
            NewProduct {
                name: "Casual Blazer".into(),
                price: 89.99,
                description: "Versatile blazer for both casual and formal occasions".into(),
                category: "Jackets".into(),
                gender: "Women".into(),
                image_url: "https://images.unsplash.com/photo-1551028719-00167b16eac5?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=60".into(),
                stock: 10,
            },
            NewProduct {
                name: "Striped Polo Shirt".into(),
                price: 39.99,
                description: "Classic striped polo shirt for a preppy look".into(),
                category: "Shirts".into(),
                gender: "Men".into(),
                image_url: "https://images.unsplash.com/photo-1586363104862-3a5e2ab60d99?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=60".into(),
                stock: 10,
            },
            NewProduct {
                name: "High-Waisted Skirt".into(),
                price: 49.99,
                description: "Elegant high-waisted skirt for a sophisticated look".into(),
                category: "Skirts".into(),
                gender: "Women".into(),
                image_url: "https://images.unsplash.com/photo-1583496661160-fb5886a0aaaa?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=60".into(),
                stock: 10,
            },
        ]
    }

    /// Returns the number of rows inserted (0 when the table already has data).
    pub async fn seed_if_empty(&self) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })?;

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to count products: {e:?}");
                RepositoryError::from(e)
            })?;

        if count > 0 {
            info!("Products table already has {count} rows, skipping seed");
            return Ok(0);
        }

        drop(conn);

        let mut tx = self.db.begin().await.map_err(|e| {
            error!("❌ Failed to begin seed transaction: {e:?}");
            RepositoryError::from(e)
        })?;

        let mut inserted = 0u64;
        for product in Self::sample_products() {
            sqlx::query(
                r#"
                INSERT INTO products (name, price, description, category, gender, image_url, stock)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                "#,
            )
            .bind(&product.name)
            .bind(product.price)
            .bind(&product.description)
            .bind(&product.category)
            .bind(&product.gender)
            .bind(&product.image_url)
            .bind(product.stock)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to insert sample product '{}': {e:?}", product.name);
                RepositoryError::from(e)
            })?;
            inserted += 1;
        }

        tx.commit().await.map_err(|e| {
            error!("❌ Failed to commit seed transaction: {e:?}");
            RepositoryError::from(e)
        })?;

        info!("🌱 Seeded {inserted} sample products");
        Ok(inserted)
    }
}
