use shopfront::{
    abstract_trait::{CartServiceTrait, CatalogQueryServiceTrait, ProductQueryRepositoryTrait},
    config::ConnectionPool,
    domain::requests::CatalogFilterRequest,
    repository::{ProductQueryRepository, ProductSeeder},
    service::{CartService, CatalogQueryService},
    session::Cart,
};
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;

async fn seeded_pool() -> ConnectionPool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("connect to in-memory sqlite");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("run migrations");

    ProductSeeder::new(pool.clone())
        .seed_if_empty()
        .await
        .expect("seed sample products");

    pool
}

#[tokio::test]
async fn unfiltered_catalog_returns_all_seeded_products() {
    let pool = seeded_pool().await;
    let repo = ProductQueryRepository::new(pool);

    let all = repo.find_filtered(None, None).await.unwrap();
    assert_eq!(all.len(), 6);
}

#[tokio::test]
async fn gender_filter_returns_exactly_the_matching_subset() {
    let pool = seeded_pool().await;
    let repo = ProductQueryRepository::new(pool);

    let men = repo.find_filtered(Some("Men"), None).await.unwrap();
    assert_eq!(men.len(), 3);
    assert!(men.iter().all(|p| p.gender == "Men"));

    let women = repo.find_filtered(Some("Women"), None).await.unwrap();
    assert_eq!(women.len(), 3);
    assert!(women.iter().all(|p| p.gender == "Women"));
}

#[tokio::test]
async fn combined_filters_apply_both_columns() {
    let pool = seeded_pool().await;
    let repo = ProductQueryRepository::new(pool);

    let jeans = repo
        .find_filtered(Some("Men"), Some("Jeans"))
        .await
        .unwrap();
    assert_eq!(jeans.len(), 1);
    assert_eq!(jeans[0].name, "Slim Fit Jeans");
}

#[tokio::test]
async fn unknown_filter_values_yield_an_empty_result() {
    let pool = seeded_pool().await;
    let repo = ProductQueryRepository::new(pool);

    let none = repo.find_filtered(Some("Kids"), None).await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn category_list_ignores_active_filters() {
    let pool = seeded_pool().await;
    let repo = Arc::new(ProductQueryRepository::new(pool));
    let service = CatalogQueryService::new(repo);

    let filtered = CatalogFilterRequest {
        gender: "Women".to_string(),
        category: "all".to_string(),
    };

    let data = service.find_catalog(&filtered).await.unwrap();
    assert_eq!(data.products.len(), 3);
    assert_eq!(
        data.categories,
        vec!["Dresses", "Jackets", "Jeans", "Shirts", "Skirts", "T-Shirts"]
    );
    assert_eq!(data.selected_gender, "Women");
    assert_eq!(data.selected_category, "all");
}

#[tokio::test]
async fn seeding_is_idempotent() {
    let pool = seeded_pool().await;

    let inserted = ProductSeeder::new(pool.clone())
        .seed_if_empty()
        .await
        .unwrap();
    assert_eq!(inserted, 0);

    let repo = ProductQueryRepository::new(pool);
    assert_eq!(repo.find_filtered(None, None).await.unwrap().len(), 6);
}

#[tokio::test]
async fn cart_total_sums_price_times_quantity() {
    let pool = seeded_pool().await;
    let repo = Arc::new(ProductQueryRepository::new(pool));
    let service = CartService::new(repo);

    let mut cart = Cart::default();
    cart.add_one(1);
    cart.add_one(1);
    cart.add_one(2);

    let data = service.resolve(&cart).await.unwrap();
    assert_eq!(data.items.len(), 2);
    assert_eq!(data.items[0].product.id, 1);
    assert_eq!(data.items[0].quantity, 2);
    assert_eq!(data.items[1].product.id, 2);
    assert_eq!(data.items[1].quantity, 1);

    // 2 × 29.99 + 59.99
    assert!((data.total - 119.97).abs() < 1e-9);
    assert!((data.items[0].subtotal - 59.98).abs() < 1e-9);
}

#[tokio::test]
async fn cart_skips_products_deleted_after_being_added() {
    let pool = seeded_pool().await;

    let mut cart = Cart::default();
    cart.add_one(1);
    cart.add_one(3);

    sqlx::query("DELETE FROM products WHERE id = ?1")
        .bind(3_i64)
        .execute(&pool)
        .await
        .expect("delete product 3");

    let repo = Arc::new(ProductQueryRepository::new(pool));
    let service = CartService::new(repo);

    let data = service.resolve(&cart).await.unwrap();
    assert_eq!(data.items.len(), 1);
    assert_eq!(data.items[0].product.id, 1);
    assert!((data.total - 29.99).abs() < 1e-9);
}

#[tokio::test]
async fn empty_cart_resolves_to_zero_total() {
    let pool = seeded_pool().await;
    let repo = Arc::new(ProductQueryRepository::new(pool));
    let service = CartService::new(repo);

    let data = service.resolve(&Cart::default()).await.unwrap();
    assert!(data.items.is_empty());
    assert_eq!(data.total, 0.0);
}
