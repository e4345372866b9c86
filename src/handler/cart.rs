use crate::{
    abstract_trait::DynCartService,
    domain::response::{ApiResponse, CartData},
    session::{Cart, Flash},
};
use axum::{
    Json,
    extract::{Extension, Path},
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::SignedCookieJar;
use tracing::{error, info};

#[utoipa::path(
    get,
    path = "/add_to_cart/{product_id}",
    tag = "Cart",
    params(
        ("product_id" = u32, Path, description = "Product identifier; not validated against the catalog")
    ),
    responses(
        (status = 303, description = "Cart updated, redirects to the catalog view")
    )
)]
pub async fn add_to_cart(
    Path(product_id): Path<u32>,
    jar: SignedCookieJar,
) -> impl IntoResponse {
    let product_id = i64::from(product_id);

    let mut cart = Cart::from_jar(&jar);
    cart.add_one(product_id);

    info!(
        "🛒 Added product {product_id} to cart (quantity now {})",
        cart.quantity(product_id)
    );

    let jar = Flash::Success.set(cart.write_to(jar));
    (jar, Redirect::to("/"))
}

#[utoipa::path(
    get,
    path = "/cart",
    tag = "Cart",
    responses(
        (status = 200, description = "Resolved cart line items and grand total; degrades to an empty cart on storage errors", body = ApiResponse<CartData>)
    )
)]
pub async fn get_cart(
    Extension(service): Extension<DynCartService>,
    jar: SignedCookieJar,
) -> impl IntoResponse {
    let cart = Cart::from_jar(&jar);

    match service.resolve(&cart).await {
        Ok(data) => Json(ApiResponse {
            status: "success".to_string(),
            message: "Cart fetched successfully".to_string(),
            data,
        }),
        Err(e) => {
            error!("❌ Failed to load cart: {e}");

            Json(ApiResponse {
                status: "error".to_string(),
                message: "Error loading cart".to_string(),
                data: CartData::default(),
            })
        }
    }
}
