use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::domain::customer::{AddToCart, CartProduct, CartQuantity, ShoppingCart};
use crate::domain::ports::CartRepository;
use crate::domain::validation::Validate;
use crate::errors::AppError;

use super::crud::crud_scope;

/// POST /carts/{id}/products
///
/// Adding a product already in the cart increases its quantity.
#[utoipa::path(
    post,
    path = "/carts/{id}/products",
    params(
        ("id" = i32, Path, description = "Shopping cart id"),
    ),
    request_body = AddToCart,
    responses(
        (status = 201, description = "Resulting cart line", body = CartProduct),
        (status = 400, description = "Non-positive quantity or unknown cart/product"),
    ),
    tag = "carts"
)]
pub async fn add_cart_product(
    carts: web::Data<dyn CartRepository>,
    path: web::Path<i32>,
    body: web::Json<AddToCart>,
) -> Result<HttpResponse, AppError> {
    let cart_id = path.into_inner();
    let body = body.into_inner();
    body.validate()?;

    let line =
        web::block(move || carts.add_product(cart_id, body.product_id, body.quantity)).await??;
    Ok(HttpResponse::Created().json(line))
}

/// GET /carts/{id}/products
#[utoipa::path(
    get,
    path = "/carts/{id}/products",
    params(
        ("id" = i32, Path, description = "Shopping cart id"),
    ),
    responses(
        (status = 200, description = "Products in the cart", body = [CartProduct]),
    ),
    tag = "carts"
)]
pub async fn list_cart_products(
    carts: web::Data<dyn CartRepository>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let cart_id = path.into_inner();
    let lines = web::block(move || carts.cart_products(cart_id)).await??;
    Ok(HttpResponse::Ok().json(lines))
}

/// PUT /carts/{id}/products/{product_id}
#[utoipa::path(
    put,
    path = "/carts/{id}/products/{product_id}",
    params(
        ("id" = i32, Path, description = "Shopping cart id"),
        ("product_id" = i32, Path, description = "Product id"),
    ),
    request_body = CartQuantity,
    responses(
        (status = 204, description = "Quantity replaced"),
        (status = 404, description = "Product not in the cart"),
    ),
    tag = "carts"
)]
pub async fn set_cart_product_quantity(
    carts: web::Data<dyn CartRepository>,
    path: web::Path<(i32, i32)>,
    body: web::Json<CartQuantity>,
) -> Result<HttpResponse, AppError> {
    let (cart_id, product_id) = path.into_inner();
    let body = body.into_inner();
    body.validate()?;

    web::block(move || carts.set_quantity(cart_id, product_id, body.quantity)).await??;
    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /carts/{id}/products/{product_id}
#[utoipa::path(
    delete,
    path = "/carts/{id}/products/{product_id}",
    params(
        ("id" = i32, Path, description = "Shopping cart id"),
        ("product_id" = i32, Path, description = "Product id"),
    ),
    responses(
        (status = 204, description = "Product removed from the cart"),
        (status = 404, description = "Product not in the cart"),
    ),
    tag = "carts"
)]
pub async fn remove_cart_product(
    carts: web::Data<dyn CartRepository>,
    path: web::Path<(i32, i32)>,
) -> Result<HttpResponse, AppError> {
    let (cart_id, product_id) = path.into_inner();
    web::block(move || carts.remove_product(cart_id, product_id)).await??;
    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /carts/{id}/products
#[utoipa::path(
    delete,
    path = "/carts/{id}/products",
    params(
        ("id" = i32, Path, description = "Shopping cart id"),
    ),
    responses(
        (status = 200, description = "Number of removed lines, as {\"removed\": n}"),
    ),
    tag = "carts"
)]
pub async fn clear_cart(
    carts: web::Data<dyn CartRepository>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let cart_id = path.into_inner();
    let removed = web::block(move || carts.clear_cart(cart_id)).await??;
    log::debug!("Cleared {removed} line(s) from cart {cart_id}");
    Ok(HttpResponse::Ok().json(json!({ "removed": removed })))
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        crud_scope::<ShoppingCart>("/carts")
            .service(
                web::resource("/{id}/products")
                    .route(web::get().to(list_cart_products))
                    .route(web::post().to(add_cart_product))
                    .route(web::delete().to(clear_cart)),
            )
            .service(
                web::resource("/{id}/products/{product_id}")
                    .route(web::put().to(set_cart_product_quantity))
                    .route(web::delete().to(remove_cart_product)),
            ),
    );
}
