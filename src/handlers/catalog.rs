use std::str::FromStr;

use actix_web::{web, HttpResponse};
use bigdecimal::BigDecimal;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::catalog::{
    Category, Coupon, Offer, PriceSort, Product, ProductFilter, ProductRecommendation, Review,
    Seller,
};
use crate::domain::ports::CatalogQueries;
use crate::domain::validation::Validate;
use crate::errors::AppError;

use super::crud::crud_scope;
use super::customers::NameSearchParams;

/// Decimal query values arrive as strings to avoid floating-point issues.
fn parse_decimal(field: &str, raw: &str) -> Result<BigDecimal, AppError> {
    BigDecimal::from_str(raw.trim())
        .map_err(|e| AppError::BadRequest(format!("Invalid {field} '{raw}': {e}")))
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductSearchParams {
    /// Case-insensitive substring of the product name.
    pub name: Option<String>,
    pub category_id: Option<i32>,
    /// Inclusive lower price bound, e.g. "10.00".
    pub min_price: Option<String>,
    /// Inclusive upper price bound, e.g. "99.99".
    pub max_price: Option<String>,
    /// `price_asc`, `price_desc` or `id` (default).
    #[serde(default)]
    #[param(inline)]
    pub sort: PriceSort,
}

impl ProductSearchParams {
    fn into_filter(self) -> Result<ProductFilter, AppError> {
        let filter = ProductFilter {
            name: self.name,
            category_id: self.category_id,
            min_price: self
                .min_price
                .as_deref()
                .map(|raw| parse_decimal("min_price", raw))
                .transpose()?,
            max_price: self
                .max_price
                .as_deref()
                .map(|raw| parse_decimal("max_price", raw))
                .transpose()?,
            sort: self.sort,
        };
        filter.validate()?;
        Ok(filter)
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TopRatedParams {
    /// Minimum seller rating, e.g. "4.5".
    pub min_rating: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReviewParams {
    /// Only reviews rated at least this (1-5).
    pub min_rating: Option<i32>,
}

/// GET /categories/search
#[utoipa::path(
    get,
    path = "/categories/search",
    params(NameSearchParams),
    responses(
        (status = 200, description = "Categories whose name matches", body = [Category]),
    ),
    tag = "catalog"
)]
pub async fn search_categories(
    queries: web::Data<dyn CatalogQueries>,
    query: web::Query<NameSearchParams>,
) -> Result<HttpResponse, AppError> {
    let name = query.into_inner().name;
    let categories = web::block(move || queries.categories_by_name(&name)).await??;
    Ok(HttpResponse::Ok().json(categories))
}

/// GET /products/search
///
/// Single entry point for name, category and price lookups.
#[utoipa::path(
    get,
    path = "/products/search",
    params(ProductSearchParams),
    responses(
        (status = 200, description = "Matching products", body = [Product]),
        (status = 400, description = "Malformed price bound or min_price above max_price"),
    ),
    tag = "catalog"
)]
pub async fn search_products(
    queries: web::Data<dyn CatalogQueries>,
    query: web::Query<ProductSearchParams>,
) -> Result<HttpResponse, AppError> {
    let filter = query.into_inner().into_filter()?;
    let products = web::block(move || queries.search_products(&filter)).await??;
    Ok(HttpResponse::Ok().json(products))
}

/// GET /products/{id}/reviews
#[utoipa::path(
    get,
    path = "/products/{id}/reviews",
    params(
        ("id" = i32, Path, description = "Product id"),
        ReviewParams,
    ),
    responses(
        (status = 200, description = "Reviews of the product", body = [Review]),
    ),
    tag = "catalog"
)]
pub async fn get_product_reviews(
    queries: web::Data<dyn CatalogQueries>,
    path: web::Path<i32>,
    query: web::Query<ReviewParams>,
) -> Result<HttpResponse, AppError> {
    let product_id = path.into_inner();
    let min_rating = query.into_inner().min_rating;
    let reviews = web::block(move || queries.reviews_of_product(product_id, min_rating)).await??;
    Ok(HttpResponse::Ok().json(reviews))
}

/// GET /coupons/by-code/{code}
#[utoipa::path(
    get,
    path = "/coupons/by-code/{code}",
    params(
        ("code" = String, Path, description = "Exact discount code"),
    ),
    responses(
        (status = 200, description = "Coupon found", body = Coupon),
        (status = 404, description = "No coupon with this code"),
    ),
    tag = "catalog"
)]
pub async fn get_coupon_by_code(
    queries: web::Data<dyn CatalogQueries>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let code = path.into_inner();
    let coupon = web::block(move || queries.coupon_by_code(&code)).await??;
    match coupon {
        Some(coupon) => Ok(HttpResponse::Ok().json(coupon)),
        None => Err(AppError::NotFound),
    }
}

/// GET /sellers/search
#[utoipa::path(
    get,
    path = "/sellers/search",
    params(NameSearchParams),
    responses(
        (status = 200, description = "Sellers whose name matches", body = [Seller]),
    ),
    tag = "catalog"
)]
pub async fn search_sellers(
    queries: web::Data<dyn CatalogQueries>,
    query: web::Query<NameSearchParams>,
) -> Result<HttpResponse, AppError> {
    let name = query.into_inner().name;
    let sellers = web::block(move || queries.sellers_by_name(&name)).await??;
    Ok(HttpResponse::Ok().json(sellers))
}

/// GET /sellers/top-rated
#[utoipa::path(
    get,
    path = "/sellers/top-rated",
    params(TopRatedParams),
    responses(
        (status = 200, description = "Sellers rated at least min_rating, best first", body = [Seller]),
        (status = 400, description = "min_rating is not a decimal"),
    ),
    tag = "catalog"
)]
pub async fn get_top_rated_sellers(
    queries: web::Data<dyn CatalogQueries>,
    query: web::Query<TopRatedParams>,
) -> Result<HttpResponse, AppError> {
    let min_rating = parse_decimal("min_rating", &query.min_rating)?;
    let sellers = web::block(move || queries.sellers_rated_at_least(&min_rating)).await??;
    Ok(HttpResponse::Ok().json(sellers))
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        crud_scope::<Category>("/categories").route("/search", web::get().to(search_categories)),
    )
    .service(
        crud_scope::<Seller>("/sellers")
            .route("/search", web::get().to(search_sellers))
            .route("/top-rated", web::get().to(get_top_rated_sellers)),
    )
    .service(
        crud_scope::<Product>("/products")
            .route("/search", web::get().to(search_products))
            .route("/{id}/reviews", web::get().to(get_product_reviews)),
    )
    .service(
        crud_scope::<Coupon>("/coupons")
            .route("/by-code/{code}", web::get().to(get_coupon_by_code)),
    )
    .service(crud_scope::<Offer>("/offers"))
    .service(crud_scope::<Review>("/reviews"))
    .service(crud_scope::<ProductRecommendation>("/recommendations"));
}
