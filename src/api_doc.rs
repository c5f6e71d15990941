use utoipa::OpenApi;

use crate::domain::catalog::{
    Category, Coupon, Offer, PriceSort, Product, ProductRecommendation, Review, Seller,
};
use crate::domain::customer::{
    AddToCart, CartProduct, CartQuantity, Customer, PaymentMethod, SearchHistory, ShoppingCart,
};
use crate::domain::order::{Order, OrderItem, ProductReturn, Shipping};
use crate::handlers;

/// OpenAPI document served at `/api-docs/openapi.json`.
///
/// The generic CRUD routes (`POST/GET {scope}`, `GET/PUT/DELETE {scope}/{id}`)
/// accept and return the record schemas listed here; records are returned
/// with their `id` merged in.
#[derive(OpenApi)]
#[openapi(
    info(title = "Storefront API"),
    paths(
        handlers::orders::get_order_summary,
        handlers::orders::get_customer_order_summaries,
        handlers::orders::search_orders,
        handlers::orders::search_returns,
        handlers::customers::get_customer_by_email,
        handlers::customers::search_customers,
        handlers::customers::get_customer_payment_methods,
        handlers::catalog::search_categories,
        handlers::catalog::search_products,
        handlers::catalog::get_product_reviews,
        handlers::catalog::get_coupon_by_code,
        handlers::catalog::search_sellers,
        handlers::catalog::get_top_rated_sellers,
        handlers::carts::add_cart_product,
        handlers::carts::list_cart_products,
        handlers::carts::set_cart_product_quantity,
        handlers::carts::remove_cart_product,
        handlers::carts::clear_cart,
    ),
    components(schemas(
        Customer,
        PaymentMethod,
        SearchHistory,
        ShoppingCart,
        CartProduct,
        AddToCart,
        CartQuantity,
        Category,
        Seller,
        Product,
        Offer,
        Coupon,
        Review,
        ProductRecommendation,
        PriceSort,
        Order,
        OrderItem,
        Shipping,
        ProductReturn,
    )),
    tags(
        (name = "orders", description = "Order pricing and lookups"),
        (name = "customers", description = "Customer lookups"),
        (name = "catalog", description = "Categories, products, sellers, coupons and reviews"),
        (name = "carts", description = "Shopping cart contents"),
        (name = "returns", description = "Product returns"),
    )
)]
pub struct ApiDoc;
