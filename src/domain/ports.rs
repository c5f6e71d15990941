use bigdecimal::BigDecimal;

use super::catalog::{
    Category, Coupon, Offer, Product, ProductFilter, ProductRecommendation, Review, Seller,
};
use super::customer::{CartProduct, Customer, PaymentMethod, SearchHistory, ShoppingCart};
use super::entity::{Entity, Stored};
use super::errors::DomainError;
use super::order::{Order, OrderFilter, OrderItem, ProductReturn, Shipping};
use super::order_summary::OrderSummaryRow;

pub trait CrudRepository<E: Entity>: Send + Sync + 'static {
    fn create(&self, data: E) -> Result<i32, DomainError>;
    fn find_by_id(&self, id: i32) -> Result<Option<Stored<E>>, DomainError>;
    fn find_all(&self) -> Result<Vec<Stored<E>>, DomainError>;
    /// Replaces every field of the record; `NotFound` when `id` is unknown.
    fn update(&self, id: i32, data: E) -> Result<(), DomainError>;
    fn delete(&self, id: i32) -> Result<(), DomainError>;
}

/// Source of the joined rows consumed by the order aggregator.
pub trait OrderSummarySource: Send + Sync + 'static {
    /// Empty when the order does not exist.
    fn order_rows(&self, order_id: i32) -> Result<Vec<OrderSummaryRow>, DomainError>;
    fn customer_order_rows(&self, customer_id: i32) -> Result<Vec<OrderSummaryRow>, DomainError>;
}

pub trait CustomerQueries: Send + Sync + 'static {
    fn customer_by_email(&self, email: &str) -> Result<Option<Stored<Customer>>, DomainError>;
    fn customers_by_name(&self, fragment: &str) -> Result<Vec<Stored<Customer>>, DomainError>;
    fn payment_methods_of(&self, customer_id: i32)
        -> Result<Vec<Stored<PaymentMethod>>, DomainError>;
}

pub trait CatalogQueries: Send + Sync + 'static {
    fn categories_by_name(&self, fragment: &str) -> Result<Vec<Stored<Category>>, DomainError>;
    fn search_products(&self, filter: &ProductFilter) -> Result<Vec<Stored<Product>>, DomainError>;
    fn coupon_by_code(&self, code: &str) -> Result<Option<Stored<Coupon>>, DomainError>;
    fn sellers_by_name(&self, fragment: &str) -> Result<Vec<Stored<Seller>>, DomainError>;
    /// Sellers rated at or above `min_rating`, best first.
    fn sellers_rated_at_least(
        &self,
        min_rating: &BigDecimal,
    ) -> Result<Vec<Stored<Seller>>, DomainError>;
    fn reviews_of_product(
        &self,
        product_id: i32,
        min_rating: Option<i32>,
    ) -> Result<Vec<Stored<Review>>, DomainError>;
}

pub trait OrderQueries: Send + Sync + 'static {
    fn search_orders(&self, filter: &OrderFilter) -> Result<Vec<Stored<Order>>, DomainError>;
    fn returns_by_status(&self, status: &str) -> Result<Vec<Stored<ProductReturn>>, DomainError>;
}

pub trait CartRepository: Send + Sync + 'static {
    /// Adds `quantity` units, accumulating onto an existing line for the
    /// same product. Returns the resulting line.
    fn add_product(
        &self,
        cart_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<CartProduct, DomainError>;
    fn cart_products(&self, cart_id: i32) -> Result<Vec<CartProduct>, DomainError>;
    fn set_quantity(&self, cart_id: i32, product_id: i32, quantity: i32)
        -> Result<(), DomainError>;
    fn remove_product(&self, cart_id: i32, product_id: i32) -> Result<(), DomainError>;
    /// Returns how many lines were removed.
    fn clear_cart(&self, cart_id: i32) -> Result<usize, DomainError>;
}

/// Everything the HTTP layer needs from a backing store.
pub trait Storefront:
    CrudRepository<Customer>
    + CrudRepository<Category>
    + CrudRepository<Seller>
    + CrudRepository<PaymentMethod>
    + CrudRepository<Shipping>
    + CrudRepository<Offer>
    + CrudRepository<Product>
    + CrudRepository<Coupon>
    + CrudRepository<Order>
    + CrudRepository<OrderItem>
    + CrudRepository<Review>
    + CrudRepository<ProductRecommendation>
    + CrudRepository<ProductReturn>
    + CrudRepository<SearchHistory>
    + CrudRepository<ShoppingCart>
    + OrderSummarySource
    + CustomerQueries
    + CatalogQueries
    + OrderQueries
    + CartRepository
{
}

impl<T> Storefront for T where
    T: CrudRepository<Customer>
        + CrudRepository<Category>
        + CrudRepository<Seller>
        + CrudRepository<PaymentMethod>
        + CrudRepository<Shipping>
        + CrudRepository<Offer>
        + CrudRepository<Product>
        + CrudRepository<Coupon>
        + CrudRepository<Order>
        + CrudRepository<OrderItem>
        + CrudRepository<Review>
        + CrudRepository<ProductRecommendation>
        + CrudRepository<ProductReturn>
        + CrudRepository<SearchHistory>
        + CrudRepository<ShoppingCart>
        + OrderSummarySource
        + CustomerQueries
        + CatalogQueries
        + OrderQueries
        + CartRepository
{
}
