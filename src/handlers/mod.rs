pub mod carts;
pub mod catalog;
pub mod crud;
pub mod customers;
pub mod orders;

#[cfg(test)]
pub(crate) mod test_support;

use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::application::entity_service::EntityService;
use crate::application::order_service::OrderService;
use crate::domain::catalog::{
    Category, Coupon, Offer, Product, ProductRecommendation, Review, Seller,
};
use crate::domain::customer::{Customer, PaymentMethod, SearchHistory, ShoppingCart};
use crate::domain::order::{Order, OrderItem, ProductReturn, Shipping};
use crate::domain::order_summary::PricingPolicy;
use crate::domain::ports::{
    CartRepository, CatalogQueries, CustomerQueries, OrderQueries, Storefront,
};

/// GET /
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "message": "Welcome!" }))
}

/// Mounts every route of the service on top of `store`.
pub fn register<S: Storefront>(
    cfg: &mut web::ServiceConfig,
    store: Arc<S>,
    policy: PricingPolicy,
) {
    macro_rules! entity_services {
        ($($entity:ty),* $(,)?) => {
            $(
                cfg.app_data(web::Data::new(EntityService::<$entity>::new(store.clone())));
            )*
        };
    }

    entity_services!(
        Customer,
        Category,
        Seller,
        PaymentMethod,
        Shipping,
        Offer,
        Product,
        Coupon,
        Order,
        OrderItem,
        Review,
        ProductRecommendation,
        ProductReturn,
        SearchHistory,
        ShoppingCart,
    );

    cfg.app_data(web::Data::new(OrderService::new(store.clone(), policy)))
        .app_data(web::Data::<dyn CustomerQueries>::from(
            store.clone() as Arc<dyn CustomerQueries>
        ))
        .app_data(web::Data::<dyn CatalogQueries>::from(
            store.clone() as Arc<dyn CatalogQueries>
        ))
        .app_data(web::Data::<dyn OrderQueries>::from(
            store.clone() as Arc<dyn OrderQueries>
        ))
        .app_data(web::Data::<dyn CartRepository>::from(
            store as Arc<dyn CartRepository>
        ))
        .route("/", web::get().to(index));

    customers::routes(cfg);
    catalog::routes(cfg);
    orders::routes(cfg);
    carts::routes(cfg);
}
