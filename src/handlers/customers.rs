use actix_web::{web, HttpResponse};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::customer::{Customer, PaymentMethod, SearchHistory};
use crate::domain::ports::CustomerQueries;
use crate::errors::AppError;

use super::crud::crud_scope;
use super::orders::get_customer_order_summaries;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NameSearchParams {
    /// Case-insensitive substring to look for.
    pub name: String,
}

/// GET /customers/by-email/{email}
#[utoipa::path(
    get,
    path = "/customers/by-email/{email}",
    params(
        ("email" = String, Path, description = "Exact e-mail address"),
    ),
    responses(
        (status = 200, description = "Customer found", body = Customer),
        (status = 404, description = "No customer with this e-mail"),
    ),
    tag = "customers"
)]
pub async fn get_customer_by_email(
    queries: web::Data<dyn CustomerQueries>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let email = path.into_inner();
    let customer = web::block(move || queries.customer_by_email(&email)).await??;
    match customer {
        Some(customer) => Ok(HttpResponse::Ok().json(customer)),
        None => Err(AppError::NotFound),
    }
}

/// GET /customers/search
#[utoipa::path(
    get,
    path = "/customers/search",
    params(NameSearchParams),
    responses(
        (status = 200, description = "Customers whose name matches", body = [Customer]),
    ),
    tag = "customers"
)]
pub async fn search_customers(
    queries: web::Data<dyn CustomerQueries>,
    query: web::Query<NameSearchParams>,
) -> Result<HttpResponse, AppError> {
    let name = query.into_inner().name;
    let customers = web::block(move || queries.customers_by_name(&name)).await??;
    Ok(HttpResponse::Ok().json(customers))
}

/// GET /customers/{id}/payment-methods
#[utoipa::path(
    get,
    path = "/customers/{id}/payment-methods",
    params(
        ("id" = i32, Path, description = "Customer id"),
    ),
    responses(
        (status = 200, description = "Payment methods of the customer", body = [PaymentMethod]),
    ),
    tag = "customers"
)]
pub async fn get_customer_payment_methods(
    queries: web::Data<dyn CustomerQueries>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let customer_id = path.into_inner();
    let methods = web::block(move || queries.payment_methods_of(customer_id)).await??;
    Ok(HttpResponse::Ok().json(methods))
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        crud_scope::<Customer>("/customers")
            .route("/by-email/{email}", web::get().to(get_customer_by_email))
            .route("/search", web::get().to(search_customers))
            .route(
                "/{id}/payment-methods",
                web::get().to(get_customer_payment_methods),
            )
            .route(
                "/{id}/order-summaries",
                web::get().to(get_customer_order_summaries),
            ),
    )
    .service(crud_scope::<PaymentMethod>("/payment-methods"))
    .service(crud_scope::<SearchHistory>("/search-history"));
}
