use actix_web::{web, HttpResponse};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::order_service::{CustomerOrderSummaries, OrderService};
use crate::domain::order::{Order, OrderFilter, OrderItem, ProductReturn, Shipping};
use crate::domain::order_summary::{OrderAggregate, OrderLine};
use crate::domain::ports::OrderQueries;
use crate::errors::AppError;

use super::crud::crud_scope;

// ── Request / response DTOs ──────────────────────────────────────────────────

/// Money fields are decimal strings, e.g. "19.99".
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderItemResponse {
    pub product_id: i32,
    pub product_name: String,
    pub quantity: i32,
    pub price_at_purchase: String,
    pub coupon_discount: String,
    pub offer_discount: String,
    pub total_price: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderSummaryResponse {
    pub order_id: i32,
    /// Amount stored on the order when it was placed.
    pub total_amount: String,
    pub order_status: String,
    pub customer_id: i32,
    pub payment_method_id: i32,
    pub shipping_id: i32,
    pub order_items: Vec<OrderItemResponse>,
    /// Sum of the item totals, recomputed on every request.
    pub calculated_total: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FailedOrderResponse {
    pub order_id: i32,
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerOrderSummariesResponse {
    pub orders: Vec<OrderSummaryResponse>,
    /// Orders whose stored rows could not be priced.
    pub failed: Vec<FailedOrderResponse>,
}

/// Money goes out with exactly two decimals, so zero reads `"0.00"`.
fn money(value: &BigDecimal) -> String {
    format!("{:.2}", value.round(2))
}

impl From<OrderLine> for OrderItemResponse {
    fn from(line: OrderLine) -> Self {
        Self {
            product_id: line.product_id,
            product_name: line.product_name,
            quantity: line.quantity,
            price_at_purchase: money(&line.unit_price),
            coupon_discount: money(&line.coupon_discount),
            offer_discount: money(&line.offer_discount),
            total_price: money(&line.line_total),
        }
    }
}

impl From<OrderAggregate> for OrderSummaryResponse {
    fn from(order: OrderAggregate) -> Self {
        Self {
            order_id: order.order_id,
            total_amount: money(&order.total_amount),
            order_status: order.order_status,
            customer_id: order.customer_id,
            payment_method_id: order.payment_method_id,
            shipping_id: order.shipping_id,
            order_items: order.lines.into_iter().map(Into::into).collect(),
            calculated_total: money(&order.calculated_total),
        }
    }
}

impl From<CustomerOrderSummaries> for CustomerOrderSummariesResponse {
    fn from(summaries: CustomerOrderSummaries) -> Self {
        Self {
            orders: summaries.orders.into_iter().map(Into::into).collect(),
            failed: summaries
                .failed
                .into_iter()
                .map(|(order_id, e)| FailedOrderResponse {
                    order_id,
                    error: e.to_string(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OrderSearchParams {
    /// Exact order status, e.g. "SHIPPED".
    pub status: Option<String>,
    pub customer_id: Option<i32>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReturnSearchParams {
    pub status: String,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /orders/{id}/summary
///
/// Prices every item of the order (unit price times quantity, less coupon
/// and offer discounts) and sums them into `calculated_total`.
#[utoipa::path(
    get,
    path = "/orders/{id}/summary",
    params(
        ("id" = i32, Path, description = "Order id"),
    ),
    responses(
        (status = 200, description = "Priced order", body = OrderSummaryResponse),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Stored order data is inconsistent"),
        (status = 503, description = "Database unavailable"),
    ),
    tag = "orders"
)]
pub async fn get_order_summary(
    service: web::Data<OrderService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();
    let aggregate = web::block(move || service.order_summary(order_id)).await??;
    Ok(HttpResponse::Ok().json(OrderSummaryResponse::from(aggregate)))
}

/// GET /customers/{id}/order-summaries
///
/// Prices each of the customer's orders independently; an order that cannot
/// be priced is listed under `failed` instead of failing the request.
#[utoipa::path(
    get,
    path = "/customers/{id}/order-summaries",
    params(
        ("id" = i32, Path, description = "Customer id"),
    ),
    responses(
        (status = 200, description = "Priced orders of the customer", body = CustomerOrderSummariesResponse),
        (status = 503, description = "Database unavailable"),
    ),
    tag = "orders"
)]
pub async fn get_customer_order_summaries(
    service: web::Data<OrderService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let customer_id = path.into_inner();
    let summaries = web::block(move || service.customer_summaries(customer_id)).await??;
    Ok(HttpResponse::Ok().json(CustomerOrderSummariesResponse::from(summaries)))
}

/// GET /orders/search
#[utoipa::path(
    get,
    path = "/orders/search",
    params(OrderSearchParams),
    responses(
        (status = 200, description = "Matching orders", body = [Order]),
    ),
    tag = "orders"
)]
pub async fn search_orders(
    queries: web::Data<dyn OrderQueries>,
    query: web::Query<OrderSearchParams>,
) -> Result<HttpResponse, AppError> {
    let params = query.into_inner();
    let filter = OrderFilter {
        status: params.status,
        customer_id: params.customer_id,
    };
    let orders = web::block(move || queries.search_orders(&filter)).await??;
    Ok(HttpResponse::Ok().json(orders))
}

/// GET /returns/search
#[utoipa::path(
    get,
    path = "/returns/search",
    params(ReturnSearchParams),
    responses(
        (status = 200, description = "Returns with the given status", body = [ProductReturn]),
    ),
    tag = "returns"
)]
pub async fn search_returns(
    queries: web::Data<dyn OrderQueries>,
    query: web::Query<ReturnSearchParams>,
) -> Result<HttpResponse, AppError> {
    let status = query.into_inner().status;
    let returns = web::block(move || queries.returns_by_status(&status)).await??;
    Ok(HttpResponse::Ok().json(returns))
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        crud_scope::<Order>("/orders")
            .route("/search", web::get().to(search_orders))
            .route("/{id}/summary", web::get().to(get_order_summary)),
    )
    .service(crud_scope::<OrderItem>("/order-items"))
    .service(crud_scope::<Shipping>("/shipping"))
    .service(
        crud_scope::<ProductReturn>("/returns").route("/search", web::get().to(search_returns)),
    );
}
