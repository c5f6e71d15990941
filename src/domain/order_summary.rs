//! Priced breakdown of an order, computed from the rows of
//! `orders LEFT JOIN order_items LEFT JOIN products/coupons/offers`.
//!
//! Everything here is a pure function of the rows handed in: nothing is
//! cached or persisted, and `calculated_total` is rebuilt on every call.

use std::collections::BTreeMap;

use bigdecimal::{BigDecimal, Zero};

use super::errors::DomainError;

/// One joined row. Order-level columns repeat on every row of the same
/// order; item columns are all `None` on the single row produced for an
/// order without items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderSummaryRow {
    pub order_id: i32,
    pub total_amount: Option<BigDecimal>,
    pub order_status: Option<String>,
    pub customer_id: Option<i32>,
    pub payment_method_id: Option<i32>,
    pub shipping_id: Option<i32>,
    pub product_id: Option<i32>,
    pub product_name: Option<String>,
    pub quantity: Option<i32>,
    pub unit_price: Option<BigDecimal>,
    pub coupon_discount: Option<BigDecimal>,
    pub offer_discount: Option<BigDecimal>,
}

/// How a line whose discounts exceed its subtotal is priced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PricingPolicy {
    /// When false (the default) such a line is priced at zero.
    pub allow_negative_lines: bool,
}

impl PricingPolicy {
    pub fn line_total(
        &self,
        unit_price: &BigDecimal,
        quantity: i32,
        coupon_discount: &BigDecimal,
        offer_discount: &BigDecimal,
    ) -> BigDecimal {
        let subtotal = unit_price * BigDecimal::from(quantity);
        let total = subtotal - (coupon_discount + offer_discount);
        if !self.allow_negative_lines && total < BigDecimal::zero() {
            return BigDecimal::zero();
        }
        total
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub product_id: i32,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: BigDecimal,
    pub coupon_discount: BigDecimal,
    pub offer_discount: BigDecimal,
    pub line_total: BigDecimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderAggregate {
    pub order_id: i32,
    pub total_amount: BigDecimal,
    pub order_status: String,
    pub customer_id: i32,
    pub payment_method_id: i32,
    pub shipping_id: i32,
    pub lines: Vec<OrderLine>,
    pub calculated_total: BigDecimal,
}

#[derive(Debug, PartialEq)]
struct OrderHeader {
    total_amount: BigDecimal,
    order_status: String,
    customer_id: i32,
    payment_method_id: i32,
    shipping_id: i32,
}

fn malformed(order_id: i32, detail: impl std::fmt::Display) -> DomainError {
    DomainError::MalformedRecord(format!("order {order_id}: {detail}"))
}

fn required<T: Clone>(order_id: i32, field: &str, value: &Option<T>) -> Result<T, DomainError> {
    value
        .clone()
        .ok_or_else(|| malformed(order_id, format!("missing {field}")))
}

fn read_header(row: &OrderSummaryRow) -> Result<OrderHeader, DomainError> {
    let id = row.order_id;
    Ok(OrderHeader {
        total_amount: required(id, "total_amount", &row.total_amount)?,
        order_status: required(id, "order_status", &row.order_status)?,
        customer_id: required(id, "customer_id", &row.customer_id)?,
        payment_method_id: required(id, "payment_method_id", &row.payment_method_id)?,
        shipping_id: required(id, "shipping_id", &row.shipping_id)?,
    })
}

fn read_line(
    product_id: i32,
    row: &OrderSummaryRow,
    policy: PricingPolicy,
) -> Result<OrderLine, DomainError> {
    let id = row.order_id;
    let product_name = required(id, "product_name", &row.product_name)?;
    let quantity = required(id, "quantity", &row.quantity)?;
    let unit_price = required(id, "unit_price", &row.unit_price)?;
    let coupon_discount = row.coupon_discount.clone().unwrap_or_else(BigDecimal::zero);
    let offer_discount = row.offer_discount.clone().unwrap_or_else(BigDecimal::zero);

    if quantity <= 0 {
        return Err(malformed(
            id,
            format!("product {product_id} has non-positive quantity {quantity}"),
        ));
    }
    let zero = BigDecimal::zero();
    for (field, value) in [
        ("unit_price", &unit_price),
        ("coupon_discount", &coupon_discount),
        ("offer_discount", &offer_discount),
    ] {
        if *value < zero {
            return Err(malformed(
                id,
                format!("product {product_id} has negative {field} {value}"),
            ));
        }
    }

    let line_total = policy.line_total(&unit_price, quantity, &coupon_discount, &offer_discount);
    Ok(OrderLine {
        product_id,
        product_name,
        quantity,
        unit_price,
        coupon_discount,
        offer_discount,
        line_total,
    })
}

/// Aggregates the rows of a single order.
///
/// An empty slice means the order does not exist. Rows without a
/// `product_id` are the left-join placeholder of an order with no items and
/// are skipped. Any inconsistency aborts the whole order: no partial
/// aggregate is ever returned.
pub fn aggregate_order(
    rows: &[OrderSummaryRow],
    policy: PricingPolicy,
) -> Result<OrderAggregate, DomainError> {
    let first = rows.first().ok_or(DomainError::NotFound)?;
    let order_id = first.order_id;
    let header = read_header(first)?;

    let mut lines = Vec::with_capacity(rows.len());
    let mut calculated_total = BigDecimal::zero();
    for row in rows {
        if row.order_id != order_id {
            return Err(malformed(
                order_id,
                format!("row of order {} mixed into its rows", row.order_id),
            ));
        }
        if read_header(row)? != header {
            return Err(malformed(order_id, "order columns differ between rows"));
        }
        let Some(product_id) = row.product_id else {
            continue;
        };
        let line = read_line(product_id, row, policy)?;
        calculated_total += &line.line_total;
        lines.push(line);
    }

    Ok(OrderAggregate {
        order_id,
        total_amount: header.total_amount,
        order_status: header.order_status,
        customer_id: header.customer_id,
        payment_method_id: header.payment_method_id,
        shipping_id: header.shipping_id,
        lines,
        calculated_total,
    })
}

/// Aggregates rows spanning several orders, one result per order id in
/// ascending id order. A malformed order only fails its own entry.
pub fn aggregate_orders(
    rows: Vec<OrderSummaryRow>,
    policy: PricingPolicy,
) -> Vec<(i32, Result<OrderAggregate, DomainError>)> {
    let mut by_order: BTreeMap<i32, Vec<OrderSummaryRow>> = BTreeMap::new();
    for row in rows {
        by_order.entry(row.order_id).or_default().push(row);
    }
    by_order
        .into_iter()
        .map(|(order_id, rows)| (order_id, aggregate_order(&rows, policy)))
        .collect()
}
