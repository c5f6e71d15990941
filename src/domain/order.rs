use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::entity::Entity;
use super::errors::DomainError;
use super::validation::{
    require_bounded_text, require_date_order, require_max_len, require_money, require_positive,
    Validate,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    /// Amount recorded when the order was placed; not derived from its items.
    #[schema(value_type = String, example = "120.50")]
    pub total_amount: BigDecimal,
    pub order_status: String,
    pub customer_id: i32,
    pub payment_method_id: i32,
    pub shipping_id: i32,
}

impl Validate for Order {
    fn validate(&self) -> Result<(), DomainError> {
        require_money("total_amount", &self.total_amount)?;
        require_bounded_text("order_status", &self.order_status, 50)
    }
}

impl Entity for Order {
    const NAME: &'static str = "order";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderItem {
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    #[schema(value_type = String, example = "10.00")]
    pub price_at_purchase: BigDecimal,
    pub coupon_id: Option<i32>,
    pub offer_id: Option<i32>,
}

impl Validate for OrderItem {
    fn validate(&self) -> Result<(), DomainError> {
        require_positive("quantity", self.quantity)?;
        require_money("price_at_purchase", &self.price_at_purchase)
    }
}

impl Entity for OrderItem {
    const NAME: &'static str = "order item";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Shipping {
    pub shipping_company: String,
    pub shipping_date: Option<NaiveDate>,
    pub estimated_delivery: Option<NaiveDate>,
    #[schema(value_type = Option<String>, example = "12.90")]
    pub shipping_cost: Option<BigDecimal>,
}

impl Validate for Shipping {
    fn validate(&self) -> Result<(), DomainError> {
        require_bounded_text("shipping_company", &self.shipping_company, 255)?;
        if let Some(cost) = &self.shipping_cost {
            require_money("shipping_cost", cost)?;
        }
        if let (Some(shipped), Some(eta)) = (self.shipping_date, self.estimated_delivery) {
            require_date_order("shipping_date", shipped, "estimated_delivery", eta)?;
        }
        Ok(())
    }
}

impl Entity for Shipping {
    const NAME: &'static str = "shipping";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductReturn {
    pub return_date: NaiveDate,
    pub return_reason: Option<String>,
    pub return_status: Option<String>,
    pub order_item_id: i32,
}

impl Validate for ProductReturn {
    fn validate(&self) -> Result<(), DomainError> {
        if let Some(status) = &self.return_status {
            require_max_len("return_status", status, 50)?;
        }
        Ok(())
    }
}

impl Entity for ProductReturn {
    const NAME: &'static str = "return";
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    pub status: Option<String>,
    pub customer_id: Option<i32>,
}
