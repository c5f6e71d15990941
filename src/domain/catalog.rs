use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::entity::Entity;
use super::errors::DomainError;
use super::validation::{
    require_bounded_text, require_date_order, require_in_range, require_max_len, require_money,
    require_non_negative, Validate,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub category_name: String,
    pub description: Option<String>,
}

impl Validate for Category {
    fn validate(&self) -> Result<(), DomainError> {
        require_bounded_text("category_name", &self.category_name, 100)
    }
}

impl Entity for Category {
    const NAME: &'static str = "category";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Seller {
    pub seller_name: String,
    pub seller_type: Option<String>,
    /// Rating between 0 and 5.
    #[schema(value_type = Option<String>, example = "4.50")]
    pub seller_rating: Option<BigDecimal>,
}

impl Validate for Seller {
    fn validate(&self) -> Result<(), DomainError> {
        require_bounded_text("seller_name", &self.seller_name, 255)?;
        if let Some(seller_type) = &self.seller_type {
            require_max_len("seller_type", seller_type, 50)?;
        }
        if let Some(rating) = &self.seller_rating {
            require_non_negative("seller_rating", rating)?;
            if *rating > BigDecimal::from(5) {
                return Err(DomainError::InvalidInput(format!(
                    "seller_rating must be at most 5, got {rating}"
                )));
            }
        }
        Ok(())
    }
}

impl Entity for Seller {
    const NAME: &'static str = "seller";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub product_name: String,
    pub description: Option<String>,
    #[schema(value_type = String, example = "19.99")]
    pub price: BigDecimal,
    pub quantity_available: i32,
    pub category_id: i32,
    pub seller_id: i32,
}

impl Validate for Product {
    fn validate(&self) -> Result<(), DomainError> {
        require_bounded_text("product_name", &self.product_name, 255)?;
        require_money("price", &self.price)?;
        if self.quantity_available < 0 {
            return Err(DomainError::InvalidInput(format!(
                "quantity_available must not be negative, got {}",
                self.quantity_available
            )));
        }
        Ok(())
    }
}

impl Entity for Product {
    const NAME: &'static str = "product";
}

/// A flat deduction applied to order lines during a promotional window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Offer {
    #[schema(value_type = String, example = "5.00")]
    pub discount: BigDecimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Validate for Offer {
    fn validate(&self) -> Result<(), DomainError> {
        require_money("discount", &self.discount)?;
        require_date_order("start_date", self.start_date, "end_date", self.end_date)
    }
}

impl Entity for Offer {
    const NAME: &'static str = "offer";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Coupon {
    pub discount_code: String,
    #[schema(value_type = String, example = "10.00")]
    pub discount_value: BigDecimal,
    pub expiration_date: NaiveDate,
}

impl Validate for Coupon {
    fn validate(&self) -> Result<(), DomainError> {
        require_bounded_text("discount_code", &self.discount_code, 50)?;
        require_money("discount_value", &self.discount_value)
    }
}

impl Entity for Coupon {
    const NAME: &'static str = "coupon";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Review {
    /// 1 to 5 stars.
    pub rating: i32,
    pub comment: Option<String>,
    pub review_date: NaiveDate,
    pub customer_id: i32,
    pub product_id: i32,
}

impl Validate for Review {
    fn validate(&self) -> Result<(), DomainError> {
        require_in_range("rating", self.rating, 1, 5)
    }
}

impl Entity for Review {
    const NAME: &'static str = "review";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductRecommendation {
    pub customer_id: i32,
    pub recommended_product_id: i32,
}

impl Validate for ProductRecommendation {
    fn validate(&self) -> Result<(), DomainError> {
        Ok(())
    }
}

impl Entity for ProductRecommendation {
    const NAME: &'static str = "product recommendation";
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PriceSort {
    #[default]
    Id,
    PriceAsc,
    PriceDesc,
}

/// Every price/name/category product lookup goes through this one filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub name: Option<String>,
    pub category_id: Option<i32>,
    pub min_price: Option<BigDecimal>,
    pub max_price: Option<BigDecimal>,
    pub sort: PriceSort,
}

impl Validate for ProductFilter {
    fn validate(&self) -> Result<(), DomainError> {
        if let (Some(min), Some(max)) = (&self.min_price, &self.max_price) {
            if min > max {
                return Err(DomainError::InvalidInput(format!(
                    "min_price ({min}) must not exceed max_price ({max})"
                )));
            }
        }
        Ok(())
    }
}
