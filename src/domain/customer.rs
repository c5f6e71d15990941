use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::entity::Entity;
use super::errors::DomainError;
use super::validation::{
    require_bounded_text, require_email, require_max_len, require_positive, require_text,
    Validate,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    pub full_name: String,
    pub email: String,
    pub shipping_address: String,
    pub phone: String,
    pub registration_date: NaiveDate,
}

impl Validate for Customer {
    fn validate(&self) -> Result<(), DomainError> {
        require_bounded_text("full_name", &self.full_name, 255)?;
        require_email("email", &self.email)?;
        require_max_len("email", &self.email, 255)?;
        require_text("shipping_address", &self.shipping_address)?;
        require_bounded_text("phone", &self.phone, 20)
    }
}

impl Entity for Customer {
    const NAME: &'static str = "customer";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaymentMethod {
    pub payment_type: String,
    pub customer_id: Option<i32>,
}

impl Validate for PaymentMethod {
    fn validate(&self) -> Result<(), DomainError> {
        require_bounded_text("payment_type", &self.payment_type, 50)
    }
}

impl Entity for PaymentMethod {
    const NAME: &'static str = "payment method";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SearchHistory {
    pub search_term: String,
    pub search_date: NaiveDate,
    pub customer_id: i32,
}

impl Validate for SearchHistory {
    fn validate(&self) -> Result<(), DomainError> {
        require_bounded_text("search_term", &self.search_term, 255)
    }
}

impl Entity for SearchHistory {
    const NAME: &'static str = "search history entry";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShoppingCart {
    pub customer_id: i32,
}

impl Validate for ShoppingCart {
    fn validate(&self) -> Result<(), DomainError> {
        Ok(())
    }
}

impl Entity for ShoppingCart {
    const NAME: &'static str = "shopping cart";
}

/// One product held in a shopping cart, keyed by `(cart_id, product_id)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CartProduct {
    pub cart_id: i32,
    pub product_id: i32,
    pub quantity: i32,
}

/// Quantity of a cart line after adding `added` units to `current`.
pub fn combined_quantity(current: i32, added: i32) -> Result<i32, DomainError> {
    current.checked_add(added).ok_or_else(|| {
        DomainError::InvalidInput(format!(
            "cart quantity {current} + {added} exceeds the maximum of {}",
            i32::MAX
        ))
    })
}

#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
pub struct AddToCart {
    pub product_id: i32,
    pub quantity: i32,
}

impl Validate for AddToCart {
    fn validate(&self) -> Result<(), DomainError> {
        require_positive("quantity", self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
pub struct CartQuantity {
    pub quantity: i32,
}

impl Validate for CartQuantity {
    fn validate(&self) -> Result<(), DomainError> {
        require_positive("quantity", self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer() -> Customer {
        Customer {
            full_name: "Ana Torres".to_string(),
            email: "ana@example.com".to_string(),
            shipping_address: "Calle Mayor 1, Madrid".to_string(),
            phone: "+34 600 000 000".to_string(),
            registration_date: NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date"),
        }
    }

    #[test]
    fn valid_customer_passes() {
        assert!(customer().validate().is_ok());
    }

    #[test]
    fn customer_with_bad_email_is_rejected() {
        let c = Customer {
            email: "not-an-email".to_string(),
            ..customer()
        };
        assert!(matches!(c.validate(), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn customer_phone_longer_than_column_is_rejected() {
        let c = Customer {
            phone: "0".repeat(21),
            ..customer()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn customer_name_and_email_fit_their_columns() {
        let long_name = Customer {
            full_name: "a".repeat(256),
            ..customer()
        };
        assert!(matches!(long_name.validate(), Err(DomainError::InvalidInput(_))));

        let long_email = Customer {
            email: format!("{}@example.com", "a".repeat(250)),
            ..customer()
        };
        assert!(long_email.validate().is_err());
    }

    #[test]
    fn payment_type_longer_than_column_is_rejected() {
        let method = PaymentMethod {
            payment_type: "c".repeat(51),
            customer_id: Some(1),
        };
        assert!(method.validate().is_err());
    }

    #[test]
    fn combined_quantity_rejects_overflow() {
        assert_eq!(combined_quantity(2, 3), Ok(5));
        assert!(matches!(
            combined_quantity(i32::MAX, 1),
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[test]
    fn cart_additions_need_a_positive_quantity() {
        let add = AddToCart {
            product_id: 1,
            quantity: 0,
        };
        assert!(add.validate().is_err());
        assert!(CartQuantity { quantity: 3 }.validate().is_ok());
    }

    #[test]
    fn customer_deserializes_iso_dates() {
        let c: Customer = serde_json::from_value(serde_json::json!({
            "full_name": "Ana Torres",
            "email": "ana@example.com",
            "shipping_address": "Calle Mayor 1",
            "phone": "600000000",
            "registration_date": "2024-01-15"
        }))
        .expect("valid customer json");
        assert_eq!(c.registration_date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }
}
