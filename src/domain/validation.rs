use bigdecimal::{BigDecimal, Zero};
use chrono::NaiveDate;

use super::errors::DomainError;

/// Basic shape checks applied to a record before it reaches the database.
pub trait Validate {
    fn validate(&self) -> Result<(), DomainError>;
}

fn invalid(msg: String) -> DomainError {
    DomainError::InvalidInput(msg)
}

pub fn require_text(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(invalid(format!("{field} must not be empty")));
    }
    Ok(())
}

pub fn require_max_len(field: &str, value: &str, max: usize) -> Result<(), DomainError> {
    if value.chars().count() > max {
        return Err(invalid(format!("{field} must be at most {max} characters")));
    }
    Ok(())
}

pub fn require_non_negative(field: &str, value: &BigDecimal) -> Result<(), DomainError> {
    if *value < BigDecimal::zero() {
        return Err(invalid(format!("{field} must not be negative, got {value}")));
    }
    Ok(())
}

/// Largest integer part a `NUMERIC(12, 2)` column stores, plus one.
const MONEY_LIMIT: i64 = 10_000_000_000;

/// Non-negative and representable as `NUMERIC(12, 2)` once rounded to cents.
pub fn require_money(field: &str, value: &BigDecimal) -> Result<(), DomainError> {
    require_non_negative(field, value)?;
    if value.round(2) >= BigDecimal::from(MONEY_LIMIT) {
        return Err(invalid(format!(
            "{field} must be below {MONEY_LIMIT}, got {value}"
        )));
    }
    Ok(())
}

/// Non-empty text that fits a `VARCHAR(max)` column.
pub fn require_bounded_text(field: &str, value: &str, max: usize) -> Result<(), DomainError> {
    require_text(field, value)?;
    require_max_len(field, value, max)
}

pub fn require_positive(field: &str, value: i32) -> Result<(), DomainError> {
    if value <= 0 {
        return Err(invalid(format!("{field} must be positive, got {value}")));
    }
    Ok(())
}

pub fn require_in_range(field: &str, value: i32, min: i32, max: i32) -> Result<(), DomainError> {
    if !(min..=max).contains(&value) {
        return Err(invalid(format!(
            "{field} must be between {min} and {max}, got {value}"
        )));
    }
    Ok(())
}

pub fn require_date_order(
    earlier_field: &str,
    earlier: NaiveDate,
    later_field: &str,
    later: NaiveDate,
) -> Result<(), DomainError> {
    if later < earlier {
        return Err(invalid(format!(
            "{later_field} ({later}) must not be before {earlier_field} ({earlier})"
        )));
    }
    Ok(())
}

/// Accepts `local@domain.tld`; anything stricter belongs to a mail provider.
pub fn require_email(field: &str, value: &str) -> Result<(), DomainError> {
    let well_formed = value
        .split_once('@')
        .map(|(local, domain)| {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        })
        .unwrap_or(false);
    if !well_formed || value.chars().any(char::is_whitespace) {
        return Err(invalid(format!("{field} is not a valid email address")));
    }
    Ok(())
}
