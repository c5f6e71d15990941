use std::sync::Arc;

use crate::domain::errors::DomainError;
use crate::domain::order_summary::{
    aggregate_order, aggregate_orders, OrderAggregate, PricingPolicy,
};
use crate::domain::ports::OrderSummarySource;

/// Per-customer result: orders that priced cleanly and those that did not.
#[derive(Debug, Default)]
pub struct CustomerOrderSummaries {
    pub orders: Vec<OrderAggregate>,
    pub failed: Vec<(i32, DomainError)>,
}

pub struct OrderService {
    source: Arc<dyn OrderSummarySource>,
    policy: PricingPolicy,
}

impl OrderService {
    pub fn new(source: Arc<dyn OrderSummarySource>, policy: PricingPolicy) -> Self {
        Self { source, policy }
    }

    pub fn order_summary(&self, order_id: i32) -> Result<OrderAggregate, DomainError> {
        let rows = self.source.order_rows(order_id)?;
        aggregate_order(&rows, self.policy).inspect_err(|e| {
            if let DomainError::MalformedRecord(detail) = e {
                log::warn!("Refusing to price order {order_id}: {detail}");
            }
        })
    }

    pub fn customer_summaries(
        &self,
        customer_id: i32,
    ) -> Result<CustomerOrderSummaries, DomainError> {
        let rows = self.source.customer_order_rows(customer_id)?;

        let mut summaries = CustomerOrderSummaries::default();
        for (order_id, result) in aggregate_orders(rows, self.policy) {
            match result {
                Ok(aggregate) => summaries.orders.push(aggregate),
                Err(e) => {
                    log::warn!("Skipping order {order_id} of customer {customer_id}: {e}");
                    summaries.failed.push((order_id, e));
                }
            }
        }
        Ok(summaries)
    }
}
