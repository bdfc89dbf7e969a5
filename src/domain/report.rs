//! Order → Report transform.
//!
//! The transform never fails: item validation errors are absorbed into a zero
//! total and reported as a [`ReportWarning`]. Callers that need to tell a
//! legitimately empty total from a swallowed failure should use
//! [`generate_report_with_warnings`] and check [`ReportOutcome::is_degraded`].

use std::fmt;

use crate::domain::model::{Item, Order, Report, UNKNOWN_CUSTOMER};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Non-fatal diagnostic raised while building a report.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportWarning {
    InvalidOrderId { order_id: i64 },
    EmptyItems,
    CostCalculationFailed { reason: String },
}

impl fmt::Display for ReportWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportWarning::InvalidOrderId { order_id } => {
                write!(f, "order has an invalid identifier: {}", order_id)
            }
            ReportWarning::EmptyItems => write!(f, "order contains no items"),
            ReportWarning::CostCalculationFailed { reason } => {
                write!(f, "failed to calculate total cost: {}", reason)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportOutcome {
    pub report: Report,
    pub warnings: Vec<ReportWarning>,
}

impl ReportOutcome {
    /// True when `total_cost` was substituted with 0 after a validation failure.
    pub fn is_degraded(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| matches!(w, ReportWarning::CostCalculationFailed { .. }))
    }
}

/// Sums `price * quantity` over all items, failing on the first item whose
/// price or quantity is not strictly positive.
pub fn calculate_total_cost(items: &[Item]) -> Result<f64> {
    let mut total_cost = 0.0;
    for item in items {
        item.validate()?;
        total_cost += item.price * item.quantity as f64;
    }
    Ok(total_cost)
}

pub fn extract_item_names(items: &[Item]) -> Vec<String> {
    items.iter().map(|item| item.name.clone()).collect()
}

pub fn generate_report(order: &Order) -> Report {
    generate_report_with_warnings(order).report
}

pub fn generate_report_with_warnings(order: &Order) -> ReportOutcome {
    let mut warnings = Vec::new();

    if order.order_id <= 0 {
        warnings.push(ReportWarning::InvalidOrderId {
            order_id: order.order_id,
        });
    }
    if order.items.is_empty() {
        warnings.push(ReportWarning::EmptyItems);
    }

    let customer_name = if order.customer.name.is_empty() {
        UNKNOWN_CUSTOMER.to_string()
    } else {
        order.customer.name.clone()
    };

    let total_cost = match calculate_total_cost(&order.items) {
        Ok(total) => total,
        Err(e) => {
            warnings.push(ReportWarning::CostCalculationFailed {
                reason: e.to_string(),
            });
            0.0
        }
    };

    for warning in &warnings {
        tracing::warn!(order_id = order.order_id, "⚠️ {}", warning);
    }

    ReportOutcome {
        report: Report {
            order_id: order.order_id,
            customer_name,
            total_cost,
            items: extract_item_names(&order.items),
        },
        warnings,
    }
}
