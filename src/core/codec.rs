use crate::domain::model::{Order, Report};
use crate::utils::error::{ReportError, Result};

pub fn parse_order(json: &str) -> Result<Order> {
    Ok(serde_json::from_str(json)?)
}

pub fn parse_order_bytes(data: &[u8]) -> Result<Order> {
    Ok(serde_json::from_slice(data)?)
}

/// Renders a report as indented JSON for human reading. A non-finite total
/// has no JSON number form and fails the render.
pub fn render_report(report: &Report) -> Result<String> {
    if !report.total_cost.is_finite() {
        return Err(ReportError::Serialization(serde::ser::Error::custom(
            format!("unsupported value for total_cost: {}", report.total_cost),
        )));
    }
    Ok(serde_json::to_string_pretty(report)?)
}
