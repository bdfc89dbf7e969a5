use crate::domain::model::Item;
use crate::utils::error::{ReportError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// A line item may only contribute to a total when both price and quantity
/// are strictly positive.
impl Validate for Item {
    fn validate(&self) -> Result<()> {
        if self.price <= 0.0 || self.quantity <= 0 {
            return Err(ReportError::InvalidItem {
                item: self.name.clone(),
            });
        }
        Ok(())
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(ReportError::Config {
            message: format!("{}: path cannot be empty", field_name),
        });
    }

    if path.contains('\0') {
        return Err(ReportError::Config {
            message: format!("{}: path contains null bytes", field_name),
        });
    }

    Ok(())
}
