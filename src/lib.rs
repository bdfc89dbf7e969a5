pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig};

pub use crate::core::{
    codec::{parse_order, render_report},
    engine::ReportEngine,
    pipeline::ReportPipeline,
};
pub use domain::model::{Customer, Item, Order, Report};
pub use domain::report::{
    calculate_total_cost, extract_item_names, generate_report, generate_report_with_warnings,
    ReportOutcome, ReportWarning,
};
pub use utils::error::{ReportError, Result};
