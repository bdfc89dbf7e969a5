use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract → transform → load and returns the rendered report JSON.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting report generation");

        tracing::debug!("Reading order...");
        let order = self.pipeline.extract().await?;
        tracing::info!(
            "Loaded order {} with {} items",
            order.order_id,
            order.items.len()
        );

        let outcome = self.pipeline.transform(order).await?;
        if outcome.is_degraded() {
            tracing::info!("Total cost defaulted to 0 after item validation failed");
        }
        tracing::info!(
            "Report built for order {} ({} warnings)",
            outcome.report.order_id,
            outcome.warnings.len()
        );

        tracing::debug!("Rendering report...");
        let rendered = self.pipeline.load(outcome.report).await?;

        Ok(rendered)
    }
}
