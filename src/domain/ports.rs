use crate::domain::model::{Order, Report};
use crate::domain::report::ReportOutcome;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    /// Order JSON to read; `None` means the embedded sample order.
    fn input_path(&self) -> Option<&str>;
    fn output_path(&self) -> Option<&str>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Order>;
    async fn transform(&self, order: Order) -> Result<ReportOutcome>;
    async fn load(&self, report: Report) -> Result<String>;
}
