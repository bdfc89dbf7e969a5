use crate::core::codec::{parse_order, parse_order_bytes, render_report};
use crate::core::{ConfigProvider, Order, Pipeline, Report, Storage};
use crate::domain::report::{generate_report_with_warnings, ReportOutcome};
use crate::domain::sample::SAMPLE_ORDER_JSON;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Reads one order, builds its report, and renders it as indented JSON.
pub struct ReportPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ReportPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ReportPipeline<S, C> {
    async fn extract(&self) -> Result<Order> {
        match self.config.input_path() {
            Some(path) => {
                tracing::debug!("Reading order from {}", path);
                let data = self.storage.read_file(path).await?;
                parse_order_bytes(&data)
            }
            None => {
                tracing::debug!("No input given, using the embedded sample order");
                parse_order(SAMPLE_ORDER_JSON)
            }
        }
    }

    async fn transform(&self, order: Order) -> Result<ReportOutcome> {
        Ok(generate_report_with_warnings(&order))
    }

    async fn load(&self, report: Report) -> Result<String> {
        let rendered = render_report(&report)?;

        if let Some(path) = self.config.output_path() {
            tracing::debug!("Writing report ({} bytes) to {}", rendered.len(), path);
            self.storage.write_file(path, rendered.as_bytes()).await?;
        }

        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ReportError;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn put(&self, path: &str, data: &str) {
            self.files
                .lock()
                .await
                .insert(path.to_string(), data.as_bytes().to_vec());
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            self.files.lock().await.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                ReportError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct TestConfig {
        input: Option<String>,
        output: Option<String>,
    }

    impl ConfigProvider for TestConfig {
        fn input_path(&self) -> Option<&str> {
            self.input.as_deref()
        }

        fn output_path(&self) -> Option<&str> {
            self.output.as_deref()
        }
    }

    #[tokio::test]
    async fn test_extract_falls_back_to_sample_order() {
        let pipeline = ReportPipeline::new(
            MockStorage::new(),
            TestConfig {
                input: None,
                output: None,
            },
        );

        let order = pipeline.extract().await.unwrap();
        assert_eq!(order.order_id, 12345);
        assert_eq!(order.items.len(), 3);
    }

    #[tokio::test]
    async fn test_extract_reads_input_through_storage() {
        let storage = MockStorage::new();
        storage
            .put(
                "order.json",
                r#"{"order_id": 12347, "customer": {"name": "Jane Doe"}, "items": []}"#,
            )
            .await;
        let pipeline = ReportPipeline::new(
            storage,
            TestConfig {
                input: Some("order.json".to_string()),
                output: None,
            },
        );

        let order = pipeline.extract().await.unwrap();
        assert_eq!(order.order_id, 12347);
        assert_eq!(order.customer.name, "Jane Doe");
    }

    #[tokio::test]
    async fn test_extract_missing_input_is_io_error() {
        let pipeline = ReportPipeline::new(
            MockStorage::new(),
            TestConfig {
                input: Some("missing.json".to_string()),
                output: None,
            },
        );

        assert!(matches!(
            pipeline.extract().await,
            Err(ReportError::Io(_))
        ));
    }

    #[tokio::test]
    async fn test_load_writes_output_when_configured() {
        let storage = MockStorage::new();
        let pipeline = ReportPipeline::new(
            storage.clone(),
            TestConfig {
                input: None,
                output: Some("report.json".to_string()),
            },
        );

        let order = pipeline.extract().await.unwrap();
        let outcome = pipeline.transform(order).await.unwrap();
        let rendered = pipeline.load(outcome.report).await.unwrap();

        let written = storage.get_file("report.json").await.unwrap();
        assert_eq!(written, rendered.as_bytes());

        let value: serde_json::Value = serde_json::from_slice(&written).unwrap();
        assert_eq!(value["total_cost"], serde_json::json!(1095.5));
        assert_eq!(
            value["items"],
            serde_json::json!(["Laptop", "Mouse", "Keyboard"])
        );
    }
}
