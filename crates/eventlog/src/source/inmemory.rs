//! In-memory row source.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use eventlog_core::event::{demo_rows, RawRow};
use eventlog_core::storage::{Result, RowSource};

/// Row source backed by a list of rows in memory, header excluded.
///
/// Data is not persisted and will be lost when the source is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRowSource {
    rows: Arc<RwLock<Vec<RawRow>>>,
}

impl InMemoryRowSource {
    /// Creates a source serving the given rows.
    pub fn new(rows: Vec<RawRow>) -> Self {
        Self {
            rows: Arc::new(RwLock::new(rows)),
        }
    }

    /// Creates a source serving the built-in demo rows.
    pub fn with_demo_data() -> Self {
        Self::new(demo_rows())
    }

    /// Replaces every row, as if the spreadsheet had been edited.
    #[cfg(test)]
    pub async fn replace_rows(&self, rows: Vec<RawRow>) {
        *self.rows.write().await = rows;
    }
}

#[async_trait]
impl RowSource for InMemoryRowSource {
    async fn fetch_all_rows(&self) -> Result<Vec<RawRow>> {
        Ok(self.rows.read().await.clone())
    }

    async fn fetch_row(&self, position: usize) -> Result<Option<RawRow>> {
        Ok(self.rows.read().await.get(position).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<RawRow> {
        vec![
            vec!["t1".to_string(), "2024-03-01".to_string()],
            vec!["t2".to_string()],
        ]
    }

    #[tokio::test]
    async fn test_fetch_all_rows() {
        let source = InMemoryRowSource::new(rows());
        assert_eq!(source.fetch_all_rows().await.unwrap(), rows());
    }

    #[tokio::test]
    async fn test_fetch_row() {
        let source = InMemoryRowSource::new(rows());

        assert_eq!(
            source.fetch_row(1).await.unwrap(),
            Some(vec!["t2".to_string()])
        );
        assert_eq!(source.fetch_row(2).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_replace_rows() {
        let source = InMemoryRowSource::new(rows());

        source.replace_rows(Vec::new()).await;

        assert!(source.fetch_all_rows().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_demo_data_is_not_empty() {
        let source = InMemoryRowSource::with_demo_data();
        assert!(!source.fetch_all_rows().await.unwrap().is_empty());
    }
}
