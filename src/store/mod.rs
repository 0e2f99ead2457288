//! SQLite message store
//!
//! Reads `communication_logs(id, sender, content, timestamp)` rows, newest
//! first. Every matching row is materialized before scoring starts.

use serde::Serialize;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};
use std::path::{Path, PathBuf};

use crate::analysis::{BatchResult, Message, Scorer, aggregate_messages};
use crate::error::{TextureError, TextureResult};

const QUERY_ALL: &str = r#"
    SELECT sender, content, CAST(timestamp AS TEXT) AS message_timestamp
    FROM communication_logs
    ORDER BY timestamp DESC
    LIMIT ?
"#;

const QUERY_BY_SENDER: &str = r#"
    SELECT sender, content, CAST(timestamp AS TEXT) AS message_timestamp
    FROM communication_logs
    WHERE sender = ?
    ORDER BY timestamp DESC
    LIMIT ?
"#;

/// Filter applied to a scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanFilter {
    pub sender: Option<String>,
    pub limit: usize,
}

/// Returned when no rows match a scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoMessages {
    pub status: &'static str,
    pub filter: ScanFilter,
    pub message: &'static str,
}

/// Result of scanning the store
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScanOutcome {
    NoMessages(NoMessages),
    Analyzed(BatchResult),
}

/// Read-only handle on a SQLite message database
#[derive(Debug, Clone)]
pub struct MessageStore {
    path: PathBuf,
}

impl MessageStore {
    /// Check the configured location; it must be set and must exist
    pub fn open(path: Option<PathBuf>) -> TextureResult<Self> {
        let path = path.ok_or_else(|| {
            TextureError::Configuration("Database path not configured. Use --db-path or store.path".to_string())
        })?;

        if !path.exists() {
            return Err(TextureError::NotFound(format!("Database not found: {}", path.display())));
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fetch up to `limit` messages, newest first, optionally for one sender
    pub fn fetch(&self, limit: usize, sender: Option<&str>) -> TextureResult<Vec<Message>> {
        let rt = tokio::runtime::Runtime::new()
            .map_err(|e| TextureError::Store(format!("Failed to create tokio runtime: {}", e)))?;

        rt.block_on(self.fetch_async(limit, sender))
    }

    async fn fetch_async(&self, limit: usize, sender: Option<&str>) -> TextureResult<Vec<Message>> {
        let pool = self.connect().await?;
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let query = match sender {
            Some(sender) => sqlx::query(QUERY_BY_SENDER).bind(sender).bind(limit),
            None => sqlx::query(QUERY_ALL).bind(limit),
        };

        let rows = query
            .fetch_all(&pool)
            .await
            .map_err(|e| TextureError::Store(e.to_string()))?;
        pool.close().await;

        log::info!("Fetched {} messages from {}", rows.len(), self.path.display());

        rows.into_iter()
            .map(|row| {
                Ok(Message {
                    sender: row.try_get("sender").map_err(|e| TextureError::Store(e.to_string()))?,
                    content: row.try_get("content").map_err(|e| TextureError::Store(e.to_string()))?,
                    timestamp: row
                        .try_get("message_timestamp")
                        .map_err(|e| TextureError::Store(e.to_string()))?,
                })
            })
            .collect()
    }

    async fn connect(&self) -> TextureResult<SqlitePool> {
        let options = SqliteConnectOptions::new().filename(&self.path).read_only(true);

        SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| TextureError::Store(format!("Failed to open {}: {}", self.path.display(), e)))
    }

    /// Fetch and aggregate in one call
    pub fn scan(&self, scorer: &Scorer<'_>, limit: usize, sender: Option<&str>) -> TextureResult<ScanOutcome> {
        let messages = self.fetch(limit, sender)?;

        if messages.is_empty() {
            return Ok(ScanOutcome::NoMessages(NoMessages {
                status: "no_messages",
                filter: ScanFilter {
                    sender: sender.map(|s| s.to_string()),
                    limit,
                },
                message: "No messages found matching criteria",
            }));
        }

        Ok(ScanOutcome::Analyzed(aggregate_messages(scorer, &messages)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn seed(path: &Path, rows: &[(&str, Option<&str>, &str)]) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let options = SqliteConnectOptions::new().filename(path).create_if_missing(true);
            let pool = SqlitePoolOptions::new().connect_with(options).await.unwrap();
            sqlx::query(
                "CREATE TABLE communication_logs (id INTEGER PRIMARY KEY, sender TEXT, content TEXT, timestamp TEXT)",
            )
            .execute(&pool)
            .await
            .unwrap();
            for (sender, content, timestamp) in rows {
                sqlx::query("INSERT INTO communication_logs (sender, content, timestamp) VALUES (?, ?, ?)")
                    .bind(*sender)
                    .bind(*content)
                    .bind(*timestamp)
                    .execute(&pool)
                    .await
                    .unwrap();
            }
            pool.close().await;
        });
    }

    fn fixture() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("comms.db");
        seed(
            &path,
            &[
                ("FORGE", Some("I'm so grateful for this team!"), "2026-01-29T10:00:00"),
                ("CLIO", Some("I wonder how this works?"), "2026-01-29T10:01:00"),
                ("FORGE", Some("We're going to finish this together."), "2026-01-29T10:02:00"),
            ],
        );
        (dir, path)
    }

    #[test]
    fn test_open_without_path() {
        let err = MessageStore::open(None).unwrap_err();
        assert!(matches!(err, TextureError::Configuration(_)));
    }

    #[test]
    fn test_open_missing_database() {
        let err = MessageStore::open(Some(PathBuf::from("/nonexistent/comms.db"))).unwrap_err();
        assert!(matches!(err, TextureError::NotFound(_)));
    }

    #[test]
    fn test_fetch_newest_first() {
        let (_dir, path) = fixture();
        let store = MessageStore::open(Some(path)).unwrap();
        let messages = store.fetch(100, None).unwrap();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].timestamp.as_deref(), Some("2026-01-29T10:02:00"));
        assert_eq!(messages[2].sender.as_deref(), Some("FORGE"));
    }

    #[test]
    fn test_fetch_with_sender_and_limit() {
        let (_dir, path) = fixture();
        let store = MessageStore::open(Some(path)).unwrap();
        assert_eq!(store.fetch(100, Some("FORGE")).unwrap().len(), 2);
        assert_eq!(store.fetch(1, None).unwrap().len(), 1);
        assert!(store.fetch(100, Some("NOBODY")).unwrap().is_empty());
    }

    #[test]
    fn test_scan_aggregates() {
        let (_dir, path) = fixture();
        let store = MessageStore::open(Some(path)).unwrap();
        match store.scan(&Scorer::default(), 100, None).unwrap() {
            ScanOutcome::Analyzed(result) => {
                assert_eq!(result.total_messages, 3);
                assert_eq!(result.by_sender["FORGE"].count, 2);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_scan_no_messages() {
        let (_dir, path) = fixture();
        let store = MessageStore::open(Some(path)).unwrap();
        let outcome = store.scan(&Scorer::default(), 10, Some("NOBODY")).unwrap();
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["status"], "no_messages");
        assert_eq!(value["filter"]["sender"], "NOBODY");
        assert_eq!(value["filter"]["limit"], 10);
    }

    #[test]
    fn test_null_content_is_skipped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("comms.db");
        seed(
            &path,
            &[("FORGE", None, "2026-01-29T10:00:00"), ("CLIO", Some("calm"), "2026-01-29T10:01:00")],
        );
        let store = MessageStore::open(Some(path)).unwrap();
        match store.scan(&Scorer::default(), 100, None).unwrap() {
            ScanOutcome::Analyzed(result) => {
                assert_eq!(result.total_messages, 2);
                assert_eq!(result.analyzed_messages, 1);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
}
