//! Forum-post snapshot access.
//!
//! This crate provides a clean API to:
//! - Deserialize the snapshot data model (posts with replies and follow-ups)
//! - Fetch the whole corpus as one blob from a file or an HTTP endpoint
//!
//! The corpus is intentionally loaded wholesale on every query; there is no
//! index and no incremental update path.

mod config;
mod errors;
mod record;

pub use config::{PostStoreConfig, SnapshotSource};
pub use errors::PostStoreError;
pub use record::{Answers, Followup, Post, ReplyEntry, RichReply};

use std::time::Instant;

use tracing::{debug, trace};

/// High-level facade over the snapshot source.
///
/// This is the single entry point recommended for application code.
pub struct PostStore {
    cfg: PostStoreConfig,
    client: reqwest::Client,
}

impl PostStore {
    /// Constructs a new store from the given configuration.
    ///
    /// # Errors
    /// Returns `PostStoreError::Http` if the HTTP client cannot be built.
    pub fn new(cfg: PostStoreConfig) -> Result<Self, PostStoreError> {
        trace!("PostStore::new source={}", cfg.source.describe());
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(cfg.timeout_secs))
            .build()?;
        Ok(Self { cfg, client })
    }

    /// Constructs a store from environment variables.
    ///
    /// # Errors
    /// Propagates config resolution and client construction errors.
    pub fn from_env() -> Result<Self, PostStoreError> {
        Self::new(PostStoreConfig::from_env()?)
    }

    /// Human-readable source location, for logs and `/health`.
    pub fn describe_source(&self) -> String {
        self.cfg.source.describe()
    }

    /// Loads and parses the full post corpus.
    ///
    /// The blob is read in one piece and parsed as a JSON array of posts.
    /// An empty blob is reported as [`PostStoreError::SnapshotMissing`]
    /// rather than as an empty corpus, so callers can distinguish "nothing
    /// ingested yet" from "no posts matched".
    ///
    /// # Errors
    /// Returns errors on I/O, transport, non-2xx statuses, and parse
    /// failures.
    pub async fn fetch_all(&self) -> Result<Vec<Post>, PostStoreError> {
        let started = Instant::now();

        let raw = match &self.cfg.source {
            SnapshotSource::File(path) => std::fs::read_to_string(path)?,
            SnapshotSource::Http { url } => {
                let resp = self.client.get(url).send().await?;
                if !resp.status().is_success() {
                    let status = resp.status();
                    let text = resp.text().await.unwrap_or_default();
                    return Err(PostStoreError::HttpStatus {
                        status,
                        url: url.clone(),
                        snippet: text.chars().take(240).collect(),
                    });
                }
                resp.text().await?
            }
        };

        if raw.trim().is_empty() {
            return Err(PostStoreError::SnapshotMissing(self.cfg.source.describe()));
        }

        let posts: Vec<Post> = serde_json::from_str(&raw)?;

        debug!(
            count = posts.len(),
            latency_ms = started.elapsed().as_millis(),
            source = %self.cfg.source.describe(),
            "snapshot loaded"
        );

        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::io::Write as _;

    const SNAPSHOT: &str = r#"[
        {"id":"1","subject":"Midterm curve","content":"","tags":[],"answers":{}},
        {"id":"2","subject":"Unrelated","content":"thread_wait example code","tags":["sync"],"answers":{}}
    ]"#;

    #[tokio::test]
    async fn fetch_all_from_file() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(SNAPSHOT.as_bytes()).unwrap();

        let store = PostStore::new(PostStoreConfig {
            source: SnapshotSource::File(tmp.path().to_path_buf()),
            timeout_secs: 5,
        })
        .unwrap();

        let posts = store.fetch_all().await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, "1");
        assert_eq!(posts[1].tags, vec!["sync"]);
    }

    #[tokio::test]
    async fn fetch_all_from_http() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/snapshot");
                then.status(200).body(SNAPSHOT);
            })
            .await;

        let store = PostStore::new(PostStoreConfig {
            source: SnapshotSource::Http {
                url: format!("{}/snapshot", server.base_url()),
            },
            timeout_secs: 5,
        })
        .unwrap();

        let posts = store.fetch_all().await.unwrap();
        assert_eq!(posts.len(), 2);
    }

    #[tokio::test]
    async fn empty_blob_is_snapshot_missing() {
        let tmp = tempfile::NamedTempFile::new().unwrap();

        let store = PostStore::new(PostStoreConfig {
            source: SnapshotSource::File(tmp.path().to_path_buf()),
            timeout_secs: 5,
        })
        .unwrap();

        match store.fetch_all().await {
            Err(PostStoreError::SnapshotMissing(_)) => {}
            other => panic!("expected SnapshotMissing, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_2xx_maps_to_http_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/snapshot");
                then.status(404).body("no such key");
            })
            .await;

        let store = PostStore::new(PostStoreConfig {
            source: SnapshotSource::Http {
                url: format!("{}/snapshot", server.base_url()),
            },
            timeout_secs: 5,
        })
        .unwrap();

        match store.fetch_all().await {
            Err(PostStoreError::HttpStatus { status, .. }) => {
                assert_eq!(status.as_u16(), 404);
            }
            other => panic!("expected HttpStatus, got {other:?}"),
        }
    }
}
