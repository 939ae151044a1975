//! Cross-region read-after-write staleness probe
//!
//! Each trial deliberately races a write to the writer region against a read
//! of the reader region: the write is spawned as a background task, the read
//! goes out immediately afterwards, and a trial counts as a miss when the
//! written username is absent from the read result. The write is joined
//! before the next trial starts, so at most one write is ever in flight and
//! trials stay independent.
//!
//! A miss only demonstrates that the write had not become visible by the
//! time the racing read was served. It approximates inter-region replication
//! lag statistically; it is not a consistency proof and puts no upper bound
//! on how long replication actually took.

use crate::client::RegistryClient;
use crate::error::{AppError, Result};
use std::collections::HashSet;
use std::sync::Arc;

/// Drives write/read races between two regions and counts misses
#[derive(Debug, Clone, Copy)]
pub struct ConsistencyProber {
    trials: u32,
}

impl ConsistencyProber {
    /// Create a prober; `trials > 0` is enforced by config validation
    pub fn new(trials: u32) -> Self {
        Self { trials }
    }

    /// Run the probe: writes go to `writer`, racing reads to `reader`.
    ///
    /// `usernames` must hold one distinct, previously-unused key per trial;
    /// the caller (orchestrator) produces them via `UsernameFactory`.
    ///
    /// Returns the total miss count out of `self.trials`. Fail-fast: any
    /// failed write or read aborts the probe.
    pub async fn probe<W, R>(
        &self,
        writer: Arc<W>,
        reader: &R,
        usernames: &[String],
    ) -> Result<u32>
    where
        W: RegistryClient + 'static,
        R: RegistryClient + ?Sized,
    {
        if usernames.len() != self.trials as usize {
            return Err(AppError::internal(format!(
                "Expected {} trial usernames, got {}",
                self.trials,
                usernames.len()
            )));
        }

        let mut misses = 0u32;
        for username in usernames {
            // Fire the write without awaiting it; the race window is the gap
            // between this spawn and the reader serving the list below.
            let write = tokio::spawn({
                let writer = Arc::clone(&writer);
                let username = username.clone();
                async move { writer.register(&username).await }
            });

            let listed: HashSet<String> = reader.list().await?.into_iter().collect();
            if !listed.contains(username) {
                misses += 1;
            }

            // Join the write before the next trial so only one write is ever
            // outstanding. Its failure is as fatal as a failed read.
            write
                .await
                .map_err(|e| AppError::internal(format!("Write task panicked: {}", e)))??;
        }

        Ok(misses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::UsernameFactory;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;

    /// In-memory region pair stub.
    ///
    /// Writes land in a shared store after an optional replication delay;
    /// reads always serve the store's current contents.
    struct StubRegion {
        store: Arc<Mutex<HashSet<String>>>,
        replication_delay: Option<Duration>,
    }

    impl StubRegion {
        fn pair(replication_delay: Option<Duration>) -> (Arc<Self>, Arc<Self>) {
            let store = Arc::new(Mutex::new(HashSet::new()));
            let writer = Arc::new(Self {
                store: Arc::clone(&store),
                replication_delay,
            });
            let reader = Arc::new(Self {
                store,
                replication_delay: None,
            });
            (writer, reader)
        }
    }

    #[async_trait]
    impl RegistryClient for StubRegion {
        async fn register(&self, username: &str) -> Result<()> {
            if let Some(delay) = self.replication_delay {
                tokio::time::sleep(delay).await;
            }
            self.store.lock().unwrap().insert(username.to_string());
            Ok(())
        }

        async fn list(&self) -> Result<Vec<String>> {
            Ok(self.store.lock().unwrap().iter().cloned().collect())
        }

        async fn clear(&self) -> Result<()> {
            self.store.lock().unwrap().clear();
            Ok(())
        }
    }

    /// Reader stub that always sees every write (as if replication were
    /// instantaneous and the read lost every race)
    struct OmniscientReader {
        usernames: Vec<String>,
    }

    #[async_trait]
    impl RegistryClient for OmniscientReader {
        async fn register(&self, _username: &str) -> Result<()> {
            Ok(())
        }

        async fn list(&self) -> Result<Vec<String>> {
            Ok(self.usernames.clone())
        }

        async fn clear(&self) -> Result<()> {
            Ok(())
        }
    }

    /// Writer stub whose registry rejects every write
    struct RejectingWriter;

    #[async_trait]
    impl RegistryClient for RejectingWriter {
        async fn register(&self, _username: &str) -> Result<()> {
            Err(AppError::request_failed(500, "write rejected"))
        }

        async fn list(&self) -> Result<Vec<String>> {
            Ok(Vec::new())
        }

        async fn clear(&self) -> Result<()> {
            Ok(())
        }
    }

    /// Reader stub whose registry rejects every read
    struct RejectingReader;

    #[async_trait]
    impl RegistryClient for RejectingReader {
        async fn register(&self, _username: &str) -> Result<()> {
            Ok(())
        }

        async fn list(&self) -> Result<Vec<String>> {
            Err(AppError::request_failed(503, "read rejected"))
        }

        async fn clear(&self) -> Result<()> {
            Ok(())
        }
    }

    /// Reader stub that never sees any write
    struct BlindReader;

    #[async_trait]
    impl RegistryClient for BlindReader {
        async fn register(&self, _username: &str) -> Result<()> {
            Ok(())
        }

        async fn list(&self) -> Result<Vec<String>> {
            Ok(Vec::new())
        }

        async fn clear(&self) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_fully_visible_writes_count_zero_misses() {
        let factory = UsernameFactory::with_tag("t0");
        for trials in [1u32, 5, 10] {
            let usernames = factory.consistency_usernames(trials);
            let (writer, _) = StubRegion::pair(None);
            let reader = OmniscientReader {
                usernames: usernames.clone(),
            };

            let misses = ConsistencyProber::new(trials)
                .probe(writer, &reader, &usernames)
                .await
                .unwrap();
            assert_eq!(misses, 0);
        }
    }

    #[tokio::test]
    async fn test_fully_stale_reader_misses_every_trial() {
        let factory = UsernameFactory::with_tag("t0");
        for trials in [1u32, 5, 10] {
            let usernames = factory.consistency_usernames(trials);
            let (writer, _) = StubRegion::pair(None);

            let misses = ConsistencyProber::new(trials)
                .probe(writer, &BlindReader, &usernames)
                .await
                .unwrap();
            assert_eq!(misses, trials);
        }
    }

    #[tokio::test]
    async fn test_delayed_replication_makes_every_read_win_the_race() {
        // Writes land 50ms after being issued; the racing read is served
        // immediately, so it must win every trial.
        let factory = UsernameFactory::with_tag("t0");
        let usernames = factory.consistency_usernames(5);
        let (writer, reader) = StubRegion::pair(Some(Duration::from_millis(50)));

        let misses = ConsistencyProber::new(5)
            .probe(writer, reader.as_ref(), &usernames)
            .await
            .unwrap();
        assert_eq!(misses, 5);

        // All writes were still joined, so the store holds every username.
        assert_eq!(reader.list().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_failed_write_aborts_the_probe() {
        let factory = UsernameFactory::with_tag("t0");
        let usernames = factory.consistency_usernames(5);

        let result = ConsistencyProber::new(5)
            .probe(Arc::new(RejectingWriter), &BlindReader, &usernames)
            .await;

        // The joined write's failure is as fatal as a failed read: the probe
        // yields the error, never a miss count.
        match result {
            Err(AppError::RequestFailed { status, body }) => {
                assert_eq!(status, 500);
                assert!(body.contains("write rejected"));
            }
            other => panic!("expected RequestFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failed_read_aborts_the_probe() {
        let factory = UsernameFactory::with_tag("t0");
        let usernames = factory.consistency_usernames(5);
        let (writer, _) = StubRegion::pair(None);

        let result = ConsistencyProber::new(5)
            .probe(writer, &RejectingReader, &usernames)
            .await;

        match result {
            Err(AppError::RequestFailed { status, .. }) => assert_eq!(status, 503),
            other => panic!("expected RequestFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_username_count_mismatch_is_rejected() {
        let factory = UsernameFactory::with_tag("t0");
        let usernames = factory.consistency_usernames(3);
        let (writer, reader) = StubRegion::pair(None);

        let result = ConsistencyProber::new(10)
            .probe(writer, reader.as_ref(), &usernames)
            .await;
        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
