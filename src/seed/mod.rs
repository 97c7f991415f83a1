pub mod builder;
pub mod reference;

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::config::{ReferenceSource, SeedCachePolicy};

pub use builder::{build_seed_history, SeedHistory};

/// Hands out seed histories according to the configured [`SeedCachePolicy`].
///
/// Under [`SeedCachePolicy::PerProcess`] only histories built without load
/// failures are cached, so a missing file is retried on the next request.
#[derive(Clone)]
pub struct SeedHistoryProvider {
    sources: Arc<[ReferenceSource]>,
    policy: SeedCachePolicy,
    cache: Arc<RwLock<Option<Arc<SeedHistory>>>>,
}

impl SeedHistoryProvider {
    pub fn new(sources: Vec<ReferenceSource>, policy: SeedCachePolicy) -> Self {
        Self {
            sources: sources.into(),
            policy,
            cache: Arc::new(RwLock::new(None)),
        }
    }

    pub fn policy(&self) -> SeedCachePolicy {
        self.policy
    }

    pub async fn seed_history(&self) -> Arc<SeedHistory> {
        if self.policy == SeedCachePolicy::PerRequest {
            return Arc::new(self.build().await);
        }

        if let Some(cached) = self.cache.read().await.as_ref() {
            debug!("Using cached seed history");
            return Arc::clone(cached);
        }

        let mut slot = self.cache.write().await;
        // Another request may have filled the slot while we waited for the lock.
        if let Some(cached) = slot.as_ref() {
            return Arc::clone(cached);
        }
        let history = Arc::new(self.build().await);
        if history.is_complete() {
            info!("Caching seed history for the process lifetime");
            *slot = Some(Arc::clone(&history));
        }
        history
    }

    /// Drops the cached seed history, if any.
    pub async fn invalidate(&self) -> bool {
        let dropped = self.cache.write().await.take().is_some();
        if dropped {
            info!("Seed history cache invalidated");
        }
        dropped
    }

    async fn build(&self) -> SeedHistory {
        let history = build_seed_history(&self.sources).await;
        if !history.is_complete() {
            warn!(
                "Seed history built with {} unavailable document(s): {}",
                history.failed_documents.len(),
                history.failed_documents.join(", ")
            );
        }
        history
    }
}
