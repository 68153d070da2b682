use std::future::Future;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ApiError;

/// A record addressable by its server-assigned id.
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
}

/// Client-visible state of one remote collection.
#[derive(Debug, Clone)]
pub struct CollectionState<T> {
    /// Server response order; not guaranteed stable across refreshes.
    pub data: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

struct Inner<T> {
    state: CollectionState<T>,
    /// Sequence handed to the next operation.
    next_seq: u64,
    /// Sequence of the most recently applied mutation. A wholesale snapshot
    /// issued before this point is stale and must not be applied.
    last_write: u64,
}

/// In-memory mirror of one remote collection.
///
/// Every operation runs the same three-phase lifecycle: issue, suspend at the
/// network call, then a single terminal transition. The terminal transitions
/// are the only place `data`/`loading`/`error` are mutated, and the lock is
/// never held across the network await.
#[derive(Clone)]
pub struct Store<T: Entity> {
    name: &'static str,
    inner: Arc<RwLock<Inner<T>>>,
}

impl<T: Entity> Store<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            inner: Arc::new(RwLock::new(Inner {
                state: CollectionState::default(),
                next_seq: 0,
                last_write: 0,
            })),
        }
    }

    pub async fn snapshot(&self) -> CollectionState<T> {
        self.inner.read().await.state.clone()
    }

    pub async fn data(&self) -> Vec<T> {
        self.inner.read().await.state.data.clone()
    }

    pub async fn error(&self) -> Option<String> {
        self.inner.read().await.state.error.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.inner.read().await.state.loading
    }

    /// Replaces the collection with a fresh server snapshot.
    ///
    /// On failure the previous `data` stays available and only `error` is
    /// set. A snapshot that was requested before a mutation has since been
    /// applied is discarded rather than allowed to resurrect overwritten
    /// state.
    pub async fn refresh<F, Fut>(&self, op: F) -> Result<(), ApiError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>, ApiError>>,
    {
        let seq = self.begin(true).await;

        match op().await {
            Ok(items) => {
                let mut inner = self.inner.write().await;
                inner.state.loading = false;
                if seq < inner.last_write {
                    tracing::warn!(
                        collection = self.name,
                        seq,
                        last_write = inner.last_write,
                        "discarding stale snapshot"
                    );
                } else {
                    tracing::debug!(collection = self.name, count = items.len(), "refreshed");
                    inner.state.data = items;
                }
                Ok(())
            }
            Err(err) => Err(self.fail(err).await),
        }
    }

    /// Runs a create against the backend and appends the returned entity.
    pub async fn apply_create<F, Fut>(&self, op: F) -> Result<T, ApiError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let seq = self.begin(false).await;

        match op().await {
            Ok(created) => {
                let mut inner = self.inner.write().await;
                inner.state.loading = false;
                inner.last_write = inner.last_write.max(seq);
                inner.state.data.push(created.clone());
                tracing::info!(collection = self.name, id = created.id(), "created");
                Ok(created)
            }
            Err(err) => Err(self.fail(err).await),
        }
    }

    /// Runs an update against the backend and replaces the matching entity.
    ///
    /// The `Result` is handed back so a caller can keep its editor open on
    /// failure and close it only once the update landed.
    pub async fn apply_update<F, Fut>(&self, op: F) -> Result<T, ApiError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let seq = self.begin(false).await;

        match op().await {
            Ok(updated) => {
                let mut inner = self.inner.write().await;
                inner.state.loading = false;
                inner.last_write = inner.last_write.max(seq);
                match inner
                    .state
                    .data
                    .iter_mut()
                    .find(|entity| entity.id() == updated.id())
                {
                    Some(slot) => *slot = updated.clone(),
                    None => tracing::debug!(
                        collection = self.name,
                        id = updated.id(),
                        "updated entity not in cache"
                    ),
                }
                tracing::info!(collection = self.name, id = updated.id(), "updated");
                Ok(updated)
            }
            Err(err) => Err(self.fail(err).await),
        }
    }

    /// Runs a delete against the backend and drops the matching entity.
    pub async fn apply_remove<F, Fut>(&self, id: &str, op: F) -> Result<(), ApiError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), ApiError>>,
    {
        let seq = self.begin(false).await;

        match op().await {
            Ok(()) => {
                let mut inner = self.inner.write().await;
                inner.state.loading = false;
                inner.last_write = inner.last_write.max(seq);
                inner.state.data.retain(|entity| entity.id() != id);
                tracing::info!(collection = self.name, id, "removed");
                Ok(())
            }
            Err(err) => Err(self.fail(err).await),
        }
    }

    async fn begin(&self, reset_error: bool) -> u64 {
        let mut inner = self.inner.write().await;
        inner.next_seq += 1;
        inner.state.loading = true;
        if reset_error {
            inner.state.error = None;
        }
        inner.next_seq
    }

    async fn fail(&self, err: ApiError) -> ApiError {
        tracing::error!(collection = self.name, error = %err, "operation failed");
        let mut inner = self.inner.write().await;
        inner.state.loading = false;
        inner.state.error = Some(err.to_string());
        err
    }
}
