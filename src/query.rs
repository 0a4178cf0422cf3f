//! Simulated-latency queries over the staff store.
//!
//! Each fetch returns a [`QueryHandle`] right away. The handle carries the
//! value the store holds at fetch time, so a UI can render immediately, and
//! a Tokio task that delivers a fresh read once the simulated latency has
//! elapsed (stale-while-revalidate).
//!
//! Cancelling or dropping a handle aborts its task. The pending value is
//! discarded and nothing is reported as an error.
//!
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use staff_directory_core::query::StaffQueries;
//! use staff_directory_core::staff_store::StaffStore;
//!
//! # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
//! let store = Arc::new(StaffStore::empty(2026));
//! let queries = StaffQueries::new(store, Duration::from_millis(1));
//!
//! let mut handle = queries.fetch_list();
//! assert_eq!(handle.cached(), Some(&Vec::new()));
//! assert_eq!(handle.resolve().await, Some(Vec::new()));
//! # });
//! ```

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use tokio::sync::oneshot;
use tokio::task::{AbortHandle, JoinHandle};

use crate::staff_model::StaffRecord;
use crate::staff_store::StaffStore;

/// Query entry point for the UI layer.
#[derive(Clone)]
pub struct StaffQueries {
    store: Arc<StaffStore>,
    latency: Duration,
}

impl StaffQueries {
    pub fn new(store: Arc<StaffStore>, latency: Duration) -> Self {
        Self { store, latency }
    }

    pub fn store(&self) -> &Arc<StaffStore> {
        &self.store
    }

    /// Fetches the full record list.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn fetch_list(&self) -> QueryHandle<Vec<StaffRecord>> {
        let cached = self.store.list();
        let store = Arc::clone(&self.store);
        QueryHandle::spawn(Some(cached), self.latency, move || store.list())
    }

    /// Fetches a single record; resolves to `Some(None)` for an unknown id.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn fetch_by_id(&self, id: u32) -> QueryHandle<Option<StaffRecord>> {
        let cached = self.store.get_by_id(id);
        let store = Arc::clone(&self.store);
        QueryHandle::spawn(Some(cached), self.latency, move || store.get_by_id(id))
    }
}

/// A pending query with a synchronously known cached value.
pub struct QueryHandle<T> {
    cached: Option<T>,
    receiver: Option<oneshot::Receiver<T>>,
    task: Option<JoinHandle<()>>,
    cancelled: bool,
}

impl<T: Clone + Send + 'static> QueryHandle<T> {
    fn spawn<F>(cached: Option<T>, latency: Duration, read: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        let (sender, receiver) = oneshot::channel();
        let task = tokio::spawn(async move {
            tokio::time::sleep(latency).await;
            // The receiver may be gone after a cancel; the value is dropped then.
            if sender.send(read()).is_err() {
                debug!("Query resolved after its handle was released; result discarded");
            }
        });

        Self {
            cached,
            receiver: Some(receiver),
            task: Some(task),
            cancelled: false,
        }
    }

    /// The most recent value known without waiting.
    pub fn cached(&self) -> Option<&T> {
        self.cached.as_ref()
    }

    /// Waits for the simulated latency and returns the fresh value, which
    /// also replaces the cached one.
    ///
    /// Returns `None` once the query has been cancelled. Calling it again
    /// after a successful resolution returns the cached value. If the
    /// returned future is dropped before it completes, the query stays
    /// pending and a later call picks it up.
    pub async fn resolve(&mut self) -> Option<T> {
        if self.cancelled {
            return None;
        }
        let Some(receiver) = self.receiver.as_mut() else {
            return self.cached.clone();
        };

        let delivered = receiver.await;
        self.receiver = None;
        match delivered {
            Ok(value) => {
                self.task = None;
                self.cached = Some(value.clone());
                Some(value)
            }
            Err(_) => {
                self.cancelled = true;
                None
            }
        }
    }

    /// Whether the fresh value has not been delivered yet.
    pub fn is_pending(&self) -> bool {
        !self.cancelled && self.receiver.is_some()
    }
}

impl<T> QueryHandle<T> {
    /// Aborts the pending resolution. The cached value stays readable.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        if self.receiver.take().is_some() {
            self.cancelled = true;
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// A detached cancellation token for the pending task, e.g. for an
    /// unmount callback. `None` once the query has settled.
    pub fn abort_handle(&self) -> Option<AbortHandle> {
        self.task.as_ref().map(JoinHandle::abort_handle)
    }
}

impl<T> Drop for QueryHandle<T> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
