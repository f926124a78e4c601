//! Query dispatcher: validate, fetch once, normalize, classify.

use std::sync::Arc;

use tokio::sync::oneshot;
use tracing::{debug, info, instrument};

use super::client::{Backend, HttpBackend};
use super::error::{Failure, LookingGlassError, classify};
use super::normalize::normalize;
use super::query::{Query, QueryOutput, QueryRequest};
use super::validate::validate;
use crate::core::config::BackendConfig;

/// Runs Looking Glass queries against a [`Backend`].
///
/// Holds no per-call state, so one instance can serve any number of
/// concurrent callers.
#[derive(Debug)]
pub struct LookingGlassService<B = HttpBackend> {
    backend: B,
}

impl LookingGlassService<HttpBackend> {
    pub fn from_config(config: &BackendConfig) -> Self {
        Self::new(HttpBackend::new(config))
    }
}

impl<B: Backend> LookingGlassService<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Validate a raw request and run it. Blocking.
    pub fn handle(&self, request: &QueryRequest) -> Result<QueryOutput, LookingGlassError> {
        let query = validate(request)?;
        self.execute(&query)
    }

    /// Run an already validated query. Blocking.
    ///
    /// Issues exactly one backend request; on failure no partial result is
    /// returned, only the classified error.
    #[instrument(skip(self), fields(kind = query.kind()))]
    pub fn execute(&self, query: &Query) -> Result<QueryOutput, LookingGlassError> {
        let endpoint = query.endpoint();
        info!("Querying {}", query.describe());

        let raw = self
            .backend
            .fetch(endpoint, &query.params())
            .map_err(|e| classify(Failure::Fetch(e), query))?;
        debug!(path = endpoint.path(), "Backend payload: {}", raw);

        normalize(query, raw).map_err(|e| classify(Failure::Normalize(e), query))
    }

    /// Run [`handle`](Self::handle) on a dedicated OS thread and await the
    /// outcome, keeping blocking I/O off the async runtime.
    pub async fn handle_detached(
        self: Arc<Self>,
        request: QueryRequest,
    ) -> Result<QueryOutput, LookingGlassError> {
        let (tx, rx) = oneshot::channel();
        std::thread::spawn(move || {
            let _ = tx.send(self.handle(&request));
        });

        rx.await.unwrap_or_else(|_| {
            Err(LookingGlassError::unexpected(
                "Unexpected error: the query worker stopped before answering.",
            ))
        })
    }
}
