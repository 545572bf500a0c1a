//! Local collection endpoint.
//!
//! Serves the `/feedback` contract from an in-memory collection with
//! sequential ids. Used by `feedback-board serve` and as the remote
//! collaborator in integration tests.

pub mod error;
pub mod routes;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::feedback::sample_records;
use crate::remote::{IdStrategy, MemoryCollection};

pub use error::ServerError;
pub use routes::build_router;

pub struct FeedbackServer {
    listener: TcpListener,
    addr: SocketAddr,
    collection: Arc<MemoryCollection>,
}

impl FeedbackServer {
    /// Bind to `addr` (use port 0 for an ephemeral port).
    pub async fn bind(addr: &str, collection: Arc<MemoryCollection>) -> std::io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        let addr = listener.local_addr()?;
        Ok(Self {
            listener,
            addr,
            collection,
        })
    }

    /// Bind using the `[server]` config section.
    pub async fn from_config(config: &ServerConfig) -> std::io::Result<Self> {
        let records = if config.seed {
            sample_records()
        } else {
            Vec::new()
        };
        let collection = Arc::new(MemoryCollection::with_records(IdStrategy::Sequential, records));
        Self::bind(&config.bind_addr, collection).await
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn collection(&self) -> Arc<MemoryCollection> {
        self.collection.clone()
    }

    /// Serve until `shutdown` resolves.
    pub async fn run_until<F>(self, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tracing::info!(
            addr = %self.addr,
            records = self.collection.len(),
            "Feedback collection listening"
        );
        let app = build_router(self.collection);
        axum::serve(self.listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;
        tracing::info!("Feedback collection stopped");
        Ok(())
    }
}
