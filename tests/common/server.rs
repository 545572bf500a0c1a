//! Local collection endpoint running on an ephemeral port.

#![allow(dead_code)]

use feedback_board::feedback::sample_records;
use feedback_board::remote::{IdStrategy, MemoryCollection};
use feedback_board::server::FeedbackServer;
use std::net::SocketAddr;
use std::sync::Arc;

pub struct TestServer {
    pub addr: SocketAddr,
    collection: Arc<MemoryCollection>,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl TestServer {
    /// Serve the three sample reviews.
    pub async fn start() -> Self {
        Self::with_collection(MemoryCollection::with_records(
            IdStrategy::Sequential,
            sample_records(),
        ))
        .await
    }

    pub async fn empty() -> Self {
        Self::with_collection(MemoryCollection::new(IdStrategy::Sequential)).await
    }

    pub async fn with_collection(collection: MemoryCollection) -> Self {
        let collection = Arc::new(collection);
        let server = FeedbackServer::bind("127.0.0.1:0", collection.clone())
            .await
            .expect("Failed to bind test server");
        let addr = server.local_addr();

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);
        tokio::spawn(async move {
            server
                .run_until(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            collection,
            shutdown: shutdown_tx,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Server-side view of the records, bypassing HTTP.
    pub fn collection(&self) -> &MemoryCollection {
        &self.collection
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}
