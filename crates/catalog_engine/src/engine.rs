use std::sync::{mpsc, Arc};
use std::thread;

use catalog_logging::{catalog_debug, catalog_error};

use crate::{
    CatalogClient, CatalogRequest, ClientSettings, EngineEvent, FetchError, ReqwestCatalogClient,
    RequestId,
};

/// Receives completed requests. Called from the engine's worker threads.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("catalog client setup failed: {0}")]
    Client(#[from] FetchError),
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

enum EngineCommand {
    Fetch {
        request_id: RequestId,
        request: CatalogRequest,
    },
}

/// Runs catalog requests on a background runtime.
///
/// Requests are not serialized: each one is spawned as soon as it arrives and
/// completions are reported in whatever order they finish.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings, sink: Arc<dyn EventSink>) -> Result<Self, EngineError> {
        let client = ReqwestCatalogClient::new(settings)?;
        Self::with_client(Arc::new(client), sink)
    }

    pub fn with_client(
        client: Arc<dyn CatalogClient>,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let sink = sink.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), command, sink.as_ref()).await;
                });
            }
            catalog_debug!("Engine command channel closed; shutting down");
        });

        Ok(Self { cmd_tx })
    }

    pub fn fetch(&self, request_id: RequestId, request: CatalogRequest) {
        if self
            .cmd_tx
            .send(EngineCommand::Fetch {
                request_id,
                request,
            })
            .is_err()
        {
            catalog_error!("Engine is gone; dropping request {}", request_id);
        }
    }
}

async fn handle_command(client: &dyn CatalogClient, command: EngineCommand, sink: &dyn EventSink) {
    match command {
        EngineCommand::Fetch {
            request_id,
            request,
        } => {
            let result = client.fetch_catalog(&request).await;
            if let Err(err) = &result {
                catalog_debug!("Request {} failed: {}", request_id, err);
            }
            sink.emit(EngineEvent::CatalogFetched { request_id, result });
        }
    }
}
