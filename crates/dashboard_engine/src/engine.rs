use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use dashboard_logging::{dashboard_debug, dashboard_error};
use tokio::runtime::Runtime;
use tokio::sync::mpsc as async_mpsc;

use crate::detail::fetch_detail;
use crate::{
    ApiRequest, ApiResponse, EngineEvent, Gateway, GatewayError, GatewaySettings, RequestId,
    ReqwestGateway,
};

enum EngineCommand {
    Submit {
        request_id: RequestId,
        request: ApiRequest,
    },
}

/// Runs gateway requests on a dedicated single-threaded runtime.
///
/// Requests are never cancelled: each one reports exactly one
/// [`EngineEvent::Completed`], in whatever order they finish.
pub struct EngineHandle {
    cmd_tx: async_mpsc::UnboundedSender<EngineCommand>,
    event_tx: mpsc::Sender<EngineEvent>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: GatewaySettings) -> Result<Self, GatewayError> {
        let gateway = ReqwestGateway::new(settings)?;
        Self::with_gateway(Arc::new(gateway))
    }

    pub fn with_gateway(gateway: Arc<dyn Gateway>) -> Result<Self, GatewayError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build();
        Self::start(gateway, runtime)
    }

    fn start(gateway: Arc<dyn Gateway>, runtime: io::Result<Runtime>) -> Result<Self, GatewayError> {
        let runtime = runtime.map_err(|err| {
            dashboard_error!("Failed to start engine runtime: {}", err);
            GatewayError::Network(format!("engine runtime unavailable: {err}"))
        })?;
        let (cmd_tx, mut cmd_rx) = async_mpsc::unbounded_channel::<EngineCommand>();
        let (event_tx, event_rx) = mpsc::channel();

        let worker_tx = event_tx.clone();
        thread::spawn(move || {
            runtime.block_on(async move {
                while let Some(command) = cmd_rx.recv().await {
                    let gateway = gateway.clone();
                    let event_tx = worker_tx.clone();
                    tokio::spawn(async move {
                        handle_command(gateway.as_ref(), command, event_tx).await;
                    });
                }
            });
        });

        Ok(Self {
            cmd_tx,
            event_tx,
            event_rx,
        })
    }

    /// Queues a request. If the engine thread is gone the request completes
    /// at once with a [`GatewayError::Network`].
    pub fn submit(&self, request_id: RequestId, request: ApiRequest) {
        let command = EngineCommand::Submit {
            request_id,
            request,
        };
        if self.cmd_tx.send(command).is_err() {
            dashboard_error!("Engine stopped; request #{} not sent", request_id);
            let _ = self.event_tx.send(EngineEvent::Completed {
                request_id,
                result: Err(GatewayError::Network("engine is not running".to_string())),
            });
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    gateway: &dyn Gateway,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Submit {
            request_id,
            request,
        } => {
            dashboard_debug!("request #{} {:?}", request_id, request);
            let result = execute(gateway, request).await;
            let _ = event_tx.send(EngineEvent::Completed { request_id, result });
        }
    }
}

async fn execute(gateway: &dyn Gateway, request: ApiRequest) -> Result<ApiResponse, GatewayError> {
    match request {
        ApiRequest::Health => gateway.health().await.map(ApiResponse::Health),
        ApiRequest::ListKeywords => gateway.list_keywords().await.map(ApiResponse::Keywords),
        ApiRequest::CreateKeyword { term } => {
            gateway.create_keyword(&term).await.map(ApiResponse::Created)
        }
        ApiRequest::DeleteKeyword { id } => {
            gateway.delete_keyword(id).await.map(ApiResponse::Deleted)
        }
        ApiRequest::CrawlKeyword { id } => gateway.crawl_keyword(id).await.map(ApiResponse::Crawled),
        ApiRequest::LoadDetail { keyword_id } => fetch_detail(gateway, keyword_id)
            .await
            .map(ApiResponse::Detail),
    }
}
