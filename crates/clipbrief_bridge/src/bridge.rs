use std::sync::{mpsc, Arc};
use std::thread;

use bridge_logging::bridge_info;

use crate::client::decode_response;
use crate::{BridgeEvent, PathGateway, PipelineBackend, PipelineCall};

enum BridgeCommand {
    Submit { call: PipelineCall },
    PickPath,
}

/// Command half of the bridge. Cheap to clone; the shell keeps one and sends
/// effects through it.
#[derive(Clone)]
pub struct BridgeHandle {
    cmd_tx: mpsc::Sender<BridgeCommand>,
}

/// Event half of the bridge, owned by whichever thread forwards settled
/// results back into the message loop.
pub struct BridgeEvents {
    event_rx: mpsc::Receiver<BridgeEvent>,
}

impl BridgeHandle {
    /// Spawns the bridge thread with its own tokio runtime and returns the
    /// two halves.
    pub fn spawn(
        backend: Arc<dyn PipelineBackend>,
        gateway: Arc<PathGateway>,
    ) -> (BridgeHandle, BridgeEvents) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let backend = backend.clone();
                let gateway = gateway.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(backend.as_ref(), gateway.as_ref(), command, event_tx).await;
                });
            }
        });

        (BridgeHandle { cmd_tx }, BridgeEvents { event_rx })
    }

    pub fn submit(&self, call: PipelineCall) {
        let _ = self.cmd_tx.send(BridgeCommand::Submit { call });
    }

    pub fn pick_path(&self) {
        let _ = self.cmd_tx.send(BridgeCommand::PickPath);
    }
}

impl BridgeEvents {
    /// Blocks until the next event; `None` once the bridge thread is gone.
    pub fn recv(&self) -> Option<BridgeEvent> {
        self.event_rx.recv().ok()
    }

    pub fn try_recv(&self) -> Option<BridgeEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    backend: &dyn PipelineBackend,
    gateway: &PathGateway,
    command: BridgeCommand,
    event_tx: mpsc::Sender<BridgeEvent>,
) {
    match command {
        BridgeCommand::Submit { call } => {
            bridge_info!("Submitting pipeline request for {}", call.url);
            let result = match backend.process_video(&call).await {
                Ok(payload) => decode_response(&payload),
                Err(err) => Err(err),
            };
            let _ = event_tx.send(BridgeEvent::PipelineSettled { result });
        }
        BridgeCommand::PickPath => {
            let path = gateway.select_download_path().await;
            let _ = event_tx.send(BridgeEvent::PathPicked { path });
        }
    }
}
