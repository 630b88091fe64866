use std::sync::{mpsc, Mutex};

use clipbrief_bridge::ManualPathEntry;

/// Request from the bridge thread for a manually typed path. The shell
/// answers over `reply`.
pub struct PromptRequest {
    pub reply: mpsc::Sender<Option<String>>,
}

/// Manual-entry capability backed by a prompt window in the shell.
pub struct UiPromptEntry {
    request_tx: Mutex<mpsc::Sender<PromptRequest>>,
    ctx: egui::Context,
}

impl UiPromptEntry {
    pub fn new(request_tx: mpsc::Sender<PromptRequest>, ctx: egui::Context) -> Self {
        Self {
            request_tx: Mutex::new(request_tx),
            ctx,
        }
    }
}

impl ManualPathEntry for UiPromptEntry {
    fn request_path(&self) -> Option<String> {
        let (reply_tx, reply_rx) = mpsc::channel();
        self.request_tx
            .lock()
            .ok()?
            .send(PromptRequest { reply: reply_tx })
            .ok()?;
        self.ctx.request_repaint();
        // Blocks the bridge thread until the shell answers the prompt.
        reply_rx.recv().ok().flatten()
    }
}
