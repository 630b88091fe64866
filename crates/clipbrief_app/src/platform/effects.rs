use std::sync::mpsc;
use std::thread;

use bridge_logging::bridge_warn;
use chrono::Local;
use clipbrief_bridge::{BridgeEvent, BridgeEvents, BridgeHandle, PipelineCall, PipelineResponse};
use clipbrief_core::{Effect, Msg, PipelineOutcome, PipelineRequest, Theme};

use super::persistence;

pub struct EffectRunner {
    bridge: BridgeHandle,
}

impl EffectRunner {
    pub fn new(bridge: BridgeHandle) -> Self {
        Self { bridge }
    }

    pub fn run(&self, ctx: &egui::Context, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitPipeline(request) => self.bridge.submit(map_request(request)),
                Effect::PickDownloadPath => self.bridge.pick_path(),
                Effect::ApplyTheme(theme) => apply_theme(ctx, theme),
                Effect::PersistTheme(theme) => persistence::save_theme(theme),
            }
        }
    }
}

/// Forwards settled bridge events into the message loop, stamping them on
/// arrival, and wakes the shell for a repaint.
pub fn spawn_event_forwarder(events: BridgeEvents, msg_tx: mpsc::Sender<Msg>, ctx: egui::Context) {
    thread::spawn(move || {
        while let Some(event) = events.recv() {
            if msg_tx.send(map_event(event)).is_err() {
                break;
            }
            ctx.request_repaint();
        }
    });
}

fn apply_theme(ctx: &egui::Context, theme: Theme) {
    let visuals = match theme {
        Theme::Light => egui::Visuals::light(),
        Theme::Dark => egui::Visuals::dark(),
    };
    ctx.set_visuals(visuals);
}

/// Wall-clock stamp for step log lines.
pub fn stamp() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

fn map_event(event: BridgeEvent) -> Msg {
    match event {
        BridgeEvent::PipelineSettled { result } => Msg::PipelineSettled {
            outcome: result.map(map_response).map_err(|err| {
                bridge_warn!("Pipeline run failed: {}", err);
                err.to_string()
            }),
            at: stamp(),
        },
        BridgeEvent::PathPicked { path } => Msg::DownloadPathPicked(path),
    }
}

fn map_request(request: PipelineRequest) -> PipelineCall {
    PipelineCall {
        url: request.url,
        base_path: request.base_path,
        api_key: request.api_key,
        api_provider: request.api_provider,
    }
}

fn map_response(response: PipelineResponse) -> PipelineOutcome {
    PipelineOutcome {
        id: response.id,
        title: response.title,
        transcript_content: response.transcript_content,
        summary_content: response.summary_content,
    }
}
