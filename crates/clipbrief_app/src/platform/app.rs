use std::sync::{mpsc, Arc};

use bridge_logging::bridge_info;
use clipbrief_bridge::{BridgeHandle, HttpBackend, NativeDirectoryDialog, PathGateway};
use clipbrief_core::{update, AppState, Msg, Theme};

use super::effects::{self, EffectRunner};
use super::logging::{self, LogDestination};
use super::persistence;
use super::prompt::{PromptRequest, UiPromptEntry};
use super::ui;

const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8799";

pub fn run_app() -> Result<(), eframe::Error> {
    logging::initialize(LogDestination::Both);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Clipbrief",
        options,
        Box::new(|cc| Ok(Box::new(ClipbriefApp::new(cc)))),
    )
}

struct ActivePrompt {
    reply: mpsc::Sender<Option<String>>,
    buffer: String,
}

pub struct ClipbriefApp {
    state: AppState,
    effects: EffectRunner,
    msg_rx: mpsc::Receiver<Msg>,
    prompt_rx: mpsc::Receiver<PromptRequest>,
    active_prompt: Option<ActivePrompt>,
    stored_theme: Option<Theme>,
    theme_restored: bool,
}

impl ClipbriefApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let backend_url = std::env::var("CLIPBRIEF_BACKEND_URL")
            .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_owned());
        bridge_info!("Using pipeline backend at {}", backend_url);

        let (prompt_tx, prompt_rx) = mpsc::channel();
        let gateway = PathGateway::new(
            Box::new(NativeDirectoryDialog),
            Box::new(UiPromptEntry::new(prompt_tx, cc.egui_ctx.clone())),
        );
        let (bridge, events) =
            BridgeHandle::spawn(Arc::new(HttpBackend::new(backend_url)), Arc::new(gateway));

        let (msg_tx, msg_rx) = mpsc::channel();
        effects::spawn_event_forwarder(events, msg_tx, cc.egui_ctx.clone());

        Self {
            state: AppState::new(),
            effects: EffectRunner::new(bridge),
            msg_rx,
            prompt_rx,
            active_prompt: None,
            stored_theme: persistence::load_theme(),
            theme_restored: false,
        }
    }

    fn dispatch(&mut self, ctx: &egui::Context, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            ctx.request_repaint();
        }
        self.state = state;
        self.effects.run(ctx, effects);
    }

    fn show_prompt_window(&mut self, ctx: &egui::Context) {
        let Some(prompt) = self.active_prompt.as_mut() else {
            return;
        };

        let mut submitted = false;
        let mut cancelled = false;
        egui::Window::new("Enter download folder")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("The folder dialog is unavailable. Type a path instead:");
                ui.text_edit_singleline(&mut prompt.buffer);
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        submitted = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancelled = true;
                    }
                });
            });

        if submitted || cancelled {
            let prompt = self.active_prompt.take().expect("prompt present");
            let reply = if submitted { Some(prompt.buffer) } else { None };
            // The gateway blocks on this reply; a dropped receiver is fine.
            let _ = prompt.reply.send(reply);
        }
    }
}

impl eframe::App for ClipbriefApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_restored {
            self.theme_restored = true;
            let theme = self
                .stored_theme
                .take()
                .unwrap_or_else(|| system_theme(ctx));
            self.dispatch(ctx, Msg::ThemeRestored(theme));
        }

        while let Ok(request) = self.prompt_rx.try_recv() {
            self.active_prompt = Some(ActivePrompt {
                reply: request.reply,
                buffer: String::new(),
            });
        }

        let mut inbox = Vec::new();
        while let Ok(msg) = self.msg_rx.try_recv() {
            inbox.push(msg);
        }
        for msg in inbox {
            self.dispatch(ctx, msg);
        }

        self.show_prompt_window(ctx);

        let view = self.state.view();
        for msg in ui::render(ctx, &view) {
            self.dispatch(ctx, msg);
        }
    }
}

/// First-load default when no preference was persisted.
fn system_theme(ctx: &egui::Context) -> Theme {
    match ctx.input(|input| input.raw.system_theme) {
        Some(egui::Theme::Dark) => Theme::Dark,
        _ => Theme::Light,
    }
}
