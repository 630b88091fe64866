use clipbrief_core::{AppViewModel, Msg, StepView, Theme, PROVIDER_CHOICES};

use super::effects;

/// Renders the whole frame from the view model and collects the messages the
/// user's interactions produced.
pub(crate) fn render(ctx: &egui::Context, view: &AppViewModel) -> Vec<Msg> {
    let mut msgs = Vec::new();

    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("Clipbrief");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = match view.theme {
                    Theme::Light => "Dark mode",
                    Theme::Dark => "Light mode",
                };
                if ui.button(label).clicked() {
                    msgs.push(Msg::ThemeToggled);
                }
            });
        });
    });

    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if view.is_processing {
                ui.spinner();
            }
            ui.label(&view.status);
        });
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            render_form(ui, view, &mut msgs);
            ui.separator();
            render_steps(ui, view);
            ui.separator();
            render_results(ui, view);
        });
    });

    msgs
}

fn render_form(ui: &mut egui::Ui, view: &AppViewModel, msgs: &mut Vec<Msg>) {
    egui::Grid::new("request_form")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            ui.label("Video URL");
            let mut url = view.url_input.clone();
            if ui
                .add(
                    egui::TextEdit::singleline(&mut url)
                        .hint_text("https://...")
                        .desired_width(f32::INFINITY),
                )
                .changed()
            {
                msgs.push(Msg::UrlChanged(url));
            }
            ui.end_row();

            ui.label("Download folder");
            ui.horizontal(|ui| {
                let mut path = view.download_path.clone();
                if ui.text_edit_singleline(&mut path).changed() {
                    msgs.push(Msg::DownloadPathChanged(path));
                }
                if ui.button("Browse...").clicked() {
                    msgs.push(Msg::PickDownloadPathClicked);
                }
            });
            ui.end_row();

            ui.label("Provider");
            egui::ComboBox::from_id_salt("provider")
                .selected_text(view.api_provider.clone())
                .show_ui(ui, |ui| {
                    for choice in PROVIDER_CHOICES {
                        if ui
                            .selectable_label(view.api_provider == *choice, *choice)
                            .clicked()
                        {
                            msgs.push(Msg::ApiProviderChanged((*choice).to_owned()));
                        }
                    }
                });
            ui.end_row();

            ui.label("API key");
            let mut key = view.api_key.clone();
            if ui
                .add(egui::TextEdit::singleline(&mut key).password(true))
                .changed()
            {
                msgs.push(Msg::ApiKeyChanged(key));
            }
            ui.end_row();
        });

    ui.add_space(6.0);
    let submit = ui.add_enabled(view.can_submit, egui::Button::new("Process video"));
    if submit.clicked() {
        msgs.push(Msg::ProcessClicked {
            at: effects::stamp(),
        });
    }
}

fn render_steps(ui: &mut egui::Ui, view: &AppViewModel) {
    ui.columns(3, |columns| {
        for (column, step) in columns.iter_mut().zip(&view.steps) {
            render_step_card(column, step);
        }
    });
}

fn render_step_card(ui: &mut egui::Ui, step: &StepView) {
    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.strong(step.name);
                if step.in_progress {
                    ui.spinner();
                } else if step.completed {
                    ui.label("done");
                }
            });
            ui.add(egui::ProgressBar::new(f32::from(step.progress) / 100.0).show_percentage());
            for entry in &step.output {
                ui.small(format!("[{}] {}", entry.at, entry.text));
            }
        });
    });
}

fn render_results(ui: &mut egui::Ui, view: &AppViewModel) {
    ui.strong("Transcript");
    egui::ScrollArea::vertical()
        .id_salt("transcript")
        .max_height(160.0)
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(&mut view.transcript.as_str())
                    .desired_width(f32::INFINITY),
            );
        });
    ui.add_space(6.0);
    ui.strong("Summary");
    egui::ScrollArea::vertical()
        .id_salt("summary")
        .max_height(160.0)
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(&mut view.summary.as_str()).desired_width(f32::INFINITY),
            );
        });
}
