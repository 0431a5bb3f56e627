use eframe::egui::{
    self, Align, Align2, Button, Frame, Key, Layout, RichText, Stroke, TextEdit, TextureHandle,
};
use qrgen_core::{AppViewModel, Msg};

use super::constants::*;

/// Per-frame widget bindings owned by the shell.
pub struct FrameInput<'a> {
    pub input: &'a mut String,
    pub preview: Option<&'a TextureHandle>,
    pub shake_offset: f32,
}

/// Draws one frame and returns the messages produced by user interaction.
pub fn draw(ctx: &egui::Context, view: &AppViewModel, frame: FrameInput<'_>) -> Vec<Msg> {
    let mut msgs = Vec::new();
    let FrameInput {
        input,
        preview,
        shake_offset,
    } = frame;

    egui::CentralPanel::default()
        .frame(Frame::none().fill(BG).inner_margin(OUTER_MARGIN))
        .show(ctx, |ui| {
            ui.add_enabled_ui(view.error_dialog.is_none(), |ui| {
                header(ui);
                ui.separator();
                ui.add_space(16.0);

                ui.label(RichText::new("URL").monospace().color(ACCENT));
                ui.horizontal(|ui| {
                    // Keep the field inside the panel while it shakes left.
                    ui.add_space(SHAKE_OFFSETS[0] + shake_offset);
                    let response = ui.add_enabled(
                        !view.input_locked,
                        TextEdit::singleline(input)
                            .font(egui::TextStyle::Monospace)
                            .text_color(TEXT)
                            .margin(egui::vec2(10.0, 10.0))
                            .desired_width(ui.available_width() - SHAKE_OFFSETS[0]),
                    );
                    if response.changed() {
                        msgs.push(Msg::InputChanged(input.clone()));
                    }
                    if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                        msgs.push(Msg::GenerateClicked);
                    }
                });

                ui.add_space(16.0);
                ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                    let label = if view.input_locked {
                        LABEL_GENERATING
                    } else {
                        LABEL_GENERATE
                    };
                    let button = Button::new(RichText::new(label).monospace().strong().color(BG))
                        .fill(ACCENT)
                        .min_size(egui::vec2(140.0, 36.0));
                    if ui.add_enabled(!view.input_locked, button).clicked() {
                        msgs.push(Msg::GenerateClicked);
                    }
                });

                ui.add_space(20.0);
                ui.separator();
                ui.add_space(20.0);
                preview_card(ui, view, preview);

                ui.add_space(20.0);
                status_row(ui, view, &mut msgs);
            });
        });

    if let Some(dialog) = &view.error_dialog {
        egui::Window::new(dialog.title.as_str())
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(&dialog.message);
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        msgs.push(Msg::ErrorDismissed);
                    }
                });
            });
    }

    msgs
}

fn header(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("QR").size(28.0).monospace().strong().color(ACCENT));
        ui.label(RichText::new("GENERATOR").size(28.0).monospace().strong().color(TEXT));
    });
    ui.label(RichText::new(LABEL_TAGLINE).small().monospace().color(SUBTEXT));
    ui.add_space(12.0);
}

fn preview_card(ui: &mut egui::Ui, view: &AppViewModel, preview: Option<&TextureHandle>) {
    Frame::none()
        .fill(CARD)
        .stroke(Stroke::NONE)
        .inner_margin(20.0)
        .show(ui, |ui| {
            ui.set_min_height(PREVIEW_SIDE + 40.0);
            ui.vertical_centered(|ui| match (preview, &view.generated_url) {
                (Some(texture), Some(url)) => {
                    ui.image((texture.id(), egui::vec2(PREVIEW_SIDE, PREVIEW_SIDE)));
                    ui.label(RichText::new(url).small().monospace().color(SUBTEXT));
                }
                _ => {
                    ui.add_space(PREVIEW_SIDE / 2.0);
                    ui.label(
                        RichText::new(LABEL_PREVIEW_PLACEHOLDER)
                            .small()
                            .monospace()
                            .color(SUBTEXT),
                    );
                }
            });
        });
}

fn status_row(ui: &mut egui::Ui, view: &AppViewModel, msgs: &mut Vec<Msg>) {
    ui.horizontal(|ui| {
        let color = if view.status_is_error {
            ERROR_TEXT
        } else {
            SUBTEXT
        };
        ui.label(RichText::new(&view.status_text).small().monospace().color(color));

        if view.export_visible {
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let button = Button::new(RichText::new(LABEL_EXPORT).monospace().color(ACCENT))
                    .frame(false);
                if ui.add(button).clicked() {
                    msgs.push(Msg::ExportClicked);
                }
            });
        }
    });
}
