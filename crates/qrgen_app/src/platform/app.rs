use std::collections::VecDeque;
use std::time::Duration;

use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};
use qrgen_core::{update, AppState, AppViewModel, Effect, Msg};
use qrgen_engine::{Generator, GeneratorConfig};
use qrgen_logging::{qrgen_info, LogDestination};

use super::effects::{EffectRunner, NativeSaveDialog, SavePathChooser};
use super::ui;
use super::ui::constants::{
    APP_ID, SHAKE_OFFSETS, SHAKE_STEP_SECS, WINDOW_SIZE, WINDOW_TITLE,
};

pub fn run_app() -> anyhow::Result<()> {
    qrgen_logging::initialize(LogDestination::for_build());
    qrgen_info!("Starting {}", WINDOW_TITLE);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_resizable(false)
            .with_title(WINDOW_TITLE),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        APP_ID,
        options,
        Box::new(|cc| Ok(Box::new(QrGenApp::new(cc)))),
    )
    .map_err(|err| anyhow::anyhow!("could not open the main window: {err}"))
}

/// Owns the core state and the effect runner, and routes messages between them.
///
/// Effects are queued by [`Controller::dispatch`] and executed by
/// [`Controller::run_pending`] so the window can paint the locked state
/// before a generation runs.
pub struct Controller<D = NativeSaveDialog> {
    state: AppState,
    runner: EffectRunner<D>,
    pending: VecDeque<Effect>,
}

impl<D: SavePathChooser> Controller<D> {
    pub fn new(runner: EffectRunner<D>) -> Self {
        Self {
            state: AppState::new(),
            runner,
            pending: VecDeque::new(),
        }
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.pending.extend(effects);
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Runs queued effects, feeding their results back until nothing is left.
    pub fn run_pending(&mut self) {
        while let Some(effect) = self.pending.pop_front() {
            if let Some(reply) = self.runner.run(effect) {
                self.dispatch(reply);
            }
        }
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn consume_dirty(&mut self) -> bool {
        self.state.consume_dirty()
    }

    pub fn runner(&self) -> &EffectRunner<D> {
        &self.runner
    }

    pub fn runner_mut(&mut self) -> &mut EffectRunner<D> {
        &mut self.runner
    }
}

struct QrGenApp {
    controller: Controller,
    input: String,
    preview: Option<TextureHandle>,
    preview_generation: u64,
    shake_started: Option<f64>,
}

impl QrGenApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let generator = Generator::new(GeneratorConfig::default());
        let controller = Controller::new(EffectRunner::new(generator, NativeSaveDialog));
        let input = controller.view().input;
        Self {
            controller,
            input,
            preview: None,
            preview_generation: 0,
            shake_started: None,
        }
    }

    fn refresh_preview(&mut self, ctx: &egui::Context) {
        let runner = self.controller.runner();
        if runner.generation() == self.preview_generation {
            return;
        }
        self.preview_generation = runner.generation();
        let Some(generated) = runner.last_generated() else {
            return;
        };

        let size = [
            generated.preview.width() as usize,
            generated.preview.height() as usize,
        ];
        let image = ColorImage::from_rgb(size, generated.preview.as_raw());
        match &mut self.preview {
            Some(texture) => texture.set(image, TextureOptions::NEAREST),
            None => {
                self.preview = Some(ctx.load_texture("qr-preview", image, TextureOptions::NEAREST));
            }
        }
    }

    fn shake_offset(&mut self, now: f64) -> f32 {
        let Some(started) = self.shake_started else {
            return 0.0;
        };
        let step = ((now - started) / SHAKE_STEP_SECS) as usize;
        match SHAKE_OFFSETS.get(step) {
            Some(offset) => *offset,
            None => {
                self.shake_started = None;
                0.0
            }
        }
    }
}

impl eframe::App for QrGenApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Effects queued last frame run now, after the locked state was painted.
        if self.controller.has_pending() {
            self.controller.run_pending();
        }

        let now = ctx.input(|i| i.time);
        if self.controller.runner_mut().take_nudge() {
            self.shake_started = Some(now);
        }
        self.refresh_preview(ctx);

        let view = self.controller.view();
        if self.controller.consume_dirty() && view.input != self.input {
            self.input = view.input.clone();
        }

        let shake = self.shake_offset(now);
        let frame_input = ui::render::FrameInput {
            input: &mut self.input,
            preview: self.preview.as_ref(),
            shake_offset: shake,
        };
        let messages = ui::render::draw(ctx, &view, frame_input);
        for msg in messages {
            self.controller.dispatch(msg);
        }

        if self.controller.has_pending() {
            ctx.request_repaint();
        } else if self.shake_started.is_some() {
            ctx.request_repaint_after(Duration::from_secs_f64(SHAKE_STEP_SECS));
        }
    }
}
