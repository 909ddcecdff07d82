//! Native window: input polling and painting through egui.

use crate::config::{DisplayConfig, Rgb};
use crate::render::{Canvas, draw_frame};
use anyhow::{Context, Result};
use clicktoe_core::{Click, Controller, Point, Rect};
use std::sync::Arc;
use tracing::{debug, info, instrument};

const FONT_NAME: &str = "clicktoe";

/// Paints onto an egui layer.
pub struct EguiCanvas<'a> {
    painter: &'a egui::Painter,
}

impl<'a> EguiCanvas<'a> {
    /// Wraps `painter`.
    pub fn new(painter: &'a egui::Painter) -> Self {
        Self { painter }
    }
}

impl Canvas for EguiCanvas<'_> {
    fn clear(&mut self, color: Rgb) {
        self.painter
            .rect_filled(self.painter.clip_rect(), 0.0, to_color32(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.painter
            .rect_filled(to_egui_rect(rect), 0.0, to_color32(color));
    }

    fn draw_text(&mut self, origin: Point, text: &str, size: f32, color: Rgb) {
        self.painter.text(
            egui::pos2(origin.x, origin.y),
            egui::Align2::LEFT_TOP,
            text,
            egui::FontId::proportional(size),
            to_color32(color),
        );
    }
}

fn to_color32(color: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

fn to_egui_rect(rect: Rect) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(rect.x, rect.y),
        egui::vec2(rect.width, rect.height),
    )
}

/// Position of a primary-button press this frame, if any.
fn primary_press(ctx: &egui::Context) -> Option<Point> {
    ctx.input(|input| {
        if input.pointer.primary_pressed() {
            input.pointer.interact_pos()
        } else {
            None
        }
    })
    .map(|pos| Point::new(pos.x, pos.y))
}

/// Application state owned by the event loop.
pub struct ClicktoeApp {
    controller: Controller,
    config: DisplayConfig,
}

impl ClicktoeApp {
    /// Creates the app, installing `font` when given.
    #[instrument(skip_all)]
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: DisplayConfig,
        font: Option<Vec<u8>>,
    ) -> Self {
        if let Some(bytes) = font {
            install_font(&cc.egui_ctx, bytes);
        }
        Self {
            controller: Controller::new(config.board()),
            config,
        }
    }

    fn handle_press(&mut self, point: Point) {
        match self.controller.on_pointer_down(point) {
            Click::Placed { cell, player, outcome } => {
                debug!(%cell, %player, ?outcome, "Press placed a mark");
            }
            Click::Reset => info!("New game"),
            click => debug!(?click, "Press had no effect"),
        }
    }
}

impl eframe::App for ClicktoeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(point) = primary_press(ctx) {
            self.handle_press(point);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let mut canvas = EguiCanvas::new(ui.painter());
                draw_frame(
                    &mut canvas,
                    &self.controller.render_state(),
                    self.controller.geometry(),
                    &self.config,
                );
            });
    }
}

/// Makes `bytes` the first choice for proportional text.
#[instrument(skip_all, fields(len = bytes.len()))]
fn install_font(ctx: &egui::Context, bytes: Vec<u8>) {
    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(
        FONT_NAME.to_string(),
        Arc::new(egui::FontData::from_owned(bytes)),
    );
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, FONT_NAME.to_string());
    ctx.set_fonts(fonts);
    debug!("Custom font installed");
}

/// Reads the configured font file, if any.
#[instrument(skip(config))]
pub fn load_font(config: &DisplayConfig) -> Result<Option<Vec<u8>>> {
    let Some(path) = config.font_path() else {
        return Ok(None);
    };
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to load font {}", path.display()))?;
    info!(path = %path.display(), "Font loaded");
    Ok(Some(bytes))
}

/// Opens the window and runs until it is closed.
#[instrument(skip_all, fields(title = %config.window_title()))]
pub fn run(config: DisplayConfig) -> Result<()> {
    let font = load_font(&config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width(), config.window_height()])
            .with_resizable(false)
            .with_title(config.window_title().clone()),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    info!("Opening window");
    let title = config.window_title().clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(ClicktoeApp::new(cc, config, font)))),
    )
    .map_err(|e| anyhow::anyhow!("Window event loop failed: {}", e))?;

    info!("Window closed");
    Ok(())
}
