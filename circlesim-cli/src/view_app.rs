//! Interactive viewer for circlesim scenarios
//!
//! Draws every body as a filled circle, optionally overlays the quadtree
//! node boundaries, and rebuilds the simulation whenever the scenario file
//! changes on disk.

use crate::scenario_config;
use circlesim_core::{
    body_states, build_simulation_context, step_simulation, tree_regions, FrameStats,
    SimulationContext,
};
use eframe::egui;
use notify::{Event, RecommendedWatcher, Watcher};
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Longest step fed to the simulation, so a stalled window does not teleport bodies
const MAX_FRAME_DT: f32 = 0.1;

/// Fixed step used by the Step button
const MANUAL_STEP_DT: f32 = 1.0 / 60.0;

/// How often the window title's update rate is refreshed, in seconds
const TITLE_INTERVAL: f32 = 1.0;

pub fn run_viewer(
    scenario: Option<PathBuf>,
    show_quadtree: bool,
    seed: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = scenario_config(scenario.as_deref(), seed)?;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.world.width, config.world.height + 40.0])
            .with_title("circlesim"),
        ..Default::default()
    };

    eframe::run_native(
        "circlesim",
        options,
        Box::new(move |cc| Ok(Box::new(ViewerApp::new(scenario, seed, show_quadtree, cc)))),
    )?;
    Ok(())
}

/// Viewer application state
pub struct ViewerApp {
    scenario_path: Option<PathBuf>,
    seed: Option<u64>,
    sim_opt: Option<SimulationContext>,
    last_load_error: Option<String>,
    last_stats: FrameStats,
    playing: bool,
    speed_multiplier: f32,
    show_quadtree: bool,
    last_frame: Instant,
    title_timer: f32,
    #[allow(dead_code)] // Kept alive to maintain file watching
    file_watcher: Option<RecommendedWatcher>,
    file_receiver: mpsc::Receiver<notify::Result<Event>>,
    needs_reload: bool,
}

impl ViewerApp {
    pub fn new(
        scenario_path: Option<PathBuf>,
        seed: Option<u64>,
        show_quadtree: bool,
        _cc: &eframe::CreationContext<'_>,
    ) -> Self {
        let scenario_path = scenario_path.map(|p| std::fs::canonicalize(&p).unwrap_or(p));

        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(move |res| {
            // The receiver is gone during shutdown; nothing to do then
            let _ = tx.send(res);
        })
        .ok();

        if let (Some(w), Some(path)) = (watcher.as_mut(), scenario_path.as_ref()) {
            if let Err(e) = w.watch(path, notify::RecursiveMode::NonRecursive) {
                warn!(path = %path.display(), "live reload disabled: {}", e);
            }
        }

        let mut app = Self {
            scenario_path,
            seed,
            sim_opt: None,
            last_load_error: None,
            last_stats: FrameStats::default(),
            playing: true,
            speed_multiplier: 1.0,
            show_quadtree,
            last_frame: Instant::now(),
            title_timer: 0.0,
            file_watcher: watcher,
            file_receiver: rx,
            needs_reload: false,
        };

        app.reload_context();
        app
    }

    fn reload_context(&mut self) {
        let built = scenario_config(self.scenario_path.as_deref(), self.seed)
            .and_then(|config| build_simulation_context(&config).map_err(Into::into));
        match built {
            Ok(sim) => {
                info!(bodies = sim.world.bodies.len(), "scenario loaded");
                self.sim_opt = Some(sim);
                self.last_load_error = None;
                self.last_stats = FrameStats::default();
            }
            Err(e) => {
                warn!("failed to load scenario: {}", e);
                self.last_load_error = Some(format!("{}", e));
                self.sim_opt = None;
                self.playing = false;
            }
        }
    }

    fn check_file_changes(&mut self) {
        while let Ok(event) = self.file_receiver.try_recv() {
            match event {
                Ok(Event {
                    kind: notify::EventKind::Modify(_),
                    paths,
                    ..
                }) => {
                    if let Some(path) = &self.scenario_path {
                        if paths.contains(path) {
                            debug!(path = %path.display(), "scenario changed on disk");
                            self.needs_reload = true;
                        }
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    warn!("file watcher error: {}", e);
                }
            }
        }

        if self.needs_reload {
            self.reload_context();
            self.playing = self.sim_opt.is_some();
            self.needs_reload = false;
        }
    }

    /// Refresh the window title with the update rate, once per interval
    fn update_title(&mut self, ctx: &egui::Context, dt: f32) {
        if self.title_timer >= TITLE_INTERVAL {
            self.title_timer = 0.0;
            if dt > 0.0 {
                ctx.send_viewport_cmd(egui::ViewportCommand::Title(format!(
                    "circlesim - Update: {:.1}",
                    1.0 / dt
                )));
            }
        } else {
            self.title_timer += dt;
        }
    }
}

fn to_color32(color: [f32; 3]) -> egui::Color32 {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgb(channel(color[0]), channel(color[1]), channel(color[2]))
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_file_changes();

        let now = Instant::now();
        let frame_dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.update_title(ctx, frame_dt);

        // Top bar with controls
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button(if self.playing { "⏸ Pause" } else { "▶ Play" }).clicked() {
                    self.playing = !self.playing;
                }

                if ui.button("⏮ Reset").clicked() {
                    self.reload_context();
                }

                if ui.button("⏭ Step").clicked() {
                    if let Some(ref mut sim) = self.sim_opt {
                        self.last_stats = step_simulation(sim, MANUAL_STEP_DT);
                    }
                }

                ui.separator();

                ui.label("Speed:");
                ui.add(egui::Slider::new(&mut self.speed_multiplier, 0.1..=4.0));

                ui.separator();

                ui.checkbox(&mut self.show_quadtree, "Quadtree");

                ui.separator();

                if let Some(ref sim) = self.sim_opt {
                    ui.label(format!(
                        "Frame: {}  Bodies: {}  Collisions: {}  Nodes: {}",
                        sim.frame,
                        sim.world.bodies.len(),
                        self.last_stats.resolutions,
                        self.last_stats.tree_nodes,
                    ));
                }
            });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::WHITE))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let painter = ui.painter();

                if let Some(ref sim) = self.sim_opt {
                    // World units map to screen points with y pointing down on both
                    let scale = (rect.width() / sim.world.width())
                        .min(rect.height() / sim.world.height());
                    let to_screen =
                        |x: f32, y: f32| rect.min + egui::vec2(x * scale, y * scale);

                    for body in body_states(sim) {
                        painter.circle_filled(
                            to_screen(body.pos.x, body.pos.y),
                            body.radius * scale,
                            to_color32(body.color),
                        );
                    }

                    if self.show_quadtree {
                        let stroke = egui::Stroke::new(1.0, egui::Color32::BLACK);
                        for region in tree_regions(sim) {
                            let node_rect = egui::Rect::from_min_max(
                                to_screen(region.left(), region.top()),
                                to_screen(region.right(), region.bottom()),
                            );
                            painter.rect_stroke(node_rect, 0.0, stroke);
                        }
                    }
                }

                if let Some(ref error) = self.last_load_error {
                    ui.vertical_centered(|ui| {
                        ui.add_space(rect.height() * 0.4);
                        ui.label(
                            egui::RichText::new(format!("Error: {}", error))
                                .color(egui::Color32::RED)
                                .size(16.0),
                        );
                    });
                }
            });

        if self.playing {
            if let Some(ref mut sim) = self.sim_opt {
                let dt = (frame_dt * self.speed_multiplier).min(MAX_FRAME_DT);
                self.last_stats = step_simulation(sim, dt);
            }
            ctx.request_repaint();
        }
    }
}
