//! Energy Skate Track (headless).
//!
//! Treibt die Skater-Simulation mit fester Bildrate ohne Fenster an und
//! protokolliert Momentaufnahmen der Render-Szene.

use energy_skate_track::{AppController, AppIntent, AppState, RenderScene, SimulationOptions};

/// Standard-Anzahl simulierter Frames.
const DEFAULT_FRAME_COUNT: u64 = 500;
/// Bildzeit des Hosts (60 Hz).
const FRAME_WALL_DT: f64 = 1.0 / 60.0;
/// Abstand der protokollierten Momentaufnahmen.
const SNAPSHOT_INTERVAL: u64 = 50;

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Energy Skate Track v{} startet...", env!("CARGO_PKG_VERSION"));

        let mut frame_count = DEFAULT_FRAME_COUNT;
        let mut save_options = false;
        for arg in std::env::args().skip(1) {
            match arg.as_str() {
                "--save-options" => save_options = true,
                other => {
                    frame_count = other.parse().map_err(|e| {
                        anyhow::anyhow!("Ungültige Frame-Anzahl '{}': {}", other, e)
                    })?
                }
            }
        }

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = SimulationOptions::config_path();
        let options = SimulationOptions::load_from_file(&config_path);
        if save_options {
            options.save_to_file(&config_path)?;
        }

        let mut app = HeadlessApp::new(options);
        app.run_frames(frame_count);
        Ok(())
    }
}

/// Haupt-Anwendungsstruktur ohne Fenster
struct HeadlessApp {
    state: AppState,
    controller: AppController,
}

impl HeadlessApp {
    fn new(options: SimulationOptions) -> Self {
        Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
        }
    }

    fn run_frames(&mut self, frame_count: u64) {
        for frame in 1..=frame_count {
            self.process_events(vec![AppIntent::FrameRequested {
                wall_dt: FRAME_WALL_DT,
            }]);

            for event in &self.state.last_events {
                log::info!("Frame {}: {:?}", frame, event);
            }
            if frame % SNAPSHOT_INTERVAL == 0 || frame == frame_count {
                let scene = self.controller.build_render_scene(&self.state);
                log_snapshot(frame, &scene);
            }
        }
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}

fn log_snapshot(frame: u64, scene: &RenderScene) {
    log::info!(
        "Frame {:>5} | t={:>7.3}s | pos=({:>7.2}, {:>7.2}) | v={:>8.2} | {:?} | E={:>10.1} (kin {:.1}, pot {:.1}) | fps={}",
        frame,
        scene.simulation_time,
        scene.body_position.x,
        scene.body_position.y,
        scene.energy.speed,
        scene.body_mode,
        scene.energy.total,
        scene.energy.kinetic,
        scene.energy.potential,
        scene
            .frames_per_second
            .map_or_else(|| "-".to_string(), |fps| format!("{fps:.1}")),
    );
}
