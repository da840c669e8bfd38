//! Application State: zentrale Datenhaltung.

use super::frame_rate::FrameRateMeter;
use super::CommandLog;
use crate::core::{DragSession, Simulation, SimulationEvent, Track};
use crate::shared::SimulationOptions;
use glam::DVec2;
use std::sync::Arc;

/// Abgetastete Kurve, gültig für eine Strecken-Revision.
#[derive(Debug, Clone, Default)]
pub struct CurveSampleCache {
    revision: Option<u64>,
    samples: Arc<Vec<DVec2>>,
}

impl CurveSampleCache {
    /// Tastet die Strecke neu ab, falls sich ihre Revision geändert hat.
    ///
    /// Gibt `true` zurück, wenn neu abgetastet wurde.
    pub fn refresh(&mut self, track: &Track, sample_count: usize) -> bool {
        if self.revision == Some(track.revision()) {
            return false;
        }
        self.samples = Arc::new(track.samples(sample_count));
        self.revision = Some(track.revision());
        log::debug!(
            "Kurve neu abgetastet: {} Punkte (Revision {})",
            self.samples.len(),
            track.revision()
        );
        true
    }

    /// Aktuelle Kurvenpunkte (Arc für O(1)-Clone in RenderScene).
    pub fn samples(&self) -> Arc<Vec<DVec2>> {
        Arc::clone(&self.samples)
    }
}

/// Hauptzustand der Anwendung
#[derive(Debug)]
pub struct AppState {
    /// Simulationskern (Strecke, Skater, Uhr)
    pub simulation: Simulation,
    /// Laufender Drag (vom Drücken bis zum Loslassen)
    pub drag: Option<DragSession>,
    /// Beim Start festgelegte Optionen
    pub options: SimulationOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Bildraten-Anzeige
    pub frame_rate: FrameRateMeter,
    /// Kurvenpunkte für die Darstellung
    pub curve_cache: CurveSampleCache,
    /// Moduswechsel des letzten Ticks
    pub last_events: Vec<SimulationEvent>,
}

impl AppState {
    /// Erstellt einen App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(SimulationOptions::default())
    }

    /// Erstellt einen App-State aus geladenen Optionen.
    pub fn with_options(options: SimulationOptions) -> Self {
        let mut simulation = Simulation::new(
            options.simulation_config(),
            options.initial_control_points.clone(),
        );
        simulation.set_speed(options.initial_speed);

        let mut state = Self {
            simulation,
            drag: None,
            options,
            command_log: CommandLog::new(),
            frame_rate: FrameRateMeter::new(),
            curve_cache: CurveSampleCache::default(),
            last_events: Vec::new(),
        };
        state.refresh_curve_cache();
        state
    }

    /// Hält den Kurven-Cache synchron zur Strecke.
    pub fn refresh_curve_cache(&mut self) {
        self.curve_cache
            .refresh(self.simulation.track(), self.options.curve_sample_count);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_cache_only_resamples_on_new_revision() {
        let mut state = AppState::new();
        assert_eq!(state.curve_cache.samples().len(), 75);

        let track = state.simulation.track().clone();
        assert!(!state.curve_cache.refresh(&track, 75));

        state.simulation.add_control_point(DVec2::new(400.0, 150.0));
        let track = state.simulation.track().clone();
        assert!(state.curve_cache.refresh(&track, 75));
    }
}
