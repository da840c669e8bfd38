//! Zentrale Konfiguration für die Skater-Simulation.
//!
//! `SimulationOptions` enthält alle beim Start festgelegten Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::simulation::{
    DEFAULT_ATTACHMENT_INCREMENT, DEFAULT_BASE_STEP, DEFAULT_FLOOR_Y, DEFAULT_GRAVITY,
};
use crate::core::{Bounds, SimulationConfig, SimulationSpeed};
use glam::DVec2;
use serde::{Deserialize, Serialize};

// ── Physik ──────────────────────────────────────────────────────────

/// Teilschritte pro Tick.
pub const SUBDIVISIONS: u32 = 1;
/// Toleranz für den Nullstellen-Abgleich der Anhaft-Erkennung.
pub const ROOT_TOLERANCE: f64 = crate::core::crossing::ROOT_TOLERANCE;
/// Parameterabstand δ im Seitentest.
pub const SIDE_TEST_DELTA: f64 = crate::core::track::SIDE_TEST_DELTA;
/// Masse des Skaters (für die Energieanzeige).
pub const BODY_MASS: f64 = 1.0;

// ── Szene ───────────────────────────────────────────────────────────

/// Breite der Szene in Welteinheiten (rechter Rand des Editierbereichs).
pub const SCENE_WIDTH: f64 = 1024.0;
/// Höhe des gezeichneten Bodens unterhalb der Boden-Linie.
pub const GROUND_HEIGHT: f64 = 200.0;
/// Startposition des Skaters.
pub const INITIAL_BODY_POSITION: DVec2 = DVec2::new(150.0, 0.0);
/// Kontrollpunkte der Startstrecke (Mulde).
pub const INITIAL_CONTROL_POINTS: [DVec2; 3] = [
    DVec2::new(100.0, 100.0),
    DVec2::new(200.0, 200.0),
    DVec2::new(300.0, 100.0),
];

// ── Darstellung und Eingabe ────────────────────────────────────────

/// Anzahl der Kurvenpunkte für die Darstellung.
pub const CURVE_SAMPLE_COUNT: usize = 75;
/// Pick-Radius (Welteinheiten) für Kontrollpunkte und Skater.
pub const PICK_RADIUS: f64 = 20.0;

/// Alle Simulations-Optionen.
/// Wird als `energy_skate_track.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationOptions {
    // ── Physik ──────────────────────────────────────────────────
    /// Schwerebeschleunigung in Welteinheiten/s² (+y nach unten)
    pub gravity: f64,
    /// Basis-Zeitschritt pro Tick in Sekunden
    pub base_step: f64,
    /// Teilschritte pro Tick
    pub subdivisions: u32,
    /// Parameter-Fortschritt pro Tick auf der Strecke
    pub attachment_increment: f64,
    /// Nullstellen-Toleranz der Anhaft-Erkennung
    pub root_tolerance: f64,
    /// δ im Seitentest
    pub side_test_delta: f64,
    /// Masse des Skaters
    pub body_mass: f64,
    /// Geschwindigkeitsstufe beim Start
    pub initial_speed: SimulationSpeed,

    // ── Szene ───────────────────────────────────────────────────
    /// Boden-Linie (maximales y)
    pub floor_y: f64,
    /// Gezeichnete Bodenhöhe
    pub ground_height: f64,
    /// Startposition des Skaters
    pub initial_body_position: DVec2,
    /// Kontrollpunkte der Startstrecke
    pub initial_control_points: Vec<DVec2>,

    // ── Darstellung ─────────────────────────────────────────────
    /// Kurvenpunkte für die Darstellung
    pub curve_sample_count: usize,
    /// Pick-Radius für Drag-Ziele
    pub pick_radius: f64,

    // ── Editierbereich ──────────────────────────────────────────
    /// Erlaubter Bereich für Kontrollpunkte
    pub control_point_bounds: Bounds,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            base_step: DEFAULT_BASE_STEP,
            subdivisions: SUBDIVISIONS,
            attachment_increment: DEFAULT_ATTACHMENT_INCREMENT,
            root_tolerance: ROOT_TOLERANCE,
            side_test_delta: SIDE_TEST_DELTA,
            body_mass: BODY_MASS,
            initial_speed: SimulationSpeed::Normal,

            floor_y: DEFAULT_FLOOR_Y,
            ground_height: GROUND_HEIGHT,
            initial_body_position: INITIAL_BODY_POSITION,
            initial_control_points: INITIAL_CONTROL_POINTS.to_vec(),

            curve_sample_count: CURVE_SAMPLE_COUNT,
            pick_radius: PICK_RADIUS,

            control_point_bounds: Bounds::new(
                DVec2::ZERO,
                DVec2::new(SCENE_WIDTH, DEFAULT_FLOOR_Y),
            ),
        }
    }
}

impl SimulationOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("energy_skate_track"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("energy_skate_track.toml")
    }

    /// Physik-Konfiguration für den Simulationskern.
    pub fn simulation_config(&self) -> SimulationConfig {
        SimulationConfig {
            gravity: self.gravity,
            floor_y: self.floor_y,
            base_step: self.base_step,
            subdivisions: self.subdivisions,
            attachment_increment: self.attachment_increment,
            root_tolerance: self.root_tolerance,
            side_test_delta: self.side_test_delta,
            control_point_bounds: Some(self.control_point_bounds),
            body_mass: self.body_mass,
            initial_body_position: self.initial_body_position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_simulation_config() {
        let options = SimulationOptions::default();
        assert_eq!(options.simulation_config(), SimulationConfig::default());
        assert_eq!(options.curve_sample_count, 75);
        assert_eq!(options.initial_control_points.len(), 3);
    }

    #[test]
    fn test_toml_round_trip_keeps_values() {
        let options = SimulationOptions {
            subdivisions: 4,
            initial_speed: SimulationSpeed::SlowMotion,
            initial_control_points: vec![DVec2::new(0.0, 50.0), DVec2::new(400.0, 300.0)],
            ..SimulationOptions::default()
        };
        let text = toml::to_string_pretty(&options).expect("TOML-Serialisierung");
        let parsed: SimulationOptions = toml::from_str(&text).expect("TOML-Parsing");
        assert_eq!(parsed, options);
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let parsed: SimulationOptions =
            toml::from_str("gravity = 980.0\n").expect("TOML-Parsing");
        assert_eq!(parsed.gravity, 980.0);
        assert_eq!(parsed.floor_y, DEFAULT_FLOOR_Y);
        assert_eq!(parsed.pick_radius, PICK_RADIUS);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("energy_skate_track_does_not_exist.toml");
        assert_eq!(
            SimulationOptions::load_from_file(&path),
            SimulationOptions::default()
        );
    }
}
