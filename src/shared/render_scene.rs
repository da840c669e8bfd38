//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und ein Host-Renderer sie konsumiert.

use crate::core::{BodyMode, DragTarget, EnergyReadout, SimulationSpeed};
use glam::DVec2;
use std::sync::Arc;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Kontaktpunkt des Skaters
    pub body_position: DVec2,
    /// Geschwindigkeit des Skaters (Welteinheiten/s)
    pub body_velocity: DVec2,
    /// Frei oder angehaftet (mit Kurvenparameter)
    pub body_mode: BodyMode,
    /// Abgetastete Kurve (Arc für O(1)-Clone, gecacht pro Strecken-Revision)
    pub curve_samples: Arc<Vec<DVec2>>,
    /// Kontrollpunkte der Strecke
    pub control_points: Vec<DVec2>,
    /// Boden-Linie
    pub floor_y: f64,
    /// Gezeichnete Bodenhöhe unterhalb der Boden-Linie
    pub ground_height: f64,
    /// Pausiert?
    pub paused: bool,
    /// Gewählte Geschwindigkeitsstufe
    pub speed: SimulationSpeed,
    /// Simulierte Zeit in Sekunden
    pub simulation_time: f64,
    /// Energieanzeige
    pub energy: EnergyReadout,
    /// Gefilterte Bildrate, sobald genug Frames gemessen wurden
    pub frames_per_second: Option<f64>,
    /// Aktuelles Drag-Ziel (für Hervorhebung)
    pub drag_target: Option<DragTarget>,
}

impl RenderScene {
    /// Gibt zurück, ob eine zeichenbare Kurve vorhanden ist.
    pub fn has_curve(&self) -> bool {
        self.curve_samples.len() >= 2
    }
}
