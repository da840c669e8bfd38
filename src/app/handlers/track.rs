//! Handler für Strecken-Bearbeitung.

use crate::app::use_cases;
use crate::app::AppState;
use glam::DVec2;

/// Fügt einen Kontrollpunkt hinzu.
pub fn add_control_point(state: &mut AppState, world_pos: DVec2) {
    use_cases::track::add_control_point(state, world_pos);
}

/// Entfernt einen Kontrollpunkt.
pub fn remove_control_point(state: &mut AppState, index: usize) {
    use_cases::track::remove_control_point(state, index);
}
