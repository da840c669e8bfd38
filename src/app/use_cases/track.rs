//! Use-Case-Funktionen für das Bearbeiten der Strecke.

use crate::app::AppState;
use crate::core::DragTarget;
use glam::DVec2;

/// Hängt einen Kontrollpunkt an die Strecke an.
pub fn add_control_point(state: &mut AppState, world_pos: DVec2) {
    state.simulation.add_control_point(world_pos);
}

/// Entfernt einen Kontrollpunkt.
///
/// Ein laufender Kontrollpunkt-Drag wird abgebrochen, da sich die Indizes verschieben.
pub fn remove_control_point(state: &mut AppState, index: usize) {
    if index >= state.simulation.track().point_count() {
        log::warn!("Kontrollpunkt {} existiert nicht", index);
        return;
    }
    if let Some(session) = state.drag {
        if matches!(session.target, DragTarget::ControlPoint(_)) {
            state.drag = None;
            state.simulation.end_drag(session);
        }
    }
    state.simulation.remove_control_point(index);
}
