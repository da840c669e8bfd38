//! Use-Case-Funktionen für den Drag-Lifecycle.

use crate::app::AppState;
use crate::core::DragTarget;
use glam::DVec2;

/// Startet eine Drag-Sitzung; ein laufender Drag wird vorher beendet.
pub fn begin(state: &mut AppState, target: DragTarget, world_pos: DVec2) {
    end(state);
    state.drag = state.simulation.begin_drag(target, world_pos);
    if state.drag.is_none() {
        log::warn!("Drag-Ziel {:?} existiert nicht", target);
    }
}

/// Bewegt das Drag-Ziel. Ohne laufenden Drag keine Operation.
pub fn update(state: &mut AppState, world_pos: DVec2) {
    if let Some(session) = state.drag {
        state.simulation.drag_to(&session, world_pos);
    }
}

/// Beendet die laufende Drag-Sitzung.
pub fn end(state: &mut AppState) {
    if let Some(session) = state.drag.take() {
        state.simulation.end_drag(session);
    }
}
