//! Handler für Drag-Start, -Bewegung und -Ende.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::DragTarget;
use glam::DVec2;

/// Startet einen Drag.
pub fn begin(state: &mut AppState, target: DragTarget, world_pos: DVec2) {
    use_cases::drag::begin(state, target, world_pos);
}

/// Aktualisiert den Drag.
pub fn update(state: &mut AppState, world_pos: DVec2) {
    use_cases::drag::update(state, world_pos);
}

/// Beendet den Drag.
pub fn end(state: &mut AppState) {
    use_cases::drag::end(state);
}
