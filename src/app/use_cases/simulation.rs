//! Use-Case-Funktionen für den Simulationstakt.

use crate::app::AppState;
use crate::core::SimulationSpeed;

/// Misst die Bildzeit und führt einen festen Simulations-Tick aus.
pub fn advance_frame(state: &mut AppState, wall_dt: f64) {
    state.frame_rate.record(wall_dt);
    state.last_events = state.simulation.tick(wall_dt);
}

/// Setzt den Pausenzustand.
pub fn set_paused(state: &mut AppState, paused: bool) {
    state.simulation.set_paused(paused);
}

/// Wählt die Geschwindigkeitsstufe.
pub fn set_speed(state: &mut AppState, speed: SimulationSpeed) {
    state.simulation.set_speed(speed);
}

/// Setzt Skater und Uhr zurück und bricht einen Skater-Drag ab.
///
/// Ein Kontrollpunkt-Drag bleibt bestehen, da die Strecke unverändert bleibt.
pub fn reset(state: &mut AppState) {
    if state
        .drag
        .is_some_and(|session| session.target == crate::core::DragTarget::Body)
    {
        state.drag = None;
    }
    state.simulation.reset();
    state.last_events.clear();
}
