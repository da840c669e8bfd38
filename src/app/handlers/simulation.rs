//! Handler für Simulationstakt, Pause, Geschwindigkeit und Reset.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::SimulationSpeed;

/// Führt einen Frame aus (Bildrate + Tick).
pub fn advance_frame(state: &mut AppState, wall_dt: f64) {
    use_cases::simulation::advance_frame(state, wall_dt);
}

/// Setzt den Pausenzustand.
pub fn set_paused(state: &mut AppState, paused: bool) {
    use_cases::simulation::set_paused(state, paused);
}

/// Setzt die Geschwindigkeitsstufe.
pub fn set_speed(state: &mut AppState, speed: SimulationSpeed) {
    use_cases::simulation::set_speed(state, speed);
}

/// Setzt die Simulation zurück.
pub fn reset(state: &mut AppState) {
    use_cases::simulation::reset(state);
}
