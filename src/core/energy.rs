//! Energieanzeige (kinetisch, potentiell, gesamt) für den Skater.

use super::Body;

/// Momentaufnahme der Energien des Körpers.
///
/// Die potentielle Energie wird relativ zur Bodenlinie gemessen; da y nach
/// unten wächst, ist die Höhe `floor_y - y`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EnergyReadout {
    pub kinetic: f64,
    pub potential: f64,
    pub total: f64,
    pub speed: f64,
}

impl EnergyReadout {
    /// Misst die Energien von `body` bei Masse `mass` und Schwerebeschleunigung `gravity`.
    pub fn measure(body: &Body, mass: f64, gravity: f64, floor_y: f64) -> Self {
        let speed = body.speed();
        let kinetic = 0.5 * mass * speed * speed;
        let potential = mass * gravity * (floor_y - body.position.y);
        Self {
            kinetic,
            potential,
            total: kinetic + potential,
            speed,
        }
    }
}
