//! Simulationsuhr: Zeit, Tick-Zähler, Geschwindigkeitsstufe und Pause.

use super::boundary::SimulationSpeed;

/// Zustand des Simulationstreibers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DriverState {
    /// Ticks rücken die Simulation vor
    #[default]
    Running,
    /// Ticks sind wirkungslos
    Paused,
}

/// Akkumulierte Simulationszeit und Treiber-Einstellungen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SimulationClock {
    /// Simulierte Zeit in Sekunden
    pub time: f64,
    /// Anzahl ausgeführter (nicht pausierter) Ticks
    pub ticks: u64,
    /// Gewählte Geschwindigkeitsstufe
    pub speed: SimulationSpeed,
    /// Running oder Paused
    pub state: DriverState,
}

impl SimulationClock {
    /// `true` wenn pausiert.
    pub fn is_paused(&self) -> bool {
        self.state == DriverState::Paused
    }

    /// Setzt den Pausenzustand.
    pub fn set_paused(&mut self, paused: bool) {
        self.state = if paused {
            DriverState::Paused
        } else {
            DriverState::Running
        };
    }

    /// Effektiver Zeitschritt eines Ticks.
    pub fn tick_dt(&self, base_step: f64) -> f64 {
        base_step * self.speed.multiplier()
    }

    /// Verbucht einen ausgeführten Tick.
    pub fn advance(&mut self, dt: f64) {
        self.time += dt;
        self.ticks += 1;
    }

    /// Setzt Zeit und Tick-Zähler zurück; Pause und Geschwindigkeit bleiben.
    pub fn rewind(&mut self) {
        self.time = 0.0;
        self.ticks = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_tick_dt_uses_speed_table() {
        let mut clock = SimulationClock::default();
        assert_relative_eq!(clock.tick_dt(0.02), 0.02);
        clock.speed = SimulationSpeed::SlowMotion;
        assert_relative_eq!(clock.tick_dt(0.02), 0.01);
    }

    #[test]
    fn test_rewind_keeps_user_choices() {
        let mut clock = SimulationClock::default();
        clock.speed = SimulationSpeed::SlowMotion;
        clock.set_paused(true);
        clock.advance(0.02);
        clock.rewind();
        assert_eq!(clock.ticks, 0);
        assert_eq!(clock.time, 0.0);
        assert!(clock.is_paused());
        assert_eq!(clock.speed, SimulationSpeed::SlowMotion);
    }
}
