//! Randbedingungen: Boden, Editierbereich der Kontrollpunkte, Geschwindigkeitsstufen.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Achsenparalleles Rechteck in Weltkoordinaten.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Linke obere Ecke (kleinste x/y)
    pub min: DVec2,
    /// Rechte untere Ecke (größte x/y)
    pub max: DVec2,
}

impl Bounds {
    /// Erstellt ein Rechteck; vertauschte Ecken werden sortiert.
    pub fn new(a: DVec2, b: DVec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Begrenzt `point` auf das Rechteck.
    pub fn clamp(&self, point: DVec2) -> DVec2 {
        point.clamp(self.min, self.max)
    }

    /// `true` wenn `point` innerhalb liegt (Rand inklusive).
    pub fn contains(&self, point: DVec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// Geschwindigkeitsstufe der Simulation (Zeitlupe oder normal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SimulationSpeed {
    /// Halbe Zeitschrittweite
    SlowMotion,
    /// Volle Zeitschrittweite
    #[default]
    Normal,
}

impl SimulationSpeed {
    /// Faktor, mit dem der Basis-Zeitschritt multipliziert wird.
    pub fn multiplier(self) -> f64 {
        match self {
            SimulationSpeed::SlowMotion => 0.5,
            SimulationSpeed::Normal => 1.0,
        }
    }
}

/// Ergebnis einer Boden-Begrenzung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloorContact {
    /// Begrenzte Position
    pub position: DVec2,
    /// `true` wenn die Position auf den Boden gesetzt wurde
    pub clamped: bool,
}

/// Begrenzungsregeln für Körper und Kontrollpunkte.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryPolicy {
    /// Boden-Linie: y darf diesen Wert nicht überschreiten (y wächst nach unten)
    pub floor_y: f64,
    /// Erlaubter Bereich für gezogene Kontrollpunkte (optional)
    pub control_point_bounds: Option<Bounds>,
}

impl BoundaryPolicy {
    /// Erstellt eine Policy mit Boden und optionalem Editierbereich.
    pub fn new(floor_y: f64, control_point_bounds: Option<Bounds>) -> Self {
        Self {
            floor_y,
            control_point_bounds,
        }
    }

    /// Setzt eine Position unterhalb des Bodens auf den Boden.
    pub fn clamp_to_floor(&self, position: DVec2) -> FloorContact {
        if position.y >= self.floor_y {
            FloorContact {
                position: DVec2::new(position.x, self.floor_y),
                clamped: true,
            }
        } else {
            FloorContact {
                position,
                clamped: false,
            }
        }
    }

    /// Begrenzt eine Kontrollpunkt-Position auf den Editierbereich.
    pub fn clamp_control_point(&self, position: DVec2) -> DVec2 {
        match &self.control_point_bounds {
            Some(bounds) => bounds.clamp(position),
            None => position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_speed_multipliers() {
        assert_relative_eq!(SimulationSpeed::SlowMotion.multiplier(), 0.5);
        assert_relative_eq!(SimulationSpeed::Normal.multiplier(), 1.0);
        assert_eq!(SimulationSpeed::default(), SimulationSpeed::Normal);
    }

    #[test]
    fn test_floor_clamp() {
        let policy = BoundaryPolicy::new(450.0, None);

        let above = policy.clamp_to_floor(DVec2::new(10.0, 300.0));
        assert!(!above.clamped);
        assert_eq!(above.position, DVec2::new(10.0, 300.0));

        let below = policy.clamp_to_floor(DVec2::new(10.0, 470.0));
        assert!(below.clamped);
        assert_eq!(below.position, DVec2::new(10.0, 450.0));

        let resting = policy.clamp_to_floor(DVec2::new(10.0, 450.0));
        assert!(resting.clamped);
    }

    #[test]
    fn test_control_point_bounds() {
        let bounds = Bounds::new(DVec2::new(1024.0, 450.0), DVec2::ZERO);
        assert_eq!(bounds.min, DVec2::ZERO);
        let policy = BoundaryPolicy::new(450.0, Some(bounds));

        let clamped = policy.clamp_control_point(DVec2::new(-20.0, 600.0));
        assert_eq!(clamped, DVec2::new(0.0, 450.0));
        assert!(bounds.contains(clamped));

        let free = BoundaryPolicy::new(450.0, None);
        assert_eq!(
            free.clamp_control_point(DVec2::new(-20.0, 600.0)),
            DVec2::new(-20.0, 600.0)
        );
    }
}
