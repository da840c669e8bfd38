//! Der bewegte Körper (Skater): freier Fall oder an die Strecke gebunden.

use super::{CurveError, Track};
use glam::DVec2;

/// Bewegungsmodus des Körpers.
///
/// Der Anhaftungs-Parameter existiert nur im Modus `Attached`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BodyMode {
    /// Ballistisch unter Schwerkraft
    #[default]
    Free,
    /// Auf der Strecke bei Kurvenparameter `parameter` ∈ [0, 1]
    Attached { parameter: f64 },
}

impl BodyMode {
    /// Anhaftungs-Parameter, falls angehaftet.
    pub fn parameter(&self) -> Option<f64> {
        match self {
            BodyMode::Free => None,
            BodyMode::Attached { parameter } => Some(*parameter),
        }
    }

    /// `true` im Modus `Attached`.
    pub fn is_attached(&self) -> bool {
        matches!(self, BodyMode::Attached { .. })
    }
}

/// Ergebnis eines Schritts entlang der Strecke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttachedStep {
    /// Weiterhin angehaftet
    Moved,
    /// Parameter hat [0, 1] verlassen, Körper ist wieder frei
    Detached { exit_parameter: f64 },
    /// Körper war nicht angehaftet oder die Strecke ist degeneriert
    NotAttached,
}

/// Position, Geschwindigkeit und Modus des Skaters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Kontaktpunkt in Weltkoordinaten (y wächst nach unten)
    pub position: DVec2,
    /// Geschwindigkeit in Welteinheiten pro Sekunde
    pub velocity: DVec2,
    /// Aktueller Bewegungsmodus
    pub mode: BodyMode,
    /// Wird gerade vom Benutzer gezogen (Physik ausgesetzt)
    pub dragging: bool,
}

impl Body {
    /// Ruhender, freier Körper an `position`.
    pub fn at_rest(position: DVec2) -> Self {
        Self {
            position,
            velocity: DVec2::ZERO,
            mode: BodyMode::Free,
            dragging: false,
        }
    }

    /// Semi-implizites Euler-Verfahren: erst v, dann x.
    ///
    /// Während eines Drags findet keine Integration statt.
    pub fn step_free(&mut self, dt: f64, gravity: DVec2) {
        if self.dragging {
            return;
        }
        self.velocity += gravity * dt;
        self.position += self.velocity * dt;
    }

    /// Schiebt den Körper um `increment` entlang der Strecke.
    ///
    /// Die Position wird immer aus der Kurve abgetastet, die Geschwindigkeit
    /// ergibt sich als Positionsdifferenz pro `dt`. Verlässt der Parameter
    /// [0, 1], wird am Kurvenende abgetastet und der Körper freigegeben.
    pub fn step_attached(&mut self, dt: f64, increment: f64, track: &Track) -> AttachedStep {
        let BodyMode::Attached { parameter } = self.mode else {
            return AttachedStep::NotAttached;
        };
        let Ok(spline) = track.spline() else {
            self.mode = BodyMode::Free;
            return AttachedStep::NotAttached;
        };

        let previous = self.position;
        let next = parameter + increment;
        let outcome = match Track::check_parameter(next) {
            Ok(s) => {
                self.position = spline.evaluate(s);
                self.mode = BodyMode::Attached { parameter: s };
                AttachedStep::Moved
            }
            Err(CurveError::InvalidParameter { parameter }) => {
                self.position = spline.evaluate(parameter.clamp(0.0, 1.0));
                self.mode = BodyMode::Free;
                AttachedStep::Detached {
                    exit_parameter: parameter,
                }
            }
            Err(CurveError::DegenerateCurve { .. }) => {
                self.mode = BodyMode::Free;
                AttachedStep::NotAttached
            }
        };
        if dt > 0.0 {
            self.velocity = (self.position - previous) / dt;
        }
        outcome
    }

    /// Bindet den Körper bei `parameter` an die Strecke und setzt ihn auf die Kurve.
    ///
    /// `dt` > 0 leitet die Geschwindigkeit aus dem Positionssprung ab,
    /// sonst bleibt sie unverändert.
    pub fn attach(&mut self, parameter: f64, curve_point: DVec2, dt: f64, previous: DVec2) {
        self.mode = BodyMode::Attached { parameter };
        self.position = curve_point;
        if dt > 0.0 {
            self.velocity = (curve_point - previous) / dt;
        }
    }

    /// Löst den Körper von der Strecke; Position und Geschwindigkeit bleiben.
    pub fn detach(&mut self) {
        self.mode = BodyMode::Free;
    }

    /// Startet einen Drag: Körper wird frei und ruht.
    pub fn begin_drag(&mut self) {
        self.dragging = true;
        self.mode = BodyMode::Free;
        self.velocity = DVec2::ZERO;
    }

    /// Setzt die Position direkt aus der Eingabe, Geschwindigkeit bleibt null.
    pub fn drag_to(&mut self, position: DVec2) {
        self.position = position;
        self.velocity = DVec2::ZERO;
    }

    /// Beendet den Drag; die Physik startet aus der Ruhe.
    pub fn end_drag(&mut self) {
        self.dragging = false;
        self.velocity = DVec2::ZERO;
    }

    /// Geschwindigkeitsbetrag.
    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn valley() -> Track {
        Track::new(vec![
            DVec2::new(100.0, 100.0),
            DVec2::new(200.0, 200.0),
            DVec2::new(300.0, 100.0),
        ])
    }

    #[test]
    fn test_step_free_semi_implicit_euler() {
        let mut body = Body::at_rest(DVec2::new(0.0, 0.0));
        body.step_free(0.02, DVec2::new(0.0, 1250.0));
        // v = 25, x = v·dt = 0.5
        assert_relative_eq!(body.velocity.y, 25.0, epsilon = 1e-9);
        assert_relative_eq!(body.position.y, 0.5, epsilon = 1e-9);
        body.step_free(0.02, DVec2::new(0.0, 1250.0));
        assert_relative_eq!(body.position.y, 1.5, epsilon = 1e-9);
    }

    #[test]
    fn test_step_free_is_suppressed_while_dragging() {
        let mut body = Body::at_rest(DVec2::new(5.0, 5.0));
        body.begin_drag();
        body.step_free(0.02, DVec2::new(0.0, 1250.0));
        assert_eq!(body.position, DVec2::new(5.0, 5.0));
        assert_eq!(body.velocity, DVec2::ZERO);
    }

    #[test]
    fn test_step_attached_samples_curve() {
        let track = valley();
        let mut body = Body::at_rest(DVec2::ZERO);
        body.attach(0.5, track.evaluate(0.5).unwrap(), 0.0, DVec2::ZERO);

        let step = body.step_attached(0.02, 0.007, &track);
        assert_eq!(step, AttachedStep::Moved);
        let expected = 0.5 + 0.007;
        assert_eq!(body.position, track.evaluate(expected).unwrap());
        assert_eq!(body.mode, BodyMode::Attached { parameter: expected });
    }

    #[test]
    fn test_step_attached_detaches_past_end() {
        let track = valley();
        let mut body = Body::at_rest(DVec2::ZERO);
        let start = track.evaluate(0.998).unwrap();
        body.attach(0.998, start, 0.0, DVec2::ZERO);

        let step = body.step_attached(0.02, 0.007, &track);
        assert!(matches!(step, AttachedStep::Detached { exit_parameter } if exit_parameter > 1.0));
        assert_eq!(body.mode, BodyMode::Free);
        assert_eq!(body.position, track.evaluate(1.0).unwrap());
        assert_relative_eq!(body.velocity.x, (body.position.x - start.x) / 0.02);
    }

    #[test]
    fn test_step_attached_on_degenerate_track_frees_body() {
        let mut track = valley();
        let mut body = Body::at_rest(DVec2::ZERO);
        body.attach(0.2, track.evaluate(0.2).unwrap(), 0.0, DVec2::ZERO);
        track.remove_point(0);
        track.remove_point(0);

        assert_eq!(
            body.step_attached(0.02, 0.007, &track),
            AttachedStep::NotAttached
        );
        assert_eq!(body.mode, BodyMode::Free);
    }

    #[test]
    fn test_mode_parameter_only_when_attached() {
        assert_eq!(BodyMode::Free.parameter(), None);
        assert_eq!(BodyMode::Attached { parameter: 0.3 }.parameter(), Some(0.3));
        assert!(!BodyMode::Free.is_attached());
    }

    #[test]
    fn test_drag_lifecycle_resets_velocity() {
        let mut body = Body::at_rest(DVec2::ZERO);
        body.velocity = DVec2::new(3.0, 4.0);
        body.mode = BodyMode::Attached { parameter: 0.4 };

        body.begin_drag();
        assert!(body.dragging);
        assert_eq!(body.mode, BodyMode::Free);
        body.drag_to(DVec2::new(40.0, 50.0));
        assert_eq!(body.position, DVec2::new(40.0, 50.0));
        assert_eq!(body.velocity, DVec2::ZERO);
        body.end_drag();
        assert!(!body.dragging);
    }
}
