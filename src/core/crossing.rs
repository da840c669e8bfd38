//! Erkennung, ob der freie Körper die Strecke in einem Schritt durchquert hat.

use super::spline::CrossingSide;
use super::track::SIDE_TEST_DELTA;
use super::Track;
use glam::DVec2;

/// Standard-Toleranz für den Abgleich der Nullstellen vor/nach dem Schritt.
pub const ROOT_TOLERANCE: f64 = 1e-4;

/// Eine erkannte Durchquerung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
    /// Kurvenparameter, an dem der Körper anhaftet
    pub parameter: f64,
    /// Seitenwert vor dem Schritt
    pub side_before: f64,
    /// Seitenwert nach dem Schritt
    pub side_after: f64,
}

/// Vorzeichen als -1, 0 oder +1 (0 nur bei exakt auf der Kurve).
fn side_sign(side: f64) -> i8 {
    if side > 0.0 {
        1
    } else if side < 0.0 {
        -1
    } else {
        0
    }
}

/// Vergleicht die Kurvenseite des Körpers vor und nach einem Schritt.
///
/// Eine Durchquerung liegt vor, wenn sich an einer Nullstelle, die vor und
/// nach dem Schritt (innerhalb `root_tolerance`) an derselben Stelle liegt,
/// das Vorzeichen des Seitentests ändert. Bei mehreren Treffern gewinnt der
/// zuletzt gefundene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttachmentDetector {
    /// Maximaler Parameterabstand zweier zusammengehöriger Nullstellen
    pub root_tolerance: f64,
    /// Parameterabstand δ der Tangentenpunkte im Seitentest
    pub side_delta: f64,
}

impl Default for AttachmentDetector {
    fn default() -> Self {
        Self {
            root_tolerance: ROOT_TOLERANCE,
            side_delta: SIDE_TEST_DELTA,
        }
    }
}

impl AttachmentDetector {
    /// Erstellt einen Detektor mit eigenen Toleranzen.
    pub fn new(root_tolerance: f64, side_delta: f64) -> Self {
        Self {
            root_tolerance,
            side_delta,
        }
    }

    /// Prüft den Schritt `before` → `after` gegen die Strecke.
    ///
    /// Liefert `None` bei weniger als drei Kontrollpunkten.
    pub fn detect(&self, track: &Track, before: DVec2, after: DVec2) -> Option<Crossing> {
        if !track.supports_attachment() {
            return None;
        }
        let spline = track.spline().ok()?;
        let sides_before = spline.crossing_sides(before, self.side_delta);
        let sides_after = spline.crossing_sides(after, self.side_delta);
        self.match_sides(&sides_before, &sides_after)
    }

    /// Sucht ein Nullstellen-Paar mit gleichem Ort und gewechseltem Vorzeichen.
    pub fn match_sides(
        &self,
        sides_before: &[CrossingSide],
        sides_after: &[CrossingSide],
    ) -> Option<Crossing> {
        let mut crossing = None;
        for before in sides_before {
            for after in sides_after {
                let distance = (after.parameter - before.parameter).abs();
                if distance < self.root_tolerance
                    && side_sign(before.side) != side_sign(after.side)
                {
                    crossing = Some(Crossing {
                        parameter: after.parameter,
                        side_before: before.side,
                        side_after: after.side,
                    });
                }
            }
        }
        crossing
    }
}
