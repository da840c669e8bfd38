//! Editierbare Strecke: Kontrollpunkte plus daraus abgeleitete Spline.

use super::spline::{CrossingSide, TrackSpline};
use super::CurveError;
use glam::DVec2;

/// Standard-Abstand δ für den Seitentest an einer Nullstelle.
pub const SIDE_TEST_DELTA: f64 = 1e-6;
/// Mindestanzahl an Kontrollpunkten, ab der Anhaften geprüft wird.
pub const MIN_POINTS_FOR_ATTACHMENT: usize = 3;

/// Geordnete Kontrollpunkte und die zugehörige Spline.
///
/// Die Spline wird bei jeder Änderung sofort neu berechnet, damit innerhalb
/// eines Ticks nie eine veraltete Kurve sichtbar ist. `revision` zählt die
/// Änderungen und dient Caches (z.B. Render-Samples) als Schlüssel.
#[derive(Debug, Clone)]
pub struct Track {
    points: Vec<DVec2>,
    spline: Option<TrackSpline>,
    revision: u64,
}

impl Track {
    /// Erstellt eine Strecke aus den gegebenen Kontrollpunkten.
    pub fn new(points: Vec<DVec2>) -> Self {
        let mut track = Self {
            points,
            spline: None,
            revision: 0,
        };
        track.rebuild();
        track
    }

    /// Kontrollpunkte in Reihenfolge.
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Anzahl der Kontrollpunkte.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Änderungszähler der Kontrollpunkte.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// `true` wenn genug Punkte für Seitentest und Anhaften vorhanden sind.
    pub fn supports_attachment(&self) -> bool {
        self.points.len() >= MIN_POINTS_FOR_ATTACHMENT
    }

    /// Die aktuelle Spline oder `DegenerateCurve` bei weniger als zwei Punkten.
    pub fn spline(&self) -> Result<&TrackSpline, CurveError> {
        self.spline.as_ref().ok_or(CurveError::DegenerateCurve {
            point_count: self.points.len(),
        })
    }

    /// Position auf der Kurve bei `s`.
    pub fn evaluate(&self, s: f64) -> Result<DVec2, CurveError> {
        Ok(self.spline()?.evaluate(s))
    }

    /// Seitenwerte von `point` an allen x-Nullstellen der Kurve.
    pub fn crossing_sides(
        &self,
        point: DVec2,
        delta: f64,
    ) -> Result<Vec<CrossingSide>, CurveError> {
        Ok(self.spline()?.crossing_sides(point, delta))
    }

    /// Seitenwert von `point` relativ zur Kurve.
    ///
    /// Verwendet die Nullstelle, deren Kurvenpunkt vertikal am nächsten liegt.
    /// `None`, wenn der Punkt nicht über oder unter der Kurve liegt.
    pub fn side_of_curve(&self, point: DVec2) -> Result<Option<f64>, CurveError> {
        let spline = self.spline()?;
        let nearest = self
            .crossing_sides(point, SIDE_TEST_DELTA)?
            .into_iter()
            .map(|c| ((spline.evaluate(c.parameter).y - point.y).abs(), c.side))
            .min_by(|a, b| a.0.total_cmp(&b.0));
        Ok(nearest.map(|(_, side)| side))
    }

    /// Prüft, ob `s` ein gültiger Anhaftungs-Parameter ist.
    pub fn check_parameter(s: f64) -> Result<f64, CurveError> {
        if (0.0..=1.0).contains(&s) {
            Ok(s)
        } else {
            Err(CurveError::InvalidParameter { parameter: s })
        }
    }

    /// `count` gleichmäßig verteilte Kurvenpunkte; ohne Spline die Kontrollpunkte selbst.
    pub fn samples(&self, count: usize) -> Vec<DVec2> {
        match &self.spline {
            Some(spline) => spline.samples(count),
            None => self.points.clone(),
        }
    }

    /// Verschiebt den Kontrollpunkt `index`. `false` bei ungültigem Index.
    pub fn move_point(&mut self, index: usize, position: DVec2) -> bool {
        let Some(point) = self.points.get_mut(index) else {
            return false;
        };
        if *point == position {
            return true;
        }
        *point = position;
        self.rebuild();
        true
    }

    /// Hängt einen Kontrollpunkt an das Ende der Strecke an.
    pub fn push_point(&mut self, position: DVec2) -> usize {
        self.points.push(position);
        self.rebuild();
        self.points.len() - 1
    }

    /// Entfernt den Kontrollpunkt `index` und gibt seine Position zurück.
    pub fn remove_point(&mut self, index: usize) -> Option<DVec2> {
        if index >= self.points.len() {
            return None;
        }
        let removed = self.points.remove(index);
        self.rebuild();
        Some(removed)
    }

    /// Index des Kontrollpunkts, der `position` am nächsten liegt.
    pub fn nearest_point(&self, position: DVec2) -> Option<(usize, f64)> {
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| (i, p.distance(position)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }

    fn rebuild(&mut self) {
        self.spline = TrackSpline::through(&self.points).ok();
        self.revision += 1;
        log::debug!(
            "Strecke neu berechnet: {} Kontrollpunkte (Revision {})",
            self.points.len(),
            self.revision
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn valley() -> Track {
        Track::new(vec![
            DVec2::new(100.0, 100.0),
            DVec2::new(200.0, 200.0),
            DVec2::new(300.0, 100.0),
        ])
    }

    #[test]
    fn test_degenerate_track_reports_error() {
        let track = Track::new(vec![DVec2::new(1.0, 2.0)]);
        assert_eq!(
            track.evaluate(0.5),
            Err(CurveError::DegenerateCurve { point_count: 1 })
        );
        assert!(!track.supports_attachment());
        assert!(track.side_of_curve(DVec2::ZERO).is_err());
    }

    #[test]
    fn test_two_point_track_is_straight_without_attachment() {
        let track = Track::new(vec![DVec2::new(0.0, 0.0), DVec2::new(100.0, 50.0)]);
        let mid = track.evaluate(0.5).unwrap();
        assert_abs_diff_eq!(mid.x, 50.0, epsilon = 1e-9);
        assert_abs_diff_eq!(mid.y, 25.0, epsilon = 1e-9);
        assert!(!track.supports_attachment());
    }

    #[test]
    fn test_move_point_rebuilds_spline_and_bumps_revision() {
        let mut track = valley();
        let before = track.evaluate(0.5).unwrap();
        let revision = track.revision();

        assert!(track.move_point(1, DVec2::new(200.0, 300.0)));
        assert!(track.revision() > revision);
        let after = track.evaluate(0.5).unwrap();
        assert_ne!(before, after);
        assert_abs_diff_eq!(after.y, 300.0, epsilon = 1e-9);
    }

    #[test]
    fn test_move_point_to_same_position_keeps_revision() {
        let mut track = valley();
        let revision = track.revision();
        assert!(track.move_point(0, DVec2::new(100.0, 100.0)));
        assert_eq!(track.revision(), revision);
    }

    #[test]
    fn test_move_point_with_invalid_index() {
        let mut track = valley();
        assert!(!track.move_point(7, DVec2::ZERO));
    }

    #[test]
    fn test_remove_points_until_degenerate() {
        let mut track = valley();
        assert!(track.remove_point(2).is_some());
        assert!(track.evaluate(0.3).is_ok());
        assert!(track.remove_point(0).is_some());
        assert!(track.evaluate(0.3).is_err());
        assert!(track.remove_point(5).is_none());
    }

    #[test]
    fn test_side_of_curve_above_and_below() {
        let track = valley();
        let above = track.side_of_curve(DVec2::new(150.0, 20.0)).unwrap().unwrap();
        let below = track.side_of_curve(DVec2::new(150.0, 300.0)).unwrap().unwrap();
        assert!(above.signum() != below.signum());
        assert_eq!(track.side_of_curve(DVec2::new(10.0, 20.0)).unwrap(), None);
    }

    #[test]
    fn test_check_parameter_bounds() {
        assert_eq!(Track::check_parameter(0.0), Ok(0.0));
        assert_eq!(Track::check_parameter(1.0), Ok(1.0));
        assert!(matches!(
            Track::check_parameter(1.006),
            Err(CurveError::InvalidParameter { .. })
        ));
        assert!(Track::check_parameter(-0.001).is_err());
    }

    #[test]
    fn test_nearest_point() {
        let track = valley();
        let (index, distance) = track.nearest_point(DVec2::new(195.0, 205.0)).unwrap();
        assert_eq!(index, 1);
        assert!(distance < 10.0);
    }
}
