//! Natürliche kubische Splines über gleichmäßig verteilte Knoten in [0, 1].
//!
//! `CubicSpline` interpoliert eine skalare Wertefolge, `TrackSpline` kombiniert
//! zwei davon zur ebenen Streckenkurve P(s) = (x(s), y(s)).
//! Reine Geometrie ohne Zustand: gleiche Eingaben liefern bitgleiche Ergebnisse.

use super::CurveError;
use glam::DVec2;

/// Abtast-Intervalle pro Segment für die Nullstellensuche.
const ROOT_SAMPLES_PER_SEGMENT: usize = 16;
/// Bisektions-Schritte pro eingeschlossener Nullstelle.
const ROOT_BISECTION_STEPS: usize = 60;
/// Mindestabstand, unter dem zwei Nullstellen als identisch gelten.
const ROOT_DEDUP_EPSILON: f64 = 1e-12;

/// Natürliche kubische Spline (zweite Ableitung an beiden Enden = 0).
///
/// Knoten liegen bei `s_i = i / (n - 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline {
    values: Vec<f64>,
    second_derivatives: Vec<f64>,
    spacing: f64,
}

impl CubicSpline {
    /// Berechnet die Spline-Koeffizienten für `values`.
    ///
    /// Zwei Werte ergeben eine Gerade. Weniger als zwei: `DegenerateCurve`.
    pub fn natural(values: &[f64]) -> Result<Self, CurveError> {
        let n = values.len();
        if n < 2 {
            return Err(CurveError::DegenerateCurve { point_count: n });
        }
        let spacing = 1.0 / (n - 1) as f64;
        let mut second_derivatives = vec![0.0; n];

        // Tridiagonalsystem M[i-1] + 4·M[i] + M[i+1] = 6/h² · (y[i+1] − 2·y[i] + y[i−1])
        // für die inneren Knoten (Thomas-Algorithmus).
        let inner = n - 2;
        if inner > 0 {
            let scale = 6.0 / (spacing * spacing);
            let mut upper = vec![0.0; inner];
            let mut rhs = vec![0.0; inner];
            for k in 0..inner {
                let i = k + 1;
                let d = scale * (values[i + 1] - 2.0 * values[i] + values[i - 1]);
                if k == 0 {
                    upper[k] = 1.0 / 4.0;
                    rhs[k] = d / 4.0;
                } else {
                    let denom = 4.0 - upper[k - 1];
                    upper[k] = 1.0 / denom;
                    rhs[k] = (d - rhs[k - 1]) / denom;
                }
            }
            second_derivatives[inner] = rhs[inner - 1];
            for k in (0..inner - 1).rev() {
                second_derivatives[k + 1] = rhs[k] - upper[k] * second_derivatives[k + 2];
            }
        }

        Ok(Self {
            values: values.to_vec(),
            second_derivatives,
            spacing,
        })
    }

    /// Parameterwert des Knotens `index`.
    pub fn knot(&self, index: usize) -> f64 {
        index as f64 / (self.values.len() - 1) as f64
    }

    fn segment_count(&self) -> usize {
        self.values.len() - 1
    }

    /// Segment-Index für `s`; Werte außerhalb [0, 1] fallen auf die Randsegmente.
    fn segment_of(&self, s: f64) -> usize {
        let raw = (s / self.spacing).floor();
        if raw.is_nan() || raw < 0.0 {
            0
        } else {
            (raw as usize).min(self.segment_count() - 1)
        }
    }

    /// Baryzentrische Gewichte (a, b) von `s` im Segment `segment`.
    fn weights(&self, segment: usize, s: f64) -> (f64, f64) {
        let start = self.knot(segment);
        let end = self.knot(segment + 1);
        ((end - s) / self.spacing, (s - start) / self.spacing)
    }

    fn value_in_segment(&self, segment: usize, s: f64) -> f64 {
        let (a, b) = self.weights(segment, s);
        let h2 = self.spacing * self.spacing;
        a * self.values[segment]
            + b * self.values[segment + 1]
            + ((a * a * a - a) * self.second_derivatives[segment]
                + (b * b * b - b) * self.second_derivatives[segment + 1])
                * h2
                / 6.0
    }

    /// Wert der Spline bei `s`. Außerhalb [0, 1] wird das Randsegment fortgesetzt.
    pub fn at(&self, s: f64) -> f64 {
        self.value_in_segment(self.segment_of(s), s)
    }

    /// Erste Ableitung nach `s`.
    pub fn derivative(&self, s: f64) -> f64 {
        let segment = self.segment_of(s);
        let (a, b) = self.weights(segment, s);
        let h = self.spacing;
        (self.values[segment + 1] - self.values[segment]) / h
            - (3.0 * a * a - 1.0) / 6.0 * h * self.second_derivatives[segment]
            + (3.0 * b * b - 1.0) / 6.0 * h * self.second_derivatives[segment + 1]
    }

    /// Zweite Ableitung nach `s` (stückweise linear).
    pub fn second_derivative(&self, s: f64) -> f64 {
        let segment = self.segment_of(s);
        let (a, b) = self.weights(segment, s);
        a * self.second_derivatives[segment] + b * self.second_derivatives[segment + 1]
    }

    /// Alle Parameter s ∈ [0, 1] mit `at(s) == target`, aufsteigend sortiert.
    ///
    /// Vorzeichenwechsel werden pro Segment auf einem festen Raster gesucht und
    /// per Bisektion verfeinert. Berührpunkte ohne Vorzeichenwechsel werden nur
    /// gefunden, wenn sie exakt auf einem Rasterpunkt liegen.
    pub fn roots(&self, target: f64) -> Vec<f64> {
        let mut roots: Vec<f64> = Vec::new();

        for segment in 0..self.segment_count() {
            let f = |s: f64| self.value_in_segment(segment, s) - target;
            let start = self.knot(segment);
            let step = self.spacing / ROOT_SAMPLES_PER_SEGMENT as f64;

            for k in 0..ROOT_SAMPLES_PER_SEGMENT {
                let lo = start + k as f64 * step;
                let hi = if k + 1 == ROOT_SAMPLES_PER_SEGMENT {
                    self.knot(segment + 1)
                } else {
                    start + (k + 1) as f64 * step
                };
                let f_lo = f(lo);
                let f_hi = f(hi);

                if f_lo == 0.0 {
                    push_root(&mut roots, lo);
                } else if (f_lo < 0.0) != (f_hi < 0.0) && f_hi != 0.0 {
                    push_root(&mut roots, bisect(&f, lo, hi, f_lo));
                }
            }
        }

        let last = self.segment_count() - 1;
        if self.value_in_segment(last, 1.0) - target == 0.0 {
            push_root(&mut roots, 1.0);
        }
        roots
    }
}

/// Hängt `root` an, sofern sie nicht mit der zuletzt gefundenen zusammenfällt.
fn push_root(roots: &mut Vec<f64>, root: f64) {
    match roots.last() {
        Some(last) if (root - last).abs() <= ROOT_DEDUP_EPSILON => {}
        _ => roots.push(root),
    }
}

/// Verfeinert eine Nullstelle in [lo, hi] mit `f(lo)` und `f(hi)` verschiedener Vorzeichen.
fn bisect(f: &impl Fn(f64) -> f64, lo: f64, hi: f64, f_lo: f64) -> f64 {
    let (mut lo, mut hi, mut f_lo) = (lo, hi, f_lo);
    for _ in 0..ROOT_BISECTION_STEPS {
        let mid = 0.5 * (lo + hi);
        let f_mid = f(mid);
        if f_mid == 0.0 {
            return mid;
        }
        if (f_mid < 0.0) == (f_lo < 0.0) {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
    }
    0.5 * (lo + hi)
}

/// Seite eines Punkts relativ zur Kurve an einer x-Nullstelle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossingSide {
    /// Kurvenparameter, an dem x(s) der Punkt-x-Koordinate entspricht
    pub parameter: f64,
    /// Vorzeichenbehafteter Seitenwert (Kreuzprodukt)
    pub side: f64,
}

/// Ebene Streckenkurve aus zwei natürlichen Splines.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackSpline {
    x: CubicSpline,
    y: CubicSpline,
}

impl TrackSpline {
    /// Berechnet die Spline durch `points` (Index linear auf [0, 1] abgebildet).
    pub fn through(points: &[DVec2]) -> Result<Self, CurveError> {
        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
        Ok(Self {
            x: CubicSpline::natural(&xs)?,
            y: CubicSpline::natural(&ys)?,
        })
    }

    /// Position bei Parameter `s`.
    pub fn evaluate(&self, s: f64) -> DVec2 {
        DVec2::new(self.x.at(s), self.y.at(s))
    }

    /// Tangentenvektor dP/ds.
    pub fn derivative(&self, s: f64) -> DVec2 {
        DVec2::new(self.x.derivative(s), self.y.derivative(s))
    }

    /// Alle Parameter, an denen die Kurve die Vertikale durch `x` schneidet.
    pub fn x_roots(&self, x: f64) -> Vec<f64> {
        self.x.roots(x)
    }

    /// Seitenwert von `point` relativ zur Kurventangente bei `parameter`.
    ///
    /// Kreuzprodukt `(post − pre) × (point − pre)` mit `pre = P(s − δ)` und
    /// `post = P(s + δ)`. Das Vorzeichen ist für eine feste Kurve stabil.
    pub fn side_at(&self, parameter: f64, point: DVec2, delta: f64) -> f64 {
        let pre = self.evaluate(parameter - delta);
        let post = self.evaluate(parameter + delta);
        (post - pre).perp_dot(point - pre)
    }

    /// Seitenwerte von `point` an allen x-Nullstellen der Kurve.
    pub fn crossing_sides(&self, point: DVec2, delta: f64) -> Vec<CrossingSide> {
        self.x_roots(point.x)
            .into_iter()
            .map(|parameter| CrossingSide {
                parameter,
                side: self.side_at(parameter, point, delta),
            })
            .collect()
    }

    /// Gleichmäßig im Parameter verteilte Abtastpunkte (inkl. beider Enden).
    pub fn samples(&self, count: usize) -> Vec<DVec2> {
        match count {
            0 => Vec::new(),
            1 => vec![self.evaluate(0.0)],
            _ => (0..count)
                .map(|i| self.evaluate(i as f64 / (count - 1) as f64))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn valley() -> TrackSpline {
        TrackSpline::through(&[
            DVec2::new(100.0, 100.0),
            DVec2::new(200.0, 200.0),
            DVec2::new(300.0, 100.0),
        ])
        .expect("drei Punkte ergeben eine Spline")
    }

    #[test]
    fn test_natural_spline_passes_through_knots() {
        let values = [3.0, -1.0, 4.0, 1.0, 5.0];
        let spline = CubicSpline::natural(&values).unwrap();
        for (i, v) in values.iter().enumerate() {
            assert_abs_diff_eq!(spline.at(spline.knot(i)), *v, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_natural_spline_has_zero_curvature_at_ends() {
        let spline = CubicSpline::natural(&[0.0, 2.0, -3.0, 1.0]).unwrap();
        assert_abs_diff_eq!(spline.second_derivative(0.0), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(spline.second_derivative(1.0), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_three_point_middle_curvature() {
        // M1 = 6/h² · (100 − 400 + 100) / 4 bei h = 0.5
        let spline = CubicSpline::natural(&[100.0, 200.0, 100.0]).unwrap();
        assert_relative_eq!(spline.second_derivative(0.5), -1200.0, epsilon = 1e-9);
        assert_relative_eq!(spline.at(0.25), 168.75, epsilon = 1e-9);
    }

    #[test]
    fn test_two_points_give_straight_line() {
        let spline = CubicSpline::natural(&[10.0, 30.0]).unwrap();
        assert_relative_eq!(spline.at(0.25), 15.0);
        assert_relative_eq!(spline.derivative(0.7), 20.0);
    }

    #[test]
    fn test_fewer_than_two_values_is_degenerate() {
        assert_eq!(
            CubicSpline::natural(&[1.0]),
            Err(CurveError::DegenerateCurve { point_count: 1 })
        );
        assert!(TrackSpline::through(&[]).is_err());
    }

    #[test]
    fn test_derivative_is_continuous_across_knots() {
        let spline = CubicSpline::natural(&[0.0, 5.0, -2.0, 7.0, 1.0]).unwrap();
        for i in 1..4 {
            let k = spline.knot(i);
            let left = spline.derivative(k - 1e-9);
            let right = spline.derivative(k + 1e-9);
            assert_abs_diff_eq!(left, right, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_roots_of_linear_x_component() {
        let spline = valley();
        let roots = spline.x_roots(150.0);
        assert_eq!(roots.len(), 1);
        assert_abs_diff_eq!(roots[0], 0.25, epsilon = 1e-12);
        assert!(spline.x_roots(50.0).is_empty());
    }

    #[test]
    fn test_roots_find_every_crossing() {
        // y(s) steigt und fällt: jede Höhe zwischen 100 und 200 wird zweimal getroffen
        let spline = CubicSpline::natural(&[100.0, 200.0, 100.0]).unwrap();
        let roots = spline.roots(150.0);
        assert_eq!(roots.len(), 2);
        for root in roots {
            assert_abs_diff_eq!(spline.at(root), 150.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_root_on_knot_is_reported_once() {
        let spline = CubicSpline::natural(&[0.0, 1.0, 2.0]).unwrap();
        let roots = spline.roots(1.0);
        assert_eq!(roots.len(), 1);
        assert_abs_diff_eq!(roots[0], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let spline = valley();
        for i in 0..=100 {
            let s = i as f64 / 100.0;
            assert_eq!(spline.evaluate(s), spline.evaluate(s));
        }
        let rebuilt = valley();
        assert_eq!(spline, rebuilt);
    }

    #[test]
    fn test_side_changes_sign_across_curve() {
        let spline = valley();
        let above = spline.side_at(0.25, DVec2::new(150.0, 160.0), 1e-6);
        let below = spline.side_at(0.25, DVec2::new(150.0, 180.0), 1e-6);
        assert!(above * below < 0.0, "Seiten: {above} / {below}");
    }

    #[test]
    fn test_samples_cover_both_ends() {
        let spline = valley();
        let samples = spline.samples(75);
        assert_eq!(samples.len(), 75);
        assert_abs_diff_eq!(samples[0].x, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(samples[74].x, 300.0, epsilon = 1e-9);
    }
}
