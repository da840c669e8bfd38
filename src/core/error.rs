//! Fehlertypen der Kurven- und Körper-Physik.

/// Fehler beim Auswerten der Strecke.
///
/// Beide Varianten sind lokal behebbar: der Aufrufer lässt den Körper
/// frei fallen, bis die Strecke wieder gültig ist.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum CurveError {
    /// Weniger als zwei Kontrollpunkte: keine Spline berechenbar.
    #[error("Strecke degeneriert: {point_count} Kontrollpunkt(e), mindestens 2 erforderlich")]
    DegenerateCurve { point_count: usize },
    /// Anhaftungs-Parameter liegt außerhalb von [0, 1].
    #[error("Kurvenparameter {parameter} liegt außerhalb von [0, 1]")]
    InvalidParameter { parameter: f64 },
}
