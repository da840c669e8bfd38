//! Gefilterte Bildraten-Messung aus der gemessenen Bildzeit.

/// Glättungsstärke des Tiefpassfilters.
pub const FILTER_STRENGTH: f64 = 20.0;
/// Mindestanzahl Frames, bevor ein Wert gemeldet wird.
pub const WARMUP_FRAMES: u32 = 30;

/// Tiefpass-gefilterte Bildzeit.
///
/// Beeinflusst die Physik nicht; speist nur die Anzeige.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRateMeter {
    filtered_frame_time: f64,
    frames: u32,
}

impl Default for FrameRateMeter {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameRateMeter {
    /// Erstellt einen Messer ohne Messwerte.
    pub fn new() -> Self {
        Self {
            filtered_frame_time: 0.0,
            frames: 0,
        }
    }

    /// Verbucht eine gemessene Bildzeit in Sekunden. Nicht-positive Werte werden ignoriert.
    pub fn record(&mut self, wall_dt: f64) {
        if !wall_dt.is_finite() || wall_dt <= 0.0 {
            return;
        }
        self.frames = self.frames.saturating_add(1);
        if self.frames == 1 {
            self.filtered_frame_time = wall_dt;
        } else {
            self.filtered_frame_time += (wall_dt - self.filtered_frame_time) / FILTER_STRENGTH;
        }
    }

    /// Bilder pro Sekunde, sobald mehr als `WARMUP_FRAMES` gemessen wurden.
    pub fn frames_per_second(&self) -> Option<f64> {
        (self.frames > WARMUP_FRAMES && self.filtered_frame_time > 0.0)
            .then(|| 1.0 / self.filtered_frame_time)
    }

    /// Anzahl verbuchter Frames.
    pub fn frames(&self) -> u32 {
        self.frames
    }
}
