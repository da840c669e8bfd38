use crate::core::{DragTarget, SimulationSpeed};
use glam::DVec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus Host/UI ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Neuer Frame; `wall_dt` ist die gemessene Bildzeit in Sekunden
    FrameRequested { wall_dt: f64 },
    /// Zeiger gedrückt: nächstes Drag-Ziel im Pick-Radius wählen
    PointerPressed { world_pos: DVec2 },
    /// Drag auf ein bekanntes Ziel starten
    DragStarted { target: DragTarget, world_pos: DVec2 },
    /// Zeiger bewegt während eines Drags
    DragMoved { world_pos: DVec2 },
    /// Zeiger losgelassen
    DragEnded,
    /// Play/Pause-Schalter
    PlayPauseToggled,
    /// Pausenzustand explizit setzen
    PauseChanged { paused: bool },
    /// Geschwindigkeitsstufe gewählt (Zeitlupe / normal)
    SpeedSelected { speed: SimulationSpeed },
    /// Skater und Uhr zurücksetzen
    ResetRequested,
    /// Kontrollpunkt am Ende der Strecke anhängen
    ControlPointAddRequested { world_pos: DVec2 },
    /// Kontrollpunkt entfernen
    ControlPointRemoveRequested { index: usize },
}
