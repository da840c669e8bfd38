use crate::core::{DragTarget, SimulationSpeed};
use glam::DVec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Bildrate messen und einen Simulations-Tick ausführen
    AdvanceFrame { wall_dt: f64 },
    /// Pausenzustand setzen
    SetPaused { paused: bool },
    /// Geschwindigkeitsstufe setzen
    SetSpeed { speed: SimulationSpeed },
    /// Skater und Uhr zurücksetzen
    ResetSimulation,
    /// Drag-Sitzung starten
    BeginDrag { target: DragTarget, world_pos: DVec2 },
    /// Drag-Ziel zur Zeigerposition bewegen
    UpdateDrag { world_pos: DVec2 },
    /// Drag-Sitzung beenden
    EndDrag,
    /// Kontrollpunkt anhängen
    AddControlPoint { world_pos: DVec2 },
    /// Kontrollpunkt entfernen
    RemoveControlPoint { index: usize },
}
