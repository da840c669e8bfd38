//! Drag-Sitzungen für Körper und Kontrollpunkte.

use glam::DVec2;

/// Was gezogen wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    /// Der Skater
    Body,
    /// Kontrollpunkt mit Index
    ControlPoint(usize),
}

/// Laufender Drag vom Drücken bis zum Loslassen.
///
/// `grab_offset` ist der Abstand zwischen Ziel und Druckpunkt, damit das
/// Ziel beim ersten Bewegen nicht zum Zeiger springt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub target: DragTarget,
    pub grab_offset: DVec2,
}

impl DragSession {
    /// Startet einen Drag auf `target`, das sich bei `target_position` befindet.
    pub fn new(target: DragTarget, target_position: DVec2, pointer: DVec2) -> Self {
        Self {
            target,
            grab_offset: target_position - pointer,
        }
    }

    /// Zielposition für die aktuelle Zeigerposition.
    pub fn target_position(&self, pointer: DVec2) -> DVec2 {
        pointer + self.grab_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grab_offset_is_preserved() {
        let session = DragSession::new(
            DragTarget::ControlPoint(1),
            DVec2::new(200.0, 200.0),
            DVec2::new(205.0, 190.0),
        );
        assert_eq!(session.grab_offset, DVec2::new(-5.0, 10.0));
        assert_eq!(
            session.target_position(DVec2::new(305.0, 190.0)),
            DVec2::new(300.0, 200.0)
        );
    }
}
