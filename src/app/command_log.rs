//! Minimales Command-Log für Nachvollziehbarkeit und Tests.

use super::AppCommand;

/// Speichert ausgeführte Commands in Reihenfolge.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;
}

impl CommandLog {
    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Fügt einen ausgeführten Command hinzu.
    /// Begrenzt auf MAX_ENTRIES, ältere Einträge werden verworfen.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command.clone());
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_drops_oldest_half_when_full() {
        let mut log = CommandLog::new();
        for i in 0..CommandLog::MAX_ENTRIES {
            log.record(&AppCommand::RemoveControlPoint { index: i });
        }
        assert_eq!(log.len(), CommandLog::MAX_ENTRIES);

        log.record(&AppCommand::ResetSimulation);
        assert_eq!(log.len(), CommandLog::MAX_ENTRIES / 2 + 1);
        assert_eq!(
            log.entries()[0],
            AppCommand::RemoveControlPoint {
                index: CommandLog::MAX_ENTRIES / 2
            }
        );
        assert_eq!(log.entries().last(), Some(&AppCommand::ResetSimulation));
    }
}
