//! Begrenzter Verlauf der vom Nutzer ausgelösten Commands.
//!
//! Frame-getriebene Commands (`StepLayout`, `RecomputeSpanningTree`) laufen
//! jeden Tick und werden nicht aufgenommen.

use super::AppCommand;

/// Ein aufgezeichneter Command mit fortlaufender Nummer.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedCommand {
    /// Laufende Nummer seit Sitzungsbeginn (bleibt beim Kürzen erhalten)
    pub seq: u64,
    /// Ausgeführter Command
    pub command: AppCommand,
}

/// Ringartiger Verlauf: bei MAX_ENTRIES wird die ältere Hälfte verworfen.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<LoggedCommand>,
    next_seq: u64,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prüft, ob ein Command pro Frame ausgelöst wird.
    pub fn is_frame_command(command: &AppCommand) -> bool {
        matches!(
            command,
            AppCommand::StepLayout | AppCommand::RecomputeSpanningTree
        )
    }

    /// Nimmt einen Command auf; Frame-Commands werden übergangen.
    ///
    /// Gibt `true` zurück, wenn der Command aufgenommen wurde.
    pub fn record(&mut self, command: &AppCommand) -> bool {
        if Self::is_frame_command(command) {
            return false;
        }
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(LoggedCommand {
            seq: self.next_seq,
            command: command.clone(),
        });
        self.next_seq += 1;
        true
    }

    /// Anzahl der aktuell gehaltenen Einträge.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Anzahl aller jemals aufgenommenen Commands.
    pub fn total_recorded(&self) -> u64 {
        self.next_seq
    }

    /// Gehaltene Einträge, älteste zuerst.
    pub fn entries(&self) -> &[LoggedCommand] {
        &self.entries
    }

    /// Iteriert nur über die Commands.
    pub fn commands(&self) -> impl Iterator<Item = &AppCommand> + '_ {
        self.entries.iter().map(|entry| &entry.command)
    }

    /// Der zuletzt aufgenommene Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.last().map(|entry| &entry.command)
    }
}
