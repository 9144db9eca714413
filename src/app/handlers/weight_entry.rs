//! Handler für das Gewichtseingabe-Overlay.

use crate::app::use_cases;
use crate::app::AppState;

/// Hängt ein getipptes Zeichen an.
pub fn append(state: &mut AppState, ch: char) {
    use_cases::weight_entry::append(state, ch);
}

/// Entfernt das letzte Zeichen.
pub fn backspace(state: &mut AppState) {
    use_cases::weight_entry::backspace(state);
}

/// Übernimmt die Eingabe.
pub fn commit(state: &mut AppState) {
    use_cases::weight_entry::commit(state);
}

/// Bricht die Eingabe ab.
pub fn cancel(state: &mut AppState) {
    use_cases::weight_entry::cancel(state);
}
