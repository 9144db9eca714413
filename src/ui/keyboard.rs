//! Tastenzeichen → AppIntent.
//!
//! Welche Zeichen im Gewichtspuffer landen, entscheidet die App-Schicht.
//! Ohne offene Gewichtseingabe gelten zwei Kurzbefehle:
//! `l` schaltet das Force-Layout, `c` leert den Graphen.

use crate::app::AppIntent;

/// Übersetzt ein einzelnes Tastenzeichen in einen AppIntent.
///
/// `weight_entry_active` kommt vom Host (`AppState::weight_entry.is_active()`);
/// während einer Eingabe werden alle Zeichen an den Puffer weitergereicht.
pub fn key_intents(ch: char, weight_entry_active: bool) -> AppIntent {
    match ch {
        '\r' | '\n' => AppIntent::EnterPressed,
        '\u{8}' | '\u{7f}' => AppIntent::BackspacePressed,
        '\u{1b}' => AppIntent::EscapePressed,
        'l' | 'L' if !weight_entry_active => AppIntent::LayoutToggleRequested,
        'c' | 'C' if !weight_entry_active => AppIntent::ClearGraphRequested,
        other => AppIntent::CharacterTyped { ch: other },
    }
}
