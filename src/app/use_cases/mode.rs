//! Use-Case: Editor-Modus wechseln.

use crate::app::AppState;
use crate::shared::EditorMode;

/// Aktiviert einen Modus.
///
/// Offene Zwei-Klick-Auswahlen und eine offene Gewichtseingabe werden
/// verworfen, der Graph bleibt unverändert. Beim Wechsel in den MST-Modus
/// wird der Spannbaum sofort berechnet.
pub fn set_mode(state: &mut AppState, mode: EditorMode) {
    state.editor.clear_pending_selection();
    if state.weight_entry.close().is_some() {
        log::debug!("Offene Gewichtseingabe durch Moduswechsel verworfen");
    }
    state.editor.mode = mode;

    if mode == EditorMode::Mst {
        super::algorithms::recompute_spanning_tree(state);
    }

    log::info!("Modus: {}", mode.label());
}
