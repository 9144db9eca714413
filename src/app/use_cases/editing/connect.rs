//! Use-Case: Zwei-Klick-Auswahl für eine neue Kante.

use crate::app::AppState;

/// Verarbeitet einen Klick im AddEdge-Modus.
///
/// Der erste Treffer merkt sich den Node, ein Treffer auf einen anderen
/// Node öffnet die Gewichtseingabe und leert die Auswahl. Klicks ins Leere
/// oder auf denselben Node ändern nichts.
pub fn select_edge_endpoint(state: &mut AppState, pos: glam::Vec2, radius: f32) {
    let Some(hit) = state.graph.find_node_near(pos, radius) else {
        return;
    };

    match state.editor.selected_node {
        None => {
            state.editor.selected_node = Some(hit);
            log::debug!("AddEdge: Start-Node {} gewählt", hit);
        }
        Some(first) if first == hit => {}
        Some(first) => {
            state.editor.selected_node = None;
            state.weight_entry.open_for_new_edge(first, hit);
            log::info!("AddEdge: Gewichtseingabe für Kante {}–{} geöffnet", first, hit);
        }
    }
}
