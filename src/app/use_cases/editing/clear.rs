//! Use-Case: Graph vollständig leeren.

use crate::app::AppState;
use crate::core::SpanningTree;

/// Entfernt alle Nodes und Kanten und setzt abgeleiteten Zustand zurück.
///
/// Der aktive Modus bleibt erhalten.
pub fn clear_graph(state: &mut AppState) {
    let nodes = state.graph.node_count();
    let edges = state.graph.edge_count();

    state.graph.clear();
    state.editor.clear_pending_selection();
    state.weight_entry.close();
    state.algorithms.shortest_path = None;
    state.algorithms.spanning_tree = SpanningTree::default();
    state.algorithms.component_count = 0;

    log::info!("Graph geleert ({} Nodes, {} Kanten entfernt)", nodes, edges);
}
