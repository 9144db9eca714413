//! Use-Case: Node unter dem Klick löschen.

use crate::app::AppState;

/// Löscht den getroffenen Node inklusive inzidenter Kanten.
///
/// Da alle höheren Indizes nachrücken, werden offene Auswahlen und der
/// zuletzt berechnete kürzeste Weg verworfen.
pub fn delete_node_at_position(state: &mut AppState, pos: glam::Vec2, radius: f32) {
    let Some(hit) = state.graph.find_node_near(pos, radius) else {
        return;
    };

    let edges_before = state.graph.edge_count();
    match state.graph.delete_node(hit) {
        Ok(node) => {
            state.editor.clear_pending_selection();
            state.algorithms.shortest_path = None;
            log::info!(
                "Node {} ({}) gelöscht, {} Kanten entfernt",
                hit,
                node.label,
                edges_before - state.graph.edge_count()
            );
        }
        Err(e) => log::warn!("Node nicht gelöscht: {}", e),
    }
}
