//! Use-Case: Gewicht einer bestehenden Kante bearbeiten.

use crate::app::AppState;

/// Öffnet die Gewichtseingabe für die erste Kante unter der Schwelle.
///
/// Der Puffer wird mit dem aktuellen Gewicht vorbelegt.
pub fn begin_weight_edit(state: &mut AppState, pos: glam::Vec2, threshold: f32) {
    let Some(edge_index) = state.graph.find_edge_near(pos, threshold) else {
        return;
    };
    let Some(edge) = state.graph.edge(edge_index) else {
        return;
    };

    let weight = edge.weight;
    state.weight_entry.open_for_existing_edge(edge_index, weight);
    log::info!(
        "EditWeight: Kante {} ({}–{}) gewählt, Gewicht {}",
        edge_index,
        edge.src,
        edge.dest,
        weight
    );
}
