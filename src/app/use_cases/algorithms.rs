//! Use-Cases für Dijkstra und Kruskal auf dem aktuellen Graph.

use crate::app::AppState;
use crate::core::{minimum_spanning_tree, shortest_path};

/// Verarbeitet einen Klick im ShortestPath-Modus.
///
/// Gleiches Zwei-Klick-Muster wie AddEdge, beim zweiten Treffer läuft
/// Dijkstra sofort und das Ergebnis ersetzt den bisherigen Pfad.
pub fn select_path_endpoint(state: &mut AppState, pos: glam::Vec2, radius: f32) {
    let Some(hit) = state.graph.find_node_near(pos, radius) else {
        return;
    };

    match state.editor.sp_selected {
        None => {
            state.editor.sp_selected = Some(hit);
            log::debug!("ShortestPath: Start-Node {} gewählt", hit);
        }
        Some(start) if start == hit => {}
        Some(start) => {
            state.editor.sp_selected = None;
            compute_shortest_path(state, start, hit);
        }
    }
}

/// Berechnet den kürzesten Weg und legt ihn im State ab.
///
/// Ungültige Endpunkte werden geloggt, der bisherige Pfad bleibt dann erhalten.
pub fn compute_shortest_path(state: &mut AppState, start: usize, end: usize) {
    match shortest_path(&state.graph, start, end) {
        Ok(path) => {
            if path.is_empty() {
                log::info!("Kein Weg von {} nach {}", start, end);
            } else {
                log::info!(
                    "Kürzester Weg {} → {}: {} Nodes, Gewicht {}",
                    start,
                    end,
                    path.nodes.len(),
                    path.total_weight
                );
            }
            state.algorithms.shortest_path = Some(path);
        }
        Err(e) => log::warn!("Dijkstra abgebrochen: {}", e),
    }
}

/// Berechnet Spannbaum/-wald und Komponentenzahl neu.
pub fn recompute_spanning_tree(state: &mut AppState) {
    state.algorithms.spanning_tree = minimum_spanning_tree(&state.graph);
    state.algorithms.component_count = state.graph.component_count();
}
