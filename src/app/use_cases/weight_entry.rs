//! Use-Case-Funktionen für das Gewichtseingabe-Overlay.

use crate::app::state::WeightTarget;
use crate::app::AppState;

/// Hängt ein Zeichen an den Puffer an (nur Ziffern und ein Punkt).
pub fn append(state: &mut AppState, ch: char) {
    if !state.weight_entry.push_char(ch) {
        log::debug!("Zeichen {:?} in Gewichtseingabe ignoriert", ch);
    }
}

/// Entfernt das letzte Zeichen des Puffers.
pub fn backspace(state: &mut AppState) {
    state.weight_entry.backspace();
}

/// Übernimmt die Eingabe, sofern sie ein strikt positives Gewicht ergibt.
///
/// Nicht-positive oder unparsebare Eingaben werden verworfen; die Eingabe
/// wird in jedem Fall geschlossen.
pub fn commit(state: &mut AppState) {
    let Some((target, weight)) = state.weight_entry.close() else {
        return;
    };

    if !(weight.is_finite() && weight > 0.0) {
        log::warn!("Gewicht {} verworfen (nicht positiv)", weight);
        return;
    }

    let result = match target {
        WeightTarget::NewEdge { src, dest } => {
            state.graph.add_edge(src, dest, weight).map(|index| {
                log::info!(
                    "Kante {} ({}–{}) mit Gewicht {} angelegt",
                    index,
                    src,
                    dest,
                    weight
                )
            })
        }
        WeightTarget::ExistingEdge { edge_index } => state
            .graph
            .set_edge_weight(edge_index, weight)
            .map(|old| log::info!("Kante {}: Gewicht {} → {}", edge_index, old, weight)),
    };

    match result {
        Ok(()) => state.algorithms.shortest_path = None,
        Err(e) => log::warn!("Gewicht nicht übernommen: {}", e),
    }
}

/// Verwirft die offene Eingabe ohne Änderung am Graph.
pub fn cancel(state: &mut AppState) {
    if state.weight_entry.close().is_some() {
        log::debug!("Gewichtseingabe abgebrochen");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn state_with_pending_edge() -> AppState {
        let mut state = AppState::new();
        state.graph.add_node(Vec2::new(-0.5, 0.0)).unwrap();
        state.graph.add_node(Vec2::new(0.5, 0.0)).unwrap();
        state.weight_entry.open_for_new_edge(0, 1);
        state
    }

    #[test]
    fn invalid_buffers_close_without_mutation() {
        for text in ["-1", "abc", "", "0", "0.0", "."] {
            let mut state = state_with_pending_edge();
            state.weight_entry.buffer = text.to_string();

            commit(&mut state);

            assert_eq!(state.edge_count(), 0, "Puffer {text:?}");
            assert!(!state.weight_entry.is_active());
            assert!(state.weight_entry.buffer.is_empty());
        }
    }

    #[test]
    fn typed_weight_commits_exactly() {
        let mut state = state_with_pending_edge();
        for ch in "2.5".chars() {
            append(&mut state, ch);
        }

        commit(&mut state);

        assert_eq!(state.edge_count(), 1);
        let edge = state.graph.edge(0).unwrap();
        assert_eq!((edge.src, edge.dest), (0, 1));
        assert_eq!(edge.weight, 2.5);
    }

    #[test]
    fn existing_edge_weight_is_overwritten() {
        let mut state = state_with_pending_edge();
        state.weight_entry.close();
        state.graph.add_edge(0, 1, 3.0).unwrap();
        state.weight_entry.open_for_existing_edge(0, 3.0);

        backspace(&mut state);
        append(&mut state, '7');
        commit(&mut state);

        assert_eq!(state.edge_count(), 1);
        assert_eq!(state.graph.edge(0).unwrap().weight, 7.0);
    }

    #[test]
    fn cancel_discards_buffer() {
        let mut state = state_with_pending_edge();
        append(&mut state, '4');

        cancel(&mut state);
        commit(&mut state);

        assert_eq!(state.edge_count(), 0);
        assert!(!state.weight_entry.is_active());
    }
}
