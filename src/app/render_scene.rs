//! Builder für Render-Szenen aus dem AppState.

use crate::app::state::WeightTarget;
use crate::app::AppState;
use crate::shared::{EditorMode, RenderScene, WeightPrompt};

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Pfad und Spannbaum werden nur im jeweils zugehörigen Modus mitgegeben.
pub fn build(state: &AppState) -> RenderScene {
    let mode = state.editor.mode;

    let shortest_path = match mode {
        EditorMode::ShortestPath => state.algorithms.shortest_path.clone(),
        _ => None,
    };
    let (spanning_tree, component_count) = match mode {
        EditorMode::Mst => (
            Some(state.algorithms.spanning_tree.clone()),
            state.algorithms.component_count,
        ),
        _ => (None, 0),
    };

    RenderScene {
        nodes: state.graph.nodes().to_vec(),
        edges: state.graph.edges().to_vec(),
        mode,
        instructions: mode.instructions(),
        pending_selection: state.editor.pending_selection(),
        shortest_path,
        spanning_tree,
        component_count,
        weight_prompt: build_weight_prompt(state),
        boundary_x: state.options.layout_bounds(state.view.viewport_size[0]).min_x,
        node_radius: state.options.node_radius,
    }
}

fn build_weight_prompt(state: &AppState) -> Option<WeightPrompt> {
    let (src, dest, editing_existing) = match state.weight_entry.target? {
        WeightTarget::NewEdge { src, dest } => (src, dest, false),
        WeightTarget::ExistingEdge { edge_index } => {
            let edge = state.graph.edge(edge_index)?;
            (edge.src, edge.dest, true)
        }
    };

    Some(WeightPrompt {
        src,
        dest,
        src_label: state.graph.node(src)?.label,
        dest_label: state.graph.node(dest)?.label,
        buffer: state.weight_entry.buffer.clone(),
        editing_existing,
    })
}
