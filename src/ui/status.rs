//! Statuszeile als Text aus der Render-Szene.

use crate::shared::{EditorMode, RenderScene};

/// Baut die Statuszeile für den aktuellen Frame.
///
/// Enthält Modus, Graphgröße und je nach Modus Pfad oder Spannbaum.
pub fn status_line(scene: &RenderScene) -> String {
    let mut line = format!(
        "{} | Nodes: {} | Edges: {}",
        scene.mode.label(),
        scene.nodes.len(),
        scene.edges.len()
    );

    if let Some(prompt) = &scene.weight_prompt {
        line.push_str(&format!(
            " | Weight {}–{}: {}_",
            prompt.src_label, prompt.dest_label, prompt.buffer
        ));
        return line;
    }

    match scene.mode {
        EditorMode::ShortestPath => match &scene.shortest_path {
            Some(path) if !path.is_empty() => {
                let labels: String = path
                    .nodes
                    .iter()
                    .filter_map(|&i| scene.nodes.get(i).map(|n| n.label))
                    .collect();
                line.push_str(&format!(" | Path: {} ({})", labels, path.total_weight));
            }
            Some(_) => line.push_str(" | Path: unreachable"),
            None => {}
        },
        EditorMode::Mst => {
            if let Some(tree) = &scene.spanning_tree {
                line.push_str(&format!(
                    " | MST weight: {} ({} edges, {} components)",
                    tree.total_weight,
                    tree.len(),
                    scene.component_count
                ));
            }
        }
        _ => {}
    }

    line
}
