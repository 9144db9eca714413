//! Use-Case: Neuen Node an einer Canvas-Position hinzufügen.

use crate::app::AppState;

/// Fügt einen Node hinzu, sofern im Radius kein anderer Node liegt.
///
/// Kapazitätsüberschreitungen werden geloggt und verworfen.
pub fn add_node_at_position(state: &mut AppState, pos: glam::Vec2, radius: f32) {
    if let Some(existing) = state.graph.find_node_near(pos, radius) {
        log::debug!("Klick auf bestehenden Node {}, kein neuer Node", existing);
        return;
    }

    match state.graph.add_node(pos) {
        Ok(index) => log::info!(
            "Node {} an Position ({:.2}, {:.2}) hinzugefügt",
            index,
            pos.x,
            pos.y
        ),
        Err(e) => log::warn!("Node nicht hinzugefügt: {}", e),
    }
}
