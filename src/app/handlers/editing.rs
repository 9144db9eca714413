//! Handler für Modus, Node/Kanten-Editing und Graph-Reset.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::EditorMode;

/// Aktiviert einen Editor-Modus.
pub fn set_mode(state: &mut AppState, mode: EditorMode) {
    use_cases::mode::set_mode(state, mode);
}

/// Fügt einen Node an der Klickposition hinzu.
pub fn add_node(state: &mut AppState, pos: glam::Vec2, radius: f32) {
    use_cases::editing::add_node_at_position(state, pos, radius);
}

/// Verarbeitet einen Klick der Zwei-Klick-Kantenauswahl.
pub fn select_edge_endpoint(state: &mut AppState, pos: glam::Vec2, radius: f32) {
    use_cases::editing::select_edge_endpoint(state, pos, radius);
}

/// Öffnet die Gewichtseingabe für eine Kante nahe der Klickposition.
pub fn begin_weight_edit(state: &mut AppState, pos: glam::Vec2, threshold: f32) {
    use_cases::editing::begin_weight_edit(state, pos, threshold);
}

/// Löscht den Node unter der Klickposition.
pub fn delete_node(state: &mut AppState, pos: glam::Vec2, radius: f32) {
    use_cases::editing::delete_node_at_position(state, pos, radius);
}

/// Leert den Graph.
pub fn clear_graph(state: &mut AppState) {
    use_cases::editing::clear_graph(state);
}
