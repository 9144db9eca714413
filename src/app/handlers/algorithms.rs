//! Handler für kürzesten Weg und Spannbaum.

use crate::app::use_cases;
use crate::app::AppState;

/// Verarbeitet einen Klick der Zwei-Klick-Pfadauswahl.
pub fn select_path_endpoint(state: &mut AppState, pos: glam::Vec2, radius: f32) {
    use_cases::algorithms::select_path_endpoint(state, pos, radius);
}

/// Berechnet den Spannbaum neu.
pub fn recompute_spanning_tree(state: &mut AppState) {
    use_cases::algorithms::recompute_spanning_tree(state);
}
