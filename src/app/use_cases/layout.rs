//! Use-Cases für das Force-Layout.

use crate::app::AppState;
use crate::core::LayoutEngine;

/// Führt genau einen Layout-Schritt aus, sofern das Layout aktiv ist.
pub fn step(state: &mut AppState) {
    if !state.options.layout_enabled {
        return;
    }

    let engine = LayoutEngine::new(state.options.layout_params());
    let bounds = state.options.layout_bounds(state.view.viewport_size[0]);
    let max_shift = engine.step(&mut state.graph, &bounds);
    log::trace!("Layout-Schritt, maximale Verschiebung {:.5}", max_shift);
}

/// Schaltet das Force-Layout an oder aus.
pub fn toggle(state: &mut AppState) {
    state.options.layout_enabled = !state.options.layout_enabled;
    log::info!(
        "Force-Layout {}",
        if state.options.layout_enabled {
            "aktiviert"
        } else {
            "deaktiviert"
        }
    );
}
