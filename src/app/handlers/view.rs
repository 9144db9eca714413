//! Handler für Viewport und Force-Layout.

use crate::app::use_cases;
use crate::app::AppState;

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::viewport::resize(state, size);
}

/// Führt einen Layout-Schritt aus.
pub fn step_layout(state: &mut AppState) {
    use_cases::layout::step(state);
}

/// Schaltet das Force-Layout um.
pub fn toggle_layout(state: &mut AppState) {
    use_cases::layout::toggle(state);
}
