//! UI-Grenze: rohe Zeiger- und Tasten-Events → AppIntents.
//!
//! Fenster- und Rendering-Technik bleiben außen vor; der Host liefert
//! Pixelkoordinaten, Fenstergröße und Tastenzeichen.

pub mod input;
mod keyboard;
/// Menü-Geometrie der linken Modus-Leiste
pub mod menu;
pub mod status;

pub use input::{ndc_to_pixel, pixel_to_ndc, InputState, PointerButton, PointerEvent};
pub use keyboard::key_intents;
pub use menu::MenuLayout;
pub use status::status_line;
