//! Linke Modus-Leiste: ein Eintrag pro Editor-Modus, von oben nach unten.

use crate::shared::{EditorMode, EditorOptions};

/// Pixel-Geometrie der Modus-Leiste.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuLayout {
    /// Breite der Leiste in Pixel
    pub width_px: f32,
    /// Höhe eines Eintrags in Pixel
    pub item_height_px: f32,
}

impl MenuLayout {
    /// Übernimmt die Geometrie aus den Optionen.
    pub fn from_options(options: &EditorOptions) -> Self {
        Self {
            width_px: options.menu_width_px,
            item_height_px: options.menu_item_height_px,
        }
    }

    /// Prüft, ob ein Pixel innerhalb der Leiste liegt.
    pub fn contains(&self, pixel: glam::Vec2) -> bool {
        pixel.x >= 0.0 && pixel.x < self.width_px
    }

    /// Liefert den Modus des getroffenen Eintrags.
    ///
    /// `None` außerhalb der Leiste oder unterhalb des letzten Eintrags.
    pub fn hit_test(&self, pixel: glam::Vec2) -> Option<EditorMode> {
        if !self.contains(pixel) || pixel.y < 0.0 || self.item_height_px <= 0.0 {
            return None;
        }
        let index = (pixel.y / self.item_height_px).floor() as usize;
        EditorMode::ALL.get(index).copied()
    }

    /// Rechteck eines Eintrags als `[min_x, min_y, max_x, max_y]` in Pixel.
    pub fn entry_rect(&self, mode: EditorMode) -> [f32; 4] {
        let top = mode.menu_index() as f32 * self.item_height_px;
        [0.0, top, self.width_px, top + self.item_height_px]
    }
}
