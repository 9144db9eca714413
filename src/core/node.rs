//! Ein Knoten des Graphen mit Position und abgeleitetem Label.

use glam::Vec2;

/// Leitet das Label aus dem Index ab (`'A' + index`).
///
/// Ab Index 26 entstehen Nicht-Buchstaben (`'['`, `'\\'`, …).
pub fn label_for_index(index: usize) -> char {
    u32::try_from(index)
        .ok()
        .and_then(|offset| ('A' as u32).checked_add(offset))
        .and_then(char::from_u32)
        .unwrap_or('?')
}

/// Knoten im NDC-Raum [-1,1]×[-1,1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphNode {
    /// Position in normalisierten Gerätekoordinaten
    pub position: Vec2,
    /// Einzelzeichen-Label, immer `label_for_index(index)`
    pub label: char,
    /// Stabiler Index im dichten Bereich `0..node_count`
    pub index: usize,
}

impl GraphNode {
    /// Erstellt einen Node; das Label wird aus dem Index abgeleitet.
    pub fn new(index: usize, position: Vec2) -> Self {
        Self {
            position,
            label: label_for_index(index),
            index,
        }
    }

    /// Setzt einen neuen Index und leitet das Label neu ab.
    pub(crate) fn renumber(&mut self, index: usize) {
        self.index = index;
        self.label = label_for_index(index);
    }
}
