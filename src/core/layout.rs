//! Kontinuierliches Force-Layout (Fruchterman-Reingold) über dem GraphStore.
//!
//! Pro Animations-Tick genau ein Relaxationsschritt:
//! 1. Abstoßung zwischen allen geordneten Node-Paaren (`k² / d`)
//! 2. Anziehung entlang jeder Kante (`d² / k`)
//! 3. Zentrierung Richtung Ursprung
//! 4. Verschiebung auf `temperature` begrenzen, dämpfen, anwenden
//! 5. Auf den erlaubten Bereich (rechts vom Seitenpanel) klemmen
//!
//! Konvergenz ist nicht garantiert; ein dauerhaftes Pendeln ist zulässig.

use super::GraphStore;
use glam::Vec2;

/// Konstanten des Relaxationsschritts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Fläche der Zeichenebene (4.0 für [-1,1]²)
    pub area: f32,
    /// Untergrenze für Abstände in Nennern
    pub epsilon: f32,
    /// Maximale Verschiebung pro Schritt
    pub temperature: f32,
    /// Dämpfungsfaktor (< 1)
    pub damping: f32,
    /// Stärke der Zentrierung
    pub centering_strength: f32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            area: 4.0,
            epsilon: 0.01,
            temperature: 0.02,
            damping: 0.9,
            centering_strength: 0.05,
        }
    }
}

/// Erlaubter Bereich für Node-Positionen in NDC.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutBounds {
    /// Linke Grenze (rechter Rand des Seitenpanels)
    pub min_x: f32,
    /// Rechte Grenze
    pub max_x: f32,
    /// Untere Grenze
    pub min_y: f32,
    /// Obere Grenze
    pub max_y: f32,
}

impl Default for LayoutBounds {
    fn default() -> Self {
        Self {
            min_x: -1.0,
            max_x: 1.0,
            min_y: -1.0,
            max_y: 1.0,
        }
    }
}

impl LayoutBounds {
    /// Leitet die linke Grenze aus der Pixelbreite des Seitenpanels ab.
    ///
    /// `min_x = -1 + 2 * panel_width_px / window_width_px`; ohne bekannte
    /// Fensterbreite bleibt die volle Fläche erlaubt.
    pub fn with_side_panel(panel_width_px: f32, window_width_px: f32) -> Self {
        if window_width_px <= 0.0 {
            return Self::default();
        }
        let min_x = (-1.0 + 2.0 * panel_width_px / window_width_px).clamp(-1.0, 1.0);
        Self {
            min_x,
            ..Self::default()
        }
    }

    /// Klemmt eine Position in den Bereich.
    pub fn clamp(&self, position: Vec2) -> Vec2 {
        Vec2::new(
            position.x.clamp(self.min_x, self.max_x),
            position.y.clamp(self.min_y, self.max_y),
        )
    }
}

/// Force-Layout-Solver; zustandslos bis auf seine Parameter.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    params: LayoutParams,
}

impl LayoutEngine {
    /// Erstellt einen Solver mit den angegebenen Parametern
    pub fn new(params: LayoutParams) -> Self {
        Self { params }
    }

    /// Berechnet die Netto-Verschiebung jedes Nodes (vor Begrenzung/Dämpfung).
    pub fn compute_displacements(&self, store: &GraphStore) -> Vec<Vec2> {
        let nodes = store.nodes();
        let n = nodes.len();
        if n == 0 {
            return Vec::new();
        }

        let p = &self.params;
        let k = (p.area / n as f32).sqrt();
        let k_sq = k * k;
        let mut displacement = vec![Vec2::ZERO; n];

        for (i, a) in nodes.iter().enumerate() {
            for (j, b) in nodes.iter().enumerate() {
                if i == j {
                    continue;
                }
                let delta = a.position - b.position;
                let dist = delta.length().max(p.epsilon);
                displacement[i] += delta / dist * (k_sq / dist);
            }
        }

        for edge in store.edges() {
            let (Some(a), Some(b)) = (nodes.get(edge.src), nodes.get(edge.dest)) else {
                continue;
            };
            let delta = a.position - b.position;
            let d = delta.length();
            let pull = delta / d.max(p.epsilon) * (d * d / k);
            displacement[edge.src] -= pull;
            displacement[edge.dest] += pull;
        }

        for (disp, node) in displacement.iter_mut().zip(nodes) {
            *disp -= node.position * p.centering_strength;
        }

        displacement
    }

    /// Führt genau einen Relaxationsschritt aus.
    ///
    /// Gibt die größte angewandte Verschiebung zurück (0.0 bei leerem Graph).
    /// Nodes mit nicht-endlicher Verschiebung bleiben in diesem Schritt stehen.
    pub fn step(&self, store: &mut GraphStore, bounds: &LayoutBounds) -> f32 {
        let displacement = self.compute_displacements(store);
        let mut max_shift: f32 = 0.0;

        for (index, disp) in displacement.into_iter().enumerate() {
            let Some(current) = store.node(index).map(|node| node.position) else {
                continue;
            };
            let shift = disp.clamp_length_max(self.params.temperature) * self.params.damping;
            if !shift.is_finite() {
                log::debug!("Layout: nicht-endliche Verschiebung für Node {} verworfen", index);
                continue;
            }
            let next = bounds.clamp(current + shift);
            max_shift = max_shift.max(next.distance(current));
            store.set_node_position(index, next);
        }

        max_shift
    }
}
