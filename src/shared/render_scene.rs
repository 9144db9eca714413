//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und der Renderer sie konsumiert.

use super::EditorMode;
use crate::core::{Edge, GraphNode, PathResult, SpanningTree};

/// Offene Gewichtseingabe, wie sie im Prompt erscheint.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightPrompt {
    /// Erster Endpunkt der betroffenen Kante
    pub src: usize,
    /// Zweiter Endpunkt der betroffenen Kante
    pub dest: usize,
    /// Label von `src`
    pub src_label: char,
    /// Label von `dest`
    pub dest_label: char,
    /// Bisher getippter Text
    pub buffer: String,
    /// `true` = bestehende Kante wird bearbeitet, `false` = neue Kante
    pub editing_existing: bool,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Alle Nodes (Position, Label)
    pub nodes: Vec<GraphNode>,
    /// Alle Kanten (Endpunkte, Gewicht)
    pub edges: Vec<Edge>,
    /// Aktiver Modus (Menü-Hervorhebung)
    pub mode: EditorMode,
    /// Bedienhinweis zum aktiven Modus
    pub instructions: &'static str,
    /// Erster gewählter Node einer Zwei-Klick-Auswahl
    pub pending_selection: Option<usize>,
    /// Kürzester Weg (nur im ShortestPath-Modus, evtl. leer)
    pub shortest_path: Option<PathResult>,
    /// Spannbaum/-wald (nur im MST-Modus)
    pub spanning_tree: Option<SpanningTree>,
    /// Anzahl der Zusammenhangskomponenten (nur im MST-Modus sinnvoll)
    pub component_count: usize,
    /// Gewichtseingabe, falls aktiv
    pub weight_prompt: Option<WeightPrompt>,
    /// Linke Grenze der Zeichenfläche in NDC (rechter Rand des Menüs)
    pub boundary_x: f32,
    /// Node-Radius in NDC
    pub node_radius: f32,
}

impl RenderScene {
    /// Prüft, ob die Kante hervorgehoben werden soll (Pfad oder Spannbaum).
    pub fn is_edge_highlighted(&self, edge_index: usize) -> bool {
        let on_path = self
            .shortest_path
            .as_ref()
            .is_some_and(|path| path.edges.contains(&edge_index));
        let in_tree = self
            .spanning_tree
            .as_ref()
            .is_some_and(|tree| tree.contains(edge_index));
        on_path || in_tree
    }

    /// Prüft, ob der Node Teil des angezeigten kürzesten Wegs ist.
    pub fn is_node_on_path(&self, node_index: usize) -> bool {
        self.shortest_path
            .as_ref()
            .is_some_and(|path| path.nodes.contains(&node_index))
    }
}
