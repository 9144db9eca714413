//! Editor-Modi (shared zwischen App, Menü-Layout und Renderer).

/// Aktiver Editor-Modus; bestimmt die Bedeutung eines Canvas-Klicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Klick auf freie Fläche legt einen Node an
    #[default]
    AddNode,
    /// Zwei Nodes nacheinander wählen, dann Gewicht eingeben
    AddEdge,
    /// Zwei Nodes nacheinander wählen, Dijkstra läuft sofort
    ShortestPath,
    /// Klick auf eine Kante öffnet die Gewichtseingabe
    EditWeight,
    /// Klick auf einen Node löscht ihn
    DeleteNode,
    /// Dauerhafte Anzeige des minimalen Spannbaums
    Mst,
}

impl EditorMode {
    /// Alle Modi in Menü-Reihenfolge.
    pub const ALL: [EditorMode; 6] = [
        EditorMode::AddNode,
        EditorMode::AddEdge,
        EditorMode::ShortestPath,
        EditorMode::EditWeight,
        EditorMode::DeleteNode,
        EditorMode::Mst,
    ];

    /// Position im Menü (0-basiert).
    pub fn menu_index(self) -> usize {
        Self::ALL.iter().position(|m| *m == self).unwrap_or(0)
    }

    /// Beschriftung des Menüeintrags.
    pub fn label(self) -> &'static str {
        match self {
            EditorMode::AddNode => "Add Node",
            EditorMode::AddEdge => "Add Edge",
            EditorMode::ShortestPath => "Shortest Path",
            EditorMode::EditWeight => "Edit Weight",
            EditorMode::DeleteNode => "Delete Node",
            EditorMode::Mst => "MST",
        }
    }

    /// Kurze Bedienhinweise für die Statuszeile.
    pub fn instructions(self) -> &'static str {
        match self {
            EditorMode::AddNode => "Click on empty canvas to place a node",
            EditorMode::AddEdge => "Click two nodes, then type a weight and press Enter",
            EditorMode::ShortestPath => "Click a start node and an end node",
            EditorMode::EditWeight => "Click an edge, type a new weight and press Enter",
            EditorMode::DeleteNode => "Click a node to delete it with its edges",
            EditorMode::Mst => "Minimum spanning tree of the current graph",
        }
    }
}
