//! Minimaler Spannbaum (Kruskal) mit Union-Find.
//!
//! Bei unzusammenhängendem Graph entsteht ein Spannwald mit weniger als
//! `node_count - 1` Kanten; das ist kein Fehler.

use super::{DisjointSet, GraphStore};

/// Ergebnis eines Kruskal-Laufs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpanningTree {
    /// Akzeptierte Kanten-Indizes in Akzeptanz-Reihenfolge
    pub edges: Vec<usize>,
    /// Summe der Gewichte aller akzeptierten Kanten
    pub total_weight: f32,
}

impl SpanningTree {
    /// Prüft, ob die Kante Teil des Baums ist.
    pub fn contains(&self, edge_index: usize) -> bool {
        self.edges.contains(&edge_index)
    }

    /// Gibt die Anzahl der akzeptierten Kanten zurück
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Gibt `true` zurück, wenn keine Kante akzeptiert wurde.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Berechnet den minimalen Spannbaum bzw. -wald.
///
/// Kanten werden stabil nach Gewicht sortiert; gleiche Gewichte behalten
/// ihre Einfüge-Reihenfolge.
pub fn minimum_spanning_tree(store: &GraphStore) -> SpanningTree {
    let edges = store.edges();
    let mut order: Vec<usize> = (0..edges.len()).collect();
    order.sort_by(|&a, &b| edges[a].weight.total_cmp(&edges[b].weight));

    let target = store.node_count().saturating_sub(1);
    let mut sets = DisjointSet::new(store.node_count());
    let mut tree = SpanningTree::default();

    for edge_index in order {
        if tree.edges.len() == target {
            break;
        }
        let edge = &edges[edge_index];
        if sets.union(edge.src, edge.dest) {
            tree.edges.push(edge_index);
            tree.total_weight += edge.weight;
        }
    }

    tree
}
