//! Kürzester Weg (Dijkstra) über die ungerichtete Sicht des GraphStore.
//!
//! Ohne Priority-Queue: pro äußerer Iteration wird der unbesuchte
//! Node mit minimaler Distanz linear gesucht (O(V² + E)). Gleichstände
//! gewinnt der kleinere Index.

use super::{GraphError, GraphStore};

/// Ergebnis einer Kürzeste-Wege-Abfrage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathResult {
    /// Node-Indizes von Start bis Ziel; leer = unerreichbar
    pub nodes: Vec<usize>,
    /// Indizes der durchlaufenen Kanten (eine weniger als `nodes`)
    pub edges: Vec<usize>,
    /// Summe der Kantengewichte entlang des Pfads
    pub total_weight: f32,
}

impl PathResult {
    /// Leeres Ergebnis für ein unerreichbares Ziel.
    pub fn unreachable() -> Self {
        Self::default()
    }

    /// Gibt `true` zurück, wenn kein Pfad existiert.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Berechnet den kürzesten Weg von `start` nach `end`.
///
/// Jede Kante ist in beiden Richtungen begehbar. Gewichte werden als strikt
/// positiv angenommen. Ein unerreichbares Ziel liefert `Ok` mit leerem Pfad.
pub fn shortest_path(
    store: &GraphStore,
    start: usize,
    end: usize,
) -> Result<PathResult, GraphError> {
    let node_count = store.node_count();
    if start >= node_count || end >= node_count {
        return Err(GraphError::InvalidEndpoints {
            start,
            end,
            node_count,
        });
    }

    // Adjazenz einmalig aufbauen: (nachbar, kanten_index)
    let mut adjacency: Vec<Vec<(usize, usize)>> = vec![Vec::new(); node_count];
    for (edge_index, edge) in store.edges().iter().enumerate() {
        adjacency[edge.src].push((edge.dest, edge_index));
        if edge.src != edge.dest {
            adjacency[edge.dest].push((edge.src, edge_index));
        }
    }

    let mut dist = vec![f32::INFINITY; node_count];
    let mut visited = vec![false; node_count];
    let mut predecessor: Vec<Option<(usize, usize)>> = vec![None; node_count];
    dist[start] = 0.0;

    for _ in 0..node_count {
        let mut current = None;
        let mut best = f32::INFINITY;
        for (index, &d) in dist.iter().enumerate() {
            if !visited[index] && d < best {
                best = d;
                current = Some(index);
            }
        }
        // Rest ist unerreichbar
        let Some(u) = current else {
            break;
        };
        visited[u] = true;

        for &(v, edge_index) in &adjacency[u] {
            let candidate = dist[u] + store.edges()[edge_index].weight;
            if candidate < dist[v] {
                dist[v] = candidate;
                predecessor[v] = Some((u, edge_index));
            }
        }
    }

    if !dist[end].is_finite() {
        return Ok(PathResult::unreachable());
    }

    let mut nodes = vec![end];
    let mut edges = Vec::new();
    let mut current = end;
    while current != start {
        let Some((prev, edge_index)) = predecessor[current] else {
            // Kann bei endlicher Distanz nicht auftreten
            return Ok(PathResult::unreachable());
        };
        edges.push(edge_index);
        nodes.push(prev);
        current = prev;
    }
    nodes.reverse();
    edges.reverse();

    Ok(PathResult {
        nodes,
        edges,
        total_weight: dist[end],
    })
}
