//! Der zentrale GraphStore mit Nodes, Kanten und Hit-Test-Abfragen.

use super::geometry::point_segment_distance;
use super::{CapacityKind, Edge, GraphError, GraphNode};
use glam::Vec2;

/// Container für alle Nodes und Kanten einer Sitzung.
///
/// Nodes liegen dicht in `0..node_count`; der Vec-Index ist zugleich der
/// Node-Index. Löschen verschiebt alle höheren Indizes um eins nach unten.
#[derive(Debug, Clone)]
pub struct GraphStore {
    nodes: Vec<GraphNode>,
    edges: Vec<Edge>,
    max_nodes: usize,
    max_edges: usize,
}

impl GraphStore {
    /// Erstellt einen leeren Store mit festen Kapazitäten.
    ///
    /// Die Kapazitäten sind reine Obergrenzen; es wird nichts vorab reserviert.
    pub fn new(max_nodes: usize, max_edges: usize) -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            max_nodes,
            max_edges,
        }
    }

    /// Alle Nodes in Index-Reihenfolge (read-only).
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// Alle Kanten in Einfüge-Reihenfolge (read-only).
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Node per Index
    pub fn node(&self, index: usize) -> Option<&GraphNode> {
        self.nodes.get(index)
    }

    /// Kante per Index
    pub fn edge(&self, index: usize) -> Option<&Edge> {
        self.edges.get(index)
    }

    /// Gibt die Anzahl der Nodes zurück
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Gibt die Anzahl der Kanten zurück
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Maximale Node-Anzahl
    pub fn max_nodes(&self) -> usize {
        self.max_nodes
    }

    /// Maximale Kanten-Anzahl
    pub fn max_edges(&self) -> usize {
        self.max_edges
    }

    /// Fügt einen Node an `position` hinzu und gibt seinen Index zurück.
    ///
    /// Überlappungen werden hier nicht geprüft; das erledigt der Aufrufer
    /// über `find_node_near`.
    pub fn add_node(&mut self, position: Vec2) -> Result<usize, GraphError> {
        if self.nodes.len() >= self.max_nodes {
            return Err(GraphError::CapacityExceeded {
                kind: CapacityKind::Nodes,
                capacity: self.max_nodes,
            });
        }
        let index = self.nodes.len();
        self.nodes.push(GraphNode::new(index, position));
        Ok(index)
    }

    /// Fügt eine Kante hinzu und gibt ihren Index zurück.
    ///
    /// Self-Loops und parallele Kanten sind erlaubt. Abgewiesen werden nur
    /// erschöpfte Kapazität und Endpunkte außerhalb von `0..node_count`.
    pub fn add_edge(&mut self, src: usize, dest: usize, weight: f32) -> Result<usize, GraphError> {
        if self.edges.len() >= self.max_edges {
            return Err(GraphError::CapacityExceeded {
                kind: CapacityKind::Edges,
                capacity: self.max_edges,
            });
        }
        for endpoint in [src, dest] {
            self.check_node(endpoint)?;
        }
        let index = self.edges.len();
        self.edges.push(Edge::new(src, dest, weight));
        Ok(index)
    }

    /// Entfernt einen Node inklusive aller inzidenten Kanten.
    ///
    /// Alle höheren Node-Indizes (in Nodes und Kanten) rücken um eins nach
    /// unten, Labels werden neu abgeleitet. Gibt den entfernten Node zurück.
    pub fn delete_node(&mut self, index: usize) -> Result<GraphNode, GraphError> {
        self.check_node(index)?;

        self.edges.retain(|edge| !edge.touches(index));
        for edge in &mut self.edges {
            if edge.src > index {
                edge.src -= 1;
            }
            if edge.dest > index {
                edge.dest -= 1;
            }
        }

        let removed = self.nodes.remove(index);
        for (new_index, node) in self.nodes.iter_mut().enumerate().skip(index) {
            node.renumber(new_index);
        }
        Ok(removed)
    }

    /// Überschreibt das Gewicht einer Kante und gibt das alte Gewicht zurück.
    pub fn set_edge_weight(&mut self, index: usize, weight: f32) -> Result<f32, GraphError> {
        let edge_count = self.edges.len();
        let edge = self
            .edges
            .get_mut(index)
            .ok_or(GraphError::EdgeOutOfRange { index, edge_count })?;
        Ok(std::mem::replace(&mut edge.weight, weight))
    }

    /// Setzt die Position eines Nodes (Layout). Gibt `false` bei ungültigem Index.
    pub fn set_node_position(&mut self, index: usize, position: Vec2) -> bool {
        let Some(node) = self.nodes.get_mut(index) else {
            return false;
        };
        node.position = position;
        true
    }

    /// Entfernt alle Nodes und Kanten; Kapazitäten bleiben.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }

    /// Erster Node (nach Index) mit Abstand `< radius` zu `point`.
    pub fn find_node_near(&self, point: Vec2, radius: f32) -> Option<usize> {
        self.nodes
            .iter()
            .position(|node| node.position.distance(point) < radius)
    }

    /// Erste Kante (nach Index), deren Segment näher als `threshold` an `point` liegt.
    ///
    /// "First match", nicht "nearest": bei zwei Kandidaten gewinnt die
    /// ältere Kante, auch wenn die jüngere näher liegt.
    pub fn find_edge_near(&self, point: Vec2, threshold: f32) -> Option<usize> {
        self.edges.iter().position(|edge| {
            match (self.nodes.get(edge.src), self.nodes.get(edge.dest)) {
                (Some(a), Some(b)) => {
                    point_segment_distance(point, a.position, b.position) < threshold
                }
                _ => false,
            }
        })
    }

    /// Nachbarn eines Nodes als `(nachbar_index, kanten_index)` (beide Richtungen).
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter_map(move |(edge_index, edge)| edge.other(index).map(|n| (n, edge_index)))
    }

    /// Alle von `start` erreichbaren Nodes (inkl. `start`), aufsteigend sortiert.
    ///
    /// Iterative Tiefensuche. Leer bei ungültigem Start-Index.
    pub fn connected_component(&self, start: usize) -> Vec<usize> {
        if start >= self.nodes.len() {
            return Vec::new();
        }
        let mut visited = vec![false; self.nodes.len()];
        let mut component = Vec::new();
        let mut stack = vec![start];
        visited[start] = true;
        while let Some(current) = stack.pop() {
            component.push(current);
            for (next, _) in self.neighbors(current) {
                if !visited[next] {
                    visited[next] = true;
                    stack.push(next);
                }
            }
        }
        component.sort_unstable();
        component
    }

    /// Anzahl der Zusammenhangskomponenten (isolierte Nodes zählen einzeln).
    ///
    /// Jeder noch nicht erfasste Node startet eine neue `connected_component`.
    pub fn component_count(&self) -> usize {
        let mut covered = vec![false; self.nodes.len()];
        let mut count = 0;
        for start in 0..self.nodes.len() {
            if covered[start] {
                continue;
            }
            for index in self.connected_component(start) {
                covered[index] = true;
            }
            count += 1;
        }
        count
    }

    fn check_node(&self, index: usize) -> Result<(), GraphError> {
        if index < self.nodes.len() {
            Ok(())
        } else {
            Err(GraphError::NodeOutOfRange {
                index,
                node_count: self.nodes.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests;
