//! Fehlertypen der Graph-Kernoperationen.

use thiserror::Error;

/// Art des Elements, dessen Kapazität erschöpft ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityKind {
    /// Node-Slots
    Nodes,
    /// Kanten-Slots
    Edges,
}

impl std::fmt::Display for CapacityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CapacityKind::Nodes => write!(f, "Nodes"),
            CapacityKind::Edges => write!(f, "Kanten"),
        }
    }
}

/// Abgewiesene Operationen auf dem `GraphStore` und den Algorithmen.
///
/// Ein zurückgegebener Fehler garantiert, dass der Store unverändert ist.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Kapazität erschöpft: maximal {capacity} {kind}")]
    CapacityExceeded { kind: CapacityKind, capacity: usize },

    #[error("Ungültige Endpunkte {start}→{end} (Node-Anzahl {node_count})")]
    InvalidEndpoints {
        start: usize,
        end: usize,
        node_count: usize,
    },

    #[error("Node-Index {index} außerhalb von 0..{node_count}")]
    NodeOutOfRange { index: usize, node_count: usize },

    #[error("Kanten-Index {index} außerhalb von 0..{edge_count}")]
    EdgeOutOfRange { index: usize, edge_count: usize },
}
