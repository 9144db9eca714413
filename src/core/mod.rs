//! Core-Domänentypen: Nodes, Kanten, GraphStore, Layout und Graph-Algorithmen.

pub mod disjoint_set;
pub mod edge;
pub mod error;
pub mod geometry;
/// Graph-Datenhaltung
///
/// - GraphStore: Container für alle Nodes und Kanten
/// - GraphNode: Knoten mit Position und Label
/// - Edge: gewichtete Kante zwischen zwei Node-Indizes
pub mod graph_store;
pub mod layout;
pub mod node;
pub mod pathfinding;
pub mod spanning_tree;

pub use disjoint_set::DisjointSet;
pub use edge::Edge;
pub use error::{CapacityKind, GraphError};
pub use graph_store::GraphStore;
pub use layout::{LayoutBounds, LayoutEngine, LayoutParams};
pub use node::{label_for_index, GraphNode};
pub use pathfinding::{shortest_path, PathResult};
pub use spanning_tree::{minimum_spanning_tree, SpanningTree};
