//! Graph-Algorithmen-Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, EditorToolState, ViewState};
pub use core::{
    minimum_spanning_tree, shortest_path, Edge, GraphError, GraphNode, GraphStore, LayoutBounds,
    LayoutEngine, LayoutParams, PathResult, SpanningTree,
};
pub use shared::{EditorMode, EditorOptions, RenderScene};
