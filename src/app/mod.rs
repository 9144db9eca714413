//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Graph, Modus, Eingabe, Ergebnisse).
pub mod state;
pub mod use_cases;

pub use command_log::{CommandLog, LoggedCommand};
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use render_scene::build as build_render_scene;
pub use state::{
    AlgorithmState, AppState, EditorToolState, ViewState, WeightEntryState, WeightTarget,
};
