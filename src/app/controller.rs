//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Modus & Editing ===
            AppCommand::SetMode { mode } => handlers::editing::set_mode(state, mode),
            AppCommand::AddNodeAt { pos, radius } => handlers::editing::add_node(state, pos, radius),
            AppCommand::SelectEdgeEndpoint { pos, radius } => {
                handlers::editing::select_edge_endpoint(state, pos, radius)
            }
            AppCommand::BeginWeightEdit { pos, threshold } => {
                handlers::editing::begin_weight_edit(state, pos, threshold)
            }
            AppCommand::DeleteNodeAt { pos, radius } => {
                handlers::editing::delete_node(state, pos, radius)
            }
            AppCommand::ClearGraph => handlers::editing::clear_graph(state),

            // === Gewichtseingabe ===
            AppCommand::WeightEntryAppend { ch } => handlers::weight_entry::append(state, ch),
            AppCommand::WeightEntryBackspace => handlers::weight_entry::backspace(state),
            AppCommand::WeightEntryCommit => handlers::weight_entry::commit(state),
            AppCommand::WeightEntryCancel => handlers::weight_entry::cancel(state),

            // === Algorithmen ===
            AppCommand::SelectPathEndpoint { pos, radius } => {
                handlers::algorithms::select_path_endpoint(state, pos, radius)
            }
            AppCommand::RecomputeSpanningTree => {
                handlers::algorithms::recompute_spanning_tree(state)
            }

            // === Viewport & Layout ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::StepLayout => handlers::view::step_layout(state),
            AppCommand::ToggleLayout => handlers::view::toggle_layout(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
