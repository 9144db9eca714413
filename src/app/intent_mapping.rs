//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::shared::EditorMode;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let weight_entry_active = state.weight_entry.is_active();

    match intent {
        AppIntent::ModeSelected { mode } => vec![AppCommand::SetMode { mode }],
        // Während der Gewichtseingabe gehört der Input dem Overlay
        AppIntent::CanvasClicked { .. } if weight_entry_active => Vec::new(),
        AppIntent::CanvasClicked { pos } => map_canvas_click(state, pos),
        AppIntent::CharacterTyped { ch } if weight_entry_active => {
            vec![AppCommand::WeightEntryAppend { ch }]
        }
        AppIntent::BackspacePressed if weight_entry_active => {
            vec![AppCommand::WeightEntryBackspace]
        }
        AppIntent::EnterPressed if weight_entry_active => vec![AppCommand::WeightEntryCommit],
        AppIntent::EscapePressed if weight_entry_active => vec![AppCommand::WeightEntryCancel],
        AppIntent::CharacterTyped { .. }
        | AppIntent::BackspacePressed
        | AppIntent::EnterPressed
        | AppIntent::EscapePressed => Vec::new(),
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::FrameTick => {
            let mut commands = vec![AppCommand::StepLayout];
            if state.editor.mode == EditorMode::Mst {
                commands.push(AppCommand::RecomputeSpanningTree);
            }
            commands
        }
        AppIntent::LayoutToggleRequested => vec![AppCommand::ToggleLayout],
        AppIntent::ClearGraphRequested => vec![AppCommand::ClearGraph],
    }
}

fn map_canvas_click(state: &AppState, pos: glam::Vec2) -> Vec<AppCommand> {
    let radius = state.options.node_radius;

    match state.editor.mode {
        EditorMode::AddNode => vec![AppCommand::AddNodeAt { pos, radius }],
        EditorMode::AddEdge => vec![AppCommand::SelectEdgeEndpoint { pos, radius }],
        EditorMode::ShortestPath => vec![AppCommand::SelectPathEndpoint { pos, radius }],
        EditorMode::EditWeight => vec![AppCommand::BeginWeightEdit {
            pos,
            threshold: state.options.edge_pick_threshold,
        }],
        EditorMode::DeleteNode => vec![AppCommand::DeleteNodeAt { pos, radius }],
        EditorMode::Mst => Vec::new(),
    }
}
