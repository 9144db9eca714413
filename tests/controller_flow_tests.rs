use glam::Vec2;
use graph_algo_editor::{AppCommand, AppController, AppIntent, AppState, EditorMode};

const DIAMOND: [(f32, f32); 4] = [(-0.3, 0.0), (0.2, 0.5), (0.2, -0.5), (0.7, 0.0)];

fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

fn click(controller: &mut AppController, state: &mut AppState, pos: Vec2) {
    send(controller, state, AppIntent::CanvasClicked { pos });
}

fn select(controller: &mut AppController, state: &mut AppState, mode: EditorMode) {
    send(controller, state, AppIntent::ModeSelected { mode });
}

fn type_text(controller: &mut AppController, state: &mut AppState, text: &str) {
    for ch in text.chars() {
        send(controller, state, AppIntent::CharacterTyped { ch });
    }
}

fn node_pos(state: &AppState, index: usize) -> Vec2 {
    state.graph.node(index).expect("Node sollte existieren").position
}

fn connect(controller: &mut AppController, state: &mut AppState, a: usize, b: usize, weight: &str) {
    let (pa, pb) = (node_pos(state, a), node_pos(state, b));
    click(controller, state, pa);
    click(controller, state, pb);
    type_text(controller, state, weight);
    send(controller, state, AppIntent::EnterPressed);
}

/// Baut den Diamant-Graph A-B(1), B-C(2), A-C(4), C-D(1) über Intents auf.
fn diamond(controller: &mut AppController) -> AppState {
    let mut state = AppState::new();
    for (x, y) in DIAMOND {
        click(controller, &mut state, Vec2::new(x, y));
    }
    select(controller, &mut state, EditorMode::AddEdge);
    connect(controller, &mut state, 0, 1, "1");
    connect(controller, &mut state, 1, 2, "2");
    connect(controller, &mut state, 0, 2, "4");
    connect(controller, &mut state, 2, 3, "1");
    state
}

#[test]
fn test_diamond_is_built_through_intents() {
    let mut controller = AppController::new();
    let state = diamond(&mut controller);

    assert_eq!(state.node_count(), 4);
    let edges: Vec<(usize, usize, f32)> = state
        .graph
        .edges()
        .iter()
        .map(|e| (e.src, e.dest, e.weight))
        .collect();
    assert_eq!(
        edges,
        vec![(0, 1, 1.0), (1, 2, 2.0), (0, 2, 4.0), (2, 3, 1.0)]
    );
}

#[test]
fn test_shortest_path_prefers_three_hops() {
    let mut controller = AppController::new();
    let mut state = diamond(&mut controller);

    select(&mut controller, &mut state, EditorMode::ShortestPath);
    let (a, d) = (node_pos(&state, 0), node_pos(&state, 3));
    click(&mut controller, &mut state, a);
    click(&mut controller, &mut state, d);

    let scene = controller.build_render_scene(&state);
    let path = scene.shortest_path.as_ref().expect("Pfad sollte angezeigt werden");
    assert_eq!(path.nodes, vec![0, 1, 2, 3]);
    assert_eq!(path.total_weight, 4.0);
    assert!(scene.is_node_on_path(1));
}

#[test]
fn test_mst_mode_shows_tree_every_tick() {
    let mut controller = AppController::new();
    let mut state = diamond(&mut controller);

    select(&mut controller, &mut state, EditorMode::Mst);
    let scene = controller.build_render_scene(&state);
    let tree = scene.spanning_tree.expect("Spannbaum sollte angezeigt werden");
    assert_eq!(tree.edges, vec![0, 3, 1]);
    assert_eq!(tree.total_weight, 4.0);
    assert_eq!(scene.component_count, 1);

    // Klicks im MST-Modus verändern nichts
    click(&mut controller, &mut state, Vec2::new(-0.8, -0.8));
    assert_eq!(state.node_count(), 4);

    // Neue Kante wird beim nächsten Tick berücksichtigt
    state.graph.add_edge(0, 3, 0.5).expect("Kapazität reicht");
    send(&mut controller, &mut state, AppIntent::FrameTick);
    assert_eq!(state.algorithms.spanning_tree.edges, vec![4, 0, 3]);
    assert_eq!(state.algorithms.spanning_tree.total_weight, 2.5);
}

#[test]
fn test_clicks_are_ignored_while_weight_entry_is_open() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, Vec2::new(-0.5, 0.0));
    click(&mut controller, &mut state, Vec2::new(0.5, 0.0));
    select(&mut controller, &mut state, EditorMode::AddEdge);
    click(&mut controller, &mut state, Vec2::new(-0.5, 0.0));
    click(&mut controller, &mut state, Vec2::new(0.5, 0.0));
    assert!(state.weight_entry.is_active());

    click(&mut controller, &mut state, Vec2::new(-0.5, 0.0));

    assert!(state.weight_entry.is_active());
    assert_eq!(state.editor.selected_node, None);
}

#[test]
fn test_mode_change_discards_weight_entry() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, Vec2::new(-0.5, 0.0));
    click(&mut controller, &mut state, Vec2::new(0.5, 0.0));
    select(&mut controller, &mut state, EditorMode::AddEdge);
    click(&mut controller, &mut state, Vec2::new(-0.5, 0.0));
    click(&mut controller, &mut state, Vec2::new(0.5, 0.0));
    type_text(&mut controller, &mut state, "3");

    select(&mut controller, &mut state, EditorMode::AddNode);
    send(&mut controller, &mut state, AppIntent::EnterPressed);

    assert!(!state.weight_entry.is_active());
    assert_eq!(state.edge_count(), 0);
}

#[test]
fn test_escape_cancels_weight_entry() {
    let mut controller = AppController::new();
    let mut state = diamond(&mut controller);
    select(&mut controller, &mut state, EditorMode::EditWeight);
    let mid = (node_pos(&state, 2) + node_pos(&state, 3)) * 0.5;
    click(&mut controller, &mut state, mid);
    type_text(&mut controller, &mut state, "9");

    send(&mut controller, &mut state, AppIntent::EscapePressed);

    assert!(!state.weight_entry.is_active());
    assert_eq!(state.graph.edge(3).map(|e| e.weight), Some(1.0));
}

#[test]
fn test_command_log_skips_frame_ticks() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, Vec2::ZERO);
    for _ in 0..10 {
        send(&mut controller, &mut state, AppIntent::FrameTick);
    }

    let logged: Vec<&AppCommand> = state.command_log.commands().collect();
    assert_eq!(
        logged,
        vec![&AppCommand::AddNodeAt {
            pos: Vec2::ZERO,
            radius: state.options.node_radius
        }]
    );
    assert_eq!(state.command_log.total_recorded(), 1);
}

#[test]
fn test_layout_toggle_freezes_positions() {
    let mut controller = AppController::new();
    let mut state = diamond(&mut controller);
    send(&mut controller, &mut state, AppIntent::LayoutToggleRequested);
    let before: Vec<Vec2> = state.graph.nodes().iter().map(|n| n.position).collect();

    for _ in 0..20 {
        send(&mut controller, &mut state, AppIntent::FrameTick);
    }

    let after: Vec<Vec2> = state.graph.nodes().iter().map(|n| n.position).collect();
    assert_eq!(before, after);
}

#[test]
fn test_clear_graph_resets_results() {
    let mut controller = AppController::new();
    let mut state = diamond(&mut controller);
    select(&mut controller, &mut state, EditorMode::Mst);

    send(&mut controller, &mut state, AppIntent::ClearGraphRequested);

    assert_eq!(state.node_count(), 0);
    assert_eq!(state.edge_count(), 0);
    assert!(state.algorithms.spanning_tree.is_empty());
    assert_eq!(state.mode(), EditorMode::Mst);
}
