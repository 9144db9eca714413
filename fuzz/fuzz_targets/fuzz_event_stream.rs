#![no_main]

use glam::Vec2;
use graph_algo_editor::{AppController, AppIntent, AppState, EditorMode};
use libfuzzer_sys::fuzz_target;

/// Übersetzt je drei Bytes in einen Intent.
fn decode(chunk: &[u8]) -> AppIntent {
    let pos = Vec2::new(
        chunk[1] as f32 / 127.5 - 1.0,
        chunk[2] as f32 / 127.5 - 1.0,
    );
    match chunk[0] % 10 {
        0 => AppIntent::ModeSelected {
            mode: EditorMode::ALL[chunk[1] as usize % EditorMode::ALL.len()],
        },
        1..=3 => AppIntent::CanvasClicked { pos },
        4 => AppIntent::CharacterTyped {
            ch: b"0123456789.-x"[chunk[1] as usize % 13] as char,
        },
        5 => AppIntent::BackspacePressed,
        6 => AppIntent::EnterPressed,
        7 => AppIntent::EscapePressed,
        8 => AppIntent::ViewportResized {
            size: [chunk[1] as f32 * 8.0, chunk[2] as f32 * 8.0],
        },
        _ => AppIntent::FrameTick,
    }
}

fuzz_target!(|data: &[u8]| {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for chunk in data.chunks_exact(3) {
        let _ = controller.handle_intent(&mut state, decode(chunk));

        let node_count = state.graph.node_count();
        assert!(node_count <= state.graph.max_nodes());
        assert!(state.graph.edge_count() <= state.graph.max_edges());
        for (i, node) in state.graph.nodes().iter().enumerate() {
            assert_eq!(node.index, i);
            assert!(node.position.is_finite());
        }
        for edge in state.graph.edges() {
            assert!(edge.src < node_count && edge.dest < node_count);
            assert!(edge.weight > 0.0);
        }
        if let Some(path) = &state.algorithms.shortest_path {
            assert!(path.nodes.iter().all(|&n| n < node_count));
        }
    }
});
