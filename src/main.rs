//! Graph-Algorithmen-Editor.
//!
//! Headless-Sitzung: spielt eine feste Folge von Zeiger- und Tasten-Events
//! durch die UI-Grenze und loggt die resultierende Statuszeile.

use glam::Vec2;
use graph_algo_editor::ui::{self, InputState, PointerButton, PointerEvent};
use graph_algo_editor::{AppController, AppIntent, AppState, EditorMode, EditorOptions};

const WINDOW_SIZE: [f32; 2] = [1000.0, 800.0];
const SETTLE_TICKS: usize = 120;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "Graph-Algorithmen-Editor v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let config_path = EditorOptions::config_path();
    let options = EditorOptions::load_from_file(&config_path);

    let mut session = Session::new(options);
    session.run_demo()?;

    log::info!("Sitzung beendet");
    Ok(())
}

/// Bündelt State, Controller und Input-Zustand einer Sitzung.
struct Session {
    state: AppState,
    controller: AppController,
    input: InputState,
}

impl Session {
    fn new(options: EditorOptions) -> Self {
        Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
            input: InputState::new(),
        }
    }

    fn dispatch(&mut self, intents: Vec<AppIntent>) -> anyhow::Result<()> {
        for intent in intents {
            self.controller.handle_intent(&mut self.state, intent)?;
        }
        Ok(())
    }

    fn click_pixel(&mut self, pixel: Vec2) -> anyhow::Result<()> {
        let event = PointerEvent {
            button: PointerButton::Primary,
            pressed: true,
            pixel_pos: pixel,
            window_size: WINDOW_SIZE,
        };
        let intents = self.input.collect_pointer_intents(&event, &self.state.options);
        self.dispatch(intents)
    }

    fn click_ndc(&mut self, ndc: Vec2) -> anyhow::Result<()> {
        self.click_pixel(ui::ndc_to_pixel(ndc, WINDOW_SIZE))
    }

    fn select_mode(&mut self, mode: EditorMode) -> anyhow::Result<()> {
        let menu = ui::MenuLayout::from_options(&self.state.options);
        let [_, min_y, _, max_y] = menu.entry_rect(mode);
        self.click_pixel(Vec2::new(10.0, (min_y + max_y) * 0.5))
    }

    fn type_text(&mut self, text: &str) -> anyhow::Result<()> {
        for ch in text.chars() {
            let intent = ui::key_intents(ch, self.state.weight_entry.is_active());
            self.controller.handle_intent(&mut self.state, intent)?;
        }
        Ok(())
    }

    fn node_ndc(&self, index: usize) -> Option<Vec2> {
        self.state.graph.node(index).map(|node| node.position)
    }

    fn connect(&mut self, a: usize, b: usize, weight: &str) -> anyhow::Result<()> {
        for index in [a, b] {
            if let Some(pos) = self.node_ndc(index) {
                self.click_ndc(pos)?;
            }
        }
        self.type_text(weight)?;
        self.type_text("\r")
    }

    fn tick(&mut self, count: usize) -> anyhow::Result<()> {
        for _ in 0..count {
            self.controller.handle_intent(&mut self.state, AppIntent::FrameTick)?;
        }
        Ok(())
    }

    fn log_status(&self) {
        let scene = self.controller.build_render_scene(&self.state);
        log::info!("{}", ui::status_line(&scene));
    }

    fn run_demo(&mut self) -> anyhow::Result<()> {
        let resized = self.input.window_resized(WINDOW_SIZE);
        self.dispatch(resized.into_iter().collect())?;

        self.select_mode(EditorMode::AddNode)?;
        for pos in [
            Vec2::new(-0.3, 0.0),
            Vec2::new(0.2, 0.5),
            Vec2::new(0.2, -0.5),
            Vec2::new(0.7, 0.0),
        ] {
            self.click_ndc(pos)?;
        }
        self.log_status();

        self.select_mode(EditorMode::AddEdge)?;
        self.connect(0, 1, "1")?;
        self.connect(1, 2, "2")?;
        self.connect(0, 2, "4")?;
        self.connect(2, 3, "1")?;
        self.log_status();

        self.tick(SETTLE_TICKS)?;
        // Layout einfrieren, damit die Klicks unten die Nodes sicher treffen
        self.type_text("l")?;

        self.select_mode(EditorMode::ShortestPath)?;
        for index in [0, 3] {
            if let Some(pos) = self.node_ndc(index) {
                self.click_ndc(pos)?;
            }
        }
        self.log_status();

        self.select_mode(EditorMode::Mst)?;
        self.tick(1)?;
        self.log_status();

        self.type_text("c")?;
        self.log_status();

        log::info!("{} Commands ausgeführt", self.state.command_log.len());
        Ok(())
    }
}
