//! Application State: zentrale Datenhaltung.

use super::CommandLog;
use crate::core::{GraphStore, PathResult, SpanningTree};
use crate::shared::{EditorMode, EditorOptions};

/// Zustand des aktiven Modus inklusive offener Zwei-Klick-Auswahl
#[derive(Debug, Clone, Default)]
pub struct EditorToolState {
    /// Aktiver Modus
    pub mode: EditorMode,
    /// Erster gewählter Node im AddEdge-Modus
    pub selected_node: Option<usize>,
    /// Erster gewählter Node im ShortestPath-Modus
    pub sp_selected: Option<usize>,
}

impl EditorToolState {
    /// Erstellt den Standard-Zustand (AddNode aktiv, keine Auswahl).
    pub fn new() -> Self {
        Self::default()
    }

    /// Verwirft jede offene Zwei-Klick-Auswahl.
    pub fn clear_pending_selection(&mut self) {
        self.selected_node = None;
        self.sp_selected = None;
    }

    /// Die für den aktiven Modus relevante offene Auswahl.
    pub fn pending_selection(&self) -> Option<usize> {
        match self.mode {
            EditorMode::AddEdge => self.selected_node,
            EditorMode::ShortestPath => self.sp_selected,
            _ => None,
        }
    }
}

/// Ziel einer offenen Gewichtseingabe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightTarget {
    /// Neue Kante zwischen zwei Nodes anlegen
    NewEdge { src: usize, dest: usize },
    /// Gewicht einer bestehenden Kante überschreiben
    ExistingEdge { edge_index: usize },
}

/// Gewichtseingabe als Overlay über dem aktiven Modus.
///
/// Aktiv, solange `target` gesetzt ist. Der Puffer nimmt nur Ziffern und
/// höchstens einen Dezimalpunkt auf.
#[derive(Debug, Clone, Default)]
pub struct WeightEntryState {
    /// Ziel der Eingabe (None = Eingabe inaktiv)
    pub target: Option<WeightTarget>,
    /// Bisher getippter Text
    pub buffer: String,
}

impl WeightEntryState {
    /// Gibt `true` zurück, wenn eine Eingabe offen ist.
    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    /// Öffnet die Eingabe für eine neue Kante mit leerem Puffer.
    pub fn open_for_new_edge(&mut self, src: usize, dest: usize) {
        self.target = Some(WeightTarget::NewEdge { src, dest });
        self.buffer.clear();
    }

    /// Öffnet die Eingabe für eine bestehende Kante, vorbelegt mit ihrem Gewicht.
    pub fn open_for_existing_edge(&mut self, edge_index: usize, current_weight: f32) {
        self.target = Some(WeightTarget::ExistingEdge { edge_index });
        self.buffer = current_weight.to_string();
    }

    /// Hängt ein Zeichen an. Gibt `false` zurück, wenn es verworfen wurde.
    pub fn push_char(&mut self, ch: char) -> bool {
        let accepted = ch.is_ascii_digit() || (ch == '.' && !self.buffer.contains('.'));
        if accepted {
            self.buffer.push(ch);
        }
        accepted
    }

    /// Entfernt das letzte Zeichen (no-op bei leerem Puffer).
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Interpretiert den Puffer als Gewicht; Unparsebares ergibt 0.0.
    pub fn parsed_weight(&self) -> f32 {
        self.buffer.trim().parse::<f32>().unwrap_or(0.0)
    }

    /// Schließt die Eingabe und gibt Ziel und Gewicht zurück.
    pub fn close(&mut self) -> Option<(WeightTarget, f32)> {
        let weight = self.parsed_weight();
        self.buffer.clear();
        self.target.take().map(|target| (target, weight))
    }
}

/// Zuletzt berechnete Algorithmus-Ergebnisse für die Anzeige
#[derive(Debug, Clone, Default)]
pub struct AlgorithmState {
    /// Letzter kürzester Weg (None = noch keiner berechnet)
    pub shortest_path: Option<PathResult>,
    /// Aktueller Spannbaum/-wald
    pub spanning_tree: SpanningTree,
    /// Anzahl der Komponenten bei der letzten Spannbaum-Berechnung
    pub component_count: usize,
}

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Aktuelle Fenstergröße in Pixel [Breite, Höhe]
    pub viewport_size: [f32; 2],
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Alle Nodes und Kanten der Sitzung
    pub graph: GraphStore,
    /// View-State
    pub view: ViewState,
    /// Modus und Zwei-Klick-Auswahl
    pub editor: EditorToolState,
    /// Gewichtseingabe-Overlay
    pub weight_entry: WeightEntryState,
    /// Ergebnisse von Dijkstra und Kruskal
    pub algorithms: AlgorithmState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State; Kapazitäten kommen aus den Optionen.
    ///
    /// Die Optionen werden vorher in ihren gültigen Bereich gebracht.
    pub fn with_options(options: EditorOptions) -> Self {
        let options = options.sanitized();
        Self {
            graph: GraphStore::new(options.max_nodes, options.max_edges),
            view: ViewState::default(),
            editor: EditorToolState::new(),
            weight_entry: WeightEntryState::default(),
            algorithms: AlgorithmState::default(),
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Gibt die Anzahl der Nodes zurück (für UI-Anzeige)
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Gibt die Anzahl der Kanten zurück (für UI-Anzeige)
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Aktiver Modus
    pub fn mode(&self) -> EditorMode {
        self.editor.mode
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
