//! Zentrale Konfiguration für den Graph-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{LayoutBounds, LayoutParams};
use serde::{Deserialize, Serialize};

// ── Kapazitäten ─────────────────────────────────────────────────────

/// Maximale Node-Anzahl (Labels bleiben bis 26 Buchstaben).
pub const MAX_NODES: usize = 26;
/// Maximale Kanten-Anzahl.
pub const MAX_EDGES: usize = 64;
/// Obergrenze für `max_nodes` aus der Optionen-Datei.
pub const MAX_NODES_LIMIT: usize = 1024;
/// Obergrenze für `max_edges` aus der Optionen-Datei.
pub const MAX_EDGES_LIMIT: usize = 8192;

// ── Hit-Tests ───────────────────────────────────────────────────────

/// Sichtbarer Node-Radius in NDC.
pub const NODE_RADIUS: f32 = 0.08;
/// Maximaler Abstand eines Klicks zu einer Kante in NDC.
pub const EDGE_PICK_THRESHOLD: f32 = 0.03;

// ── Layout ──────────────────────────────────────────────────────────

/// Fläche der Zeichenebene ([-1,1]²).
pub const LAYOUT_AREA: f32 = 4.0;
/// Untergrenze für Abstände in Nennern.
pub const LAYOUT_EPSILON: f32 = 0.01;
/// Maximale Verschiebung pro Schritt.
pub const LAYOUT_TEMPERATURE: f32 = 0.02;
/// Dämpfung der Verschiebung.
pub const LAYOUT_DAMPING: f32 = 0.9;
/// Zug Richtung Ursprung.
pub const LAYOUT_CENTERING_STRENGTH: f32 = 0.05;

// ── Seitenpanel ─────────────────────────────────────────────────────

/// Breite des Menü-Panels in Pixeln.
pub const MENU_WIDTH_PX: f32 = 200.0;
/// Höhe eines Menüeintrags in Pixeln.
pub const MENU_ITEM_HEIGHT_PX: f32 = 40.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `graph_algo_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Kapazitäten ─────────────────────────────────────────────
    /// Maximale Node-Anzahl
    pub max_nodes: usize,
    /// Maximale Kanten-Anzahl
    pub max_edges: usize,

    // ── Hit-Tests ───────────────────────────────────────────────
    /// Node-Radius in NDC (Darstellung und Klick-Treffer)
    pub node_radius: f32,
    /// Pick-Schwelle für Kanten in NDC
    pub edge_pick_threshold: f32,

    // ── Layout ──────────────────────────────────────────────────
    /// Ob das Force-Layout pro Frame läuft
    pub layout_enabled: bool,
    pub layout_area: f32,
    pub layout_epsilon: f32,
    pub layout_temperature: f32,
    pub layout_damping: f32,
    pub layout_centering_strength: f32,

    // ── Seitenpanel ─────────────────────────────────────────────
    /// Breite des Menü-Panels in Pixeln
    pub menu_width_px: f32,
    /// Höhe eines Menüeintrags in Pixeln
    pub menu_item_height_px: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            max_nodes: MAX_NODES,
            max_edges: MAX_EDGES,

            node_radius: NODE_RADIUS,
            edge_pick_threshold: EDGE_PICK_THRESHOLD,

            layout_enabled: true,
            layout_area: LAYOUT_AREA,
            layout_epsilon: LAYOUT_EPSILON,
            layout_temperature: LAYOUT_TEMPERATURE,
            layout_damping: LAYOUT_DAMPING,
            layout_centering_strength: LAYOUT_CENTERING_STRENGTH,

            menu_width_px: MENU_WIDTH_PX,
            menu_item_height_px: MENU_ITEM_HEIGHT_PX,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content).unwrap_or_else(|e| {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                Self::default()
            }),
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus einem TOML-String; fehlende Felder erhalten Defaults.
    ///
    /// Werte außerhalb ihres gültigen Bereichs werden über [`Self::sanitized`]
    /// korrigiert.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let options: Self = toml::from_str(content)?;
        Ok(options.sanitized())
    }

    /// Bringt alle Werte in ihren gültigen Bereich.
    ///
    /// Kapazitäten werden auf `MAX_NODES_LIMIT`/`MAX_EDGES_LIMIT` gekappt,
    /// ungültige Gleitkommawerte fallen auf ihren Standardwert zurück.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if self.max_nodes > MAX_NODES_LIMIT {
            log::warn!(
                "max_nodes {} zu groß, begrenze auf {}",
                self.max_nodes,
                MAX_NODES_LIMIT
            );
            self.max_nodes = MAX_NODES_LIMIT;
        }
        if self.max_edges > MAX_EDGES_LIMIT {
            log::warn!(
                "max_edges {} zu groß, begrenze auf {}",
                self.max_edges,
                MAX_EDGES_LIMIT
            );
            self.max_edges = MAX_EDGES_LIMIT;
        }

        let non_negative = |v: f32| v.is_finite() && v >= 0.0;
        let positive = |v: f32| v.is_finite() && v > 0.0;
        let unit_open = |v: f32| v.is_finite() && v > 0.0 && v < 1.0;

        fallback(&mut self.node_radius, defaults.node_radius, "node_radius", non_negative);
        fallback(
            &mut self.edge_pick_threshold,
            defaults.edge_pick_threshold,
            "edge_pick_threshold",
            non_negative,
        );
        fallback(&mut self.layout_area, defaults.layout_area, "layout_area", positive);
        fallback(&mut self.layout_epsilon, defaults.layout_epsilon, "layout_epsilon", positive);
        fallback(
            &mut self.layout_temperature,
            defaults.layout_temperature,
            "layout_temperature",
            non_negative,
        );
        fallback(&mut self.layout_damping, defaults.layout_damping, "layout_damping", unit_open);
        fallback(
            &mut self.layout_centering_strength,
            defaults.layout_centering_strength,
            "layout_centering_strength",
            non_negative,
        );
        fallback(&mut self.menu_width_px, defaults.menu_width_px, "menu_width_px", non_negative);
        fallback(
            &mut self.menu_item_height_px,
            defaults.menu_item_height_px,
            "menu_item_height_px",
            positive,
        );

        self
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("graph_algo_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("graph_algo_editor.toml")
    }

    /// Layout-Parameter für den `LayoutEngine`.
    pub fn layout_params(&self) -> LayoutParams {
        LayoutParams {
            area: self.layout_area,
            epsilon: self.layout_epsilon,
            temperature: self.layout_temperature,
            damping: self.layout_damping,
            centering_strength: self.layout_centering_strength,
        }
    }

    /// Erlaubter Layout-Bereich bei gegebener Fensterbreite.
    pub fn layout_bounds(&self, window_width_px: f32) -> LayoutBounds {
        LayoutBounds::with_side_panel(self.menu_width_px, window_width_px)
    }
}

/// Ersetzt `value` durch `default`, wenn `valid` ihn ablehnt.
fn fallback(value: &mut f32, default: f32, name: &str, valid: impl Fn(f32) -> bool) {
    if !valid(*value) {
        log::warn!(
            "Option {} = {} ungültig, verwende Standardwert {}",
            name,
            value,
            default
        );
        *value = default;
    }
}
