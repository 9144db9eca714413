use crate::shared::EditorMode;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Modus wechseln (verwirft offene Auswahl und Gewichtseingabe)
    SetMode { mode: EditorMode },
    /// Neuen Node anlegen, sofern im Radius kein Node liegt
    AddNodeAt { pos: glam::Vec2, radius: f32 },
    /// AddEdge: Node anwählen (erster oder zweiter Endpunkt)
    SelectEdgeEndpoint { pos: glam::Vec2, radius: f32 },
    /// ShortestPath: Node anwählen (Start oder Ziel)
    SelectPathEndpoint { pos: glam::Vec2, radius: f32 },
    /// EditWeight: Kante anwählen und Gewichtseingabe öffnen
    BeginWeightEdit { pos: glam::Vec2, threshold: f32 },
    /// Node unter dem Klick löschen
    DeleteNodeAt { pos: glam::Vec2, radius: f32 },
    /// Zeichen an den Eingabepuffer anhängen
    WeightEntryAppend { ch: char },
    /// Letztes Zeichen des Eingabepuffers entfernen
    WeightEntryBackspace,
    /// Eingabe übernehmen (nur strikt positive Gewichte)
    WeightEntryCommit,
    /// Eingabe verwerfen
    WeightEntryCancel,
    /// Fenstergröße setzen
    SetViewportSize { size: [f32; 2] },
    /// Einen Force-Layout-Schritt ausführen
    StepLayout,
    /// Spannbaum neu berechnen
    RecomputeSpanningTree,
    /// Force-Layout an/aus
    ToggleLayout,
    /// Graph leeren
    ClearGraph,
}
