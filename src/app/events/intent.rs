use crate::shared::EditorMode;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Menüeintrag angeklickt
    ModeSelected { mode: EditorMode },
    /// Klick auf die Zeichenfläche (bereits in NDC umgerechnet)
    CanvasClicked { pos: glam::Vec2 },
    /// Zeichen getippt (nur während der Gewichtseingabe relevant)
    CharacterTyped { ch: char },
    /// Backspace gedrückt
    BackspacePressed,
    /// Enter/Return gedrückt
    EnterPressed,
    /// Escape gedrückt
    EscapePressed,
    /// Fenstergröße hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Ein Animations-Frame ist vergangen
    FrameTick,
    /// Force-Layout an/aus
    LayoutToggleRequested,
    /// Alle Nodes und Kanten verwerfen
    ClearGraphRequested,
}
