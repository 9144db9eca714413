//! Zeiger-Events → AppIntent.
//!
//! Klicks in der Modus-Leiste wählen einen Modus, alle anderen werden in
//! normalisierte Gerätekoordinaten umgerechnet und als Canvas-Klick gemeldet.

use super::MenuLayout;
use crate::app::AppIntent;
use crate::shared::EditorOptions;
use glam::Vec2;

/// Maustaste eines Zeiger-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Rohes Zeiger-Event des Hosts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Gedrückte Taste
    pub button: PointerButton,
    /// `true` beim Drücken, `false` beim Loslassen
    pub pressed: bool,
    /// Position in Pixel, Ursprung oben links
    pub pixel_pos: Vec2,
    /// Fenstergröße in Pixel [Breite, Höhe]
    pub window_size: [f32; 2],
}

/// Rechnet Pixel (Ursprung oben links) in NDC [-1,1]² um, y zeigt nach oben.
pub fn pixel_to_ndc(pixel: Vec2, window_size: [f32; 2]) -> Vec2 {
    let [w, h] = window_size;
    if w <= 0.0 || h <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(2.0 * pixel.x / w - 1.0, 1.0 - 2.0 * pixel.y / h)
}

/// Umkehrung von [`pixel_to_ndc`].
pub fn ndc_to_pixel(ndc: Vec2, window_size: [f32; 2]) -> Vec2 {
    let [w, h] = window_size;
    Vec2::new((ndc.x + 1.0) * 0.5 * w, (1.0 - ndc.y) * 0.5 * h)
}

/// Verwaltet den Input-Zustand zwischen zwei Events.
#[derive(Debug, Default)]
pub struct InputState {
    last_window_size: Option<[f32; 2]>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Meldet eine geänderte Fenstergröße genau einmal.
    pub fn window_resized(&mut self, size: [f32; 2]) -> Option<AppIntent> {
        if self.last_window_size == Some(size) {
            return None;
        }
        self.last_window_size = Some(size);
        Some(AppIntent::ViewportResized { size })
    }

    /// Übersetzt ein Zeiger-Event in AppIntents.
    ///
    /// Nur das Drücken der Primärtaste erzeugt einen Klick-Intent; eine neue
    /// Fenstergröße wird vorher als `ViewportResized` gemeldet.
    pub fn collect_pointer_intents(
        &mut self,
        event: &PointerEvent,
        options: &EditorOptions,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();
        events.extend(self.window_resized(event.window_size));

        if event.button != PointerButton::Primary || !event.pressed {
            return events;
        }

        let menu = MenuLayout::from_options(options);
        if menu.contains(event.pixel_pos) {
            if let Some(mode) = menu.hit_test(event.pixel_pos) {
                events.push(AppIntent::ModeSelected { mode });
            }
        } else {
            events.push(AppIntent::CanvasClicked {
                pos: pixel_to_ndc(event.pixel_pos, event.window_size),
            });
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::EditorMode;
    use approx::assert_relative_eq;

    const WINDOW: [f32; 2] = [1000.0, 800.0];

    fn press(x: f32, y: f32) -> PointerEvent {
        PointerEvent {
            button: PointerButton::Primary,
            pressed: true,
            pixel_pos: Vec2::new(x, y),
            window_size: WINDOW,
        }
    }

    #[test]
    fn ndc_conversion_corners() {
        assert_eq!(pixel_to_ndc(Vec2::ZERO, WINDOW), Vec2::new(-1.0, 1.0));
        assert_eq!(pixel_to_ndc(Vec2::new(1000.0, 800.0), WINDOW), Vec2::new(1.0, -1.0));
        assert_eq!(pixel_to_ndc(Vec2::new(500.0, 400.0), WINDOW), Vec2::ZERO);

        let back = ndc_to_pixel(Vec2::new(0.25, -0.5), WINDOW);
        assert_relative_eq!(back.x, 625.0);
        assert_relative_eq!(back.y, 600.0);
    }

    #[test]
    fn first_event_reports_window_size_once() {
        let mut input = InputState::new();
        let options = EditorOptions::default();

        let first = input.collect_pointer_intents(&press(600.0, 400.0), &options);
        let second = input.collect_pointer_intents(&press(600.0, 400.0), &options);

        assert_eq!(first[0], AppIntent::ViewportResized { size: WINDOW });
        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn menu_press_selects_mode() {
        let mut input = InputState::new();
        input.window_resized(WINDOW);

        let events = input.collect_pointer_intents(&press(50.0, 85.0), &EditorOptions::default());

        assert_eq!(
            events,
            vec![AppIntent::ModeSelected {
                mode: EditorMode::ShortestPath
            }]
        );
    }

    #[test]
    fn press_below_menu_entries_is_ignored() {
        let mut input = InputState::new();
        input.window_resized(WINDOW);

        let events = input.collect_pointer_intents(&press(50.0, 700.0), &EditorOptions::default());

        assert!(events.is_empty());
    }

    #[test]
    fn canvas_press_maps_to_ndc() {
        let mut input = InputState::new();
        input.window_resized(WINDOW);

        let events = input.collect_pointer_intents(&press(750.0, 200.0), &EditorOptions::default());

        assert_eq!(
            events,
            vec![AppIntent::CanvasClicked {
                pos: Vec2::new(0.5, 0.5)
            }]
        );
    }

    #[test]
    fn releases_and_other_buttons_are_ignored() {
        let mut input = InputState::new();
        input.window_resized(WINDOW);
        let options = EditorOptions::default();

        let mut release = press(750.0, 200.0);
        release.pressed = false;
        let mut secondary = press(750.0, 200.0);
        secondary.button = PointerButton::Secondary;

        assert!(input.collect_pointer_intents(&release, &options).is_empty());
        assert!(input.collect_pointer_intents(&secondary, &options).is_empty());
    }
}
