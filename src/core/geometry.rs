//! Rein-mathematische Hilfsfunktionen für Hit-Tests.

use glam::Vec2;

/// Abstand eines Punkts zum Segment `a`–`b`.
///
/// Projektion auf die Gerade, Parameter auf [0,1] geklemmt. Ein entartetes
/// Segment (`a == b`) liefert den Abstand zu `a`.
pub fn point_segment_distance(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}
