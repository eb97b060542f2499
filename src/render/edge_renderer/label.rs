//! Ankerpunkt des Gewichts-Labels.

use glam::Vec2;

use crate::core::CurveGeometry;
use crate::shared::EdgeStyle;

/// Ankerpunkt des Labels.
///
/// Gerichtet: neben der Pfeilspitze, um `arrow_direction` zurückversetzt.
/// Ungerichtet: neben der Sehnenmitte. Läuft die Kante nach links, wandert
/// das Label auf die andere Seite, damit es über der Kurve bleibt.
pub fn label_anchor(
    geometry: &CurveGeometry,
    style: &EdgeStyle,
    directed: bool,
    arrow_direction: Vec2,
) -> Vec2 {
    let side = if geometry.end.x - geometry.start.x < 0.0 {
        -1.0
    } else {
        1.0
    };

    if directed {
        geometry.visible_end
            + geometry.normal * (side * style.label_offset_factor * geometry.end_radius)
            - arrow_direction
    } else {
        geometry.midpoint
            + geometry.normal * (side * style.label_midpoint_scale * style.label_offset_factor)
    }
}
