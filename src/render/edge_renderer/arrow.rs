//! Pfeilspitze am Kurvenende gerichteter Kanten.

use glam::Vec2;

use crate::core::CurveGeometry;
use crate::core::vector::VectorExt;

/// Dreieck der Pfeilspitze plus der Richtungsvektor, den auch das Label nutzt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrowhead {
    /// Spitze (= `visible_end`)
    pub tip: Vec2,
    /// Linke Basis-Ecke
    pub left: Vec2,
    /// Rechte Basis-Ecke
    pub right: Vec2,
    /// Richtung Kontrollpunkt → Kurvenende, Länge = End-Radius
    pub direction: Vec2,
}

/// Berechnet die Pfeilspitze; `None` wenn die Endtangente keine Richtung hat.
pub fn arrowhead(geometry: &CurveGeometry, half_width: f32) -> Option<Arrowhead> {
    let tangent = geometry.visible_end - geometry.control_point;
    let unit = tangent.unit()?;
    let direction = tangent.with_length(geometry.end_radius)?;
    let normal = unit.perp() * half_width;
    let base = geometry.visible_end - direction;

    Some(Arrowhead {
        tip: geometry.visible_end,
        left: base + normal,
        right: base - normal,
        direction,
    })
}
