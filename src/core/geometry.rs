//! Kurven-Geometrie einer Kante: Normale, Kontrollpunkt und Rand-Endpunkte.
//!
//! Die Kante läuft nicht von Mittelpunkt zu Mittelpunkt, sondern vom Rand
//! des Start-Nodes über den Kontrollpunkt zum Rand des End-Nodes. Die
//! Ausbuchtung zeigt immer in Richtung der Normalen, die sich aus der
//! Reihenfolge (Start, Ende) ergibt. Eine Gegenkante (Start/Ende vertauscht)
//! liegt dadurch auf der anderen Seite der Sehne.

use glam::Vec2;

use super::node::sanitize_radius;
use super::vector::VectorExt;
use super::{EdgeError, Result};

/// B(t) = (1-t)²·P0 + 2(1-t)t·P1 + t²·P2
pub fn quadratic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    inv * inv * p0 + 2.0 * inv * t * p1 + t * t * p2
}

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// Gecachte Geometrie einer Kante, berechnet aus den aktuellen Node-Positionen.
///
/// Reiner Wert-Typ: `Edge::update()` ersetzt ihn als Ganzes, es gibt keine
/// halb aktualisierten Zustände.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveGeometry {
    /// Mittelpunkt des Start-Nodes
    pub start: Vec2,
    /// Mittelpunkt des End-Nodes
    pub end: Vec2,
    /// Radius des Start-Nodes (geklemmt auf >= 0)
    pub start_radius: f32,
    /// Radius des End-Nodes (geklemmt auf >= 0)
    pub end_radius: f32,
    /// Abstand des Kontrollpunkts von der Sehnenmitte
    pub curvature: f32,
    /// Einheits-Normale der Sehne: `perp(end - start)`
    pub normal: Vec2,
    /// Konstante der Geradengleichung `normal · p = c` der Sehne
    pub c: f32,
    /// Sehne, um `start_radius + end_radius` auf den sichtbaren Teil gekürzt
    pub direction: Vec2,
    /// Mitte der Sehne
    pub midpoint: Vec2,
    /// Punkt, durch den die Kurve bei t = 0.5 läuft
    pub control_point: Vec2,
    /// Kurvenbeginn auf dem Rand des Start-Nodes
    pub visible_start: Vec2,
    /// Kurvenende auf dem Rand des End-Nodes
    pub visible_end: Vec2,
}

impl CurveGeometry {
    /// Berechnet die Geometrie für eine Kante von `start` nach `end`.
    ///
    /// Fällt der Kontrollpunkt mit einem Mittelpunkt zusammen oder sind die
    /// Eingaben nicht endlich, gibt es keine definierte Richtung und die
    /// Geometrie gilt als degeneriert.
    pub fn compute(
        start: Vec2,
        end: Vec2,
        start_radius: f32,
        end_radius: f32,
        curvature: f32,
    ) -> Result<Self> {
        if !start.is_finite() || !end.is_finite() || !curvature.is_finite() {
            return Err(EdgeError::DegenerateGeometry("nicht-endliche Koordinaten"));
        }
        let start_radius = sanitize_radius(start_radius);
        let end_radius = sanitize_radius(end_radius);

        let chord = end - start;
        let chord_dir = chord
            .unit()
            .ok_or(EdgeError::DegenerateGeometry("Start und Ende fallen zusammen"))?;
        let normal = chord_dir.perp();
        let c = normal.dot(start);

        // d0: Teil der Sehne, der unter den beiden Nodes verschwindet
        let hidden = chord_dir * (start_radius + end_radius);
        let direction = chord - hidden;

        let midpoint = (start + end) * 0.5;
        let control_point = midpoint + normal * curvature;

        let to_control_from_start = (control_point - start)
            .unit()
            .ok_or(EdgeError::DegenerateGeometry("Kontrollpunkt liegt im Start-Node"))?;
        let to_control_from_end = (control_point - end)
            .unit()
            .ok_or(EdgeError::DegenerateGeometry("Kontrollpunkt liegt im End-Node"))?;

        Ok(Self {
            start,
            end,
            start_radius,
            end_radius,
            curvature,
            normal,
            c,
            direction,
            midpoint,
            control_point,
            visible_start: start + to_control_from_start * start_radius,
            visible_end: end + to_control_from_end * end_radius,
        })
    }

    /// Bézier-Griffpunkt der gezeichneten Quadratik.
    ///
    /// Gewählt so, dass B(0.5) = `control_point`: `2·C − (P0 + P2) / 2`.
    pub fn curve_handle(&self) -> Vec2 {
        2.0 * self.control_point - (self.visible_start + self.visible_end) * 0.5
    }

    /// Punkt auf der gezeichneten Kurve (t ∈ [0, 1]).
    pub fn point_at(&self, t: f32) -> Vec2 {
        quadratic_bezier(self.visible_start, self.curve_handle(), self.visible_end, t)
    }

    /// Vorzeichenbehafteter Abstand eines Punkts zur Geraden durch die Sehne.
    ///
    /// Positiv auf der Seite, zu der die Kurve bei positiver Krümmung ausbuchtet.
    pub fn side_of_chord(&self, x: f32, y: f32) -> f32 {
        self.normal.dot_xy(x, y) - self.c
    }

    /// Länge des sichtbaren Sehnenanteils (zwischen den Node-Rändern).
    pub fn span_length(&self) -> f32 {
        self.direction.length()
    }
}
