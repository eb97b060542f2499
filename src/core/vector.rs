//! 2D-Vektor-Grundoperationen.
//!
//! Addition, Subtraktion, Skalierung und Skalarprodukt liefert `glam::Vec2`
//! direkt (`+`, `-`, `* k`, `dot`). Hier liegen nur die Ergänzungen, die
//! die Kanten-Geometrie zusätzlich braucht, vor allem eine Normalisierung
//! mit explizitem Null-Vektor-Fall.

use glam::Vec2;

/// Vektor-Typ der gesamten Kanten-Geometrie.
pub type Vector2 = Vec2;

/// Längen unterhalb dieser Schwelle gelten als Null-Vektor.
pub const DEGENERATE_LENGTH: f32 = 1e-6;

/// Ergänzende Operationen auf [`Vector2`].
pub trait VectorExt: Copy {
    /// Skalarprodukt mit einem Koordinatenpaar statt einem zweiten Vektor.
    fn dot_xy(self, x: f32, y: f32) -> f32;

    /// Einheitsvektor oder `None` bei (nahezu) Null-Länge bzw. NaN/Inf.
    fn unit(self) -> Option<Vector2>;

    /// Vektor gleicher Richtung mit Länge `length`, `None` wenn degeneriert.
    fn with_length(self, length: f32) -> Option<Vector2> {
        self.unit().map(|u| u * length)
    }
}

impl VectorExt for Vec2 {
    fn dot_xy(self, x: f32, y: f32) -> f32 {
        self.x * x + self.y * y
    }

    fn unit(self) -> Option<Vector2> {
        if !self.is_finite() {
            return None;
        }
        let length = self.length();
        if length < DEGENERATE_LENGTH {
            return None;
        }
        Some(self / length)
    }
}
