//! Abstraktion einer Canvas-artigen 2D-Zeichenfläche.
//!
//! Die Methoden folgen dem bekannten Pfad-Modell (`begin_path`, `move_to`,
//! ..., `stroke`/`fill`). Optionale Primitive werden über
//! [`SurfaceCapabilities`] angemeldet und beim Erstellen des Renderers
//! geprüft, nicht erst mitten im Frame.

use serde::{Deserialize, Serialize};

/// RGBA-Farbe, Komponenten in [0, 1].
pub type Color = [f32; 4];

/// Horizontale Text-Ausrichtung relativ zum Ankerpunkt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlign {
    /// Anker am linken Rand
    #[default]
    Left,
    /// Anker in der Mitte
    Center,
    /// Anker am rechten Rand
    Right,
}

/// Vertikale Text-Ausrichtung relativ zum Ankerpunkt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextBaseline {
    /// Anker an der Oberkante
    Top,
    /// Anker in der Mitte
    Middle,
    /// Anker an der Unterkante
    Bottom,
    /// Anker auf der Schrift-Grundlinie
    #[default]
    Alphabetic,
}

/// Welche optionalen Primitive eine Zeichenfläche tatsächlich beherrscht.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceCapabilities {
    /// `quadratic_curve_to` wird unterstützt
    pub quadratic_curves: bool,
    /// `bezier_curve_to` wird unterstützt
    pub cubic_curves: bool,
    /// Text-Ausgabe (`set_font`, `fill_text`, ...) wird unterstützt
    pub text: bool,
}

impl SurfaceCapabilities {
    /// Alle Primitive vorhanden.
    pub const ALL: Self = Self {
        quadratic_curves: true,
        cubic_curves: true,
        text: true,
    };
}

impl Default for SurfaceCapabilities {
    fn default() -> Self {
        Self::ALL
    }
}

/// Zeichenfläche, auf die Kanten gerendert werden.
///
/// Optionale Methoden haben leere Default-Implementierungen; welche davon
/// wirklich zeichnen, meldet [`DrawingSurface::capabilities`].
pub trait DrawingSurface {
    /// Unterstützte optionale Primitive.
    fn capabilities(&self) -> SurfaceCapabilities;

    /// Beginnt einen neuen Pfad.
    fn begin_path(&mut self);
    /// Setzt den aktuellen Punkt ohne zu zeichnen.
    fn move_to(&mut self, x: f32, y: f32);
    /// Gerade vom aktuellen Punkt nach (x, y).
    fn line_to(&mut self, x: f32, y: f32);
    /// Schließt den aktuellen Teilpfad.
    fn close_path(&mut self);
    /// Zeichnet den Pfad als Linie.
    fn stroke(&mut self);
    /// Füllt den Pfad.
    fn fill(&mut self);

    /// Linienfarbe
    fn set_stroke_style(&mut self, color: Color);
    /// Füllfarbe (auch für Text)
    fn set_fill_style(&mut self, color: Color);
    /// Linienstärke
    fn set_line_width(&mut self, width: f32);

    /// Quadratische Bézier-Kurve mit einem Griffpunkt.
    fn quadratic_curve_to(&mut self, _cpx: f32, _cpy: f32, _x: f32, _y: f32) {}
    /// Kubische Bézier-Kurve mit zwei Griffpunkten.
    fn bezier_curve_to(
        &mut self,
        _cp1x: f32,
        _cp1y: f32,
        _cp2x: f32,
        _cp2y: f32,
        _x: f32,
        _y: f32,
    ) {
    }

    /// Schrift in CSS-Notation, z.B. `"15pt Arial"`.
    fn set_font(&mut self, _font: &str) {}
    /// Horizontale Ausrichtung für `fill_text`.
    fn set_text_align(&mut self, _align: TextAlign) {}
    /// Vertikale Ausrichtung für `fill_text`.
    fn set_text_baseline(&mut self, _baseline: TextBaseline) {}
    /// Zeichnet Text mit der aktuellen Füllfarbe.
    fn fill_text(&mut self, _text: &str, _x: f32, _y: f32) {}
}

/// Liest die Punktgröße aus einer CSS-Schriftangabe (`"15pt Arial"` → 15).
///
/// Unterstützt `pt` und `px`; `None` wenn keine Größe erkennbar ist.
pub fn font_size_from_css(font: &str) -> Option<f32> {
    font.split_whitespace().find_map(|token| {
        let number = token
            .strip_suffix("pt")
            .or_else(|| token.strip_suffix("px"))?;
        number.parse::<f32>().ok().filter(|size| *size > 0.0)
    })
}
