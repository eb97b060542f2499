//! Edge-Renderer für gekrümmte Kanten, Pfeilspitzen und Gewichts-Labels.
//!
//! Aufgeteilt in:
//! - `arrow`: Dreieck der Pfeilspitze
//! - `label`: Ankerpunkt des Gewichts-Labels

mod arrow;
mod label;

use glam::Vec2;

use super::surface::{DrawingSurface, TextAlign, TextBaseline};
use crate::core::{CurveGeometry, Edge, EdgeError, Result};
use crate::shared::EdgeStyle;

pub use arrow::{Arrowhead, arrowhead};
pub use label::label_anchor;

/// Mit welchem Primitiv die Kurve an die Zeichenfläche geht.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveMode {
    /// `quadratic_curve_to` direkt
    Quadratic,
    /// Grad-erhöht auf `bezier_curve_to`
    Cubic,
}

/// Zeichnet Kanten auf eine [`DrawingSurface`].
///
/// Wird für eine konkrete Fläche erstellt; fehlende Primitive fallen dabei
/// auf und nicht erst beim ersten Frame.
#[derive(Debug, Clone)]
pub struct EdgeRenderer {
    style: EdgeStyle,
    curve_mode: CurveMode,
}

impl EdgeRenderer {
    /// Erstellt einen Renderer passend zu den Fähigkeiten von `surface`.
    pub fn for_surface(surface: &impl DrawingSurface, style: EdgeStyle) -> Result<Self> {
        let capabilities = surface.capabilities();
        let curve_mode = if capabilities.quadratic_curves {
            CurveMode::Quadratic
        } else if capabilities.cubic_curves {
            log::debug!("Zeichenflaeche ohne quadraticCurveTo, nutze kubische Kurven");
            CurveMode::Cubic
        } else {
            return Err(EdgeError::MissingCapability("Bezier-Kurven"));
        };
        if !capabilities.text {
            return Err(EdgeError::MissingCapability("Text-Ausgabe"));
        }
        Ok(Self { style, curve_mode })
    }

    /// Aktueller Stil.
    pub fn style(&self) -> &EdgeStyle {
        &self.style
    }

    /// Ersetzt den Stil (z.B. nach Änderungen im Options-Dialog des Hosts).
    pub fn set_style(&mut self, style: EdgeStyle) {
        self.style = style;
    }

    /// Gewähltes Kurven-Primitiv.
    pub fn curve_mode(&self) -> CurveMode {
        self.curve_mode
    }

    /// Zeichnet eine Kante: Kurve, bei `directed` die Pfeilspitze, bei
    /// `weighted` das Label.
    pub fn render(&self, edge: &Edge, geometry: &CurveGeometry, surface: &mut impl DrawingSurface) {
        let color = self.style.stroke_color(edge.is_selected(), edge.color);

        surface.begin_path();
        surface.set_stroke_style(color);
        surface.set_fill_style(color);
        surface.set_line_width(self.style.line_width);
        surface.move_to(geometry.visible_start.x, geometry.visible_start.y);
        self.curve_to(geometry, surface);
        surface.stroke();

        let mut arrow_direction = Vec2::ZERO;
        if edge.is_directed() {
            match arrowhead(geometry, self.style.arrow_half_width) {
                Some(arrow) => {
                    draw_arrow(&arrow, surface);
                    arrow_direction = arrow.direction;
                }
                None => log::trace!("Kante {}: Pfeil ohne Richtung, uebersprungen", edge.id()),
            }
        }

        if edge.is_weighted() {
            let anchor = label_anchor(geometry, &self.style, edge.is_directed(), arrow_direction);
            surface.set_font(&self.style.label_font);
            surface.set_text_align(TextAlign::Center);
            surface.set_text_baseline(TextBaseline::Bottom);
            surface.fill_text(&edge.weight.to_string(), anchor.x, anchor.y);
        }
    }

    fn curve_to(&self, geometry: &CurveGeometry, surface: &mut impl DrawingSurface) {
        let p0 = geometry.visible_start;
        let handle = geometry.curve_handle();
        let p2 = geometry.visible_end;
        match self.curve_mode {
            CurveMode::Quadratic => surface.quadratic_curve_to(handle.x, handle.y, p2.x, p2.y),
            CurveMode::Cubic => {
                let c1 = p0 + (handle - p0) * (2.0 / 3.0);
                let c2 = p2 + (handle - p2) * (2.0 / 3.0);
                surface.bezier_curve_to(c1.x, c1.y, c2.x, c2.y, p2.x, p2.y);
            }
        }
    }
}

fn draw_arrow(arrow: &Arrowhead, surface: &mut impl DrawingSurface) {
    surface.begin_path();
    surface.move_to(arrow.tip.x, arrow.tip.y);
    surface.line_to(arrow.left.x, arrow.left.y);
    surface.line_to(arrow.right.x, arrow.right.y);
    surface.close_path();
    surface.fill();
}
