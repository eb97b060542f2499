//! `DrawingSurface`-Adapter für `egui::Painter`.
//!
//! egui kennt keine Pfade mit Kurvensegmenten; Bézier-Kurven werden hier in
//! Liniensegmente zerlegt und beim `stroke()`/`fill()` als Shape abgegeben.

use egui::{Align, Align2, Color32, FontId, Painter, Pos2, Shape, Stroke};
use glam::Vec2;

use super::surface::{
    Color, DrawingSurface, SurfaceCapabilities, TextAlign, TextBaseline, font_size_from_css,
};
use crate::core::geometry::{cubic_bezier, quadratic_bezier};

/// Anzahl Liniensegmente pro Kurve.
const CURVE_SEGMENTS: usize = 24;
/// Schriftgröße, falls die CSS-Angabe keine enthält.
const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Zeichenfläche über einem `egui::Painter`.
pub struct EguiSurface<'a> {
    painter: &'a Painter,
    /// Verschiebung Welt → Bildschirm (z.B. `rect.min` des Viewports)
    offset: Vec2,
    path: Vec<Pos2>,
    closed: bool,
    stroke_color: Color32,
    fill_color: Color32,
    line_width: f32,
    font_size: f32,
    align: TextAlign,
    baseline: TextBaseline,
}

impl<'a> EguiSurface<'a> {
    /// Erstellt den Adapter; Koordinaten werden unverändert übernommen.
    pub fn new(painter: &'a Painter) -> Self {
        Self::with_offset(painter, Vec2::ZERO)
    }

    /// Erstellt den Adapter mit einer festen Verschiebung aller Punkte.
    pub fn with_offset(painter: &'a Painter, offset: Vec2) -> Self {
        Self {
            painter,
            offset,
            path: Vec::new(),
            closed: false,
            stroke_color: Color32::BLACK,
            fill_color: Color32::BLACK,
            line_width: 1.0,
            font_size: DEFAULT_FONT_SIZE,
            align: TextAlign::default(),
            baseline: TextBaseline::default(),
        }
    }

    fn to_screen(&self, x: f32, y: f32) -> Pos2 {
        egui::pos2(x + self.offset.x, y + self.offset.y)
    }

    fn current_point(&self) -> Option<Vec2> {
        self.path
            .last()
            .map(|p| Vec2::new(p.x - self.offset.x, p.y - self.offset.y))
    }

    fn push_curve(&mut self, point_at: impl Fn(f32) -> Vec2) {
        for step in 1..=CURVE_SEGMENTS {
            let p = point_at(step as f32 / CURVE_SEGMENTS as f32);
            self.path.push(self.to_screen(p.x, p.y));
        }
    }
}

fn to_color32(color: Color) -> Color32 {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        channel(color[3]),
    )
}

fn anchor(align: TextAlign, baseline: TextBaseline) -> Align2 {
    let horizontal = match align {
        TextAlign::Left => Align::Min,
        TextAlign::Center => Align::Center,
        TextAlign::Right => Align::Max,
    };
    // egui hat keine Grundlinie; Alphabetic wird wie Bottom behandelt
    let vertical = match baseline {
        TextBaseline::Top => Align::Min,
        TextBaseline::Middle => Align::Center,
        TextBaseline::Bottom | TextBaseline::Alphabetic => Align::Max,
    };
    Align2([horizontal, vertical])
}

impl DrawingSurface for EguiSurface<'_> {
    fn capabilities(&self) -> SurfaceCapabilities {
        SurfaceCapabilities::ALL
    }

    fn begin_path(&mut self) {
        self.path.clear();
        self.closed = false;
    }

    fn move_to(&mut self, x: f32, y: f32) {
        // egui-Shapes kennen keine Teilpfade; ein neues move_to beginnt neu
        self.path.clear();
        self.path.push(self.to_screen(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path.push(self.to_screen(x, y));
    }

    fn close_path(&mut self) {
        self.closed = true;
    }

    fn stroke(&mut self) {
        if self.path.len() < 2 {
            return;
        }
        let stroke = Stroke::new(self.line_width, self.stroke_color);
        let points = self.path.clone();
        let shape = if self.closed {
            Shape::closed_line(points, stroke)
        } else {
            Shape::line(points, stroke)
        };
        self.painter.add(shape);
    }

    fn fill(&mut self) {
        if self.path.len() < 3 {
            return;
        }
        self.painter.add(Shape::convex_polygon(
            self.path.clone(),
            self.fill_color,
            Stroke::NONE,
        ));
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.stroke_color = to_color32(color);
    }

    fn set_fill_style(&mut self, color: Color) {
        self.fill_color = to_color32(color);
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn quadratic_curve_to(&mut self, cpx: f32, cpy: f32, x: f32, y: f32) {
        let to = Vec2::new(x, y);
        let from = self.current_point().unwrap_or(to);
        let control = Vec2::new(cpx, cpy);
        self.push_curve(|t| quadratic_bezier(from, control, to, t));
    }

    fn bezier_curve_to(&mut self, cp1x: f32, cp1y: f32, cp2x: f32, cp2y: f32, x: f32, y: f32) {
        let to = Vec2::new(x, y);
        let from = self.current_point().unwrap_or(to);
        let c1 = Vec2::new(cp1x, cp1y);
        let c2 = Vec2::new(cp2x, cp2y);
        self.push_curve(|t| cubic_bezier(from, c1, c2, to, t));
    }

    fn set_font(&mut self, font: &str) {
        self.font_size = font_size_from_css(font).unwrap_or(DEFAULT_FONT_SIZE);
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.align = align;
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.baseline = baseline;
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.painter.text(
            self.to_screen(x, y),
            anchor(self.align, self.baseline),
            text,
            FontId::proportional(self.font_size),
            self.fill_color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_conversion_clamps() {
        assert_eq!(to_color32([0.0, 0.0, 0.0, 1.0]), Color32::BLACK);
        assert_eq!(
            to_color32([2.0, -1.0, 1.0, 1.0]),
            Color32::from_rgba_unmultiplied(255, 0, 255, 255)
        );
    }

    #[test]
    fn test_label_anchor_center_bottom() {
        assert_eq!(
            anchor(TextAlign::Center, TextBaseline::Bottom),
            Align2::CENTER_BOTTOM
        );
        assert_eq!(anchor(TextAlign::Left, TextBaseline::Top), Align2::LEFT_TOP);
    }
}
