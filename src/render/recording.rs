//! Zeichenfläche, die alle Aufrufe als Befehlsliste protokolliert.
//!
//! Für Tests und Debug-Ausgaben von Hosts: statt zu zeichnen wird die
//! Reihenfolge der Draw-Calls festgehalten.

use glam::Vec2;

use super::surface::{Color, DrawingSurface, SurfaceCapabilities, TextAlign, TextBaseline};

/// Ein protokollierter Draw-Call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    BeginPath,
    MoveTo(Vec2),
    LineTo(Vec2),
    QuadraticCurveTo { control: Vec2, to: Vec2 },
    BezierCurveTo { control1: Vec2, control2: Vec2, to: Vec2 },
    ClosePath,
    Stroke,
    Fill,
    SetStrokeStyle(Color),
    SetFillStyle(Color),
    SetLineWidth(f32),
    SetFont(String),
    SetTextAlign(TextAlign),
    SetTextBaseline(TextBaseline),
    FillText { text: String, position: Vec2 },
}

/// Protokollierende Zeichenfläche.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    capabilities: SurfaceCapabilities,
}

impl RecordingSurface {
    /// Erstellt eine Fläche mit allen Primitiven.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt eine Fläche, die nur die angegebenen Primitive anmeldet.
    pub fn with_capabilities(capabilities: SurfaceCapabilities) -> Self {
        Self {
            commands: Vec::new(),
            capabilities,
        }
    }

    /// Alle bisher protokollierten Befehle.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Leert das Protokoll (z.B. zwischen zwei Frames).
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Anzahl der `fill()`-Aufrufe (Pfeilspitzen).
    pub fn fill_count(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::Fill))
    }

    /// Anzahl der `stroke()`-Aufrufe (Kurven).
    pub fn stroke_count(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::Stroke))
    }

    /// Alle ausgegebenen Texte mit Ankerpunkt.
    pub fn texts(&self) -> Vec<(&str, Vec2)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, position } => Some((text.as_str(), *position)),
                _ => None,
            })
            .collect()
    }

    fn count(&self, predicate: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| predicate(*c)).count()
    }
}

impl DrawingSurface for RecordingSurface {
    fn capabilities(&self) -> SurfaceCapabilities {
        self.capabilities
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::MoveTo(Vec2::new(x, y)));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::LineTo(Vec2::new(x, y)));
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetStrokeStyle(color));
    }

    fn set_fill_style(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetFillStyle(color));
    }

    fn set_line_width(&mut self, width: f32) {
        self.commands.push(DrawCommand::SetLineWidth(width));
    }

    fn quadratic_curve_to(&mut self, cpx: f32, cpy: f32, x: f32, y: f32) {
        self.commands.push(DrawCommand::QuadraticCurveTo {
            control: Vec2::new(cpx, cpy),
            to: Vec2::new(x, y),
        });
    }

    fn bezier_curve_to(&mut self, cp1x: f32, cp1y: f32, cp2x: f32, cp2y: f32, x: f32, y: f32) {
        self.commands.push(DrawCommand::BezierCurveTo {
            control1: Vec2::new(cp1x, cp1y),
            control2: Vec2::new(cp2x, cp2y),
            to: Vec2::new(x, y),
        });
    }

    fn set_font(&mut self, font: &str) {
        self.commands.push(DrawCommand::SetFont(font.to_string()));
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.commands.push(DrawCommand::SetTextAlign(align));
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.commands.push(DrawCommand::SetTextBaseline(baseline));
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            position: Vec2::new(x, y),
        });
    }
}
