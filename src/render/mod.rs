//! Rendering von Kanten auf eine abstrakte Zeichenfläche.
//!
//! Der Renderer erzeugt nur Draw-Calls; welche Zeichenfläche sie ausführt
//! (Canvas, egui, Aufzeichnung für Tests), entscheidet der Host.

mod edge_renderer;
#[cfg(feature = "egui")]
mod egui_surface;
mod recording;
mod surface;

pub use edge_renderer::{Arrowhead, CurveMode, EdgeRenderer, arrowhead, label_anchor};
#[cfg(feature = "egui")]
pub use egui_surface::EguiSurface;
pub use recording::{DrawCommand, RecordingSurface};
pub use surface::{
    Color, DrawingSurface, SurfaceCapabilities, TextAlign, TextBaseline, font_size_from_css,
};
