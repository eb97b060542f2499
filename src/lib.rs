//! Gekrümmte Kanten für interaktive Graph-Editoren.
//!
//! Eine Kante verbindet die Ränder zweier kreisförmiger Nodes mit einer
//! quadratischen Kurve, zeichnet optional Pfeilspitze und Gewichts-Label und
//! beantwortet analytisch, ob ein Mausklick die Kurve trifft.

pub mod core;
pub mod render;
pub mod shared;

pub use crate::core::{
    CircleNode, CurveGeometry, Edge, EdgeError, EdgeFlags, EdgeId, EdgeRegistry, EdgeWeight,
    Node, NodeId, NodeLookup,
};
pub use crate::render::{DrawingSurface, EdgeRenderer, RecordingSurface, SurfaceCapabilities};
pub use crate::shared::EdgeStyle;
