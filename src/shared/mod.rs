//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Der Kanten-Stil wird von `core` (Krümmung neuer Kanten) und `render`
//! (Farben, Pfeil, Label) gleichermaßen gelesen.

pub mod options;

pub use options::EdgeStyle;
pub use options::{EDGE_CURVATURE, EDGE_PICK_TOLERANCE};
