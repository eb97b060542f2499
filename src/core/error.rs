//! Fehlertypen der Kanten-Geometrie und der Kanten-Registry.

use super::{EdgeId, NodeId};

/// Alle Fehler, die beim Aufbau, Zeichnen und Verwalten von Kanten auftreten.
///
/// Geometrie-Fehler werden nie mitten im Frame weitergereicht: eine Kante mit
/// degenerierter Geometrie wird einfach nicht gezeichnet und nie getroffen.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EdgeError {
    /// Start und Ende fallen zusammen oder die Parabel-Anpassung ist singulär.
    #[error("degenerierte Kantengeometrie: {0}")]
    DegenerateGeometry(&'static str),
    /// Negativer oder nicht-endlicher Node-Radius.
    #[error("ungueltiger Node-Radius: {radius}")]
    InvalidRadius { radius: f32 },
    /// Zeichenfläche ohne benötigte Primitive.
    #[error("Zeichenflaeche unterstuetzt keine {0}")]
    MissingCapability(&'static str),
    /// Kante mit identischem Start- und End-Node.
    #[error("Schleifen-Kanten werden nicht unterstuetzt (Node {0})")]
    SelfLoop(NodeId),
    /// Zwischen den Nodes existiert bereits eine passende Kante.
    #[error("Kante {start} -> {end} existiert bereits")]
    DuplicateEdge { start: NodeId, end: NodeId },
    /// Kanten-ID bereits vergeben.
    #[error("Kanten-ID {0} ist bereits vergeben")]
    DuplicateId(EdgeId),
    /// Unbekannte Kanten-ID.
    #[error("unbekannte Kante {0}")]
    UnknownEdge(EdgeId),
    /// Unbekannte Node-ID.
    #[error("unbekannter Node {0}")]
    UnknownNode(NodeId),
}

/// Result-Alias für Kanten-Operationen.
pub type Result<T> = std::result::Result<T, EdgeError>;
