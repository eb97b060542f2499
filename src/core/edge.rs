//! Repräsentiert eine gekrümmte Kante zwischen zwei Nodes.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::geometry::CurveGeometry;
use super::hit_test;
use super::node::{Node, NodeId, NodeLookup};
use super::{EdgeError, Result};
use crate::render::{Color, DrawingSurface, EdgeRenderer};
use crate::shared::EDGE_CURVATURE;
use crate::shared::options::EDGE_COLOR_DEFAULT;

/// Kanten-ID, monoton vergeben von der Registry.
pub type EdgeId = u64;

/// Unabhängige Zustands-Flags einer Kante.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EdgeFlags {
    /// Pfeilspitze am Ende zeichnen
    pub directed: bool,
    /// Gewichts-Label zeichnen
    pub weighted: bool,
    /// Hervorgehoben (Selektion)
    pub selected: bool,
}

/// Gewicht einer Kante: Zahl oder freier Text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EdgeWeight {
    /// Numerisches Gewicht
    Number(f64),
    /// Text-Label
    Label(String),
}

impl Default for EdgeWeight {
    fn default() -> Self {
        Self::Number(0.0)
    }
}

impl fmt::Display for EdgeWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Label(s) => f.write_str(s),
        }
    }
}

impl From<f64> for EdgeWeight {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for EdgeWeight {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for EdgeWeight {
    fn from(value: &str) -> Self {
        Self::Label(value.to_string())
    }
}

impl From<String> for EdgeWeight {
    fn from(value: String) -> Self {
        Self::Label(value)
    }
}

/// Eine gekrümmte Kante zwischen zwei Nodes.
///
/// Die Kante hält nur Node-IDs. Die Geometrie ist ein Cache, den
/// [`Edge::update`] aus den aktuellen Node-Positionen neu berechnet.
#[derive(Debug, Clone)]
pub struct Edge {
    id: EdgeId,
    brother_id: Option<EdgeId>,
    start_id: NodeId,
    end_id: NodeId,
    /// Gewicht (Label-Text)
    pub weight: EdgeWeight,
    flags: EdgeFlags,
    /// Farbe, solange die Kante nicht selektiert ist
    pub color: Color,
    curvature: f32,
    geometry: Option<CurveGeometry>,
}

impl Edge {
    /// Erstellt eine Kante; Schleifen (Start = Ende) werden abgelehnt.
    pub fn new(
        id: EdgeId,
        start_id: NodeId,
        end_id: NodeId,
        weight: impl Into<EdgeWeight>,
    ) -> Result<Self> {
        if start_id == end_id {
            return Err(EdgeError::SelfLoop(start_id));
        }
        Ok(Self {
            id,
            brother_id: None,
            start_id,
            end_id,
            weight: weight.into(),
            flags: EdgeFlags::default(),
            color: EDGE_COLOR_DEFAULT,
            curvature: EDGE_CURVATURE,
            geometry: None,
        })
    }

    /// Setzt die Farbe (Builder).
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Setzt alle Flags (Builder).
    pub fn with_flags(mut self, flags: EdgeFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Setzt die Krümmung (Builder). Wirkt ab dem nächsten `update()`.
    pub fn with_curvature(mut self, curvature: f32) -> Self {
        self.curvature = curvature;
        self
    }

    /// Eindeutige ID der Kante.
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Setzt die ID (nur für Hosts, die IDs selbst verwalten).
    pub fn set_id(&mut self, id: EdgeId) {
        self.id = id;
    }

    /// ID der Gegenkante zwischen denselben Nodes, falls vorhanden.
    pub fn brother_id(&self) -> Option<EdgeId> {
        self.brother_id
    }

    /// Setzt oder löst die Verknüpfung zur Gegenkante.
    pub fn set_brother_id(&mut self, brother_id: Option<EdgeId>) {
        self.brother_id = brother_id;
    }

    /// Start-Node.
    pub fn start_id(&self) -> NodeId {
        self.start_id
    }

    /// End-Node.
    pub fn end_id(&self) -> NodeId {
        self.end_id
    }

    /// Alle Darstellungs-Flags.
    pub fn flags(&self) -> EdgeFlags {
        self.flags
    }

    /// Zeichnet die Kante eine Pfeilspitze?
    pub fn is_directed(&self) -> bool {
        self.flags.directed
    }

    /// Schaltet die Pfeilspitze.
    pub fn set_directed(&mut self, directed: bool) {
        self.flags.directed = directed;
    }

    /// Zeichnet die Kante ihr Gewichts-Label?
    pub fn is_weighted(&self) -> bool {
        self.flags.weighted
    }

    /// Schaltet das Gewichts-Label.
    pub fn set_weighted(&mut self, weighted: bool) {
        self.flags.weighted = weighted;
    }

    /// Ist die Kante selektiert?
    pub fn is_selected(&self) -> bool {
        self.flags.selected
    }

    /// Setzt den Selektionszustand.
    pub fn set_selected(&mut self, selected: bool) {
        self.flags.selected = selected;
    }

    /// Abstand des Kontrollpunkts von der Sehnenmitte.
    pub fn curvature(&self) -> f32 {
        self.curvature
    }

    /// Ändert die Krümmung. Wirkt ab dem nächsten `update()`.
    pub fn set_curvature(&mut self, curvature: f32) {
        self.curvature = curvature;
    }

    /// Prüft, ob die Kante die beiden Nodes verbindet (Richtung egal).
    pub fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.start_id == a && self.end_id == b) || (self.start_id == b && self.end_id == a)
    }

    /// Prüft, ob der Node Start oder Ende der Kante ist.
    pub fn touches(&self, node: NodeId) -> bool {
        self.start_id == node || self.end_id == node
    }

    /// Gecachte Geometrie; `None` vor dem ersten `update()` oder wenn degeneriert.
    pub fn geometry(&self) -> Option<&CurveGeometry> {
        self.geometry.as_ref()
    }

    /// Berechnet die Geometrie aus den aktuellen Node-Positionen neu.
    ///
    /// Gibt `false` zurück, wenn ein Node fehlt oder die Geometrie degeneriert
    /// ist. Die Kante wird dann nicht gezeichnet und nie getroffen.
    pub fn update(&mut self, nodes: &impl NodeLookup) -> bool {
        match (nodes.node(self.start_id), nodes.node(self.end_id)) {
            (Some(start), Some(end)) => self.update_from(start, end),
            _ => {
                log::debug!(
                    "Kante {}: Node {} oder {} nicht gefunden",
                    self.id,
                    self.start_id,
                    self.end_id
                );
                self.geometry = None;
                false
            }
        }
    }

    /// Wie [`Edge::update`], aber mit bereits aufgelösten Nodes.
    pub fn update_from(&mut self, start: &impl Node, end: &impl Node) -> bool {
        let computed = CurveGeometry::compute(
            start.position(),
            end.position(),
            start.radius(),
            end.radius(),
            self.curvature,
        );
        match computed {
            Ok(geometry) => {
                self.geometry = Some(geometry);
                true
            }
            Err(e) => {
                log::debug!("Kante {}: {}", self.id, e);
                self.geometry = None;
                false
            }
        }
    }

    /// Zeichnet die Kante; ohne gültige Geometrie passiert nichts.
    pub fn render(&self, renderer: &EdgeRenderer, surface: &mut impl DrawingSurface) {
        if let Some(geometry) = &self.geometry {
            renderer.render(self, geometry, surface);
        }
    }

    /// Prüft, ob `(x, y)` höchstens `max_dist` neben der gezeichneten Kurve liegt.
    pub fn is_hit(&self, x: f32, y: f32, max_dist: f32) -> bool {
        self.geometry
            .as_ref()
            .is_some_and(|geometry| hit_test::is_hit(geometry, x, y, max_dist))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CircleNode;
    use glam::Vec2;
    use std::collections::HashMap;

    fn nodes() -> HashMap<NodeId, CircleNode> {
        let mut nodes = HashMap::new();
        nodes.insert(1, CircleNode::try_new(Vec2::new(0.0, 0.0), 10.0).expect("Node"));
        nodes.insert(2, CircleNode::try_new(Vec2::new(100.0, 0.0), 10.0).expect("Node"));
        nodes
    }

    #[test]
    fn test_self_loop_rejected() {
        assert_eq!(Edge::new(1, 4, 4, 1).err(), Some(EdgeError::SelfLoop(4)));
    }

    #[test]
    fn test_update_is_idempotent() {
        let nodes = nodes();
        let mut edge = Edge::new(1, 1, 2, 5).expect("Kante");
        assert!(edge.update(&nodes));
        let first = *edge.geometry().expect("Geometrie");
        assert!(edge.update(&nodes));
        let second = *edge.geometry().expect("Geometrie");
        assert_eq!(first, second);
        assert_eq!(first.control_point.x.to_bits(), second.control_point.x.to_bits());
        assert_eq!(first.visible_end.y.to_bits(), second.visible_end.y.to_bits());
    }

    #[test]
    fn test_missing_node_clears_geometry() {
        let mut nodes = nodes();
        let mut edge = Edge::new(1, 1, 2, 5).expect("Kante");
        assert!(edge.update(&nodes));
        nodes.remove(&2);
        assert!(!edge.update(&nodes));
        assert!(edge.geometry().is_none());
        assert!(!edge.is_hit(50.0, 55.0, 5.0));
    }

    #[test]
    fn test_coincident_nodes_are_never_hit() {
        let mut nodes = nodes();
        nodes.insert(3, CircleNode::try_new(Vec2::new(0.0, 0.0), 5.0).expect("Node"));
        let mut edge = Edge::new(1, 1, 3, 1).expect("Kante");
        assert!(!edge.update(&nodes));
        assert!(!edge.is_hit(0.0, 0.0, 100.0));
    }

    #[test]
    fn test_siblings_bulge_to_opposite_sides() {
        let nodes = nodes();
        let mut forward = Edge::new(1, 1, 2, 1).expect("Kante");
        let mut backward = Edge::new(2, 2, 1, 1).expect("Kante");
        forward.set_brother_id(Some(2));
        backward.set_brother_id(Some(1));
        forward.update(&nodes);
        backward.update(&nodes);

        let f = forward.geometry().expect("Geometrie");
        let b = backward.geometry().expect("Geometrie");
        // Beide gegen dieselbe Sehnen-Gerade gemessen
        let side_f = f.side_of_chord(f.control_point.x, f.control_point.y);
        let side_b = f.side_of_chord(b.control_point.x, b.control_point.y);
        assert!(side_f > 0.0);
        assert!(side_b < 0.0);
    }

    #[test]
    fn test_curvature_change_applies_on_next_update() {
        let nodes = nodes();
        let mut edge = Edge::new(1, 1, 2, 1).expect("Kante").with_curvature(20.0);
        edge.update(&nodes);
        assert_eq!(edge.geometry().map(|g| g.control_point.y), Some(20.0));
        edge.set_curvature(-30.0);
        assert_eq!(edge.geometry().map(|g| g.control_point.y), Some(20.0));
        edge.update(&nodes);
        assert_eq!(edge.geometry().map(|g| g.control_point.y), Some(-30.0));
    }

    #[test]
    fn test_weight_display() {
        assert_eq!(EdgeWeight::from(5).to_string(), "5");
        assert_eq!(EdgeWeight::from(2.5).to_string(), "2.5");
        assert_eq!(EdgeWeight::from("A").to_string(), "A");
    }

    #[test]
    fn test_flags_are_independent() {
        let mut edge = Edge::new(1, 1, 2, 1).expect("Kante");
        edge.set_directed(true);
        edge.set_selected(true);
        assert!(edge.is_directed() && edge.is_selected() && !edge.is_weighted());
        edge.set_directed(false);
        assert!(!edge.is_directed() && edge.is_selected());
    }

    #[test]
    fn test_connects_ignores_direction() {
        let edge = Edge::new(1, 3, 7, 1).expect("Kante");
        assert!(edge.connects(3, 7));
        assert!(edge.connects(7, 3));
        assert!(!edge.connects(3, 8));
        assert!(edge.touches(7));
    }
}
