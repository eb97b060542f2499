//! Node-Schnittstelle: Kreis mit Position und Radius.
//!
//! Die Kanten besitzen ihre Nodes nicht. Sie halten nur IDs und lesen
//! Position/Radius bei jedem `update()` über einen [`NodeLookup`] nach.

use std::collections::HashMap;
use std::hash::BuildHasher;

use glam::Vec2;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{EdgeError, Result};

/// Node-ID, wie sie der umgebende Editor vergibt.
pub type NodeId = u64;

/// Kreisförmiger Node aus Sicht der Kanten (read-only).
pub trait Node {
    /// Aktueller Mittelpunkt
    fn position(&self) -> Vec2;
    /// Aktueller Radius
    fn radius(&self) -> f32;
}

impl<N: Node + ?Sized> Node for &N {
    fn position(&self) -> Vec2 {
        (**self).position()
    }

    fn radius(&self) -> f32 {
        (**self).radius()
    }
}

/// Löst Node-IDs zu Nodes auf (z.B. der Node-Speicher des Editors).
pub trait NodeLookup {
    /// Konkreter Node-Typ
    type Node: Node;

    /// Gibt den Node zur ID zurück, falls vorhanden.
    fn node(&self, id: NodeId) -> Option<&Self::Node>;
}

impl<N: Node, S: BuildHasher> NodeLookup for HashMap<NodeId, N, S> {
    type Node = N;

    fn node(&self, id: NodeId) -> Option<&N> {
        self.get(&id)
    }
}

impl<N: Node, S: BuildHasher> NodeLookup for IndexMap<NodeId, N, S> {
    type Node = N;

    fn node(&self, id: NodeId) -> Option<&N> {
        self.get(&id)
    }
}

/// Einfacher Kreis-Node für Hosts ohne eigenen Node-Typ.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleNode {
    /// Mittelpunkt in Welt-Koordinaten
    pub position: Vec2,
    radius: f32,
}

impl CircleNode {
    /// Erstellt einen Node; negative oder nicht-endliche Radien werden abgelehnt.
    pub fn try_new(position: Vec2, radius: f32) -> Result<Self> {
        validate_radius(radius)?;
        Ok(Self { position, radius })
    }

    /// Setzt einen neuen Radius (gleiche Prüfung wie `try_new`).
    pub fn set_radius(&mut self, radius: f32) -> Result<()> {
        validate_radius(radius)?;
        self.radius = radius;
        Ok(())
    }

    /// Verschiebt den Node (z.B. beim Drag im Editor).
    pub fn move_to(&mut self, position: Vec2) {
        self.position = position;
    }
}

impl Node for CircleNode {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn radius(&self) -> f32 {
        self.radius
    }
}

fn validate_radius(radius: f32) -> Result<()> {
    if radius.is_finite() && radius >= 0.0 {
        Ok(())
    } else {
        Err(EdgeError::InvalidRadius { radius })
    }
}

/// Klemmt Radien fremder Node-Typen auf einen gültigen Wert (NaN/negativ → 0).
pub(crate) fn sanitize_radius(radius: f32) -> f32 {
    if radius.is_finite() && radius >= 0.0 {
        radius
    } else {
        log::debug!("Ungueltiger Node-Radius {} wird auf 0 geklemmt", radius);
        0.0
    }
}
