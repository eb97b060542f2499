//! Kanten-Registry: verwaltet alle Kanten eines Graphen, paart Gegenkanten
//! und treibt Update, Rendering und Picking pro Frame.

use glam::Vec2;
use indexmap::IndexMap;

use super::edge::{Edge, EdgeFlags, EdgeId, EdgeWeight};
use super::node::{NodeId, NodeLookup};
use super::{EdgeError, Result};
use crate::render::{DrawingSurface, EdgeRenderer};

/// Container für alle Kanten, in Einfügereihenfolge.
///
/// Die Reihenfolge bestimmt auch die Zeichenreihenfolge: später eingefügte
/// Kanten liegen oben und werden beim Picking zuerst geprüft.
#[derive(Debug, Clone)]
pub struct EdgeRegistry {
    edges: IndexMap<EdgeId, Edge>,
    next_id: EdgeId,
    curvature: f32,
}

impl Default for EdgeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeRegistry {
    /// Erstellt eine leere Registry mit Standard-Krümmung.
    pub fn new() -> Self {
        Self::with_curvature(crate::shared::EDGE_CURVATURE)
    }

    /// Erstellt eine leere Registry; neue Kanten erhalten `curvature`.
    pub fn with_curvature(curvature: f32) -> Self {
        Self {
            edges: IndexMap::new(),
            next_id: 1,
            curvature,
        }
    }

    /// Verbindet zwei Nodes.
    ///
    /// Existiert bereits genau eine Kante zwischen den Nodes, wird die neue
    /// Kante ihre Gegenkante: ungerichtet immer in Gegenrichtung, gerichtet
    /// nur wenn die bestehende Kante von `end` nach `start` läuft.
    pub fn connect(
        &mut self,
        start: NodeId,
        end: NodeId,
        weight: impl Into<EdgeWeight>,
        directed: bool,
    ) -> Result<EdgeId> {
        if start == end {
            return Err(EdgeError::SelfLoop(start));
        }

        let existing: Vec<EdgeId> = self
            .edges
            .values()
            .filter(|e| e.connects(start, end))
            .map(Edge::id)
            .collect();

        let (start, end, brother) = match existing.as_slice() {
            [] => (start, end, None),
            [other_id] => {
                let other = &self.edges[other_id];
                if !directed {
                    (other.end_id(), other.start_id(), Some(*other_id))
                } else if other.start_id() == end {
                    (start, end, Some(*other_id))
                } else {
                    return Err(EdgeError::DuplicateEdge { start, end });
                }
            }
            _ => return Err(EdgeError::DuplicateEdge { start, end }),
        };

        let id = self.next_id;
        let flags = EdgeFlags {
            directed,
            ..EdgeFlags::default()
        };
        let mut edge = Edge::new(id, start, end, weight)?
            .with_flags(flags)
            .with_curvature(self.curvature);
        edge.set_brother_id(brother);
        if let Some(other) = brother.and_then(|b| self.edges.get_mut(&b)) {
            other.set_brother_id(Some(id));
            other.set_directed(directed);
        }

        self.edges.insert(id, edge);
        self.next_id += 1;
        log::debug!("Kante {} angelegt: {} -> {} (Gegenkante {:?})", id, start, end, brother);
        Ok(id)
    }

    /// Wie [`connect`](Self::connect), prüft aber vorher, dass beide Nodes
    /// in `nodes` existieren.
    pub fn connect_nodes(
        &mut self,
        nodes: &impl NodeLookup,
        start: NodeId,
        end: NodeId,
        weight: impl Into<EdgeWeight>,
        directed: bool,
    ) -> Result<EdgeId> {
        for id in [start, end] {
            if nodes.node(id).is_none() {
                log::warn!("Kante {} -> {} abgelehnt: Node {} fehlt", start, end, id);
                return Err(EdgeError::UnknownNode(id));
            }
        }
        self.connect(start, end, weight, directed)
    }

    /// Fügt eine Kante mit bereits vergebener ID ein (z.B. Undo/Restore).
    ///
    /// Ist die angegebene Gegenkante noch mit einer anderen Kante gepaart,
    /// verliert diese ihre Verknüpfung.
    pub fn insert_with_id(&mut self, edge: Edge) -> Result<()> {
        let id = edge.id();
        if self.edges.contains_key(&id) {
            return Err(EdgeError::DuplicateId(id));
        }
        let mut previous = None;
        if let Some(other) = edge.brother_id().and_then(|b| self.edges.get_mut(&b)) {
            previous = other.brother_id().filter(|old| *old != id);
            other.set_brother_id(Some(id));
        }
        if let Some(old) = previous.and_then(|old| self.edges.get_mut(&old)) {
            log::debug!("Kante {} verliert Gegenkante an {}", old.id(), id);
            old.set_brother_id(None);
        }
        self.next_id = self.next_id.max(id.saturating_add(1));
        self.edges.insert(id, edge);
        Ok(())
    }

    /// Entfernt eine Kante; die Gegenkante wird wieder zur einfachen Kante.
    pub fn remove(&mut self, id: EdgeId) -> Result<Edge> {
        let edge = self
            .edges
            .shift_remove(&id)
            .ok_or(EdgeError::UnknownEdge(id))?;
        if let Some(other) = edge.brother_id().and_then(|b| self.edges.get_mut(&b)) {
            if other.brother_id() == Some(id) {
                other.set_brother_id(None);
            }
        }
        Ok(edge)
    }

    /// Entfernt alle selektierten Kanten und gibt sie zurück.
    pub fn remove_selected(&mut self) -> Vec<Edge> {
        self.remove_where(Edge::is_selected)
    }

    /// Entfernt alle Kanten am Node (z.B. weil der Node gelöscht wurde).
    pub fn remove_incident(&mut self, node: NodeId) -> Vec<Edge> {
        self.remove_where(|e| e.touches(node))
    }

    fn remove_where(&mut self, predicate: impl Fn(&Edge) -> bool) -> Vec<Edge> {
        let ids: Vec<EdgeId> = self
            .edges
            .values()
            .filter(|e| predicate(*e))
            .map(Edge::id)
            .collect();
        ids.into_iter().filter_map(|id| self.remove(id).ok()).collect()
    }

    /// Kante zur ID.
    pub fn get(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(&id)
    }

    /// Veränderbare Kante zur ID.
    pub fn get_mut(&mut self, id: EdgeId) -> Option<&mut Edge> {
        self.edges.get_mut(&id)
    }

    /// Löst die `brother_id` einer Kante auf.
    pub fn sibling(&self, id: EdgeId) -> Option<&Edge> {
        self.edges
            .get(&id)
            .and_then(Edge::brother_id)
            .and_then(|brother_id| self.edges.get(&brother_id))
    }

    /// Alle Kanten zwischen zwei Nodes (beide Richtungen).
    pub fn between(&self, a: NodeId, b: NodeId) -> impl Iterator<Item = &Edge> {
        self.edges.values().filter(move |e| e.connects(a, b))
    }

    /// Alle Kanten in Zeichenreihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Anzahl der Kanten.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Gibt `true` zurück, wenn keine Kante existiert.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Schaltet die Pfeilspitzen aller Kanten (graph-weite Einstellung).
    pub fn set_directed_all(&mut self, directed: bool) {
        self.edges.values_mut().for_each(|e| e.set_directed(directed));
    }

    /// Schaltet die Gewichts-Labels aller Kanten.
    pub fn set_weighted_all(&mut self, weighted: bool) {
        self.edges.values_mut().for_each(|e| e.set_weighted(weighted));
    }

    /// Aktualisiert die Geometrie aller Kanten; gibt die Anzahl gültiger zurück.
    pub fn update_all(&mut self, nodes: &impl NodeLookup) -> usize {
        self.edges
            .values_mut()
            .map(|e| e.update(nodes))
            .filter(|ok| *ok)
            .count()
    }

    /// Zeichnet alle Kanten in Einfügereihenfolge.
    pub fn render_all(&self, renderer: &EdgeRenderer, surface: &mut impl DrawingSurface) {
        for edge in self.edges.values() {
            edge.render(renderer, surface);
        }
    }

    /// Oberste Kante unter `(x, y)` innerhalb von `tolerance`.
    pub fn pick(&self, x: f32, y: f32, tolerance: f32) -> Option<EdgeId> {
        self.edges
            .values()
            .rev()
            .find(|e| e.is_hit(x, y, tolerance))
            .map(Edge::id)
    }

    /// Selektiert die Kante unter dem Punkt; gibt ihre ID zurück.
    pub fn select_at(&mut self, x: f32, y: f32, tolerance: f32) -> Option<EdgeId> {
        self.set_selected_at(x, y, tolerance, |_| true)
    }

    /// Hebt die Selektion der Kante unter dem Punkt auf.
    pub fn deselect_at(&mut self, x: f32, y: f32, tolerance: f32) -> Option<EdgeId> {
        self.set_selected_at(x, y, tolerance, |_| false)
    }

    /// Kehrt die Selektion der Kante unter dem Punkt um.
    pub fn toggle_at(&mut self, x: f32, y: f32, tolerance: f32) -> Option<EdgeId> {
        self.set_selected_at(x, y, tolerance, |selected| !selected)
    }

    fn set_selected_at(
        &mut self,
        x: f32,
        y: f32,
        tolerance: f32,
        next: impl Fn(bool) -> bool,
    ) -> Option<EdgeId> {
        let id = self.pick(x, y, tolerance)?;
        let edge = self.edges.get_mut(&id)?;
        edge.set_selected(next(edge.is_selected()));
        Some(id)
    }

    /// Selektiert alle Kanten, deren beide Node-Mittelpunkte echt im Rechteck
    /// liegen. Gibt die Anzahl neu selektierter Kanten zurück.
    pub fn select_in_rect(&mut self, corner_a: Vec2, corner_b: Vec2) -> usize {
        let min = corner_a.min(corner_b);
        let max = corner_a.max(corner_b);
        let inside = |p: Vec2| p.x > min.x && p.x < max.x && p.y > min.y && p.y < max.y;

        let mut count = 0;
        for edge in self.edges.values_mut() {
            let Some(geometry) = edge.geometry() else {
                continue;
            };
            if inside(geometry.start) && inside(geometry.end) && !edge.is_selected() {
                edge.set_selected(true);
                count += 1;
            }
        }
        count
    }

    /// Hebt alle Selektionen auf.
    pub fn deselect_all(&mut self) {
        self.edges.values_mut().for_each(|e| e.set_selected(false));
    }

    /// Anzahl selektierter Kanten.
    pub fn selected_count(&self) -> usize {
        self.edges.values().filter(|e| e.is_selected()).count()
    }

    /// Nächste freie ID (für Hosts, die Kanten selbst erzeugen).
    pub fn next_id(&self) -> EdgeId {
        self.next_id
    }
}
