//! Core-Domänentypen: Nodes, Kanten, Kurven-Geometrie, Hit-Test und Registry.

pub mod edge;
pub mod edge_registry;
pub mod error;
pub mod geometry;
pub mod hit_test;
pub mod node;
pub mod vector;

pub use edge::{Edge, EdgeFlags, EdgeId, EdgeWeight};
pub use edge_registry::EdgeRegistry;
pub use error::{EdgeError, Result};
pub use geometry::CurveGeometry;
pub use hit_test::{HIT_EPSILON, ParabolaFrame, float_tolerance, is_hit};
pub use node::{CircleNode, Node, NodeId, NodeLookup};
pub use vector::{Vector2, VectorExt};
