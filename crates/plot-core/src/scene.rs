// File: crates/plot-core/src/scene.rs
// Summary: Retained scene of drawable primitives (rects, paths, text) keyed by node id.

use crate::geometry::Point;
use crate::theme::Color;

/// Handle to a scene primitive. Ids are unique for the life of the scene and
/// never reused, so a stale id after removal is simply unknown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

/// How a path's point sequence is interpolated by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interpolation {
    Linear,
    /// Cubic B-spline basis, the smoothing the density curve uses.
    Basis,
}

#[derive(Clone, Debug)]
pub struct RectNode {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub fill: Color,
    pub stroke: Option<Stroke>,
    pub opacity: f64,
}

#[derive(Clone, Debug)]
pub struct PathNode {
    pub points: Vec<Point>,
    pub interpolation: Interpolation,
    pub closed: bool,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
    pub opacity: f64,
}

#[derive(Clone, Debug)]
pub struct TextNode {
    pub x: f64,
    pub y: f64,
    pub anchor: Anchor,
    /// One entry per rendered line (the legend wraps onto two).
    pub lines: Vec<String>,
    pub font_size: f64,
    pub fill: Color,
    /// Pixel budget the text must fit into (rendered as textLength).
    pub length_constraint: Option<f64>,
}

#[derive(Clone, Debug)]
pub enum Node {
    Rect(RectNode),
    Path(PathNode),
    Text(TextNode),
}

/// Ordered, mutable store of primitives. Insertion order is paint order.
#[derive(Default)]
pub struct Scene {
    nodes: Vec<(NodeId, Node)>,
    next_id: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc(&mut self) -> NodeId {
        self.next_id += 1;
        NodeId(self.next_id)
    }

    pub fn insert_rect(&mut self, rect: RectNode) -> NodeId {
        let id = self.alloc();
        self.nodes.push((id, Node::Rect(rect)));
        id
    }

    pub fn insert_path(&mut self, path: PathNode) -> NodeId {
        let id = self.alloc();
        self.nodes.push((id, Node::Path(path)));
        id
    }

    pub fn insert_text(&mut self, text: TextNode) -> NodeId {
        let id = self.alloc();
        self.nodes.push((id, Node::Text(text)));
        id
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|(n, _)| *n == id).map(|(_, node)| node)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|(n, _)| *n == id).map(|(_, node)| node)
    }

    pub fn rect(&self, id: NodeId) -> Option<&RectNode> {
        match self.node(id) {
            Some(Node::Rect(r)) => Some(r),
            _ => None,
        }
    }

    pub fn rect_mut(&mut self, id: NodeId) -> Option<&mut RectNode> {
        match self.node_mut(id) {
            Some(Node::Rect(r)) => Some(r),
            _ => None,
        }
    }

    pub fn path(&self, id: NodeId) -> Option<&PathNode> {
        match self.node(id) {
            Some(Node::Path(p)) => Some(p),
            _ => None,
        }
    }

    pub fn path_mut(&mut self, id: NodeId) -> Option<&mut PathNode> {
        match self.node_mut(id) {
            Some(Node::Path(p)) => Some(p),
            _ => None,
        }
    }

    pub fn text_mut(&mut self, id: NodeId) -> Option<&mut TextNode> {
        match self.node_mut(id) {
            Some(Node::Text(t)) => Some(t),
            _ => None,
        }
    }

    pub fn remove(&mut self, id: NodeId) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|(n, _)| *n != id);
        self.nodes.len() != before
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Primitives in paint order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().map(|(id, node)| (*id, node))
    }
}
