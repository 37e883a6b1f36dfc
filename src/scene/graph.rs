use nalgebra::Point3;

/// A corner of the cube graph: a position in {-1, 1}^3 plus its label.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    /// Position in world space.
    pub position: Point3<f64>,
    /// 4-character binary label shown next to the marker.
    pub label: String,
}

impl Vertex {
    pub fn new(position: Point3<f64>, label: impl Into<String>) -> Self {
        Self {
            position,
            label: label.into(),
        }
    }
}

/// An unordered pair of vertex indices describing one cube edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    pub fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }
}

/// A free-standing text callout at a fixed 3D position.
///
/// The text is opaque to the program; the default set carries pre-computed
/// "XOR" strings that are never evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub position: Point3<f64>,
    pub text: String,
}

impl Annotation {
    pub fn new(position: Point3<f64>, text: impl Into<String>) -> Self {
        Self {
            position,
            text: text.into(),
        }
    }
}
