use crate::scene::graph::Annotation;
use nalgebra::Point3;

/// A vertex marker with its rendered label text ("<label> (<x>, <y>, <z>)").
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub position: Point3<f64>,
    pub text: String,
}

/// A line segment with both endpoints already resolved to coordinates.
///
/// Endpoints are copied from the vertex table when the scene is built, so
/// the drawable never re-derives geometry at render time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Point3<f64>,
    pub end: Point3<f64>,
}

/// Cosmetic settings forwarded to the HTML renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotStyle {
    pub marker_size: f64,
    pub marker_color: String,
    pub line_width: f64,
    pub line_color: String,
}

/// Holds all drawables and scene-level metadata required for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub title: String,
    pub axis_labels: [String; 3],
    pub style: PlotStyle,
    pub markers: Vec<Marker>,
    pub segments: Vec<LineSegment>,
    pub annotations: Vec<Annotation>,
}
