use crate::io::config::Config;
use crate::scene::context::{LineSegment, Marker, PlotStyle, Scene};
use crate::scene::graph::{Annotation, Edge, Vertex};
use log::info;
use nalgebra::Point3;

/// Builds the renderable scene from a config.
///
/// Edge indices are runtime input, so they are validated here rather than
/// trusted at render time.
pub fn build_scene(config: &Config) -> Result<Scene, String> {
    // 1. Vertices
    let vertices: Vec<Vertex> = config
        .vertices
        .iter()
        .map(|v| Vertex::new(Point3::from(v.position), v.label.clone()))
        .collect();

    // 2. Edges, resolved into concrete line segments
    let mut edges: Vec<Edge> = Vec::with_capacity(config.edges.len());
    for (i, pair) in config.edges.iter().enumerate() {
        let edge = Edge::new(pair[0], pair[1]);
        if edge.a >= vertices.len() || edge.b >= vertices.len() {
            return Err(format!(
                "Edge #{} [{}, {}] references a vertex outside 0..{}",
                i,
                edge.a,
                edge.b,
                vertices.len()
            ));
        }
        if edge.a == edge.b {
            return Err(format!(
                "Edge #{} [{}, {}] is a self-loop",
                i, edge.a, edge.b
            ));
        }
        edges.push(edge);
    }
    let segments: Vec<LineSegment> = edges
        .iter()
        .map(|e| LineSegment {
            start: vertices[e.a].position,
            end: vertices[e.b].position,
        })
        .collect();

    // 3. Markers, labelled like "0100 (1, 1, 1)"
    let markers: Vec<Marker> = vertices
        .iter()
        .map(|v| Marker {
            position: v.position,
            text: format!(
                "{} ({}, {}, {})",
                v.label, v.position.x, v.position.y, v.position.z
            ),
        })
        .collect();

    // 4. Annotations
    let annotations: Vec<Annotation> = config
        .annotations
        .iter()
        .map(|a| Annotation::new(Point3::from(a.position), a.text.clone()))
        .collect();

    info!(
        "Scene assembled: {} markers, {} segments, {} annotations.",
        markers.len(),
        segments.len(),
        annotations.len()
    );

    Ok(Scene {
        title: config.plot.title.clone(),
        axis_labels: [
            config.plot.x_label.clone(),
            config.plot.y_label.clone(),
            config.plot.z_label.clone(),
        ],
        style: PlotStyle {
            marker_size: config.plot.marker_size,
            marker_color: config.plot.marker_color.clone(),
            line_width: config.plot.line_width,
            line_color: config.plot.line_color.clone(),
        },
        markers,
        segments,
        annotations,
    })
}
