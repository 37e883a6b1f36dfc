use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Starter configuration shipped with the repository; every field matches
/// the built-in defaults.
pub const EXAMPLE: &str = include_str!("../../hypercube.toml");

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Destination of the generated HTML document.
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default)]
    pub plot: PlotConfig,
    #[serde(default = "default_vertices")]
    pub vertices: Vec<VertexConfig>,
    #[serde(default = "default_edges")]
    pub edges: Vec<[usize; 2]>,
    #[serde(default = "default_annotations")]
    pub annotations: Vec<AnnotationConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: default_output(),
            plot: PlotConfig::default(),
            vertices: default_vertices(),
            edges: default_edges(),
            annotations: default_annotations(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PlotConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_x_label")]
    pub x_label: String,
    #[serde(default = "default_y_label")]
    pub y_label: String,
    #[serde(default = "default_z_label")]
    pub z_label: String,
    #[serde(default = "default_marker_size")]
    pub marker_size: f64,
    #[serde(default = "default_marker_color")]
    pub marker_color: String,
    #[serde(default = "default_line_width")]
    pub line_width: f64,
    #[serde(default = "default_line_color")]
    pub line_color: String,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            x_label: default_x_label(),
            y_label: default_y_label(),
            z_label: default_z_label(),
            marker_size: default_marker_size(),
            marker_color: default_marker_color(),
            line_width: default_line_width(),
            line_color: default_line_color(),
        }
    }
}

/// One cube corner: position plus the 4-bit label drawn at the marker.
#[derive(Debug, Deserialize)]
pub struct VertexConfig {
    pub position: [f64; 3],
    pub label: String,
}

/// One text callout: position plus opaque text.
#[derive(Debug, Deserialize)]
pub struct AnnotationConfig {
    pub position: [f64; 3],
    pub text: String,
}

// Defaults matching hypercube.toml
fn default_output() -> String {
    "hypercube_theory.html".to_string()
}
fn default_title() -> String {
    "3D Hypercube Visualization with XOR Operations for \"HYDRA\"".to_string()
}
fn default_x_label() -> String {
    "X-axis".to_string()
}
fn default_y_label() -> String {
    "Y-axis".to_string()
}
fn default_z_label() -> String {
    "Z-axis".to_string()
}
fn default_marker_size() -> f64 {
    5.0
}
fn default_marker_color() -> String {
    "red".to_string()
}
fn default_line_width() -> f64 {
    2.0
}
fn default_line_color() -> String {
    "blue".to_string()
}

fn default_vertices() -> Vec<VertexConfig> {
    let corners: [([f64; 3], &str); 8] = [
        ([1.0, 1.0, 1.0], "0100"),
        ([1.0, 1.0, -1.0], "0101"),
        ([1.0, -1.0, 1.0], "0100"),
        ([1.0, -1.0, -1.0], "0100"),
        ([-1.0, 1.0, 1.0], "0100"),
        ([-1.0, 1.0, -1.0], "1000"),
        ([-1.0, -1.0, 1.0], "1001"),
        ([-1.0, -1.0, -1.0], "0100"),
    ];
    corners
        .into_iter()
        .map(|(position, label)| VertexConfig {
            position,
            label: label.to_string(),
        })
        .collect()
}

fn default_edges() -> Vec<[usize; 2]> {
    vec![
        [0, 1],
        [0, 2],
        [0, 4],
        [1, 3],
        [1, 5],
        [2, 3],
        [2, 6],
        [3, 7],
        [4, 5],
        [4, 6],
        [5, 7],
        [6, 7],
    ]
}

fn default_annotations() -> Vec<AnnotationConfig> {
    let callouts: [([f64; 3], &str); 5] = [
        ([0.0, 2.0, 2.0], "XOR: 0100 XOR 1000 = 01001000 (H)"),
        ([0.0, 2.5, 2.5], "XOR: 0101 XOR 1001 = 01011001 (Y)"),
        ([0.0, 3.0, 3.0], "XOR: 0100 XOR 0100 = 01000100 (D)"),
        ([0.0, 3.5, 3.5], "XOR: 0100 XOR 0010 = 01010010 (R)"),
        ([0.0, 4.0, 4.0], "XOR: 0100 XOR 0001 = 01000001 (A)"),
    ];
    callouts
        .into_iter()
        .map(|(position, text)| AnnotationConfig {
            position,
            text: text.to_string(),
        })
        .collect()
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content =
            fs::read_to_string(path).map_err(|e| format!("Failed to read config file: {}", e))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Writes the starter configuration to the given path.
    pub fn write_example<P: AsRef<Path>>(path: P) -> Result<(), String> {
        fs::write(path.as_ref(), EXAMPLE)
            .map_err(|e| format!("Failed to write example config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_the_cube() {
        let config = Config::default();
        assert_eq!(config.vertices.len(), 8);
        assert_eq!(config.edges.len(), 12);
        assert_eq!(config.annotations.len(), 5);
        assert_eq!(config.output, "hypercube_theory.html");
        assert_eq!(config.plot.marker_size, 5.0);
        assert_eq!(config.plot.line_width, 2.0);
        assert_eq!(config.plot.marker_color, "red");
        assert_eq!(config.plot.line_color, "blue");

        // Every corner sits in {-1, 1}^3.
        for v in &config.vertices {
            for c in v.position {
                assert!(c == 1.0 || c == -1.0);
            }
            assert_eq!(v.label.len(), 4);
        }
    }

    #[test]
    fn example_config_matches_defaults() {
        let parsed: Config = toml::from_str(EXAMPLE).expect("example config must parse");
        let defaults = Config::default();
        assert_eq!(parsed.output, defaults.output);
        assert_eq!(parsed.plot.title, defaults.plot.title);
        assert_eq!(parsed.edges, defaults.edges);
        assert_eq!(parsed.vertices.len(), defaults.vertices.len());
        for (a, b) in parsed.vertices.iter().zip(&defaults.vertices) {
            assert_eq!(a.position, b.position);
            assert_eq!(a.label, b.label);
        }
        assert_eq!(parsed.annotations.len(), defaults.annotations.len());
        for (a, b) in parsed.annotations.iter().zip(&defaults.annotations) {
            assert_eq!(a.position, b.position);
            assert_eq!(a.text, b.text);
        }
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: Config = toml::from_str(
            r#"
            output = "out/cube.html"

            [plot]
            title = "Cube"
            "#,
        )
        .unwrap();
        assert_eq!(config.output, "out/cube.html");
        assert_eq!(config.plot.title, "Cube");
        assert_eq!(config.plot.x_label, "X-axis");
        assert_eq!(config.vertices.len(), 8);
        assert_eq!(config.edges.len(), 12);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let err = Config::load("no_such_config_file.toml").unwrap_err();
        assert!(err.contains("Failed to read config file"));
    }
}
