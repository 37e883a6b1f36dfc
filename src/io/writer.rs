use log::debug;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Raised when the output document cannot be persisted.
#[derive(Debug)]
pub struct OutputWriteError {
    path: PathBuf,
    source: std::io::Error,
}

impl OutputWriteError {
    /// The destination that could not be written.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for OutputWriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed to write '{}': {}",
            self.path.display(),
            self.source
        )
    }
}

impl std::error::Error for OutputWriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Persists the rendered document at `path`.
///
/// The content goes to a sibling staging file first and is renamed into
/// place, so the destination is either the complete document or untouched.
pub fn write_html<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), OutputWriteError> {
    let path = path.as_ref();
    let staging = staging_path(path);
    debug!("Staging output in '{}'", staging.display());

    let result = fs::write(&staging, contents).and_then(|_| fs::rename(&staging, path));
    if let Err(source) = result {
        let _ = fs::remove_file(&staging);
        return Err(OutputWriteError {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn writes_the_complete_document() {
        let dir = env::temp_dir().join("hypercube_viz_writer_ok");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("out.html");

        write_html(&path, "<html></html>").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "<html></html>");
        assert!(!staging_path(&path).exists());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn overwrites_an_existing_file() {
        let dir = env::temp_dir().join("hypercube_viz_writer_overwrite");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("out.html");

        write_html(&path, "first").unwrap();
        write_html(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn persists_the_rendered_default_scene() {
        use crate::io::config::Config;
        use crate::render::html::render_document;
        use crate::scene::loader::build_scene;

        let dir = env::temp_dir().join("hypercube_viz_writer_end_to_end");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("hypercube.html");

        let scene = build_scene(&Config::default()).unwrap();
        let html = render_document(&scene);
        write_html(&path, &html).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(!written.is_empty());
        assert_eq!(written, html);
        assert_eq!(written.matches("label: '").count(), 8);
        assert_eq!(written.matches("[[").count(), 12);
        assert_eq!(written.matches("note: '").count(), 5);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_directory_reports_the_path_and_leaves_nothing() {
        let dir = env::temp_dir().join("hypercube_viz_writer_missing");
        let _ = fs::remove_dir_all(&dir);
        let path = dir.join("out.html");

        let err = write_html(&path, "<html></html>").unwrap_err();

        assert!(err.to_string().contains("out.html"));
        assert!(std::error::Error::source(&err).is_some());
        assert!(!path.exists());
        assert!(!staging_path(&path).exists());
    }
}
