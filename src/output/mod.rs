//! Writing generated documents to disk.

use std::path::Path;

use tracing::info;

use crate::error::{Result, SiteGenError};

/// Write `html` to `path` as UTF-8, replacing any existing file.
///
/// Parent directories are not created.
pub fn save_html(html: &str, path: &Path) -> Result<()> {
    std::fs::write(path, html.as_bytes()).map_err(|source| SiteGenError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = html.len(), "wrote HTML document");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_exact_bytes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index.html");
        let html = "<html><body>Café ☕</body></html>\n";

        save_html(html, &path).unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), html.as_bytes());
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index.html");
        std::fs::write(&path, "an older and much longer document body").unwrap();

        save_html("<p>new</p>", &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<p>new</p>");
    }

    #[test]
    fn missing_parent_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("index.html");

        let err = save_html("<p></p>", &path).unwrap_err();

        match err {
            SiteGenError::Write { path: failed, source } => {
                assert_eq!(failed, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected Write error, got {other:?}"),
        }
        assert!(!path.exists());
    }
}
