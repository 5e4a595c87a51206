//! Local content serving via custom protocol.
//!
//! Registers a `lumen://` custom protocol so the webview loads the bundled
//! page without a local HTTP server.

use std::path::{Path, PathBuf};

/// Custom protocol scheme for local assets.
pub const SCHEME: &str = "lumen";

/// Serves files from a base directory.
///
/// A request for `lumen://localhost/index.html` resolves to
/// `{base_dir}/index.html`.
pub struct ContentProvider {
    base_dir: PathBuf,
}

impl ContentProvider {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Resolve a request path to MIME type and file contents.
    ///
    /// `path` is the raw URI path, so percent-escapes are decoded first.
    /// Returns `None` for missing files, undecodable paths, and paths that
    /// escape the base directory (including through symlinks).
    pub fn resolve(&self, path: &str) -> Option<(&'static str, Vec<u8>)> {
        let raw = path.split(['?', '#']).next().unwrap_or("");
        let decoded = urlencoding::decode(raw).ok()?;
        let clean = decoded.trim_start_matches('/');
        let clean = if clean.is_empty() { "index.html" } else { clean };

        let file_path = self.base_dir.join(clean);

        let canonical_base = std::fs::canonicalize(&self.base_dir).ok()?;
        let canonical_file = std::fs::canonicalize(&file_path).ok()?;
        if !canonical_file.starts_with(&canonical_base) || !canonical_file.is_file() {
            return None;
        }

        let data = std::fs::read(&canonical_file).ok()?;
        Some((mime_from_extension(&file_path), data))
    }
}

/// Strip the scheme and host from a custom-protocol URI.
///
/// Handles `lumen://localhost/x`, `lumen:///x`, `lumen://x`, and the
/// `http://lumen.localhost/x` form WebView2 uses on Windows.
pub fn request_path(uri: &str) -> &str {
    uri.strip_prefix("lumen://localhost/")
        .or_else(|| uri.strip_prefix("lumen://localhost"))
        .or_else(|| uri.strip_prefix("lumen:///"))
        .or_else(|| uri.strip_prefix("lumen://"))
        .or_else(|| uri.strip_prefix("http://lumen.localhost/"))
        .or_else(|| uri.strip_prefix("https://lumen.localhost/"))
        .unwrap_or("")
}

/// Guess MIME type from file extension.
fn mime_from_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("woff2") => "font/woff2",
        Some("wasm") => "application/wasm",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn assets() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<h1>Lumen</h1>").unwrap();
        fs::create_dir(dir.path().join("css")).unwrap();
        fs::write(dir.path().join("css/site.css"), "body{}").unwrap();
        dir
    }

    #[test]
    fn resolves_index() {
        let dir = assets();
        let cp = ContentProvider::new(dir.path());
        let (mime, data) = cp.resolve("index.html").unwrap();
        assert_eq!(mime, "text/html");
        assert_eq!(data, b"<h1>Lumen</h1>");
    }

    #[test]
    fn empty_path_serves_index() {
        let dir = assets();
        let cp = ContentProvider::new(dir.path());
        assert_eq!(cp.resolve("").unwrap().0, "text/html");
        assert_eq!(cp.resolve("/").unwrap().0, "text/html");
    }

    #[test]
    fn resolves_nested_with_query() {
        let dir = assets();
        let cp = ContentProvider::new(dir.path());
        let (mime, _) = cp.resolve("/css/site.css?v=2").unwrap();
        assert_eq!(mime, "text/css");
    }

    #[test]
    fn missing_file_is_none() {
        let dir = assets();
        let cp = ContentProvider::new(dir.path());
        assert!(cp.resolve("nope.html").is_none());
    }

    #[test]
    fn directory_is_none() {
        let dir = assets();
        let cp = ContentProvider::new(dir.path());
        assert!(cp.resolve("css").is_none());
    }

    #[test]
    fn traversal_is_blocked() {
        let outer = tempfile::tempdir().unwrap();
        fs::write(outer.path().join("secret.txt"), "x").unwrap();
        let base = outer.path().join("assets");
        fs::create_dir(&base).unwrap();
        fs::write(base.join("index.html"), "ok").unwrap();

        let cp = ContentProvider::new(&base);
        assert!(cp.resolve("../secret.txt").is_none());
        assert!(cp.resolve("index.html").is_some());
    }

    #[test]
    fn percent_encoded_names_resolve() {
        let dir = assets();
        fs::write(dir.path().join("my page.html"), "spaced").unwrap();
        let cp = ContentProvider::new(dir.path());
        let (mime, data) = cp.resolve("/my%20page.html").unwrap();
        assert_eq!(mime, "text/html");
        assert_eq!(data, b"spaced");
        assert_eq!(cp.resolve("css%2Fsite.css").unwrap().0, "text/css");
    }

    #[test]
    fn encoded_traversal_is_blocked() {
        let outer = tempfile::tempdir().unwrap();
        fs::write(outer.path().join("secret.txt"), "x").unwrap();
        let base = outer.path().join("assets");
        fs::create_dir(&base).unwrap();

        let cp = ContentProvider::new(&base);
        assert!(cp.resolve("%2e%2e/secret.txt").is_none());
        assert!(cp.resolve("..%2Fsecret.txt").is_none());
    }

    #[test]
    fn invalid_utf8_escape_is_none() {
        let dir = assets();
        let cp = ContentProvider::new(dir.path());
        assert!(cp.resolve("%ff%fe.html").is_none());
    }

    #[test]
    fn request_path_variants() {
        assert_eq!(request_path("lumen://localhost/index.html"), "index.html");
        assert_eq!(request_path("lumen://localhost"), "");
        assert_eq!(request_path("lumen:///css/site.css"), "css/site.css");
        assert_eq!(request_path("http://lumen.localhost/index.html"), "index.html");
        assert_eq!(request_path("https://example.com/index.html"), "");
    }

    #[test]
    fn mime_fallback() {
        assert_eq!(
            mime_from_extension(Path::new("blob.bin")),
            "application/octet-stream"
        );
        assert_eq!(mime_from_extension(Path::new("app.mjs")), "application/javascript");
    }
}
