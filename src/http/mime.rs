//! Content-type probing from file extensions.

use std::path::Path;

pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Guesses the content type of a file from its extension.
///
/// Unknown or missing extensions map to `application/octet-stream`.
pub fn content_type(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return DEFAULT_MIME_TYPE;
    };

    match ext.to_ascii_lowercase().as_str() {
        // HTML and text
        "html" | "htm" => "text/html",
        "txt" => "text/plain",
        "css" => "text/css",
        "csv" => "text/csv",

        // Scripts and data
        "js" | "mjs" => "text/javascript",
        "json" => "application/json",
        "xml" => "application/xml",
        "wasm" => "application/wasm",
        "pdf" => "application/pdf",

        // Images
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "ico" => "image/x-icon",

        // Fonts
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",

        _ => DEFAULT_MIME_TYPE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions() {
        assert_eq!(content_type(Path::new("public/index.html")), "text/html");
        assert_eq!(content_type(Path::new("spring.SVG")), "image/svg+xml");
        assert_eq!(content_type(Path::new("app.js")), "text/javascript");
    }

    #[test]
    fn unknown_or_missing_extension() {
        assert_eq!(content_type(Path::new("archive.xyz")), DEFAULT_MIME_TYPE);
        assert_eq!(content_type(Path::new("README")), DEFAULT_MIME_TYPE);
    }
}
