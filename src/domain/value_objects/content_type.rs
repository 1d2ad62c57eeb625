//! Content type value object - maps a file path to the `Content-Type` the
//! object store should serve it with.
//!
//! Classification is a pure, total function: every path gets a mime type,
//! unknown extensions fall back to `application/octet-stream`.

use std::fmt;

/// Encoding value that disables the `;charset=` suffix
pub const NO_CHARSET: &str = "none";

/// Default text encoding used when building manifests
pub const DEFAULT_TEXT_ENCODING: &str = "UTF-8";

/// Paths with this suffix are served as JSON regardless of their extension
const SITE_ASSOCIATION_SUFFIX: &str = ".well-known/site-association-json";

const FALLBACK: ContentType = ContentType {
    mime: "application/octet-stream",
    is_text: false,
};

/// Extension (with leading dot) -> (mime, is_text)
const EXTENSIONS: &[(&str, &str, bool)] = &[
    (".txt", "text/plain", true),
    (".htm", "text/html", true),
    (".html", "text/html", true),
    (".xhtml", "application/xhtml+xml", true),
    (".css", "text/css", true),
    (".js", "text/javascript", true),
    (".mjs", "text/javascript", true),
    (".apng", "image/apng", false),
    (".avif", "image/avif", false),
    (".gif", "image/gif", false),
    (".jpeg", "image/jpeg", false),
    (".jpg", "image/jpeg", false),
    (".png", "image/png", false),
    (".svg", "image/svg+xml", true),
    (".bmp", "image/bmp", false),
    (".tiff", "image/tiff", false),
    (".webp", "image/webp", false),
    (".ico", "image/vnd.microsoft.icon", false),
    (".eot", "application/vnd.ms-fontobject", false),
    (".ttf", "font/ttf", false),
    (".otf", "font/otf", false),
    (".woff", "font/woff", false),
    (".woff2", "font/woff2", false),
    (".json", "application/json", true),
    (".jsonld", "application/ld+json", true),
    (".xml", "application/xml", true),
    (".pdf", "application/pdf", false),
    (".zip", "application/zip", false),
    (".wasm", "application/wasm", false),
];

/// Mime type of a file plus whether it is text (and so takes a charset)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentType {
    mime: &'static str,
    is_text: bool,
}

impl ContentType {
    /// The bare mime type, e.g. `text/html`
    pub fn mime(&self) -> &'static str {
        self.mime
    }

    /// Whether a charset applies to this type
    pub fn is_text(&self) -> bool {
        self.is_text
    }

    /// Format the header value for the given text encoding.
    ///
    /// Text types get `;charset=<encoding>` unless `encoding` is [`NO_CHARSET`].
    pub fn header_value(&self, encoding: &str) -> String {
        if self.is_text && encoding != NO_CHARSET {
            format!("{};charset={}", self.mime, encoding)
        } else {
            self.mime.to_string()
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime)
    }
}

/// Classify a path by its extension.
pub fn classify(path: &str) -> ContentType {
    let ext = if path.ends_with(SITE_ASSOCIATION_SUFFIX) {
        ".json"
    } else {
        extension(path)
    };

    EXTENSIONS
        .iter()
        .find(|(candidate, _, _)| *candidate == ext)
        .map(|&(_, mime, is_text)| ContentType { mime, is_text })
        .unwrap_or(FALLBACK)
}

/// Classify a path and format the resulting `Content-Type` header value.
pub fn content_type_for(path: &str, encoding: &str) -> String {
    classify(path).header_value(encoding)
}

/// Extension of the last path segment, including the leading dot.
///
/// Empty when the segment has no dot or only dots precede the last one,
/// so `.htaccess` and `..` have no extension while `a.` has `.`.
fn extension(path: &str) -> &str {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rfind('.') {
        Some(idx) if !name[..idx].bytes().all(|b| b == b'.') => &name[idx..],
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_follows_last_segment() {
        assert_eq!(extension("index.html"), ".html");
        assert_eq!(extension("assets/app.min.js"), ".js");
        assert_eq!(extension("dir.d/README"), "");
        assert_eq!(extension(".htaccess"), "");
        assert_eq!(extension("sub/.env.local"), ".local");
        assert_eq!(extension(".."), "");
        assert_eq!(extension("a."), ".");
        assert_eq!(extension(""), "");
    }

    #[test]
    fn backslash_is_part_of_the_file_name() {
        assert_eq!(extension("x\\y.html"), ".html");
        assert_eq!(extension("x.d\\README"), ".d\\README");
        assert_eq!(classify("x.d\\README"), FALLBACK);
        assert_eq!(extension(".cache\\data"), "");
    }

    #[test]
    fn known_text_types_take_charset() {
        assert_eq!(content_type_for("robots.txt", "UTF-8"), "text/plain;charset=UTF-8");
        assert_eq!(content_type_for("a/b/c.css", "UTF-8"), "text/css;charset=UTF-8");
        assert_eq!(
            content_type_for("icon.svg", "iso-8859-1"),
            "image/svg+xml;charset=iso-8859-1"
        );
    }

    #[test]
    fn binary_types_never_take_charset() {
        assert_eq!(content_type_for("logo.png", "UTF-8"), "image/png");
        assert_eq!(content_type_for("font.woff2", "UTF-8"), "font/woff2");
        assert_eq!(content_type_for("app.wasm", "UTF-8"), "application/wasm");
    }

    #[test]
    fn none_encoding_drops_charset() {
        assert_eq!(content_type_for("index.html", NO_CHARSET), "text/html");
    }

    #[test]
    fn unknown_extensions_fall_back_to_octet_stream() {
        for path in ["", "Makefile", "archive.tar.gz", ".htaccess", "x.HTML"] {
            let ct = classify(path);
            assert_eq!(ct.mime(), "application/octet-stream", "{path}");
            assert!(!ct.is_text());
        }
    }

    #[test]
    fn site_association_file_is_json() {
        let ct = classify(".well-known/site-association-json");
        assert_eq!(ct.mime(), "application/json");
        assert!(ct.is_text());
        assert_eq!(
            content_type_for("public/.well-known/site-association-json", "UTF-8"),
            "application/json;charset=UTF-8"
        );
    }

    #[test]
    fn apple_association_file_without_suffix_is_binary() {
        assert_eq!(
            classify(".well-known/apple-app-site-association").mime(),
            "application/octet-stream"
        );
    }

    #[test]
    fn every_table_entry_is_reachable() {
        for (ext, mime, is_text) in EXTENSIONS {
            let ct = classify(&format!("file{ext}"));
            assert_eq!(ct.mime(), *mime);
            assert_eq!(ct.is_text(), *is_text);
        }
    }
}
