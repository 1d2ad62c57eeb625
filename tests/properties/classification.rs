//! Property tests for content type classification.

use proptest::prelude::*;

use bucketsync::{classify, content_type_for};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: classification is total and always yields a mime type.
    #[test]
    fn property_classify_never_panics(path in "(?s).{0,128}") {
        let ct = classify(&path);
        prop_assert!(!ct.mime().is_empty());
        let _ = content_type_for(&path, "UTF-8");
    }

    /// PROPERTY: unknown extensions fall back to a binary octet stream.
    #[test]
    fn property_unknown_extension_is_octet_stream(
        stem in "[a-z0-9_-]{1,12}",
        ext in "[a-z]{1,6}"
    ) {
        let known = [
            "txt", "htm", "html", "xhtml", "css", "js", "mjs", "apng", "avif", "gif",
            "jpeg", "jpg", "png", "svg", "bmp", "tiff", "webp", "ico", "eot", "ttf",
            "otf", "woff", "json", "jsonld", "xml", "pdf", "zip", "wasm",
        ];
        prop_assume!(!known.contains(&ext.as_str()));

        let ct = classify(&format!("{stem}.{ext}"));
        prop_assert_eq!(ct.mime(), "application/octet-stream");
        prop_assert!(!ct.is_text());
    }

    /// PROPERTY: the charset suffix appears exactly for text types and a non-"none" encoding.
    #[test]
    fn property_charset_only_for_text(
        path in "[a-z/]{0,10}\\.(txt|html|css|png|woff2|json|bin)",
        encoding in "(UTF-8|iso-8859-1|none)"
    ) {
        let ct = classify(&path);
        let header = content_type_for(&path, &encoding);
        let expect_charset = ct.is_text() && encoding != "none";

        prop_assert_eq!(header.contains(";charset="), expect_charset);
        prop_assert!(header.starts_with(ct.mime()));
    }

    /// PROPERTY: anything under `.well-known/site-association-json` is JSON.
    #[test]
    fn property_site_association_is_json(prefix in "([a-z0-9_-]{1,8}/){0,3}") {
        let path = format!("{prefix}.well-known/site-association-json");
        prop_assert_eq!(classify(&path).mime(), "application/json");
    }
}
