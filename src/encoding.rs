//! Character encoding detection and transcoding for byte input.
//!
//! A byte-order mark wins; otherwise the charset is read from the
//! `<meta charset>` or `http-equiv` declaration near the top of the page,
//! falling back to UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Bytes inspected when looking for a charset declaration.
const SNIFF_LIMIT: usize = 1024;

/// `<meta charset="...">` and `<meta http-equiv="Content-Type" content="...; charset=...">`,
/// in the order they are tried.
#[allow(clippy::expect_used)]
static CHARSET_DECLARATIONS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex"),
        Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#)
            .expect("valid regex"),
    ]
});

/// Charset label declared in the markup head, if any.
fn declared_charset(head: &str) -> Option<&str> {
    CHARSET_DECLARATIONS
        .iter()
        .find_map(|re| re.captures(head).and_then(|c| c.get(1)))
        .map(|m| m.as_str())
}

/// Detect character encoding from HTML bytes.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LIMIT)]);
    declared_charset(&head)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Transcode HTML bytes to a UTF-8 string.
///
/// Invalid sequences are replaced with U+FFFD rather than reported.
///
/// # Examples
///
/// ```
/// use rs_jparser::encoding::transcode_to_utf8;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
/// assert!(transcode_to_utf8(html).contains("Café"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    // `decode` strips a matching BOM and falls back to lossy replacement.
    let (decoded, _encoding_used, _had_errors) = encoding.decode(html);
    decoded.into_owned()
}
