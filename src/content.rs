//! Charset decoding and plain-text normalization for MIME part payloads

use encoding_rs::{Encoding, UTF_8};

/// Decode payload bytes using the part's declared charset.
///
/// Decoding always succeeds: undecodable sequences become U+FFFD and an
/// unknown charset label falls back to UTF-8. The result is valid UTF-8
/// either way.
#[must_use]
pub fn decode_text(payload: &[u8], charset: &str) -> String {
    let encoding = Encoding::for_label(charset.trim().as_bytes()).unwrap_or(UTF_8);
    let (text, _, _) = encoding.decode(payload);
    text.into_owned()
}

/// Normalize a plain-text body for storage: drop tabs and carriage
/// returns, flatten newlines to spaces, collapse whitespace runs, trim.
///
/// Applied to plain-text bodies only; HTML parts keep their markup and
/// layout untouched beyond charset decoding.
#[must_use]
pub fn normalize_plain(text: &str) -> String {
    let flattened: String = text
        .chars()
        .filter(|c| !matches!(c, '\t' | '\r'))
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();

    flattened.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_latin1() {
        let decoded = decode_text(b"caf\xe9", "iso-8859-1");
        assert_eq!(decoded, "café");
    }

    #[test]
    fn decode_invalid_utf8_replaces() {
        let decoded = decode_text(b"ab\xff\xfecd", "utf-8");
        assert!(decoded.starts_with("ab"));
        assert!(decoded.ends_with("cd"));
        assert!(decoded.contains('\u{fffd}'));
    }

    #[test]
    fn decode_unknown_charset_falls_back_to_utf8() {
        assert_eq!(decode_text(b"plain", "x-no-such-charset"), "plain");
    }

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(normalize_plain("Hello\r\n\tWorld"), "Hello World");
        assert_eq!(normalize_plain("  a \n\n b  \r\n"), "a b");
        assert_eq!(normalize_plain(""), "");
    }
}
