//! MIME tree traversal for body and HTML capture

use crate::content;
use mailparse::ParsedMail;

/// First-match-wins accumulator for the two text slots.
///
/// Each slot is set at most once, by the first leaf of its type in
/// depth-first pre-order; later parts of an already-captured type are
/// ignored.
#[derive(Debug, Default)]
pub struct BodyParts {
    /// First `text/plain` leaf, whitespace-normalized
    pub body: Option<String>,

    /// First `text/html` leaf, decoded but unmodified
    pub html: Option<String>,
}

/// Walk the whole MIME tree (root included) and capture body and HTML.
///
/// Only leaves that declare a charset and carry a non-empty payload are
/// considered; attachment classification is a separate, disjoint pass.
#[must_use]
pub fn collect_bodies(message: &ParsedMail<'_>) -> BodyParts {
    let mut parts = BodyParts::default();
    visit(message, &mut parts);
    parts
}

fn visit(part: &ParsedMail<'_>, acc: &mut BodyParts) {
    if part.subparts.is_empty() {
        capture_leaf(part, acc);
    }
    for sub in &part.subparts {
        visit(sub, acc);
    }
}

fn capture_leaf(part: &ParsedMail<'_>, acc: &mut BodyParts) {
    // A default us-ascii charset from mailparse does not count as declared
    let Some(charset) = part.ctype.params.get("charset") else {
        return;
    };
    let Ok(payload) = part.get_body_raw() else {
        return;
    };
    if payload.is_empty() {
        return;
    }

    match part.ctype.mimetype.as_str() {
        "text/plain" if acc.body.is_none() => {
            let text = content::decode_text(&payload, charset);
            acc.body = Some(content::normalize_plain(&text));
        }
        "text/html" if acc.html.is_none() => {
            acc.html = Some(content::decode_text(&payload, charset));
        }
        _ => {}
    }
}
