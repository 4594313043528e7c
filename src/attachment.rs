//! Attachment extraction: filename resolution, persistence, hashing

use crate::error::Result;
use crate::types::Attachment;
use mailparse::{DispositionType, MailHeader, ParsedContentDisposition, ParsedMail};
use md5::{Digest, Md5};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Extract and persist every attachment in the message tree.
///
/// A part is a candidate when it carries a Content-Disposition header
/// whose disposition is `attachment` or `inline`. Candidates without a
/// resolvable filename are dropped with a warning: no record, no file.
/// Files land at `root/user_id/name`; a name collision silently
/// overwrites, last write wins.
pub fn extract_attachments(
    message: &ParsedMail<'_>,
    user_id: &str,
    root: &Path,
) -> Result<Vec<Attachment>> {
    // Idempotent; concurrent ingesters may race on this
    fs::create_dir_all(root)?;

    let mut attachments = Vec::new();
    visit(message, user_id, root, &mut attachments)?;
    Ok(attachments)
}

fn visit(
    part: &ParsedMail<'_>,
    user_id: &str,
    root: &Path,
    out: &mut Vec<Attachment>,
) -> Result<()> {
    if let Some(raw_disposition) = disposition_header(&part.headers) {
        extract_candidate(part, &raw_disposition, user_id, root, out)?;
    }
    for sub in &part.subparts {
        visit(sub, user_id, root, out)?;
    }
    Ok(())
}

fn disposition_header(headers: &[MailHeader<'_>]) -> Option<String> {
    headers
        .iter()
        .find(|h| h.get_key().to_lowercase() == "content-disposition")
        .map(|h| String::from_utf8_lossy(h.get_value_raw()).into_owned())
}

fn extract_candidate(
    part: &ParsedMail<'_>,
    raw_disposition: &str,
    user_id: &str,
    root: &Path,
    out: &mut Vec<Attachment>,
) -> Result<()> {
    let disposition = part.get_content_disposition();
    if !matches!(
        disposition.disposition,
        DispositionType::Attachment | DispositionType::Inline
    ) {
        return Ok(());
    }

    let Some(name) = resolve_filename(&disposition, raw_disposition) else {
        warn!(
            content_type = %part.ctype.mimetype,
            "dropping attachment candidate with no resolvable filename"
        );
        return Ok(());
    };

    // Use the final path component only, so a hostile filename cannot
    // escape the user directory
    let Some(name) = Path::new(&name)
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
    else {
        warn!(filename = %name, "dropping attachment candidate with unusable filename");
        return Ok(());
    };

    let Ok(payload) = part.get_body_raw() else {
        warn!(filename = %name, "dropping attachment candidate with undecodable payload");
        return Ok(());
    };

    let user_dir = root.join(user_id);
    fs::create_dir_all(&user_dir)?;
    let path = user_dir.join(&name);
    fs::write(&path, &payload)?;

    let digest = Md5::digest(&payload);
    out.push(Attachment {
        content_type: part.ctype.mimetype.clone(),
        content_hash: format!("{digest:x}"),
        size: payload.len() as u64,
        name,
        path,
    });
    Ok(())
}

/// Resolve the attachment filename.
///
/// Primary path: the decoded `filename` parameter of the parsed
/// disposition (encoded words already handled). Fallback: scan the raw
/// header's `;`-separated parameters for a `filename=` key and strip
/// surrounding quotes.
fn resolve_filename(disposition: &ParsedContentDisposition, raw: &str) -> Option<String> {
    disposition
        .params
        .get("filename")
        .cloned()
        .or_else(|| fallback_filename(raw))
}

fn fallback_filename(raw: &str) -> Option<String> {
    for param in raw.split(';').skip(1) {
        if let Some((key, value)) = param.split_once('=')
            && key.trim().to_lowercase().contains("filename")
        {
            return Some(value.trim().replace('"', ""));
        }
    }
    None
}
