//! Ingestion orchestrator: raw RFC 822 bytes in, normalized record out

use crate::attachment;
use crate::error::{IngestError, Result};
use crate::header;
use crate::types::{NormalizedEmail, ParseOutcome};
use crate::walker;
use mailparse::MailHeader;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Ingest one RFC 822 message file.
///
/// Reads the file at `path`, extracts attachments into
/// `attachments_root/user_id/`, and assembles the normalized record.
/// I/O failures are fatal for the message; a missing Content-Type header
/// yields [`ParseOutcome::UnsupportedFormat`] with no filesystem writes.
pub fn ingest_file(path: &Path, user_id: &str, attachments_root: &Path) -> Result<ParseOutcome> {
    let raw = fs::read(path)?;
    ingest_bytes(&raw, user_id, attachments_root)
}

/// Ingest one RFC 822 message from raw bytes.
pub fn ingest_bytes(raw: &[u8], user_id: &str, attachments_root: &Path) -> Result<ParseOutcome> {
    let parsed = mailparse::parse_mail(raw).map_err(|e| IngestError::Structure(e.to_string()))?;

    // Gate before any filesystem effect
    if !has_content_type(&parsed.headers) {
        return Ok(ParseOutcome::UnsupportedFormat);
    }

    let attachments = attachment::extract_attachments(&parsed, user_id, attachments_root)?;
    let bodies = walker::collect_bodies(&parsed);

    let email = NormalizedEmail {
        sender: header::sender_address(&parsed.headers),
        subject: header::decode_subject(&parsed.headers),
        timestamp: header::parse_timestamp(&parsed.headers),
        recipients: header::collect_recipients(&parsed.headers),
        body: bodies.body,
        html: bodies.html,
        attachments,
    };

    debug!(
        sender = %email.sender,
        recipients = email.recipients.len(),
        attachments = email.attachments.len(),
        "ingested email"
    );

    Ok(ParseOutcome::Parsed(Box::new(email)))
}

fn has_content_type(headers: &[MailHeader<'_>]) -> bool {
    headers
        .iter()
        .any(|h| h.get_key().to_lowercase() == "content-type")
}
