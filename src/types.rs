//! Core types for normalized emails

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The storage-ready record produced from one raw RFC 822 message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizedEmail {
    /// Address portion of the From header (empty if absent)
    pub sender: String,

    /// Decoded Subject, `None` when the header is absent
    pub subject: Option<String>,

    /// Date header as epoch seconds, `None` when absent or unparsable
    pub timestamp: Option<i64>,

    /// First plain-text part, whitespace-normalized
    pub body: Option<String>,

    /// First HTML part, charset-decoded but otherwise untouched
    pub html: Option<String>,

    /// Every address-shaped match across To, Cc and Bcc, in header order.
    /// Duplicates are kept; deduplication is the consumer's call.
    pub recipients: Vec<String>,

    /// Extracted attachments, in traversal order
    pub attachments: Vec<Attachment>,
}

/// One extracted attachment, already persisted to disk.
///
/// Payload bytes are transient: they are written out and hashed during
/// extraction and never carried on this struct.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attachment {
    /// Resolved filename
    pub name: String,

    /// MIME type of the part
    pub content_type: String,

    /// Where the payload was written (`root/user_id/name`)
    pub path: PathBuf,

    /// Lowercase hex MD5 of the payload bytes
    pub content_hash: String,

    /// Payload length in bytes; always matches the file at `path`
    pub size: u64,
}

/// Outcome of ingesting one message.
///
/// A message without a Content-Type header is not an error: it yields
/// [`ParseOutcome::UnsupportedFormat`] with no record assembled and no
/// filesystem writes, and the caller decides whether to log or skip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// The message parsed; here is its normalized record
    Parsed(Box<NormalizedEmail>),

    /// The message carries no Content-Type header
    UnsupportedFormat,
}

impl ParseOutcome {
    /// Consume the outcome, returning the record if one was produced
    #[must_use]
    pub fn email(self) -> Option<NormalizedEmail> {
        match self {
            Self::Parsed(email) => Some(*email),
            Self::UnsupportedFormat => None,
        }
    }

    /// Borrow the record if one was produced
    #[must_use]
    pub fn as_email(&self) -> Option<&NormalizedEmail> {
        match self {
            Self::Parsed(email) => Some(email),
            Self::UnsupportedFormat => None,
        }
    }

    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedFormat)
    }
}
