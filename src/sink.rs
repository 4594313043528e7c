//! Storage sink boundary.
//!
//! The relational layer itself lives outside this crate; what ships here
//! is the row mapping for the `metadata` / `recipients` / `attachments`
//! schema, the [`StorageSink`] contract, and an in-memory implementation
//! used in tests and as a reference for sink authors.

use crate::types::NormalizedEmail;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One `metadata` row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetadataRow {
    pub sender: String,
    pub subject: Option<String>,
    pub body: Option<String>,
    pub html: Option<String>,
    pub timestamp: Option<i64>,
}

/// One `recipients` row, foreign-keyed to its metadata row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipientRow {
    pub recipient: String,
}

/// One `attachments` row, foreign-keyed to its metadata row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttachmentRow {
    pub name: String,
    pub content_type: String,
    pub content_hash: String,
    pub path: PathBuf,
}

impl NormalizedEmail {
    #[must_use]
    pub fn metadata_row(&self) -> MetadataRow {
        MetadataRow {
            sender: self.sender.clone(),
            subject: self.subject.clone(),
            body: self.body.clone(),
            html: self.html.clone(),
            timestamp: self.timestamp,
        }
    }

    /// One row per recipient, order and duplicates preserved
    #[must_use]
    pub fn recipient_rows(&self) -> Vec<RecipientRow> {
        self.recipients
            .iter()
            .map(|recipient| RecipientRow {
                recipient: recipient.clone(),
            })
            .collect()
    }

    #[must_use]
    pub fn attachment_rows(&self) -> Vec<AttachmentRow> {
        self.attachments
            .iter()
            .map(|a| AttachmentRow {
                name: a.name.clone(),
                content_type: a.content_type.clone(),
                content_hash: a.content_hash.clone(),
                path: a.path.clone(),
            })
            .collect()
    }
}

/// Durable destination for normalized records.
///
/// Contract: one message's rows are stored all-or-nothing. If any
/// recipient or attachment row fails, the metadata row must not survive
/// either. SQL implementations must bind values as parameters, never
/// interpolate them into statements.
pub trait StorageSink {
    type Error;

    fn store(&mut self, email: &NormalizedEmail) -> Result<(), Self::Error>;
}

/// Everything stored for one message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredRecord {
    pub metadata: MetadataRow,
    pub recipients: Vec<RecipientRow>,
    pub attachments: Vec<AttachmentRow>,
}

/// In-process sink. A single `Vec` push makes the per-message unit
/// trivially atomic.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub records: Vec<StoredRecord>,
}

impl MemorySink {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl StorageSink for MemorySink {
    type Error = std::convert::Infallible;

    fn store(&mut self, email: &NormalizedEmail) -> Result<(), Self::Error> {
        self.records.push(StoredRecord {
            metadata: email.metadata_row(),
            recipients: email.recipient_rows(),
            attachments: email.attachment_rows(),
        });
        Ok(())
    }
}
