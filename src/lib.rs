// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! MIME Email Ingestion
//!
//! Turns a raw RFC 822 message into a normalized, storage-ready record:
//! sender, decoded subject, epoch timestamp, plain/HTML body, recipient
//! list, and file attachments persisted to disk with content hashes.
//!
//! # Pipeline
//!
//! - Header decoding (encoded-word subjects, tolerant dates, lenient
//!   recipient scanning)
//! - Recursive multipart traversal with first-match-wins body/HTML capture
//! - Lossy charset decoding and plain-text whitespace normalization
//! - Attachment extraction with filename resolution, per-user persistence
//!   and MD5 content hashing
//!
//! # Example
//!
//! ```rust
//! use email_ingest::{ingest_bytes, ParseOutcome};
//!
//! let raw = b"From: sender@example.com\r\n\
//!             Content-Type: text/plain; charset=utf-8\r\n\
//!             Subject: Hello\r\n\
//!             \r\n\
//!             Body text";
//!
//! let root = std::env::temp_dir();
//! let outcome = ingest_bytes(raw, "user-1", &root).unwrap();
//!
//! if let ParseOutcome::Parsed(email) = outcome {
//!     assert_eq!(email.sender, "sender@example.com");
//!     assert_eq!(email.subject.as_deref(), Some("Hello"));
//! }
//! ```

mod attachment;
mod content;
mod error;
mod header;
mod parser;
mod sink;
mod types;
mod walker;

pub use content::{decode_text, normalize_plain};
pub use error::{IngestError, Result};
pub use parser::{ingest_bytes, ingest_file};
pub use sink::*;
pub use types::*;
