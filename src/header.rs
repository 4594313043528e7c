//! Header decoding: subject, date, recipients, sender

use mailparse::MailHeader;
use regex::Regex;
use std::sync::LazyLock;

/// Headers scanned for recipient addresses, in output order
const ADDRESS_FIELDS: [&str; 3] = ["to", "cc", "bcc"];

// Lenient address-shaped pattern, not an RFC 5322 parser. Commas and dots
// are allowed in both halves so list-style headers still yield matches.
static ADDRESS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w.,]+@[\w.,]+\.\w+").unwrap());

fn header_value(headers: &[MailHeader<'_>], name: &str) -> Option<String> {
    headers
        .iter()
        .find(|h| h.get_key().to_lowercase() == name)
        .map(mailparse::MailHeader::get_value)
}

/// Decode the Subject header.
///
/// `get_value` performs the RFC 2047 encoded-word decode fragment by
/// fragment: charset-tagged fragments are decoded with replacement,
/// untagged fragments pass through, and the results are concatenated in
/// original order. An absent or empty Subject is `None`, never `""`.
#[must_use]
pub fn decode_subject(headers: &[MailHeader<'_>]) -> Option<String> {
    header_value(headers, "subject").filter(|s| !s.is_empty())
}

/// Parse the Date header into epoch seconds.
///
/// RFC 2822 first, then mailparse's tolerant parser for the common
/// variants. Absent or unparsable dates are `None`, never fatal.
#[must_use]
pub fn parse_timestamp(headers: &[MailHeader<'_>]) -> Option<i64> {
    let value = header_value(headers, "date")?;
    chrono::DateTime::parse_from_rfc2822(&value)
        .map(|dt| dt.timestamp())
        .ok()
        .or_else(|| mailparse::dateparse(&value).ok())
}

/// Collect every address-shaped match across To, Cc and Bcc.
///
/// Matches are kept in header order, duplicates included.
#[must_use]
pub fn collect_recipients(headers: &[MailHeader<'_>]) -> Vec<String> {
    let mut recipients = Vec::new();
    for field in ADDRESS_FIELDS {
        if let Some(value) = header_value(headers, field) {
            for found in ADDRESS_REGEX.find_iter(&value) {
                recipients.push(found.as_str().to_string());
            }
        }
    }
    recipients
}

/// Address portion of the From header, empty string when absent
#[must_use]
pub fn sender_address(headers: &[MailHeader<'_>]) -> String {
    header_value(headers, "from")
        .map(|v| address_portion(&v))
        .unwrap_or_default()
}

fn address_portion(value: &str) -> String {
    let value = value.trim();

    // "Display Name <addr>" form
    if let Some(start) = value.find('<')
        && let Some(end) = value.rfind('>')
        && start < end
    {
        return value[start + 1..end].trim().to_string();
    }

    value.trim_matches('"').to_string()
}
