use email_ingest::{ParseOutcome, ingest_bytes};
use tempfile::tempdir;

#[test]
fn test_end_to_end_scenario() {
    let raw = b"From: a@x.com\r\n\
                To: b@y.com, c@z.com\r\n\
                Subject: =?utf-8?B?SGVsbG8gV29ybGQ=?=\r\n\
                Date: Mon, 1 Jan 2024 10:00:00 +0000\r\n\
                MIME-Version: 1.0\r\n\
                Content-Type: multipart/mixed; boundary=\"sep\"\r\n\
                \r\n\
                --sep\r\n\
                Content-Type: text/plain; charset=utf-8\r\n\
                \r\n\
                Hello\r\n\tWorld\r\n\
                --sep\r\n\
                Content-Type: text/plain; name=\"notes.txt\"\r\n\
                Content-Transfer-Encoding: base64\r\n\
                Content-Disposition: attachment; filename=\"notes.txt\"\r\n\
                \r\n\
                YWJj\r\n\
                --sep--\r\n";

    let dir = tempdir().unwrap();
    let email = ingest_bytes(raw, "user", dir.path())
        .unwrap()
        .email()
        .unwrap();

    assert_eq!(email.sender, "a@x.com");
    assert_eq!(email.subject.as_deref(), Some("Hello World"));
    assert_eq!(email.timestamp, Some(1_704_103_200));
    assert_eq!(email.recipients, vec!["b@y.com", "c@z.com"]);
    assert_eq!(email.body.as_deref(), Some("Hello World"));
    assert_eq!(email.html, None);

    assert_eq!(email.attachments.len(), 1);
    let attachment = &email.attachments[0];
    assert_eq!(attachment.name, "notes.txt");
    assert_eq!(attachment.content_type, "text/plain");
    assert_eq!(attachment.size, 3);
    assert_eq!(attachment.content_hash, "900150983cd24fb0d6963f7d28e17f72");
    assert_eq!(attachment.path, dir.path().join("user").join("notes.txt"));
    assert_eq!(std::fs::read(&attachment.path).unwrap(), b"abc");
}

#[test]
fn test_missing_content_type_is_unsupported() {
    let raw = b"From: a@x.com\r\n\
                Subject: no mime here\r\n\
                \r\n\
                plain old body";

    let dir = tempdir().unwrap();
    let root = dir.path().join("never-created");
    let outcome = ingest_bytes(raw, "user", &root).unwrap();

    assert!(outcome.is_unsupported());
    assert!(outcome.as_email().is_none());
    // No filesystem effect at all: not even the root directory
    assert!(!root.exists());
}

#[test]
fn test_first_plain_part_wins() {
    let raw = b"From: a@x.com\r\n\
                Subject: alternatives\r\n\
                MIME-Version: 1.0\r\n\
                Content-Type: multipart/alternative; boundary=\"b\"\r\n\
                \r\n\
                --b\r\n\
                Content-Type: text/plain; charset=utf-8\r\n\
                \r\n\
                first plain\r\n\
                --b\r\n\
                Content-Type: text/html; charset=utf-8\r\n\
                \r\n\
                <p>rendered</p>\r\n\
                --b\r\n\
                Content-Type: text/plain; charset=utf-8\r\n\
                \r\n\
                second plain is ignored\r\n\
                --b--\r\n";

    let dir = tempdir().unwrap();
    let email = ingest_bytes(raw, "user", dir.path())
        .unwrap()
        .email()
        .unwrap();

    assert_eq!(email.body.as_deref(), Some("first plain"));
    assert!(email.html.as_deref().unwrap().contains("<p>rendered</p>"));
    assert!(email.attachments.is_empty());
}

#[test]
fn test_multi_fragment_subject_decodes_in_order() {
    // Two encoded-word fragments with different charsets; whitespace
    // between adjacent encoded words is not part of the text
    let raw = b"From: a@x.com\r\n\
                Content-Type: text/plain; charset=utf-8\r\n\
                Subject: =?iso-8859-1?Q?caf=E9_?= =?utf-8?B?dGVhbQ==?=\r\n\
                \r\n\
                body";

    let dir = tempdir().unwrap();
    let email = ingest_bytes(raw, "user", dir.path())
        .unwrap()
        .email()
        .unwrap();

    assert_eq!(email.subject.as_deref(), Some("caf\u{e9} team"));
}

#[test]
fn test_absent_subject_and_date_are_none() {
    let raw = b"From: a@x.com\r\n\
                Content-Type: text/plain; charset=utf-8\r\n\
                \r\n\
                body";

    let dir = tempdir().unwrap();
    let email = ingest_bytes(raw, "user", dir.path())
        .unwrap()
        .email()
        .unwrap();

    assert_eq!(email.subject, None);
    assert_eq!(email.timestamp, None);
}

#[test]
fn test_unparsable_date_is_none_not_fatal() {
    let raw = b"From: a@x.com\r\n\
                Date: not a date at all\r\n\
                Content-Type: text/plain; charset=utf-8\r\n\
                \r\n\
                body";

    let dir = tempdir().unwrap();
    let email = ingest_bytes(raw, "user", dir.path())
        .unwrap()
        .email()
        .unwrap();

    assert_eq!(email.timestamp, None);
}

#[test]
fn test_recipients_scanned_across_to_cc_bcc() {
    let raw = b"From: Ann Example <ann@example.com>\r\n\
                To: Bob <b@y.com>, c@z.com\r\n\
                Cc: b@y.com\r\n\
                Bcc: hidden@q.example.org\r\n\
                Content-Type: text/plain; charset=utf-8\r\n\
                \r\n\
                body";

    let dir = tempdir().unwrap();
    let email = ingest_bytes(raw, "user", dir.path())
        .unwrap()
        .email()
        .unwrap();

    assert_eq!(email.sender, "ann@example.com");
    // Order follows To, Cc, Bcc; the Cc duplicate of b@y.com is kept
    assert_eq!(
        email.recipients,
        vec!["b@y.com", "c@z.com", "b@y.com", "hidden@q.example.org"]
    );
}

#[test]
fn test_part_without_declared_charset_not_captured() {
    let raw = b"From: a@x.com\r\n\
                Subject: no charset\r\n\
                Content-Type: text/plain\r\n\
                \r\n\
                undeclared bytes";

    let dir = tempdir().unwrap();
    let email = ingest_bytes(raw, "user", dir.path())
        .unwrap()
        .email()
        .unwrap();

    assert_eq!(email.body, None);
}

#[test]
fn test_html_kept_unnormalized() {
    let raw = b"From: a@x.com\r\n\
                Subject: html body\r\n\
                Content-Type: text/html; charset=utf-8\r\n\
                \r\n\
                <html><body>\tkeep\tmy\ttabs</body></html>";

    let dir = tempdir().unwrap();
    let email = ingest_bytes(raw, "user", dir.path())
        .unwrap()
        .email()
        .unwrap();

    assert_eq!(email.body, None);
    let html = email.html.unwrap();
    assert!(html.contains("\tkeep\tmy\ttabs"));
}

#[test]
fn test_outcome_matches_parsed_variant() {
    let raw = b"From: a@x.com\r\n\
                Content-Type: text/plain; charset=utf-8\r\n\
                \r\n\
                body";

    let dir = tempdir().unwrap();
    let outcome = ingest_bytes(raw, "user", dir.path()).unwrap();

    assert!(!outcome.is_unsupported());
    match outcome {
        ParseOutcome::Parsed(email) => assert_eq!(email.sender, "a@x.com"),
        ParseOutcome::UnsupportedFormat => panic!("expected a parsed record"),
    }
}
