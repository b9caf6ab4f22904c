//! Document Info dictionary extraction.
//!
//! Reads title, author, and creation date from the trailer's `Info`
//! dictionary. PDF text strings are either PDFDocEncoded (read as Latin-ish
//! bytes) or UTF-16BE with a BOM; dates use the `D:YYYYMMDDHHMMSS` form
//! with an optional timezone suffix.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use lopdf::{Dictionary, Document, Object};

/// Title, author, and creation date from the Info dictionary, if present.
pub(crate) fn document_info(doc: &Document) -> (Option<String>, Option<String>, Option<DateTime<Utc>>) {
    let Some(info) = info_dict(doc) else {
        return (None, None, None);
    };

    let title = string_entry(info, b"Title");
    let author = string_entry(info, b"Author");
    let created_at = string_entry(info, b"CreationDate").and_then(|raw| parse_pdf_date(&raw));

    (title, author, created_at)
}

fn info_dict(doc: &Document) -> Option<&Dictionary> {
    match doc.trailer.get(b"Info").ok()? {
        Object::Reference(id) => doc.get_object(*id).ok()?.as_dict().ok(),
        Object::Dictionary(dict) => Some(dict),
        _ => None,
    }
}

fn string_entry(dict: &Dictionary, key: &[u8]) -> Option<String> {
    let bytes = dict.get(key).ok()?.as_str().ok()?;
    let text = decode_text_string(bytes);
    let trimmed = text.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
}

fn decode_text_string(bytes: &[u8]) -> String {
    if bytes.starts_with(&[0xFE, 0xFF]) {
        let (decoded, ..) = encoding_rs::UTF_16BE.decode(&bytes[2..]);
        decoded.into_owned()
    } else {
        String::from_utf8_lossy(bytes).into_owned()
    }
}

/// Parse a PDF date string into a UTC timestamp.
///
/// Accepts `D:YYYYMMDD` through `D:YYYYMMDDHHMMSS`; missing time components
/// default to zero. A timezone suffix (`Z`, `+HH'mm'`, ...) is ignored and
/// the timestamp is read as UTC.
pub(crate) fn parse_pdf_date(raw: &str) -> Option<DateTime<Utc>> {
    let digits: String = raw
        .strip_prefix("D:")
        .unwrap_or(raw)
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .take(14)
        .collect();

    if digits.len() < 8 {
        return None;
    }

    let field = |start: usize, end: usize| -> Option<u32> { digits.get(start..end)?.parse().ok() };

    let year: i32 = digits.get(0..4)?.parse().ok()?;
    let month = field(4, 6)?;
    let day = field(6, 8)?;
    let hour = field(8, 10).unwrap_or(0);
    let minute = field(10, 12).unwrap_or(0);
    let second = field(12, 14).unwrap_or(0);

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = NaiveTime::from_hms_opt(hour, minute, second)?;
    Some(DateTime::from_naive_utc_and_offset(NaiveDateTime::new(date, time), Utc))
}
