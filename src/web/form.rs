//! application/x-www-form-urlencoded body parsing.

use crate::core::checkin::CheckinSubmission;

/// Build a submission from a POST body. Missing fields stay at their
/// defaults: empty strings fail validation downstream, absent
/// coordinates become the stored placeholder.
pub fn submission_from_body(body: &[u8]) -> CheckinSubmission {
    let fields = parse_form(body);
    CheckinSubmission {
        name: field_value(&fields, "name").unwrap_or_default(),
        id_number: field_value(&fields, "id").unwrap_or_default(),
        latitude: field_value(&fields, "lat"),
        longitude: field_value(&fields, "lon"),
    }
}

/// Decode `key=value&key=value` pairs. Pairs that fail to decode are
/// dropped rather than failing the whole body.
fn parse_form(body: &[u8]) -> Vec<(String, String)> {
    let Ok(text) = std::str::from_utf8(body) else {
        return Vec::new();
    };

    let mut fields = Vec::new();
    for pair in text.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if let Some(key) = decode_component(key)
            && let Some(value) = decode_component(value)
        {
            fields.push((key, value));
        }
    }
    fields
}

fn field_value(fields: &[(String, String)], key: &str) -> Option<String> {
    fields
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.clone())
}

/// '+' means space, %XX is a hex-encoded byte. Invalid escapes or
/// non-UTF-8 results decode to `None`.
fn decode_component(value: &str) -> Option<String> {
    let bytes = value.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut idx = 0usize;
    while idx < bytes.len() {
        match bytes[idx] {
            b'+' => {
                out.push(b' ');
                idx += 1;
            }
            b'%' if idx + 2 < bytes.len() => {
                let hex = |b: u8| match b {
                    b'0'..=b'9' => Some(b - b'0'),
                    b'a'..=b'f' => Some(b - b'a' + 10),
                    b'A'..=b'F' => Some(b - b'A' + 10),
                    _ => None,
                };
                let hi = hex(bytes[idx + 1])?;
                let lo = hex(bytes[idx + 2])?;
                out.push((hi << 4) | lo);
                idx += 3;
            }
            b'%' => return None,
            byte => {
                out.push(byte);
                idx += 1;
            }
        }
    }
    String::from_utf8(out).ok()
}
