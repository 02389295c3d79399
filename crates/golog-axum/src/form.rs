//! Strict `application/x-www-form-urlencoded` parsing for `/log`.
//!
//! Fields may arrive in a form-encoded POST body, in the query string, or in
//! both. Body pairs are listed before query pairs so that a body value wins
//! under first-occurrence lookup. A malformed percent escape anywhere in the
//! request rejects the whole request.

use axum::http::{HeaderMap, Method, header};

use crate::error::HttpError;

/// Media type whose body carries form fields.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Decoded `(key, value)` pairs in request order.
pub type FormPairs = Vec<(String, String)>;

/// Collect pairs from a form-encoded POST body followed by the query string.
///
/// Bodies with any other content type, and bodies of non-POST requests, are
/// ignored.
pub fn request_pairs(
    method: &Method,
    query: Option<&str>,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<FormPairs, HttpError> {
    let mut pairs = Vec::new();
    if method == Method::POST && has_form_body(headers)? {
        pairs.extend(parse_form(body)?);
    }
    if let Some(query) = query {
        pairs.extend(parse_form(query.as_bytes())?);
    }
    Ok(pairs)
}

/// Whether the request declares a form-encoded body.
///
/// A missing or blank `Content-Type` means "not a form". A header with
/// parameters but no media type is malformed.
fn has_form_body(headers: &HeaderMap) -> Result<bool, HttpError> {
    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        return Ok(false);
    };
    let value = value
        .to_str()
        .map_err(|_| HttpError::MalformedRequest("mime: invalid media parameter".into()))?
        .trim();
    if value.is_empty() {
        return Ok(false);
    }

    let media_type = value.split(';').next().unwrap_or_default().trim();
    if media_type.is_empty() {
        return Err(HttpError::MalformedRequest("mime: no media type".into()));
    }
    Ok(media_type.eq_ignore_ascii_case(FORM_CONTENT_TYPE))
}

/// Parse `k=v&k2=v2`. Empty segments are skipped; a segment without `=` is a
/// key with an empty value.
pub fn parse_form(raw: &[u8]) -> Result<FormPairs, HttpError> {
    raw.split(|&b| b == b'&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            if segment.contains(&b';') {
                return Err(HttpError::MalformedRequest(
                    "invalid semicolon separator in query".into(),
                ));
            }
            let (key, value) = match segment.iter().position(|&b| b == b'=') {
                Some(eq) => (&segment[..eq], &segment[eq + 1..]),
                None => (segment, &[][..]),
            };
            Ok((decode_component(key)?, decode_component(value)?))
        })
        .collect()
}

fn decode_component(raw: &[u8]) -> Result<String, HttpError> {
    check_escapes(raw)?;
    let spaced: Vec<u8> = raw
        .iter()
        .map(|&b| if b == b'+' { b' ' } else { b })
        .collect();
    let decoded = urlencoding::decode_binary(&spaced);
    Ok(String::from_utf8_lossy(&decoded).into_owned())
}

/// Every `%` must be followed by two hex digits.
fn check_escapes(raw: &[u8]) -> Result<(), HttpError> {
    for (at, _) in raw.iter().enumerate().filter(|(_, b)| **b == b'%') {
        let escape = &raw[at..raw.len().min(at + 3)];
        if escape.len() < 3 || !escape[1..].iter().all(u8::is_ascii_hexdigit) {
            return Err(HttpError::MalformedRequest(format!(
                "invalid URL escape {:?}",
                String::from_utf8_lossy(escape)
            )));
        }
    }
    Ok(())
}
