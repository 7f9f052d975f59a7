//! Map lookup links for a sample's location.
//!
//! Numeric coordinates take priority; a text locality/country search is the
//! fallback. With neither, there is no link — callers report "insufficient
//! data" instead of emitting something broken.

/// Parse a coordinate string written by a human.
///
/// Everything that is not an ASCII digit, a decimal point, or a leading
/// minus sign is stripped before parsing ("34.6° S" style markup). A string
/// that still fails to parse is treated as absent.
pub fn coordinate(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let mut cleaned = String::new();
    if trimmed.starts_with('-') {
        cleaned.push('-');
    }
    cleaned.extend(trimmed.chars().filter(|c| c.is_ascii_digit() || *c == '.'));
    cleaned.parse::<f64>().ok()
}

/// Build a lookup URL from coordinates or, failing that, locality/country.
pub fn lookup_url(latitude: &str, longitude: &str, locality: &str, country: &str) -> Option<String> {
    if let (Some(lat), Some(lon)) = (coordinate(latitude), coordinate(longitude)) {
        return Some(format!("https://www.google.com/maps?q={},{}", lat, lon));
    }

    let locality = locality.trim();
    let country = country.trim();
    if locality.is_empty() && country.is_empty() {
        return None;
    }

    let query = if !locality.is_empty() && !country.is_empty() {
        format!("{}, {}", locality, country)
    } else {
        format!("{}{}", locality, country)
    };
    Some(format!(
        "https://www.google.com/maps/search/{}",
        percent_encode(&query)
    ))
}

/// Minimal percent-encoding of a query path segment.
fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
