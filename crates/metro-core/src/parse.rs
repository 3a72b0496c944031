use std::collections::BTreeMap;

use crate::error::EditError;

/// Parse an interleaved axis list `label1:v1:label2:v2:...` into a mapping
/// from label to integer. The token count must be even; a trailing unpaired
/// label is rejected. Duplicate labels keep the last value.
pub fn coordinates(s: &str) -> Result<BTreeMap<String, i64>, EditError> {
    let tokens: Vec<&str> = s.split(':').collect();
    if tokens.len() % 2 != 0 {
        return Err(malformed("coordinates", s));
    }
    let mut out = BTreeMap::new();
    for pair in tokens.chunks_exact(2) {
        let v: i64 = pair[1].trim().parse().map_err(|_| malformed("coordinates", s))?;
        out.insert(pair[0].to_string(), v);
    }
    Ok(out)
}

/// Split `SRC-DST` on the literal hyphen into the ordered endpoint pair.
/// Exactly two parts are required; empty parts are allowed.
pub fn route_pair(s: &str) -> Result<(String, String), EditError> {
    let mut parts = s.split('-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(src), Some(dst), None) => Ok((src.to_string(), dst.to_string())),
        _ => Err(malformed("route", s)),
    }
}

pub fn integer(field: &'static str, s: &str) -> Result<i64, EditError> {
    s.trim().parse().map_err(|_| malformed(field, s))
}

pub fn float(field: &'static str, s: &str) -> Result<f64, EditError> {
    s.trim().parse().map_err(|_| malformed(field, s))
}

/// Underscores stand in for spaces on the command line.
pub fn desnake(s: &str) -> String {
    s.replace('_', " ")
}

fn malformed(field: &'static str, value: &str) -> EditError {
    EditError::Malformed {
        field,
        value: value.to_string(),
    }
}
