use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::EditError;
use crate::model::Network;

pub fn load(path: &Path) -> Result<Network, EditError> {
    let data = fs::read(path)?;
    Ok(serde_json::from_slice(&data)?)
}

/// Canonical form: keys sorted lexicographically, 4-space indent, no
/// trailing newline. Independent of how the input file was formatted.
pub fn to_canonical_string(net: &Network) -> Result<String, EditError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    net.serialize(&mut ser)?;
    Ok(String::from_utf8(buf).expect("serializer emits UTF-8"))
}

/// Rewrite the whole file with the canonical serialization.
pub fn store(path: &Path, net: &Network) -> Result<(), EditError> {
    let s = to_canonical_string(net)?;
    fs::write(path, s)?;
    Ok(())
}
