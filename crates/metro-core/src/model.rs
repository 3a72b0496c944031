use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Whole document: `metros` and `routes`, both order-preserving lists.
///
/// Fields here and in the record types are declared in lexicographic order,
/// and `coordinates` is a BTreeMap; serialization relies on that to emit
/// sorted keys at every level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub metros: Vec<Metro>,
    pub routes: Vec<Route>,
}

/// A city record. `name` is the identity used for lookup; uniqueness is
/// expected but not enforced, the first match wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metro {
    pub code: String,
    pub continent: String,
    pub coordinates: BTreeMap<String, i64>,
    pub country: String,
    pub name: String,
    pub population: i64,
    pub region: i64,
    pub timezone: f64,
}

/// A directed link between two port identifiers. Identity is the ordered
/// pair, so A-B and B-A are distinct routes. Endpoints are not required to
/// name an existing metro.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub distance: i64,
    pub ports: [String; 2],
}

impl Network {
    pub fn metro_by_name_mut(&mut self, name: &str) -> Option<&mut Metro> {
        self.metros.iter_mut().find(|m| m.name == name)
    }
}
