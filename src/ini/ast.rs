use serde::{Deserialize, Serialize};

/// A parsed INI document: sections in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IniDocument {
    pub sections: Vec<Section>,
}

/// A `[name]` section and its entries in source order.
///
/// Keys are not required to be unique; duplicate keys are all kept, later
/// entries do not overwrite earlier ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub entries: Vec<Entry>,
}

/// A single `key=value` entry, both sides trimmed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub key: String,
    pub value: String,
}
