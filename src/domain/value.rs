//! Option values
//!
//! A single sum type covers every storable shape, so the store can hold all
//! options in one map and check shapes on access.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use super::id::Shape;

/// Inner index to a (low, high) bound pair
pub type BoundTable = BTreeMap<u32, (u32, u32)>;

/// Inner index to a boolean flag
pub type FlagTable = BTreeMap<u32, bool>;

/// Inner index to another index
pub type IndexTable = BTreeMap<u32, u32>;

/// Family of flag tables, one per partitioning round
pub type FlagTableList = Vec<FlagTable>;

/// A stored option value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Int(i32),
    Float(f64),
    Text(String),
    BoundTable(BoundTable),
    FlagTable(FlagTable),
    IndexTable(IndexTable),
    FlagTableList(FlagTableList),
}

impl OptionValue {
    /// Returns the shape of this value
    pub fn shape(&self) -> Shape {
        match self {
            OptionValue::Bool(_) => Shape::Bool,
            OptionValue::Int(_) => Shape::Int,
            OptionValue::Float(_) => Shape::Float,
            OptionValue::Text(_) => Shape::Text,
            OptionValue::BoundTable(_) => Shape::BoundTable,
            OptionValue::FlagTable(_) => Shape::FlagTable,
            OptionValue::IndexTable(_) => Shape::IndexTable,
            OptionValue::FlagTableList(_) => Shape::FlagTableList,
        }
    }

    /// Returns the empty container (or zero scalar) for a shape
    pub fn empty(shape: Shape) -> Self {
        match shape {
            Shape::Bool => OptionValue::Bool(false),
            Shape::Int => OptionValue::Int(0),
            Shape::Float => OptionValue::Float(0.0),
            Shape::Text => OptionValue::Text(String::new()),
            Shape::BoundTable => OptionValue::BoundTable(BoundTable::new()),
            Shape::FlagTable => OptionValue::FlagTable(FlagTable::new()),
            Shape::IndexTable => OptionValue::IndexTable(IndexTable::new()),
            Shape::FlagTableList => OptionValue::FlagTableList(FlagTableList::new()),
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(v) => write!(f, "{}", v),
            OptionValue::Int(v) => write!(f, "{}", v),
            OptionValue::Float(v) => write!(f, "{}", v),
            OptionValue::Text(v) => write!(f, "\"{}\"", v),
            OptionValue::BoundTable(table) => {
                let entries: Vec<_> = table
                    .iter()
                    .map(|(k, (low, high))| format!("{}: ({}, {})", k, low, high))
                    .collect();
                write!(f, "{{{}}}", entries.join(", "))
            }
            OptionValue::FlagTable(table) => write!(f, "{}", format_map(table)),
            OptionValue::IndexTable(table) => write!(f, "{}", format_map(table)),
            OptionValue::FlagTableList(list) => {
                let tables: Vec<_> = list.iter().map(format_map).collect();
                write!(f, "[{}]", tables.join(", "))
            }
        }
    }
}

fn format_map<V: fmt::Display>(map: &BTreeMap<u32, V>) -> String {
    let entries: Vec<_> = map.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
    format!("{{{}}}", entries.join(", "))
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        OptionValue::Bool(v)
    }
}

impl From<i32> for OptionValue {
    fn from(v: i32) -> Self {
        OptionValue::Int(v)
    }
}

impl From<f64> for OptionValue {
    fn from(v: f64) -> Self {
        OptionValue::Float(v)
    }
}

impl From<String> for OptionValue {
    fn from(v: String) -> Self {
        OptionValue::Text(v)
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        OptionValue::Text(v.to_string())
    }
}
