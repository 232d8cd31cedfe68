//! Raw configuration document types.
//!
//! These types mirror the on-disk document one-to-one and tolerate
//! missing fields with `#[serde(default)]`; the mapper turns them into
//! validated domain types and reports schema problems with the offending
//! definition's name.

#![allow(missing_docs)]

use serde::Deserialize;

/// Root structure of a configuration document.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDocument {
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub interfaces: Option<Vec<String>>,
    #[serde(default)]
    pub module_name: Option<String>,
    #[serde(default)]
    pub module_partition_name: Option<String>,
    #[serde(default)]
    pub allow_duplicate_type_names: Option<bool>,
    #[serde(default)]
    pub enums: Vec<RawEnum>,
    #[serde(default)]
    pub flags: Vec<RawFlags>,
}

/// A plain enumeration as declared in the document.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEnum {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub include_unknown: Option<bool>,
    /// Required; `None` here is a schema error, an empty list is not.
    #[serde(default)]
    pub elements: Option<Vec<RawMember>>,
}

/// A bit-flag set as declared in the document.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFlags {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub generate_common_combinations: Option<bool>,
    /// Required; `None` here is a schema error, an empty list is not.
    #[serde(default)]
    pub bits: Option<Vec<RawMember>>,
}

/// A member can be either a bare name string or a detailed object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawMember {
    Name(String),
    Detailed(RawDetailedMember),
}

/// Object form of a member declaration.
///
/// The `value` field is honoured for enum elements only; flag bits always
/// derive their value from declaration position.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDetailedMember {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
}
