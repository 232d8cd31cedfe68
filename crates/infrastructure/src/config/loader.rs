//! Configuration loader.
//!
//! Reads a JSON or YAML document, parses it into the raw types and maps
//! those into a validated [`GeneratorConfig`]. Schema problems are
//! reported with the offending definition's name, or its list index when
//! the name itself is missing.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use enumforge_domain::{
    EnumDefinition, EnumElement, FlagBit, FlagDefinition, GeneratorConfig, InterfaceKind,
};

use super::types::{RawDocument, RawEnum, RawFlags, RawMember};

/// Errors produced while loading a configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document could not be read from disk.
    #[error("failed to read configuration '{path}': {source}")]
    Io {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The document is not well-formed JSON/YAML.
    #[error("malformed configuration document: {0}")]
    Parse(String),

    /// A definition is missing a required field.
    #[error("invalid definition '{definition}': {message}")]
    Schema {
        /// Name of the offending definition, or its list index when the
        /// name itself is missing.
        definition: String,
        /// What is wrong with it.
        message: String,
    },

    /// The `interfaces` list names an unsupported surface.
    #[error("unknown interface tag '{tag}' (expected 'c' or 'module')")]
    UnknownInterface {
        /// The unrecognised tag.
        tag: String,
    },
}

/// Loads and validates a configuration document.
///
/// The format is chosen by file extension: `.yaml`/`.yml` parse as YAML,
/// everything else as JSON.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] when the file cannot be read,
/// [`ConfigError::Parse`] when the document is malformed, and
/// [`ConfigError::Schema`]/[`ConfigError::UnknownInterface`] when it is
/// well-formed but invalid.
pub fn load_config(path: &Path) -> Result<GeneratorConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));

    let raw: RawDocument = if is_yaml {
        serde_yaml::from_str(&text).map_err(|e| ConfigError::Parse(e.to_string()))?
    } else {
        serde_json::from_str(&text).map_err(|e| ConfigError::Parse(e.to_string()))?
    };

    debug!(path = %path.display(), "configuration document parsed");
    map_document(raw)
}

/// Maps a parsed raw document into a validated [`GeneratorConfig`].
///
/// # Errors
///
/// Returns [`ConfigError::Schema`] for missing required fields and
/// [`ConfigError::UnknownInterface`] for unrecognised interface tags.
pub fn map_document(raw: RawDocument) -> Result<GeneratorConfig, ConfigError> {
    let mut config = GeneratorConfig::new();
    config.prefix = raw.prefix;

    if let Some(version) = raw.version {
        config.version = version;
    }
    if let Some(module_name) = raw.module_name {
        config.module_name = module_name;
    }
    if let Some(partition) = raw.module_partition_name {
        config.module_partition_name = partition;
    }
    if let Some(allow) = raw.allow_duplicate_type_names {
        config.allow_duplicate_type_names = allow;
    }

    if let Some(tags) = raw.interfaces {
        let mut kinds = Vec::with_capacity(tags.len());
        for tag in tags {
            let kind = InterfaceKind::from_tag(&tag)
                .ok_or_else(|| ConfigError::UnknownInterface { tag: tag.clone() })?;
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
        config.interfaces = kinds;
    }

    for (index, raw_enum) in raw.enums.into_iter().enumerate() {
        config.enums.push(map_enum(raw_enum, index)?);
    }
    for (index, raw_flags) in raw.flags.into_iter().enumerate() {
        config.flags.push(map_flags(raw_flags, index)?);
    }

    Ok(config)
}

fn map_enum(raw: RawEnum, index: usize) -> Result<EnumDefinition, ConfigError> {
    let name = required_name(raw.name, "enums", index)?;
    let elements = raw.elements.ok_or_else(|| ConfigError::Schema {
        definition: name.clone(),
        message: "missing required field 'elements'".to_string(),
    })?;

    let mut definition = EnumDefinition::new(name.clone());
    definition.prefix = raw.prefix;
    definition.description = raw.description;
    if let Some(include_unknown) = raw.include_unknown {
        definition.include_unknown = include_unknown;
    }

    for (member_index, member) in elements.into_iter().enumerate() {
        definition.elements.push(map_enum_element(member, member_index, &name)?);
    }

    Ok(definition)
}

fn map_enum_element(
    member: RawMember,
    index: usize,
    definition: &str,
) -> Result<EnumElement, ConfigError> {
    match member {
        RawMember::Name(member_name) => Ok(EnumElement::new(member_name)),
        RawMember::Detailed(detail) => {
            let member_name = detail.name.ok_or_else(|| ConfigError::Schema {
                definition: definition.to_string(),
                message: format!("element {index} is missing required field 'name'"),
            })?;
            let mut element = EnumElement::new(member_name.clone());
            if let Some(value) = detail.value {
                element.value = Some(u32::try_from(value).map_err(|_| ConfigError::Schema {
                    definition: definition.to_string(),
                    message: format!(
                        "element '{member_name}' value {value} does not fit a 32-bit unsigned representation"
                    ),
                })?);
            }
            element.description = detail.description;
            Ok(element)
        }
    }
}

fn map_flags(raw: RawFlags, index: usize) -> Result<FlagDefinition, ConfigError> {
    let name = required_name(raw.name, "flags", index)?;
    let bits = raw.bits.ok_or_else(|| ConfigError::Schema {
        definition: name.clone(),
        message: "missing required field 'bits'".to_string(),
    })?;

    let mut definition = FlagDefinition::new(name.clone());
    definition.prefix = raw.prefix;
    definition.description = raw.description;
    if let Some(combinations) = raw.generate_common_combinations {
        definition.generate_common_combinations = combinations;
    }

    for (member_index, member) in bits.into_iter().enumerate() {
        definition.bits.push(map_flag_bit(member, member_index, &name)?);
    }

    Ok(definition)
}

fn map_flag_bit(member: RawMember, index: usize, definition: &str) -> Result<FlagBit, ConfigError> {
    match member {
        RawMember::Name(bit_name) => Ok(FlagBit::new(bit_name)),
        RawMember::Detailed(detail) => {
            let bit_name = detail.name.ok_or_else(|| ConfigError::Schema {
                definition: definition.to_string(),
                message: format!("bit {index} is missing required field 'name'"),
            })?;
            // Flag bits always derive 1 << position; a declared value is
            // ignored, not honoured.
            if let Some(value) = detail.value {
                warn!(
                    definition,
                    bit = %bit_name,
                    value,
                    "flag bits derive their value from declaration position; explicit value ignored"
                );
            }
            let mut bit = FlagBit::new(bit_name);
            bit.description = detail.description;
            Ok(bit)
        }
    }
}

fn required_name(
    name: Option<String>,
    section: &str,
    index: usize,
) -> Result<String, ConfigError> {
    name.filter(|n| !n.is_empty())
        .ok_or_else(|| ConfigError::Schema {
            definition: format!("{section}[{index}]"),
            message: "missing required field 'name'".to_string(),
        })
}
