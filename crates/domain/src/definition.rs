//! Declarative enum and flag definitions.
//!
//! These types are the in-memory form of the configuration document: a
//! read-only description of what to generate, constructed once by the
//! config loader and consumed by the resolver. Element order is
//! significant; it drives default value assignment.

use serde::{Deserialize, Serialize};

/// A single named member of a plain enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumElement {
    /// Member name as declared.
    pub name: String,
    /// Explicit value; defaults to the 1-based declaration position.
    #[serde(default)]
    pub value: Option<u32>,
    /// Optional human-readable description, rendered as a trailing comment.
    #[serde(default)]
    pub description: Option<String>,
}

impl EnumElement {
    /// Creates an element with a positional value.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            description: None,
        }
    }

    /// Sets an explicit value, overriding positional assignment.
    #[must_use]
    pub const fn with_value(mut self, value: u32) -> Self {
        self.value = Some(value);
        self
    }

    /// Attaches a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A plain (non-flag) enumeration definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDefinition {
    /// Type name, unique within a run.
    pub name: String,
    /// Per-definition prefix; overrides the global prefix when present.
    #[serde(default)]
    pub prefix: Option<String>,
    /// Optional description, rendered as a comment above the type.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether to emit the implicit `Unknown = 0` sentinel for an empty
    /// element list. A non-empty list always gets the sentinel.
    #[serde(default = "default_true")]
    pub include_unknown: bool,
    /// Members in declaration order.
    #[serde(default)]
    pub elements: Vec<EnumElement>,
}

impl EnumDefinition {
    /// Creates an empty enum definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix: None,
            description: None,
            include_unknown: true,
            elements: Vec::new(),
        }
    }

    /// Sets a per-definition prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Appends an element.
    #[must_use]
    pub fn with_element(mut self, element: EnumElement) -> Self {
        self.elements.push(element);
        self
    }
}

/// A single named member of a bit-flag set.
///
/// Flag bits never carry explicit values; every bit is assigned
/// `1 << position` from its 0-based declaration position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagBit {
    /// Bit name as declared.
    pub name: String,
    /// Optional human-readable description, rendered as a trailing comment.
    #[serde(default)]
    pub description: Option<String>,
}

impl FlagBit {
    /// Creates a flag bit.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Attaches a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A bit-flag set definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagDefinition {
    /// Type name, unique within a run.
    pub name: String,
    /// Per-definition prefix; overrides the global prefix when present.
    #[serde(default)]
    pub prefix: Option<String>,
    /// Optional description, rendered as a comment above the type.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether to derive an `All` combination mask for two or more bits.
    #[serde(default = "default_true")]
    pub generate_common_combinations: bool,
    /// Bits in declaration order; position determines the bit value.
    #[serde(default)]
    pub bits: Vec<FlagBit>,
}

impl FlagDefinition {
    /// Creates an empty flag definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix: None,
            description: None,
            generate_common_combinations: true,
            bits: Vec::new(),
        }
    }

    /// Sets a per-definition prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Appends a bit.
    #[must_use]
    pub fn with_bit(mut self, bit: FlagBit) -> Self {
        self.bits.push(bit);
        self
    }
}

const fn default_true() -> bool {
    true
}
