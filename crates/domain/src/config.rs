//! Generator run configuration.

use serde::{Deserialize, Serialize};

use crate::definition::{EnumDefinition, FlagDefinition};

/// Target surfaces the generator can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InterfaceKind {
    /// C-compatible header with plain tagged enums.
    #[serde(rename = "c")]
    CHeader,
    /// C++20 module interface with `enum class` types and flag operators.
    #[serde(rename = "module")]
    CppModule,
}

impl InterfaceKind {
    /// The configuration tag naming this surface.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::CHeader => "c",
            Self::CppModule => "module",
        }
    }

    /// Parses a configuration tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "c" => Some(Self::CHeader),
            "module" => Some(Self::CppModule),
            _ => None,
        }
    }

    /// All surfaces, in default emission order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::CHeader, Self::CppModule]
    }
}

impl std::fmt::Display for InterfaceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// A full generation run: global settings plus the ordered definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Global type-name prefix; individual definitions may override it.
    #[serde(default)]
    pub prefix: Option<String>,
    /// Version string embedded in the generated banners.
    #[serde(default = "default_version")]
    pub version: String,
    /// Surfaces to emit, in order. Defaults to every surface.
    #[serde(default = "default_interfaces")]
    pub interfaces: Vec<InterfaceKind>,
    /// Module name for the module-interface surface.
    #[serde(default = "default_module_name")]
    pub module_name: String,
    /// Module partition name; also names the emitted `.cppm` file.
    #[serde(default = "default_module_partition")]
    pub module_partition_name: String,
    /// Accept two definitions resolving to the same type name instead of
    /// failing resolution.
    #[serde(default)]
    pub allow_duplicate_type_names: bool,
    /// Plain enumerations, in declaration order.
    #[serde(default)]
    pub enums: Vec<EnumDefinition>,
    /// Bit-flag sets, in declaration order.
    #[serde(default)]
    pub flags: Vec<FlagDefinition>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            prefix: None,
            version: default_version(),
            interfaces: default_interfaces(),
            module_name: default_module_name(),
            module_partition_name: default_module_partition(),
            allow_duplicate_type_names: false,
            enums: Vec::new(),
            flags: Vec::new(),
        }
    }
}

impl GeneratorConfig {
    /// Creates a configuration with default settings and no definitions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the global prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Appends an enum definition.
    #[must_use]
    pub fn with_enum(mut self, definition: EnumDefinition) -> Self {
        self.enums.push(definition);
        self
    }

    /// Appends a flag definition.
    #[must_use]
    pub fn with_flags(mut self, definition: FlagDefinition) -> Self {
        self.flags.push(definition);
        self
    }

    /// True when the given surface was requested.
    #[must_use]
    pub fn wants(&self, kind: InterfaceKind) -> bool {
        self.interfaces.contains(&kind)
    }
}

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_interfaces() -> Vec<InterfaceKind> {
    InterfaceKind::all().to_vec()
}

fn default_module_name() -> String {
    "generated".to_string()
}

fn default_module_partition() -> String {
    "enums".to_string()
}
