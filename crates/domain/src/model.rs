//! Resolved intermediate representation.
//!
//! The output of name and value resolution: a flat, ordered description of
//! every type and member with final identifiers and numeric values already
//! assigned. Emitters render this model into their target surface without
//! re-deriving anything.

/// Whether a resolved type is a plain enumeration or a bit-flag set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Plain enumeration with sequential values.
    Enum,
    /// Bit-flag set with power-of-two values.
    Flags,
}

/// How a resolved member came to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberRole {
    /// Auto-inserted zero member (`Unknown` for enums, `None` for flags).
    Sentinel,
    /// Declared in the configuration.
    Declared,
    /// Auto-derived `All` combination mask.
    CombinationMask,
}

/// A single member with its final identifiers and value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMember {
    /// Bare member name, used by the module surface.
    pub base_name: String,
    /// Fully-qualified name, used by the C surface.
    pub c_name: String,
    /// Assigned value on the 32-bit unsigned representation.
    pub value: u32,
    /// Description carried over from the definition.
    pub description: Option<String>,
    /// Provenance of this member.
    pub role: MemberRole,
}

/// A resolved type: final names plus its ordered member list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    /// Enumeration or flag set.
    pub kind: TypeKind,
    /// Bare type name, used by the module surface.
    pub name: String,
    /// Prefixed type name, used by the C surface.
    pub c_name: String,
    /// Description carried over from the definition.
    pub description: Option<String>,
    /// Members in emission order.
    pub members: Vec<ResolvedMember>,
}

impl ResolvedType {
    /// Members declared in the configuration, skipping generated ones.
    pub fn declared_members(&self) -> impl Iterator<Item = &ResolvedMember> {
        self.members
            .iter()
            .filter(|m| m.role == MemberRole::Declared)
    }

    /// The derived `All` mask, when one was generated.
    #[must_use]
    pub fn combination_mask(&self) -> Option<&ResolvedMember> {
        self.members
            .iter()
            .find(|m| m.role == MemberRole::CombinationMask)
    }
}

/// The complete resolved model for one generation run.
///
/// Types are ordered enums-first, then flags, each group in declaration
/// order; emitters iterate this list as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedModel {
    /// Version string for the generated banners.
    pub version: String,
    /// Global prefix, echoed in the C header banner.
    pub global_prefix: Option<String>,
    /// Module name for the module surface.
    pub module_name: String,
    /// Module partition name; names the emitted module file.
    pub module_partition_name: String,
    /// Resolved types in emission order.
    pub types: Vec<ResolvedType>,
}

impl ResolvedModel {
    /// Resolved plain enumerations, in emission order.
    pub fn enums(&self) -> impl Iterator<Item = &ResolvedType> {
        self.types.iter().filter(|t| t.kind == TypeKind::Enum)
    }

    /// Resolved flag sets, in emission order.
    pub fn flags(&self) -> impl Iterator<Item = &ResolvedType> {
        self.types.iter().filter(|t| t.kind == TypeKind::Flags)
    }
}
