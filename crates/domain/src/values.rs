//! Value assignment and model resolution.
//!
//! Turns validated definitions into the resolved model: sequential 1-based
//! values for enumerants (0 reserved for the `Unknown` sentinel),
//! power-of-two values for flag bits (0 reserved for `None`), and the
//! derived `All` combination mask.

use crate::config::GeneratorConfig;
use crate::definition::{EnumDefinition, FlagDefinition};
use crate::error::{DomainError, DomainResult};
use crate::model::{MemberRole, ResolvedMember, ResolvedModel, ResolvedType, TypeKind};
use crate::naming::{resolve_member_name, resolve_type_name};

/// Maximum number of declarable bits per flag definition. Bit 31 is left
/// unused so every mask fits the 32-bit representation without sign
/// ambiguity.
pub const MAX_FLAG_BITS: usize = 31;

/// Resolves the full configuration into the emitter-ready model.
///
/// Enums resolve first, then flags, each group in declaration order.
///
/// # Errors
///
/// Returns [`DomainError::FlagOverflow`] when a flag definition declares
/// more than [`MAX_FLAG_BITS`] bits, [`DomainError::ReservedName`] when a
/// declared member collides with a generated sentinel, and
/// [`DomainError::DuplicateTypeName`] when two definitions resolve to the
/// same type name (unless the configuration allows it).
pub fn resolve_model(config: &GeneratorConfig) -> DomainResult<ResolvedModel> {
    let global_prefix = config.prefix.as_deref();

    let mut types = Vec::with_capacity(config.enums.len() + config.flags.len());
    for definition in &config.enums {
        types.push(resolve_enum(definition, global_prefix)?);
    }
    for definition in &config.flags {
        types.push(resolve_flags(definition, global_prefix)?);
    }

    if !config.allow_duplicate_type_names {
        check_type_name_collisions(&types)?;
    }

    Ok(ResolvedModel {
        version: config.version.clone(),
        global_prefix: config.prefix.clone(),
        module_name: config.module_name.clone(),
        module_partition_name: config.module_partition_name.clone(),
        types,
    })
}

fn resolve_enum(
    definition: &EnumDefinition,
    global_prefix: Option<&str>,
) -> DomainResult<ResolvedType> {
    let c_type_name = resolve_type_name(
        &definition.name,
        definition.prefix.as_deref(),
        global_prefix,
    );

    for element in &definition.elements {
        if element.name == "Unknown" {
            return Err(DomainError::ReservedName {
                definition: definition.name.clone(),
                name: element.name.clone(),
            });
        }
    }

    let mut members = Vec::with_capacity(definition.elements.len() + 1);

    // The zero sentinel is suppressed only for an empty enum that opted out.
    if !definition.elements.is_empty() || definition.include_unknown {
        members.push(sentinel_member("Unknown", &c_type_name, TypeKind::Enum));
    }

    // Positions stay 1-based and are not renumbered around explicit values;
    // explicit/implicit collisions are accepted input.
    for (position, element) in (1_u32..).zip(definition.elements.iter()) {
        members.push(ResolvedMember {
            base_name: element.name.clone(),
            c_name: resolve_member_name(&element.name, &c_type_name, TypeKind::Enum),
            value: element.value.unwrap_or(position),
            description: element.description.clone(),
            role: MemberRole::Declared,
        });
    }

    Ok(ResolvedType {
        kind: TypeKind::Enum,
        name: definition.name.clone(),
        c_name: c_type_name,
        description: definition.description.clone(),
        members,
    })
}

fn resolve_flags(
    definition: &FlagDefinition,
    global_prefix: Option<&str>,
) -> DomainResult<ResolvedType> {
    if definition.bits.len() > MAX_FLAG_BITS {
        return Err(DomainError::FlagOverflow {
            definition: definition.name.clone(),
            bits: definition.bits.len(),
        });
    }

    let c_type_name = resolve_type_name(
        &definition.name,
        definition.prefix.as_deref(),
        global_prefix,
    );

    let derives_all = definition.generate_common_combinations && definition.bits.len() >= 2;

    for bit in &definition.bits {
        if bit.name == "None" || (derives_all && bit.name == "All") {
            return Err(DomainError::ReservedName {
                definition: definition.name.clone(),
                name: bit.name.clone(),
            });
        }
    }

    let mut members = Vec::with_capacity(definition.bits.len() + 2);
    members.push(sentinel_member("None", &c_type_name, TypeKind::Flags));

    for (index, bit) in (0_u32..).zip(definition.bits.iter()) {
        members.push(ResolvedMember {
            base_name: bit.name.clone(),
            c_name: resolve_member_name(&bit.name, &c_type_name, TypeKind::Flags),
            value: 1_u32 << index,
            description: bit.description.clone(),
            role: MemberRole::Declared,
        });
    }

    if derives_all {
        let mask = members
            .iter()
            .filter(|m| m.role == MemberRole::Declared)
            .fold(0_u32, |acc, m| acc | m.value);
        members.push(ResolvedMember {
            base_name: "All".to_string(),
            c_name: resolve_member_name("All", &c_type_name, TypeKind::Flags),
            value: mask,
            description: None,
            role: MemberRole::CombinationMask,
        });
    }

    Ok(ResolvedType {
        kind: TypeKind::Flags,
        name: definition.name.clone(),
        c_name: c_type_name,
        description: definition.description.clone(),
        members,
    })
}

fn sentinel_member(base_name: &str, c_type_name: &str, kind: TypeKind) -> ResolvedMember {
    ResolvedMember {
        base_name: base_name.to_string(),
        c_name: resolve_member_name(base_name, c_type_name, kind),
        value: 0,
        description: None,
        role: MemberRole::Sentinel,
    }
}

fn check_type_name_collisions(types: &[ResolvedType]) -> DomainResult<()> {
    for (i, first) in types.iter().enumerate() {
        for second in &types[i + 1..] {
            if first.c_name == second.c_name {
                return Err(DomainError::DuplicateTypeName {
                    first: first.name.clone(),
                    second: second.name.clone(),
                    type_name: first.c_name.clone(),
                });
            }
        }
    }
    Ok(())
}
