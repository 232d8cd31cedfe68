//! Identifier resolution.
//!
//! Type names combine an optional prefix with the definition name; member
//! names are derived from an ordered rule table so the reserved-word
//! precedence (`None`, `Unknown`, `All`) stays auditable in one place.
//! Both functions are pure: identical inputs always resolve to identical
//! strings.

use crate::model::TypeKind;

/// Resolves the final type name from the definition name and prefixes.
///
/// A per-definition prefix wins outright over the global prefix; with
/// neither, the type name is the bare definition name. A present prefix
/// joins with an underscore.
#[must_use]
pub fn resolve_type_name(
    definition_name: &str,
    local_prefix: Option<&str>,
    global_prefix: Option<&str>,
) -> String {
    match local_prefix.or(global_prefix) {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}_{definition_name}"),
        _ => definition_name.to_string(),
    }
}

/// One entry in the member-name rule table.
struct NamingRule {
    applies: fn(base_name: &str, kind: TypeKind) -> bool,
    render: fn(base_name: &str, type_name: &str) -> String,
}

/// The member-name rule table, evaluated top to bottom; first match wins.
///
/// The final rule is total, so every lookup resolves.
const MEMBER_NAME_RULES: &[NamingRule] = &[
    // Flag zero sentinel.
    NamingRule {
        applies: |base, kind| kind == TypeKind::Flags && base == "None",
        render: |_, type_name| format!("{type_name}_None"),
    },
    // Enum zero sentinel.
    NamingRule {
        applies: |base, kind| kind == TypeKind::Enum && base == "Unknown",
        render: |_, type_name| format!("{type_name}_Unknown"),
    },
    // Combination mask, either kind.
    NamingRule {
        applies: |base, _| base == "All",
        render: |_, type_name| format!("{type_name}_All"),
    },
    // Everything else.
    NamingRule {
        applies: |_, _| true,
        render: |base, type_name| format!("{type_name}_{base}"),
    },
];

/// Resolves the fully-qualified member name for the C surface.
#[must_use]
pub fn resolve_member_name(base_name: &str, type_name: &str, kind: TypeKind) -> String {
    MEMBER_NAME_RULES
        .iter()
        .find(|rule| (rule.applies)(base_name, kind))
        .map_or_else(
            // Unreachable: the table's final rule matches everything.
            || format!("{type_name}_{base_name}"),
            |rule| (rule.render)(base_name, type_name),
        )
}
