//! C++ module interface emitter.
//!
//! Renders every resolved type as an `export enum class` over
//! `std::uint32_t` inside one module partition, and follows each flag
//! type with its operator suite and helper functions. Every operation is
//! semantically plain integer bit manipulation on the underlying
//! representation.

use enumforge_application::{Emitter, RenderContext};
use enumforge_domain::{InterfaceKind, ResolvedModel, ResolvedType};

/// Emitter for the C++20 module-interface surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModuleInterfaceEmitter;

impl ModuleInterfaceEmitter {
    /// Creates a new module interface emitter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Emitter for ModuleInterfaceEmitter {
    fn kind(&self) -> InterfaceKind {
        InterfaceKind::CppModule
    }

    fn file_name(&self, model: &ResolvedModel) -> String {
        format!("{}.cppm", model.module_partition_name)
    }

    fn render(&self, model: &ResolvedModel, context: &RenderContext) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "/*\n * Auto-generated C++ module interface file\n * Generation time: {}\n * Version: {}\n */\n\n",
            context.timestamp(),
            model.version
        ));
        out.push_str(&format!(
            "export module {}:{};\n\n",
            model.module_name, model.module_partition_name
        ));
        out.push_str("import std;\n\n");
        out.push_str(&format!("namespace {} {{\n", model.module_name));

        for resolved_type in model.enums() {
            render_enum(&mut out, resolved_type);
        }
        for resolved_type in model.flags() {
            render_flags(&mut out, resolved_type);
        }

        out.push_str(&format!("\n}} // namespace {}\n", model.module_name));
        out
    }
}

fn render_enum(out: &mut String, resolved_type: &ResolvedType) {
    if let Some(description) = &resolved_type.description {
        out.push_str(&format!("\n    /* {description} */\n"));
    }

    out.push_str(&format!(
        "    export enum class {} : std::uint32_t {{\n",
        resolved_type.name
    ));
    // The zero sentinel is implicit on this surface.
    out.push_str("        Unknown = 0,\n");
    for member in resolved_type.declared_members() {
        render_member(out, &member.base_name, member.value, member.description.as_deref());
    }
    out.push_str("    };\n");
}

fn render_flags(out: &mut String, resolved_type: &ResolvedType) {
    if let Some(description) = &resolved_type.description {
        out.push_str(&format!("\n    /* {description} */\n"));
    }

    out.push_str(&format!(
        "    export enum class {} : std::uint32_t {{\n",
        resolved_type.name
    ));
    out.push_str("        None = 0,\n");
    for member in resolved_type.declared_members() {
        render_member(out, &member.base_name, member.value, member.description.as_deref());
    }
    if let Some(mask) = resolved_type.combination_mask() {
        out.push_str(&format!("        All = {},\n", mask.value));
    }
    out.push_str("    };\n\n");

    render_flag_operators(out, &resolved_type.name);
    render_flag_functions(out, &resolved_type.name);
}

fn render_member(out: &mut String, name: &str, value: u32, description: Option<&str>) {
    match description {
        Some(text) => out.push_str(&format!("        {name} = {value},  // {text}\n")),
        None => out.push_str(&format!("        {name} = {value},\n")),
    }
}

fn render_flag_operators(out: &mut String, name: &str) {
    out.push_str(&format!("    /* {name} flag operators */\n"));

    for op in ["|", "&", "^"] {
        out.push_str(&format!(
            "    export constexpr {name} operator{op}({name} a, {name} b) noexcept {{\n        return static_cast<{name}>(static_cast<std::uint32_t>(a) {op} static_cast<std::uint32_t>(b));\n    }}\n\n"
        ));
    }

    out.push_str(&format!(
        "    export constexpr {name} operator~({name} a) noexcept {{\n        return static_cast<{name}>(~static_cast<std::uint32_t>(a));\n    }}\n\n"
    ));

    for op in ["|", "&", "^"] {
        out.push_str(&format!(
            "    export inline {name}& operator{op}=({name}& a, {name} b) noexcept {{\n        a = static_cast<{name}>(static_cast<std::uint32_t>(a) {op} static_cast<std::uint32_t>(b));\n        return a;\n    }}\n\n"
        ));
    }
}

fn render_flag_functions(out: &mut String, name: &str) {
    out.push_str(&format!("    /* {name} flag operation functions */\n"));

    out.push_str(&format!(
        "    export constexpr bool HasFlag({name} flags, {name} flag) noexcept {{\n        return (static_cast<std::uint32_t>(flags) & static_cast<std::uint32_t>(flag)) != 0;\n    }}\n\n"
    ));

    out.push_str(&format!(
        "    export constexpr {name} SetFlag({name} flags, {name} flag, bool enable) noexcept {{\n        if (enable) {{\n            return flags | flag;\n        }} else {{\n            return flags & ~flag;\n        }}\n    }}\n\n"
    ));

    out.push_str(&format!(
        "    export constexpr {name} AddFlag({name} flags, {name} flag) noexcept {{\n        return flags | flag;\n    }}\n\n"
    ));

    out.push_str(&format!(
        "    export constexpr {name} RemoveFlag({name} flags, {name} flag) noexcept {{\n        return flags & ~flag;\n    }}\n\n"
    ));

    out.push_str(&format!(
        "    export constexpr {name} ToggleFlag({name} flags, {name} flag) noexcept {{\n        return flags ^ flag;\n    }}\n\n"
    ));

    // Always returns the zero value; the input is intentionally ignored.
    out.push_str(&format!(
        "    export constexpr {name} ClearFlags({name}) noexcept {{\n        return {name}::None;\n    }}\n"
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use enumforge_domain::{
        EnumDefinition, EnumElement, FlagBit, FlagDefinition, GeneratorConfig, resolve_model,
    };
    use pretty_assertions::assert_eq;

    fn context() -> RenderContext {
        RenderContext::new(
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
                .single()
                .expect("valid timestamp"),
        )
    }

    fn sample_model() -> ResolvedModel {
        let config = GeneratorConfig::new()
            .with_enum(
                EnumDefinition::new("Color")
                    .with_element(EnumElement::new("Red"))
                    .with_element(EnumElement::new("Green"))
                    .with_element(EnumElement::new("Blue")),
            )
            .with_flags(
                FlagDefinition::new("Perm")
                    .with_bit(FlagBit::new("Read"))
                    .with_bit(FlagBit::new("Write"))
                    .with_bit(FlagBit::new("Exec")),
            );
        resolve_model(&config).expect("resolves")
    }

    #[test]
    fn test_file_name_follows_partition() {
        let mut model = sample_model();
        model.module_partition_name = "types".to_string();
        assert_eq!(
            ModuleInterfaceEmitter::new().file_name(&model),
            "types.cppm"
        );
    }

    #[test]
    fn test_module_declaration_and_namespace() {
        let module = ModuleInterfaceEmitter::new().render(&sample_model(), &context());
        assert!(module.contains("export module generated:enums;"));
        assert!(module.contains("import std;"));
        assert!(module.contains("namespace generated {"));
        assert!(module.ends_with("} // namespace generated\n"));
    }

    #[test]
    fn test_enum_class_members_use_bare_names() {
        let module = ModuleInterfaceEmitter::new().render(&sample_model(), &context());
        let expected = "    export enum class Color : std::uint32_t {\n        Unknown = 0,\n        Red = 1,\n        Green = 2,\n        Blue = 3,\n    };\n";
        assert!(module.contains(expected), "module was:\n{module}");
    }

    #[test]
    fn test_flag_enum_class_with_all_mask() {
        let module = ModuleInterfaceEmitter::new().render(&sample_model(), &context());
        let expected = "    export enum class Perm : std::uint32_t {\n        None = 0,\n        Read = 1,\n        Write = 2,\n        Exec = 4,\n        All = 7,\n    };\n";
        assert!(module.contains(expected), "module was:\n{module}");
    }

    #[test]
    fn test_operator_suite_is_complete() {
        let module = ModuleInterfaceEmitter::new().render(&sample_model(), &context());
        for signature in [
            "export constexpr Perm operator|(Perm a, Perm b) noexcept",
            "export constexpr Perm operator&(Perm a, Perm b) noexcept",
            "export constexpr Perm operator^(Perm a, Perm b) noexcept",
            "export constexpr Perm operator~(Perm a) noexcept",
            "export inline Perm& operator|=(Perm& a, Perm b) noexcept",
            "export inline Perm& operator&=(Perm& a, Perm b) noexcept",
            "export inline Perm& operator^=(Perm& a, Perm b) noexcept",
        ] {
            assert!(module.contains(signature), "missing: {signature}");
        }
    }

    #[test]
    fn test_flag_functions_match_bitwise_semantics() {
        let module = ModuleInterfaceEmitter::new().render(&sample_model(), &context());
        assert!(module.contains(
            "export constexpr bool HasFlag(Perm flags, Perm flag) noexcept {\n        return (static_cast<std::uint32_t>(flags) & static_cast<std::uint32_t>(flag)) != 0;\n    }"
        ));
        assert!(module.contains(
            "export constexpr Perm SetFlag(Perm flags, Perm flag, bool enable) noexcept"
        ));
        assert!(module.contains("export constexpr Perm AddFlag(Perm flags, Perm flag) noexcept {\n        return flags | flag;\n    }"));
        assert!(module.contains("export constexpr Perm RemoveFlag(Perm flags, Perm flag) noexcept {\n        return flags & ~flag;\n    }"));
        assert!(module.contains("export constexpr Perm ToggleFlag(Perm flags, Perm flag) noexcept {\n        return flags ^ flag;\n    }"));
    }

    #[test]
    fn test_clear_flags_returns_none_and_ignores_input() {
        let module = ModuleInterfaceEmitter::new().render(&sample_model(), &context());
        assert!(module.contains(
            "export constexpr Perm ClearFlags(Perm) noexcept {\n        return Perm::None;\n    }"
        ));
    }

    #[test]
    fn test_operators_emitted_per_flag_type_only() {
        let module = ModuleInterfaceEmitter::new().render(&sample_model(), &context());
        assert!(!module.contains("operator|(Color"));
        assert!(module.contains("/* Perm flag operators */"));
    }

    #[test]
    fn test_enum_sentinel_is_always_emitted() {
        let mut definition = EnumDefinition::new("Empty");
        definition.include_unknown = false;
        let config = GeneratorConfig::new().with_enum(definition);
        let model = resolve_model(&config).expect("resolves");

        let module = ModuleInterfaceEmitter::new().render(&model, &context());
        // The module surface always carries the sentinel, even when the C
        // surface suppresses it for an empty opted-out enum.
        assert!(module.contains("    export enum class Empty : std::uint32_t {\n        Unknown = 0,\n    };\n"));
    }

    #[test]
    fn test_descriptions_become_comments() {
        let mut config = GeneratorConfig::new().with_flags(
            FlagDefinition::new("Perm")
                .with_bit(FlagBit::new("Read").with_description("read access"))
                .with_bit(FlagBit::new("Write")),
        );
        config.flags[0].description = Some("Access permissions".to_string());
        let model = resolve_model(&config).expect("resolves");

        let module = ModuleInterfaceEmitter::new().render(&model, &context());
        assert!(module.contains("\n    /* Access permissions */\n    export enum class Perm"));
        assert!(module.contains("        Read = 1,  // read access\n"));
    }

    #[test]
    fn test_banner_carries_time_and_version() {
        let module = ModuleInterfaceEmitter::new().render(&sample_model(), &context());
        assert!(module.starts_with("/*\n * Auto-generated C++ module interface file"));
        assert!(module.contains("Generation time: 2024-05-01 12:00:00"));
        assert!(module.contains("Version: 1.0.0"));
    }
}
