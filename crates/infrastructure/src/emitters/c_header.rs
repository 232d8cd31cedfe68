//! C header emitter.
//!
//! Renders every resolved type as a plain tagged `typedef enum` using the
//! fully-qualified member names. The C surface carries no operator
//! overloads; callers manipulate flag values with ordinary bitwise
//! arithmetic on the underlying integer representation.

use enumforge_application::{Emitter, RenderContext};
use enumforge_domain::{InterfaceKind, ResolvedModel, ResolvedType};

/// Fixed name of the generated header inside the target directory.
pub const C_HEADER_FILE_NAME: &str = "enums.h";

const INCLUDE_GUARD: &str = "ENUMFORGE_ENUMS_H";

/// Emitter for the C-compatible header surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct CHeaderEmitter;

impl CHeaderEmitter {
    /// Creates a new C header emitter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Emitter for CHeaderEmitter {
    fn kind(&self) -> InterfaceKind {
        InterfaceKind::CHeader
    }

    fn file_name(&self, _model: &ResolvedModel) -> String {
        C_HEADER_FILE_NAME.to_string()
    }

    fn render(&self, model: &ResolvedModel, context: &RenderContext) -> String {
        let prefix_display = model
            .global_prefix
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or("(none)");

        let mut out = String::new();
        out.push_str(&format!(
            "/*\n * Auto-generated enum and flag header file\n * Generation time: {}\n * Version: {}\n * Global prefix: '{}'\n */\n\n",
            context.timestamp(),
            model.version,
            prefix_display
        ));
        out.push_str(&format!(
            "#ifndef {INCLUDE_GUARD}\n#define {INCLUDE_GUARD}\n\n"
        ));
        out.push_str("#include <stdint.h>\n\n");
        out.push_str("#ifdef __cplusplus\nextern \"C\" {\n#endif\n\n");

        // Emission order is the model's: enums first, then flags.
        for resolved_type in &model.types {
            render_type(&mut out, resolved_type);
        }

        out.push_str("#ifdef __cplusplus\n}\n#endif\n\n");
        out.push_str(&format!("#endif /* {INCLUDE_GUARD} */\n"));
        out
    }
}

fn render_type(out: &mut String, resolved_type: &ResolvedType) {
    if let Some(description) = &resolved_type.description {
        out.push_str(&format!("/* {description} */\n"));
    }

    out.push_str(&format!("typedef enum {} {{\n", resolved_type.c_name));

    for member in &resolved_type.members {
        match &member.description {
            Some(description) => out.push_str(&format!(
                "    {} = {},  /* {} */\n",
                member.c_name, member.value, description
            )),
            None => out.push_str(&format!("    {} = {},\n", member.c_name, member.value)),
        }
    }

    out.push_str(&format!("}} {};\n\n", resolved_type.c_name));
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
            .with_prefix("App")
            .with_enum(
                EnumDefinition::new("Color")
                    .with_element(EnumElement::new("Red"))
                    .with_element(EnumElement::new("Green"))
                    .with_element(EnumElement::new("Blue")),
            )
            .with_flags(
                FlagDefinition::new("Perm")
                    .with_prefix("")
                    .with_bit(FlagBit::new("Read"))
                    .with_bit(FlagBit::new("Write"))
                    .with_bit(FlagBit::new("Exec")),
            );
        resolve_model(&config).expect("resolves")
    }

    #[test]
    fn test_file_name_is_fixed() {
        assert_eq!(
            CHeaderEmitter::new().file_name(&sample_model()),
            "enums.h"
        );
    }

    #[test]
    fn test_banner_carries_time_version_and_prefix() {
        let header = CHeaderEmitter::new().render(&sample_model(), &context());
        assert!(header.contains("Generation time: 2024-05-01 12:00:00"));
        assert!(header.contains("Version: 1.0.0"));
        assert!(header.contains("Global prefix: 'App'"));
    }

    #[test]
    fn test_header_is_guarded_and_extern_c_wrapped() {
        let header = CHeaderEmitter::new().render(&sample_model(), &context());
        assert!(header.starts_with("/*\n * Auto-generated"));
        assert!(header.contains("#ifndef ENUMFORGE_ENUMS_H\n#define ENUMFORGE_ENUMS_H"));
        assert!(header.contains("#include <stdint.h>"));
        assert!(header.contains("#ifdef __cplusplus\nextern \"C\" {\n#endif"));
        assert!(header.ends_with("#endif /* ENUMFORGE_ENUMS_H */\n"));
    }

    #[test]
    fn test_prefixed_enum_members() {
        let header = CHeaderEmitter::new().render(&sample_model(), &context());
        let expected = "typedef enum App_Color {\n    App_Color_Unknown = 0,\n    App_Color_Red = 1,\n    App_Color_Green = 2,\n    App_Color_Blue = 3,\n} App_Color;\n";
        assert!(header.contains(expected), "header was:\n{header}");
    }

    #[test]
    fn test_flag_members_and_all_mask() {
        let header = CHeaderEmitter::new().render(&sample_model(), &context());
        let expected = "typedef enum Perm {\n    Perm_None = 0,\n    Perm_Read = 1,\n    Perm_Write = 2,\n    Perm_Exec = 4,\n    Perm_All = 7,\n} Perm;\n";
        assert!(header.contains(expected), "header was:\n{header}");
    }

    #[test]
    fn test_descriptions_become_comments() {
        let mut config = GeneratorConfig::new().with_enum(
            EnumDefinition::new("Color")
                .with_element(EnumElement::new("Red").with_description("red channel")),
        );
        config.enums[0].description = Some("Primary colors".to_string());
        let model = resolve_model(&config).expect("resolves");

        let header = CHeaderEmitter::new().render(&model, &context());
        assert!(header.contains("/* Primary colors */\ntypedef enum Color {"));
        assert!(header.contains("    Color_Red = 1,  /* red channel */\n"));
    }

    #[test]
    fn test_missing_prefix_banner_reads_none() {
        let config = GeneratorConfig::new();
        let model = resolve_model(&config).expect("resolves");
        let header = CHeaderEmitter::new().render(&model, &context());
        assert!(header.contains("Global prefix: '(none)'"));
    }

    #[test]
    fn test_no_operator_overloads_in_c_surface() {
        let header = CHeaderEmitter::new().render(&sample_model(), &context());
        assert!(!header.contains("operator"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let model = sample_model();
        let first = CHeaderEmitter::new().render(&model, &context());
        let second = CHeaderEmitter::new().render(&model, &context());
        assert_eq!(first, second);
    }
}
