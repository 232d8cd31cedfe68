//! Emitter port.
//!
//! One implementation per target surface renders the resolved model into
//! its output text. Keeping rendering behind this seam separates what the
//! model says from how each surface formats it.

use chrono::{DateTime, Utc};

use enumforge_domain::{InterfaceKind, ResolvedModel};

/// Ambient values an emitter may embed in its output banner.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    /// Generation time, injected through the [`Clock`](crate::ports::Clock)
    /// port.
    pub generated_at: DateTime<Utc>,
}

impl RenderContext {
    /// Creates a context for the given generation time.
    #[must_use]
    pub const fn new(generated_at: DateTime<Utc>) -> Self {
        Self { generated_at }
    }

    /// Generation time formatted for output banners.
    #[must_use]
    pub fn timestamp(&self) -> String {
        self.generated_at.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Port for rendering one target surface from the resolved model.
///
/// Implementations are pure: rendering performs no I/O and identical
/// model/context pairs produce identical output.
pub trait Emitter: Send + Sync {
    /// The surface this emitter renders.
    fn kind(&self) -> InterfaceKind;

    /// Name of the output file inside the target directory.
    fn file_name(&self, model: &ResolvedModel) -> String;

    /// Renders the complete output text.
    fn render(&self, model: &ResolvedModel, context: &RenderContext) -> String;
}
