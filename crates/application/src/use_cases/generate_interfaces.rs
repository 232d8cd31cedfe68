//! Generate interfaces use case.
//!
//! The full pipeline for one run: resolve the model, render every
//! requested surface, then write the outputs. All rendering happens
//! before the first write, so a validation or rendering failure leaves
//! the target directory untouched. Each file is staged and renamed into
//! place; a failure on a later file leaves earlier complete files on
//! disk, never a torn one.

use std::path::PathBuf;

use enumforge_domain::{GeneratorConfig, InterfaceKind, resolve_model};
use tracing::{debug, info};

use crate::error::{GenerateError, GenerateResult};
use crate::ports::{Clock, Emitter, FileSystem, RenderContext};

/// Input for a generation run.
#[derive(Debug, Clone)]
pub struct GenerateInterfacesInput {
    /// The loaded configuration.
    pub config: GeneratorConfig,
    /// Target directory, created if absent.
    pub output_dir: PathBuf,
}

/// Use case driving one synchronous, one-shot generation run.
pub struct GenerateInterfaces<C: Clock, F: FileSystem> {
    clock: C,
    fs: F,
    emitters: Vec<Box<dyn Emitter>>,
}

impl<C: Clock, F: FileSystem> GenerateInterfaces<C, F> {
    /// Creates the use case over its ports.
    #[must_use]
    pub fn new(clock: C, fs: F, emitters: Vec<Box<dyn Emitter>>) -> Self {
        Self {
            clock,
            fs,
            emitters,
        }
    }

    /// Runs the pipeline and returns the written paths in emission order.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Domain`] when resolution fails (nothing is
    /// written), [`GenerateError::MissingEmitter`] when a requested surface
    /// has no emitter, and [`GenerateError::FileSystem`] when the target
    /// directory or a file cannot be written.
    pub fn execute(&self, input: &GenerateInterfacesInput) -> GenerateResult<Vec<PathBuf>> {
        let model = resolve_model(&input.config)?;
        let context = RenderContext::new(self.clock.now());

        let mut rendered: Vec<(String, String)> = Vec::new();
        for kind in dedupe_interfaces(&input.config.interfaces) {
            let emitter = self
                .emitters
                .iter()
                .find(|e| e.kind() == kind)
                .ok_or(GenerateError::MissingEmitter(kind))?;

            let file_name = emitter.file_name(&model);
            debug!(interface = %kind, file = %file_name, "rendering interface");
            rendered.push((file_name, emitter.render(&model, &context)));
        }

        self.fs.create_dir_all(&input.output_dir)?;

        let mut written = Vec::with_capacity(rendered.len());
        for (file_name, contents) in rendered {
            let path = input.output_dir.join(&file_name);
            self.fs.write_file_atomic(&path, contents.as_bytes())?;
            info!(path = %path.display(), "interface written");
            written.push(path);
        }

        Ok(written)
    }
}

/// Collapses repeated interface requests, keeping first-seen order.
fn dedupe_interfaces(interfaces: &[InterfaceKind]) -> Vec<InterfaceKind> {
    let mut seen = Vec::with_capacity(interfaces.len());
    for kind in interfaces {
        if !seen.contains(kind) {
            seen.push(*kind);
        }
    }
    seen
}
