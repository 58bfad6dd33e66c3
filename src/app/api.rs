//! API Facade for the application.
//!
//! Glues together context creation and command execution.

use crate::adapters::{EmbeddedTemplates, FilesystemScaffoldStore};
use crate::app::{AppContext, commands::generate};

pub use crate::app::commands::generate::{GenerateOptions, GenerationOutcome};
pub use crate::domain::{AppError, Artifact, ArtifactKind, GenerationRequest};

fn create_context(
    request: &GenerationRequest,
) -> Result<AppContext<FilesystemScaffoldStore, EmbeddedTemplates>, AppError> {
    let store = FilesystemScaffoldStore::new(&request.target_dir);
    let templates = EmbeddedTemplates::new()?;
    Ok(AppContext::new(store, templates))
}

/// Scaffold the layer app in `request.target_dir`.
pub fn generate(request: &GenerationRequest) -> Result<GenerationOutcome, AppError> {
    generate_with(request, GenerateOptions::default())
}

/// Scaffold the layer app in `request.target_dir` with explicit options.
pub fn generate_with(
    request: &GenerationRequest,
    options: GenerateOptions,
) -> Result<GenerationOutcome, AppError> {
    let ctx = create_context(request)?;
    generate::execute(&ctx, request, options)
}

/// Render all files without writing them.
pub fn preview(
    request: &GenerationRequest,
    options: GenerateOptions,
) -> Result<Vec<Artifact>, AppError> {
    let templates = EmbeddedTemplates::new()?;
    generate::render_artifacts(&templates, request, options)
}
