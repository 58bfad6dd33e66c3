//! Scaffold generation.
//!
//! Renders the five application files from a [`GenerationRequest`] and writes
//! them below the target directory. The first failure aborts the run; files
//! already written are left in place.

use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::domain::layout::CONTENTS_DIR;
use crate::domain::{
    AppError, Artifact, ArtifactKind, GenerationRequest, TemplateContext, format_code,
};
use crate::ports::{ScaffoldStore, TemplateRenderer};

/// Switches that change how a request is handled.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Reject requests without a bucket instead of writing `s3_bucket = "None"`.
    pub require_bucket: bool,
}

/// What a successful run produced, as paths under the target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutcome {
    pub root: PathBuf,
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

/// Render every artifact in write order without touching the filesystem.
pub fn render_artifacts<R: TemplateRenderer>(
    renderer: &R,
    request: &GenerationRequest,
    options: GenerateOptions,
) -> Result<Vec<Artifact>, AppError> {
    if options.require_bucket && request.storage_bucket.is_none() {
        return Err(AppError::MissingBucket);
    }

    let context = TemplateContext::from_request(request);
    ArtifactKind::ALL
        .into_iter()
        .map(|kind| {
            let content = match kind.template_name() {
                Some(name) => format_code(&renderer.render(name, &context)?),
                None => String::new(),
            };
            Ok(Artifact { kind, content })
        })
        .collect()
}

/// Execute the generate command.
pub fn execute<S, R>(
    ctx: &AppContext<S, R>,
    request: &GenerationRequest,
    options: GenerateOptions,
) -> Result<GenerationOutcome, AppError>
where
    S: ScaffoldStore,
    R: TemplateRenderer,
{
    let artifacts = render_artifacts(ctx.templates(), request, options)?;
    let store = ctx.store();

    store.ensure_root()?;
    store.ensure_dir(Path::new(CONTENTS_DIR))?;

    let mut files = Vec::with_capacity(artifacts.len());
    for artifact in &artifacts {
        let path = artifact.relative_path();
        store.write_file(&path, &artifact.content)?;
        files.push(store.resolve_path(&path));
    }

    Ok(GenerationOutcome {
        root: store.root().to_path_buf(),
        directories: vec![store.root().to_path_buf(), store.resolve_path(Path::new(CONTENTS_DIR))],
        files,
    })
}
