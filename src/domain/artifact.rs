use std::path::PathBuf;

use serde::Serialize;

use super::GenerationRequest;
use super::layout::{
    CONTENTS_DIR, DEPLOY_CONFIG_FILE, HANDLER_FILE, INFRASTRUCTURE_TEMPLATE_FILE, LAMBDA_PREFIX,
    LAYER_PREFIX, PACKAGE_MARKER_FILE, REQUIREMENTS_FILE,
};

/// The files produced by a scaffold run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    PackageMarker,
    HandlerModule,
    Requirements,
    DeployConfig,
    InfrastructureTemplate,
}

impl ArtifactKind {
    /// All kinds in write order.
    pub const ALL: [ArtifactKind; 5] = [
        ArtifactKind::PackageMarker,
        ArtifactKind::HandlerModule,
        ArtifactKind::Requirements,
        ArtifactKind::DeployConfig,
        ArtifactKind::InfrastructureTemplate,
    ];

    /// Path relative to the target directory.
    pub fn relative_path(self) -> PathBuf {
        match self {
            ArtifactKind::PackageMarker => PathBuf::from(CONTENTS_DIR).join(PACKAGE_MARKER_FILE),
            ArtifactKind::HandlerModule => PathBuf::from(CONTENTS_DIR).join(HANDLER_FILE),
            ArtifactKind::Requirements => PathBuf::from(CONTENTS_DIR).join(REQUIREMENTS_FILE),
            ArtifactKind::DeployConfig => PathBuf::from(DEPLOY_CONFIG_FILE),
            ArtifactKind::InfrastructureTemplate => PathBuf::from(INFRASTRUCTURE_TEMPLATE_FILE),
        }
    }

    /// Name of the embedded template, `None` for content-free files.
    pub fn template_name(self) -> Option<&'static str> {
        match self {
            ArtifactKind::PackageMarker => None,
            ArtifactKind::HandlerModule => Some(HANDLER_FILE),
            ArtifactKind::Requirements => Some(REQUIREMENTS_FILE),
            ArtifactKind::DeployConfig => Some(DEPLOY_CONFIG_FILE),
            ArtifactKind::InfrastructureTemplate => Some(INFRASTRUCTURE_TEMPLATE_FILE),
        }
    }
}

/// A rendered file ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub content: String,
}

impl Artifact {
    pub fn relative_path(&self) -> PathBuf {
        self.kind.relative_path()
    }
}

/// Values substituted into the embedded templates.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateContext<'a> {
    pub imports: String,
    pub requirements: String,
    pub stack_name: &'a str,
    pub s3_bucket: &'a str,
    pub s3_prefix: &'a str,
    pub region: &'a str,
    pub safe_name: String,
    pub lambda_prefix: &'static str,
    pub layer_prefix: &'static str,
}

impl<'a> TemplateContext<'a> {
    pub fn from_request(request: &'a GenerationRequest) -> Self {
        Self {
            imports: request.import_block(),
            requirements: request.requirements_block(),
            stack_name: &request.stack_name,
            s3_bucket: request.bucket_label(),
            s3_prefix: &request.stack_name,
            region: &request.region_name,
            safe_name: request.safe_name().to_string(),
            lambda_prefix: LAMBDA_PREFIX,
            layer_prefix: LAYER_PREFIX,
        }
    }
}
