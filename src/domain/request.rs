use std::path::PathBuf;

use super::{SafeName, format_code};

pub const DEFAULT_TARGET_DIR: &str = ".";
pub const DEFAULT_LAYER_NAME: &str = "hello-world";
pub const DEFAULT_STACK_NAME: &str = "layla-stack";
pub const DEFAULT_REGION: &str = "eu-central-1";

/// Text written for `s3_bucket` when no bucket was given.
pub const ABSENT_BUCKET: &str = "None";

/// Parameters for a single scaffold run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Layer name, used for the CloudFormation logical IDs.
    pub layer_name: String,
    /// Python libraries bundled in the layer, in install order.
    pub contents: Vec<String>,
    /// CloudFormation stack name, also used as the S3 prefix.
    pub stack_name: String,
    /// S3 bucket for aws-sam artifacts.
    pub storage_bucket: Option<String>,
    pub region_name: String,
    /// Directory the app is initialized in.
    pub target_dir: PathBuf,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self::new(DEFAULT_LAYER_NAME, DEFAULT_STACK_NAME)
    }
}

impl GenerationRequest {
    pub fn new(layer_name: impl Into<String>, stack_name: impl Into<String>) -> Self {
        Self {
            layer_name: layer_name.into(),
            contents: Vec::new(),
            stack_name: stack_name.into(),
            storage_bucket: None,
            region_name: DEFAULT_REGION.to_string(),
            target_dir: PathBuf::from(DEFAULT_TARGET_DIR),
        }
    }

    pub fn with_contents<I, S>(mut self, contents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.contents = contents.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.storage_bucket = Some(bucket.into());
        self
    }

    pub fn with_region(mut self, region_name: impl Into<String>) -> Self {
        self.region_name = region_name.into();
        self
    }

    pub fn with_target_dir(mut self, target_dir: impl Into<PathBuf>) -> Self {
        self.target_dir = target_dir.into();
        self
    }

    /// One `import` line per library, in order, normalized as a whole block.
    pub fn import_block(&self) -> String {
        let imports: Vec<String> =
            self.contents.iter().map(|lib| format!("import {lib}")).collect();
        format_code(&imports.join("\n"))
    }

    /// Library names one per line, in order, normalized as a whole block.
    pub fn requirements_block(&self) -> String {
        format_code(&self.contents.join("\n"))
    }

    /// Bucket as rendered into `samconfig.toml`.
    pub fn bucket_label(&self) -> &str {
        self.storage_bucket.as_deref().unwrap_or(ABSENT_BUCKET)
    }

    pub fn safe_name(&self) -> SafeName {
        SafeName::from_layer_name(&self.layer_name)
    }
}
