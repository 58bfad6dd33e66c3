//! Scaffolded application layout.
//!
//! Paths are relative to the target directory.

pub const CONTENTS_DIR: &str = "contents";
pub const PACKAGE_MARKER_FILE: &str = "__init__.py";
pub const HANDLER_FILE: &str = "layla_lambda.py";
pub const REQUIREMENTS_FILE: &str = "requirements.txt";
pub const DEPLOY_CONFIG_FILE: &str = "samconfig.toml";
pub const INFRASTRUCTURE_TEMPLATE_FILE: &str = "template.yaml";

/// Logical ID prefix of the function resource that triggers the layer build.
pub const LAMBDA_PREFIX: &str = "LaylaLambda";
/// Logical ID prefix of the layer version resource.
pub const LAYER_PREFIX: &str = "LaylaLayer";
