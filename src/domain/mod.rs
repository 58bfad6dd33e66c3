pub mod artifact;
pub mod error;
pub mod layout;
pub mod request;
pub mod safe_name;
pub mod text;

pub use artifact::{Artifact, ArtifactKind, TemplateContext};
pub use error::AppError;
pub use request::{
    ABSENT_BUCKET, DEFAULT_LAYER_NAME, DEFAULT_REGION, DEFAULT_STACK_NAME, DEFAULT_TARGET_DIR,
    GenerationRequest,
};
pub use safe_name::SafeName;
pub use text::format_code;
