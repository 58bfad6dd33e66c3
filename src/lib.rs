//! layla: scaffold an aws-sam application that builds and deploys a custom Lambda layer.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{GenerateOptions, GenerationOutcome, generate, generate_with, preview};
pub use domain::{AppError, Artifact, ArtifactKind, GenerationRequest, SafeName};
