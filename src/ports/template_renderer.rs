use crate::domain::{AppError, TemplateContext};

/// Port for rendering the embedded scaffold templates.
///
/// Keeps the template engine out of the generation command.
pub trait TemplateRenderer {
    /// Render the template registered under `template_name`.
    fn render(
        &self,
        template_name: &str,
        context: &TemplateContext<'_>,
    ) -> Result<String, AppError>;
}
