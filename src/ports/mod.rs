mod scaffold_store;
mod template_renderer;

pub use scaffold_store::ScaffoldStore;
pub use template_renderer::TemplateRenderer;
