use include_dir::{Dir, DirEntry, include_dir};
use minijinja::{AutoEscape, Environment};

use crate::domain::{AppError, TemplateContext};
use crate::ports::TemplateRenderer;

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

const TEMPLATE_SUFFIX: &str = ".j2";

/// Scaffold templates compiled into the binary, rendered with minijinja.
#[derive(Debug)]
pub struct EmbeddedTemplates {
    env: Environment<'static>,
}

impl EmbeddedTemplates {
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        // Generated files are Python, TOML and YAML; nothing is escaped.
        env.set_auto_escape_callback(|_| AutoEscape::None);

        for (name, source) in collect_templates(&TEMPLATES_DIR) {
            env.add_template(name, source).map_err(|e| {
                AppError::Template(format!("Failed to register template '{}': {}", name, e))
            })?;
        }

        Ok(Self { env })
    }

    /// Names of all registered templates, sorted.
    #[cfg(test)]
    pub fn template_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.env.templates().map(|(name, _)| name).collect();
        names.sort_unstable();
        names
    }
}

impl TemplateRenderer for EmbeddedTemplates {
    fn render(
        &self,
        template_name: &str,
        context: &TemplateContext<'_>,
    ) -> Result<String, AppError> {
        let template = self.env.get_template(template_name).map_err(|e| {
            AppError::Template(format!("Failed to load template '{}': {}", template_name, e))
        })?;

        template.render(context).map_err(|e| {
            AppError::Template(format!("Failed to render template '{}': {}", template_name, e))
        })
    }
}

fn collect_templates(dir: &'static Dir<'static>) -> Vec<(&'static str, &'static str)> {
    let mut templates = Vec::new();
    for entry in dir.entries() {
        match entry {
            DirEntry::File(file) => {
                let name = file.path().to_str().and_then(|p| p.strip_suffix(TEMPLATE_SUFFIX));
                if let (Some(name), Some(source)) = (name, file.contents_utf8()) {
                    templates.push((name, source));
                }
            }
            DirEntry::Dir(subdir) => templates.extend(collect_templates(subdir)),
        }
    }
    templates
}
