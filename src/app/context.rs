use crate::ports::{ScaffoldStore, TemplateRenderer};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: ScaffoldStore, R: TemplateRenderer> {
    store: S,
    templates: R,
}

impl<S: ScaffoldStore, R: TemplateRenderer> AppContext<S, R> {
    /// Create a new application context.
    pub fn new(store: S, templates: R) -> Self {
        Self { store, templates }
    }

    /// Get a reference to the scaffold store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the template renderer.
    pub fn templates(&self) -> &R {
        &self.templates
    }
}
