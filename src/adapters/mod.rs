pub mod embedded_templates;
pub mod scaffold_filesystem;

pub use embedded_templates::EmbeddedTemplates;
pub use scaffold_filesystem::FilesystemScaffoldStore;
