pub mod settings;

pub use settings::{BloxConfig, ProjectConfig, TemplateConfig, UiConfig};
