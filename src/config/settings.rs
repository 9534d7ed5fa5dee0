use std::time::Duration;

/// Main create-blox-app configuration
#[derive(Debug, Clone)]
pub struct BloxConfig {
    pub project: ProjectConfig,
    pub template: TemplateConfig,
    pub ui: UiConfig,
}

/// Defaults for the project being created
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    /// Name used when the user leaves the name prompt empty
    pub default_name: String,
}

/// Template file copied into every new project
#[derive(Debug, Clone)]
pub struct TemplateConfig {
    /// Source file name, looked up in the working directory first
    pub file_name: String,
    /// File name inside the new project directory
    pub destination: String,
}

/// UI and display configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Whether to show colored output
    pub colored: bool,
    /// Whether to animate the welcome title
    pub animations: bool,
    /// How long the welcome title animates
    pub greeting_delay_ms: u64,
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for BloxConfig {
    fn default() -> Self {
        Self {
            project: ProjectConfig::default(),
            template: TemplateConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            default_name: "blox-saas-example".to_string(),
        }
    }
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            file_name: ".env.example".to_string(),
            destination: ".env".to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            colored: std::env::var_os("NO_COLOR").is_none(),
            animations: true,
            greeting_delay_ms: 500,
            log_level: "warn".to_string(),
        }
    }
}

impl UiConfig {
    pub fn greeting_delay(&self) -> Duration {
        Duration::from_millis(self.greeting_delay_ms)
    }
}
