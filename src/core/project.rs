use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::TemplateConfig;
use crate::error::{BloxError, ErrorContext, Result};

/// Name and location of the project being created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectIdentity {
    name: String,
    path: PathBuf,
}

impl ProjectIdentity {
    /// Derive the identity from the entered name, falling back to `default_name`
    /// when the name is blank
    pub fn new<P: AsRef<Path>>(name: &str, cwd: P, default_name: &str) -> Self {
        let name = match name.trim() {
            "" => default_name.to_string(),
            trimmed => trimmed.to_string(),
        };
        let path = cwd.as_ref().join(&name);
        Self { name, path }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Reject names that are not a single plain directory name, so the project
/// always lands directly under the working directory
pub fn validate_project_name(name: &str) -> Result<()> {
    let invalid = |reason: &str| BloxError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        (None, _) => Err(invalid("name is empty")),
        (Some(Component::Normal(_)), Some(_)) => Err(invalid("name must not contain path separators")),
        _ => Err(invalid("name must be a plain directory name")),
    }
}

/// Directories searched for the template file, in order: the working
/// directory, then the directory holding the running executable
pub fn template_search_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }

    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        if !dirs.contains(&exe_dir) {
            dirs.push(exe_dir);
        }
    }

    dirs
}

/// Find the first existing template file among `search_dirs`
pub fn resolve_template(template: &TemplateConfig, search_dirs: &[PathBuf]) -> Result<PathBuf> {
    let candidates: Vec<PathBuf> = search_dirs
        .iter()
        .map(|dir| dir.join(&template.file_name))
        .collect();

    let found = candidates.iter().find(|candidate| candidate.is_file()).cloned();
    found.ok_or_else(|| BloxError::TemplateNotFound {
        file_name: template.file_name.clone(),
        searched: candidates,
    })
}

/// Create the project directory and copy the template into it.
///
/// Returns the path of the copied file. Every failure is reported as
/// [`BloxError::ProjectSetup`]; the directory must not exist beforehand.
pub fn setup_project_directory(
    identity: &ProjectIdentity,
    template: &TemplateConfig,
    search_dirs: &[PathBuf],
) -> Result<PathBuf> {
    let path = identity.path();
    let fail = |source: BloxError| BloxError::ProjectSetup {
        path: path.to_path_buf(),
        source: Box::new(source),
    };

    validate_project_name(identity.name()).map_err(fail)?;
    let source = resolve_template(template, search_dirs).map_err(fail)?;
    debug!(template = %source.display(), "resolved template");

    fs::create_dir(path)
        .with_io_context(|| format!("creating directory {}", path.display()))
        .map_err(fail)?;

    let destination = path.join(&template.destination);
    if let Err(err) = fs::copy(&source, &destination)
        .with_io_context(|| format!("copying {} to {}", source.display(), destination.display()))
    {
        // Only the directory created above is removed; a partial copy keeps it.
        if let Err(cleanup) = fs::remove_dir(path) {
            warn!(project = %path.display(), error = %cleanup, "could not remove project directory");
        }
        return Err(fail(err));
    }

    info!(project = %path.display(), "project directory ready");
    Ok(destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const TEMPLATE: &str = "STRIPE_SECRET_KEY=\nSENDGRID_API_KEY=\n";

    fn write_template(dir: &Path) {
        fs::write(dir.join(".env.example"), TEMPLATE).unwrap();
    }

    #[test]
    fn test_blank_name_uses_default() {
        let identity = ProjectIdentity::new("   ", "/work", "blox-saas-example");
        assert_eq!(identity.name(), "blox-saas-example");
        assert_eq!(identity.path(), Path::new("/work/blox-saas-example"));
    }

    #[test]
    fn test_name_is_joined_to_cwd() {
        let identity = ProjectIdentity::new("demo", "/work", "blox-saas-example");
        assert_eq!(identity.name(), "demo");
        assert_eq!(identity.path(), Path::new("/work/demo"));

        let padded = ProjectIdentity::new("  my demo ", "/work", "blox-saas-example");
        assert_eq!(padded.name(), "my demo");
        assert_eq!(padded.path(), Path::new("/work/my demo"));
    }

    #[test]
    fn test_validate_project_name() {
        assert!(validate_project_name("demo").is_ok());
        assert!(validate_project_name("my demo").is_ok());
        assert!(validate_project_name("/tmp/x").is_err());
        assert!(validate_project_name("a/b").is_err());
        assert!(validate_project_name("..").is_err());
        assert!(validate_project_name(".").is_err());
        assert!(validate_project_name("").is_err());
    }

    #[test]
    fn test_absolute_name_stays_out_of_other_dirs() {
        let cwd = tempdir().unwrap();
        let elsewhere = tempdir().unwrap();
        write_template(cwd.path());
        let target = elsewhere.path().join("escaped");
        let identity = ProjectIdentity::new(target.to_str().unwrap(), cwd.path(), "blox-saas-example");
        let dirs = vec![cwd.path().to_path_buf()];

        let err = setup_project_directory(&identity, &TemplateConfig::default(), &dirs).unwrap_err();

        assert!(err.is_setup_failure());
        assert!(err.to_string().contains("Invalid project name"));
        assert!(!target.exists());
    }

    #[test]
    fn test_nested_name_is_rejected() {
        let cwd = tempdir().unwrap();
        write_template(cwd.path());
        fs::create_dir(cwd.path().join("a")).unwrap();
        let identity = ProjectIdentity::new("a/b", cwd.path(), "blox-saas-example");
        let dirs = vec![cwd.path().to_path_buf()];

        let err = setup_project_directory(&identity, &TemplateConfig::default(), &dirs).unwrap_err();

        assert!(err.is_setup_failure());
        assert!(!cwd.path().join("a").join("b").exists());
    }

    #[test]
    fn test_parent_dir_name_is_rejected() {
        let cwd = tempdir().unwrap();
        write_template(cwd.path());
        let identity = ProjectIdentity::new("..", cwd.path(), "blox-saas-example");
        let dirs = vec![cwd.path().to_path_buf()];

        let err = setup_project_directory(&identity, &TemplateConfig::default(), &dirs).unwrap_err();
        assert!(err.is_setup_failure());
    }

    #[test]
    fn test_failed_copy_removes_fresh_directory() {
        let tmp = tempdir().unwrap();
        write_template(tmp.path());
        let identity = ProjectIdentity::new("demo", tmp.path(), "blox-saas-example");
        let dirs = vec![tmp.path().to_path_buf()];
        let template = TemplateConfig {
            destination: "missing/.env".to_string(),
            ..TemplateConfig::default()
        };

        let err = setup_project_directory(&identity, &template, &dirs).unwrap_err();

        assert!(err.is_setup_failure());
        assert!(err.to_string().contains("copying"));
        assert!(!identity.path().exists());
    }

    #[test]
    fn test_setup_copies_template_as_env() {
        let tmp = tempdir().unwrap();
        write_template(tmp.path());
        let identity = ProjectIdentity::new("demo", tmp.path(), "blox-saas-example");
        let dirs = vec![tmp.path().to_path_buf()];

        let env = setup_project_directory(&identity, &TemplateConfig::default(), &dirs).unwrap();

        assert_eq!(env, tmp.path().join("demo").join(".env"));
        assert_eq!(fs::read_to_string(&env).unwrap(), TEMPLATE);
        let entries: Vec<_> = fs::read_dir(identity.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_existing_directory_is_fatal_and_untouched() {
        let tmp = tempdir().unwrap();
        write_template(tmp.path());
        fs::create_dir(tmp.path().join("demo")).unwrap();
        let identity = ProjectIdentity::new("demo", tmp.path(), "blox-saas-example");
        let dirs = vec![tmp.path().to_path_buf()];

        let err = setup_project_directory(&identity, &TemplateConfig::default(), &dirs).unwrap_err();

        assert!(err.is_setup_failure());
        assert!(!tmp.path().join("demo").join(".env").exists());
    }

    #[test]
    fn test_missing_template_creates_nothing() {
        let tmp = tempdir().unwrap();
        let identity = ProjectIdentity::new("demo", tmp.path(), "blox-saas-example");
        let dirs = vec![tmp.path().to_path_buf()];

        let err = setup_project_directory(&identity, &TemplateConfig::default(), &dirs).unwrap_err();

        assert!(err.is_setup_failure());
        assert!(err.to_string().contains(".env.example"));
        assert!(!identity.path().exists());
    }

    #[test]
    fn test_template_found_in_later_search_dir() {
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();
        write_template(second.path());
        let dirs = vec![first.path().to_path_buf(), second.path().to_path_buf()];

        let found = resolve_template(&TemplateConfig::default(), &dirs).unwrap();
        assert_eq!(found, second.path().join(".env.example"));
    }

    #[test]
    fn test_working_directory_template_wins() {
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();
        write_template(first.path());
        write_template(second.path());
        let dirs = vec![first.path().to_path_buf(), second.path().to_path_buf()];

        let found = resolve_template(&TemplateConfig::default(), &dirs).unwrap();
        assert_eq!(found, first.path().join(".env.example"));
    }
}
