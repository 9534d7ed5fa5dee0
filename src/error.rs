use std::fmt;
use std::path::PathBuf;

/// Main error type for create-blox-app
#[derive(Debug)]
pub enum BloxError {
    Io {
        source: std::io::Error,
        context: String,
    },
    ProjectSetup {
        path: PathBuf,
        source: Box<BloxError>,
    },
    TemplateNotFound {
        file_name: String,
        searched: Vec<PathBuf>,
    },
    Prompt {
        question: String,
        source: std::io::Error,
    },
    Render {
        message: String,
    },
    InvalidName {
        name: String,
        reason: String,
    },
}

impl fmt::Display for BloxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BloxError::Io { source, context } => {
                write!(f, "IO error during {}: {}", context, source)
            }
            BloxError::ProjectSetup { source, .. } => {
                write!(
                    f,
                    "Error creating the project directory. Please try with a different name: {}",
                    source
                )
            }
            BloxError::TemplateNotFound { file_name, searched } => {
                let places: Vec<String> = searched.iter().map(|p| p.display().to_string()).collect();
                write!(f, "Template '{}' not found (searched: {})", file_name, places.join(", "))
            }
            BloxError::Prompt { question, source } => {
                write!(f, "Prompt '{}' failed: {}", question, source)
            }
            BloxError::Render { message } => {
                write!(f, "Render error: {}", message)
            }
            BloxError::InvalidName { name, reason } => {
                write!(f, "Invalid project name '{}': {}", name, reason)
            }
        }
    }
}

impl std::error::Error for BloxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BloxError::Io { source, .. } => Some(source),
            BloxError::ProjectSetup { source, .. } => Some(source.as_ref()),
            BloxError::Prompt { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, BloxError>;

pub trait ErrorContext<T> {
    fn with_io_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;

    fn with_prompt_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ErrorContext<T> for std::result::Result<T, std::io::Error> {
    fn with_io_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| BloxError::Io {
            source: e,
            context: f(),
        })
    }

    fn with_prompt_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| BloxError::Prompt {
            question: f(),
            source: e,
        })
    }
}

impl BloxError {
    /// Exit status the binary reports for this error
    pub fn exit_code(&self) -> i32 {
        1
    }

    pub fn is_setup_failure(&self) -> bool {
        matches!(self, BloxError::ProjectSetup { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_setup_failure_message_wraps_cause() {
        let err = BloxError::ProjectSetup {
            path: PathBuf::from("/tmp/demo"),
            source: Box::new(BloxError::Io {
                source: io::Error::new(io::ErrorKind::AlreadyExists, "File exists"),
                context: "creating directory /tmp/demo".to_string(),
            }),
        };

        let msg = err.to_string();
        assert!(msg.starts_with("Error creating the project directory. Please try with a different name:"));
        assert!(msg.contains("File exists"));
        assert!(err.is_setup_failure());
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_io_context() {
        let res: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        let err = res.with_io_context(|| "copying template".to_string()).unwrap_err();
        assert!(matches!(err, BloxError::Io { .. }));
        assert!(err.to_string().contains("copying template"));
    }

    #[test]
    fn test_prompt_context() {
        let res: std::result::Result<usize, io::Error> =
            Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        let err = res.with_prompt_context(|| "PROJECT_TYPE".to_string()).unwrap_err();
        assert!(err.to_string().contains("PROJECT_TYPE"));
        assert!(!err.is_setup_failure());
    }
}
