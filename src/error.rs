use colored::Colorize;
use std::fmt;

#[derive(Debug)]
pub enum SweepError {
    Config {
        path: String,
        message: String,
    },
    InvalidStep {
        step: f64,
        at: f64,
    },
    MalformedResults {
        path: String,
        message: String,
    },
    Io {
        operation: String,
        path: Option<String>,
        source: std::io::Error,
    },
}

impl SweepError {
    pub fn config_error(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn invalid_step(step: f64, at: f64) -> Self {
        Self::InvalidStep { step, at }
    }

    pub fn malformed_results(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedResults {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn io_error(
        operation: impl Into<String>,
        path: Option<String>,
        source: std::io::Error,
    ) -> Self {
        Self::Io {
            operation: operation.into(),
            path,
            source,
        }
    }

    /// Attach a path to a `Config` or `MalformedResults` error raised while
    /// parsing an in-memory document.
    pub(crate) fn with_path(self, new_path: impl Into<String>) -> Self {
        match self {
            Self::Config { message, .. } => Self::Config {
                path: new_path.into(),
                message,
            },
            Self::MalformedResults { message, .. } => Self::MalformedResults {
                path: new_path.into(),
                message,
            },
            other => other,
        }
    }
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config { path, message } => {
                writeln!(f, "{} Configuration error", "✗".red().bold())?;
                writeln!(f, "  {} Path: {}", "→".blue(), path.yellow())?;
                writeln!(f, "  {} Error: {}", "→".blue(), message)?;
                Ok(())
            }
            Self::InvalidStep { step, at } => {
                writeln!(f, "{} Invalid step size", "✗".red().bold())?;
                writeln!(f, "  {} Step: {:?}", "→".blue(), step)?;
                writeln!(f, "  {} Stalled at x = {:?}", "→".blue(), at)?;
                writeln!(
                    f,
                    "  {} The step must be positive and large enough to advance x",
                    "Note:".yellow()
                )?;
                Ok(())
            }
            Self::MalformedResults { path, message } => {
                writeln!(f, "{} Malformed results document", "✗".red().bold())?;
                writeln!(f, "  {} Path: {}", "→".blue(), path.yellow())?;
                writeln!(f, "  {} Error: {}", "→".blue(), message)?;
                Ok(())
            }
            Self::Io {
                operation,
                path,
                source,
            } => {
                writeln!(
                    f,
                    "{} I/O error during: {}",
                    "✗".red().bold(),
                    operation.yellow()
                )?;
                if let Some(path) = path {
                    writeln!(f, "  {} Path: {}", "→".blue(), path)?;
                }
                writeln!(f, "  {} Error: {}", "→".blue(), source)?;
                Ok(())
            }
        }
    }
}

impl std::error::Error for SweepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SweepError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            operation: "unknown".to_string(),
            path: None,
            source: err,
        }
    }
}

pub type Result<T> = std::result::Result<T, SweepError>;
