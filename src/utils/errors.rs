use std::fmt;
use std::path::PathBuf;

/// Builds a [`DocketError`] and captures the callsite.
#[macro_export]
macro_rules! docket_error {
    ($err:expr, $msg:expr) => {
        $crate::utils::errors::DocketError {
            error: $err,
            traceback: $msg.to_string(),
            location: format!("{}:{}", file!(), line!()),
        }
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocketError {
    pub error: DocketErrorType,
    pub traceback: String,
    pub location: String,
}

impl fmt::Display for DocketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, message) = self.error.get_message();
        write!(f, "{}: {}", name, message)?;
        if !self.traceback.is_empty() {
            write!(f, "\n{}", self.traceback)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DocketErrorType {
    ConfigError(Option<String>),
    EnvVarNotFoundError(String),
    FileParseError(PathBuf),
    FileReadError(PathBuf),
    FileRemoveError(PathBuf),
    FileWriteError(PathBuf),
    LockfileExistsError,
}

impl DocketErrorType {
    pub fn get_message(&self) -> (String, String) {
        match self {
            Self::ConfigError(detail) => (
                String::from("Config Error"),
                detail
                    .clone()
                    .unwrap_or_else(|| String::from("Failed to load the application config")),
            ),
            Self::EnvVarNotFoundError(var) => (
                String::from("Environment Error"),
                format!("Environment variable \"{}\" is not set", var),
            ),
            Self::FileParseError(path) => (
                String::from("File Parse Error"),
                format!("Failed to parse file \"{}\"", path.display()),
            ),
            Self::FileReadError(path) => (
                String::from("File Read Error"),
                format!("Failed to read file \"{}\"", path.display()),
            ),
            Self::FileRemoveError(path) => (
                String::from("File Remove Error"),
                format!("Failed to remove file \"{}\"", path.display()),
            ),
            Self::FileWriteError(path) => (
                String::from("File Write Error"),
                format!("Failed to write file \"{}\"", path.display()),
            ),
            Self::LockfileExistsError => (
                String::from("Lockfile Error"),
                String::from("Another instance is already running"),
            ),
        }
    }
}
