use std::env;
use std::path::{Path, PathBuf};

use crate::docket_error;
use crate::utils::errors::{DocketError, DocketErrorType};

pub fn home_dir() -> Result<PathBuf, DocketError> {
    env::var("HOME").map(PathBuf::from).map_err(|e| {
        docket_error!(
            DocketErrorType::EnvVarNotFoundError(String::from("HOME")),
            e.to_string()
        )
    })
}

/// Resolves a leading `~/` against the given home directory.
pub fn expand_path<P: AsRef<Path>>(path: P, home: &Path) -> PathBuf {
    let path = path.as_ref();
    match path.to_str().and_then(|s| s.strip_prefix("~/")) {
        Some(stripped) => home.join(stripped),
        None => path.to_path_buf(),
    }
}
