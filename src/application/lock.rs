use std::env::{self, temp_dir};
use std::fs::{self, remove_file, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use nix::sys::signal::kill;
use nix::unistd::Pid;

use crate::docket_error;
use crate::utils::errors::{DocketError, DocketErrorType};

#[derive(Debug)]
pub struct LockFile {
    path: PathBuf,
}
impl LockFile {
    /// Takes the instance lock. A lock held by a live process is an error;
    /// a lock left behind by a dead one is removed and taken over.
    pub fn single_instance(lock_file: &str) -> Result<Self, DocketError> {
        let path = Self::get_path(lock_file);
        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| {
                docket_error!(DocketErrorType::FileReadError(path.clone()), e.to_string())
            })?;
            let pid = content.trim().parse::<i32>().map_err(|e| {
                docket_error!(DocketErrorType::FileParseError(path.clone()), e.to_string())
            })?;
            match kill(Pid::from_raw(pid), None) {
                Ok(()) => {
                    return Err(docket_error!(
                        DocketErrorType::LockfileExistsError,
                        format!("Held by running process {}", pid)
                    ));
                }
                // Stale lock, owner is gone
                Err(_) => {
                    let _ = fs::remove_file(&path);
                }
            }
        }
        LockFile::new(path)
    }

    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, DocketError> {
        let path = path.as_ref();
        if path.exists() {
            return Err(docket_error!(
                DocketErrorType::LockfileExistsError,
                format!("{:?}", path)
            ));
        }

        match File::create(path) {
            Ok(mut f) => {
                write!(f, "{}", std::process::id()).map_err(|e| {
                    docket_error!(
                        DocketErrorType::FileWriteError(path.to_path_buf()),
                        e.to_string()
                    )
                })?;
                Ok(LockFile {
                    path: path.to_path_buf(),
                })
            }
            Err(e) => Err(docket_error!(
                DocketErrorType::FileWriteError(path.to_path_buf()),
                e.to_string()
            )),
        }
    }

    pub fn remove(&self) -> Result<(), DocketError> {
        remove_file(&self.path).map_err(|e| {
            docket_error!(
                DocketErrorType::FileRemoveError(self.path.clone()),
                e.to_string()
            )
        })
    }

    /// Lock file location. `XDG_RUNTIME_DIR` when set, the system temp
    /// directory otherwise.
    pub fn get_path(file_name: &str) -> PathBuf {
        if let Ok(runtime_dir) = env::var("XDG_RUNTIME_DIR") {
            PathBuf::from(runtime_dir).join(file_name)
        } else {
            temp_dir().join(file_name)
        }
    }
}

impl Drop for LockFile {
    fn drop(&mut self) {
        let _ = self.remove();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn lock_is_written_and_removed_on_drop() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("docket.lock");

        let lock = LockFile::new(&path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, std::process::id().to_string());

        drop(lock);
        assert!(!path.exists());
    }

    #[test]
    fn second_lock_on_same_path_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("docket.lock");

        let _lock = LockFile::new(&path).unwrap();
        let second = LockFile::new(&path);
        assert!(matches!(
            second.unwrap_err().error,
            DocketErrorType::LockfileExistsError
        ));
    }
}
