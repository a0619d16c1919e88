use std::path::{Path, PathBuf};

use crate::builder::Builder;
use crate::error::TempResult;

/// Creates a new, uniquely named directory in `dir` and returns its path.
///
/// The name is `prefix` followed by a decimal number. An empty `dir` means the system temporary
/// directory. The directory is never removed by this crate.
///
/// # Errors
///
/// Returns [`TempError::NotFound`](crate::TempError::NotFound) carrying `dir` if it does not
/// exist, [`TempError::Exhausted`](crate::TempError::Exhausted) if no free name was found, and
/// [`TempError::IO`](crate::TempError::IO) for any other OS failure.
pub fn temp_dir<P: AsRef<Path>>(dir: P, prefix: &str) -> TempResult<PathBuf> {
    Builder::new().prefix(prefix).tempdir_in(dir)
}
