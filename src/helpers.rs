use log::{debug, trace, warn};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{TempError, TempResult};
use crate::global_consts::RESEED_AFTER;
use crate::name_gen::NameCounter;

/// Resolves the directory to create entries in. An empty path means the system temporary directory.
pub fn resolve_dir(dir: &Path) -> PathBuf {
    if dir.as_os_str().is_empty() {
        env::temp_dir()
    } else {
        dir.to_path_buf()
    }
}

/// The naming strategy shared by file and directory creation.
pub(crate) struct Naming<'a> {
    pub prefix: &'a str,
    pub suffix: &'a str,
    pub attempts: usize,
    pub counter: &'a NameCounter,
}

impl Naming<'_> {
    /// Tries candidate names in `dir` until `create` succeeds on one.
    ///
    /// `create` must fail with [`io::ErrorKind::AlreadyExists`] when the name is taken and must
    /// not leave anything behind in that case. Any other failure is returned on the spot.
    ///
    /// A prefix or suffix containing a path separator is rejected up front, so every candidate
    /// lands directly in `dir`.
    pub fn create_unique<T, F>(&self, dir: &Path, mut create: F) -> TempResult<(PathBuf, T)>
    where
        F: FnMut(&Path) -> io::Result<T>,
    {
        let dir = resolve_dir(dir);
        if has_separator(self.prefix) || has_separator(self.suffix) {
            return Err(TempError::IO {
                path: dir,
                source: io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "pattern contains path separator",
                ),
            });
        }
        let mut collisions = 0;
        for _ in 0..self.attempts {
            let candidate = dir.join(self.counter.next_name(self.prefix, self.suffix));
            match create(&candidate) {
                Ok(value) => {
                    debug!("created {}", candidate.display());
                    return Ok((candidate, value));
                }
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    trace!("{} already exists", candidate.display());
                    collisions += 1;
                    if collisions == RESEED_AFTER {
                        debug!("{collisions} collisions in {}, reseeding", dir.display());
                        self.counter.reseed();
                        collisions = 0;
                    }
                }
                Err(e) => return Err(classify(&dir, candidate, e)),
            }
        }
        warn!(
            "no unique name found in {} after {} attempts",
            dir.display(),
            self.attempts
        );
        Err(TempError::Exhausted {
            dir,
            attempts: self.attempts,
        })
    }
}

fn has_separator(part: &str) -> bool {
    part.chars().any(std::path::is_separator)
}

/// Turns a failed create into a [`TempError`], reporting a missing directory against the
/// directory itself rather than the candidate inside it.
fn classify(dir: &Path, candidate: PathBuf, e: io::Error) -> TempError {
    if e.kind() == io::ErrorKind::NotFound {
        if let Err(stat) = fs::metadata(dir) {
            if stat.kind() == io::ErrorKind::NotFound {
                return TempError::NotFound {
                    path: dir.to_path_buf(),
                    source: stat,
                };
            }
        }
    }
    TempError::IO {
        path: candidate,
        source: e,
    }
}
