use std::fs;
use std::path::{Path, PathBuf};

use crate::error::TempResult;
use crate::global_consts::NUM_RETRY;
use crate::helpers::Naming;
use crate::name_gen::NameCounter;
use crate::temp_file::TempFile;

/// Configures how temporary entries are named and created.
///
/// ```no_run
/// use tempext::Builder;
///
/// let file = Builder::new().prefix("report_").suffix("csv").tempfile()?;
/// println!("{}", file.path().display());
/// # Ok::<(), tempext::TempError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Builder<'a> {
    prefix: &'a str,
    suffix: &'a str,
    attempts: usize,
    counter: Option<&'a NameCounter>,
}

impl<'a> Builder<'a> {
    /// Creates a builder with an empty prefix and suffix, [`NUM_RETRY`] attempts and the
    /// process-wide counter.
    #[must_use]
    pub fn new() -> Self {
        Self {
            prefix: "",
            suffix: "",
            attempts: NUM_RETRY,
            counter: None,
        }
    }

    /// Sets the text placed before the numeric component.
    #[must_use]
    pub fn prefix(mut self, prefix: &'a str) -> Self {
        self.prefix = prefix;
        self
    }

    /// Sets the extension placed after the numeric component. A leading `.` is added when missing.
    #[must_use]
    pub fn suffix(mut self, suffix: &'a str) -> Self {
        self.suffix = suffix;
        self
    }

    /// Sets how many candidate names are tried before giving up.
    #[must_use]
    pub fn attempts(mut self, attempts: usize) -> Self {
        self.attempts = attempts;
        self
    }

    /// Draws names from `counter` instead of the process-wide one.
    #[must_use]
    pub fn counter(mut self, counter: &'a NameCounter) -> Self {
        self.counter = Some(counter);
        self
    }

    /// Creates a file in the system temporary directory.
    ///
    /// # Errors
    ///
    /// See [`tempfile_in`](Builder::tempfile_in).
    pub fn tempfile(&self) -> TempResult<TempFile> {
        self.tempfile_in("")
    }

    /// Creates and opens a new file in `dir`, or in the system temporary directory if `dir` is empty.
    ///
    /// # Errors
    ///
    /// Returns [`TempError::NotFound`](crate::TempError::NotFound) if `dir` does not exist,
    /// [`TempError::Exhausted`](crate::TempError::Exhausted) if every name tried was taken, and
    /// [`TempError::IO`](crate::TempError::IO) for any other failure.
    pub fn tempfile_in<P: AsRef<Path>>(&self, dir: P) -> TempResult<TempFile> {
        let (path, file) = self.naming(self.suffix).create_unique(dir.as_ref(), TempFile::open)?;
        Ok(TempFile::from_parts(path, file))
    }

    /// Creates a directory in the system temporary directory.
    ///
    /// # Errors
    ///
    /// See [`tempdir_in`](Builder::tempdir_in).
    pub fn tempdir(&self) -> TempResult<PathBuf> {
        self.tempdir_in("")
    }

    /// Creates a new directory in `dir`, or in the system temporary directory if `dir` is empty.
    ///
    /// The suffix is not used for directories.
    ///
    /// # Errors
    ///
    /// Same as [`tempfile_in`](Builder::tempfile_in).
    pub fn tempdir_in<P: AsRef<Path>>(&self, dir: P) -> TempResult<PathBuf> {
        let (path, ()) = self.naming("").create_unique(dir.as_ref(), |p| fs::create_dir(p))?;
        Ok(path)
    }

    fn naming(&self, suffix: &'a str) -> Naming<'a> {
        Naming {
            prefix: self.prefix,
            suffix,
            attempts: self.attempts,
            counter: self.counter.unwrap_or_else(|| NameCounter::global()),
        }
    }
}

impl Default for Builder<'_> {
    fn default() -> Self {
        Self::new()
    }
}
