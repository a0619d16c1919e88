use std::fmt::{Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
/// Errors that can occur when creating a temporary file or directory.
pub enum TempError {
    /// The target directory does not exist.
    NotFound {
        /// The directory that was looked up.
        path: PathBuf,
        /// The error reported by the OS.
        source: io::Error,
    },
    /// Every candidate name was already taken.
    Exhausted {
        /// The directory the names were tried in.
        dir: PathBuf,
        /// How many candidates were tried.
        attempts: usize,
    },
    /// Any other IO error, passed through unchanged.
    IO {
        /// The path the failing operation targeted.
        path: PathBuf,
        /// The error reported by the OS.
        source: io::Error,
    },
}

impl TempError {
    /// Returns the [`io::ErrorKind`] this error corresponds to.
    ///
    /// Exhaustion maps to [`io::ErrorKind::AlreadyExists`].
    #[must_use]
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::NotFound { .. } => io::ErrorKind::NotFound,
            Self::Exhausted { .. } => io::ErrorKind::AlreadyExists,
            Self::IO { source, .. } => source.kind(),
        }
    }

    /// Returns the path the error is about.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path, .. } | Self::IO { path, .. } => path,
            Self::Exhausted { dir, .. } => dir,
        }
    }

    /// Returns the underlying OS error, if there is one.
    #[must_use]
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Self::NotFound { source, .. } | Self::IO { source, .. } => Some(source),
            Self::Exhausted { .. } => None,
        }
    }

    /// Checks whether the target directory was missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Checks whether the retry bound was reached.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted { .. })
    }
}

impl Display for TempError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { path, source } => {
                write!(f, "directory {} not found: {source}", path.display())
            }
            Self::Exhausted { dir, attempts } => write!(
                f,
                "could not allocate a unique name in {} after {attempts} attempts",
                dir.display()
            ),
            Self::IO { path, source } => write!(f, "IO error at {}: {source}", path.display()),
        }
    }
}

impl std::error::Error for TempError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound { source, .. } | Self::IO { source, .. } => Some(source),
            Self::Exhausted { .. } => None,
        }
    }
}

pub type TempResult<T> = Result<T, TempError>;

impl From<TempError> for io::Error {
    fn from(e: TempError) -> Self {
        match e {
            TempError::NotFound { source, .. } | TempError::IO { source, .. } => source,
            exhausted @ TempError::Exhausted { .. } => {
                io::Error::new(io::ErrorKind::AlreadyExists, exhausted)
            }
        }
    }
}
