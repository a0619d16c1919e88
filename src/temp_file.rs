use std::fmt::{Debug, Formatter};
use std::fs::{File, OpenOptions};
use std::io::{self, IoSlice, IoSliceMut, Read, Seek, SeekFrom, Write};
use std::ops::{Deref, DerefMut};
#[cfg(unix)]
use std::os::fd::{AsRawFd, RawFd};
use std::path::{Path, PathBuf};

use crate::builder::Builder;
use crate::error::TempResult;

/// Creates and opens a new, uniquely named file in `dir`.
///
/// The name is `prefix`, a decimal number, then `suffix` as an extension (`"tmp"` and `".tmp"`
/// both give `.tmp`). An empty `dir` means the system temporary directory.
///
/// # Errors
///
/// Returns [`TempError::NotFound`](crate::TempError::NotFound) carrying `dir` if it does not
/// exist, [`TempError::Exhausted`](crate::TempError::Exhausted) if no free name was found, and
/// [`TempError::IO`](crate::TempError::IO) for any other OS failure.
pub fn temp_file<P: AsRef<Path>>(dir: P, prefix: &str, suffix: &str) -> TempResult<TempFile> {
    Builder::new()
        .prefix(prefix)
        .suffix(suffix)
        .tempfile_in(dir)
}

/// A newly created file together with the path it was created at.
///
/// The handle is open for reading and writing, positioned at the start. Nothing is removed on
/// drop: the file belongs to the caller from the moment it is returned.
pub struct TempFile {
    path: PathBuf,
    file: File,
}

impl TempFile {
    pub(crate) fn from_parts(path: PathBuf, file: File) -> Self {
        Self { path, file }
    }

    /// Exclusively creates the file at `path`, failing if anything already exists there.
    pub(crate) fn open(path: &Path) -> io::Result<File> {
        OpenOptions::new()
            .create_new(true)
            .read(true)
            .write(true)
            .open(path)
    }

    /// Returns the path of the file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns an immutable reference to the file handle.
    #[must_use]
    pub fn file(&self) -> &File {
        &self.file
    }

    /// Returns a mutable reference to the file handle.
    pub fn file_mut(&mut self) -> &mut File {
        &mut self.file
    }

    /// Consumes the `TempFile` and returns the inner file handle.
    #[must_use]
    pub fn into_inner(self) -> File {
        self.file
    }

    /// Consumes the `TempFile` and returns its path and handle.
    #[must_use]
    pub fn into_parts(self) -> (PathBuf, File) {
        (self.path, self.file)
    }

    /// Flushes and closes the handle, returning the path of the file left on disk.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing fails.
    pub fn into_path(mut self) -> io::Result<PathBuf> {
        self.file.flush()?;
        Ok(self.path)
    }

    /// Synchronizes the file's state with the storage device.
    ///
    /// # Errors
    ///
    /// Returns an error if syncing fails.
    pub fn sync_all(&self) -> io::Result<()> {
        self.file.sync_all()
    }

    /// Retrieves metadata of the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the metadata cannot be accessed.
    pub fn metadata(&self) -> io::Result<std::fs::Metadata> {
        self.file.metadata()
    }
}

impl Write for TempFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }
    fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> io::Result<usize> {
        self.file.write_vectored(bufs)
    }
    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

impl Read for TempFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
    fn read_vectored(&mut self, bufs: &mut [IoSliceMut<'_>]) -> io::Result<usize> {
        self.file.read_vectored(bufs)
    }
    fn read_to_end(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        self.file.read_to_end(buf)
    }
    fn read_to_string(&mut self, buf: &mut String) -> io::Result<usize> {
        self.file.read_to_string(buf)
    }
}

impl Seek for TempFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.file.seek(pos)
    }
}

impl Debug for TempFile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TempFile")
            .field("path", &self.path)
            .field("file", &self.file)
            .finish()
    }
}

impl AsRef<Path> for TempFile {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

#[cfg(unix)]
impl AsRawFd for TempFile {
    fn as_raw_fd(&self) -> RawFd {
        self.file.as_raw_fd()
    }
}

#[cfg(windows)]
impl std::os::windows::io::AsRawHandle for TempFile {
    fn as_raw_handle(&self) -> std::os::windows::io::RawHandle {
        std::os::windows::io::AsRawHandle::as_raw_handle(&self.file)
    }
}

impl Deref for TempFile {
    type Target = File;
    fn deref(&self) -> &Self::Target {
        &self.file
    }
}

impl DerefMut for TempFile {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.file
    }
}

impl From<TempFile> for File {
    fn from(f: TempFile) -> Self {
        f.file
    }
}
