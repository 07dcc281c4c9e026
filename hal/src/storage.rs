//! # Storage Adapter
//!
//! Directory enumeration on removable media.
//!
//! A directory is opened, read entry by entry and closed again within a
//! single call. The stream type closes its handle in `Drop`, so a listing
//! cut short by the page bound still releases the handle.

use thiserror::Error;

/// Storage errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// No medium in the slot
    #[error("no medium present")]
    NoMedia,

    /// The directory does not exist on the medium
    #[error("directory not found: {0}")]
    NotFound(String),

    /// The medium could not be read
    #[error("I/O error: {0}")]
    Io(String),
}

/// An open directory handle
///
/// Dropping the stream closes the handle.
pub trait DirectoryStream {
    /// Returns the next filename, or `None` at the end of the directory
    fn read_next(&mut self) -> Option<String>;

    /// Borrows the stream as an iterator over filenames
    fn entries(&mut self) -> Entries<'_, Self>
    where
        Self: Sized,
    {
        Entries { stream: self }
    }
}

/// Iterator adapter over a [`DirectoryStream`]
pub struct Entries<'s, T: DirectoryStream> {
    stream: &'s mut T,
}

impl<T: DirectoryStream> Iterator for Entries<'_, T> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.stream.read_next()
    }
}

/// Storage device trait
///
/// Implementers expose one flat directory tree of filenames. Nothing is
/// cached between calls: the medium may be swapped at any time.
pub trait StorageDevice {
    /// Open directory handle type
    type Stream<'a>: DirectoryStream
    where
        Self: 'a;

    /// Initialises the filesystem on the medium
    ///
    /// Called once at start-up. The default does nothing.
    fn mount(&mut self) -> Result<(), StorageError> {
        Ok(())
    }

    /// Opens a directory for enumeration
    fn open_dir(&mut self, path: &str) -> Result<Self::Stream<'_>, StorageError>;
}
