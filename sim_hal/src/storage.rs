//! In-memory removable storage
//!
//! A [`Medium`] is a set of flat directories. A [`MemoryStorage`] is the
//! slot: a medium can be inserted, ejected or swapped between any two calls,
//! and faults can be injected for the next operations.

use std::cell::Cell;
use std::collections::BTreeMap;

use hal::{DirectoryStream, StorageDevice, StorageError};

/// Contents of one removable medium
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Medium {
    directories: BTreeMap<String, Vec<String>>,
}

impl Medium {
    /// Creates an empty medium with an empty root directory
    pub fn new() -> Self {
        let mut directories = BTreeMap::new();
        directories.insert("/".to_string(), Vec::new());
        Self { directories }
    }

    /// Creates a medium whose root directory holds `names` in order
    pub fn with_root<I, N>(names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        Self::new().with_dir("/", names)
    }

    /// Adds (or replaces) a directory
    pub fn with_dir<I, N>(mut self, path: &str, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.directories
            .insert(normalize(path), names.into_iter().map(Into::into).collect());
        self
    }

    /// Appends one file to a directory, creating it if needed
    pub fn add_file(&mut self, dir: &str, name: impl Into<String>) {
        self.directories
            .entry(normalize(dir))
            .or_default()
            .push(name.into());
    }

    /// Returns the names in a directory
    pub fn list(&self, dir: &str) -> Option<&[String]> {
        self.directories.get(&normalize(dir)).map(Vec::as_slice)
    }
}

fn normalize(path: &str) -> String {
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{}/", path)
    }
}

/// Fault to inject into storage operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageFault {
    /// Never fail
    None,
    /// Every `open_dir` fails with an I/O error
    OpenDir,
    /// Only the next `open_dir` fails
    OpenDirOnce,
    /// `mount` fails
    Mount,
}

/// Removable storage slot
#[derive(Debug)]
pub struct MemoryStorage {
    medium: Option<Medium>,
    fault: StorageFault,
    open_handles: Cell<usize>,
    open_calls: usize,
    mounted: bool,
}

impl MemoryStorage {
    /// Creates a slot with no medium
    pub fn empty() -> Self {
        Self {
            medium: None,
            fault: StorageFault::None,
            open_handles: Cell::new(0),
            open_calls: 0,
            mounted: false,
        }
    }

    /// Creates a slot holding `medium`
    pub fn with_medium(medium: Medium) -> Self {
        let mut storage = Self::empty();
        storage.medium = Some(medium);
        storage
    }

    /// Inserts a medium, returning the one previously in the slot
    pub fn insert(&mut self, medium: Medium) -> Option<Medium> {
        self.medium.replace(medium)
    }

    /// Ejects the medium
    pub fn eject(&mut self) -> Option<Medium> {
        self.medium.take()
    }

    /// Mutable access to the medium in the slot
    pub fn medium_mut(&mut self) -> Option<&mut Medium> {
        self.medium.as_mut()
    }

    /// Sets the fault policy
    pub fn set_fault(&mut self, fault: StorageFault) {
        self.fault = fault;
    }

    /// Number of directory handles currently open
    pub fn open_handles(&self) -> usize {
        self.open_handles.get()
    }

    /// Number of `open_dir` calls so far, failed ones included
    pub fn open_calls(&self) -> usize {
        self.open_calls
    }

    /// Returns true once `mount` has succeeded
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}

impl StorageDevice for MemoryStorage {
    type Stream<'a> = MemoryDirStream<'a>;

    fn mount(&mut self) -> Result<(), StorageError> {
        if self.fault == StorageFault::Mount {
            return Err(StorageError::Io("mount failed".to_string()));
        }
        if self.medium.is_none() {
            return Err(StorageError::NoMedia);
        }
        self.mounted = true;
        Ok(())
    }

    fn open_dir(&mut self, path: &str) -> Result<MemoryDirStream<'_>, StorageError> {
        self.open_calls += 1;
        match self.fault {
            StorageFault::OpenDir => {
                return Err(StorageError::Io("simulated read failure".to_string()));
            }
            StorageFault::OpenDirOnce => {
                self.fault = StorageFault::None;
                return Err(StorageError::Io("simulated read failure".to_string()));
            }
            StorageFault::None | StorageFault::Mount => {}
        }

        let this = &*self;
        let medium = this.medium.as_ref().ok_or(StorageError::NoMedia)?;
        let names = medium
            .list(path)
            .ok_or_else(|| StorageError::NotFound(path.to_string()))?;

        this.open_handles.set(this.open_handles.get() + 1);
        Ok(MemoryDirStream {
            names: names.iter(),
            open_handles: &this.open_handles,
        })
    }
}

/// Open directory on a [`MemoryStorage`]
pub struct MemoryDirStream<'a> {
    names: std::slice::Iter<'a, String>,
    open_handles: &'a Cell<usize>,
}

impl DirectoryStream for MemoryDirStream<'_> {
    fn read_next(&mut self) -> Option<String> {
        self.names.next().cloned()
    }
}

impl Drop for MemoryDirStream<'_> {
    fn drop(&mut self) {
        self.open_handles.set(self.open_handles.get() - 1);
    }
}
