//! # Simulated Board
//!
//! Deterministic fakes for every HAL trait.
//!
//! ## Design Philosophy
//!
//! - **Deterministic**: Same script, same storage, same screen
//! - **Inspectable**: Every fake records what was done to it
//! - **Fault-injectable**: Media can be ejected, swapped or made unreadable
//! - **Test-focused**: Not intended for production use

pub mod display;
pub mod exec;
pub mod input;
pub mod storage;

pub use display::{DisplayOp, RecordingDisplay};
pub use exec::{RecordingExecutor, TERMINATED};
pub use input::{InputScriptError, ScriptedInput};
pub use storage::{MemoryDirStream, MemoryStorage, Medium, StorageFault};

/// A full simulated board with default devices
pub struct SimBoard {
    pub storage: MemoryStorage,
    pub display: RecordingDisplay,
    pub input: ScriptedInput,
    pub exec: RecordingExecutor,
}

impl SimBoard {
    /// Creates a board with the given medium in the slot
    pub fn with_medium(medium: Medium) -> Self {
        Self {
            storage: MemoryStorage::with_medium(medium),
            display: RecordingDisplay::new(),
            input: ScriptedInput::new(),
            exec: RecordingExecutor::new(),
        }
    }
}
