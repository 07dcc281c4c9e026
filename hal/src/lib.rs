//! # Hardware Abstraction Layer (HAL)
//!
//! This crate defines the traits the commander uses to reach the board.
//!
//! ## Philosophy
//!
//! **The board must be fully abstracted and swappable.**
//!
//! The browser and the shell never touch a driver directly. Storage, display,
//! input and program execution all go through traits that a board crate (or
//! the simulator) implements.
//!
//! ## Design Principles
//!
//! 1. **Trait-based**: Every collaborator is a trait
//! 2. **Scoped handles**: Directory handles close on drop, never across polls
//! 3. **Write-only display**: No display state is ever read back
//! 4. **Testable**: Every trait can be faked in `sim_hal`

pub mod display;
pub mod exec;
pub mod input;
pub mod storage;

pub use display::{Color, DisplayMode, Font, TextDisplay};
pub use exec::{NotLaunched, ProgramExecutor};
pub use input::InputDevice;
pub use storage::{DirectoryStream, Entries, StorageDevice, StorageError};
