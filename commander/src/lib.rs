//! # Commander
//!
//! The top-level program browser of the board.
//!
//! ## Philosophy
//!
//! - **One owner**: The working directory and the selection live here, for
//!   the life of the process, and survive shell sessions
//! - **Polling loop**: One button event per step, then redraw
//! - **Nothing held open**: Every enumeration opens and closes the directory
//!   before the next poll, because the medium may be swapped in between
//! - **Host adapters are thin**: See [`host`] for the `std`-backed devices
//!   used by the `commander` binary
//!
//! ## Non-Responsibilities
//!
//! The commander does NOT:
//! - Traverse subdirectories
//! - Run programs side by side with the browser
//! - Persist selection across power cycles

pub mod host;
pub mod runtime;

pub use runtime::{Board, Commander, CommanderError};
