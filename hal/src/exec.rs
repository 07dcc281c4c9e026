//! # Program Execution
//!
//! Hands the machine over to an external program.
//!
//! Launching is a one-way transfer of control. The success type is
//! [`Infallible`], so a caller can only ever observe the failure case;
//! a successful launch never comes back.

use core::convert::Infallible;
use thiserror::Error;

/// The program did not take over the machine
///
/// The cause (missing file, bad binary, program returned) is not
/// distinguished.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Default)]
#[error("program did not launch")]
pub struct NotLaunched;

/// Program execution primitive
pub trait ProgramExecutor {
    /// Loads and runs the program at `path`
    ///
    /// Does not return if the program takes over and ends the session
    /// itself. Returns `Err(NotLaunched)` otherwise.
    fn execute(&mut self, path: &str) -> Result<Infallible, NotLaunched>;

    /// Ends the session unconditionally
    fn terminate(&mut self) -> !;
}
