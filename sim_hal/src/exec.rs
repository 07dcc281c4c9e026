//! Recording program executor
//!
//! Records every path it is asked to run and never launches anything.
//! `terminate` panics with [`TERMINATED`] so a test can observe the end of
//! the session with `std::panic::catch_unwind`.

use std::convert::Infallible;

use hal::{NotLaunched, ProgramExecutor};

/// Panic message used by [`RecordingExecutor::terminate`]
pub const TERMINATED: &str = "simulated session terminated";

/// Executor fake
#[derive(Debug, Clone, Default)]
pub struct RecordingExecutor {
    executed: Vec<String>,
    terminated: bool,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths passed to `execute`, oldest first
    pub fn executed(&self) -> &[String] {
        &self.executed
    }

    /// Returns true once `terminate` has been called
    pub fn terminated(&self) -> bool {
        self.terminated
    }
}

impl ProgramExecutor for RecordingExecutor {
    fn execute(&mut self, path: &str) -> Result<Infallible, NotLaunched> {
        self.executed.push(path.to_string());
        Err(NotLaunched)
    }

    fn terminate(&mut self) -> ! {
        self.terminated = true;
        panic!("{}", TERMINATED);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{self, AssertUnwindSafe};

    #[test]
    fn test_execute_records_path() {
        let mut exec = RecordingExecutor::new();
        assert_eq!(exec.execute("/a.elf").err(), Some(NotLaunched));
        assert_eq!(exec.executed(), ["/a.elf".to_string()]);
    }

    #[test]
    fn test_terminate_panics() {
        let mut exec = RecordingExecutor::new();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            exec.terminate();
        }));

        assert!(result.is_err());
        assert!(exec.terminated());
    }
}
