//! # Launcher
//!
//! Hands control to a program on the medium.
//!
//! Both entry points return `Result<Infallible, NotLaunched>`: there is no
//! success value because a successful launch never returns.

use std::convert::Infallible;

use hal::{NotLaunched, ProgramExecutor, StorageDevice};
use services_logger::{LogEntry, LogSink};

use crate::DirectoryPage;

/// Joins a directory and a filename
pub fn join_path(dir: &str, name: &str) -> String {
    if dir.is_empty() || dir.ends_with('/') {
        format!("{}{}", dir, name)
    } else {
        format!("{}/{}", dir, name)
    }
}

/// Runs the program at `path`, returning if it does not take over
pub fn run_program<X: ProgramExecutor + ?Sized>(
    exec: &mut X,
    log: &mut dyn LogSink,
    path: &str,
) -> Result<Infallible, NotLaunched> {
    log.log(LogEntry::info("launching program").with_field("path", path));
    match exec.execute(path) {
        Ok(never) => match never {},
        Err(err) => {
            log.log(LogEntry::debug("program returned").with_field("path", path));
            Err(err)
        }
    }
}

/// Launches the launchable entry at `selected`
///
/// The directory is re-enumerated and closed before the program starts.
/// An index with no entry, or an unreadable directory, is a quiet no-op.
/// Once a program has been started the session always ends: if the program
/// returns instead of ending the session itself, the executor is told to
/// terminate.
pub fn launch<S, X>(
    page: &DirectoryPage,
    storage: &mut S,
    exec: &mut X,
    log: &mut dyn LogSink,
    selected: usize,
) -> Result<Infallible, NotLaunched>
where
    S: StorageDevice,
    X: ProgramExecutor + ?Sized,
{
    let Some(name) = page.entry_at(storage, log, selected) else {
        log.log(LogEntry::debug("nothing to launch").with_field("index", selected));
        return Err(NotLaunched);
    };

    let path = join_path(page.working_dir(), &name);
    let _ = run_program(exec, log, &path);
    log.log(LogEntry::info("terminating after program exit").with_field("path", &path));
    exec.terminate()
}
