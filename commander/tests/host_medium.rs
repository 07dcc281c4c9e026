//! The browser over a real host directory

use std::fs;
use std::panic::{self, AssertUnwindSafe};

use commander::host::HostStorage;
use commander::{Board, Commander};
use hal::{DirectoryStream, StorageDevice, StorageError};
use input_types::ButtonEvent;
use services_logger::MemoryLog;
use services_settings::CommanderSettings;
use sim_hal::{RecordingDisplay, RecordingExecutor, ScriptedInput, TERMINATED};

fn medium(names: &[&str]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for name in names {
        fs::write(dir.path().join(name), b"").unwrap();
    }
    dir
}

fn browser(
    dir: &tempfile::TempDir,
    input: ScriptedInput,
) -> Commander<HostStorage, RecordingDisplay, ScriptedInput, RecordingExecutor, MemoryLog> {
    let board = Board::new(
        HostStorage::new(dir.path()),
        RecordingDisplay::new(),
        input,
        RecordingExecutor::new(),
    );
    Commander::new(&CommanderSettings::default(), board, MemoryLog::new()).unwrap()
}

#[test]
fn test_host_directory_lists_every_entry() {
    let dir = medium(&["b.elf", "a.txt"]);
    let mut storage = HostStorage::new(dir.path());

    let mut names: Vec<String> = storage.open_dir("/").unwrap().entries().collect();
    names.sort();
    assert_eq!(names, vec!["a.txt".to_string(), "b.elf".to_string()]);
}

#[test]
fn test_missing_directory_not_found() {
    let dir = medium(&[]);
    let mut storage = HostStorage::new(dir.path());

    assert_eq!(
        storage.open_dir("/games/").err(),
        Some(StorageError::NotFound("/games/".to_string()))
    );
}

#[test]
fn test_missing_root_is_no_media() {
    let dir = medium(&[]);
    let mut storage = HostStorage::new(dir.path().join("unplugged"));
    assert_eq!(storage.mount(), Err(StorageError::NoMedia));
}

#[test]
fn test_browser_counts_launchable_files() {
    let dir = medium(&["snake.elf", "pong.bin", "notes.txt", "x.el"]);
    let mut commander = browser(&dir, ScriptedInput::new());
    commander.start().unwrap();

    assert_eq!(commander.total(), 2);
    assert_eq!(commander.board().display.screen().len(), 2);
}

#[test]
fn test_files_added_between_steps_are_listed() {
    let dir = medium(&["snake.elf"]);
    let mut commander = browser(&dir, ScriptedInput::new());
    commander.start().unwrap();
    assert_eq!(commander.total(), 1);

    fs::write(dir.path().join("tetris.elf"), b"").unwrap();
    commander.handle_event(ButtonEvent::Down);

    assert_eq!(commander.total(), 2);
}

#[test]
fn test_launch_terminates_after_program_returns() {
    let dir = medium(&["snake.elf"]);
    let mut commander = browser(&dir, ScriptedInput::new());
    commander.start().unwrap();

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        commander.handle_event(ButtonEvent::Launch);
    }));

    let message = result.unwrap_err();
    assert_eq!(message.downcast_ref::<String>().map(String::as_str), Some(TERMINATED));
    assert_eq!(commander.board().exec.executed(), ["/snake.elf".to_string()]);
    assert!(commander.board().exec.terminated());
}
