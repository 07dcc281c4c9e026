//! Enumeration Failure Tests
//!
//! An unreadable directory is an empty listing, never a fault.

use input_types::ButtonEvent;
use services_file_picker::{reclamp, DirectoryPage, ExecutableFilter, Selection};
use services_logger::{LogLevel, MemoryLog};
use sim_hal::{MemoryStorage, RecordingDisplay};
use tests_resilience::{press, programs, test_bootstrap, StorageFault};

#[test]
fn test_failed_enumeration_counts_zero() {
    let page = DirectoryPage::new("/", ExecutableFilter::default(), 8);
    let mut storage = MemoryStorage::with_medium(programs(12));
    storage.set_fault(StorageFault::OpenDir);
    let mut display = RecordingDisplay::new();
    let mut log = MemoryLog::new();

    let total = page.refresh(&mut storage, &mut display, &mut log, Selection::new(5, 0));

    assert_eq!(total, 0);
    assert_eq!(reclamp(5, 0, total, 8), (5, 0));
    assert!(log.contains(LogLevel::Warn, "directory unreadable, listing is empty"));
    assert_eq!(storage.open_handles(), 0);
}

#[test]
fn test_transient_failure_recovers_on_next_step() {
    let mut commander = test_bootstrap(programs(12), 8);
    press(&mut commander, ButtonEvent::Down, 10);

    commander
        .board_mut()
        .storage
        .set_fault(StorageFault::OpenDirOnce);
    commander.handle_event(ButtonEvent::Up);
    assert_eq!(commander.total(), 0);
    assert_eq!(commander.selection(), Selection::new(9, 3));

    commander.handle_event(ButtonEvent::Up);
    assert_eq!(commander.total(), 12);
    assert!(commander.selection().is_consistent(12, 8));
    assert_eq!(commander.board().display.highlighted_rows(), vec![5]);
}

#[test]
fn test_launch_with_unreadable_directory_is_noop() {
    let mut commander = test_bootstrap(programs(3), 8);
    commander.board_mut().storage.set_fault(StorageFault::OpenDir);

    commander.handle_event(ButtonEvent::Launch);

    assert!(commander.board().exec.executed().is_empty());
    assert!(!commander.board().exec.terminated());
}

#[test]
fn test_moves_without_entries_do_not_fault() {
    let mut commander = test_bootstrap(programs(0), 8);

    press(&mut commander, ButtonEvent::Down, 3);
    press(&mut commander, ButtonEvent::Up, 3);

    assert_eq!(commander.total(), 0);
    assert_eq!(commander.selection(), Selection::default());
}
