//! Resilience Test Utilities
//!
//! This crate provides shared utilities for resilience and integration tests.
//!
//! ## Test Philosophy
//!
//! - **Safety under faults**: The browser keeps its invariants when the medium
//!   is swapped, ejected or unreadable
//! - **Deterministic failures**: All faults are injected through [`StorageFault`]
//!   or by replacing the medium between steps
//! - **No stale handles**: Every enumeration closes its directory before the
//!   next poll

use commander::{Board, Commander};
use input_types::ButtonEvent;
use services_logger::MemoryLog;
use services_settings::CommanderSettings;
use sim_hal::{
    Medium, MemoryStorage, RecordingDisplay, RecordingExecutor, ScriptedInput, SimBoard,
};

pub use sim_hal::StorageFault;

/// Commander running entirely on simulated devices
pub type SimCommander =
    Commander<MemoryStorage, RecordingDisplay, ScriptedInput, RecordingExecutor, MemoryLog>;

/// A medium whose root holds `count` programs named `prog00.elf`, `prog01.elf`, ...
pub fn programs(count: usize) -> Medium {
    Medium::with_root((0..count).map(|i| format!("prog{:02}.elf", i)))
}

/// Settings with a listing of `page_size` rows
pub fn settings_with_page(page_size: usize) -> CommanderSettings {
    CommanderSettings {
        display_height: page_size * 8,
        font_height: 8,
        ..Default::default()
    }
}

/// Bootstrap helper for tests
///
/// Creates a started commander over `medium` with the given page size.
pub fn test_bootstrap(medium: Medium, page_size: usize) -> SimCommander {
    let board: Board<_, _, _, _> = Board::from(SimBoard::with_medium(medium));
    let mut commander = Commander::new(&settings_with_page(page_size), board, MemoryLog::new())
        .unwrap_or_else(|e| panic!("invalid test settings: {}", e));
    commander
        .start()
        .unwrap_or_else(|e| panic!("test medium did not mount: {}", e));
    commander
}

/// Feeds the same event `times` times
pub fn press(commander: &mut SimCommander, event: ButtonEvent, times: usize) {
    for _ in 0..times {
        commander.handle_event(event);
    }
}
