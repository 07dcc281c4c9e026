//! Pagination Tests
//!
//! Twenty programs on an eight-row display.

use std::ops::Range;

use input_types::ButtonEvent;
use services_file_picker::Selection;
use tests_resilience::{press, programs, test_bootstrap, SimCommander};

fn shown(commander: &SimCommander) -> Vec<String> {
    commander.board().display.screen()
}

fn labels(range: Range<usize>) -> Vec<String> {
    range.map(|i| format!("prog{:02}", i)).collect()
}

#[test]
fn test_first_page_after_start() {
    let commander = test_bootstrap(programs(20), 8);

    assert_eq!(commander.total(), 20);
    assert_eq!(shown(&commander), labels(0..8));
    assert_eq!(commander.board().display.highlighted_rows(), vec![0]);
}

#[test]
fn test_window_follows_selection_to_fifteen() {
    let mut commander = test_bootstrap(programs(20), 8);
    press(&mut commander, ButtonEvent::Down, 15);

    assert_eq!(commander.selection(), Selection::new(15, 8));
    assert_eq!(commander.page().visible_range(8, 20), 8..16);
    assert_eq!(shown(&commander), labels(8..16));
}

#[test]
fn test_scrolling_back_up_moves_window_minimally() {
    let mut commander = test_bootstrap(programs(20), 8);
    press(&mut commander, ButtonEvent::Down, 15);
    press(&mut commander, ButtonEvent::Up, 8);

    assert_eq!(commander.selection(), Selection::new(7, 7));
    assert_eq!(shown(&commander), labels(7..15));
    assert_eq!(commander.board().display.highlighted_rows(), vec![0]);
}

#[test]
fn test_last_page_ends_at_last_entry() {
    let mut commander = test_bootstrap(programs(20), 8);
    press(&mut commander, ButtonEvent::Down, 30);

    assert_eq!(commander.selection(), Selection::new(19, 12));
    assert_eq!(shown(&commander), labels(12..20));
    assert_eq!(commander.board().display.highlighted_rows(), vec![7]);
}

#[test]
fn test_scripted_walk() {
    let mut commander = test_bootstrap(programs(20), 8);
    let buttons = vec![ButtonEvent::Down; 9]
        .into_iter()
        .chain([ButtonEvent::None, ButtonEvent::Up])
        .collect::<Vec<_>>();
    let script = serde_json::to_string(&buttons).unwrap();
    commander.board_mut().input = sim_hal::ScriptedInput::from_json_buttons(&script).unwrap();

    assert_eq!(commander.run(0), 11);
    assert_eq!(commander.selection(), Selection::new(8, 2));
}
