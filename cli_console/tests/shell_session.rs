//! Whole shell sessions driven from scripted keystrokes

use cli_console::Shell;
use hal::{DisplayMode, Font};
use services_logger::{LogLevel, MemoryLog};
use services_settings::CommanderSettings;
use sim_hal::{DisplayOp, Medium, SimBoard};

fn run_session(board: &mut SimBoard, log: &mut MemoryLog) -> Shell {
    let mut shell = Shell::new(&CommanderSettings::default());
    shell.run(
        &mut board.storage,
        &mut board.display,
        &mut board.input,
        &mut board.exec,
        log,
    );
    shell
}

#[test]
fn test_banner_prompt_and_exit() {
    let mut board = SimBoard::with_medium(Medium::new());
    board.input.type_line("exit");
    let mut log = MemoryLog::new();

    run_session(&mut board, &mut log);

    assert_eq!(board.display.transcript(), "FemtOS v. 0.0\n]exit");
    assert_eq!(
        board.display.ops()[..2],
        [
            DisplayOp::Mode(DisplayMode::FGA_640X400X4BPP),
            DisplayOp::Font(Font::Font8x16),
        ]
    );
    assert_eq!(board.display.mode(), Some(DisplayMode::OLED));
    assert!(log.contains(LogLevel::Info, "shell started"));
    assert!(log.contains(LogLevel::Info, "shell exited"));
}

#[test]
fn test_prompt_after_each_command() {
    let mut board = SimBoard::with_medium(Medium::with_root(["life.elf"]));
    board.input.type_line("pwd").type_line("ls").type_line("exit");
    let mut log = MemoryLog::new();

    run_session(&mut board, &mut log);

    assert_eq!(
        board.display.transcript(),
        "FemtOS v. 0.0\n]pwd\n/\n\n]ls\nlife.elf\n]exit"
    );
}

#[test]
fn test_blank_lines_reprompt() {
    let mut board = SimBoard::with_medium(Medium::new());
    board.input.type_text("\r\r").type_line("exit");
    let mut log = MemoryLog::new();

    run_session(&mut board, &mut log);

    assert_eq!(board.display.transcript(), "FemtOS v. 0.0\n]\n]\n]exit");
}

#[test]
fn test_external_command_returns_to_prompt() {
    let mut board = SimBoard::with_medium(Medium::with_root(["snake.elf"]));
    board.input.type_line("snake").type_line("exit");
    let mut log = MemoryLog::new();

    run_session(&mut board, &mut log);

    assert_eq!(board.exec.executed(), ["/snake.elf".to_string()]);
    assert!(!board.exec.terminated());
    assert_eq!(board.display.transcript(), "FemtOS v. 0.0\n]snake\n\n]exit");
}

#[test]
fn test_end_of_input_leaves_shell() {
    let mut board = SimBoard::with_medium(Medium::new());
    board.input.type_text("pw");
    let mut log = MemoryLog::new();

    let shell = run_session(&mut board, &mut log);

    assert_eq!(board.display.mode(), Some(DisplayMode::OLED));
    assert!(shell.line().is_empty());
    assert!(log.contains(LogLevel::Info, "input closed, leaving shell"));
}

#[test]
fn test_argument_error_keeps_session() {
    let mut board = SimBoard::with_medium(Medium::new());
    board.input.type_line("mode").type_line("font 1").type_line("exit");
    let mut log = MemoryLog::new();

    run_session(&mut board, &mut log);

    assert_eq!(
        board.display.transcript(),
        "FemtOS v. 0.0\n]modeinvalid number of arguments\n]font 1\n]exit"
    );
    assert!(log.contains(LogLevel::Warn, "command rejected"));
}
