//! # Host Adapters
//!
//! `std`-backed devices for running the commander on a development machine.
//!
//! - [`HostStorage`]: a host directory stands in for the medium
//! - [`HostDisplay`]: text and ANSI colour sequences on any writer
//! - [`LineInput`]: buttons and keystrokes read line by line
//! - [`HostExecutor`]: runs programs as child processes
//! - [`StderrLog`]: log entries on standard error

use std::collections::VecDeque;
use std::convert::Infallible;
use std::fs::{self, ReadDir};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use hal::{
    Color, DirectoryStream, DisplayMode, Font, InputDevice, NotLaunched, ProgramExecutor,
    StorageDevice, StorageError, TextDisplay,
};
use input_types::ButtonEvent;
use services_logger::{LogEntry, LogSink};

/// Maps a medium path onto the host directory `root`
pub fn host_path(root: &Path, path: &str) -> PathBuf {
    root.join(path.trim_start_matches('/'))
}

/// Host directory used as the medium
#[derive(Debug, Clone)]
pub struct HostStorage {
    root: PathBuf,
}

impl HostStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl StorageDevice for HostStorage {
    type Stream<'a> = HostDirStream;

    fn mount(&mut self) -> Result<(), StorageError> {
        if self.root.is_dir() {
            Ok(())
        } else {
            Err(StorageError::NoMedia)
        }
    }

    fn open_dir(&mut self, path: &str) -> Result<HostDirStream, StorageError> {
        let entries = fs::read_dir(host_path(&self.root, path)).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => StorageError::NotFound(path.to_string()),
            _ => StorageError::Io(err.to_string()),
        })?;
        Ok(HostDirStream { entries })
    }
}

/// Open host directory; closed on drop
#[derive(Debug)]
pub struct HostDirStream {
    entries: ReadDir,
}

impl DirectoryStream for HostDirStream {
    fn read_next(&mut self) -> Option<String> {
        // Unreadable entries are skipped
        self.entries
            .by_ref()
            .flatten()
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .next()
    }
}

/// Text display on a byte writer
///
/// Writes are best effort; a closed terminal does not stop the browser.
#[derive(Debug)]
pub struct HostDisplay<W: Write> {
    out: W,
    mode: Option<DisplayMode>,
    font: Option<Font>,
}

impl HostDisplay<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> HostDisplay<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            mode: None,
            font: None,
        }
    }

    pub fn mode(&self) -> Option<DisplayMode> {
        self.mode
    }

    pub fn font(&self) -> Option<Font> {
        self.font
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        let _ = self.out.write_all(text.as_bytes());
        let _ = self.out.flush();
    }
}

impl<W: Write> TextDisplay for HostDisplay<W> {
    fn clear(&mut self) {
        self.emit("\x1b[2J");
    }

    fn move_to(&mut self, row: usize, column: usize) {
        self.emit(&format!("\x1b[{};{}H", row + 1, column + 1));
    }

    fn write_str(&mut self, text: &str) {
        // The board moves to the next line on a bare line feed
        self.emit(&text.replace('\n', "\r\n"));
    }

    fn set_foreground(&mut self, color: Color) {
        self.emit(&format!("\x1b[38;2;{};{};{}m", color.r, color.g, color.b));
    }

    fn set_background(&mut self, color: Color) {
        self.emit(&format!("\x1b[48;2;{};{};{}m", color.r, color.g, color.b));
    }

    fn set_mode(&mut self, mode: DisplayMode) {
        self.mode = Some(mode);
        self.emit("\x1b[0m\x1b[2J\x1b[1;1H");
    }

    fn set_font(&mut self, font: Font) {
        self.font = Some(font);
    }
}

/// Buttons and keystrokes read from a line-oriented reader
///
/// In the browser each line names one button (`up`, `down`, `launch`,
/// `shell`) or gives its raw code. In the shell each line is typed
/// character by character, line feed included.
#[derive(Debug)]
pub struct LineInput<R: BufRead> {
    reader: R,
    pending: VecDeque<char>,
    closed: bool,
}

impl LineInput<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            closed: false,
        }
    }

    fn read_line(&mut self) -> Option<String> {
        if self.closed {
            return None;
        }
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) | Err(_) => {
                self.closed = true;
                None
            }
            Ok(_) => Some(line),
        }
    }
}

impl<R: BufRead> InputDevice for LineInput<R> {
    fn poll_button(&mut self) -> ButtonEvent {
        self.pending.clear();
        let Some(line) = self.read_line() else {
            return ButtonEvent::None;
        };
        let word = line.trim();
        ButtonEvent::from_name(word)
            .or_else(|| word.parse::<i32>().ok().map(ButtonEvent::from_raw))
            .unwrap_or_default()
    }

    fn read_char(&mut self) -> Option<char> {
        if self.pending.is_empty() {
            let line = self.read_line()?;
            self.pending.extend(line.chars());
        }
        self.pending.pop_front()
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

/// Runs programs from the host medium directory
///
/// A program that was started and exited hands control back, so the caller
/// decides whether the session ends.
#[derive(Debug, Clone)]
pub struct HostExecutor {
    root: PathBuf,
}

impl HostExecutor {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ProgramExecutor for HostExecutor {
    fn execute(&mut self, path: &str) -> Result<Infallible, NotLaunched> {
        let _ = process::Command::new(host_path(&self.root, path)).status();
        Err(NotLaunched)
    }

    fn terminate(&mut self) -> ! {
        let _ = io::stdout().write_all(b"\x1b[0m\r\n");
        let _ = io::stdout().flush();
        process::exit(0)
    }
}

/// Log sink writing one line per entry to standard error
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrLog;

impl LogSink for StderrLog {
    fn log(&mut self, entry: LogEntry) {
        eprintln!("{}", entry);
    }
}
