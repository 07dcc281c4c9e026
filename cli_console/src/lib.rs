//! # CLI Console
//!
//! The commander's line-oriented command shell.
//!
//! The shell reads one character at a time, echoes it, and collects it in a
//! bounded line buffer. A carriage return or line feed ends the line, which
//! is tokenized and dispatched:
//!
//! 1. A blank line does nothing.
//! 2. A builtin (`exit`, `ls`, `pwd`, `mode <n>`, `font <n>`) runs directly.
//! 3. Anything else names a program: `<working dir><name><primary suffix>`
//!    is handed to the executor.
//!
//! It is NOT a POSIX shell: no pipes, no quoting, no variables.

pub mod commands;
pub mod line_editor;

use hal::{DirectoryStream, DisplayMode, Font, InputDevice, ProgramExecutor, StorageDevice, TextDisplay};
use input_types::is_line_terminator;
use services_file_picker::{join_path, run_program};
use services_logger::{LogEntry, LogSink};
use services_settings::CommanderSettings;

pub use commands::{check_args, tokenize, Builtin, Command, CommandError, BUILTINS};
pub use line_editor::LineBuffer;

/// Shell state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    /// Collecting characters into the line buffer
    LineEditing,
    /// Running a finished line
    Dispatching,
}

/// What the shell does after a dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Reprint the prompt and keep editing
    Continue,
    /// Leave the shell
    Exit,
}

/// Devices a dispatch may touch
pub struct ShellContext<'a, S, D: ?Sized, X: ?Sized> {
    pub storage: &'a mut S,
    pub display: &'a mut D,
    pub exec: &'a mut X,
    pub log: &'a mut dyn LogSink,
}

/// Command shell
#[derive(Debug, Clone)]
pub struct Shell {
    working_dir: String,
    primary_suffix: String,
    prompt: String,
    banner: String,
    shell_mode: DisplayMode,
    shell_font: Font,
    browser_mode: DisplayMode,
    line: LineBuffer,
    state: ShellState,
}

impl Shell {
    /// Creates a shell from validated settings
    pub fn new(settings: &CommanderSettings) -> Self {
        Self {
            working_dir: settings.working_dir.clone(),
            primary_suffix: settings.primary_suffix().to_string(),
            prompt: settings.prompt.clone(),
            banner: settings.banner.clone(),
            shell_mode: settings.shell_mode,
            shell_font: settings.shell_font,
            browser_mode: settings.browser_mode,
            line: LineBuffer::new(settings.line_capacity),
            state: ShellState::LineEditing,
        }
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    /// The line collected so far
    pub fn line(&self) -> &LineBuffer {
        &self.line
    }

    pub fn working_dir(&self) -> &str {
        &self.working_dir
    }

    /// Runs one shell session
    ///
    /// Returns when `exit` is dispatched or the input stream ends. The
    /// browser's text mode is restored before returning.
    pub fn run<S, D, I, X>(
        &mut self,
        storage: &mut S,
        display: &mut D,
        input: &mut I,
        exec: &mut X,
        log: &mut dyn LogSink,
    ) where
        S: StorageDevice,
        D: TextDisplay + ?Sized,
        I: InputDevice + ?Sized,
        X: ProgramExecutor + ?Sized,
    {
        log.log(LogEntry::info("shell started"));
        display.set_mode(self.shell_mode);
        display.set_font(self.shell_font);
        display.write_str(&self.banner);
        display.write_str("\n");
        display.write_str(&self.prompt);
        self.line.clear();
        self.state = ShellState::LineEditing;

        loop {
            let Some(c) = input.read_char() else {
                log.log(LogEntry::info("input closed, leaving shell"));
                break;
            };
            let Some(line) = self.edit(display, c) else {
                continue;
            };

            let mut ctx = ShellContext {
                storage: &mut *storage,
                display: &mut *display,
                exec: &mut *exec,
                log: &mut *log,
            };
            if self.dispatch(&line, &mut ctx) == DispatchOutcome::Exit {
                break;
            }
            display.write_str("\n");
            display.write_str(&self.prompt);
        }

        self.line.clear();
        display.set_mode(self.browser_mode);
        log.log(LogEntry::info("shell exited"));
    }

    /// Feeds one character to the line editor
    ///
    /// Returns the finished line on a line terminator. Any other character
    /// is echoed, and kept if the buffer has room.
    pub fn edit<D: TextDisplay + ?Sized>(&mut self, display: &mut D, c: char) -> Option<String> {
        if is_line_terminator(c) {
            return Some(self.line.take());
        }
        display.put_char(c);
        self.line.push(c);
        None
    }

    /// Tokenizes and runs one line
    pub fn dispatch<S, D, X>(&mut self, line: &str, ctx: &mut ShellContext<'_, S, D, X>) -> DispatchOutcome
    where
        S: StorageDevice,
        D: TextDisplay + ?Sized,
        X: ProgramExecutor + ?Sized,
    {
        self.state = ShellState::Dispatching;
        let outcome = match Command::parse(line) {
            Command::Empty => DispatchOutcome::Continue,
            Command::Builtin { builtin, args } => {
                ctx.log.log(LogEntry::debug("builtin").with_field("command", builtin.name()));
                match self.run_builtin(builtin, &args, ctx) {
                    Ok(outcome) => outcome,
                    Err(err) => {
                        ctx.log.log(
                            LogEntry::warn("command rejected")
                                .with_field("command", builtin.name())
                                .with_field("error", &err),
                        );
                        ctx.display.write_str(&err.to_string());
                        DispatchOutcome::Continue
                    }
                }
            }
            Command::External { stem, .. } => {
                ctx.display.write_str("\n");
                let path = join_path(&self.working_dir, &format!("{}{}", stem, self.primary_suffix));
                let _ = run_program(&mut *ctx.exec, &mut *ctx.log, &path);
                DispatchOutcome::Continue
            }
        };
        self.state = ShellState::LineEditing;
        outcome
    }

    fn run_builtin<S, D, X>(
        &self,
        builtin: Builtin,
        args: &[&str],
        ctx: &mut ShellContext<'_, S, D, X>,
    ) -> Result<DispatchOutcome, CommandError>
    where
        S: StorageDevice,
        D: TextDisplay + ?Sized,
        X: ProgramExecutor + ?Sized,
    {
        check_args(builtin, args)?;
        match builtin {
            Builtin::Exit => return Ok(DispatchOutcome::Exit),
            Builtin::Ls => self.list_directory(ctx),
            Builtin::Pwd => {
                ctx.display.write_str("\n");
                ctx.display.write_str(&self.working_dir);
                ctx.display.write_str("\n");
            }
            Builtin::Mode => match args[0].parse::<u32>() {
                Ok(raw) => ctx.display.set_mode(DisplayMode(raw)),
                Err(_) => ctx.log.log(LogEntry::warn("ignored text mode").with_field("value", args[0])),
            },
            Builtin::Font => match args[0].parse::<u32>().ok().and_then(Font::from_index) {
                Some(font) => {
                    ctx.display.set_mode(self.shell_mode);
                    ctx.display.set_font(font);
                }
                None => ctx.log.log(LogEntry::warn("ignored font").with_field("value", args[0])),
            },
        }
        Ok(DispatchOutcome::Continue)
    }

    fn list_directory<S, D, X>(&self, ctx: &mut ShellContext<'_, S, D, X>)
    where
        S: StorageDevice,
        D: TextDisplay + ?Sized,
        X: ?Sized,
    {
        let mut stream = match ctx.storage.open_dir(&self.working_dir) {
            Ok(stream) => stream,
            Err(err) => {
                ctx.log.log(
                    LogEntry::warn("directory unreadable")
                        .with_field("path", &self.working_dir)
                        .with_field("error", err),
                );
                return;
            }
        };
        for name in stream.entries() {
            ctx.display.write_str("\n");
            ctx.display.write_str(&name);
        }
    }
}
