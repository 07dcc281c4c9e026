//! # Browser Loop
//!
//! Polls one button event per step, updates the selection, and redraws
//! the program list.

use cli_console::Shell;
use hal::{DisplayMode, InputDevice, ProgramExecutor, StorageDevice, StorageError, TextDisplay};
use input_types::ButtonEvent;
use services_file_picker::{launch, DirectoryPage, Selection};
use services_logger::{LogEntry, LogSink};
use services_settings::{CommanderSettings, SettingsError};
use sim_hal::{MemoryStorage, RecordingDisplay, RecordingExecutor, ScriptedInput, SimBoard};
use thiserror::Error;

/// Commander error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommanderError {
    #[error("Storage mount failed: {0}")]
    Mount(#[from] StorageError),

    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),
}

/// The devices the commander drives
#[derive(Debug)]
pub struct Board<S, D, I, X> {
    pub storage: S,
    pub display: D,
    pub input: I,
    pub exec: X,
}

impl<S, D, I, X> Board<S, D, I, X> {
    pub fn new(storage: S, display: D, input: I, exec: X) -> Self {
        Self {
            storage,
            display,
            input,
            exec,
        }
    }
}

impl From<SimBoard> for Board<MemoryStorage, RecordingDisplay, ScriptedInput, RecordingExecutor> {
    fn from(sim: SimBoard) -> Self {
        Self::new(sim.storage, sim.display, sim.input, sim.exec)
    }
}

/// Program browser
pub struct Commander<S, D, I, X, L> {
    board: Board<S, D, I, X>,
    log: L,
    page: DirectoryPage,
    shell: Shell,
    browser_mode: DisplayMode,
    selection: Selection,
    /// Entry count seen by the last refresh
    total: usize,
}

impl<S, D, I, X, L> Commander<S, D, I, X, L>
where
    S: StorageDevice,
    D: TextDisplay,
    I: InputDevice,
    X: ProgramExecutor,
    L: LogSink,
{
    /// Creates a commander over `board`
    ///
    /// The settings are validated here; nothing is drawn until [`Self::start`].
    pub fn new(
        settings: &CommanderSettings,
        board: Board<S, D, I, X>,
        log: L,
    ) -> Result<Self, CommanderError> {
        settings.validate()?;
        Ok(Self {
            board,
            log,
            page: DirectoryPage::from_settings(settings),
            shell: Shell::new(settings),
            browser_mode: settings.browser_mode,
            selection: Selection::default(),
            total: 0,
        })
    }

    /// Starts the browser with an explicit selection
    ///
    /// Used when the selection outlives the process state, e.g. after a
    /// reset with a different medium inserted.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Mounts the medium and draws the first page
    ///
    /// The list is drawn twice: the first pass counts the entries, the
    /// second draws the reclamped selection.
    pub fn start(&mut self) -> Result<(), CommanderError> {
        if let Err(err) = self.board.storage.mount() {
            self.log
                .log(LogEntry::error("storage mount failed").with_field("error", &err));
            return Err(err.into());
        }
        self.board.display.set_mode(self.browser_mode);

        self.total = self.redraw();
        self.selection = self.selection.reclamp(self.total, self.page.page_size());
        self.total = self.redraw();
        Ok(())
    }

    /// Polls one button event and handles it
    pub fn step(&mut self) -> ButtonEvent {
        let event = self.board.input.poll_button();
        self.handle_event(event);
        event
    }

    /// Runs until the input closes or `max_steps` events were polled
    ///
    /// A `max_steps` of zero means no limit. Returns the number of steps.
    pub fn run(&mut self, max_steps: usize) -> usize {
        let mut steps = 0;
        while !self.board.input.is_closed() && (max_steps == 0 || steps < max_steps) {
            self.step();
            steps += 1;
        }
        steps
    }

    /// Applies one button event
    pub fn handle_event(&mut self, event: ButtonEvent) {
        match event {
            ButtonEvent::None => return,
            ButtonEvent::Up => self.selection.move_up(),
            ButtonEvent::Down => self.selection.move_down(self.total),
            ButtonEvent::Launch => {
                let _ = launch(
                    &self.page,
                    &mut self.board.storage,
                    &mut self.board.exec,
                    &mut self.log,
                    self.selection.selected,
                );
            }
            ButtonEvent::EnterShell => self.shell.run(
                &mut self.board.storage,
                &mut self.board.display,
                &mut self.board.input,
                &mut self.board.exec,
                &mut self.log,
            ),
        }
        self.settle();
    }

    /// Reclamps against the last count and redraws, then repeats once if
    /// the medium changed under the selection
    fn settle(&mut self) {
        let page_size = self.page.page_size();
        self.selection = self.selection.reclamp(self.total, page_size);
        let total = self.redraw();

        if total != self.total {
            self.log.log(
                LogEntry::debug("entry count changed")
                    .with_field("before", self.total)
                    .with_field("after", total),
            );
        }
        self.total = total;

        if !self.selection.is_consistent(total, page_size) {
            let fixed = self.selection.reclamp(total, page_size);
            self.log.log(
                LogEntry::debug("selection reclamped")
                    .with_field("selected", fixed.selected)
                    .with_field("top", fixed.top),
            );
            self.selection = fixed;
            self.total = self.redraw();
        }
    }

    fn redraw(&mut self) -> usize {
        self.page.refresh(
            &mut self.board.storage,
            &mut self.board.display,
            &mut self.log,
            self.selection,
        )
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Entry count seen by the last refresh
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn page(&self) -> &DirectoryPage {
        &self.page
    }

    pub fn board(&self) -> &Board<S, D, I, X> {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board<S, D, I, X> {
        &mut self.board
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    /// Returns the board and the log sink
    pub fn into_parts(self) -> (Board<S, D, I, X>, L) {
        (self.board, self.log)
    }
}
