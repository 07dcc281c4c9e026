//! # Program Browser
//!
//! The directory page model behind the commander's program list.
//!
//! ## Philosophy
//!
//! - **Never cached**: The listing is re-enumerated on every refresh and every
//!   launch, because the medium may have been swapped in between
//! - **Flat**: One working directory, no subdirectory traversal
//! - **Explicit state**: The selection lives in a [`Selection`] owned by the
//!   caller, not in the page model
//! - **Quiet failures**: An unreadable directory is an empty listing
//!
//! ## Example
//!
//! ```ignore
//! use services_file_picker::{DirectoryPage, ExecutableFilter, Selection};
//!
//! let page = DirectoryPage::new("/", ExecutableFilter::default(), 16);
//! let mut selection = Selection::default();
//!
//! let total = page.refresh(&mut storage, &mut display, &mut log, selection);
//! selection.move_down(total);
//! selection = selection.reclamp(total, page.page_size());
//! page.refresh(&mut storage, &mut display, &mut log, selection);
//! ```

pub mod executable;
pub mod launcher;
pub mod render;
pub mod selection;

use std::ops::{ControlFlow, Range};

use hal::{DirectoryStream, StorageDevice, TextDisplay};
use services_logger::{LogEntry, LogSink};
use services_settings::CommanderSettings;

pub use executable::ExecutableFilter;
pub use launcher::{join_path, launch, run_program};
pub use render::display_name;
pub use selection::{reclamp, Selection};

/// Default width of the name column
pub const DEFAULT_NAME_WIDTH: usize = 14;

/// Default marker appended to cut names
pub const DEFAULT_TRUNCATION_MARKER: char = '.';

/// Directory page model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryPage {
    working_dir: String,
    filter: ExecutableFilter,
    page_size: usize,
    name_width: usize,
    truncation_marker: char,
}

impl DirectoryPage {
    /// Creates a page model over `working_dir`
    pub fn new(working_dir: impl Into<String>, filter: ExecutableFilter, page_size: usize) -> Self {
        Self {
            working_dir: working_dir.into(),
            filter,
            page_size: page_size.max(1),
            name_width: DEFAULT_NAME_WIDTH,
            truncation_marker: DEFAULT_TRUNCATION_MARKER,
        }
    }

    /// Creates a page model from validated settings
    pub fn from_settings(settings: &CommanderSettings) -> Self {
        Self::new(
            settings.working_dir.clone(),
            ExecutableFilter::new(settings.launchable_suffixes.iter().cloned()),
            settings.page_size(),
        )
        .with_name_column(settings.name_width, settings.truncation_marker)
    }

    /// Sets the name column width and truncation marker
    pub fn with_name_column(mut self, width: usize, marker: char) -> Self {
        self.name_width = width;
        self.truncation_marker = marker;
        self
    }

    pub fn working_dir(&self) -> &str {
        &self.working_dir
    }

    pub fn filter(&self) -> &ExecutableFilter {
        &self.filter
    }

    /// Number of rows visible at once
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Enumerates the launchable entries of the working directory
    ///
    /// `visit` receives each launchable entry with its filtered index and
    /// may stop the enumeration early. Returns the number of entries visited.
    /// The directory handle is closed before returning. An unreadable
    /// directory is logged and counts as empty.
    pub fn scan<S, F>(&self, storage: &mut S, log: &mut dyn LogSink, mut visit: F) -> usize
    where
        S: StorageDevice,
        F: FnMut(usize, &str) -> ControlFlow<()>,
    {
        let mut stream = match storage.open_dir(&self.working_dir) {
            Ok(stream) => stream,
            Err(err) => {
                log.log(
                    LogEntry::warn("directory unreadable, listing is empty")
                        .with_field("path", &self.working_dir)
                        .with_field("error", err),
                );
                return 0;
            }
        };

        let mut count = 0;
        for name in stream.entries() {
            if !self.filter.is_executable(&name) {
                continue;
            }
            let flow = visit(count, &name);
            count += 1;
            if flow.is_break() {
                break;
            }
        }
        count
    }

    /// Counts the launchable entries
    pub fn count<S: StorageDevice>(&self, storage: &mut S, log: &mut dyn LogSink) -> usize {
        self.scan(storage, log, |_, _| ControlFlow::Continue(()))
    }

    /// Returns the launchable filename at `index`
    pub fn entry_at<S: StorageDevice>(
        &self,
        storage: &mut S,
        log: &mut dyn LogSink,
        index: usize,
    ) -> Option<String> {
        let mut found = None;
        self.scan(storage, log, |i, name| {
            if i == index {
                found = Some(name.to_string());
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        found
    }

    /// Returns every launchable filename in directory order
    pub fn launchable_entries<S: StorageDevice>(
        &self,
        storage: &mut S,
        log: &mut dyn LogSink,
    ) -> Vec<String> {
        let mut names = Vec::new();
        self.scan(storage, log, |_, name| {
            names.push(name.to_string());
            ControlFlow::Continue(())
        });
        names
    }

    /// Indices of the entries visible when the window starts at `top`
    pub fn visible_range(&self, top: usize, total: usize) -> Range<usize> {
        let end = top.saturating_add(self.page_size).min(total);
        top.min(end)..end
    }

    /// Redraws the listing and returns the number of launchable entries
    ///
    /// Only entries inside the window starting at `selection.top` are drawn;
    /// the selected one is highlighted.
    pub fn refresh<S, D>(
        &self,
        storage: &mut S,
        display: &mut D,
        log: &mut dyn LogSink,
        selection: Selection,
    ) -> usize
    where
        S: StorageDevice,
        D: TextDisplay + ?Sized,
    {
        display.move_to(0, 0);
        display.clear();

        let window = selection.top..selection.top.saturating_add(self.page_size);
        self.scan(storage, log, |index, name| {
            if window.contains(&index) {
                let label = display_name(name, self.name_width, self.truncation_marker);
                render::draw_row(
                    &mut *display,
                    index - selection.top,
                    &label,
                    index == selection.selected,
                );
            }
            ControlFlow::Continue(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use services_logger::{LogLevel, MemoryLog};
    use sim_hal::{Medium, MemoryStorage, RecordingDisplay, StorageFault};

    fn programs(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("prog{:02}.elf", i)).collect()
    }

    fn mixed_storage(count: usize) -> MemoryStorage {
        let mut names = Vec::new();
        for (i, name) in programs(count).into_iter().enumerate() {
            if i % 3 == 0 {
                names.push(format!("doc{:02}.txt", i));
            }
            names.push(name);
        }
        MemoryStorage::with_medium(Medium::with_root(names))
    }

    #[test]
    fn test_count_applies_filter() {
        let page = DirectoryPage::new("/", ExecutableFilter::default(), 8);
        let mut storage = mixed_storage(20);
        let mut log = MemoryLog::new();

        assert_eq!(page.count(&mut storage, &mut log), 20);
        assert_eq!(storage.open_handles(), 0);
    }

    #[test]
    fn test_refresh_draws_first_page() {
        let page = DirectoryPage::new("/", ExecutableFilter::default(), 8);
        let mut storage = mixed_storage(20);
        let mut display = RecordingDisplay::new();
        let mut log = MemoryLog::new();

        let total = page.refresh(&mut storage, &mut display, &mut log, Selection::new(0, 0));

        assert_eq!(total, 20);
        let expected: Vec<String> = (0..8).map(|i| format!("prog{:02}", i)).collect();
        assert_eq!(display.screen(), expected);
        assert_eq!(display.highlighted_rows(), vec![0]);
        assert_eq!(page.visible_range(0, total), 0..8);
    }

    #[test]
    fn test_refresh_after_scrolling() {
        let page = DirectoryPage::new("/", ExecutableFilter::default(), 8);
        let mut storage = mixed_storage(20);
        let mut display = RecordingDisplay::new();
        let mut log = MemoryLog::new();

        let selection = Selection::new(15, 0).reclamp(20, page.page_size());
        assert_eq!(selection.top, 8);

        page.refresh(&mut storage, &mut display, &mut log, selection);

        let expected: Vec<String> = (8..16).map(|i| format!("prog{:02}", i)).collect();
        assert_eq!(display.screen(), expected);
        assert_eq!(display.highlighted_rows(), vec![7]);
        assert_eq!(page.visible_range(selection.top, 20), 8..16);
    }

    #[test]
    fn test_refresh_last_partial_page() {
        let page = DirectoryPage::new("/", ExecutableFilter::default(), 8);
        let mut storage = mixed_storage(10);
        let mut display = RecordingDisplay::new();
        let mut log = MemoryLog::new();

        page.refresh(&mut storage, &mut display, &mut log, Selection::new(9, 8));

        assert_eq!(display.screen(), vec!["prog08", "prog09"]);
        assert_eq!(display.highlighted_rows(), vec![1]);
        assert_eq!(page.visible_range(8, 10), 8..10);
    }

    #[test]
    fn test_refresh_enumeration_failure_is_empty() {
        let page = DirectoryPage::new("/", ExecutableFilter::default(), 8);
        let mut storage = mixed_storage(5);
        storage.set_fault(StorageFault::OpenDir);
        let mut display = RecordingDisplay::new();
        let mut log = MemoryLog::new();

        let total = page.refresh(&mut storage, &mut display, &mut log, Selection::new(3, 0));

        assert_eq!(total, 0);
        assert!(display.screen().is_empty());
        assert!(log.contains(LogLevel::Warn, "directory unreadable, listing is empty"));
        assert_eq!(Selection::new(3, 0).reclamp(total, 8), Selection::new(3, 0));
    }

    #[test]
    fn test_refresh_missing_medium_is_empty() {
        let page = DirectoryPage::new("/", ExecutableFilter::default(), 8);
        let mut storage = MemoryStorage::empty();
        let mut display = RecordingDisplay::new();
        let mut log = MemoryLog::new();

        assert_eq!(page.refresh(&mut storage, &mut display, &mut log, Selection::default()), 0);
    }

    #[test]
    fn test_refresh_truncates_labels_only() {
        let page = DirectoryPage::new("/", ExecutableFilter::default(), 4);
        let mut storage = MemoryStorage::with_medium(Medium::with_root([
            "an_extremely_long_name.elf",
        ]));
        let mut display = RecordingDisplay::new();
        let mut log = MemoryLog::new();

        page.refresh(&mut storage, &mut display, &mut log, Selection::default());

        assert_eq!(display.row_text(0), "an_extremely_l.");
        assert_eq!(
            page.entry_at(&mut storage, &mut log, 0),
            Some("an_extremely_long_name.elf".to_string())
        );
    }

    #[test]
    fn test_entry_at_stops_early_and_closes() {
        let page = DirectoryPage::new("/", ExecutableFilter::default(), 8);
        let mut storage = mixed_storage(20);
        let mut log = MemoryLog::new();

        assert_eq!(
            page.entry_at(&mut storage, &mut log, 3),
            Some("prog03.elf".to_string())
        );
        assert_eq!(page.entry_at(&mut storage, &mut log, 20), None);
        assert_eq!(storage.open_handles(), 0);
    }

    #[test]
    fn test_launchable_entries_in_directory_order() {
        let page = DirectoryPage::new("/", ExecutableFilter::default(), 8);
        let mut storage = MemoryStorage::with_medium(Medium::with_root([
            "zeta.bin", "a.txt", "alpha.ELF",
        ]));
        let mut log = MemoryLog::new();

        assert_eq!(
            page.launchable_entries(&mut storage, &mut log),
            vec!["zeta.bin", "alpha.ELF"]
        );
    }

    #[test]
    fn test_listing_follows_media_swap() {
        let page = DirectoryPage::new("/", ExecutableFilter::default(), 8);
        let mut storage = mixed_storage(20);
        let mut log = MemoryLog::new();
        assert_eq!(page.count(&mut storage, &mut log), 20);

        storage.insert(Medium::with_root(["only.bin"]));
        assert_eq!(page.count(&mut storage, &mut log), 1);
    }

    #[test]
    fn test_from_settings() {
        let settings = CommanderSettings {
            working_dir: "/apps/".to_string(),
            font_height: 16,
            name_width: 6,
            truncation_marker: '~',
            ..Default::default()
        };
        let page = DirectoryPage::from_settings(&settings);

        assert_eq!(page.working_dir(), "/apps/");
        assert_eq!(page.page_size(), 8);
        assert_eq!(page.filter().primary_suffix(), ".elf");

        let medium = Medium::new().with_dir("/apps", ["calculator.bin"]);
        let mut storage = MemoryStorage::with_medium(medium);
        let mut display = RecordingDisplay::new();
        let mut log = MemoryLog::new();
        page.refresh(&mut storage, &mut display, &mut log, Selection::default());
        assert_eq!(display.row_text(0), "calcul~");
    }

    #[test]
    fn test_visible_range_bounds() {
        let page = DirectoryPage::new("/", ExecutableFilter::default(), 8);
        assert_eq!(page.visible_range(0, 0), 0..0);
        assert_eq!(page.visible_range(12, 10), 10..10);
        assert_eq!(page.visible_range(2, 5), 2..5);
    }
}
