//! Rendering logic for the listing
//!
//! Turns filenames into display rows. Truncation only ever touches the label;
//! the filename used for launching is never modified.

use hal::{Color, TextDisplay};

use crate::executable::SUFFIX_LEN;

/// Colors of a normal row
pub const NORMAL: (Color, Color) = (Color::WHITE, Color::BLACK);

/// Colors of the selected row
pub const HIGHLIGHT: (Color, Color) = (Color::BLACK, Color::WHITE);

/// Builds the label shown for a launchable filename
///
/// The suffix is stripped. Stems longer than `width` characters keep their
/// first `width` characters followed by `marker`. Names no longer than the
/// suffix yield an empty label.
pub fn display_name(filename: &str, width: usize, marker: char) -> String {
    let char_count = filename.chars().count();
    let stem_len = char_count.saturating_sub(SUFFIX_LEN);

    if stem_len > width {
        let mut label: String = filename.chars().take(width).collect();
        label.push(marker);
        label
    } else {
        filename.chars().take(stem_len).collect()
    }
}

/// Draws one listing row, inverting colors if `highlighted`
pub fn draw_row<D: TextDisplay + ?Sized>(display: &mut D, row: usize, label: &str, highlighted: bool) {
    if highlighted {
        display.set_foreground(HIGHLIGHT.0);
        display.set_background(HIGHLIGHT.1);
    }
    display.move_to(row, 0);
    display.write_str(label);
    if highlighted {
        display.set_background(NORMAL.1);
        display.set_foreground(NORMAL.0);
    }
}
