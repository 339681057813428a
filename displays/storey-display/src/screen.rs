//! Screen buffer types
//!
//! Provides a character-based screen buffer for text-mode displays.

use core::fmt::{self, Write};

use heapless::String;

/// Number of lines in the status panel
pub const SCREEN_ROWS: usize = 4;

/// Maximum characters per line
pub const SCREEN_COLS: usize = 40;

/// Line buffer with per-row change tracking
///
/// Setting a line to the text it already holds does not mark it dirty,
/// so unchanged rows are never redrawn.
#[derive(Clone)]
pub struct Screen {
    lines: [String<SCREEN_COLS>; SCREEN_ROWS],
    /// Bit `n` set when row `n` needs redrawing
    dirty: u8,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create a new empty screen
    pub fn new() -> Self {
        Self {
            lines: core::array::from_fn(|_| String::new()),
            dirty: 0,
        }
    }

    /// Clear the entire screen
    pub fn clear(&mut self) {
        for line in &mut self.lines {
            line.clear();
        }
        self.dirty = 0;
    }

    /// Set the content of a row, truncating at `SCREEN_COLS`
    pub fn set_line(&mut self, row: usize, text: &str) {
        let mut buf: String<SCREEN_COLS> = String::new();
        for c in text.chars() {
            if buf.push(c).is_err() {
                break;
            }
        }
        self.store(row, buf);
    }

    /// Format into a row, truncating at `SCREEN_COLS`
    pub fn write_line(&mut self, row: usize, args: fmt::Arguments<'_>) {
        let mut buf = Truncating(String::new());
        let _ = buf.write_fmt(args);
        self.store(row, buf.0);
    }

    fn store(&mut self, row: usize, text: String<SCREEN_COLS>) {
        if let Some(line) = self.lines.get_mut(row) {
            if *line != text {
                *line = text;
                self.dirty |= 1 << row;
            }
        }
    }

    /// Get the content of a specific row
    pub fn get_line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|s| s.as_str())
    }

    /// Check if any row needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty != 0
    }

    /// Mark every row for redraw
    pub fn mark_all_dirty(&mut self) {
        self.dirty = (1 << SCREEN_ROWS) - 1;
    }

    /// Check if a specific row needs redrawing
    pub fn is_row_dirty(&self, row: usize) -> bool {
        row < SCREEN_ROWS && self.dirty & (1 << row) != 0
    }

    /// Record that a row has been drawn
    pub fn mark_clean(&mut self, row: usize) {
        if row < SCREEN_ROWS {
            self.dirty &= !(1 << row);
        }
    }

    /// Rows needing a redraw, top to bottom
    pub fn dirty_rows(&self) -> impl Iterator<Item = usize> + '_ {
        (0..SCREEN_ROWS).filter(move |&row| self.is_row_dirty(row))
    }

    /// Get all lines as an iterator
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|s| s.as_str())
    }
}

/// `fmt::Write` adapter that drops characters past capacity
struct Truncating(String<SCREEN_COLS>);

impl Write for Truncating {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", line.as_str());
        }
        defmt::write!(f, "]");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_line_marks_dirty() {
        let mut screen = Screen::new();
        assert!(!screen.is_dirty());
        screen.set_line(1, "Direction: Up");
        assert!(screen.is_dirty());
        assert_eq!(screen.get_line(1), Some("Direction: Up"));

        let rows: heapless::Vec<usize, 4> = screen.dirty_rows().collect();
        assert_eq!(&rows[..], &[1]);
        screen.mark_clean(1);
        assert!(!screen.is_dirty());
    }

    #[test]
    fn test_unchanged_line_stays_clean() {
        let mut screen = Screen::new();
        screen.set_line(0, "Current Level: 2");
        screen.mark_clean(0);
        screen.write_line(0, format_args!("Current Level: {}", 2));
        assert!(!screen.is_dirty());
    }

    #[test]
    fn test_truncates() {
        let mut screen = Screen::new();
        screen.write_line(2, format_args!("{:>50}", "x"));
        assert_eq!(screen.get_line(2).map(str::len), Some(SCREEN_COLS));
    }

    #[test]
    fn test_out_of_range_row_ignored() {
        let mut screen = Screen::new();
        screen.set_line(SCREEN_ROWS, "nope");
        assert!(!screen.is_dirty());
    }

    #[test]
    fn test_mark_all_dirty() {
        let mut screen = Screen::new();
        screen.mark_all_dirty();
        assert_eq!(screen.dirty_rows().count(), SCREEN_ROWS);
        screen.mark_clean(2);
        assert!(!screen.is_row_dirty(2));
        assert!(screen.is_row_dirty(3));
        screen.clear();
        assert_eq!(screen.lines().filter(|l| !l.is_empty()).count(), 0);
    }
}
