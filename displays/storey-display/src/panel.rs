//! Elevator status panel layout

use storey_core::feedback::SplashFrame;
use storey_core::status::StatusRecord;
use storey_core::traits::{DisplayError, StatusSink};

use crate::backend::DisplayBackend;
use crate::screen::{Screen, SCREEN_ROWS};

/// Title shown while the splash animation runs
pub const SPLASH_TITLE: &str = "Elevator Controller";
/// Prompt under the title
pub const SPLASH_PROMPT: &str = "Press a button or 's' to start";

/// Where the panel's lines go on the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelLayout {
    /// Column of every line (0-based)
    pub col: u8,
    /// Row of the first line (0-based)
    pub first_row: u8,
    /// Rows between consecutive lines
    pub row_stride: u8,
}

impl Default for PanelLayout {
    /// Terminal rows 10, 12, 14, 16 at column 10 (1-based)
    fn default() -> Self {
        Self {
            col: 9,
            first_row: 9,
            row_stride: 2,
        }
    }
}

impl PanelLayout {
    fn row(&self, line: usize) -> u8 {
        self.first_row + self.row_stride * line as u8
    }
}

/// Four-line status panel
///
/// ```text
/// Current Level: 1
/// Direction: Up
/// Floors with traveller: 3
/// Floors without traveller: 5
/// ```
pub struct StatusPanel<B> {
    backend: B,
    layout: PanelLayout,
    screen: Screen,
    title_shown: bool,
}

impl<B: DisplayBackend> StatusPanel<B> {
    pub fn new(backend: B, layout: PanelLayout) -> Self {
        Self {
            backend,
            layout,
            screen: Screen::new(),
            title_shown: false,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Clear the display and draw the splash title
    pub fn show_title(&mut self) -> Result<(), DisplayError> {
        self.backend.clear()?;
        self.backend
            .draw_line(self.layout.row(0), self.layout.col, SPLASH_TITLE)?;
        self.backend
            .draw_line(self.layout.row(1), self.layout.col, SPLASH_PROMPT)?;
        self.backend.flush()
    }

    /// Format `record` into the screen buffer
    pub fn update(&mut self, record: &StatusRecord) {
        self.screen.write_line(
            0,
            format_args!("Current Level: {}", record.displayed_floor.index()),
        );
        self.screen
            .write_line(1, format_args!("Direction: {}", record.direction.label()));
        self.screen.write_line(
            2,
            format_args!("Floors with traveller: {}", record.onboard_count),
        );
        self.screen.write_line(
            3,
            format_args!("Floors without traveller: {}", record.empty_count),
        );
    }

    /// Draw the lines that changed since the last render
    ///
    /// A line stays dirty until its draw succeeds, so a failed write is
    /// retried on the next render.
    pub fn render(&mut self) -> Result<(), DisplayError> {
        if !self.screen.is_dirty() {
            return Ok(());
        }
        let layout = self.layout;
        for line in 0..SCREEN_ROWS {
            if !self.screen.is_row_dirty(line) {
                continue;
            }
            if let Some(text) = self.screen.get_line(line) {
                self.backend.draw_line(layout.row(line), layout.col, text)?;
            }
            self.screen.mark_clean(line);
        }
        self.backend.flush()
    }
}

impl<B: DisplayBackend> StatusSink for StatusPanel<B> {
    fn show_status(&mut self, record: &StatusRecord) -> Result<(), DisplayError> {
        self.update(record);
        self.render()
    }

    fn show_splash(&mut self, _frame: SplashFrame) -> Result<(), DisplayError> {
        // The title is static
        if !self.title_shown {
            self.show_title()?;
            self.title_shown = true;
        }
        Ok(())
    }

    fn begin_run(&mut self) -> Result<(), DisplayError> {
        self.title_shown = false;
        self.screen.clear();
        self.screen.mark_all_dirty();
        self.backend.clear()?;
        self.backend.flush()
    }
}
