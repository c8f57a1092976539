/// Console formatting module - Pure rendering concerns
///
/// This module handles all console output formatting including:
/// - Table layout and borders
/// - Color terminal output
/// - Text truncation and padding
///
/// It accepts pre-formatted cells from the report module and renders them.
///
/// ## Output Flexibility
///
/// `TableWriter` writes to any `std::io::Write` destination, so the same
/// code renders to stdout and to string buffers in tests.
use std::io::{self, Write};
use std::sync::OnceLock;
use term::color::Color;
use terminal_size::{Width, terminal_size};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Number of columns in the cost table
pub const COLUMNS: usize = 6;

/// Column alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

const ALIGNMENTS: [Align; COLUMNS] = [Align::Left, Align::Right, Align::Left, Align::Right, Align::Right, Align::Right];

const HEADERS: [&str; COLUMNS] = ["Name", "Monthly Qty", "Unit", "Price", "Hourly Cost", "Monthly Cost"];

/// Writer for table output - configurable for color/plain text
pub struct TableWriter<W: Write> {
    writer: W,
    widths: TableWidths,
    use_colors: bool,
}

impl<W: Write> TableWriter<W> {
    /// Create a new table writer
    pub fn new(writer: W, widths: TableWidths, use_colors: bool) -> Self {
        Self { writer, widths, use_colors }
    }

    /// Write formatted text, optionally with color
    fn write_colored(&mut self, text: &str, color: Option<Color>) -> io::Result<()> {
        match color {
            Some(color) if self.use_colors => write!(self.writer, "\x1b[{}m{}\x1b[0m", ansi_code(color), text),
            _ => write!(self.writer, "{}", text),
        }
    }

    fn write_border(&mut self, left: char, middle: char, right: char) -> io::Result<()> {
        let line = self.widths.columns().iter().map(|w| "─".repeat(*w)).collect::<Vec<_>>().join(&middle.to_string());
        writeln!(self.writer, "{}{}{}", left, line, right)
    }

    /// Write table header
    pub fn write_table_header(&mut self) -> io::Result<()> {
        self.write_border('┌', '┬', '┐')?;
        self.write_row(HEADERS, None)?;
        self.write_separator_line()
    }

    /// Write table footer
    pub fn write_table_footer(&mut self) -> io::Result<()> {
        self.write_border('└', '┴', '┘')
    }

    /// Write separator line between table sections
    pub fn write_separator_line(&mut self) -> io::Result<()> {
        self.write_border('├', '┼', '┤')
    }

    /// Write one row; cells are truncated or padded to their column width
    pub fn write_row(&mut self, cells: [&str; COLUMNS], color: Option<Color>) -> io::Result<()> {
        let displays: Vec<String> = cells
            .iter()
            .zip(self.widths.columns())
            .zip(ALIGNMENTS)
            .map(|((cell, width), align)| {
                let inner = width.saturating_sub(2);
                match align {
                    Align::Left => truncate_with_padding(cell, inner),
                    Align::Right => truncate_with_left_padding(cell, inner),
                }
            })
            .collect();

        let row = format!("│ {} │", displays.join(" │ "));
        self.write_colored(&row, color)?;
        writeln!(self.writer)
    }

    /// Hand back the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// ANSI foreground code for a terminal color
fn ansi_code(color: Color) -> u32 {
    if color < 8 { 30 + color } else { 90 + (color - 8) }
}

//
// Table Layout and Widths
//

/// Column widths for the 6-column cost table (borders excluded)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableWidths {
    pub name: usize,
    pub quantity: usize,
    pub unit: usize,
    pub price: usize,
    pub hourly: usize,
    pub monthly: usize,
    pub total: usize, // Total table width including borders
}

impl TableWidths {
    pub fn new(terminal_width: usize) -> Self {
        // Borders: │ = 7 characters (1 before each column + 1 at end)
        let borders = COLUMNS + 1;
        let available = terminal_width.saturating_sub(borders);

        // Fixed widths for the numeric columns, "1,234,567.8901" fits in 16
        let quantity = 16;
        let unit = 18;
        let price = 12;
        let hourly = 14;
        let monthly = 15;

        // Name gets remaining space (for long resource addresses)
        let fixed_total = quantity + unit + price + hourly + monthly;
        let name = if available > fixed_total + 30 {
            available - fixed_total
        } else {
            30 // Minimum fallback
        };

        TableWidths { name, quantity, unit, price, hourly, monthly, total: name + fixed_total + borders }
    }

    pub fn columns(&self) -> [usize; COLUMNS] {
        [self.name, self.quantity, self.unit, self.price, self.hourly, self.monthly]
    }
}

// Width override from --console-width
static CONSOLE_WIDTH: OnceLock<usize> = OnceLock::new();

/// Override the detected terminal width
pub fn set_console_width(width: usize) {
    let _ = CONSOLE_WIDTH.set(width); // Ignore error if already set
}

/// Get the console width override, terminal width, or default to 120
fn get_terminal_width() -> usize {
    if let Some(width) = CONSOLE_WIDTH.get() {
        return *width;
    }
    if let Some((Width(w), _)) = terminal_size() { w as usize } else { 120 }
}

/// Get table widths for the current console
pub fn get_widths() -> TableWidths {
    TableWidths::new(get_terminal_width())
}

//
// Text Formatting Utilities
//

/// Count the display width of a string, accounting for wide Unicode characters
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Cut a string to at most `width` display columns, ending in "..." when cut
fn truncate(s: &str, width: usize) -> (String, usize) {
    let display_w = display_width(s);
    if display_w <= width {
        return (s.to_string(), display_w);
    }

    let mut result = String::new();
    let mut current_width = 0;

    // Reserve space for "..."
    let target_width = if width >= 3 { width - 3 } else { width };

    for c in s.chars() {
        let c_width = UnicodeWidthChar::width(c).unwrap_or(1);
        if current_width + c_width > target_width {
            break;
        }
        result.push(c);
        current_width += c_width;
    }

    if width >= 3 {
        result.push_str("...");
        current_width += 3;
    }

    (result, current_width)
}

/// Truncate and pad string on the right to exact width
pub fn truncate_with_padding(s: &str, width: usize) -> String {
    let (mut result, current_width) = truncate(s, width);
    if current_width < width {
        result.push_str(&" ".repeat(width - current_width));
    }
    result
}

/// Truncate and pad string on the left to exact width (right-aligned)
pub fn truncate_with_left_padding(s: &str, width: usize) -> String {
    let (result, current_width) = truncate(s, width);
    if current_width < width { format!("{}{}", " ".repeat(width - current_width), result) } else { result }
}

#[cfg(test)]
#[path = "console_format_test.rs"]
mod console_format_test;
