use super::{display_width, pad_left, pad_right};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// A console table column. Widths count displayed characters.
pub trait Column {
    fn header(&self) -> &str;
    fn rows(&self) -> usize;
    fn value(&self, row: usize) -> &str;

    fn alignment(&self) -> Alignment {
        Alignment::Left
    }

    /// Widest of the header and every value.
    fn width(&self) -> usize {
        (0..self.rows())
            .map(|row| display_width(self.value(row)))
            .fold(display_width(self.header()), usize::max)
    }

    fn format_header(&self, width: usize) -> String {
        pad_right(self.header(), width)
    }

    fn format_cell(&self, row: usize, width: usize) -> String {
        match self.alignment() {
            Alignment::Left => pad_right(self.value(row), width),
            Alignment::Right => pad_left(self.value(row), width),
        }
    }
}
