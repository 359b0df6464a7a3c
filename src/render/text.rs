use super::column::{Alignment, Column};

pub struct Text {
    header: String,
    values: Vec<String>,
    alignment: Alignment,
}

impl Text {
    pub fn new(header: &str, values: Vec<String>) -> Self {
        Self {
            header: header.into(),
            values,
            alignment: Alignment::Left,
        }
    }

    pub fn right_aligned(mut self) -> Self {
        self.alignment = Alignment::Right;
        self
    }
}

impl Column for Text {
    fn header(&self) -> &str {
        &self.header
    }

    fn rows(&self) -> usize {
        self.values.len()
    }

    fn value(&self, row: usize) -> &str {
        &self.values[row]
    }

    fn alignment(&self) -> Alignment {
        self.alignment
    }
}

impl From<Text> for Box<dyn Column> {
    fn from(t: Text) -> Self {
        Box::new(t)
    }
}
