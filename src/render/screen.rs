use super::{center, Section};

pub const SCREEN_WIDTH: usize = 60;

/// Accumulates the text of one console screen.
#[derive(Debug, Default, Clone)]
pub struct ScreenBuilder {
    content: String,
}

impl ScreenBuilder {
    pub fn new() -> Self {
        Self {
            content: String::new(),
        }
    }

    pub fn build(self) -> String {
        self.content
    }

    pub fn nl(&mut self) -> &mut Self {
        self.content.push('\n');
        self
    }

    pub fn line(&mut self, text: &str) -> &mut Self {
        self.content.push_str(text);
        self.content.push('\n');
        self
    }

    pub fn centered(&mut self, text: &str) -> &mut Self {
        let centered = center(text, SCREEN_WIDTH);
        self.line(centered.trim_end())
    }

    pub fn rule(&mut self) -> &mut Self {
        self.line(&"=".repeat(SCREEN_WIDTH))
    }

    pub fn thin_rule(&mut self) -> &mut Self {
        self.line(&"-".repeat(SCREEN_WIDTH))
    }

    /// Title centred between two `=` rules.
    pub fn heading(&mut self, title: &str) -> &mut Self {
        self.nl().rule().centered(title).rule()
    }

    pub fn section(&mut self, section: &Section) -> &mut Self {
        self.content.push_str(&section.render());
        self
    }

    pub fn list<T, F>(&mut self, items: &[T], format_fn: F) -> &mut Self
    where
        F: Fn(&T) -> String,
    {
        for item in items {
            self.content.push_str("   - ");
            self.content.push_str(&format_fn(item));
            self.content.push('\n');
        }
        self
    }
}
