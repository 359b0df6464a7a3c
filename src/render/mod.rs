pub mod column;
pub mod screen;
pub mod section;
pub mod table;
pub mod text;

pub use column::Column;
pub use screen::ScreenBuilder;
pub use section::Section;
pub use table::TableBuilder;
pub use text::Text;

/// Visible width of `text` in characters.
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// First `max` characters of `text`.
pub fn truncate(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

pub fn pad_right(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(text));
    format!("{}{}", text, " ".repeat(padding))
}

pub fn pad_left(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(text));
    format!("{}{}", " ".repeat(padding), text)
}

pub fn center(text: &str, width: usize) -> String {
    let total = width.saturating_sub(display_width(text));
    let left = total / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(total - left))
}
