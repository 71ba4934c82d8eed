//! # NavBar Component
//!
//! Single-line navigation bar listing every page by display name, with the
//! active page visually distinguished. Stateless: entries and the active key
//! arrive as props each frame.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::content::NavEntry;
use crate::tui::component::Component;

pub struct NavBar<'a> {
    pub entries: &'a [NavEntry],
    pub active: &'a str,
}

impl Component for NavBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans: Vec<Span<'static>> = Vec::new();
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            let style = if entry.key == self.active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default()
            };
            spans.push(Span::styled(format!(" {} ", entry.name), style));
        }
        frame.render_widget(Line::from(spans), area);
    }
}

/// Map a column inside the nav bar back to the entry rendered there.
/// Mirrors the span layout above: ` name ` segments joined by `│`.
pub fn hit_entry(entries: &[NavEntry], col: u16) -> Option<&str> {
    let mut cursor: u16 = 0;
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            cursor = cursor.saturating_add(1); // separator
        }
        let width = entry.name.width() as u16 + 2;
        if col >= cursor && col < cursor.saturating_add(width) {
            return Some(&entry.key);
        }
        cursor = cursor.saturating_add(width);
    }
    None
}
