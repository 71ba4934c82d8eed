//! # SearchBox Component
//!
//! Single-line query input. Holds its own buffer (the query stays visible
//! after a submit, like the original form) and emits [`SearchEvent::Submit`]
//! on Enter. Editing is append/backspace only; queries are short.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Default)]
pub struct SearchBox {
    pub buffer: String,
    /// Focused = search mode; the cursor is placed in the box.
    pub focused: bool,
}

pub enum SearchEvent {
    Submit(String),
}

impl SearchBox {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                None
            }
            TuiEvent::Backspace => {
                self.buffer.pop();
                None
            }
            TuiEvent::Submit => Some(SearchEvent::Submit(self.buffer.clone())),
            _ => None,
        }
    }
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        let input = Paragraph::new(self.buffer.as_str()).block(
            Block::bordered()
                .title("Search")
                .border_style(border_style)
                .title_style(border_style),
        );
        frame.render_widget(input, area);

        if self.focused {
            let x = area.x + 1 + self.buffer.width() as u16;
            frame.set_cursor_position(Position {
                x: x.min(area.x + area.width.saturating_sub(2)),
                y: area.y + 1,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn typing_and_backspace_edit_the_buffer() {
        let mut search = SearchBox::new();
        search.handle_event(&TuiEvent::InputChar('a'));
        search.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(search.buffer, "ab");

        search.handle_event(&TuiEvent::Backspace);
        assert_eq!(search.buffer, "a");
    }

    #[test]
    fn submit_emits_the_buffer_and_keeps_it() {
        let mut search = SearchBox::new();
        search.handle_event(&TuiEvent::InputChar('x'));

        let event = search.handle_event(&TuiEvent::Submit);
        assert!(matches!(event, Some(SearchEvent::Submit(q)) if q == "x"));
        assert_eq!(search.buffer, "x");
    }

    #[test]
    fn renders_with_title() {
        let backend = TestBackend::new(30, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut search = SearchBox::new();
        search.buffer = "hello".to_string();

        terminal.draw(|f| search.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Search"));
        assert!(text.contains("hello"));
    }
}
