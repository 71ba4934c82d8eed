//! # ContentView Component
//!
//! The content region. Renders whatever the core says is current:
//!
//! - a cached page fragment (markup converted to styled text),
//! - the error panel when a single-page load failed,
//! - search result cards, one per matching page, in store order,
//! - the distinct no-results placeholder.
//!
//! Scrolling state lives here (presentation, not core state). For result
//! lists the component also tracks which card is selected; activation is
//! handled by the run loop.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::search::SearchHit;
use crate::core::state::{App, View};
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;
use crate::tui::html;

/// Scroll offset and result selection, persistent across frames.
#[derive(Default)]
pub struct ContentViewState {
    pub scroll: ScrollViewState,
    pub selected: usize,
}

impl ContentViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget scroll position and selection (the view changed).
    pub fn reset(&mut self) {
        self.scroll = ScrollViewState::default();
        self.selected = 0;
    }

    pub fn select_next(&mut self, total: usize) {
        if total > 0 && self.selected + 1 < total {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Route a scroll event to the scroll view.
    pub fn handle_scroll(&mut self, event: &TuiEvent) {
        match event {
            TuiEvent::ScrollUp => self.scroll.scroll_up(),
            TuiEvent::ScrollDown => self.scroll.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll.scroll_page_down(),
            _ => {}
        }
    }
}

pub struct ContentView<'a> {
    pub app: &'a App,
    pub state: &'a mut ContentViewState,
}

impl Component for ContentView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let app = self.app;
        match &app.view {
            View::Page(key) => match app.store.get(key) {
                Some(fragment) => {
                    let text = html::render(&fragment.markup, Color::White);
                    self.render_scrolled_text(frame, area, text);
                }
                // The router only renders cached keys; an absent one means
                // the cache and the view disagree, which reads as a failure.
                None => render_error_panel(frame, area),
            },
            View::LoadFailed => render_error_panel(frame, area),
            View::SearchResults { query, hits } => {
                if hits.is_empty() {
                    render_no_results(frame, area, query);
                } else {
                    self.render_result_cards(frame, area, hits);
                }
            }
        }
    }
}

impl ContentView<'_> {
    fn render_scrolled_text(&mut self, frame: &mut Frame, area: Rect, text: Text<'static>) {
        let content_width = area.width.saturating_sub(1);
        if content_width == 0 {
            return;
        }

        let paragraph = Paragraph::new(text).wrap(Wrap { trim: false });
        let height = (paragraph.line_count(content_width) as u16).max(1);

        let mut scroll_view = ScrollView::new(Size::new(content_width, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, height));

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll);
    }

    fn render_result_cards(&mut self, frame: &mut Frame, area: Rect, hits: &[SearchHit]) {
        let content_width = area.width.saturating_sub(1);
        if content_width == 0 {
            return;
        }
        self.state.selected = self.state.selected.min(hits.len() - 1);

        // Build one card per hit and stack them in a scroll view.
        let cards: Vec<(Paragraph<'static>, u16)> = hits
            .iter()
            .enumerate()
            .map(|(i, hit)| {
                let card = result_card(hit, i == self.state.selected);
                let inner_width = content_width.saturating_sub(2);
                let height = card.line_count(inner_width) as u16;
                (card, height)
            })
            .collect();

        let total_height: u16 = cards.iter().map(|(_, h)| h).sum();
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height.max(1)))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (card, height) in cards {
            scroll_view.render_widget(card, Rect::new(0, y_offset, content_width, height));
            y_offset += height;
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll);
    }
}

/// One search result card: display name, highlighted snippet, open hint.
fn result_card(hit: &SearchHit, selected: bool) -> Paragraph<'static> {
    let snippet_spans: Vec<Span<'static>> = hit
        .snippet
        .iter()
        .map(|span| {
            if span.highlight {
                Span::styled(span.text.clone(), html::mark_style())
            } else {
                Span::raw(span.text.clone())
            }
        })
        .collect();

    let border_style = if selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };

    let lines = vec![
        Line::from(snippet_spans),
        Line::from(Span::styled(
            "Enter opens this page",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
        )),
    ];

    Paragraph::new(lines)
        .block(
            Block::bordered()
                .title(hit.title.clone())
                .border_style(border_style)
                .title_style(border_style.add_modifier(Modifier::BOLD)),
        )
        .wrap(Wrap { trim: false })
}

/// The error panel for a failed single-page load: generic, retry-later.
fn render_error_panel(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "Page failed to load",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from("Please try again later."),
    ];
    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::bordered().border_style(Style::default().fg(Color::Red)));
    frame.render_widget(panel, area);
}

/// The distinct placeholder for a search with zero matches.
fn render_no_results(frame: &mut Frame, area: Rect, query: &str) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            format!("No matching results for \"{query}\""),
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];
    let placeholder = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::bordered().border_style(Style::default().add_modifier(Modifier::DIM)));
    frame.render_widget(placeholder, area);
}
