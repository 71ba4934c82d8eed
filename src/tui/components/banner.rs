//! # Banner Component
//!
//! Rotating carousel over a fixed slide set, independent of every other
//! component. One owned deadline is the auto-advance timer: every manual
//! interaction (arrow keys, dot jump, completed swipe) replaces it, so a
//! manual override always restarts the full interval and timers never
//! accumulate.
//!
//! Swipes are horizontal mouse drags on the slide area: press, move, release.
//! A drag shorter than the threshold is a no-op.

use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::Component;

/// Interval between automatic slide advances.
pub const AUTO_ADVANCE_INTERVAL: Duration = Duration::from_secs(5);
/// Minimum horizontal drag, in columns, that counts as a swipe.
pub const SWIPE_THRESHOLD_COLS: u16 = 8;
/// Rows the banner occupies in the shell layout.
pub const BANNER_HEIGHT: u16 = 5;

pub struct Banner {
    slides: Vec<String>,
    current: usize,
    deadline: Instant,
    /// Origin column of an in-progress drag; auto-advance pauses while set.
    drag_origin: Option<u16>,
}

impl Banner {
    pub fn new(slides: Vec<String>) -> Self {
        Self {
            slides,
            current: 0,
            deadline: Instant::now() + AUTO_ADVANCE_INTERVAL,
            drag_origin: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Step forward one slide, wrapping at the end.
    pub fn next_slide(&mut self) {
        if self.slides.is_empty() {
            return;
        }
        self.current = (self.current + 1) % self.slides.len();
    }

    /// Step back one slide, wrapping at the start.
    pub fn prev_slide(&mut self) {
        if self.slides.is_empty() {
            return;
        }
        self.current = (self.current + self.slides.len() - 1) % self.slides.len();
    }

    /// Manual forward: step and restart the auto-advance timer.
    pub fn manual_next(&mut self) {
        self.next_slide();
        self.restart_timer();
    }

    /// Manual back: step and restart the auto-advance timer.
    pub fn manual_prev(&mut self) {
        self.prev_slide();
        self.restart_timer();
    }

    /// Jump straight to a slide (indicator dot), restarting the timer.
    pub fn jump_to(&mut self, index: usize) {
        if self.slides.is_empty() || index >= self.slides.len() {
            return;
        }
        self.current = index;
        self.restart_timer();
    }

    /// Advance automatically when the interval has elapsed. Returns true
    /// when the slide changed. Paused while a drag is in progress.
    pub fn tick(&mut self) -> bool {
        if self.slides.is_empty() || self.drag_origin.is_some() {
            return false;
        }
        if Instant::now() < self.deadline {
            return false;
        }
        self.next_slide();
        self.restart_timer();
        true
    }

    /// A press on the slide area starts a potential swipe and pauses
    /// auto-advance.
    pub fn drag_start(&mut self, col: u16) {
        if self.slides.is_empty() {
            return;
        }
        self.drag_origin = Some(col);
    }

    /// The release ends the swipe: past the threshold, a rightward drag goes
    /// back and a leftward one forward; anything shorter is a no-op. The
    /// auto-advance timer restarts either way.
    pub fn drag_end(&mut self, col: u16) -> bool {
        let Some(origin) = self.drag_origin.take() else {
            return false;
        };
        let moved = if col >= origin {
            let delta = col - origin;
            if delta > SWIPE_THRESHOLD_COLS {
                self.prev_slide();
                true
            } else {
                false
            }
        } else {
            let delta = origin - col;
            if delta > SWIPE_THRESHOLD_COLS {
                self.next_slide();
                true
            } else {
                false
            }
        };
        self.restart_timer();
        moved
    }

    fn restart_timer(&mut self) {
        self.deadline = Instant::now() + AUTO_ADVANCE_INTERVAL;
    }

    fn dots(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for i in 0..self.slides.len() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            if i == self.current {
                spans.push(Span::styled("●", Style::default().fg(Color::Cyan)));
            } else {
                spans.push(Span::styled("○", Style::default().fg(Color::DarkGray)));
            }
        }
        Line::from(spans)
    }
}

impl Component for Banner {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.slides.is_empty() {
            return;
        }

        let caption = self.slides[self.current].clone();
        let hint = Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM);
        let lines = vec![
            Line::default(),
            Line::from(vec![
                Span::styled("◀  ", hint),
                Span::styled(caption, Style::default().add_modifier(Modifier::BOLD)),
                Span::styled("  ▶", hint),
            ]),
            self.dots(),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().border_style(Style::default().fg(Color::DarkGray)));
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn banner() -> Banner {
        Banner::new(vec!["one".to_string(), "two".to_string(), "three".to_string()])
    }

    #[test]
    fn next_wraps_forward() {
        let mut banner = banner();
        banner.next_slide();
        banner.next_slide();
        assert_eq!(banner.current(), 2);
        banner.next_slide();
        assert_eq!(banner.current(), 0);
    }

    #[test]
    fn prev_wraps_backward() {
        let mut banner = banner();
        banner.prev_slide();
        assert_eq!(banner.current(), 2);
    }

    #[test]
    fn a_full_cycle_of_next_returns_to_start() {
        let mut banner = banner();
        for _ in 0..3 {
            banner.next_slide();
        }
        assert_eq!(banner.current(), 0);
    }

    #[test]
    fn tick_advances_only_after_the_interval() {
        let mut banner = banner();
        assert!(!banner.tick());
        assert_eq!(banner.current(), 0);

        banner.deadline = Instant::now() - Duration::from_millis(1);
        assert!(banner.tick());
        assert_eq!(banner.current(), 1);
        // The timer restarted, so the next tick is quiet again.
        assert!(!banner.tick());
    }

    #[test]
    fn manual_action_restarts_the_timer() {
        let mut banner = banner();
        banner.deadline = Instant::now() - Duration::from_millis(1);
        banner.manual_next();
        assert_eq!(banner.current(), 1);
        // Without the restart this tick would auto-advance.
        assert!(!banner.tick());
    }

    #[test]
    fn jump_to_selects_a_dot() {
        let mut banner = banner();
        banner.jump_to(2);
        assert_eq!(banner.current(), 2);
        banner.jump_to(9);
        assert_eq!(banner.current(), 2);
    }

    #[test]
    fn swipe_left_advances_and_swipe_right_goes_back() {
        let mut banner = banner();
        banner.drag_start(40);
        assert!(banner.drag_end(20));
        assert_eq!(banner.current(), 1);

        banner.drag_start(20);
        assert!(banner.drag_end(40));
        assert_eq!(banner.current(), 0);
    }

    #[test]
    fn sub_threshold_drags_are_no_ops() {
        let mut banner = banner();
        banner.drag_start(40);
        assert!(!banner.drag_end(40 + SWIPE_THRESHOLD_COLS));
        assert_eq!(banner.current(), 0);

        // Release without a press is ignored too.
        assert!(!banner.drag_end(0));
    }

    #[test]
    fn auto_advance_pauses_during_a_drag() {
        let mut banner = banner();
        banner.drag_start(10);
        banner.deadline = Instant::now() - Duration::from_millis(1);
        assert!(!banner.tick());
        banner.drag_end(11);
        assert_eq!(banner.current(), 0);
    }

    #[test]
    fn empty_banner_is_inert() {
        let mut banner = Banner::new(Vec::new());
        banner.next_slide();
        banner.prev_slide();
        assert!(!banner.tick());
        assert!(banner.is_empty());
        assert_eq!(banner.current(), 0);
    }

    #[test]
    fn renders_caption_and_dots() {
        let backend = TestBackend::new(40, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut banner = banner();

        terminal.draw(|f| banner.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("one"));
        assert!(text.contains('●'));
        assert!(text.contains('○'));
    }
}
