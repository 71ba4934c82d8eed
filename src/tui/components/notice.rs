//! # Notice Component
//!
//! Transient toast feedback, decoupled from everything else. At most one
//! notice exists at a time: showing a new one replaces the current one, so
//! expiry timers can never stack.
//!
//! Placement follows the viewport: wide terminals get a small top-right
//! toast, narrow ones a bottom-centered, wider box with a minimum duration
//! floor (small screens need longer to read). Fading is approximated with
//! the DIM modifier near both ends of the notice's lifetime. Rendering is
//! best-effort: a viewport too small for the box simply shows nothing.

use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Clear, Paragraph};

/// Default on-screen time for a notice.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(1000);
/// Minimum on-screen time applied on narrow viewports.
pub const NARROW_MIN_DURATION: Duration = Duration::from_millis(1200);
/// Viewports narrower than this use the bottom-centered layout.
pub const NARROW_VIEWPORT_COLS: u16 = 60;
/// Window at each end of the lifetime rendered dimmed (the fade).
const FADE: Duration = Duration::from_millis(180);

struct Notice {
    message: String,
    shown_at: Instant,
    duration: Duration,
}

/// Owner of the single transient notice slot.
#[derive(Default)]
pub struct NoticeHost {
    current: Option<Notice>,
}

impl NoticeHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notice, replacing any currently-displayed one.
    pub fn show(&mut self, message: impl Into<String>, duration: Duration) {
        self.current = Some(Notice {
            message: message.into(),
            shown_at: Instant::now(),
            duration,
        });
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    /// Expire the notice when its (viewport-adjusted) duration has elapsed.
    /// Returns true while a notice is on screen or was just removed, so the
    /// caller keeps redrawing through the fade.
    pub fn tick(&mut self, narrow: bool) -> bool {
        let Some(notice) = &self.current else {
            return false;
        };
        let duration = effective_duration(notice.duration, narrow);
        if notice.shown_at.elapsed() >= duration {
            self.current = None;
        }
        true
    }

    /// Render the notice as an overlay on the full frame.
    pub fn render(&mut self, frame: &mut Frame) {
        let Some(notice) = &self.current else {
            return;
        };
        let frame_area = frame.area();
        let narrow = frame_area.width < NARROW_VIEWPORT_COLS;

        let mut style = Style::default().fg(Color::White).bg(Color::Black);
        let duration = effective_duration(notice.duration, narrow);
        let elapsed = notice.shown_at.elapsed();
        if elapsed < FADE || elapsed + FADE >= duration {
            style = style.add_modifier(Modifier::DIM);
        }

        let Some((area, lines)) = overlay_area(frame_area, &notice.message, narrow) else {
            return; // viewport too small, skip silently
        };

        let paragraph = Paragraph::new(lines)
            .alignment(if narrow { Alignment::Center } else { Alignment::Left })
            .style(style)
            .block(Block::bordered().border_style(style));

        frame.render_widget(Clear, area);
        frame.render_widget(paragraph, area);
    }
}

fn effective_duration(duration: Duration, narrow: bool) -> Duration {
    if narrow { duration.max(NARROW_MIN_DURATION) } else { duration }
}

/// Compute where the notice goes and how its message wraps there.
/// `None` when the viewport cannot fit even a minimal box.
fn overlay_area(frame_area: Rect, message: &str, narrow: bool) -> Option<(Rect, String)> {
    if frame_area.width < 8 || frame_area.height < 4 {
        return None;
    }

    if narrow {
        // Bottom-centered, almost full width.
        let width = frame_area.width.saturating_sub(4);
        let inner = width.saturating_sub(2) as usize;
        let wrapped = textwrap::fill(message, inner.max(1));
        let height = (wrapped.lines().count() as u16 + 2).min(frame_area.height);
        let x = frame_area.x + (frame_area.width - width) / 2;
        let y = frame_area.y + frame_area.height.saturating_sub(height + 1);
        Some((Rect::new(x, y, width, height), wrapped))
    } else {
        // Top-right corner toast.
        let inner = unicode_width::UnicodeWidthStr::width(message) as u16;
        let width = (inner + 4).min(frame_area.width.saturating_sub(2));
        let wrapped = textwrap::fill(message, width.saturating_sub(2).max(1) as usize);
        let height = (wrapped.lines().count() as u16 + 2).min(frame_area.height);
        let x = frame_area.x + frame_area.width.saturating_sub(width + 1);
        let y = frame_area.y + 1;
        Some((Rect::new(x, y, width, height), wrapped))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn show_replaces_the_current_notice() {
        let mut host = NoticeHost::new();
        host.show("first", DEFAULT_DURATION);
        host.show("second", DEFAULT_DURATION);

        assert!(host.is_visible());
        assert_eq!(host.current.as_ref().unwrap().message, "second");
    }

    #[test]
    fn tick_expires_after_duration() {
        let mut host = NoticeHost::new();
        host.show("toast", Duration::from_millis(50));
        host.current.as_mut().unwrap().shown_at = Instant::now() - Duration::from_millis(60);

        assert!(host.tick(false));
        assert!(!host.is_visible());
        assert!(!host.tick(false));
    }

    #[test]
    fn narrow_viewports_apply_the_duration_floor() {
        let mut host = NoticeHost::new();
        host.show("toast", Duration::from_millis(50));
        // Past the requested duration but inside the narrow floor.
        host.current.as_mut().unwrap().shown_at = Instant::now() - Duration::from_millis(600);

        assert!(host.tick(true));
        assert!(host.is_visible());

        host.current.as_mut().unwrap().shown_at =
            Instant::now() - NARROW_MIN_DURATION - Duration::from_millis(10);
        host.tick(true);
        assert!(!host.is_visible());
    }

    #[test]
    fn renders_top_right_on_wide_viewports() {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut host = NoticeHost::new();
        host.show("ping", DEFAULT_DURATION);

        terminal.draw(|f| host.render(f)).unwrap();

        let buffer = terminal.backend().buffer();
        let row1: String = (0..80).map(|x| buffer[(x, 2)].symbol()).collect();
        assert!(row1.contains("ping"));
    }

    #[test]
    fn tiny_viewport_is_skipped_silently() {
        let backend = TestBackend::new(6, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut host = NoticeHost::new();
        host.show("ping", DEFAULT_DURATION);

        // Must not panic; nothing to assert beyond survival.
        terminal.draw(|f| host.render(f)).unwrap();
    }
}
