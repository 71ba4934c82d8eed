//! Frame layout and top-level draw.
//!
//! The shell stacks, top to bottom: banner (when the site has slides), nav
//! bar, content region, search box, status line. The notice overlay renders
//! last so it sits on top of everything.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::banner::BANNER_HEIGHT;
use crate::tui::components::{ContentView, NavBar};

/// Where each region of the shell lives this frame.
pub struct ShellAreas {
    pub banner: Option<Rect>,
    pub nav: Rect,
    pub content: Rect,
    pub search: Rect,
    pub status: Rect,
}

/// Compute the frame layout. Kept separate from drawing so mouse hit tests
/// can recompute the same areas.
pub fn shell_layout(area: Rect, has_banner: bool) -> ShellAreas {
    use Constraint::{Length, Min};

    if has_banner {
        let layout = Layout::vertical([Length(BANNER_HEIGHT), Length(1), Min(0), Length(3), Length(1)]);
        let [banner, nav, content, search, status] = layout.areas(area);
        ShellAreas { banner: Some(banner), nav, content, search, status }
    } else {
        let layout = Layout::vertical([Length(1), Min(0), Length(3), Length(1)]);
        let [nav, content, search, status] = layout.areas(area);
        ShellAreas { banner: None, nav, content, search, status }
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let areas = shell_layout(frame.area(), !tui.banner.is_empty());

    if let Some(banner_area) = areas.banner {
        tui.banner.render(frame, banner_area);
    }

    NavBar { entries: &app.nav, active: &app.active_page }.render(frame, areas.nav);

    ContentView { app, state: &mut tui.content }.render(frame, areas.content);

    tui.search.render(frame, areas.search);

    let status_text = if app.status_message.is_empty() {
        "Tab pages · / search · Enter open · q quit".to_string()
    } else {
        app.status_message.clone()
    };
    frame.render_widget(
        Span::styled(status_text, Style::default().add_modifier(Modifier::DIM)),
        areas.status,
    );

    // Overlay goes last so it covers whatever is under it.
    tui.notices.render(frame);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;
    use crate::tui::TuiState;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn layout_without_banner_has_four_regions() {
        let areas = shell_layout(Rect::new(0, 0, 80, 24), false);
        assert!(areas.banner.is_none());
        assert_eq!(areas.nav.y, 0);
        assert_eq!(areas.status.y, 23);
        assert_eq!(areas.search.height, 3);
    }

    #[test]
    fn layout_with_banner_reserves_the_top() {
        let areas = shell_layout(Rect::new(0, 0, 80, 24), true);
        let banner = areas.banner.unwrap();
        assert_eq!(banner.y, 0);
        assert_eq!(banner.height, 5);
        assert_eq!(areas.nav.y, 5);
    }

    #[test]
    fn draw_ui_renders_the_whole_shell() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = test_app();
        let mut tui = TuiState::new(vec!["slide one".to_string()]);

        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("slide one"));
        assert!(text.contains("Home"));
        assert!(text.contains("Hello home body"));
        assert!(text.contains("Search"));
    }
}
