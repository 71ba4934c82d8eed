//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the shell, and
//! translates keyboard/mouse events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm; the
//! router, cache and search engine never see a terminal type.
//!
//! ## Event loop
//!
//! A sync loop with background work on tokio tasks (page loads, the bulk
//! pre-cache, the keyword-jump delay). Tasks post `Action`s back over an
//! `std::sync::mpsc` channel; the loop drains it each turn and applies
//! `update()`. Nothing is cancelled; a superseded load simply completes
//! later and the last write wins.
//!
//! The poll timeout is short because the banner auto-advance and the notice
//! fade are clock-driven; redraws still only happen when something changed.

mod component;
mod components;
mod event;
pub mod html;
mod ui;

use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use log::{debug, info, warn};
use ratatui::layout::Position;

use crate::content::{PageFetcher, fetch_missing, load_fragment};
use crate::core::action::{Action, Effect, update};
use crate::core::state::{App, View};
use crate::tui::component::EventHandler;
use crate::tui::components::notice::{DEFAULT_DURATION, NARROW_VIEWPORT_COLS};
use crate::tui::components::{Banner, ContentViewState, NoticeHost, SearchBox, SearchEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Feedback shown when a hidden keyword intercepts a search.
const KEYWORD_NOTICE_TEXT: &str = "Hidden keyword recognized, jumping...";
/// Fixed pause between the keyword notice and the navigation it triggers.
const KEYWORD_JUMP_DELAY: Duration = Duration::from_millis(100);

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys drive navigation, the carousel and scrolling.
    Browse,
    /// Keys type into the search box. Esc returns to Browse.
    Search,
}

/// TUI-specific presentation state (not part of core shell logic).
pub struct TuiState {
    pub content: ContentViewState,
    pub search: SearchBox,
    pub banner: Banner,
    pub notices: NoticeHost,
    pub mode: InputMode,
}

impl TuiState {
    pub fn new(slides: Vec<String>) -> Self {
        Self {
            content: ContentViewState::new(),
            search: SearchBox::new(),
            banner: Banner::new(slides),
            notices: NoticeHost::new(),
            mode: InputMode::Browse,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // SteadyBlock: continuous redraws reset the terminal's blink timer,
        // which makes a blinking cursor look erratic.
        execute!(stdout(), EnableMouseCapture, Show, SetCursorStyle::SteadyBlock)?;
        info!("Terminal modes enabled (mouse capture, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Hide);
    }
}

pub fn run(mut app: App, slides: Vec<String>, initial_page: String) -> std::io::Result<()> {
    let mut tui = TuiState::new(slides);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks.
    let (tx, rx) = mpsc::channel::<Action>();

    // The address-bar equivalent: perform the startup navigation once.
    info!("starting at page '{}'", initial_page);
    let effect = update(&mut app, Action::Navigate(initial_page));
    let mut should_quit = handle_effect(effect, &app, &mut tui, &tx);

    let mut last_view = app.view.clone();
    let mut needs_redraw = true;

    while !should_quit {
        let narrow = terminal
            .size()
            .map(|size| size.width < NARROW_VIEWPORT_COLS)
            .unwrap_or(false);

        // Clock-driven work: carousel auto-advance and notice expiry.
        if tui.banner.tick() {
            needs_redraw = true;
        }
        if tui.notices.tick(narrow) {
            needs_redraw = true;
        }

        // A view change invalidates scroll position and result selection.
        if app.view != last_view {
            tui.content.reset();
            last_view = app.view.clone();
            needs_redraw = true;
        }

        tui.search.focused = tui.mode == InputMode::Search;

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Process first event + drain all pending events before the next draw.
        let first_event = poll_event_timeout(Duration::from_millis(120));
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                // Resize just needs a redraw (already flagged above).
                TuiEvent::Resize => continue,

                TuiEvent::ForceQuit => {
                    should_quit = true;
                    continue;
                }

                // Scroll events always reach the content region; in a result
                // list, vertical arrows move the selection instead.
                TuiEvent::ScrollUp if result_count(&app.view) > 0 => tui.content.select_prev(),
                TuiEvent::ScrollDown if result_count(&app.view) > 0 => {
                    tui.content.select_next(result_count(&app.view));
                }
                TuiEvent::ScrollUp
                | TuiEvent::ScrollDown
                | TuiEvent::ScrollPageUp
                | TuiEvent::ScrollPageDown => tui.content.handle_scroll(&event),

                // Nav clicks and banner swipes need this frame's layout.
                TuiEvent::MouseDown(col, row) => {
                    let areas =
                        ui::shell_layout(terminal.get_frame().area(), !tui.banner.is_empty());
                    if let Some(banner_area) = areas.banner
                        && banner_area.contains(Position { x: col, y: row })
                    {
                        tui.banner.drag_start(col);
                    } else if areas.nav.contains(Position { x: col, y: row })
                        && let Some(key) =
                            components::nav_bar::hit_entry(&app.nav, col - areas.nav.x)
                    {
                        let key = key.to_string();
                        let effect = update(&mut app, Action::Navigate(key));
                        if handle_effect(effect, &app, &mut tui, &tx) {
                            should_quit = true;
                        }
                    }
                }
                TuiEvent::MouseUp(col, _row) => {
                    tui.banner.drag_end(col);
                }

                other => match tui.mode {
                    InputMode::Search => match other {
                        TuiEvent::Escape => tui.mode = InputMode::Browse,
                        ref ev => {
                            if let Some(SearchEvent::Submit(query)) = tui.search.handle_event(ev) {
                                let effect = update(&mut app, Action::Submit(query));
                                if handle_effect(effect, &app, &mut tui, &tx) {
                                    should_quit = true;
                                }
                            }
                        }
                    },
                    InputMode::Browse => match other {
                        TuiEvent::InputChar('q') => should_quit = true,
                        TuiEvent::InputChar('/') => tui.mode = InputMode::Search,
                        // Digits act as the carousel's indicator dots.
                        TuiEvent::InputChar(c @ '1'..='9') => {
                            let index = c as usize - '1' as usize;
                            tui.banner.jump_to(index);
                        }
                        TuiEvent::Left => tui.banner.manual_prev(),
                        TuiEvent::Right => tui.banner.manual_next(),
                        TuiEvent::NextPage => {
                            let effect = cycle_page(&mut app, 1);
                            if handle_effect(effect, &app, &mut tui, &tx) {
                                should_quit = true;
                            }
                        }
                        TuiEvent::PrevPage => {
                            let effect = cycle_page(&mut app, -1);
                            if handle_effect(effect, &app, &mut tui, &tx) {
                                should_quit = true;
                            }
                        }
                        // Enter activates the selected result card.
                        TuiEvent::Submit => {
                            let target = match &app.view {
                                View::SearchResults { hits, .. } => {
                                    hits.get(tui.content.selected).map(|hit| hit.key.clone())
                                }
                                _ => None,
                            };
                            if let Some(key) = target {
                                let effect = update(&mut app, Action::Navigate(key));
                                if handle_effect(effect, &app, &mut tui, &tx) {
                                    should_quit = true;
                                }
                            }
                        }
                        _ => {}
                    },
                },
            }
        }

        // Handle background task actions (loads, pre-cache, keyword jumps).
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("event loop received: {:?}", action);
            let effect = update(&mut app, action);
            if handle_effect(effect, &app, &mut tui, &tx) {
                should_quit = true;
            }
        }
    }

    ratatui::restore();
    Ok(())
}

/// How many result cards the current view holds (0 outside search results).
fn result_count(view: &View) -> usize {
    match view {
        View::SearchResults { hits, .. } => hits.len(),
        _ => 0,
    }
}

/// Step the active page through the nav list by `step` entries.
fn cycle_page(app: &mut App, step: isize) -> Effect {
    if app.nav.is_empty() {
        return Effect::None;
    }
    let len = app.nav.len() as isize;
    let current = app
        .nav
        .iter()
        .position(|entry| entry.key == app.active_page)
        .unwrap_or(0) as isize;
    let next = (current + step + len) % len;
    let key = app.nav[next as usize].key.clone();
    update(app, Action::Navigate(key))
}

/// Perform the I/O an [`Effect`] asks for. Returns true when the loop
/// should stop.
fn handle_effect(effect: Effect, app: &App, tui: &mut TuiState, tx: &mpsc::Sender<Action>) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::LoadPage(key) => {
            spawn_page_load(app.fetcher.clone(), key, tx.clone());
            false
        }
        Effect::PreloadAll(query) => {
            let missing: Vec<String> = app
                .page_keys()
                .into_iter()
                .filter(|key| !app.store.contains(key))
                .collect();
            spawn_preload(app.fetcher.clone(), missing, query, tx.clone());
            false
        }
        Effect::KeywordJump(target) => {
            tui.notices.show(KEYWORD_NOTICE_TEXT, DEFAULT_DURATION);
            spawn_keyword_jump(target, tx.clone());
            false
        }
    }
}

/// Fetch one page in the background and post the outcome.
fn spawn_page_load(fetcher: Arc<dyn PageFetcher>, key: String, tx: mpsc::Sender<Action>) {
    info!("spawning load for page '{}'", key);
    tokio::spawn(async move {
        let action = match load_fragment(fetcher.as_ref(), &key).await {
            Ok(fragment) => Action::PageLoaded { key, fragment },
            Err(error) => Action::PageFailed { key, error },
        };
        if tx.send(action).is_err() {
            warn!("failed to post load result: receiver dropped");
        }
    });
}

/// Pre-cache every missing page concurrently, then post the settled batch.
fn spawn_preload(
    fetcher: Arc<dyn PageFetcher>,
    missing: Vec<String>,
    query: String,
    tx: mpsc::Sender<Action>,
) {
    info!("spawning pre-cache of {} page(s) for search", missing.len());
    tokio::spawn(async move {
        let fetched = fetch_missing(fetcher.as_ref(), missing).await;
        if tx.send(Action::PreloadDone { query, fetched }).is_err() {
            warn!("failed to post pre-cache result: receiver dropped");
        }
    });
}

/// Wait out the fixed keyword delay, then post the navigation.
fn spawn_keyword_jump(target: String, tx: mpsc::Sender<Action>) {
    tokio::spawn(async move {
        tokio::time::sleep(KEYWORD_JUMP_DELAY).await;
        if tx.send(Action::KeywordJumpDue(target)).is_err() {
            warn!("failed to post keyword jump: receiver dropped");
        }
    });
}
