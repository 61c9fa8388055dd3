//! Main application state and TUI event loop.
//!
//! [`App`] owns the catalog, the current [`FilterState`] and which panel
//! section has focus. Key handling is a plain state transition
//! ([`App::handle_key`]) so it can be exercised without a terminal; the
//! event loop in [`App::run`] only reads keys and redraws.

use std::io;
use std::time::Duration;

use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use tracing::debug;

use catalog_core::catalog::Catalog;
use catalog_core::filter::{FilterState, NO_FILTER};
use catalog_core::formatting;

use crate::components::header::Header;
use crate::filter_panel::{self, Focus};
use crate::product_table;
use crate::themes::Theme;

const KEY_HELP: &str =
    "Tab: next panel  ←/→: select  a: all  Esc: clear search  Ctrl+R: reset all  q: quit";

/// Root application state for the catalog TUI.
pub struct App {
    pub theme: Theme,
    pub catalog: Catalog,
    pub filters: FilterState,
    pub focus: Focus,
    /// Set to `true` to break out of the event loop on the next iteration.
    pub should_quit: bool,
}

impl App {
    pub fn new(theme_name: &str, catalog: Catalog, filters: FilterState) -> Self {
        Self {
            theme: Theme::from_name(theme_name),
            catalog,
            filters,
            focus: Focus::Owners,
            should_quit: false,
        }
    }

    /// Products passing the current filters.
    pub fn visible(&self) -> Vec<&catalog_core::models::ProductWithCategory> {
        self.catalog.visible(&self.filters)
    }

    // ── Event loop ────────────────────────────────────────────────────────────

    /// Run the interactive TUI until the user quits.
    ///
    /// Blocks on `crossterm::event::poll` with a 250 ms timeout; every key
    /// press updates the filters and the next draw recomputes the visible
    /// products. Once raw mode is on, the terminal is restored on every exit
    /// path, including a failed setup.
    pub fn run(mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let result = self.run_raw();
        let restored = restore_terminal();
        result.and(restored)
    }

    fn run_raw(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| self.render(frame))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    // ── Key handling ──────────────────────────────────────────────────────────

    /// Apply a single key press to the application state.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('r') if ctrl => {
                self.reset_filters();
                return;
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Search => self.handle_search_key(key),
            Focus::Owners | Focus::Categories => self.handle_selector_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.filters.clear_query(),
            KeyCode::Backspace => {
                let mut query = self.filters.query().to_string();
                query.pop();
                self.filters.set_query(query);
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let mut query = self.filters.query().to_string();
                query.push(c);
                self.filters.set_query(query);
            }
            _ => {}
        }
    }

    fn handle_selector_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Char('r') | KeyCode::Char('R') => self.reset_filters(),
            KeyCode::Char('a') | KeyCode::Char('A') => self.select(NO_FILTER),
            KeyCode::Left => self.step_selection(false),
            KeyCode::Right => self.step_selection(true),
            _ => {}
        }
    }

    fn reset_filters(&mut self) {
        debug!("Resetting all filters");
        self.filters.reset();
    }

    fn select(&mut self, id: i64) {
        match self.focus {
            Focus::Owners => self.filters.set_owner(id),
            Focus::Categories => self.filters.set_category(id),
            Focus::Search => {}
        }
    }

    fn step_selection(&mut self, forward: bool) {
        let (options, current) = match self.focus {
            Focus::Owners => (
                filter_panel::owner_options(&self.catalog),
                self.filters.owner_id(),
            ),
            Focus::Categories => (
                filter_panel::category_options(&self.catalog),
                self.filters.category_id(),
            ),
            Focus::Search => return,
        };
        let ids: Vec<i64> = options.into_iter().map(|(id, _)| id).collect();
        self.select(cycle_option(&ids, current, forward));
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    /// Render the current application state into `frame`.
    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(filter_panel::PANEL_HEIGHT),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let visible = self.visible();

        let summary = formatting::visible_summary(visible.len(), self.catalog.products().len());
        let owner = formatting::owner_filter_label(&self.catalog, self.filters.owner_id());
        let category =
            formatting::category_filter_label(&self.catalog, self.filters.category_id());
        let header = Header::new(&summary, &owner, &category, &self.theme);
        frame.render_widget(Paragraph::new(header.to_lines()), chunks[0]);

        filter_panel::render_filter_panel(
            frame,
            chunks[1],
            &self.catalog,
            &self.filters,
            self.focus,
            &self.theme,
        );

        product_table::render_product_table(frame, chunks[2], &visible, &self.theme);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(KEY_HELP, self.theme.key_hint))),
            chunks[3],
        );
    }
}

/// Undo the terminal setup done by [`App::run`].
///
/// Every step is attempted even when an earlier one fails; the first error
/// is returned. Safe to call when setup only partly happened.
pub fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen);
    let cursor = execute!(io::stdout(), Show);
    raw.and(screen).and(cursor)
}

/// Step from `current` to the neighbouring id in `ids`, wrapping around.
///
/// A `current` that is not in `ids` (e.g. a negative sentinel or an unknown
/// id given on the command line) is treated as the first option.
pub fn cycle_option(ids: &[i64], current: i64, forward: bool) -> i64 {
    if ids.is_empty() {
        return NO_FILTER;
    }
    let pos = ids
        .iter()
        .position(|&id| filter_panel::is_selected(id, current))
        .unwrap_or(0);
    let next = if forward {
        (pos + 1) % ids.len()
    } else {
        (pos + ids.len() - 1) % ids.len()
    };
    ids[next]
}

// ── Tests ──────────────────────────────────────────────────────────────────────
