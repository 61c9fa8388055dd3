//! Filter panel: owner tabs, search field, category buttons, reset hint.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use catalog_core::catalog::Catalog;
use catalog_core::filter::{FilterState, NO_FILTER};
use catalog_core::formatting;

use crate::themes::Theme;

/// Rows the panel needs: three bordered sections plus the reset hint.
pub const PANEL_HEIGHT: u16 = 10;

const SEARCH_PLACEHOLDER: &str = "Search";
const CLEAR_MARKER: &str = " [x] Esc";

/// Which panel section receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Owners,
    Search,
    Categories,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Owners => Focus::Search,
            Focus::Search => Focus::Categories,
            Focus::Categories => Focus::Owners,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Owners => Focus::Categories,
            Focus::Search => Focus::Owners,
            Focus::Categories => Focus::Search,
        }
    }
}

/// `(id, label)` pairs for the owner tabs, starting with `(0, "All")`.
pub fn owner_options(catalog: &Catalog) -> Vec<(i64, String)> {
    std::iter::once((NO_FILTER, "All".to_string()))
        .chain(catalog.users().iter().map(|u| (u.id, u.name.clone())))
        .collect()
}

/// `(id, label)` pairs for the category buttons, starting with `(0, "All")`.
pub fn category_options(catalog: &Catalog) -> Vec<(i64, String)> {
    std::iter::once((NO_FILTER, "All".to_string()))
        .chain(
            catalog
                .categories()
                .iter()
                .map(|c| (c.id(), formatting::category_label(c))),
        )
        .collect()
}

/// `true` when the option `id` is the one selected by `current`.
///
/// Any non-positive `current` selects the "All" option.
pub fn is_selected(id: i64, current: i64) -> bool {
    if current <= 0 {
        id == NO_FILTER
    } else {
        id == current
    }
}

fn options_line(
    options: Vec<(i64, String)>,
    current: i64,
    style: impl Fn(bool) -> ratatui::style::Style,
) -> Line<'static> {
    let mut spans = Vec::with_capacity(options.len() * 2);
    for (i, (id, label)) in options.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!(" {} ", label), style(is_selected(id, current))));
    }
    Line::from(spans)
}

/// Owner tabs with the active tab highlighted.
pub fn owner_tabs_line(catalog: &Catalog, filters: &FilterState, theme: &Theme) -> Line<'static> {
    options_line(owner_options(catalog), filters.owner_id(), |active| {
        theme.tab_style(active)
    })
}

/// Category buttons with the active button highlighted.
pub fn category_line(catalog: &Catalog, filters: &FilterState, theme: &Theme) -> Line<'static> {
    options_line(category_options(catalog), filters.category_id(), |active| {
        theme.category_style(active)
    })
}

/// Search field. The clear marker only appears while there is a query.
pub fn search_line(query: &str, focused: bool, theme: &Theme) -> Line<'static> {
    let mut spans = vec![Span::styled("> ", theme.label)];
    if query.is_empty() {
        spans.push(Span::styled(SEARCH_PLACEHOLDER, theme.search_placeholder));
    } else {
        spans.push(Span::styled(query.to_string(), theme.search_input));
    }
    if focused {
        spans.push(Span::styled("_", theme.search_input));
    }
    if !query.is_empty() {
        spans.push(Span::styled(CLEAR_MARKER, theme.clear_marker));
    }
    Line::from(spans)
}

/// Reset hint; dimmed when every filter is already at its default.
pub fn reset_line(filters: &FilterState, theme: &Theme) -> Line<'static> {
    let style = if filters.is_default() {
        theme.dim
    } else {
        theme.value
    };
    Line::from(Span::styled("[ Reset all filters: Ctrl+R ]", style))
}

/// Render the whole panel into `area`.
pub fn render_filter_panel(
    frame: &mut Frame,
    area: Rect,
    catalog: &Catalog,
    filters: &FilterState,
    focus: Focus,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    let section = |title: &'static str, focused: bool| {
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style(focused))
            .title(title)
    };

    frame.render_widget(
        Paragraph::new(owner_tabs_line(catalog, filters, theme))
            .block(section(" Owners ", focus == Focus::Owners)),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(search_line(filters.query(), focus == Focus::Search, theme))
            .block(section(" Search ", focus == Focus::Search)),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(category_line(catalog, filters, theme))
            .wrap(Wrap { trim: true })
            .block(section(" Categories ", focus == Focus::Categories)),
        chunks[2],
    );
    frame.render_widget(Paragraph::new(reset_line(filters, theme)), chunks[3]);
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_data::builtin;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn catalog() -> Catalog {
        builtin::raw_catalog().into_catalog()
    }

    #[test]
    fn test_focus_cycles() {
        assert_eq!(Focus::Owners.next(), Focus::Search);
        assert_eq!(Focus::Categories.next(), Focus::Owners);
        assert_eq!(Focus::Owners.previous(), Focus::Categories);
        assert_eq!(Focus::Search.previous().next(), Focus::Search);
    }

    #[test]
    fn test_owner_options_start_with_all() {
        let options = owner_options(&catalog());
        assert_eq!(options[0], (0, "All".to_string()));
        assert_eq!(options.len(), 5);
        assert_eq!(options[2], (2, "Anna".to_string()));
    }

    #[test]
    fn test_category_options_use_labels() {
        let options = category_options(&catalog());
        assert_eq!(options.len(), 6);
        assert_eq!(options[3], (3, "🍏 - Fruits".to_string()));
    }

    #[test]
    fn test_is_selected() {
        assert!(is_selected(0, 0));
        assert!(is_selected(0, -2));
        assert!(!is_selected(1, 0));
        assert!(is_selected(3, 3));
        assert!(!is_selected(0, 3));
    }

    #[test]
    fn test_owner_tabs_highlight_active() {
        let theme = Theme::dark();
        let line = owner_tabs_line(&catalog(), &FilterState::with(2, "", 0), &theme);

        let active: Vec<String> = line
            .spans
            .iter()
            .filter(|s| s.style == theme.tab_active)
            .map(|s| s.content.trim().to_string())
            .collect();
        assert_eq!(active, vec!["Anna"]);
    }

    #[test]
    fn test_category_line_all_active_by_default() {
        let theme = Theme::dark();
        let line = category_line(&catalog(), &FilterState::new(), &theme);

        let active: Vec<String> = line
            .spans
            .iter()
            .filter(|s| s.style == theme.category_active)
            .map(|s| s.content.trim().to_string())
            .collect();
        assert_eq!(active, vec!["All"]);
    }

    #[test]
    fn test_search_line_placeholder_and_clear_marker() {
        let theme = Theme::dark();

        let empty = text(&search_line("", false, &theme));
        assert!(empty.contains(SEARCH_PLACEHOLDER));
        assert!(!empty.contains(CLEAR_MARKER));

        let typed = text(&search_line("app", true, &theme));
        assert!(typed.contains("app_"));
        assert!(typed.contains(CLEAR_MARKER));
        assert!(!typed.contains(SEARCH_PLACEHOLDER));
    }

    #[test]
    fn test_reset_line_dim_when_default() {
        let theme = Theme::dark();
        let line = reset_line(&FilterState::new(), &theme);
        assert_eq!(line.spans[0].style, theme.dim);

        let line = reset_line(&FilterState::with(0, "x", 0), &theme);
        assert_eq!(line.spans[0].style, theme.value);
    }

    #[test]
    fn test_render_filter_panel_does_not_panic() {
        let backend = TestBackend::new(100, PANEL_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::dark();
        let catalog = catalog();

        terminal
            .draw(|frame| {
                let area = frame.area();
                render_filter_panel(
                    frame,
                    area,
                    &catalog,
                    &FilterState::with(1, "su", 1),
                    Focus::Search,
                    &theme,
                );
            })
            .unwrap();
    }
}
