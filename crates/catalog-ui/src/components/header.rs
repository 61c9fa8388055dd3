use crate::themes::Theme;
use ratatui::text::{Line, Span};

/// Decoration placed either side of the application title.
pub const ORNAMENT: &str = "◆ ◇ ◆";

/// Catalog header rendering four lines:
///
/// 1. Application title with ornaments (ALL CAPS).
/// 2. A 60-column `=` separator.
/// 3. `[ Showing N of M products | owner | category ]`.
/// 4. An empty line.
pub struct Header<'a> {
    /// Result summary, e.g. `"Showing 3 of 8 products"`.
    pub summary: &'a str,
    /// Current owner filter label (`"All"` or a user name).
    pub owner: &'a str,
    /// Current category filter label (`"All"` or `"🍏 - Fruits"`).
    pub category: &'a str,
    pub theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(summary: &'a str, owner: &'a str, category: &'a str, theme: &'a Theme) -> Self {
        Self {
            summary,
            owner,
            category,
            theme,
        }
    }

    /// Render the header as exactly four lines.
    pub fn to_lines(&self) -> Vec<Line<'a>> {
        let separator = "=".repeat(60);

        vec![
            Line::from(vec![
                Span::styled(ORNAMENT, self.theme.header_accent),
                Span::styled(" PRODUCT CATEGORIES ", self.theme.header),
                Span::styled(ORNAMENT, self.theme.header_accent),
            ]),
            Line::from(Span::styled(separator, self.theme.separator)),
            Line::from(vec![
                Span::styled("[ ", self.theme.label),
                Span::styled(self.summary, self.theme.value),
                Span::styled(" | owner: ", self.theme.label),
                Span::styled(self.owner, self.theme.value),
                Span::styled(" | category: ", self.theme.label),
                Span::styled(self.category, self.theme.value),
                Span::styled(" ]", self.theme.label),
            ]),
            Line::from(""),
        ]
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
