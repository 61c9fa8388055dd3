//! Product list view.
//!
//! Renders the visible products as a bordered [`ratatui::widgets::Table`]
//! with `ID | Product | Category | User` columns, or a placeholder when no
//! product passes the current filters.

use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use catalog_core::formatting;
use catalog_core::models::ProductWithCategory;

use crate::themes::Theme;

/// Message shown instead of the table when nothing matches.
pub const NO_MATCHES: &str = "No products matching selected criteria";

const COLUMNS: [&str; 4] = ["ID", "Product", "Category", "User"];

/// Build one styled table row per product, alternating row styles.
pub fn product_rows<'a>(products: &[&'a ProductWithCategory], theme: &Theme) -> Vec<Row<'a>> {
    products
        .iter()
        .copied()
        .enumerate()
        .map(|(i, product)| {
            let style = if i % 2 == 0 {
                theme.table_row
            } else {
                theme.table_row_alt
            };
            let owner_style = product
                .owner()
                .map(|u| theme.owner_style(&u.sex))
                .unwrap_or(theme.owner_unknown);

            Row::new(vec![
                Cell::from(product.id().to_string()),
                Cell::from(product.name()),
                Cell::from(formatting::category_column(product)),
                Cell::from(formatting::owner_label(product)).style(owner_style),
            ])
            .style(style)
        })
        .collect()
}

/// Render the product table into `area`, or the placeholder when empty.
pub fn render_product_table(
    frame: &mut Frame,
    area: Rect,
    products: &[&ProductWithCategory],
    theme: &Theme,
) {
    if products.is_empty() {
        render_no_matches(frame, area, theme);
        return;
    }

    let header = Row::new(
        COLUMNS
            .iter()
            .map(|h| Cell::from(*h).style(theme.table_header)),
    )
    .height(1);

    let widths = [
        Constraint::Length(6),
        Constraint::Min(16),
        Constraint::Min(20),
        Constraint::Length(16),
    ];

    let table = Table::new(product_rows(products, theme), widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.panel_border)
                .title(" Products "),
        )
        .style(theme.text);

    frame.render_widget(table, area);
}

/// Render the "nothing matches" placeholder.
pub fn render_no_matches(frame: &mut Frame, area: Rect, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(NO_MATCHES, theme.warning)),
        Line::from(""),
        Line::from(Span::styled(
            "Press Ctrl+R to reset all filters",
            theme.dim,
        )),
    ];
    frame.render_widget(
        Paragraph::new(ratatui::text::Text::from(text)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.panel_border)
                .title(" Products "),
        ),
        area,
    );
}

// ── Tests ──────────────────────────────────────────────────────────────────────
