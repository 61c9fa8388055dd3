//! Non-interactive text listing for `--view list`.
//!
//! Columns are padded by terminal display width rather than byte or char
//! count, so emoji category icons stay aligned.

use unicode_width::UnicodeWidthStr;

use catalog_core::formatting;
use catalog_core::models::ProductWithCategory;

use crate::product_table::NO_MATCHES;

const HEADERS: [&str; 4] = ["ID", "Product", "Category", "User"];
const GAP: &str = "  ";

/// Render `products` as an aligned plain-text table, one line per product
/// after a header and a rule. Returns the placeholder line when empty.
pub fn render_plain(products: &[&ProductWithCategory]) -> String {
    if products.is_empty() {
        return format!("{}\n", NO_MATCHES);
    }

    let rows: Vec<[String; 4]> = products
        .iter()
        .map(|p| {
            [
                p.id().to_string(),
                p.name().to_string(),
                formatting::category_column(p),
                formatting::owner_label(p).to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADERS.map(str::to_string), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(rule.join(GAP).trim_end());
    out.push('\n');
    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, &width)| pad_to_width(cell, width))
        .collect();
    out.push_str(padded.join(GAP).trim_end());
    out.push('\n');
}

/// Right-pad `s` with spaces up to `width` display columns.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let current = s.width();
    if current >= width {
        return s.to_string();
    }
    format!("{}{}", s, " ".repeat(width - current))
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::filter::FilterState;
    use catalog_data::builtin;

    #[test]
    fn test_pad_to_width_counts_display_columns() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        // The emoji occupies two columns.
        assert_eq!(pad_to_width("🍏", 4), "🍏  ");
        assert_eq!(pad_to_width("long", 2), "long");
    }

    #[test]
    fn test_render_plain_empty() {
        assert_eq!(render_plain(&[]), format!("{}\n", NO_MATCHES));
    }

    #[test]
    fn test_render_plain_lists_visible_products() {
        let catalog = builtin::raw_catalog().into_catalog();
        let visible = catalog.visible(&FilterState::with(0, "E", 5));

        let out = render_plain(&visible);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 4, "output:\n{out}");
        assert!(lines[0].starts_with("ID"));
        assert!(lines[1].starts_with("--"));
        assert!(lines[2].contains("Jacket"));
        assert!(lines[2].contains("👚 - Clothes"));
        assert!(lines[2].ends_with("Max"));
        assert!(lines[3].contains("Sweater"));
    }

    #[test]
    fn test_render_plain_columns_align() {
        let catalog = builtin::raw_catalog().into_catalog();
        let visible = catalog.visible(&FilterState::new());

        let out = render_plain(&visible);

        // The "User" column starts at the same display column on every line.
        let user_columns: Vec<usize> = out
            .lines()
            .skip(2)
            .map(|line| {
                let owner = line.rsplit(GAP).next().unwrap();
                line[..line.len() - owner.len()].width()
            })
            .collect();
        assert!(user_columns.windows(2).all(|w| w[0] == w[1]), "{out}");
    }
}
