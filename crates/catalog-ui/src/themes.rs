use ratatui::style::{Color, Modifier, Style};

/// Terminal background type detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundType {
    Dark,
    Light,
}

/// Detect terminal background type from the `COLORFGBG` environment variable.
///
/// The variable has the format `"foreground;background"`. Background values
/// 0–6 are considered dark; 7–15 are considered light. Absent or unparseable
/// values give `BackgroundType::Dark`.
pub fn detect_background() -> BackgroundType {
    if let Ok(val) = std::env::var("COLORFGBG") {
        if let Some(bg) = val.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                return if bg_num <= 6 {
                    BackgroundType::Dark
                } else {
                    BackgroundType::Light
                };
            }
        }
    }
    BackgroundType::Dark
}

/// All styles used by the catalog UI.
#[derive(Debug, Clone)]
pub struct Theme {
    // ── Header ───────────────────────────────────────────────────────────────
    pub header: Style,
    pub header_accent: Style,
    pub separator: Style,

    // ── Text ─────────────────────────────────────────────────────────────────
    pub text: Style,
    pub dim: Style,
    pub label: Style,
    pub value: Style,
    pub warning: Style,

    // ── Filter panel ─────────────────────────────────────────────────────────
    /// Border of the panel section that has keyboard focus.
    pub focus_border: Style,
    pub panel_border: Style,
    pub tab_active: Style,
    pub tab_inactive: Style,
    pub category_active: Style,
    pub category_inactive: Style,
    pub search_input: Style,
    pub search_placeholder: Style,
    pub clear_marker: Style,

    // ── Product table ────────────────────────────────────────────────────────
    pub table_header: Style,
    pub table_row: Style,
    pub table_row_alt: Style,
    pub owner_male: Style,
    pub owner_female: Style,
    pub owner_unknown: Style,

    // ── Footer ───────────────────────────────────────────────────────────────
    pub key_hint: Style,
}

impl Theme {
    /// Dark-background terminal theme (default).
    pub fn dark() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            header_accent: Style::default().fg(Color::Yellow),
            separator: Style::default().fg(Color::DarkGray),

            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            label: Style::default().fg(Color::Gray),
            value: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            warning: Style::default().fg(Color::Yellow),

            focus_border: Style::default().fg(Color::Cyan),
            panel_border: Style::default().fg(Color::DarkGray),
            tab_active: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::Gray),
            category_active: Style::default()
                .fg(Color::Black)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            category_inactive: Style::default().fg(Color::Gray),
            search_input: Style::default().fg(Color::White),
            search_placeholder: Style::default().fg(Color::DarkGray),
            clear_marker: Style::default().fg(Color::Red),

            table_header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            table_row: Style::default().fg(Color::White),
            table_row_alt: Style::default().fg(Color::Gray),
            owner_male: Style::default().fg(Color::Blue),
            owner_female: Style::default().fg(Color::Red),
            owner_unknown: Style::default().fg(Color::Gray),

            key_hint: Style::default().fg(Color::DarkGray),
        }
    }

    /// Light-background terminal theme.
    pub fn light() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            header_accent: Style::default().fg(Color::Magenta),
            separator: Style::default().fg(Color::Gray),

            text: Style::default().fg(Color::Black),
            dim: Style::default().fg(Color::Gray),
            label: Style::default().fg(Color::DarkGray),
            value: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            warning: Style::default().fg(Color::Magenta),

            focus_border: Style::default().fg(Color::Blue),
            panel_border: Style::default().fg(Color::Gray),
            tab_active: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::DarkGray),
            category_active: Style::default()
                .fg(Color::White)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            category_inactive: Style::default().fg(Color::DarkGray),
            search_input: Style::default().fg(Color::Black),
            search_placeholder: Style::default().fg(Color::Gray),
            clear_marker: Style::default().fg(Color::Red),

            table_header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            table_row: Style::default().fg(Color::Black),
            table_row_alt: Style::default().fg(Color::DarkGray),
            owner_male: Style::default().fg(Color::Blue),
            owner_female: Style::default().fg(Color::Red),
            owner_unknown: Style::default().fg(Color::DarkGray),

            key_hint: Style::default().fg(Color::Gray),
        }
    }

    /// Basic 8-colour ANSI palette without bold or background fills, for
    /// minimal terminals. Active items are marked with reverse video.
    pub fn classic() -> Self {
        Self {
            header: Style::default().fg(Color::Cyan),
            header_accent: Style::default().fg(Color::White),
            separator: Style::default().fg(Color::DarkGray),

            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            label: Style::default().fg(Color::Gray),
            value: Style::default().fg(Color::White),
            warning: Style::default().fg(Color::Yellow),

            focus_border: Style::default().fg(Color::White),
            panel_border: Style::default().fg(Color::DarkGray),
            tab_active: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::REVERSED),
            tab_inactive: Style::default().fg(Color::Gray),
            category_active: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::REVERSED),
            category_inactive: Style::default().fg(Color::Gray),
            search_input: Style::default().fg(Color::White),
            search_placeholder: Style::default().fg(Color::DarkGray),
            clear_marker: Style::default().fg(Color::Red),

            table_header: Style::default().fg(Color::Cyan),
            table_row: Style::default().fg(Color::White),
            table_row_alt: Style::default().fg(Color::Gray),
            owner_male: Style::default().fg(Color::Blue),
            owner_female: Style::default().fg(Color::Red),
            owner_unknown: Style::default().fg(Color::White),

            key_hint: Style::default().fg(Color::DarkGray),
        }
    }

    /// Choose a theme based on the detected terminal background.
    pub fn auto_detect() -> Self {
        match detect_background() {
            BackgroundType::Light => Self::light(),
            BackgroundType::Dark => Self::dark(),
        }
    }

    /// Construct a theme by name. Unknown names fall back to `auto_detect`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            "dark" => Self::dark(),
            "classic" => Self::classic(),
            _ => Self::auto_detect(),
        }
    }

    // ── Style helpers ────────────────────────────────────────────────────────

    /// Owner name colour keyed on the user's `sex` marker.
    pub fn owner_style(&self, sex: &str) -> Style {
        match sex.to_lowercase().as_str() {
            "m" => self.owner_male,
            "f" => self.owner_female,
            _ => self.owner_unknown,
        }
    }

    pub fn tab_style(&self, active: bool) -> Style {
        if active {
            self.tab_active
        } else {
            self.tab_inactive
        }
    }

    pub fn category_style(&self, active: bool) -> Style {
        if active {
            self.category_active
        } else {
            self.category_inactive
        }
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            self.focus_border
        } else {
            self.panel_border
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
