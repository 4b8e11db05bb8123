use std::path::PathBuf;
use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::planner::StatusTier;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Get the active theme (loaded once on first call).
pub fn current() -> &'static Theme {
    THEME.get_or_init(|| Theme::load().unwrap_or_default())
}

#[derive(Debug, Clone)]
pub struct Theme {
    #[allow(dead_code)]
    pub name: String,
    pub header: Style,
    pub dim: Style,
    pub border: Style,
    pub status: Style,
    pub highlight: Style,
    pub badge_past: Style,
    pub badge_today: Style,
    pub badge_tomorrow: Style,
    pub badge_week: Style,
    pub badge_future: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            header: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::DarkGray),
            border: Style::default().fg(Color::Gray),
            status: Style::default().fg(Color::White).bg(Color::DarkGray),
            highlight: Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
            badge_past: Style::default().fg(Color::Gray),
            badge_today: Style::default().fg(Color::Black).bg(Color::Yellow),
            badge_tomorrow: Style::default().fg(Color::Black).bg(Color::Cyan),
            badge_week: Style::default().fg(Color::Black).bg(Color::Green),
            badge_future: Style::default().fg(Color::DarkGray),
        }
    }
}

impl Theme {
    /// Badge style for a status tier.
    pub fn badge(&self, tier: StatusTier) -> Style {
        match tier {
            StatusTier::Past => self.badge_past,
            StatusTier::Today => self.badge_today,
            StatusTier::Tomorrow => self.badge_tomorrow,
            StatusTier::Week => self.badge_week,
            StatusTier::Future => self.badge_future,
        }
    }

    pub fn load() -> Option<Self> {
        let path = config_path()?;
        if !path.exists() {
            return None;
        }
        let content = std::fs::read_to_string(&path).ok()?;
        let config: ThemeConfig = toml::from_str(&content).ok()?;
        Some(config.into_theme())
    }

    /// Get a built-in preset by name.
    pub fn preset(name: &str) -> Self {
        match name {
            "dracula" => Self::dracula(),
            "gruvbox" => Self::gruvbox(),
            _ => Self::default(),
        }
    }

    fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            header: Style::default().fg(Color::Rgb(248, 248, 242)).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::Rgb(98, 114, 164)),
            border: Style::default().fg(Color::Rgb(68, 71, 90)),
            status: Style::default()
                .fg(Color::Rgb(248, 248, 242))
                .bg(Color::Rgb(68, 71, 90)),
            highlight: Style::default()
                .bg(Color::Rgb(68, 71, 90))
                .add_modifier(Modifier::BOLD),
            badge_past: Style::default().fg(Color::Rgb(98, 114, 164)),
            badge_today: Style::default().fg(Color::Black).bg(Color::Rgb(241, 250, 140)),
            badge_tomorrow: Style::default().fg(Color::Black).bg(Color::Rgb(139, 233, 253)),
            badge_week: Style::default().fg(Color::Black).bg(Color::Rgb(80, 250, 123)),
            badge_future: Style::default().fg(Color::Rgb(98, 114, 164)),
        }
    }

    fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            header: Style::default().fg(Color::Rgb(235, 219, 178)).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::Rgb(146, 131, 116)),
            border: Style::default().fg(Color::Rgb(102, 92, 84)),
            status: Style::default()
                .fg(Color::Rgb(235, 219, 178))
                .bg(Color::Rgb(80, 73, 69)),
            highlight: Style::default()
                .bg(Color::Rgb(80, 73, 69))
                .add_modifier(Modifier::BOLD),
            badge_past: Style::default().fg(Color::Rgb(146, 131, 116)),
            badge_today: Style::default().fg(Color::Black).bg(Color::Rgb(250, 189, 47)),
            badge_tomorrow: Style::default().fg(Color::Black).bg(Color::Rgb(131, 165, 152)),
            badge_week: Style::default().fg(Color::Black).bg(Color::Rgb(184, 187, 38)),
            badge_future: Style::default().fg(Color::Rgb(146, 131, 116)),
        }
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("event-planner-tui").join("theme.toml"))
}

// ── TOML config types ──

#[derive(Debug, Deserialize, Default)]
struct ThemeConfig {
    preset: Option<String>,
    header_fg: Option<String>,
    dim_fg: Option<String>,
    border_fg: Option<String>,
    status_fg: Option<String>,
    status_bg: Option<String>,
    highlight_bg: Option<String>,
    badge_today_bg: Option<String>,
    badge_tomorrow_bg: Option<String>,
    badge_week_bg: Option<String>,
}

impl ThemeConfig {
    fn into_theme(self) -> Theme {
        // Start from preset or default
        let mut theme = self
            .preset
            .as_deref()
            .map(Theme::preset)
            .unwrap_or_default();

        // Override individual colors
        if let Some(c) = self.header_fg.as_deref().and_then(parse_color) {
            theme.header = theme.header.fg(c);
        }
        if let Some(c) = self.dim_fg.as_deref().and_then(parse_color) {
            theme.dim = theme.dim.fg(c);
        }
        if let Some(c) = self.border_fg.as_deref().and_then(parse_color) {
            theme.border = theme.border.fg(c);
        }
        if let Some(c) = self.status_fg.as_deref().and_then(parse_color) {
            theme.status = theme.status.fg(c);
        }
        if let Some(c) = self.status_bg.as_deref().and_then(parse_color) {
            theme.status = theme.status.bg(c);
        }
        if let Some(c) = self.highlight_bg.as_deref().and_then(parse_color) {
            theme.highlight = theme.highlight.bg(c);
        }
        if let Some(c) = self.badge_today_bg.as_deref().and_then(parse_color) {
            theme.badge_today = theme.badge_today.bg(c);
        }
        if let Some(c) = self.badge_tomorrow_bg.as_deref().and_then(parse_color) {
            theme.badge_tomorrow = theme.badge_tomorrow.bg(c);
        }
        if let Some(c) = self.badge_week_bg.as_deref().and_then(parse_color) {
            theme.badge_week = theme.badge_week.bg(c);
        }

        theme
    }
}

/// Parse a color string: hex "#rrggbb", or named colors.
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if s.starts_with('#') && s.len() == 7 {
        let r = u8::from_str_radix(&s[1..3], 16).ok()?;
        let g = u8::from_str_radix(&s[3..5], 16).ok()?;
        let b = u8::from_str_radix(&s[5..7], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    match s.to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "lightred" => Some(Color::LightRed),
        "lightgreen" => Some(Color::LightGreen),
        "lightyellow" => Some(Color::LightYellow),
        "lightblue" => Some(Color::LightBlue),
        "lightmagenta" => Some(Color::LightMagenta),
        "lightcyan" => Some(Color::LightCyan),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_and_named_colors() {
        assert_eq!(parse_color("#ff8800"), Some(Color::Rgb(255, 136, 0)));
        assert_eq!(parse_color("cyan"), Some(Color::Cyan));
        assert_eq!(parse_color("not-a-color"), None);
    }

    #[test]
    fn config_overrides_apply_on_top_of_preset() {
        let config: ThemeConfig =
            toml::from_str("preset = \"dracula\"\nbadge_today_bg = \"yellow\"").unwrap();
        let theme = config.into_theme();
        assert_eq!(theme.name, "dracula");
        assert_eq!(theme.badge_today.bg, Some(Color::Yellow));
    }

    #[test]
    fn every_tier_has_a_badge_style() {
        let theme = Theme::default();
        for tier in [
            StatusTier::Past,
            StatusTier::Today,
            StatusTier::Tomorrow,
            StatusTier::Week,
            StatusTier::Future,
        ] {
            // Styling itself is cosmetic; this just pins the mapping down.
            let _ = theme.badge(tier);
        }
    }
}
