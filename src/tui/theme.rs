use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::{Category, UiConfig, WeatherIcon};

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub amber: Color,
    pub green: Color,
    pub cyan: Color,
    pub blue: Color,
    pub rose: Color,
    pub selection_bg: Color,
    pub selection_border: Color,
    /// Background of the "special experience" card
    pub card_bg: Color,
    /// Background of the staff block in the detail overlay
    pub staff_bg: Color,
    /// Per-tag colors
    pub tag_colors: HashMap<String, Color>,
    /// Per-category badge colors
    pub category_colors: HashMap<Category, Color>,
}

impl Default for Theme {
    fn default() -> Self {
        let mut tag_colors = HashMap::new();
        tag_colors.insert("必吃".into(), Color::Rgb(0xFF, 0xB0, 0x00));
        tag_colors.insert("必買".into(), Color::Rgb(0xFF, 0x5C, 0x8A));

        let mut category_colors = HashMap::new();
        category_colors.insert(Category::Transport, Color::Rgb(0x4C, 0x9A, 0xFF));
        category_colors.insert(Category::Food, Color::Rgb(0xFF, 0x9F, 0x43));
        category_colors.insert(Category::Activity, Color::Rgb(0x3D, 0xD6, 0x8C));
        category_colors.insert(Category::Hotel, Color::Rgb(0xA2, 0x7B, 0xFF));
        category_colors.insert(Category::Shopping, Color::Rgb(0xFF, 0x5C, 0x8A));
        category_colors.insert(Category::Other, Color::Rgb(0x8A, 0x94, 0xA6));

        Theme {
            background: Color::Rgb(0x0F, 0x14, 0x1C),
            surface: Color::Rgb(0x1A, 0x22, 0x2E),
            text: Color::Rgb(0xC8, 0xD1, 0xDC),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0x4C, 0x9A, 0xFF),
            dim: Color::Rgb(0x6B, 0x76, 0x88),
            red: Color::Rgb(0xFF, 0x55, 0x55),
            amber: Color::Rgb(0xFF, 0xB0, 0x00),
            green: Color::Rgb(0x3D, 0xD6, 0x8C),
            cyan: Color::Rgb(0x4D, 0xD0, 0xE1),
            blue: Color::Rgb(0x4C, 0x9A, 0xFF),
            rose: Color::Rgb(0xFF, 0x5C, 0x8A),
            selection_bg: Color::Rgb(0x1E, 0x33, 0x52),
            selection_border: Color::Rgb(0x4C, 0x9A, 0xFF),
            card_bg: Color::Rgb(0x2A, 0x1F, 0x3D),
            staff_bg: Color::Rgb(0x3A, 0x2A, 0x12),
            tag_colors,
            category_colors,
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from the UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                tracing::warn!(key = %key, value = %value, "ignoring invalid color");
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "surface" => theme.surface = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "highlight" => theme.highlight = color,
                "dim" => theme.dim = color,
                "red" => theme.red = color,
                "amber" => theme.amber = color,
                "green" => theme.green = color,
                "cyan" => theme.cyan = color,
                "blue" => theme.blue = color,
                "rose" => theme.rose = color,
                "selection_bg" => theme.selection_bg = color,
                "selection_border" => theme.selection_border = color,
                "card_bg" => theme.card_bg = color,
                "staff_bg" => theme.staff_bg = color,
                _ => tracing::warn!(key = %key, "unknown theme color"),
            }
        }

        for (tag, value) in &ui.tag_colors {
            if let Some(color) = parse_hex_color(value) {
                theme.tag_colors.insert(tag.clone(), color);
            }
        }

        for (name, value) in &ui.category_colors {
            if let (Some(category), Some(color)) = (Category::parse(name), parse_hex_color(value)) {
                theme.category_colors.insert(category, color);
            }
        }

        theme
    }

    /// Get the color for a tag, falling back to the dim color
    pub fn tag_color(&self, tag: &str) -> Color {
        self.tag_colors.get(tag).copied().unwrap_or(self.dim)
    }

    pub fn category_color(&self, category: Category) -> Color {
        self.category_colors
            .get(&category)
            .copied()
            .unwrap_or(self.text)
    }

    pub fn weather_color(&self, icon: WeatherIcon) -> Color {
        match icon {
            WeatherIcon::Sun => self.amber,
            WeatherIcon::Snow => self.cyan,
            WeatherIcon::Rain => self.blue,
            WeatherIcon::Cloud => self.dim,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("#FF4444"),
            Some(Color::Rgb(0xFF, 0x44, 0x44))
        );
        assert_eq!(parse_hex_color("FF4444"), None); // missing #
        assert_eq!(parse_hex_color("#FF44"), None); // too short
        assert_eq!(parse_hex_color("#ZZZZZZ"), None); // invalid hex
    }

    #[test]
    fn test_default_tag_colors() {
        let theme = Theme::default();
        assert_eq!(theme.tag_color("必吃"), Color::Rgb(0xFF, 0xB0, 0x00));
        assert_eq!(theme.tag_color("必買"), Color::Rgb(0xFF, 0x5C, 0x8A));
        assert_eq!(theme.tag_color("unknown"), theme.dim);
    }

    #[test]
    fn test_every_category_has_a_color() {
        let theme = Theme::default();
        for category in Category::ALL {
            assert!(theme.category_colors.contains_key(&category));
        }
    }

    #[test]
    fn test_from_config_overrides() {
        let mut ui = UiConfig::default();
        ui.colors.insert("background".into(), "#000000".into());
        ui.colors.insert("highlight".into(), "not-a-color".into());
        ui.tag_colors.insert("custom".into(), "#112233".into());
        ui.category_colors.insert("Food".into(), "#010203".into());
        ui.category_colors.insert("lodging".into(), "#010203".into());

        let theme = Theme::from_config(&ui);
        assert_eq!(theme.background, Color::Rgb(0, 0, 0));
        assert_eq!(theme.highlight, Theme::default().highlight);
        assert_eq!(theme.tag_color("custom"), Color::Rgb(0x11, 0x22, 0x33));
        assert_eq!(
            theme.category_color(Category::Food),
            Color::Rgb(0x01, 0x02, 0x03)
        );
        assert_eq!(theme.category_colors.len(), Category::ALL.len());
        // Unchanged defaults still present
        assert_eq!(theme.text, Theme::default().text);
    }
}
