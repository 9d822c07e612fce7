//! # Theme
//!
//! Tile palette and sizing, built once at startup and handed to the
//! renderer by reference. Nothing here changes after construction.

use std::collections::BTreeMap;
use std::str::FromStr;

use log::warn;
use ratatui::style::Color;

use crate::core::board::{SIZE, Tile};
use crate::core::config::ThemeConfig;

/// Title shown in the title bar and the terminal window.
pub const WINDOW_TITLE: &str = "2048 Game - 6x6";

/// Logical canvas width, split evenly between columns.
pub const BOARD_WIDTH: u16 = 60;
/// Logical canvas height. Terminal glyphs are about twice as tall as wide.
pub const BOARD_HEIGHT: u16 = 30;
pub const CELL_WIDTH: u16 = BOARD_WIDTH / SIZE as u16;
pub const CELL_HEIGHT: u16 = BOARD_HEIGHT / SIZE as u16;

const BACKGROUND: Color = Color::Rgb(187, 173, 160);
const FALLBACK: Color = Color::Rgb(60, 58, 50);
const DARK_TEXT: Color = Color::Rgb(0, 0, 0);
const LIGHT_TEXT: Color = Color::Rgb(255, 255, 255);

const DEFAULT_PALETTE: [(Tile, Color); 12] = [
    (0, Color::Rgb(205, 193, 180)),
    (2, Color::Rgb(238, 228, 218)),
    (4, Color::Rgb(237, 224, 200)),
    (8, Color::Rgb(242, 177, 121)),
    (16, Color::Rgb(245, 149, 99)),
    (32, Color::Rgb(246, 124, 95)),
    (64, Color::Rgb(246, 94, 59)),
    (128, Color::Rgb(237, 207, 114)),
    (256, Color::Rgb(237, 204, 97)),
    (512, Color::Rgb(237, 200, 80)),
    (1024, Color::Rgb(237, 197, 63)),
    (2048, Color::Rgb(237, 194, 46)),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub fallback: Color,
    tiles: BTreeMap<Tile, Color>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: BACKGROUND,
            fallback: FALLBACK,
            tiles: DEFAULT_PALETTE.into_iter().collect(),
        }
    }
}

impl Theme {
    /// Default palette with any valid overrides from config applied.
    ///
    /// Unparseable colours and non-numeric tile keys are logged and skipped.
    pub fn from_config(config: &ThemeConfig) -> Self {
        let mut theme = Self::default();

        if let Some(color) = config
            .background
            .as_deref()
            .and_then(|s| parse_color("background", s))
        {
            theme.background = color;
        }
        if let Some(color) = config
            .fallback
            .as_deref()
            .and_then(|s| parse_color("fallback", s))
        {
            theme.fallback = color;
        }
        if let Some(color) = config.empty.as_deref().and_then(|s| parse_color("empty", s)) {
            theme.tiles.insert(0, color);
        }

        for (key, value) in &config.tiles {
            let Ok(tile) = key.parse::<Tile>() else {
                warn!("Ignoring theme entry for non-numeric tile '{}'", key);
                continue;
            };
            if let Some(color) = parse_color(key, value) {
                theme.tiles.insert(tile, color);
            }
        }

        theme
    }

    /// Cell fill for a tile value.
    pub fn tile_color(&self, value: Tile) -> Color {
        self.tiles.get(&value).copied().unwrap_or(self.fallback)
    }

    /// Numeral colour: dark on the two lightest tiles, light on the rest.
    pub fn text_color(&self, value: Tile) -> Color {
        if value <= 4 { DARK_TEXT } else { LIGHT_TEXT }
    }
}

fn parse_color(name: &str, value: &str) -> Option<Color> {
    match Color::from_str(value) {
        Ok(color) => Some(color),
        Err(_) => {
            warn!("Invalid theme colour for {}: '{}'", name, value);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_size_divides_canvas() {
        assert_eq!(CELL_WIDTH, 10);
        assert_eq!(CELL_HEIGHT, 5);
    }

    #[test]
    fn test_default_palette() {
        let theme = Theme::default();
        assert_eq!(theme.tile_color(0), Color::Rgb(205, 193, 180));
        assert_eq!(theme.tile_color(2), Color::Rgb(238, 228, 218));
        assert_eq!(theme.tile_color(2048), Color::Rgb(237, 194, 46));
    }

    #[test]
    fn test_values_outside_palette_use_fallback() {
        let theme = Theme::default();
        assert_eq!(theme.tile_color(4096), FALLBACK);
        assert_eq!(theme.tile_color(3), FALLBACK);
    }

    #[test]
    fn test_text_color_threshold() {
        let theme = Theme::default();
        assert_eq!(theme.text_color(2), DARK_TEXT);
        assert_eq!(theme.text_color(4), DARK_TEXT);
        assert_eq!(theme.text_color(8), LIGHT_TEXT);
        assert_eq!(theme.text_color(4096), LIGHT_TEXT);
    }

    #[test]
    fn test_config_overrides() {
        let mut tiles = BTreeMap::new();
        tiles.insert("4096".to_string(), "#102030".to_string());
        tiles.insert("2".to_string(), "red".to_string());
        let config = ThemeConfig {
            background: Some("#000000".to_string()),
            empty: Some("#010101".to_string()),
            fallback: None,
            tiles,
        };
        let theme = Theme::from_config(&config);
        assert_eq!(theme.background, Color::Rgb(0, 0, 0));
        assert_eq!(theme.tile_color(0), Color::Rgb(1, 1, 1));
        assert_eq!(theme.tile_color(4096), Color::Rgb(16, 32, 48));
        assert_eq!(theme.tile_color(2), Color::Red);
        assert_eq!(theme.fallback, FALLBACK);
    }

    #[test]
    fn test_bad_overrides_are_skipped() {
        let mut tiles = BTreeMap::new();
        tiles.insert("two".to_string(), "#ffffff".to_string());
        tiles.insert("8".to_string(), "not-a-colour".to_string());
        let config = ThemeConfig {
            background: Some("#zzzzzz".to_string()),
            tiles,
            ..Default::default()
        };
        assert_eq!(Theme::from_config(&config), Theme::default());
    }
}
