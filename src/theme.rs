use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two colour schemes the browser can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Day,
    Night,
}

/// The colour pair every widget derives its styles from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Foreground ink.
    pub dark: Color,
    /// Background paper.
    pub light: Color,
}

const INK: Color = Color::Rgb(10, 10, 20);
const PAPER: Color = Color::Rgb(255, 255, 255);

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Day, Theme::Night];

    pub fn palette(self) -> Palette {
        match self {
            Theme::Day => Palette {
                dark: INK,
                light: PAPER,
            },
            Theme::Night => Palette {
                dark: PAPER,
                light: INK,
            },
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Day => "Day",
            Theme::Night => "Night",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Day => Theme::Night,
            Theme::Night => Theme::Day,
        }
    }

    /// Startup theme from the terminal's dark-background hint, `Day` if unknown.
    pub fn detect() -> Self {
        Self::from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
    }

    /// Interpret a `COLORFGBG` value (`"fg;bg"` or `"fg;default;bg"`).
    ///
    /// Background colours 0-6 and 8 are the dark half of the 16-colour table.
    pub fn from_colorfgbg(value: Option<&str>) -> Self {
        let Some(bg) = value.and_then(|v| v.rsplit(';').next()) else {
            return Theme::Day;
        };
        match bg.trim().parse::<u8>() {
            Ok(0..=6 | 8) => Theme::Night,
            _ => Theme::Day,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Day => f.write_str("day"),
            Theme::Night => f.write_str("night"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" | "light" => Ok(Theme::Day),
            "night" | "dark" => Ok(Theme::Night),
            other => Err(format!("unknown theme '{}', expected day or night", other)),
        }
    }
}
