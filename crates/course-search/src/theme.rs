use std::fmt;
use std::str::FromStr;

use console::Style;

/// Colour scheme for terminal output. Lives only for the current process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                primary: Style::new().color256(141).bold(),
                secondary: Style::new().color256(80),
                accent: Style::new().color256(220),
                text: Style::new().color256(255),
                muted: Style::new().color256(245),
                paid: Style::new().color256(203).bold(),
                free: Style::new().color256(114).bold(),
            },
            Theme::Light => Palette {
                primary: Style::new().color256(55).bold(),
                secondary: Style::new().color256(30),
                accent: Style::new().color256(172),
                text: Style::new().color256(235),
                muted: Style::new().color256(242),
                paid: Style::new().color256(160).bold(),
                free: Style::new().color256(28).bold(),
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("unknown theme `{other}` (expected `dark` or `light`)")),
        }
    }
}

/// Named styles a theme resolves to. Render code only refers to these names.
#[derive(Debug, Clone)]
pub struct Palette {
    pub primary: Style,
    pub secondary: Style,
    pub accent: Style,
    pub text: Style,
    pub muted: Style,
    pub paid: Style,
    pub free: Style,
}
