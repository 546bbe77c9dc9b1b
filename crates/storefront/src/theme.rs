use core::str::FromStr;

use serde::{Deserialize, Serialize};

use skintilla_core::DomainError;

/// Colour scheme preference, injected wherever a light/dark choice is made.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggle(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl core::fmt::Display for Theme {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        })
    }
}

impl FromStr for Theme {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(DomainError::validation(format!("unknown theme: {other}"))),
        }
    }
}

/// A value with a light and a dark variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub light: &'static str,
    pub dark: &'static str,
}

impl ColorPair {
    pub const fn new(light: &'static str, dark: &'static str) -> Self {
        Self { light, dark }
    }

    pub fn pick(&self, theme: Theme) -> &'static str {
        match theme {
            Theme::Light => self.light,
            Theme::Dark => self.dark,
        }
    }
}

/// Section backgrounds.
pub mod section_bg {
    use super::ColorPair;

    pub const CREAM: ColorPair = ColorPair::new("oklch(0.96 0.015 80)", "oklch(0.16 0.015 55)");
    pub const WARM_WHITE: ColorPair =
        ColorPair::new("oklch(0.98 0.008 80)", "oklch(0.18 0.015 55)");
    pub const PARCHMENT: ColorPair = ColorPair::new("oklch(0.93 0.02 75)", "oklch(0.20 0.015 55)");
    pub const ESPRESSO: ColorPair = ColorPair::new("oklch(0.25 0.03 55)", "oklch(0.12 0.01 55)");
}

/// Text colours.
pub mod text_color {
    use super::ColorPair;

    pub const HEADING: ColorPair = ColorPair::new("oklch(0.25 0.03 55)", "oklch(0.90 0.015 75)");
    pub const BODY: ColorPair = ColorPair::new("oklch(0.40 0.03 55)", "oklch(0.65 0.015 75)");
    pub const MUTED: ColorPair = ColorPair::new("oklch(0.50 0.03 55)", "oklch(0.55 0.015 55)");
}

/// Every section and text colour resolved for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub theme: Theme,
    pub cream: &'static str,
    pub warm_white: &'static str,
    pub parchment: &'static str,
    pub espresso: &'static str,
    pub heading: &'static str,
    pub body: &'static str,
    pub muted: &'static str,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        Self {
            theme,
            cream: section_bg::CREAM.pick(theme),
            warm_white: section_bg::WARM_WHITE.pick(theme),
            parchment: section_bg::PARCHMENT.pick(theme),
            espresso: section_bg::ESPRESSO.pick(theme),
            heading: text_color::HEADING.pick(theme),
            body: text_color::BODY.pick(theme),
            muted: text_color::MUTED.pick(theme),
        }
    }
}

impl From<Theme> for Palette {
    fn from(theme: Theme) -> Self {
        Self::for_theme(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
        assert!(Theme::Dark.is_dark());
        assert!(!Theme::default().is_dark());
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("DARK".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(" light".parse::<Theme>().unwrap(), Theme::Light);
        assert!(matches!("sepia".parse::<Theme>(), Err(DomainError::Validation(_))));
        assert_eq!(Theme::Dark.to_string(), "dark");
    }

    #[test]
    fn color_pair_follows_theme() {
        assert_eq!(section_bg::CREAM.pick(Theme::Light), "oklch(0.96 0.015 80)");
        assert_eq!(text_color::HEADING.pick(Theme::Dark), "oklch(0.90 0.015 75)");
    }

    #[test]
    fn palette_resolves_every_colour_for_the_theme() {
        let dark = Palette::for_theme(Theme::Dark);
        assert_eq!(dark.theme, Theme::Dark);
        assert_eq!(dark.cream, "oklch(0.16 0.015 55)");
        assert_eq!(dark.espresso, "oklch(0.12 0.01 55)");
        assert_eq!(dark.body, "oklch(0.65 0.015 75)");

        let light = Palette::from(Theme::Light);
        assert_eq!(light.warm_white, "oklch(0.98 0.008 80)");
        assert_eq!(light.parchment, "oklch(0.93 0.02 75)");
        assert_eq!(light.muted, "oklch(0.50 0.03 55)");
        assert_ne!(light, dark);
    }
}
