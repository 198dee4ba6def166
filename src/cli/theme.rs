//! Light/dark preference and the color tokens derived from it.

use colored::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Reads the persisted flag; anything other than `"dark"` (including
    /// an absent flag) means light.
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Pure mapping from the flag to its color set; two fixed variants.
    pub fn tokens(self) -> ThemeTokens {
        match self {
            Theme::Light => ThemeTokens {
                text: Color::Black,
                grid: Color::BrightBlack,
                tooltip_bg: Color::White,
                tooltip_title: Color::Black,
                tooltip_body: Color::BrightBlack,
            },
            Theme::Dark => ThemeTokens {
                text: Color::BrightWhite,
                grid: Color::BrightBlack,
                tooltip_bg: Color::Black,
                tooltip_title: Color::BrightWhite,
                tooltip_body: Color::White,
            },
        }
    }
}

/// Theme-dependent colors handed to the listing and the chart so they
/// never query global state themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTokens {
    pub text: Color,
    pub grid: Color,
    pub tooltip_bg: Color,
    pub tooltip_title: Color,
    pub tooltip_body: Color,
}

/// Tracks the current preference and derives tokens on demand.
pub struct ThemeController {
    current: Theme,
}

impl ThemeController {
    pub fn new(initial: Theme) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn tokens(&self) -> ThemeTokens {
        self.current.tokens()
    }

    /// Flips the preference and returns the new token set so dependents
    /// can re-render without another lookup. Persistence is the
    /// caller's move (the session owns the config file).
    pub fn toggle(&mut self) -> ThemeTokens {
        self.current = self.current.flipped();
        self.tokens()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_flag_defaults_to_light() {
        assert_eq!(Theme::from_flag(None), Theme::Light);
        assert_eq!(Theme::from_flag(Some("light")), Theme::Light);
        assert_eq!(Theme::from_flag(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_flag(Some("unknown")), Theme::Light);
    }

    #[test]
    fn toggle_flips_and_returns_matching_tokens() {
        let mut controller = ThemeController::new(Theme::Light);
        let tokens = controller.toggle();
        assert_eq!(controller.current(), Theme::Dark);
        assert_eq!(tokens, Theme::Dark.tokens());
        controller.toggle();
        assert_eq!(controller.current(), Theme::Light);
    }
}
