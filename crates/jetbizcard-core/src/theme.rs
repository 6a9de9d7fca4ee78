//! Theme configuration passed explicitly to every render function.
//!
//! Palettes and type scale follow the Material baseline the card was
//! designed against. The root screen always renders in light mode.

use serde::{Deserialize, Serialize};

/// Light or dark palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// The root screen ignores the system preference and always uses this mode.
pub const FORCED_THEME_MODE: ThemeMode = ThemeMode::Light;

// === Palette ===
pub const PURPLE_200: &str = "#BB86FC";
pub const PURPLE_500: &str = "#6200EE";
pub const PURPLE_700: &str = "#3700B3";
pub const WHITE: &str = "#FFFFFF";
pub const BLACK: &str = "#000000";
pub const LIGHT_GRAY: &str = "#CCCCCC";
pub const DARK_SURFACE: &str = "#121212";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub primary: String,
    pub primary_variant: String,
    pub background: String,
    pub surface: String,
    pub on_primary: String,
    pub on_surface: String,
    /// Card body, white in both modes
    pub card: String,
    /// Avatar rings and panel frames
    pub outline: String,
    /// Avatar tint behind the image (on_surface at half alpha)
    pub avatar_tint: String,
    pub divider: String,
}

/// One entry of the type scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Size in px
    pub size: u16,
    pub weight: u16,
    /// Letter spacing in thousandths of an em
    pub letter_spacing: i32,
    pub uppercase: bool,
}

impl TextStyle {
    const fn new(size: u16, weight: u16, letter_spacing: i32) -> Self {
        Self { size, weight, letter_spacing, uppercase: false }
    }

    /// CSS declarations for this style.
    pub fn css(&self) -> Vec<(&'static str, String)> {
        let mut decls = vec![
            ("font-size", format!("{}px", self.size)),
            ("font-weight", self.weight.to_string()),
            ("letter-spacing", format!("{}em", self.letter_spacing as f32 / 1000.0)),
        ];
        if self.uppercase {
            decls.push(("text-transform", "uppercase".to_string()));
        }
        decls
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Typography {
    pub font_family: String,
    pub h4: TextStyle,
    pub subtitle1: TextStyle,
    pub body1: TextStyle,
    pub body2: TextStyle,
    pub button: TextStyle,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font_family: "Roboto, 'Helvetica Neue', Arial, sans-serif".to_string(),
            h4: TextStyle::new(34, 400, 7),
            subtitle1: TextStyle::new(16, 400, 9),
            body1: TextStyle::new(16, 400, 31),
            body2: TextStyle::new(14, 400, 18),
            button: TextStyle { uppercase: true, ..TextStyle::new(14, 500, 89) },
        }
    }
}

/// Colors and typography threaded from the root screen down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub mode: ThemeMode,
    pub colors: ThemeColors,
    pub typography: Typography,
}

impl ThemeConfig {
    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            colors: ThemeColors {
                primary: PURPLE_500.to_string(),
                primary_variant: PURPLE_700.to_string(),
                background: WHITE.to_string(),
                surface: WHITE.to_string(),
                on_primary: WHITE.to_string(),
                on_surface: BLACK.to_string(),
                card: WHITE.to_string(),
                outline: LIGHT_GRAY.to_string(),
                avatar_tint: "rgba(0, 0, 0, 0.5)".to_string(),
                divider: "rgba(0, 0, 0, 0.12)".to_string(),
            },
            typography: Typography::default(),
        }
    }

    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            colors: ThemeColors {
                primary: PURPLE_200.to_string(),
                primary_variant: PURPLE_700.to_string(),
                background: DARK_SURFACE.to_string(),
                surface: DARK_SURFACE.to_string(),
                on_primary: BLACK.to_string(),
                on_surface: WHITE.to_string(),
                card: WHITE.to_string(),
                outline: LIGHT_GRAY.to_string(),
                avatar_tint: "rgba(255, 255, 255, 0.5)".to_string(),
                divider: "rgba(255, 255, 255, 0.12)".to_string(),
            },
            typography: Typography::default(),
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// The theme the root screen uses.
    pub fn forced() -> Self {
        Self::for_mode(FORCED_THEME_MODE)
    }
}
