use std::fmt;
use std::str::FromStr;

use eframe::egui::Color32;
use serde::Serialize;

use crate::deck::DeckError;

/// Palette entries used by the deck themes.
mod palette {
    use eframe::egui::Color32;

    pub const BRAND_DARK: Color32 = Color32::from_rgb(0x0B, 0x1F, 0x2D);
    pub const BRAND: Color32 = Color32::from_rgb(0x0E, 0x6F, 0x63);
    pub const BRAND_LIGHT: Color32 = Color32::from_rgb(0x8A, 0xD9, 0xC5);

    pub const TEAL_900: Color32 = Color32::from_rgb(0x13, 0x4E, 0x4A);
    pub const SLATE_900: Color32 = Color32::from_rgb(0x0F, 0x17, 0x2A);
    pub const SLATE_950: Color32 = Color32::from_rgb(0x02, 0x06, 0x17);
    pub const CYAN_400: Color32 = Color32::from_rgb(0x22, 0xD3, 0xEE);
    pub const CYAN_500: Color32 = Color32::from_rgb(0x06, 0xB6, 0xD4);
    pub const BLUE_400: Color32 = Color32::from_rgb(0x60, 0xA5, 0xFA);
    pub const BLUE_500: Color32 = Color32::from_rgb(0x3B, 0x82, 0xF6);
    pub const BLUE_600: Color32 = Color32::from_rgb(0x25, 0x63, 0xEB);
    pub const INDIGO_500: Color32 = Color32::from_rgb(0x63, 0x66, 0xF1);
    pub const ORANGE_400: Color32 = Color32::from_rgb(0xFB, 0x92, 0x3C);
    pub const ORANGE_500: Color32 = Color32::from_rgb(0xF9, 0x73, 0x16);
    pub const ORANGE_900: Color32 = Color32::from_rgb(0x7C, 0x2D, 0x12);
    pub const PURPLE_900: Color32 = Color32::from_rgb(0x58, 0x1C, 0x87);
    pub const PINK_500: Color32 = Color32::from_rgb(0xEC, 0x48, 0x99);
    pub const EMERALD_400: Color32 = Color32::from_rgb(0x34, 0xD3, 0x99);
    pub const EMERALD_500: Color32 = Color32::from_rgb(0x10, 0xB9, 0x81);
    pub const EMERALD_900: Color32 = Color32::from_rgb(0x06, 0x4E, 0x3B);
    pub const LIME_400: Color32 = Color32::from_rgb(0xA3, 0xE6, 0x35);
}

/// Window background behind the slide card.
pub const PAGE_BACKGROUND: Color32 = Color32::from_rgb(0x05, 0x0B, 0x10);

/// Brand colors used by chrome that does not follow the slide theme.
pub const BRAND_DARK: Color32 = palette::BRAND_DARK;
pub const BRAND: Color32 = palette::BRAND;
pub const BRAND_LIGHT: Color32 = palette::BRAND_LIGHT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeName {
    Emerald,
    Aqua,
    Sunrise,
    Midnight,
    Forest,
}

impl ThemeName {
    pub fn all() -> &'static [ThemeName] {
        &[
            ThemeName::Emerald,
            ThemeName::Aqua,
            ThemeName::Sunrise,
            ThemeName::Midnight,
            ThemeName::Forest,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Emerald => "emerald",
            Self::Aqua => "aqua",
            Self::Sunrise => "sunrise",
            Self::Midnight => "midnight",
            Self::Forest => "forest",
        }
    }

    /// Style tokens for this theme.
    pub fn style(self) -> ThemeStyle {
        use palette::*;

        let black = Color32::BLACK;
        let white = Color32::WHITE;
        let (gradient, accent, accent_soft, glass) = match self {
            Self::Emerald => (
                [(BRAND_DARK, 0.9), (BRAND_DARK, 0.6), (black, 0.8)],
                BRAND,
                [(BRAND, 0.3), (BRAND_LIGHT, 0.2)],
                0.05,
            ),
            Self::Aqua => (
                [(TEAL_900, 0.9), (SLATE_900, 0.7), (black, 0.8)],
                CYAN_400,
                [(CYAN_500, 0.3), (BLUE_400, 0.2)],
                0.06,
            ),
            Self::Sunrise => (
                [(ORANGE_900, 0.9), (PURPLE_900, 0.7), (black, 0.8)],
                ORANGE_400,
                [(ORANGE_500, 0.3), (PINK_500, 0.2)],
                0.08,
            ),
            Self::Midnight => (
                [(SLATE_950, 0.9), (SLATE_900, 0.7), (black, 0.8)],
                BLUE_500,
                [(BLUE_600, 0.3), (INDIGO_500, 0.2)],
                0.05,
            ),
            Self::Forest => (
                [(EMERALD_900, 0.9), (TEAL_900, 0.7), (black, 0.8)],
                EMERALD_400,
                [(EMERALD_500, 0.3), (LIME_400, 0.2)],
                0.07,
            ),
        };

        ThemeStyle {
            name: self,
            gradient: gradient.map(|(c, a)| ThemeStyle::with_opacity(c, a)),
            accent,
            accent_soft: accent_soft.map(|(c, a)| ThemeStyle::with_opacity(c, a)),
            glass: ThemeStyle::with_opacity(white, glass),
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DeckError::MissingTheme(s.to_string()))
    }
}

/// Resolve a theme by name. Unknown names are a data-integrity error.
pub fn theme_style(name: &str) -> Result<ThemeStyle, DeckError> {
    name.parse::<ThemeName>().map(ThemeName::style)
}

/// Visual tokens applied to a slide's background and accents.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeStyle {
    pub name: ThemeName,
    /// Card background, top-left to bottom-right: from, via, to.
    pub gradient: [Color32; 3],
    pub accent: Color32,
    /// Soft glow behind the card: from, to.
    pub accent_soft: [Color32; 2],
    /// Tint of the frosted overlays on cards and pills.
    pub glass: Color32,
}

impl ThemeStyle {
    /// Apply opacity to a color
    pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
        let opacity = opacity.clamp(0.0, 1.0);
        Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), (opacity * 255.0) as u8)
    }

    /// White text at the given strength, faded by `opacity`.
    pub fn text(strength: f32, opacity: f32) -> Color32 {
        Self::with_opacity(Color32::WHITE, strength * opacity)
    }
}

/// Font sizes in reference pixels (1920x1080).
#[derive(Debug, Clone, Copy)]
pub struct Typography {
    pub eyebrow: f32,
    pub title: f32,
    pub subtitle: f32,
    pub description: f32,
    pub body: f32,
    pub detail: f32,
    pub small: f32,
}

impl Typography {
    pub const DEFAULT: Typography = Typography {
        eyebrow: 17.0,
        title: 58.0,
        subtitle: 29.0,
        description: 24.0,
        body: 23.0,
        detail: 20.0,
        small: 15.0,
    };
}

/// Linear interpolation between two colors (premultiplied space).
pub fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgba_premultiplied(
        mix(a.r(), b.r()),
        mix(a.g(), b.g()),
        mix(a.b(), b.b()),
        mix(a.a(), b.a()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_theme_name_round_trips() {
        for theme in ThemeName::all() {
            assert_eq!(theme.as_str().parse::<ThemeName>(), Ok(*theme));
        }
    }

    #[test]
    fn test_unknown_theme_is_missing() {
        let err = theme_style("neon").unwrap_err();
        assert_eq!(err, DeckError::MissingTheme("neon".to_string()));
        assert_eq!(err.to_string(), "missing theme: neon");
    }

    #[test]
    fn test_theme_names_are_case_sensitive() {
        assert!(theme_style("Emerald").is_err());
        assert!(theme_style("emerald").is_ok());
    }

    #[test]
    fn test_gradient_stop_alphas() {
        let style = ThemeName::Sunrise.style();
        assert_eq!(style.gradient[0].a(), (0.9f32 * 255.0) as u8);
        assert_eq!(style.gradient[1].a(), (0.7f32 * 255.0) as u8);
        assert_eq!(style.gradient[2].a(), (0.8f32 * 255.0) as u8);
        assert_eq!(style.accent, palette::ORANGE_400);
    }

    #[test]
    fn test_glass_tint_differs_per_theme() {
        assert!(ThemeName::Sunrise.style().glass.a() > ThemeName::Midnight.style().glass.a());
        assert_eq!(
            ThemeName::Emerald.style().glass,
            ThemeName::Midnight.style().glass
        );
    }

    #[test]
    fn test_with_opacity_clamps() {
        assert_eq!(ThemeStyle::with_opacity(Color32::WHITE, 2.0).a(), 255);
        assert_eq!(ThemeStyle::with_opacity(Color32::WHITE, -1.0).a(), 0);
    }

    #[test]
    fn test_lerp_color_endpoints() {
        let a = Color32::from_rgb(0, 0, 0);
        let b = Color32::from_rgb(200, 100, 50);
        assert_eq!(lerp_color(a, b, 0.0), a);
        assert_eq!(lerp_color(a, b, 1.0), b);
        assert_eq!(lerp_color(a, b, 0.5), Color32::from_rgb(100, 50, 25));
    }
}
