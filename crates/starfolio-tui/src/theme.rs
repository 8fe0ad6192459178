use ratatui::style::Color;
use starfolio_core::theme::ThemePreference;

/// Star brightness multiplier in light mode, where full-strength stars
/// would overpower the text.
pub const LIGHT_MODE_STAR_DIM: f32 = 0.2;

/// Resolved palette for one dark/light preference. Rebuilt on every
/// toggle; widgets only ever borrow it.
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub heading: Color,
    pub accent: Color,
    pub accent_alt: Color,
    pub border: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    /// Base star color before the per-star opacity scaling.
    pub star: (u8, u8, u8),
    /// Multiplier applied to every star's opacity.
    pub star_dim: f32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(0x0f, 0x0f, 0x1a),
            surface: Color::Rgb(0x1a, 0x1a, 0x2e),
            text: Color::Rgb(0xe2, 0xe8, 0xf0),
            muted: Color::Rgb(0x94, 0xa3, 0xb8),
            heading: Color::Rgb(0xf8, 0xfa, 0xfc),
            accent: Color::Rgb(0x8b, 0x5c, 0xf6),
            accent_alt: Color::Rgb(0x22, 0xd3, 0xee),
            border: Color::Rgb(0x33, 0x41, 0x55),
            success: Color::Rgb(0x4a, 0xde, 0x80),
            error: Color::Rgb(0xf8, 0x71, 0x71),
            warning: Color::Rgb(0xfb, 0xbf, 0x24),
            star: (0xe2, 0xe8, 0xf0),
            star_dim: 1.0,
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(0xf8, 0xfa, 0xfc),
            surface: Color::Rgb(0xee, 0xf2, 0xf7),
            text: Color::Rgb(0x1e, 0x29, 0x3b),
            muted: Color::Rgb(0x64, 0x74, 0x8b),
            heading: Color::Rgb(0x0f, 0x17, 0x2a),
            accent: Color::Rgb(0x7c, 0x3a, 0xed),
            accent_alt: Color::Rgb(0x06, 0x91, 0xa5),
            border: Color::Rgb(0xcb, 0xd5, 0xe1),
            success: Color::Rgb(0x16, 0xa3, 0x4a),
            error: Color::Rgb(0xdc, 0x26, 0x26),
            warning: Color::Rgb(0xd9, 0x77, 0x06),
            star: (0x47, 0x55, 0x69),
            star_dim: LIGHT_MODE_STAR_DIM,
        }
    }

    pub fn from_preference(pref: ThemePreference) -> Self {
        if pref.is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Star color at a given opacity, blended toward the background.
    pub fn star_color(&self, opacity: f32) -> Color {
        let alpha = (opacity * self.star_dim).clamp(0.0, 1.0);
        let (r, g, b) = self.star;
        let blend = |c: u8, bg: u8| -> u8 {
            (c as f32 * alpha + bg as f32 * (1.0 - alpha)).round() as u8
        };
        let (br, bg_, bb) = match self.bg {
            Color::Rgb(r, g, b) => (r, g, b),
            _ => (0, 0, 0),
        };
        Color::Rgb(blend(r, br), blend(g, bg_), blend(b, bb))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_preference() {
        let dark = Theme::from_preference(ThemePreference { is_dark: true });
        let light = Theme::from_preference(ThemePreference { is_dark: false });
        assert_eq!(dark.star_dim, 1.0);
        assert_eq!(light.star_dim, LIGHT_MODE_STAR_DIM);
        assert_ne!(format!("{:?}", dark.bg), format!("{:?}", light.bg));
    }

    #[test]
    fn test_star_color_fades_with_opacity() {
        let theme = Theme::dark();
        // Zero opacity blends fully into the background
        assert_eq!(theme.star_color(0.0), theme.bg);
        assert_ne!(theme.star_color(0.8), theme.bg);
    }
}
