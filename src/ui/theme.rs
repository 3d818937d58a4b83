use ratatui::style::Color;

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub secondary: ColorSpec,
    pub accent: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_secondary: ColorSpec,
    pub text_muted: ColorSpec,

    // Background colors
    pub background: ColorSpec,
    pub surface: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,
    pub info: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

const fn rgb(r: u8, g: u8, b: u8) -> ColorSpec {
    ColorSpec { r, g, b }
}

impl ColorSpec {
    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }

    /// Linear blend from `self` (t = 0) to `other` (t = 1).
    ///
    pub fn blend(&self, other: &ColorSpec, t: f32) -> ColorSpec {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        ColorSpec {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::github_dark()
    }
}

impl Theme {
    /// GitHub Dark theme.
    ///
    pub fn github_dark() -> Self {
        Theme {
            name: "github-dark".to_string(),
            primary: rgb(88, 166, 255),    // Blue
            secondary: rgb(63, 185, 80),   // Green
            accent: rgb(210, 168, 255),    // Purple
            text: rgb(230, 237, 243),      // Foreground
            text_secondary: rgb(201, 209, 217),
            text_muted: rgb(125, 133, 144),
            background: rgb(13, 17, 23),   // Canvas
            surface: rgb(22, 27, 34),
            success: rgb(63, 185, 80),
            warning: rgb(210, 153, 34),
            error: rgb(248, 81, 73),
            info: rgb(121, 192, 255),
            border_active: rgb(88, 166, 255),
            border_normal: rgb(48, 54, 61),
            highlight_bg: rgb(31, 111, 235),
            highlight_fg: rgb(255, 255, 255),
        }
    }

    /// GitHub Light theme.
    ///
    pub fn github_light() -> Self {
        Theme {
            name: "github-light".to_string(),
            primary: rgb(9, 105, 218),
            secondary: rgb(26, 127, 55),
            accent: rgb(130, 80, 223),
            text: rgb(31, 35, 40),
            text_secondary: rgb(66, 74, 83),
            text_muted: rgb(101, 109, 118),
            background: rgb(255, 255, 255),
            surface: rgb(246, 248, 250),
            success: rgb(26, 127, 55),
            warning: rgb(154, 103, 0),
            error: rgb(207, 34, 46),
            info: rgb(5, 80, 174),
            border_active: rgb(9, 105, 218),
            border_normal: rgb(208, 215, 222),
            highlight_bg: rgb(9, 105, 218),
            highlight_fg: rgb(255, 255, 255),
        }
    }

    /// Dracula theme.
    ///
    pub fn dracula() -> Self {
        Theme {
            name: "dracula".to_string(),
            primary: rgb(189, 147, 249),
            secondary: rgb(80, 250, 123),
            accent: rgb(255, 121, 198),
            text: rgb(248, 248, 242),
            text_secondary: rgb(191, 191, 191),
            text_muted: rgb(98, 114, 164),
            background: rgb(40, 42, 54),
            surface: rgb(68, 71, 90),
            success: rgb(80, 250, 123),
            warning: rgb(241, 250, 140),
            error: rgb(255, 85, 85),
            info: rgb(139, 233, 253),
            border_active: rgb(189, 147, 249),
            border_normal: rgb(68, 71, 90),
            highlight_bg: rgb(189, 147, 249),
            highlight_fg: rgb(40, 42, 54),
        }
    }

    /// Get theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "github-dark" => Some(Self::github_dark()),
            "github-light" => Some(Self::github_light()),
            "dracula" => Some(Self::dracula()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec![
            "github-dark".to_string(),
            "github-light".to_string(),
            "dracula".to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_theme_resolves() {
        for name in Theme::available_themes() {
            let theme = Theme::from_name(&name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
        assert_eq!(Theme::default().name, "github-dark");
    }

    #[test]
    fn test_blend_endpoints_and_midpoint() {
        let black = rgb(0, 0, 0);
        let white = rgb(255, 255, 255);
        assert_eq!(black.blend(&white, 0.0), black);
        assert_eq!(black.blend(&white, 1.0), white);
        assert_eq!(black.blend(&white, 0.5), rgb(128, 128, 128));
        assert_eq!(black.blend(&white, 7.0), white);
    }
}
