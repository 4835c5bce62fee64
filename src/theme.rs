/// Colours for one theme. Every section reads these instead of hard-coding
/// its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub background_alt: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub card: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
    pub nav: &'static str,
}

const DARK_PALETTE: Palette = Palette {
    background: "#123524",
    background_alt: "#1c4b32",
    text: "#ffffff",
    muted: "#dcfce7",
    card: "#14532d",
    accent: "#fde047",
    accent_text: "#000000",
    nav: "#000000",
};

const LIGHT_PALETTE: Palette = Palette {
    background: "#f4f1e8",
    background_alt: "#e3ecd9",
    text: "#123524",
    muted: "#35553f",
    card: "#ffffff",
    accent: "#1c4b32",
    accent_text: "#ffffff",
    nav: "#ffffff",
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☀",
            Self::Dark => "☾",
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Self::Light => &LIGHT_PALETTE,
            Self::Dark => &DARK_PALETTE,
        }
    }

    /// Hex colour (no `#`) handed to the icon service so glyphs stay legible
    /// on the current background.
    pub fn icon_color(self) -> &'static str {
        match self {
            Self::Light => "123524",
            Self::Dark => "ffffff",
        }
    }

    pub fn signature_src(self) -> &'static str {
        match self {
            Self::Light => "/signature-light.png",
            Self::Dark => "/signature-dark.png",
        }
    }

    /// Inline style for `<html>`: the palette variables plus the matching
    /// `color-scheme`, so the canvas behind the page (overscroll, scrollbars)
    /// follows the theme too.
    pub fn root_style(self) -> String {
        format!("{} color-scheme: {};", self.palette().css_vars(), self.as_str())
    }
}

impl Palette {
    /// Custom properties set on the document root; the stylesheet only ever
    /// refers to these variables.
    pub fn css_vars(&self) -> String {
        format!(
            "--bg: {}; --bg-alt: {}; --text: {}; --muted: {}; --card: {}; --accent: {}; --accent-text: {}; --nav: {};",
            self.background,
            self.background_alt,
            self.text,
            self.muted,
            self.card,
            self.accent,
            self.accent_text,
            self.nav,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn toggling_alternates_between_themes() {
        let mut theme = Theme::default();

        for toggles in 1..=9 {
            theme = theme.toggled();
            assert_eq!(theme.is_dark(), toggles % 2 == 0, "after {toggles} toggles");
            assert_eq!(theme == Theme::Light, toggles % 2 == 1);
        }
    }

    #[test]
    fn toggle_label_names_the_other_theme() {
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light theme");
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
    }

    #[test]
    fn palettes_differ_and_feed_css_variables() {
        assert_ne!(Theme::Dark.palette(), Theme::Light.palette());

        let vars = Theme::Dark.palette().css_vars();
        assert!(vars.starts_with("--bg: #123524;"));
        assert!(vars.contains("--accent: #fde047;"));
    }

    #[test]
    fn root_style_carries_palette_and_color_scheme() {
        let dark = Theme::Dark.root_style();
        assert!(dark.starts_with("--bg: #123524;"));
        assert!(dark.ends_with("color-scheme: dark;"));

        let light = Theme::Light.root_style();
        assert!(light.contains("--bg: #f4f1e8;"));
        assert!(light.contains("--text: #123524;"));
        assert!(light.ends_with("color-scheme: light;"));
    }

    #[test]
    fn theme_specific_assets() {
        assert_eq!(Theme::Dark.icon_color(), "ffffff");
        assert_eq!(Theme::Light.signature_src(), "/signature-light.png");
    }
}
