#![forbid(unsafe_code)]

//! Message categories and the style-sheet boundary.
//!
//! A [`StyleSheet`] maps a [`Category`] to the colors, icon, and fonts a
//! surface needs to draw a message view. It is a pure lookup: the manager
//! queries it live on every draw, so swapping sheets affects the next draw
//! and nothing that was already laid out.

/// Classification of a message, driving its visual style.
///
/// Closed set: surfaces and style sheets can match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Something went wrong.
    Error,
    /// An operation completed.
    Success,
    /// Neutral information.
    Info,
}

/// RGBA color in 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel (0–255).
    pub r: u8,
    /// Green channel (0–255).
    pub g: u8,
    /// Blue channel (0–255).
    pub b: u8,
    /// Alpha channel (0–255, 255 = opaque).
    pub a: u8,
}

impl Color {
    /// Create an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with an explicit alpha channel.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    /// Regular weight.
    #[default]
    Regular,
    /// Bold weight.
    Bold,
}

/// A font request: point size plus weight.
///
/// The built-in metrics approximate a system UI face on a character grid:
/// real text rendering lives behind the surface, but sizing has to happen
/// before the view exists, so the layout path uses these estimates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    /// Point size.
    pub size: f32,
    /// Weight.
    pub weight: FontWeight,
}

impl Font {
    /// Create a regular-weight font at the given size.
    #[must_use]
    pub const fn regular(size: f32) -> Self {
        Self {
            size,
            weight: FontWeight::Regular,
        }
    }

    /// Create a bold font at the given size.
    #[must_use]
    pub const fn bold(size: f32) -> Self {
        Self {
            size,
            weight: FontWeight::Bold,
        }
    }

    /// Estimated advance of one display column, in points.
    #[must_use]
    pub fn advance(&self) -> f32 {
        self.size * 0.55
    }

    /// Line height in points.
    #[must_use]
    pub fn line_height(&self) -> f32 {
        (self.size * 1.2).ceil()
    }
}

/// Icon shown in the leading slot of a message view.
///
/// Surfaces that can draw images may map these to assets; glyph fallbacks
/// are provided for surfaces that cannot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    /// Error indicator (cross).
    Error,
    /// Success indicator (checkmark).
    Success,
    /// Information indicator.
    Info,
    /// Custom single glyph.
    Custom(char),
}

impl Icon {
    /// The default icon for a category.
    #[must_use]
    pub const fn for_category(category: Category) -> Self {
        match category {
            Category::Error => Self::Error,
            Category::Success => Self::Success,
            Category::Info => Self::Info,
        }
    }

    /// Glyph fallback for this icon.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Error => '\u{2717}',   // ✗
            Self::Success => '\u{2713}', // ✓
            Self::Info => '\u{2139}',    // ℹ
            Self::Custom(c) => c,
        }
    }
}

/// Look and feel of message views, keyed by category.
///
/// `background_color`, `stroke_color`, and `icon` must cover every category.
/// The font methods have defaults (bold 16 pt titles, regular 14 pt
/// descriptions); sheets override them only when they care.
pub trait StyleSheet {
    /// Background color of the message view.
    fn background_color(&self, category: Category) -> Color;

    /// Bottom stroke color of the message view.
    fn stroke_color(&self, category: Category) -> Color;

    /// Icon drawn in the leading slot.
    fn icon(&self, category: Category) -> Icon;

    /// Font for the title line(s).
    fn title_font(&self, category: Category) -> Font {
        let _ = category;
        Font::bold(16.0)
    }

    /// Font for the description line(s).
    fn description_font(&self, category: Category) -> Font {
        let _ = category;
        Font::regular(14.0)
    }
}

/// The built-in style sheet: translucent category-tinted backgrounds with a
/// darker stroke along the bottom edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStyleSheet;

impl StyleSheet for DefaultStyleSheet {
    fn background_color(&self, category: Category) -> Color {
        match category {
            Category::Error => Color::rgba(204, 57, 53, 230),
            Category::Success => Color::rgba(69, 163, 64, 230),
            Category::Info => Color::rgba(42, 112, 180, 230),
        }
    }

    fn stroke_color(&self, category: Category) -> Color {
        match category {
            Category::Error => Color::rgb(143, 40, 37),
            Category::Success => Color::rgb(48, 114, 45),
            Category::Info => Color::rgb(29, 78, 126),
        }
    }

    fn icon(&self, category: Category) -> Icon {
        Icon::for_category(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sheet_covers_every_category() {
        let sheet = DefaultStyleSheet;
        for category in [Category::Error, Category::Success, Category::Info] {
            let bg = sheet.background_color(category);
            let stroke = sheet.stroke_color(category);
            assert_ne!(
                Color::rgb(bg.r, bg.g, bg.b),
                Color::rgb(stroke.r, stroke.g, stroke.b),
                "stroke should differ from background for {category:?}"
            );
            assert_eq!(sheet.icon(category), Icon::for_category(category));
        }
    }

    #[test]
    fn default_fonts() {
        let sheet = DefaultStyleSheet;
        let title = sheet.title_font(Category::Info);
        let body = sheet.description_font(Category::Info);
        assert_eq!(title.weight, FontWeight::Bold);
        assert_eq!(body.weight, FontWeight::Regular);
        assert!(title.size > body.size);
    }

    #[test]
    fn font_override_via_trait_default() {
        struct BigTitles;
        impl StyleSheet for BigTitles {
            fn background_color(&self, _: Category) -> Color {
                Color::rgb(0, 0, 0)
            }
            fn stroke_color(&self, _: Category) -> Color {
                Color::rgb(255, 255, 255)
            }
            fn icon(&self, category: Category) -> Icon {
                Icon::for_category(category)
            }
            fn title_font(&self, _: Category) -> Font {
                Font::bold(24.0)
            }
        }

        let sheet = BigTitles;
        assert_eq!(sheet.title_font(Category::Error).size, 24.0);
        // Description font still falls back to the trait default.
        assert_eq!(sheet.description_font(Category::Error).size, 14.0);
    }

    #[test]
    fn icon_glyphs() {
        assert_eq!(Icon::Success.as_char(), '\u{2713}');
        assert_eq!(Icon::Error.as_char(), '\u{2717}');
        assert_eq!(Icon::Custom('*').as_char(), '*');
    }

    #[test]
    fn line_height_rounds_up() {
        assert_eq!(Font::regular(14.0).line_height(), 17.0);
        assert_eq!(Font::bold(16.0).line_height(), 20.0);
    }
}
