//! The fixed named palette.
//!
//! Muted "Morandi" tones on a dark slate / warm off-white base. There is no
//! theming layer: every color a deck draws comes from this table.

use super::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Palette {
    /// Deep muted blue
    Primary,
    /// Muted green
    Secondary,
    /// Muted orange
    Accent,
    /// Muted purple
    Accent2,
    /// Dark background
    Dark,
    /// Secondary dark
    Dark2,
    /// Light beige background
    Light,
    /// Secondary light
    Light2,
    White,
    TextDark,
    TextLight,
    Red,
    Gold,
    GreenCheck,
    RedCross,
    /// Pale green used to highlight winning table cells
    Mint,
}

impl Palette {
    pub const ALL: [Palette; 16] = [
        Palette::Primary,
        Palette::Secondary,
        Palette::Accent,
        Palette::Accent2,
        Palette::Dark,
        Palette::Dark2,
        Palette::Light,
        Palette::Light2,
        Palette::White,
        Palette::TextDark,
        Palette::TextLight,
        Palette::Red,
        Palette::Gold,
        Palette::GreenCheck,
        Palette::RedCross,
        Palette::Mint,
    ];

    pub fn hex(self) -> u32 {
        match self {
            Palette::Primary => 0x4A6B8A,
            Palette::Secondary => 0x8B9D83,
            Palette::Accent => 0xC48B6A,
            Palette::Accent2 => 0xA07E93,
            Palette::Dark => 0x2D3A4A,
            Palette::Dark2 => 0x3A4A5C,
            Palette::Light => 0xF5F0EB,
            Palette::Light2 => 0xE8E0D8,
            Palette::White => 0xFFFFFF,
            Palette::TextDark => 0x2D2D2D,
            Palette::TextLight => 0x6B6B6B,
            Palette::Red => 0xC05C5C,
            Palette::Gold => 0xC4A35A,
            Palette::GreenCheck => 0x5A8C6A,
            Palette::RedCross => 0xB05A5A,
            Palette::Mint => 0xEEF5F0,
        }
    }

    pub fn color(self) -> Color {
        Color::hex(self.hex())
    }

    pub fn name(self) -> &'static str {
        match self {
            Palette::Primary => "primary",
            Palette::Secondary => "secondary",
            Palette::Accent => "accent",
            Palette::Accent2 => "accent2",
            Palette::Dark => "dark",
            Palette::Dark2 => "dark2",
            Palette::Light => "light",
            Palette::Light2 => "light2",
            Palette::White => "white",
            Palette::TextDark => "text_dark",
            Palette::TextLight => "text_light",
            Palette::Red => "red",
            Palette::Gold => "gold",
            Palette::GreenCheck => "green_check",
            Palette::RedCross => "red_cross",
            Palette::Mint => "mint",
        }
    }

    /// Reverse lookup, used when describing a page's background.
    pub fn from_color(color: Color) -> Option<Palette> {
        Self::ALL.into_iter().find(|entry| entry.color() == color)
    }
}

impl From<Palette> for Color {
    fn from(entry: Palette) -> Self {
        entry.color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_palette_hex_values() {
        assert_eq!(Palette::Dark.hex(), 0x2D3A4A);
        assert_eq!(Palette::Primary.color(), Color::rgb8(0x4A, 0x6B, 0x8A));
    }

    #[test]
    fn test_palette_names_are_unique() {
        let names: HashSet<_> = Palette::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(names.len(), Palette::ALL.len());
    }

    #[test]
    fn test_from_color_round_trips_every_entry() {
        for entry in Palette::ALL {
            assert_eq!(Palette::from_color(entry.color()), Some(entry));
        }
        assert_eq!(Palette::from_color(Color::rgb(0.01, 0.02, 0.03)), None);
    }

    #[test]
    fn test_into_color() {
        let color: Color = Palette::Gold.into();
        assert_eq!(color, Color::hex(0xC4A35A));
    }
}
