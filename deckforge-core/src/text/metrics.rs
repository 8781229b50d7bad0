use crate::text::Font;
use std::collections::HashMap;

/// Character width information for the fonts the writer references.
/// All widths are in 1/1000 of a unit (font size 1.0)
pub struct FontMetrics {
    widths: HashMap<char, u16>,
    default_width: u16,
}

impl FontMetrics {
    fn new(default_width: u16) -> Self {
        Self {
            widths: HashMap::new(),
            default_width,
        }
    }

    fn with_widths(mut self, widths: &[(char, u16)]) -> Self {
        for &(ch, width) in widths {
            self.widths.insert(ch, width);
        }
        self
    }

    pub fn char_width(&self, ch: char) -> u16 {
        self.widths.get(&ch).copied().unwrap_or(self.default_width)
    }
}

impl Clone for FontMetrics {
    fn clone(&self) -> Self {
        Self {
            widths: self.widths.clone(),
            default_width: self.default_width,
        }
    }
}

/// Full-width advance used for CJK ideographs, punctuation and symbols.
const CJK_ADVANCE: u16 = 1000;

lazy_static::lazy_static! {
    static ref FONT_METRICS: HashMap<Font, FontMetrics> = {
        let mut metrics = HashMap::new();

        // Helvetica
        metrics.insert(Font::Helvetica, FontMetrics::new(556).with_widths(&[
            (' ', 278), ('!', 278), ('"', 355), ('#', 556), ('$', 556), ('%', 889),
            ('&', 667), ('\'', 191), ('(', 333), (')', 333), ('*', 389), ('+', 584),
            (',', 278), ('-', 333), ('.', 278), ('/', 278), ('0', 556), ('1', 556),
            ('2', 556), ('3', 556), ('4', 556), ('5', 556), ('6', 556), ('7', 556),
            ('8', 556), ('9', 556), (':', 278), (';', 278), ('<', 584), ('=', 584),
            ('>', 584), ('?', 556), ('@', 1015), ('A', 667), ('B', 667), ('C', 722),
            ('D', 722), ('E', 667), ('F', 611), ('G', 778), ('H', 722), ('I', 278),
            ('J', 500), ('K', 667), ('L', 556), ('M', 833), ('N', 722), ('O', 778),
            ('P', 667), ('Q', 778), ('R', 722), ('S', 667), ('T', 611), ('U', 722),
            ('V', 667), ('W', 944), ('X', 667), ('Y', 667), ('Z', 611), ('[', 278),
            ('\\', 278), (']', 278), ('^', 469), ('_', 556), ('`', 333), ('a', 556),
            ('b', 556), ('c', 500), ('d', 556), ('e', 556), ('f', 278), ('g', 556),
            ('h', 556), ('i', 222), ('j', 222), ('k', 500), ('l', 222), ('m', 833),
            ('n', 556), ('o', 556), ('p', 556), ('q', 556), ('r', 333), ('s', 500),
            ('t', 278), ('u', 556), ('v', 500), ('w', 722), ('x', 500), ('y', 500),
            ('z', 500), ('{', 334), ('|', 260), ('}', 334), ('~', 584),
        ]));

        // Helvetica Bold
        metrics.insert(Font::HelveticaBold, FontMetrics::new(611).with_widths(&[
            (' ', 278), ('!', 333), ('"', 474), ('#', 556), ('$', 556), ('%', 889),
            ('&', 722), ('\'', 238), ('(', 333), (')', 333), ('*', 389), ('+', 584),
            (',', 278), ('-', 333), ('.', 278), ('/', 278), ('0', 556), ('1', 556),
            ('2', 556), ('3', 556), ('4', 556), ('5', 556), ('6', 556), ('7', 556),
            ('8', 556), ('9', 556), (':', 333), (';', 333), ('<', 584), ('=', 584),
            ('>', 584), ('?', 611), ('@', 975), ('A', 722), ('B', 722), ('C', 722),
            ('D', 722), ('E', 667), ('F', 611), ('G', 778), ('H', 722), ('I', 278),
            ('J', 556), ('K', 722), ('L', 611), ('M', 833), ('N', 722), ('O', 778),
            ('P', 667), ('Q', 778), ('R', 722), ('S', 667), ('T', 611), ('U', 722),
            ('V', 667), ('W', 944), ('X', 667), ('Y', 667), ('Z', 611), ('[', 333),
            ('\\', 278), (']', 333), ('^', 584), ('_', 556), ('`', 333), ('a', 556),
            ('b', 611), ('c', 556), ('d', 611), ('e', 556), ('f', 333), ('g', 611),
            ('h', 611), ('i', 278), ('j', 278), ('k', 556), ('l', 278), ('m', 889),
            ('n', 611), ('o', 611), ('p', 611), ('q', 611), ('r', 389), ('s', 556),
            ('t', 333), ('u', 611), ('v', 556), ('w', 778), ('x', 556), ('y', 556),
            ('z', 500), ('{', 389), ('|', 280), ('}', 389), ('~', 584),
        ]));

        metrics.insert(Font::CjkSung, FontMetrics::new(CJK_ADVANCE));

        metrics
    };
}

/// Measure the width of a text string in a given font and size
pub fn measure_text(text: &str, font: Font, font_size: f64) -> f64 {
    let width_units: u32 = text
        .chars()
        .map(|ch| advance_units(ch, font) as u32)
        .sum();

    (width_units as f64 / 1000.0) * font_size
}

/// Measure the width of a single character
pub fn measure_char(ch: char, font: Font, font_size: f64) -> f64 {
    (advance_units(ch, font) as f64 / 1000.0) * font_size
}

fn advance_units(ch: char, font: Font) -> u16 {
    FONT_METRICS
        .get(&font)
        .map(|metrics| metrics.char_width(ch))
        .unwrap_or(CJK_ADVANCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_metrics_creation() {
        let metrics = FontMetrics::new(500);
        assert_eq!(metrics.char_width('A'), 500);
        assert_eq!(metrics.char_width('z'), 500);
    }

    #[test]
    fn test_font_metrics_with_widths() {
        let metrics = FontMetrics::new(500).with_widths(&[('A', 600), ('i', 200)]);
        assert_eq!(metrics.char_width('A'), 600);
        assert_eq!(metrics.char_width('i'), 200);
        assert_eq!(metrics.char_width('B'), 500);
    }

    #[test]
    fn test_every_font_has_metrics() {
        for font in [Font::Helvetica, Font::HelveticaBold, Font::CjkSung] {
            assert!(FONT_METRICS.contains_key(&font), "{font:?} missing");
        }
    }

    #[test]
    fn test_measure_helvetica() {
        // H=722 e=556 l=222 l=222 o=556 -> 2278
        let width = measure_text("Hello", Font::Helvetica, 10.0);
        assert!((width - 22.78).abs() < 1e-9);
    }

    #[test]
    fn test_bold_is_wider() {
        let regular = measure_text("94Cram", Font::Helvetica, 12.0);
        let bold = measure_text("94Cram", Font::HelveticaBold, 12.0);
        assert!(bold > regular);
    }

    #[test]
    fn test_cjk_is_full_width() {
        assert_eq!(measure_text("智慧補教", Font::CjkSung, 20.0), 80.0);
        assert_eq!(measure_char('✓', Font::CjkSung, 14.0), 14.0);
    }

    #[test]
    fn test_measure_empty() {
        assert_eq!(measure_text("", Font::Helvetica, 12.0), 0.0);
    }
}
