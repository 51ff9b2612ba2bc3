//! Coarse color labels for gamma-corrected readings

use crate::color::DisplayColor;

/// Default brightness limit for [`classify`]
pub const DEFAULT_LIMIT: u16 = 40;

/// Coarse color classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum ColorLabel {
    /// Red channel dominates and reaches the limit
    Red,
    /// Green channel dominates and reaches the limit
    Green,
    /// Blue channel dominates and reaches the limit
    Blue,
    /// Every channel is below a third of the limit
    Dark,
    /// Every channel is above a third of the limit
    White,
    /// Narrow band around a dim yellow
    Yellow,
    /// None of the above
    Other,
}

/// Classify a display color.
///
/// Rules are tried in order and the first match wins. `limit` takes part in
/// the dominant-channel rules, so a channel only counts as dominant once it
/// reaches `limit`; ties go to red, then green.
pub fn classify(color: DisplayColor, limit: u16) -> ColorLabel {
    let r = u16::from(color.red);
    let g = u16::from(color.green);
    let b = u16::from(color.blue);

    let brightest = r.max(g).max(b);
    let darkest = r.min(g).min(b);
    let ceiling = brightest.max(limit);

    // `x < limit / 3` and `x > limit / 3` are compared as `3x` against `limit`
    // to stay exact for limits that are not multiples of three.
    if ceiling == r {
        ColorLabel::Red
    } else if ceiling == g {
        ColorLabel::Green
    } else if ceiling == b {
        ColorLabel::Blue
    } else if u32::from(brightest) * 3 < u32::from(limit) {
        ColorLabel::Dark
    } else if u32::from(darkest) * 3 > u32::from(limit) {
        ColorLabel::White
    } else if (27..=35).contains(&r) && (15..=23).contains(&g) && (1..=7).contains(&b) {
        ColorLabel::Yellow
    } else {
        ColorLabel::Other
    }
}

impl DisplayColor {
    /// Shorthand for [`classify`]
    pub fn classify(&self, limit: u16) -> ColorLabel {
        classify(*self, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::RawSample;

    fn rgb(red: u8, green: u8, blue: u8) -> DisplayColor {
        DisplayColor { red, green, blue }
    }

    #[test]
    fn test_dominant_red_from_raw() {
        let color = RawSample {
            red: 90,
            green: 5,
            blue: 5,
            clear: 100,
        }
        .to_display_color();

        assert_eq!(classify(color, DEFAULT_LIMIT), ColorLabel::Red);
    }

    #[test]
    fn test_dark_when_limit_is_brightest() {
        let color = RawSample {
            red: 2,
            green: 2,
            blue: 2,
            clear: 50,
        }
        .to_display_color();

        assert_eq!(classify(color, DEFAULT_LIMIT), ColorLabel::Dark);
    }

    #[test]
    fn test_dominant_channels() {
        assert_eq!(classify(rgb(45, 0, 0), 40), ColorLabel::Red);
        assert_eq!(classify(rgb(0, 45, 0), 40), ColorLabel::Green);
        assert_eq!(classify(rgb(0, 0, 45), 40), ColorLabel::Blue);
        // equal to the limit still counts
        assert_eq!(classify(rgb(0, 40, 10), 40), ColorLabel::Green);
    }

    #[test]
    fn test_ties_resolve_in_rule_order() {
        assert_eq!(classify(rgb(100, 100, 100), 40), ColorLabel::Red);
        assert_eq!(classify(rgb(10, 100, 100), 40), ColorLabel::Green);
    }

    #[test]
    fn test_white_below_limit() {
        assert_eq!(classify(rgb(16, 16, 16), 40), ColorLabel::White);
    }

    #[test]
    fn test_dark_boundary() {
        // 40 / 3 = 13.33
        assert_eq!(classify(rgb(13, 13, 13), 40), ColorLabel::Dark);
        assert_eq!(classify(rgb(14, 14, 14), 40), ColorLabel::White);
        // 39 / 3 = 13 exactly, neither strictly below nor above
        assert_eq!(classify(rgb(13, 13, 13), 39), ColorLabel::Other);
    }

    #[test]
    fn test_yellow_band() {
        assert_eq!(classify(rgb(30, 20, 5), 40), ColorLabel::Yellow);
        assert_eq!(classify(rgb(36, 20, 5), 40), ColorLabel::Other);
        assert_eq!(classify(rgb(30, 20, 0), 40), ColorLabel::Other);
        // a dominant red wins before the yellow band is reached
        assert_eq!(classify(rgb(30, 20, 5), 20), ColorLabel::Red);
    }

    #[test]
    fn test_other() {
        assert_eq!(classify(rgb(20, 5, 10), 40), ColorLabel::Other);
    }
}
