use crate::models::FontStyle;

/// Weight keywords checked top to bottom, first match wins.
///
/// Overlapping names sit above the shorter name they contain:
/// "extrabold" before "bold", "extrablack" before "black".
pub const WEIGHT_TABLE: &[(&[&str], u16)] = &[
    (&["thin", "hairline", "100"], 100),
    (&["extralight", "ultralight", "200"], 200),
    (&["light", "300"], 300),
    (&["medium", "500"], 500),
    (&["semibold", "demibold", "600"], 600),
    (&["extrabold", "ultrabold", "800"], 800),
    (&["bold", "700"], 700),
    (&["extrablack", "ultrablack", "950"], 950),
    (&["black", "heavy", "900"], 900),
];

/// Weight used when no keyword matches
pub const DEFAULT_WEIGHT: u16 = 400;

/// Determine the weight value from a filename stem
pub fn determine_weight(stem: &str) -> u16 {
    let stem_lower = stem.to_lowercase();

    WEIGHT_TABLE
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| stem_lower.contains(k)))
        .map(|&(_, weight)| weight)
        .unwrap_or(DEFAULT_WEIGHT)
}

/// Determine the style from a filename stem
pub fn determine_style(stem: &str) -> FontStyle {
    let stem_lower = stem.to_lowercase();

    match &stem_lower {
        s if s.contains("italic") => FontStyle::Italic,
        s if s.contains("oblique") => FontStyle::Oblique,
        _ => FontStyle::Normal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_keywords() {
        assert_eq!(determine_weight("Foo-Thin"), 100);
        assert_eq!(determine_weight("Foo-Hairline"), 100);
        assert_eq!(determine_weight("Foo-ExtraLight"), 200);
        assert_eq!(determine_weight("Foo-UltraLight"), 200);
        assert_eq!(determine_weight("Foo-Light"), 300);
        assert_eq!(determine_weight("Foo-Regular"), 400);
        assert_eq!(determine_weight("Foo-Medium"), 500);
        assert_eq!(determine_weight("Foo-SemiBold"), 600);
        assert_eq!(determine_weight("Foo-DemiBold"), 600);
        assert_eq!(determine_weight("Foo-Bold"), 700);
        assert_eq!(determine_weight("Foo-ExtraBold"), 800);
        assert_eq!(determine_weight("Foo-UltraBold"), 800);
        assert_eq!(determine_weight("Foo-Black"), 900);
        assert_eq!(determine_weight("Foo-Heavy"), 900);
        assert_eq!(determine_weight("Foo-ExtraBlack"), 950);
        assert_eq!(determine_weight("Foo-UltraBlack"), 950);
    }

    #[test]
    fn test_weight_numeric() {
        assert_eq!(determine_weight("Foo-100"), 100);
        assert_eq!(determine_weight("Foo-200"), 200);
        assert_eq!(determine_weight("Foo-300"), 300);
        assert_eq!(determine_weight("Foo-400"), 400);
        assert_eq!(determine_weight("Foo-500"), 500);
        assert_eq!(determine_weight("Foo-600"), 600);
        assert_eq!(determine_weight("OpenSans-v18-latin-700normal"), 700);
        assert_eq!(determine_weight("Foo-800"), 800);
        assert_eq!(determine_weight("Foo-900"), 900);
        assert_eq!(determine_weight("Foo-950"), 950);
    }

    #[test]
    fn test_weight_is_case_insensitive() {
        assert_eq!(determine_weight("FOO-BOLD"), 700);
        assert_eq!(determine_weight("foo-extrablack"), 950);
    }

    #[test]
    fn test_weight_defaults_to_regular() {
        assert_eq!(determine_weight("Foo"), 400);
        assert_eq!(determine_weight(""), 400);
        assert_eq!(determine_weight("Foo-Italic"), 400);
    }

    #[test]
    fn test_style_priority() {
        assert_eq!(determine_style("Roboto-BoldItalic"), FontStyle::Italic);
        assert_eq!(determine_style("Roboto-ITALIC"), FontStyle::Italic);
        assert_eq!(determine_style("Roboto-ObliqueItalic"), FontStyle::Italic);
        assert_eq!(determine_style("Roboto-Oblique"), FontStyle::Oblique);
        assert_eq!(determine_style("Roboto-Bold"), FontStyle::Normal);
    }
}
