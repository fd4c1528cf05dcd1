use log::warn;
use crate::models::{FamilyNaming, FontRecord};
use crate::utils::naming::{family_basic, family_enhanced};
use super::weight::{determine_style, determine_weight};

/// Derive family, style and weight from a filename stem
pub fn classify(stem: &str, naming: FamilyNaming) -> FontRecord {
    FontRecord {
        family: family_name(stem, naming),
        style: determine_style(stem),
        weight: determine_weight(stem),
        file_name: stem.to_string(),
    }
}

/// Family name for `stem`; non-empty whenever `stem` is.
///
/// An enhanced name that filters down to nothing falls back to the basic
/// name, and an empty basic name falls back to the whole stem.
pub fn family_name(stem: &str, naming: FamilyNaming) -> String {
    let family = match naming {
        FamilyNaming::Basic => family_basic(stem).to_string(),
        FamilyNaming::Enhanced => family_enhanced(stem),
    };
    if !family.is_empty() {
        return family;
    }

    let basic = family_basic(stem);
    let fallback = if basic.is_empty() {
        stem
    } else {
        basic
    };
    warn!("No family name left in '{}', using '{}'", stem, fallback);
    fallback.to_string()
}
