use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SEPARATORS: Regex = Regex::new(r"[-_\s]+").unwrap();
    static ref VERSION_TAG: Regex = Regex::new(r"(?i)^v\d+$").unwrap();
    static ref WORDS: Regex =
        Regex::new(r"\p{Lu}+\p{Ll}*|\p{Ll}+|\d+|[^\p{Lu}\p{Ll}\d]+").unwrap();
}

/// Words that describe a variant or subset rather than the family
const NON_FAMILY_WORDS: &[&str] = &[
    // style
    "italic", "oblique",
    // weight
    "thin", "hairline", "extralight", "ultralight", "light", "medium",
    "semibold", "demibold", "bold", "extrabold", "ultrabold",
    "black", "heavy", "extrablack", "ultrablack",
    "100", "200", "300", "400", "500", "600", "700", "800", "900", "950",
    "regular", "normal", "ext",
    // subsets
    "japanese", "vietnamese", "latin", "greek", "cyrillic",
];

/// First halves of camel-cased weights such as "ExtraLight" or "SemiBold"
const WEIGHT_PREFIXES: &[&str] = &["extra", "ultra", "semi", "demi"];

/// Second halves of camel-cased weights
const PREFIXED_WEIGHTS: &[&str] = &["light", "bold", "black"];

/// Family name as the text before the first `-`, used verbatim
pub fn family_basic(stem: &str) -> &str {
    stem.split('-').next().unwrap_or(stem)
}

/// Family name with variant keywords, subsets and version tags stripped.
///
/// A token is dropped only when every word in it is a keyword, so
/// "BoldItalic" goes while "ArchivoBlack" stays. Surviving camel-case tokens
/// are split into words ("IBMPlexSans" -> "IBM Plex Sans"); single-case
/// tokens are capitalised ("open" -> "Open", "JP" -> "Jp").
///
/// Returns an empty string when nothing but keywords is left.
pub fn family_enhanced(stem: &str) -> String {
    SEPARATORS
        .split(stem)
        .filter(|token| !token.is_empty() && !VERSION_TAG.is_match(token))
        .filter(|token| !is_variant_token(token))
        .flat_map(family_words)
        .collect::<Vec<String>>()
        .join(" ")
}

/// Whether `token` is made up of variant keywords only ("SemiBoldItalic", "700normal")
fn is_variant_token(token: &str) -> bool {
    let words: Vec<String> = split_words(token).iter().map(|w| w.to_lowercase()).collect();

    words.iter().enumerate().all(|(i, word)| {
        NON_FAMILY_WORDS.contains(&word.as_str())
            || (WEIGHT_PREFIXES.contains(&word.as_str())
                && words
                    .get(i + 1)
                    .is_some_and(|next| PREFIXED_WEIGHTS.contains(&next.as_str())))
    })
}

fn family_words(token: &str) -> Vec<String> {
    let camel_case = token.chars().any(char::is_uppercase) && token.chars().any(char::is_lowercase);

    split_words(token)
        .into_iter()
        .map(|word| if camel_case { upper_first(word) } else { capitalize(word) })
        .collect()
}

/// Split "OpenSans" into "Open", "Sans", "700normal" into "700", "normal"
/// and "IBMPlex" into "IBM", "Plex"
fn split_words(token: &str) -> Vec<&str> {
    let mut words = Vec::new();
    for m in WORDS.find_iter(token) {
        let word = m.as_str();
        match acronym_end(word) {
            Some(end) => {
                words.push(&word[..end]);
                words.push(&word[end..]);
            }
            None => words.push(word),
        }
    }
    words
}

/// Byte offset where an uppercase run stops being an acronym, as in "PT|Serif"
fn acronym_end(word: &str) -> Option<usize> {
    let upper: Vec<usize> = word
        .char_indices()
        .take_while(|(_, c)| c.is_uppercase())
        .map(|(i, _)| i)
        .collect();

    if upper.len() >= 2 && upper.len() < word.chars().count() {
        upper.last().copied()
    } else {
        None
    }
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Uppercase the first letter and lowercase the rest
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}
