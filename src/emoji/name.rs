//! Canonical emoji names.
//!
//! Names follow the CLDR short name, lowercase words joined by `_`
//! (`thumbs up: light skin tone` -> `thumbs_up_light_skin_tone`),
//! then skin tone qualifiers are removed (`thumbs_up`).
use itertools::Itertools;
use unicode_segmentation::UnicodeSegmentation;

const SKIN_TONES: [&str; 5] = [
    "_light_skin_tone",
    "_medium-light_skin_tone",
    "_medium_skin_tone",
    "_medium-dark_skin_tone",
    "_dark_skin_tone",
];

/// Canonical, skin-tone-free name of an emoji cluster.
///
/// Text that is not a single emoji is returned unchanged.
pub fn canonical_name(cluster: &str) -> String {
    if cluster.graphemes(true).count() != 1 {
        return cluster.to_string();
    }
    match lookup(cluster) {
        Some(emoji) => strip_skin_tone(&snake_name(emoji.name())),
        None => cluster.to_string(),
    }
}

fn lookup(cluster: &str) -> Option<&'static emojis::Emoji> {
    emojis::get(cluster).or_else(|| {
        // bare codepoints like U+2764 are stored with their presentation selector
        let mut full = cluster.to_string();
        full.push('\u{FE0F}');
        emojis::get(&full)
    })
}

/// `flag: Italy` -> `flag_Italy`
fn snake_name(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| !matches!(c, ':' | ',' | '.' | '!' | '"' | '“' | '”' | '’'))
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .join("_")
}

/// Removes every skin tone qualifier from a snake case name.
pub fn strip_skin_tone(name: &str) -> String {
    SKIN_TONES
        .iter()
        .fold(name.to_string(), |acc, tone| acc.replace(tone, ""))
}
