//! Cluster tokenizer.
//!
//! Clusters are extended grapheme clusters (UAX #29) that resolve to a known emoji.
//! Grapheme segmentation already keeps skin tone modifiers, ZWJ sequences,
//! keycaps and regional indicator pairs together, so most graphemes are
//! either a listed emoji or no emoji at all. Graphemes the table does not
//! list are repaired (see `clusters`) rather than dropped.
use unic_ucd::GeneralCategory;
use unicode_segmentation::UnicodeSegmentation;

const VARIATION_SELECTOR_15: char = '\u{FE0E}';
const VARIATION_SELECTOR_16: char = '\u{FE0F}';
const ZWJ: char = '\u{200D}';

/// Splits a text record into emoji clusters.
///
/// Implementors have to be pure: same input, same output.
pub trait Tokenize {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Default tokenizer, backed by the Unicode emoji table.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClusterTokenizer;

impl Tokenize for ClusterTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.graphemes(true).flat_map(clusters).collect()
    }
}

/// Returns the fully-qualified form of `grapheme` if it is an emoji.
///
/// Single codepoints that lack an emoji presentation selector (`❤` U+2764)
/// are looked up with U+FE0F appended first, so that `❤` and `❤️` end up
/// as the same cluster. Longer sequences missing the selector after their
/// first codepoint (`1⃣`) get it inserted there.
fn as_emoji(grapheme: &str) -> Option<String> {
    let mut chars = grapheme.chars();
    let (first, second) = (chars.next()?, chars.next());
    let presentation = match second {
        None if first != VARIATION_SELECTOR_16 => {
            let mut full = String::with_capacity(grapheme.len() + 3);
            full.push(first);
            full.push(VARIATION_SELECTOR_16);
            emojis::get(&full)
        }
        _ => None,
    };

    presentation
        .or_else(|| emojis::get(grapheme))
        .or_else(|| match second {
            Some(c) if c != VARIATION_SELECTOR_16 => {
                let mut full = String::with_capacity(grapheme.len() + 3);
                full.push(first);
                full.push(VARIATION_SELECTOR_16);
                full.push_str(&grapheme[first.len_utf8()..]);
                emojis::get(&full)
            }
            _ => None,
        })
        .map(|e| e.as_str().to_string())
}

/// ZWJ sequence made only of emoji, kept whole even when the table does not list it (`😂‍😭`).
fn as_zwj_sequence(grapheme: &str) -> Option<String> {
    if !grapheme.contains(ZWJ) {
        return None;
    }
    grapheme
        .split(ZWJ)
        .map(as_emoji)
        .collect::<Option<Vec<String>>>()
        .map(|parts| parts.join("\u{200D}"))
}

fn as_cluster(grapheme: &str) -> Option<String> {
    as_emoji(grapheme).or_else(|| as_zwj_sequence(grapheme))
}

/// Joiners, text presentation selectors and combining marks left dangling after an emoji.
fn is_trailing_noise(c: char) -> bool {
    c == ZWJ || c == VARIATION_SELECTOR_15 || GeneralCategory::of(c).is_mark()
}

/// Skin tone modifiers, meaningless without a base.
fn is_modifier(c: char) -> bool {
    ('\u{1F3FB}'..='\u{1F3FF}').contains(&c)
}

/// Emoji clusters of a single grapheme.
///
/// - a listed emoji or an all-emoji ZWJ sequence is one cluster,
/// - trailing noise is dropped before trying again (`🤌\u{200D}` -> `🤌`, `❤\u{FE0E}` -> `❤️`),
/// - whatever is left is split into the emoji it holds, longest match first (`😀🏻` -> `😀`).
fn clusters(grapheme: &str) -> Vec<String> {
    if let Some(cluster) = as_cluster(grapheme) {
        return vec![cluster];
    }
    if grapheme.chars().nth(1).is_none() {
        return Vec::new();
    }

    let trimmed = grapheme.trim_end_matches(is_trailing_noise);
    if trimmed.len() < grapheme.len() {
        if let Some(cluster) = as_cluster(trimmed) {
            return vec![cluster];
        }
    }
    components(trimmed)
}

fn components(text: &str) -> Vec<String> {
    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();

    let mut found = Vec::new();
    let mut start = 0;
    while start + 1 < bounds.len() {
        let from = bounds[start];
        let first = text[from..].chars().next();
        let longest = if first.map(is_modifier).unwrap_or(true) {
            None
        } else {
            (start + 1..bounds.len())
                .rev()
                .find_map(|end| as_emoji(&text[from..bounds[end]]).map(|e| (end, e)))
        };
        match longest {
            Some((end, emoji)) => {
                found.push(emoji);
                start = end;
            }
            None => start += 1,
        }
    }
    found
}

/// Checks that `text` is exactly one emoji cluster.
pub fn is_emoji(text: &str) -> bool {
    let mut graphemes = text.graphemes(true);
    match (graphemes.next(), graphemes.next()) {
        (Some(g), None) => as_cluster(g).is_some(),
        _ => false,
    }
}
