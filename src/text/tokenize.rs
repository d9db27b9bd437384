//! Word tokenization: lowercasing, punctuation stripping, stop-word
//! filtering, and naive depluralization.

/// Articles, prepositions, conjunctions, and common pronouns dropped
/// during tokenization.
const STOP_WORDS: &[&str] = &[
    // articles
    "a", "an", "the",
    // prepositions
    "of", "in", "on", "at", "to", "for", "with", "from", "by", "into", "onto",
    // conjunctions
    "and", "or", "but", "nor",
    // pronouns
    "i", "you", "it", "its", "my", "your", "this", "that", "these", "those",
];

fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// Ordered suffix rules; first match wins. Only applied to tokens longer
/// than 3 characters.
fn depluralize(token: &str) -> String {
    if token.chars().count() <= 3 {
        return token.to_string();
    }
    if let Some(stem) = token.strip_suffix("ies") {
        return format!("{stem}y");
    }
    if let Some(stem) = token.strip_suffix("ves") {
        return format!("{stem}f");
    }
    if let Some(stem) = token.strip_suffix("ses") {
        return format!("{stem}s");
    }
    if let Some(stem) = token.strip_suffix('s') {
        return stem.to_string();
    }
    token.to_string()
}

/// Split text into canonical word tokens.
///
/// Lowercases, strips everything except letters/digits/whitespace/hyphens,
/// splits on whitespace-or-hyphen runs, drops stop words, and
/// depluralizes the survivors.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '-')
        .collect();

    cleaned
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|t| !t.is_empty() && !is_stop_word(t))
        .map(depluralize)
        .collect()
}

/// Shared match normalization: lowercase, strip every character that is
/// neither alphanumeric nor whitespace, collapse whitespace runs.
pub fn normalize(text: &str) -> String {
    let filtered: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();

    filtered.split_whitespace().collect::<Vec<_>>().join(" ")
}
