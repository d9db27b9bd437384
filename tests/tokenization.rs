use curbside_core::text::{normalize, tokenize, trigram_similarity, trigrams};

#[test]
fn tokenize_lowercases_and_depluralizes() {
    assert_eq!(tokenize("Plastic Bottles"), vec!["plastic", "bottle"]);
}

#[test]
fn tokenize_drops_stop_words() {
    assert_eq!(tokenize("a bag of chips"), vec!["bag", "chip"]);
    assert_eq!(tokenize("the can in my bin"), vec!["can", "bin"]);
}

#[test]
fn tokenize_splits_on_hyphens() {
    assert_eq!(tokenize("e-waste"), vec!["e", "waste"]);
    assert_eq!(tokenize("single-use cups"), vec!["single", "use", "cup"]);
}

#[test]
fn tokenize_strips_punctuation() {
    assert_eq!(tokenize("jar (glass, empty)!"), vec!["jar", "glas", "empty"]);
}

#[test]
fn depluralization_rules_apply_in_order() {
    // -ies -> -y
    assert_eq!(tokenize("batteries"), vec!["battery"]);
    // -ves -> -f
    assert_eq!(tokenize("leaves"), vec!["leaf"]);
    // -ses -> -s
    assert_eq!(tokenize("glasses"), vec!["glass"]);
    // trailing -s
    assert_eq!(tokenize("cartons"), vec!["carton"]);
    // tokens of 3 characters or fewer are left alone
    assert_eq!(tokenize("gas cans"), vec!["gas", "can"]);
}

#[test]
fn tokenize_empty_and_whitespace() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("   \t  ").is_empty());
    assert!(tokenize("the of and").is_empty());
}

#[test]
fn normalize_strips_symbols_and_collapses_whitespace() {
    assert_eq!(normalize("Plastic-Bottles!"), "plasticbottles");
    assert_eq!(normalize("  milk   jug  "), "milk jug");
    assert_eq!(normalize("***"), "");
}

#[test]
fn trigrams_ignore_non_alphanumerics() {
    let set = trigrams("a-b c!");
    assert_eq!(set.len(), 1);
    assert!(set.contains("abc"));
}

#[test]
fn trigrams_short_input_is_empty() {
    assert!(trigrams("ab").is_empty());
    assert!(trigrams("").is_empty());
}

#[test]
fn trigram_similarity_identity() {
    assert_eq!(trigram_similarity("plastic", "plastic"), 1.0);
}

#[test]
fn trigram_similarity_unrelated_strings() {
    assert!(trigram_similarity("plastic", "battery") < 0.3);
}

#[test]
fn trigram_similarity_near_duplicates() {
    assert!(trigram_similarity("plastic bottle", "plastic bottles") > 0.7);
}

#[test]
fn trigram_similarity_empty_side_is_zero() {
    assert_eq!(trigram_similarity("", "plastic"), 0.0);
    assert_eq!(trigram_similarity("plastic", "ab"), 0.0);
}

#[test]
fn trigram_similarity_is_symmetric() {
    let a = "glass jar";
    let b = "mason jar";
    assert_eq!(trigram_similarity(a, b), trigram_similarity(b, a));
}
