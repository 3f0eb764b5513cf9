//! Text tokenization for search indexing and querying.
//!
//! The same function normalizes indexed text and query text, so both sides of a
//! lookup always agree on what a token is.

use ahash::AHashSet;

/// Minimum token length in characters. Single letters ("a", "x") never reach the index.
pub const MIN_TOKEN_LENGTH: usize = 2;

/// Punctuation treated as a word boundary, in addition to Unicode whitespace.
const DELIMITERS: &[char] = &[
    '-', '_', '.', ',', ';', ':', '!', '?', '"', '\'', '(', ')', '[', ']', '{', '}',
];

#[inline]
fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || DELIMITERS.contains(&c)
}

/// Splits text into lowercase search tokens.
///
/// - "Bent-Over Row" → ["bent", "over", "row"]
/// - "DB_Row (v2)" → ["db", "row", "v2"]
/// - "a b c" → []
///
/// Fragments shorter than [`MIN_TOKEN_LENGTH`] are dropped. Characters are only ever
/// compared against a fixed delimiter set, so any input is safe, including text full of
/// regex metacharacters.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(is_delimiter)
        .filter(|fragment| fragment.chars().count() >= MIN_TOKEN_LENGTH)
        .map(str::to_owned)
        .collect()
}

/// Tokenizes and drops repeated tokens, keeping the first occurrence of each.
pub fn tokenize_unique(text: &str) -> Vec<String> {
    let mut seen = AHashSet::new();
    tokenize(text)
        .into_iter()
        .filter(|token| seen.insert(token.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case("Barbell Bench Press", &["barbell", "bench", "press"])]
    #[case("Bent-Over Row", &["bent", "over", "row"])]
    #[case("snake_case_name", &["snake", "case", "name"])]
    #[case("Row, Seated; Cable: (Wide)", &["row", "seated", "cable", "wide"])]
    #[case("\"Quoted\" 'words' {braced} [bracketed]", &["quoted", "words", "braced", "bracketed"])]
    #[case("Push-Up!? Really.", &["push", "up", "really"])]
    #[case("3/4 Sit Up", &["3/4", "sit", "up"])]
    #[case("Leg Press 45°", &["leg", "press", "45°"])]
    fn test_tokenize_exact(#[case] input: &str, #[case] expected: &[&str]) {
        check!(tokenize(input) == expected);
    }

    #[rstest]
    #[case("a b c")]
    #[case("...---...")]
    #[case("()[]{}")]
    #[case("")]
    #[case("   \t\n")]
    #[case("x - y _ z")]
    fn test_tokenize_yields_nothing(#[case] input: &str) {
        check!(tokenize(input).is_empty());
    }

    #[test]
    fn test_lowercases_everything() {
        check!(tokenize("DEADLIFT DeadLift deadlift") == ["deadlift", "deadlift", "deadlift"]);
    }

    #[test]
    fn test_short_fragments_dropped_in_context() {
        check!(tokenize("a row") == ["row"]);
        check!(tokenize("Z-Press") == ["press"]);
    }

    #[rstest]
    #[case("(exercise)", &["exercise"])]
    #[case("[bracket]", &["bracket"])]
    #[case("a.*b+c?", &["*b+c"])]
    #[case("^$|\\", &["^$|\\"])]
    fn test_regex_metacharacters_are_plain_text(#[case] input: &str, #[case] expected: &[&str]) {
        check!(tokenize(input) == expected);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // One multi-byte character is still a single character
        check!(tokenize("é").is_empty());
        check!(tokenize("жим лёжа") == ["жим", "лёжа"]);
    }

    #[test]
    fn test_tokenize_unique_keeps_first_occurrence() {
        check!(tokenize_unique("Row row ROW cable row") == ["row", "cable"]);
    }
}
