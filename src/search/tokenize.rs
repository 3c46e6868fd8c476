//! Token normalization and word splitting for indexing.

/// Words must be longer than this to be indexed. Shorter words are noise
/// ("de", "of", "a") and are dropped without a stopword list.
const MAX_NOISE_LENGTH: usize = 2;

/// Characters that separate words in titles and descriptions, besides whitespace.
const SEPARATORS: &[char] = &['.', ',', ';', ':', '(', ')', '\''];

/// Normalizes a tag value (ingredient, appliance or utensil name) into a token.
pub fn normalize(value: &str) -> String {
    value.to_lowercase()
}

/// Splits free text into lowercase words longer than two characters.
///
/// Punctuation from [`SEPARATORS`] and any run of whitespace act as a single
/// boundary, so `"Mix (gently), then bake."` yields `["mix", "gently", "then", "bake"]`.
pub fn split_words(text: &str) -> Vec<String> {
    raw_words(text)
        .filter(|word| word.chars().count() > MAX_NOISE_LENGTH)
        .map(str::to_lowercase)
        .collect()
}

/// The first word of `text`, lowercased, however short it is.
pub fn first_word(text: &str) -> Option<String> {
    raw_words(text).next().map(str::to_lowercase)
}

fn raw_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || SEPARATORS.contains(&c))
        .filter(|word| !word.is_empty())
}
