/// Words shorter than this many characters are ignored when scoring.
/// Length is counted in Unicode scalar values, so an emoji is one character
/// here, where a UTF-16 length would count it as two.
const MIN_SIGNIFICANT_CHARS: usize = 4;

fn significant_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter(|w| w.chars().count() >= MIN_SIGNIFICANT_CHARS)
        .map(str::to_lowercase)
        .collect()
}

/// Share of `a`'s significant words that also occur in `b`, over the longer
/// word list. Repeated words in `a` count once per occurrence.
#[allow(clippy::cast_precision_loss)]
pub fn similarity(a: &str, b: &str) -> f64 {
    let words_a = significant_words(a);
    let words_b = significant_words(b);

    let shared = words_a.iter().filter(|w| words_b.contains(w)).count();
    let denominator = words_a.len().max(words_b.len()).max(1);
    shared as f64 / denominator as f64
}
