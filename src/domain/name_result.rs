use serde::Serialize;

/// The derived payload for a processed name. Built once per invocation,
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameResult {
    pub original: String,
    pub reversed: String,
    pub vowel_count: usize,
    pub message: String,
}

const VOWELS: [char; 10] = ['a', 'e', 'i', 'o', 'u', 'A', 'E', 'I', 'O', 'U'];

/// Derive a `NameResult` from a name.
///
/// Reversal is code-point-wise: combining marks and emoji sequences come
/// out in reverse code-point order, which is acceptable for the ASCII
/// names this service is fed. Vowel membership is checked against the
/// fixed set `aeiouAEIOU` only, no locale-aware folding.
///
/// Total for every string input, the empty string included.
pub fn process_name(name: &str) -> NameResult {
    let reversed: String = name.chars().rev().collect();
    let vowel_count = name.chars().filter(|c| VOWELS.contains(c)).count();

    NameResult {
        original: name.to_string(),
        message: format!(
            "Hello, {}! Your name reversed is '{}', and it contains {} vowels.",
            name, reversed, vowel_count
        ),
        reversed,
        vowel_count,
    }
}
