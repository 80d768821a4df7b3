//! Flesch reading-ease score over raw resume text.

use super::report::clamp_score;

/// Flesch reading ease `206.835 − 1.015·(words/sentences) − 84.6·(syllables/words)`,
/// clamped to 0 – 100. Text with no sentences or no words scores 0.
pub fn readability(text: &str) -> u32 {
    let sentences = text
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count();
    let words: Vec<&str> = text.split_whitespace().collect();

    if sentences == 0 || words.is_empty() {
        return 0;
    }

    let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();
    let words_per_sentence = words.len() as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words.len() as f64;

    clamp_score(206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word)
}

/// Vowel-group count with a silent trailing `e` removed; never below 1.
/// Words of three letters or fewer count as one syllable.
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    if word.chars().count() <= 3 {
        return 1;
    }

    let mut groups = 0usize;
    let mut in_group = false;
    for c in word.chars() {
        let vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if vowel && !in_group {
            groups += 1;
        }
        in_group = vowel;
    }

    if word.ends_with('e') && groups > 1 {
        groups -= 1;
    }
    groups.max(1)
}
