// 🔤 Name Normalizer & Letter Mapper
// Pythagorean letter system: a fixed, total map from a-z to 1-9

use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};

/// Values for 'a'..='z', indexed by `letter - b'a'`
const LETTER_VALUES: [u32; 26] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, // a-i
    1, 2, 3, 4, 5, 6, 7, 8, 9, // j-r
    1, 2, 3, 4, 5, 6, 7, 8, // s-z
];

/// 'y' is deliberately a consonant
const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

// ============================================================================
// LETTER VALUE
// ============================================================================

/// One letter of a normalized name with its Pythagorean value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterValue {
    pub letter: char,
    pub value: u32,
    pub is_vowel: bool,
}

/// Value of a single letter, case-insensitive. `None` for anything outside A-Z.
pub fn letter_value(letter: char) -> Option<u32> {
    let lower = letter.to_ascii_lowercase();
    if lower.is_ascii_lowercase() {
        Some(LETTER_VALUES[(lower as u8 - b'a') as usize])
    } else {
        None
    }
}

pub fn is_vowel(letter: char) -> bool {
    VOWELS.contains(&letter.to_ascii_lowercase())
}

/// Classify one letter. `None` for anything outside A-Z.
pub fn classify(letter: char) -> Option<LetterValue> {
    letter_value(letter).map(|value| LetterValue {
        letter: letter.to_ascii_lowercase(),
        value,
        is_vowel: is_vowel(letter),
    })
}

// ============================================================================
// NORMALIZATION
// ============================================================================

/// Lowercase and keep only ASCII Latin letters.
///
/// Accented letters are dropped, not transliterated: "José" → "jos".
pub fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Ordered per-letter breakdown of a name, left to right as written
pub fn breakdown(name: &str) -> Result<Vec<LetterValue>> {
    let letters: Vec<LetterValue> = name.chars().filter_map(classify).collect();
    if letters.is_empty() {
        return Err(EngineError::EmptyName);
    }
    Ok(letters)
}

/// Text table of the Pythagorean system
pub fn letter_map_explanation() -> String {
    let mut lines = vec!["The Pythagorean number system maps each letter to a number:".to_string()];
    for value in 1..=9u32 {
        let letters: Vec<String> = ('A'..='Z')
            .filter(|c| letter_value(*c) == Some(value))
            .map(|c| c.to_string())
            .collect();
        lines.push(format!("{}: {}", value, letters.join(", ")));
    }
    lines.join("\n")
}
