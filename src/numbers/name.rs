// Name-derived numbers

use crate::error::{EngineError, Result};
use crate::letters::{breakdown, LetterValue};
use crate::reducer::reduce;
use tracing::debug;

/// Which letters of the name feed a calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterFilter {
    All,
    Vowels,
    Consonants,
}

impl LetterFilter {
    pub fn accepts(&self, letter: &LetterValue) -> bool {
        match self {
            LetterFilter::All => true,
            LetterFilter::Vowels => letter.is_vowel,
            LetterFilter::Consonants => !letter.is_vowel,
        }
    }
}

/// Raw (unreduced) sum of the selected letters.
///
/// Fails with `EmptyName` when the name has no letters at all, and with
/// `NoVowels`/`NoConsonants` when the selected class is empty.
pub fn letter_sum(name: &str, filter: LetterFilter) -> Result<u32> {
    let letters = breakdown(name)?;
    let selected: Vec<&LetterValue> = letters.iter().filter(|l| filter.accepts(l)).collect();

    if selected.is_empty() {
        return Err(match filter {
            LetterFilter::Vowels => EngineError::NoVowels,
            LetterFilter::Consonants => EngineError::NoConsonants,
            LetterFilter::All => EngineError::EmptyName,
        });
    }

    Ok(selected.iter().map(|l| l.value).sum())
}

/// Sum of every letter, reduced
pub fn expression(name: &str) -> Result<u32> {
    let number = reduce(letter_sum(name, LetterFilter::All)?)?;
    debug!(expression = number, "calculated expression");
    Ok(number)
}

/// Sum of the vowels (a, e, i, o, u), reduced
pub fn soul_urge(name: &str) -> Result<u32> {
    reduce(letter_sum(name, LetterFilter::Vowels)?)
}

/// Sum of the consonants (including y), reduced
pub fn personality(name: &str) -> Result<u32> {
    reduce(letter_sum(name, LetterFilter::Consonants)?)
}
