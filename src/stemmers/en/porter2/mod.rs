// Reference:
// https://snowballstem.org/algorithms/english/stemmer.html
//
// Martin Porter's revision of his own 1980 algorithm, often called
// "Porter2" or the "English" Snowball stemmer.
mod exceptions;
mod letters;
mod regions;
mod steps;

use exceptions::{exception, is_invariant_after_step_1a};
use letters::mark_consonant_ys;
use regions::Regions;
use steps::{apply_rules, replace_final_y, STEP0, STEP1A, STEP1B, STEP2, STEP3, STEP4, STEP5};

/// Stems a single English word.
///
/// The word is expected to be a token made of ASCII letters, possibly with
/// apostrophes. Anything else goes through the rules mechanically and
/// usually comes back unchanged.
pub fn porter2_stemmer(word: &str) -> String {
    let word = word.to_lowercase();

    if word.chars().nth(2).is_none() {
        return word;
    }

    if let Some(stem) = exception(&word) {
        return stem.to_string();
    }

    let word = word.strip_prefix('\'').unwrap_or(&word);
    let mut word = mark_consonant_ys(word);

    // Regions are computed once and stay the same throughout the steps.
    let regions = Regions::of(&word);

    word = apply_rules(&STEP0, word, &regions);
    word = apply_rules(&STEP1A, word, &regions);

    if !is_invariant_after_step_1a(&word) {
        word = apply_rules(&STEP1B, word, &regions);
        word = replace_final_y(word);
        word = apply_rules(&STEP2, word, &regions);
        word = apply_rules(&STEP3, word, &regions);
        word = apply_rules(&STEP4, word, &regions);
        word = apply_rules(&STEP5, word, &regions);
    }

    word.replace('Y', "y")
}
