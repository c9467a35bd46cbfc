use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

lazy_static! {
    static ref IRREGULAR_FORMS: HashMap<&'static str, &'static str> = HashMap::from([
        ("skis", "ski"),
        ("skies", "sky"),
        ("dying", "die"),
        ("lying", "lie"),
        ("tying", "tie"),
        ("idly", "idl"),
        ("gently", "gentl"),
        ("ugly", "ugli"),
        ("early", "earli"),
        ("only", "onli"),
        ("singly", "singl"),
    ]);

    static ref INVARIANT_STEMS: HashSet<&'static str> = HashSet::from([
        "sky", "news", "howe", "atlas", "cosmos", "bias", "andes",
    ]);

    // Checked right after step 1a: words that would otherwise lose
    // an ending they don't really have.
    static ref INVARIANT_AFTER_STEP_1A: HashSet<&'static str> = HashSet::from([
        "inning", "outing", "canning", "herring", "earring", "proceed", "exceed", "succeed",
    ]);
}

/// Returns the predetermined stem of a word the rules would mishandle,
/// if any.
pub fn exception(word: &str) -> Option<&'static str> {
    IRREGULAR_FORMS
        .get(word)
        .or_else(|| INVARIANT_STEMS.get(word))
        .copied()
}

pub fn is_invariant_after_step_1a(word: &str) -> bool {
    INVARIANT_AFTER_STEP_1A.contains(word)
}
