use super::letters::{contains_vowel, ends_in_double, ends_in_short_syllable, is_vowel};
use super::regions::Regions;

const LI_ENDINGS: &[u8] = b"cdeghkmnrt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop looking for shorter suffixes but leave the word as is.
    Keep,
    Delete,
    Replace(&'static str),
    /// `i` when more than one letter precedes the suffix, `ie` otherwise.
    ReplaceWithIOrIe,
    /// Delete, then fix the ending of what remains (step 1b).
    DeleteAndTidy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Always,
    R1,
    R2,
    R1AndPrecededBy(&'static [u8]),
    R2AndPrecededBy(&'static [u8]),
    /// The stem, minus its last `n` letters, contains a vowel.
    VowelBefore(usize),
    /// In R2, or in R1 and not preceded by a short syllable.
    R2OrLongR1,
}

impl Guard {
    fn holds(&self, stem: &[u8], regions: &Regions) -> bool {
        let i = stem.len();

        let preceded_by = |letters: &[u8]| stem.last().map_or(false, |c| letters.contains(c));

        match self {
            Self::Always => true,
            Self::R1 => regions.in_r1(i),
            Self::R2 => regions.in_r2(i),
            Self::R1AndPrecededBy(letters) => regions.in_r1(i) && preceded_by(*letters),
            Self::R2AndPrecededBy(letters) => regions.in_r2(i) && preceded_by(*letters),
            Self::VowelBefore(n) => contains_vowel(&stem[..i.saturating_sub(*n)]),
            Self::R2OrLongR1 => {
                regions.in_r2(i) || (regions.in_r1(i) && !ends_in_short_syllable(stem))
            }
        }
    }
}

pub type Rules<const N: usize> = [(&'static str, Action, Guard); N];

// NOTE: every table is sorted by decreasing suffix length so that the first
// matching suffix is also the longest one.

pub static STEP0: Rules<3> = [
    ("'s'", Action::Delete, Guard::Always),
    ("'s", Action::Delete, Guard::Always),
    ("'", Action::Delete, Guard::Always),
];

pub static STEP1A: Rules<6> = [
    ("sses", Action::Replace("ss"), Guard::Always),
    ("ied", Action::ReplaceWithIOrIe, Guard::Always),
    ("ies", Action::ReplaceWithIOrIe, Guard::Always),
    ("us", Action::Keep, Guard::Always),
    ("ss", Action::Keep, Guard::Always),
    ("s", Action::Delete, Guard::VowelBefore(1)),
];

pub static STEP1B: Rules<6> = [
    ("eedly", Action::Replace("ee"), Guard::R1),
    ("ingly", Action::DeleteAndTidy, Guard::VowelBefore(0)),
    ("edly", Action::DeleteAndTidy, Guard::VowelBefore(0)),
    ("eed", Action::Replace("ee"), Guard::R1),
    ("ing", Action::DeleteAndTidy, Guard::VowelBefore(0)),
    ("ed", Action::DeleteAndTidy, Guard::VowelBefore(0)),
];

pub static STEP2: Rules<24> = [
    ("ational", Action::Replace("ate"), Guard::R1),
    ("ization", Action::Replace("ize"), Guard::R1),
    ("fulness", Action::Replace("ful"), Guard::R1),
    ("ousness", Action::Replace("ous"), Guard::R1),
    ("iveness", Action::Replace("ive"), Guard::R1),
    ("tional", Action::Replace("tion"), Guard::R1),
    ("biliti", Action::Replace("ble"), Guard::R1),
    ("lessli", Action::Replace("less"), Guard::R1),
    ("entli", Action::Replace("ent"), Guard::R1),
    ("ation", Action::Replace("ate"), Guard::R1),
    ("alism", Action::Replace("al"), Guard::R1),
    ("aliti", Action::Replace("al"), Guard::R1),
    ("ousli", Action::Replace("ous"), Guard::R1),
    ("iviti", Action::Replace("ive"), Guard::R1),
    ("fulli", Action::Replace("ful"), Guard::R1),
    ("enci", Action::Replace("ence"), Guard::R1),
    ("anci", Action::Replace("ance"), Guard::R1),
    ("abli", Action::Replace("able"), Guard::R1),
    ("izer", Action::Replace("ize"), Guard::R1),
    ("ator", Action::Replace("ate"), Guard::R1),
    ("alli", Action::Replace("al"), Guard::R1),
    ("bli", Action::Replace("ble"), Guard::R1),
    ("ogi", Action::Replace("og"), Guard::R1AndPrecededBy(b"l")),
    ("li", Action::Delete, Guard::R1AndPrecededBy(LI_ENDINGS)),
];

pub static STEP3: Rules<9> = [
    ("ational", Action::Replace("ate"), Guard::R1),
    ("tional", Action::Replace("tion"), Guard::R1),
    ("alize", Action::Replace("al"), Guard::R1),
    ("icate", Action::Replace("ic"), Guard::R1),
    ("iciti", Action::Replace("ic"), Guard::R1),
    ("ative", Action::Delete, Guard::R2),
    ("ical", Action::Replace("ic"), Guard::R1),
    ("ness", Action::Delete, Guard::R1),
    ("ful", Action::Delete, Guard::R1),
];

pub static STEP4: Rules<18> = [
    ("ement", Action::Delete, Guard::R2),
    ("ance", Action::Delete, Guard::R2),
    ("ence", Action::Delete, Guard::R2),
    ("able", Action::Delete, Guard::R2),
    ("ible", Action::Delete, Guard::R2),
    ("ment", Action::Delete, Guard::R2),
    ("ant", Action::Delete, Guard::R2),
    ("ent", Action::Delete, Guard::R2),
    ("ism", Action::Delete, Guard::R2),
    ("ate", Action::Delete, Guard::R2),
    ("iti", Action::Delete, Guard::R2),
    ("ous", Action::Delete, Guard::R2),
    ("ive", Action::Delete, Guard::R2),
    ("ize", Action::Delete, Guard::R2),
    ("ion", Action::Delete, Guard::R2AndPrecededBy(b"st")),
    ("al", Action::Delete, Guard::R2),
    ("er", Action::Delete, Guard::R2),
    ("ic", Action::Delete, Guard::R2),
];

pub static STEP5: Rules<2> = [
    ("e", Action::Delete, Guard::R2OrLongR1),
    ("l", Action::Delete, Guard::R2AndPrecededBy(b"l")),
];

fn tidy(stem: &mut String, regions: &Regions) {
    if stem.ends_with("at") || stem.ends_with("bl") || stem.ends_with("iz") {
        stem.push('e');
    } else if ends_in_double(stem.as_bytes()) {
        stem.pop();
    } else if regions.is_short_word(stem.as_bytes()) {
        stem.push('e');
    }
}

/// Applies the rule attached to the longest suffix of the word, if its
/// guard holds. At most one rule fires.
pub fn apply_rules<const N: usize>(rules: &Rules<N>, word: String, regions: &Regions) -> String {
    let Some((suffix, action, guard)) = rules.iter().find(|(suffix, _, _)| word.ends_with(suffix))
    else {
        return word;
    };

    let mut stem = word;
    let i = stem.len() - suffix.len();

    if !guard.holds(&stem.as_bytes()[..i], regions) {
        return stem;
    }

    match action {
        Action::Keep => (),
        Action::Delete => stem.truncate(i),
        Action::Replace(replacement) => {
            stem.truncate(i);
            stem.push_str(replacement);
        }
        Action::ReplaceWithIOrIe => {
            stem.truncate(i);
            stem.push_str(if i > 1 { "i" } else { "ie" });
        }
        Action::DeleteAndTidy => {
            stem.truncate(i);
            tidy(&mut stem, regions);
        }
    }

    stem
}

/// Final `y` or `Y` becomes `i` when it follows a consonant which is not
/// the first letter of the word.
pub fn replace_final_y(mut word: String) -> String {
    if let [.., penult, b'y' | b'Y'] = word.as_bytes() {
        if word.len() > 2 && !is_vowel(*penult) {
            word.pop();
            word.push('i');
        }
    }

    word
}
