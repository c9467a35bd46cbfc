#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterRole {
    Vowel,
    Consonant,
}

impl LetterRole {
    /// Role of a byte in a word whose consonant `y`s were already marked
    /// as `Y`. Apostrophes and non-ASCII bytes count as consonants.
    #[inline]
    pub fn of(byte: u8) -> Self {
        match byte {
            b'a' | b'e' | b'i' | b'o' | b'u' | b'y' => Self::Vowel,
            _ => Self::Consonant,
        }
    }
}

#[inline]
pub fn is_vowel(byte: u8) -> bool {
    LetterRole::of(byte) == LetterRole::Vowel
}

static DOUBLES: [&[u8]; 9] = [b"bb", b"dd", b"ff", b"gg", b"mm", b"nn", b"pp", b"rr", b"tt"];

/// Uppercases every `y` acting as a consonant, i.e. a leading `y` or one
/// coming right after a vowel. Marking happens left to right so that a `y`
/// following a marked `Y` stays a vowel.
pub fn mark_consonant_ys(word: &str) -> String {
    let mut marked = String::with_capacity(word.len());
    let mut previous: Option<LetterRole> = None;

    for c in word.chars() {
        let role = match c {
            'y' if previous.map_or(true, |role| role == LetterRole::Vowel) => {
                marked.push('Y');
                LetterRole::Consonant
            }
            _ => {
                marked.push(c);

                if c.is_ascii() {
                    LetterRole::of(c as u8)
                } else {
                    LetterRole::Consonant
                }
            }
        };

        previous = Some(role);
    }

    marked
}

pub fn contains_vowel(bytes: &[u8]) -> bool {
    bytes.iter().copied().any(is_vowel)
}

/// Either a consonant, a vowel and a final consonant other than `w`, `x`
/// or `Y`, or a two-letter word made of a vowel and a consonant.
pub fn ends_in_short_syllable(bytes: &[u8]) -> bool {
    match bytes {
        [first, second] => is_vowel(*first) && !is_vowel(*second),
        [.., antepenult, penult, last] => {
            !is_vowel(*antepenult)
                && is_vowel(*penult)
                && !is_vowel(*last)
                && !matches!(*last, b'w' | b'x' | b'Y')
        }
        _ => false,
    }
}

pub fn ends_in_double(bytes: &[u8]) -> bool {
    DOUBLES.iter().any(|double| bytes.ends_with(double))
}
