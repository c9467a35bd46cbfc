use super::letters::{ends_in_short_syllable, is_vowel};

// Words whose R1 starts right after those prefixes, whatever the
// vowel-consonant scan would say.
static R1_PREFIXES: [&str; 3] = ["gener", "commun", "arsen"];

/// Start offsets of the R1 and R2 regions. A region that could not be
/// found starts at the end of the word, i.e. it is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub r1: usize,
    pub r2: usize,
}

// Index right after the first non-vowel following a vowel, scanning from
// `start`.
fn after_vowel_consonant(bytes: &[u8], start: usize) -> Option<usize> {
    let vowel = start + bytes.get(start..)?.iter().position(|b| is_vowel(*b))?;
    let consonant = vowel + 1 + bytes[vowel + 1..].iter().position(|b| !is_vowel(*b))?;

    Some(consonant + 1)
}

impl Regions {
    /// Computes the regions of a word whose consonant `y`s were marked.
    pub fn of(word: &str) -> Self {
        let bytes = word.as_bytes();
        let len = bytes.len();

        let r1 = R1_PREFIXES
            .iter()
            .find(|prefix| word.starts_with(*prefix))
            .map(|prefix| prefix.len())
            .or_else(|| after_vowel_consonant(bytes, 0))
            .unwrap_or(len);

        let r2 = after_vowel_consonant(bytes, r1).unwrap_or(len);

        Self { r1, r2 }
    }

    #[inline]
    pub fn in_r1(&self, i: usize) -> bool {
        i >= self.r1
    }

    #[inline]
    pub fn in_r2(&self, i: usize) -> bool {
        i >= self.r2
    }

    /// A word is short when it ends in a short syllable and its R1 is
    /// empty. Regions being those of the original word, a shortened word
    /// also counts as having an empty R1.
    pub fn is_short_word(&self, bytes: &[u8]) -> bool {
        self.r1 >= bytes.len() && ends_in_short_syllable(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regions(word: &str) -> (&str, &str) {
        let regions = Regions::of(word);
        (&word[regions.r1..], &word[regions.r2..])
    }

    #[test]
    fn test_regions() {
        let tests = [
            ("beautiful", "iful", "ul"),
            ("beauty", "y", ""),
            ("beau", "", ""),
            ("animadversion", "imadversion", "adversion"),
            ("sprinkled", "kled", ""),
            ("eucharist", "harist", "ist"),
            ("generous", "ous", ""),
            ("generalizations", "alizations", "izations"),
            ("communism", "ism", "m"),
            ("arsenal", "al", ""),
            ("", "", ""),
        ];

        for (word, r1, r2) in tests {
            assert_eq!(regions(word), (r1, r2), "{}", word);
        }
    }

    #[test]
    fn test_in_regions() {
        let regions = Regions::of("plastered");

        assert_eq!(regions, Regions { r1: 4, r2: 7 });
        assert!(!regions.in_r1(3));
        assert!(regions.in_r1(4));
        assert!(!regions.in_r2(5));
        assert!(regions.in_r2(7));
    }

    #[test]
    fn test_is_short_word() {
        let tests = [
            ("bed", true),
            ("shed", true),
            ("shred", true),
            ("bead", false),
            ("embed", false),
            ("beds", false),
        ];

        for (word, expected) in tests {
            let regions = Regions::of(word);
            assert_eq!(regions.is_short_word(word.as_bytes()), expected, "{}", word);
        }

        // Regions stay those of the longer original word.
        let regions = Regions::of("hoping");
        assert!(regions.is_short_word(b"hop"));
    }
}
