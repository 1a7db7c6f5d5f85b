//! Porter suffix-stripping stemmer.
//!
//! Implements the classic Porter algorithm (1980) exactly as published:
//! five rule groups applied in fixed order, with the consonant/vowel
//! "measure" gating each rewrite. The classifier's vocabulary was built
//! with this algorithm, so the rules here must not be "improved":
//! Snowball/Porter2 produce different stems for many words and would
//! silently shift tokens out of the trained vocabulary.
//!
//! Words of one or two characters, and words containing non-ASCII
//! characters, are returned unchanged. Digits are treated as consonants,
//! which leaves numeric tokens untouched in practice.
//!
//! ## The input contract
//!
//! Input is expected to be case-folded already. Uppercase ASCII letters
//! panic in debug builds.

use core::str;

/// Rule-based suffix stripper with a reusable scratch buffer.
///
/// # Example
///
/// ```
/// use sift_core::analyzer::stemmer::Stemmer;
///
/// let mut stemmer = Stemmer::new();
/// assert_eq!(stemmer.stem("running"), "run");
/// assert_eq!(stemmer.stem("studies"), "studi");
/// assert_eq!(stemmer.stem("caresses"), "caress");
/// ```
#[derive(Debug, Default)]
pub struct Stemmer {
    buf: Vec<u8>,
}

/// Step 2 rewrites, gated on `m(stem) > 0`. Longer suffixes listed before
/// any suffix they contain, so first-match equals longest-match.
const STEP2_RULES: &[(&[u8], &[u8])] = &[
    (b"ational", b"ate"),
    (b"tional", b"tion"),
    (b"enci", b"ence"),
    (b"anci", b"ance"),
    (b"izer", b"ize"),
    (b"abli", b"able"),
    (b"alli", b"al"),
    (b"entli", b"ent"),
    (b"eli", b"e"),
    (b"ousli", b"ous"),
    (b"ization", b"ize"),
    (b"ation", b"ate"),
    (b"ator", b"ate"),
    (b"alism", b"al"),
    (b"iveness", b"ive"),
    (b"fulness", b"ful"),
    (b"ousness", b"ous"),
    (b"aliti", b"al"),
    (b"iviti", b"ive"),
    (b"biliti", b"ble"),
    (b"logi", b"log"),
];

/// Step 3 rewrites, gated on `m(stem) > 0`.
const STEP3_RULES: &[(&[u8], &[u8])] = &[
    (b"icate", b"ic"),
    (b"ative", b""),
    (b"alize", b"al"),
    (b"iciti", b"ic"),
    (b"ical", b"ic"),
    (b"ful", b""),
    (b"ness", b""),
];

/// Step 4 deletions, gated on `m(stem) > 1`. "ion" additionally requires
/// the stem to end in `s` or `t`.
const STEP4_SUFFIXES: &[&[u8]] = &[
    b"al", b"ance", b"ence", b"er", b"ic", b"able", b"ible", b"ant", b"ement",
    b"ment", b"ent", b"ion", b"ou", b"ism", b"ate", b"iti", b"ous", b"ive",
    b"ize",
];

impl Stemmer {
    /// Creates a new stemmer.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(32),
        }
    }

    /// Stems `word`, returning a slice of the internal buffer.
    ///
    /// The result is valid until the next call. Input that is too short
    /// or not pure ASCII comes back unchanged.
    pub fn stem(&mut self, word: &str) -> &str {
        self.buf.clear();
        self.buf.extend_from_slice(word.as_bytes());

        if word.len() > 2 && word.is_ascii() {
            debug_assert!(
                !word.bytes().any(|b| b.is_ascii_uppercase()),
                "stemmer: uppercase input, case folder contract violated"
            );

            step1a(&mut self.buf);
            step1b(&mut self.buf);
            step1c(&mut self.buf);
            step2(&mut self.buf);
            step3(&mut self.buf);
            step4(&mut self.buf);
            step5a(&mut self.buf);
            step5b(&mut self.buf);
        }

        // SAFETY: the buffer either holds the unmodified input (valid
        // UTF-8) or pure ASCII that was only ever truncated at byte
        // boundaries and extended with ASCII suffixes.
        unsafe { str::from_utf8_unchecked(&self.buf) }
    }
}

/// A letter is a consonant unless it is a/e/i/o/u, or a `y` preceded by a
/// consonant.
fn is_consonant(word: &[u8], i: usize) -> bool {
    match word[i] {
        b'a' | b'e' | b'i' | b'o' | b'u' => false,
        b'y' => i == 0 || !is_consonant(word, i - 1),
        _ => true,
    }
}

/// The measure `m` of a stem: the number of vowel-consonant sequences in
/// `[C](VC)^m[V]`.
fn measure(stem: &[u8]) -> usize {
    let n = stem.len();
    let mut m = 0;
    let mut i = 0;

    while i < n && is_consonant(stem, i) {
        i += 1;
    }
    loop {
        while i < n && !is_consonant(stem, i) {
            i += 1;
        }
        if i == n {
            return m;
        }
        m += 1;
        while i < n && is_consonant(stem, i) {
            i += 1;
        }
        if i == n {
            return m;
        }
    }
}

fn contains_vowel(stem: &[u8]) -> bool {
    (0..stem.len()).any(|i| !is_consonant(stem, i))
}

/// `*d`: stem ends with a double consonant.
fn ends_double_consonant(stem: &[u8]) -> bool {
    let n = stem.len();
    n >= 2 && stem[n - 1] == stem[n - 2] && is_consonant(stem, n - 1)
}

/// `*o`: stem ends consonant-vowel-consonant where the final consonant is
/// not w, x, or y.
fn ends_cvc(stem: &[u8]) -> bool {
    let n = stem.len();
    n >= 3
        && is_consonant(stem, n - 3)
        && !is_consonant(stem, n - 2)
        && is_consonant(stem, n - 1)
        && !matches!(stem[n - 1], b'w' | b'x' | b'y')
}

/// Plurals: sses -> ss, ies -> i, ss -> ss, s -> "".
fn step1a(buf: &mut Vec<u8>) {
    if buf.ends_with(b"sses") || buf.ends_with(b"ies") {
        buf.truncate(buf.len() - 2);
    } else if !buf.ends_with(b"ss") && buf.ends_with(b"s") {
        buf.truncate(buf.len() - 1);
    }
}

/// Past participles: eed/ed/ing removal with cleanup of the exposed stem.
fn step1b(buf: &mut Vec<u8>) {
    if buf.ends_with(b"eed") {
        if measure(&buf[..buf.len() - 3]) > 0 {
            buf.truncate(buf.len() - 1);
        }
        return;
    }

    let removed = if buf.ends_with(b"ed") && contains_vowel(&buf[..buf.len() - 2]) {
        buf.truncate(buf.len() - 2);
        true
    } else if buf.ends_with(b"ing") && contains_vowel(&buf[..buf.len() - 3]) {
        buf.truncate(buf.len() - 3);
        true
    } else {
        false
    };

    if !removed {
        return;
    }

    if buf.ends_with(b"at") || buf.ends_with(b"bl") || buf.ends_with(b"iz") {
        buf.push(b'e');
    } else if ends_double_consonant(buf)
        && !matches!(buf[buf.len() - 1], b'l' | b's' | b'z')
    {
        buf.truncate(buf.len() - 1);
    } else if measure(buf) == 1 && ends_cvc(buf) {
        buf.push(b'e');
    }
}

/// `(*v*) y -> i`: happy -> happi, sky -> sky.
fn step1c(buf: &mut Vec<u8>) {
    if buf.ends_with(b"y") && contains_vowel(&buf[..buf.len() - 1]) {
        let last = buf.len() - 1;
        buf[last] = b'i';
    }
}

fn apply_rules(buf: &mut Vec<u8>, rules: &[(&[u8], &[u8])]) {
    for (suffix, replacement) in rules {
        if buf.ends_with(suffix) {
            let stem_len = buf.len() - suffix.len();
            if measure(&buf[..stem_len]) > 0 {
                buf.truncate(stem_len);
                buf.extend_from_slice(replacement);
            }
            // The longest matching suffix consumes the attempt whether or
            // not its condition held.
            return;
        }
    }
}

fn step2(buf: &mut Vec<u8>) {
    apply_rules(buf, STEP2_RULES);
}

fn step3(buf: &mut Vec<u8>) {
    apply_rules(buf, STEP3_RULES);
}

fn step4(buf: &mut Vec<u8>) {
    for suffix in STEP4_SUFFIXES {
        if buf.ends_with(suffix) {
            let stem_len = buf.len() - suffix.len();
            let applies = measure(&buf[..stem_len]) > 1
                && (*suffix != b"ion"
                    || (stem_len > 0 && matches!(buf[stem_len - 1], b's' | b't')));
            if applies {
                buf.truncate(stem_len);
            }
            return;
        }
    }
}

/// Final e removal: probate -> probat, cease -> ceas, rate -> rate.
fn step5a(buf: &mut Vec<u8>) {
    if buf.ends_with(b"e") {
        let stem = &buf[..buf.len() - 1];
        let m = measure(stem);
        if m > 1 || (m == 1 && !ends_cvc(stem)) {
            buf.truncate(buf.len() - 1);
        }
    }
}

/// `(m > 1 and *d and *L)`: controll -> control, roll -> roll.
fn step5b(buf: &mut Vec<u8>) {
    if measure(buf) > 1 && ends_double_consonant(buf) && buf.ends_with(b"l") {
        buf.truncate(buf.len() - 1);
    }
}
