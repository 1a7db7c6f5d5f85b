//! Streaming word tokenizer.
//!
//! Second stage of the normalization pipeline: takes case-folded text and
//! splits it into word-like units. Whitespace chunks are located with a
//! `memchr` byte scan; each chunk is then broken apart English-style:
//!
//! - boundary punctuation is peeled off into standalone single-character
//!   tokens (`"free!!!"` → `free`, `!`, `!`, `!`)
//! - separator punctuation (`? ! ; @ # $ % &`) splits wherever it
//!   appears (`"hello!world"` → `hello`, `!`, `world`); commas and
//!   colons split too, except between digits (`"1,000"` and `"3:30"`
//!   stay whole)
//! - common contractions split into their parts (`"don't"` → `do`, `n't`;
//!   `"let's"` → `let`, `'s`)
//! - hyphens, periods, and apostrophes inside a word stay attached
//!   (`"abc-def"` stays one token, to be rejected by the alphanumeric
//!   filter downstream)
//!
//! Tokens are emitted through a callback as slices of the input string, so
//! tokenization itself never allocates.
//!
//! ## The input contract
//!
//! The tokenizer expects **case-folded** input (see
//! [`CaseFolder`](crate::analyzer::normalizer::CaseFolder)):
//! no leading or trailing whitespace and no consecutive spaces. Violations
//! panic in debug builds.

use core::str;
use memchr::memchr_iter;

use crate::analyzer::stopwords::is_punct_byte;

/// Contraction suffixes that split off after an apostrophe.
const APOSTROPHE_SUFFIXES: [&str; 7] = ["s", "t", "d", "m", "ll", "re", "ve"];

/// Streaming tokenizer - splits case-folded text into word-like units.
///
/// Tokens are not copied; they are slices (`&str`) into the original input
/// string. Each token is emitted with its position (0-based, in emission
/// order).
///
/// # Example
///
/// ```
/// use sift_core::analyzer::tokenizer::Tokenizer;
///
/// let tokenizer = Tokenizer::new();
/// let mut tokens = Vec::new();
///
/// tokenizer.tokenize("hello, world!", |text, _pos| tokens.push(text));
/// assert_eq!(tokens, ["hello", ",", "world", "!"]);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Tokenizer;

impl Tokenizer {
    /// Creates a new tokenizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Tokenizes case-folded input and emits `(text, position)`.
    ///
    /// Position is `u32`. After emitting a token at position `u32::MAX`,
    /// further emissions stop (overflow protection).
    pub fn tokenize<'n, F>(&self, folded: &'n str, mut emit: F)
    where
        F: FnMut(&'n str, u32),
    {
        let bytes = folded.as_bytes();

        debug_assert!(
            bytes.first().is_none_or(|&b| b != b' '),
            "tokenizer: leading whitespace, case folder contract violated"
        );

        debug_assert!(
            bytes.last().is_none_or(|&b| b != b' '),
            "tokenizer: trailing whitespace, case folder contract violated"
        );

        debug_assert!(
            !folded.contains("  "),
            "tokenizer: consecutive spaces, case folder contract violated"
        );

        if bytes.is_empty() {
            return;
        }

        let mut pos = 0u32;
        let mut stopped = false;
        let mut push = |text: &'n str| {
            if stopped {
                return;
            }
            emit(text, pos);
            if pos == u32::MAX {
                stopped = true;
            } else {
                pos += 1;
            }
        };

        let mut start = 0usize;
        for i in memchr_iter(b' ', bytes) {
            if start < i {
                Self::emit_units(&folded[start..i], &mut push);
            }
            start = i + 1;
        }
        if start < bytes.len() {
            Self::emit_units(&folded[start..], &mut push);
        }
    }

    /// Breaks one whitespace-free chunk into word-like units.
    fn emit_units<'n, F>(chunk: &'n str, push: &mut F)
    where
        F: FnMut(&'n str),
    {
        let bytes = chunk.as_bytes();
        let mut start = 0usize;
        let end = bytes.len();

        // Leading punctuation, one token per character. Punctuation bytes
        // are ASCII, so slicing at these offsets stays on char boundaries.
        while start < end && is_punct_byte(bytes[start]) {
            push(&chunk[start..start + 1]);
            start += 1;
        }

        let mut trail = end;
        while trail > start && is_punct_byte(bytes[trail - 1]) {
            trail -= 1;
        }

        let core = &chunk[start..trail];
        if !core.is_empty() {
            Self::emit_segments(core, push);
        }

        for i in trail..end {
            push(&chunk[i..i + 1]);
        }
    }

    /// Splits a punctuation-trimmed core at interior separator
    /// punctuation, emitting each separator as its own token.
    ///
    /// `? ! ; @ # $ % &` always separate; `,` and `:` separate unless
    /// both neighbors are digits, so `1,000` and `3:30` stay whole.
    /// All split bytes are ASCII, so the slice offsets stay on char
    /// boundaries.
    fn emit_segments<'n, F>(core: &'n str, push: &mut F)
    where
        F: FnMut(&'n str),
    {
        let bytes = core.as_bytes();
        let mut start = 0usize;

        for (i, &b) in bytes.iter().enumerate() {
            let split = match b {
                b'?' | b'!' | b';' | b'@' | b'#' | b'$' | b'%' | b'&' => true,
                b',' | b':' => {
                    !(i > 0
                        && bytes[i - 1].is_ascii_digit()
                        && i + 1 < bytes.len()
                        && bytes[i + 1].is_ascii_digit())
                }
                _ => false,
            };
            if split {
                if start < i {
                    Self::emit_core(&core[start..i], push);
                }
                push(&core[i..i + 1]);
                start = i + 1;
            }
        }
        if start < bytes.len() {
            Self::emit_core(&core[start..], push);
        }
    }

    /// Emits a separator-free segment, splitting contractions.
    fn emit_core<'n, F>(core: &'n str, push: &mut F)
    where
        F: FnMut(&'n str),
    {
        if let Some(rest) = core.strip_suffix("n't") {
            if !rest.is_empty() {
                push(rest);
                push(&core[core.len() - 3..]);
                return;
            }
        }

        if let Some(apos) = core.rfind('\'') {
            let suffix = &core[apos + 1..];
            if apos > 0 && APOSTROPHE_SUFFIXES.contains(&suffix) {
                push(&core[..apos]);
                push(&core[apos..]);
                return;
            }
        }

        push(core);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Vec<(String, u32)> {
        let mut out = Vec::new();
        Tokenizer::new().tokenize(input, |text, pos| {
            out.push((text.to_string(), pos));
        });
        out
    }

    fn texts(input: &str) -> Vec<String> {
        collect(input).into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn single_word() {
        assert_eq!(texts("hello"), ["hello"]);
    }

    #[test]
    fn two_words() {
        assert_eq!(texts("hello world"), ["hello", "world"]);
    }

    #[test]
    fn positions_are_sequential() {
        let out = collect("the quick brown fox");
        assert_eq!(out.len(), 4);
        for (i, (_, pos)) in out.iter().enumerate() {
            assert_eq!(*pos, i as u32);
        }
    }

    #[test]
    fn empty_emits_nothing() {
        assert!(collect("").is_empty());
    }

    #[test]
    fn trailing_punctuation_peeled() {
        assert_eq!(texts("free!!!"), ["free", "!", "!", "!"]);
        assert_eq!(texts("hello, world!!"), ["hello", ",", "world", "!", "!"]);
    }

    #[test]
    fn leading_punctuation_peeled() {
        assert_eq!(texts("(win)"), ["(", "win", ")"]);
        assert_eq!(texts("\"quoted\""), ["\"", "quoted", "\""]);
    }

    #[test]
    fn pure_punctuation_chunk() {
        assert_eq!(texts("!!!"), ["!", "!", "!"]);
        assert_eq!(texts("..."), [".", ".", "."]);
    }

    #[test]
    fn interior_punctuation_kept() {
        assert_eq!(texts("abc-def"), ["abc-def"]);
        assert_eq!(texts("a.b.c"), ["a.b.c"]);
    }

    #[test]
    fn interior_separators_split() {
        assert_eq!(texts("hello,world"), ["hello", ",", "world"]);
        assert_eq!(texts("free!!cash"), ["free", "!", "!", "cash"]);
        assert_eq!(texts("win;prize"), ["win", ";", "prize"]);
        assert_eq!(texts("you&me"), ["you", "&", "me"]);
        assert_eq!(texts("ring@9"), ["ring", "@", "9"]);
    }

    #[test]
    fn digit_comma_and_colon_stay_attached() {
        assert_eq!(texts("1,000"), ["1,000"]);
        assert_eq!(texts("3:30"), ["3:30"]);
        // Only digit-digit neighbors keep them attached.
        assert_eq!(texts("note:call"), ["note", ":", "call"]);
        assert_eq!(texts("1,a"), ["1", ",", "a"]);
    }

    #[test]
    fn url_splits_at_colon() {
        assert_eq!(texts("http://example.com"), ["http", ":", "//example.com"]);
    }

    #[test]
    fn negative_contraction_splits() {
        assert_eq!(texts("don't"), ["do", "n't"]);
        assert_eq!(texts("can't stop"), ["ca", "n't", "stop"]);
    }

    #[test]
    fn apostrophe_suffix_splits() {
        assert_eq!(texts("let's"), ["let", "'s"]);
        assert_eq!(texts("we're"), ["we", "'re"]);
        assert_eq!(texts("i've i'll i'd i'm"), [
            "i", "'ve", "i", "'ll", "i", "'d", "i", "'m"
        ]);
    }

    #[test]
    fn quoted_contraction() {
        assert_eq!(texts("'don't'"), ["'", "do", "n't", "'"]);
    }

    #[test]
    fn unknown_apostrophe_suffix_stays_whole() {
        assert_eq!(texts("o'clock"), ["o'clock"]);
    }

    #[test]
    fn non_ascii_words_pass_through() {
        assert_eq!(texts("café \u{43f}\u{440}\u{438}"), ["café", "при"]);
    }

    #[test]
    fn digits_and_words() {
        assert_eq!(texts("win 1000 cash"), ["win", "1000", "cash"]);
        assert_eq!(texts("call 555-1234!"), ["call", "555-1234", "!"]);
    }

    #[test]
    fn tokens_are_slices_of_input() {
        let input = String::from("hello, world");
        let base = input.as_ptr() as usize;
        let end = base + input.len();

        Tokenizer::new().tokenize(&input, |text, _| {
            let ptr = text.as_ptr() as usize;
            assert!(ptr >= base && ptr < end);
        });
    }

    #[test]
    fn tokenizer_is_reusable() {
        let t = Tokenizer::new();

        let mut n = 0usize;
        t.tokenize("hello world", |_, _| n += 1);
        assert_eq!(n, 2);

        n = 0;
        t.tokenize("one two three", |_, _| n += 1);
        assert_eq!(n, 3);
    }
}
