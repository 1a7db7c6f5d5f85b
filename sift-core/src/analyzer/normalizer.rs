//! Case folding and whitespace collapsing.
//!
//! First stage of the normalization pipeline: raw message text goes in,
//! lowercase text with single-space-separated chunks comes out. Later
//! stages (tokenizer, filters, stemmer) rely on this stage's output
//! contract: no uppercase characters, no leading/trailing whitespace,
//! no consecutive spaces.

#[rustfmt::skip]
const LOWERCASE_TABLE: [u8; 128] = [
    0x00,0x01,0x02,0x03,0x04,0x05,0x06,0x07,0x08,0x09,0x0a,0x0b,0x0c,0x0d,0x0e,0x0f,
    0x10,0x11,0x12,0x13,0x14,0x15,0x16,0x17,0x18,0x19,0x1a,0x1b,0x1c,0x1d,0x1e,0x1f,
    0x20,0x21,0x22,0x23,0x24,0x25,0x26,0x27,0x28,0x29,0x2a,0x2b,0x2c,0x2d,0x2e,0x2f,
    0x30,0x31,0x32,0x33,0x34,0x35,0x36,0x37,0x38,0x39,0x3a,0x3b,0x3c,0x3d,0x3e,0x3f,
    0x40,0x61,0x62,0x63,0x64,0x65,0x66,0x67,0x68,0x69,0x6a,0x6b,0x6c,0x6d,0x6e,0x6f,
    0x70,0x71,0x72,0x73,0x74,0x75,0x76,0x77,0x78,0x79,0x7a,0x5b,0x5c,0x5d,0x5e,0x5f,
    0x60,0x61,0x62,0x63,0x64,0x65,0x66,0x67,0x68,0x69,0x6a,0x6b,0x6c,0x6d,0x6e,0x6f,
    0x70,0x71,0x72,0x73,0x74,0x75,0x76,0x77,0x78,0x79,0x7a,0x7b,0x7c,0x7d,0x7e,0x7f,
];

/// Lowercases text and collapses whitespace.
///
/// Performs the following operations:
/// - Converts all characters to lowercase (Unicode-aware)
/// - Collapses consecutive whitespace (ASCII or Unicode) into single
///   ASCII spaces
/// - Removes leading and trailing whitespace
///
/// ASCII characters go through a 128-entry lookup table; everything else
/// falls back to `char::to_lowercase`.
///
/// # Examples
///
/// ```
/// use sift_core::analyzer::normalizer::CaseFolder;
///
/// let folder = CaseFolder::new();
/// assert_eq!(folder.fold("  HELLO \t WORLD  "), "hello world");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct CaseFolder;

impl CaseFolder {
    /// Creates a new case folder.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Folds text into an existing String buffer.
    ///
    /// Reuses the buffer's capacity if sufficient, growing only when
    /// necessary. Clears the buffer before writing.
    pub fn fold_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        let mut pending_space = false;

        for ch in input.chars() {
            if ch.is_whitespace() {
                pending_space = true;
                continue;
            }

            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;

            if ch.is_ascii() {
                out.push(LOWERCASE_TABLE[ch as usize] as char);
            } else {
                for lowered in ch.to_lowercase() {
                    out.push(lowered);
                }
            }
        }
        // A trailing pending_space is never flushed, so output never ends
        // with a space.
    }

    /// Folds text and returns a new String.
    #[inline]
    pub fn fold(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.fold_into(input, &mut out);
        out
    }
}
