//! Code-point classification for word-boundary detection.
//!
//! Every code point maps to exactly one [`CodepointClass`]. The segmenter's
//! rules are written against these classes, so a wrong table entry shows up
//! directly as a wrong token boundary.
//!
//! Lookups are a binary search over sorted, inclusive range tables generated
//! from the Unicode Character Database, with a short-circuit for ASCII letters
//! and digits which dominate typical input.

use core::cmp::Ordering;

use super::tables::{PUNCTUATION_RANGES, WORD_BREAK_RANGES};

/// Word-boundary category of a code point.
///
/// `AHLetter` is the alphabetic class used by most adjacency rules. Hebrew
/// letters get their own class because of the quote-joining rules, and
/// [`CodepointClass::is_ah_letter`] covers both.
///
/// `#[repr(u8)]` keeps the tables at two `u32` bounds plus one byte per range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CodepointClass {
    AHLetter,
    HebrewLetter,
    Numeric,
    Katakana,
    ExtendNumLet,
    MidLetter,
    MidNum,
    MidNumLetQ,
    Extend,
    Format,
    Newline,
    CR,
    LF,
    ZWJ,
    RegionalIndicator,
    EBase,
    EBaseGAZ,
    EModifier,
    GlueAfterZWJ,
    Other,
}

impl CodepointClass {
    /// `AHLetter | HebrewLetter`.
    #[inline(always)]
    pub const fn is_ah_letter(self) -> bool {
        matches!(self, Self::AHLetter | Self::HebrewLetter)
    }

    /// `Newline | CR | LF`.
    #[inline(always)]
    pub const fn is_line_break(self) -> bool {
        matches!(self, Self::Newline | Self::CR | Self::LF)
    }

    /// `MidLetter | MidNumLetQ`.
    #[inline(always)]
    pub const fn is_mid_letter(self) -> bool {
        matches!(self, Self::MidLetter | Self::MidNumLetQ)
    }

    /// `MidNum | MidNumLetQ`.
    #[inline(always)]
    pub const fn is_mid_num(self) -> bool {
        matches!(self, Self::MidNum | Self::MidNumLetQ)
    }

    /// Classes that attach to the preceding code point without becoming
    /// part of the lookback (`Extend | Format`).
    #[inline(always)]
    pub const fn is_transparent(self) -> bool {
        matches!(self, Self::Extend | Self::Format)
    }

    /// Classes that may precede an `ExtendNumLet` inside a word.
    #[inline(always)]
    pub const fn joins_extend_num_let(self) -> bool {
        self.is_ah_letter() || matches!(self, Self::Numeric | Self::Katakana | Self::ExtendNumLet)
    }
}

/// Returns the word-boundary class of `c`.
///
/// Code points not covered by the tables are [`CodepointClass::Other`].
#[inline]
pub fn classify(c: char) -> CodepointClass {
    if c.is_ascii_alphabetic() {
        return CodepointClass::AHLetter;
    }
    if c.is_ascii_digit() {
        return CodepointClass::Numeric;
    }

    let cp = c as u32;
    WORD_BREAK_RANGES
        .binary_search_by(|&(lo, hi, _)| range_order(lo, hi, cp))
        .map_or(CodepointClass::Other, |idx| WORD_BREAK_RANGES[idx].2)
}

/// Returns `true` if `c` has general category `P` (any punctuation).
///
/// This is narrower than [`char::is_ascii_punctuation`], which also accepts
/// ASCII symbols such as `$`, `+` and `|`.
#[inline]
pub fn is_punctuation(c: char) -> bool {
    if c.is_ascii() {
        return ASCII_PUNCTUATION & (1u128 << c as u32) != 0;
    }

    let cp = c as u32;
    PUNCTUATION_RANGES
        .binary_search_by(|&(lo, hi)| range_order(lo, hi, cp))
        .is_ok()
}

const ASCII_PUNCTUATION: u128 = ascii_mask(b"!\"#%&'()*,-./:;?@[\\]_{}");

const fn ascii_mask(bytes: &[u8]) -> u128 {
    let mut mask = 0u128;
    let mut i = 0;
    while i < bytes.len() {
        mask |= 1u128 << bytes[i];
        i += 1;
    }
    mask
}

#[inline(always)]
fn range_order(lo: u32, hi: u32, cp: u32) -> Ordering {
    if hi < cp {
        Ordering::Less
    } else if lo > cp {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}
