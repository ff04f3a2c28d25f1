//! Word-boundary segmentation.
//!
//! This is the first stage of the counting pipeline. It reads code points one
//! at a time from a [`CodepointSource`] and cuts the stream into tokens at
//! Unicode word boundaries. Every code point of the input lands in exactly one
//! token, so concatenating the tokens reproduces the input.
//!
//! ## What It Does
//!
//! ```ignore
//! "don't go"          -> ["don't", " ", "go"]
//! "1,21 gigawatten"   -> ["1,21", " ", "gigawatten"]
//! "foo\r\nbar"        -> ["foo", "\r\n", "bar"]
//! "ツアひらがな"        -> ["ツア", "ひ", "ら", "が", "な"]
//! ```
//!
//! Whitespace and punctuation come out as tokens of their own. Deciding which
//! tokens are words is left to the normalizer.
//!
//! ## Rules
//!
//! For every code point `r`, the rules below are tried in order against the
//! lookback state and one code point of lookahead. The first match decides
//! whether `r` joins the current token (keep) or starts a new one (boundary).
//!
//! | #  | Condition                                                   | Action   |
//! |----|-------------------------------------------------------------|----------|
//! | 1  | previous literal is CR and `r` is LF                        | keep     |
//! | 2  | last or `r` is a line break                                 | boundary |
//! | 3  | last is ZWJ and `r` is GlueAfterZWJ or EBaseGAZ             | keep     |
//! | 4  | `r` is Extend, Format or ZWJ                                | keep     |
//! | 5  | letter, letter                                              | keep     |
//! | 6  | letter, `r` mid-letter, next letter                         | keep     |
//! | 7  | letter, mid-letter, `r` letter                              | keep     |
//! | 8  | Hebrew, `r` is `'`                                          | keep     |
//! | 9  | Hebrew, `r` is `"`, next Hebrew                             | keep     |
//! | 10 | Hebrew, `"`, `r` Hebrew                                     | keep     |
//! | 11 | digit, digit                                                | keep     |
//! | 12 | letter and digit adjacent, either order                     | keep     |
//! | 13 | digit, mid-num, `r` digit                                   | keep     |
//! | 14 | digit, `r` mid-num, next digit                              | keep     |
//! | 15 | Katakana, Katakana                                          | keep     |
//! | 16 | ExtendNumLet joins letters, digits, Katakana on either side | keep     |
//! | 17 | emoji base then modifier; regional-indicator pairs          | keep     |
//! | 18 | anything else                                               | boundary |
//!
//! "Letter" means `AHLetter` or `HebrewLetter` throughout.
//!
//! ## Lookback
//!
//! The state remembers the previous literal code point plus the last two
//! *significant* code points of the current token. Extend and Format code
//! points are transparent: they join the token but leave the lookback alone,
//! so `"e\u{301}t"` still sees `e` next to `t`. ZWJ is not transparent, since
//! rule 3 has to see it.
//!
//! Lookback never reaches across a boundary. Starting a new token resets it
//! to the opening code point alone.

use core::iter::FusedIterator;
use core::mem;
use core::str::Chars;

use wordseq_types::{Result, WordSeqError};

use super::classifier::{classify, CodepointClass};
use crate::source::CodepointSource;

/// A code point remembered by the lookback, with its class cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Retained {
    ch: char,
    class: CodepointClass,
}

impl Retained {
    #[inline(always)]
    fn new(ch: char, class: CodepointClass) -> Self {
        Self { ch, class }
    }
}

/// Outcome of the rule chain for one code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Append the code point to the current token.
    Keep,
    /// Close the current token and open a new one with this code point.
    Boundary,
}

/// Push-driven segmentation state.
///
/// Feed code points with [`SegmenterState::step`], passing the code point
/// that follows (or `None` at end of input), then drain the trailing token
/// with [`SegmenterState::finish`]. [`Segmenter`] and [`segment`] wrap this
/// for pull-style use.
#[derive(Debug, Clone, Default)]
pub struct SegmenterState {
    buf: String,
    last_literal: Option<char>,
    last: Option<Retained>,
    second_to_last: Option<Retained>,
}

impl SegmenterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes `r` and returns the token it closed, if any.
    ///
    /// `next` is the code point after `r`, used by the rules that need one
    /// code point of lookahead.
    #[inline]
    pub fn step(&mut self, r: char, next: Option<char>) -> Option<String> {
        let class = classify(r);
        match self.decide(r, class, next) {
            Decision::Keep => {
                self.keep(r, class);
                None
            }
            Decision::Boundary => self.restart(r, class),
        }
    }

    /// Returns the pending token at end of input, leaving the state empty.
    pub fn finish(&mut self) -> Option<String> {
        let token = mem::take(&mut self.buf);
        *self = Self::default();
        (!token.is_empty()).then_some(token)
    }

    /// Bytes buffered for the token under construction.
    #[inline]
    pub fn pending_len(&self) -> usize {
        self.buf.len()
    }

    /// Runs the rule chain for `r` without changing any state.
    pub fn decide(&self, r: char, class: CodepointClass, next: Option<char>) -> Decision {
        use CodepointClass as C;

        let last = self.last.map(|l| l.class);
        let second = self.second_to_last.map(|s| s.class);
        let next_is = |pred: fn(CodepointClass) -> bool| next.map(classify).is_some_and(pred);
        let last_is = |pred: fn(CodepointClass) -> bool| last.is_some_and(pred);
        let second_is = |pred: fn(CodepointClass) -> bool| second.is_some_and(pred);
        let is_numeric = |c: CodepointClass| c == C::Numeric;
        let is_hebrew = |c: CodepointClass| c == C::HebrewLetter;

        // 1: CR LF stays together.
        if self.last_literal == Some('\r') && r == '\n' {
            return Decision::Keep;
        }
        // 2
        if last_is(C::is_line_break) || class.is_line_break() {
            return Decision::Boundary;
        }
        // 3
        if last == Some(C::ZWJ) && matches!(class, C::GlueAfterZWJ | C::EBaseGAZ) {
            return Decision::Keep;
        }
        // 4
        if class.is_transparent() || class == C::ZWJ {
            return Decision::Keep;
        }
        // 5-7
        if last_is(C::is_ah_letter) {
            if class.is_ah_letter() {
                return Decision::Keep;
            }
            if class.is_mid_letter() && next_is(C::is_ah_letter) {
                return Decision::Keep;
            }
        }
        if second_is(C::is_ah_letter) && last_is(C::is_mid_letter) && class.is_ah_letter() {
            return Decision::Keep;
        }
        // 8-10
        if last == Some(C::HebrewLetter) {
            if r == '\'' {
                return Decision::Keep;
            }
            if r == '"' && next_is(is_hebrew) {
                return Decision::Keep;
            }
        }
        if second == Some(C::HebrewLetter)
            && self.last.is_some_and(|l| l.ch == '"')
            && class == C::HebrewLetter
        {
            return Decision::Keep;
        }
        // 11-12
        if last == Some(C::Numeric) && (class == C::Numeric || class.is_ah_letter()) {
            return Decision::Keep;
        }
        if last_is(C::is_ah_letter) && class == C::Numeric {
            return Decision::Keep;
        }
        // 13-14
        if second == Some(C::Numeric) && last_is(C::is_mid_num) && class == C::Numeric {
            return Decision::Keep;
        }
        if last == Some(C::Numeric) && class.is_mid_num() && next_is(is_numeric) {
            return Decision::Keep;
        }
        // 15
        if last == Some(C::Katakana) && class == C::Katakana {
            return Decision::Keep;
        }
        // 16
        if last_is(C::joins_extend_num_let) && class == C::ExtendNumLet {
            return Decision::Keep;
        }
        if last == Some(C::ExtendNumLet)
            && (class.is_ah_letter() || matches!(class, C::Numeric | C::Katakana))
        {
            return Decision::Keep;
        }
        // 17
        if matches!(last, Some(C::EBase | C::EBaseGAZ)) && class == C::EModifier {
            return Decision::Keep;
        }
        if class == C::RegionalIndicator
            && last == Some(C::RegionalIndicator)
            && second != Some(C::RegionalIndicator)
        {
            return Decision::Keep;
        }
        // 18
        Decision::Boundary
    }

    #[inline(always)]
    fn keep(&mut self, r: char, class: CodepointClass) {
        self.buf.push(r);
        self.last_literal = Some(r);
        if !class.is_transparent() {
            self.second_to_last = self.last;
            self.last = Some(Retained::new(r, class));
        }
    }

    fn restart(&mut self, r: char, class: CodepointClass) -> Option<String> {
        let token = mem::take(&mut self.buf);
        self.buf.push(r);
        self.last_literal = Some(r);
        self.second_to_last = None;
        self.last = (!class.is_transparent()).then_some(Retained::new(r, class));
        (!token.is_empty()).then_some(token)
    }
}

/// Pull-style segmenter over a [`CodepointSource`].
///
/// Yields tokens until the source is exhausted. A read failure is returned
/// once, after which the segmenter reports end of input; the partial token
/// is discarded.
///
/// ```rust
/// use wordseq_core::analyzer::Segmenter;
/// use wordseq_core::source::CharSource;
///
/// let tokens: Vec<String> = Segmenter::new(CharSource::new("don't go".chars()))
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(tokens, ["don't", " ", "go"]);
/// ```
#[derive(Debug)]
pub struct Segmenter<S> {
    source: S,
    state: SegmenterState,
    done: bool,
}

impl<S: CodepointSource> Segmenter<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: SegmenterState::new(),
            done: false,
        }
    }

    /// Returns the next token, `Ok(None)` at end of input.
    ///
    /// # Errors
    /// Returns `WordSeqError::Input` if reading or peeking the source fails.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        if self.done {
            return Ok(None);
        }
        match self.pull() {
            Ok(Some(token)) => Ok(Some(token)),
            Ok(None) => {
                self.done = true;
                Ok(None)
            }
            Err(err) => {
                self.done = true;
                self.state = SegmenterState::new();
                Err(WordSeqError::Input(err))
            }
        }
    }

    fn pull(&mut self) -> std::io::Result<Option<String>> {
        while let Some(r) = self.source.read()? {
            let next = self.source.peek()?;
            if let Some(token) = self.state.step(r, next) {
                return Ok(Some(token));
            }
        }
        Ok(self.state.finish())
    }

    /// Returns the underlying source.
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: CodepointSource> Iterator for Segmenter<S> {
    type Item = Result<String>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

impl<S: CodepointSource> FusedIterator for Segmenter<S> {}

/// Segments an in-memory string.
///
/// Infallible counterpart of [`Segmenter`] for text already in memory.
pub fn segment(text: &str) -> Segments<'_> {
    Segments {
        chars: text.chars(),
        state: SegmenterState::new(),
        done: false,
    }
}

/// Iterator returned by [`segment`].
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    chars: Chars<'a>,
    state: SegmenterState,
    done: bool,
}

impl Iterator for Segments<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        while let Some(r) = self.chars.next() {
            let next = self.chars.clone().next();
            if let Some(token) = self.state.step(r, next) {
                return Some(token);
            }
        }
        self.done = true;
        self.state.finish()
    }
}

impl FusedIterator for Segments<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::CharSource;
    use std::io;

    fn split(text: &str) -> Vec<String> {
        segment(text).collect()
    }

    fn check(text: &str, expected: &[&str]) {
        assert_eq!(split(text), expected, "segmenting {text:?}");

        let pulled: Vec<String> = Segmenter::new(CharSource::new(text.chars()))
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(pulled, expected, "pull-segmenting {text:?}");
    }

    #[test]
    fn empty_input() {
        assert!(split("").is_empty());
        let mut seg = Segmenter::new(CharSource::new("".chars()));
        assert!(seg.next_token().unwrap().is_none());
        assert!(seg.next_token().unwrap().is_none());
    }

    #[test]
    fn spaces_surround_words() {
        check(" foo ", &[" ", "foo", " "]);
        check("foo, bar and baz", &["foo", ",", " ", "bar", " ", "and", " ", "baz"]);
        check("\"foo bar baz\"", &["\"", "foo", " ", "bar", " ", "baz", "\""]);
    }

    #[test]
    fn apostrophes() {
        check("don't go", &["don't", " ", "go"]);
        check("foo'-dot", &["foo", "'", "-", "dot"]);
        check("ア'", &["ア", "'"]);
    }

    #[test]
    fn line_breaks() {
        check("foo\r\nbar", &["foo", "\r\n", "bar"]);
        check("\r\nfoo\r\nbar\r\n", &["\r\n", "foo", "\r\n", "bar", "\r\n"]);
        check("foo\nbar", &["foo", "\n", "bar"]);
        check("\nfoo\n", &["\n", "foo", "\n"]);
        check("foo\rbar", &["foo", "\r", "bar"]);
        check("\rfoo\r", &["\r", "foo", "\r"]);
        check("foo\x0bbar", &["foo", "\x0b", "bar"]);
        check("\n\r", &["\n", "\r"]);
    }

    #[test]
    fn zwj_sequences() {
        check("👨\u{200d}👩\u{200d}👧", &["👨\u{200d}👩\u{200d}👧"]);
        check(
            "\u{200d}👨\u{200d}👩\u{200d}👧\u{200d}",
            &["\u{200d}👨\u{200d}👩\u{200d}👧\u{200d}"],
        );
    }

    #[test]
    fn letter_mid_letter() {
        check("fooכbar baz", &["fooכbar", " ", "baz"]);
        check("foo:bar baz·quux", &["foo:bar", " ", "baz·quux"]);
        check("foo.bar baz'quux", &["foo.bar", " ", "baz'quux"]);
        check("foo. bar", &["foo", ".", " ", "bar"]);
    }

    #[test]
    fn hebrew_quotes() {
        check("וכו׳ פרד״ס", &["וכו׳", " ", "פרד״ס"]);
        check("וכו' פרד\"ס", &["וכו'", " ", "פרד\"ס"]);
        check("\"א", &["\"", "א"]);
        check("אא\"א", &["אא\"א"]);
    }

    #[test]
    fn numbers() {
        check("12 34 56", &["12", " ", "34", " ", "56"]);
        check("12ab34 56אב78", &["12ab34", " ", "56אב78"]);
        check("1.21 gigawatts", &["1.21", " ", "gigawatts"]);
        check("1,21 gigawatten", &["1,21", " ", "gigawatten"]);
        check("foo 3.2 bar", &["foo", " ", "3.2", " ", "bar"]);
        check("foo 3,456.789 bar", &["foo", " ", "3,456.789", " ", "bar"]);
    }

    #[test]
    fn katakana_and_ideographs() {
        check("ツアひらがな", &["ツア", "ひ", "ら", "が", "な"]);
        check("尔布尔", &["尔", "布", "尔"]);
    }

    #[test]
    fn extend_num_let() {
        check("snake_case foo_1", &["snake_case", " ", "foo_1"]);
        check("foo\u{202f}bar格\u{202f}尔", &["foo\u{202f}bar", "格", "\u{202f}", "尔"]);
    }

    #[test]
    fn regional_indicators_pair_up() {
        check("ab🇺🇸🇺🇸 cd", &["ab", "🇺🇸", "🇺🇸", " ", "cd"]);
        check("ab🇺🇸🇺🇸🇺🇸 cd", &["ab", "🇺🇸", "🇺🇸", "🇺🇸", " ", "cd"]);
        check("b🇺🇸🇺🇸🇺🇸 cd", &["b", "🇺🇸", "🇺🇸", "🇺🇸", " ", "cd"]);
        check("b🇺🇺🇸🇺🇸 cd", &["b", "🇺🇺", "🇸🇺", "🇸", " ", "cd"]);
        check("🇦🇧🇨 ", &["🇦🇧", "🇨", " "]);
    }

    #[test]
    fn emoji_modifier() {
        check("👍🏽 ok", &["👍🏽", " ", "ok"]);
    }

    #[test]
    fn format_characters_are_transparent() {
        check(
            "Āll A\u{301}ll test\u{ad}i\u{ad}fy\u{ad}ing test·\u{ad}i2\u{ad}fyア\u{ad}ing",
            &[
                "Āll",
                " ",
                "A\u{301}ll",
                " ",
                "test\u{ad}i\u{ad}fy\u{ad}ing",
                " ",
                "test",
                "·\u{ad}",
                "i2\u{ad}fy",
                "ア\u{ad}",
                "ing",
            ],
        );
    }

    #[test]
    fn other_scripts() {
        check(
            "Հայոց գրեր 학생들은 읽기와นักเรียนได้เร",
            &[
                "Հայոց", " ", "գրեր", " ", "학생들은", " ", "읽기와", "นั", "ก", "เ", "รี", "ย", "น",
                "ไ", "ด้", "เ", "ร",
            ],
        );
        check("ನೀವು ಹೇಗಿದ್ದೀರಿ", &["ನೀವು", " ", "ಹೇಗಿದ್ದೀರಿ"]);
        check("यू कैसे हैं", &["यू", " ", "कैसे", " ", "हैं"]);
        check("كنت أردت أن أقر", &["كنت", " ", "أردت", " ", "أن", " ", "أقر"]);
        check(
            "ነጋሲ ደገፋ ሃይሉ ኢትዮጵያ ተወልዶ ኣደገ።",
            &["ነጋሲ", " ", "ደገፋ", " ", "ሃይሉ", " ", "ኢትዮጵያ", " ", "ተወልዶ", " ", "ኣደገ", "።"],
        );
    }

    #[test]
    fn leading_extend_starts_a_token() {
        check("\u{301}a", &["\u{301}", "a"]);
        check("a \u{301}b", &["a", " \u{301}", "b"]);
    }

    #[test]
    fn tokens_reconstruct_input() {
        let text = "It's 3.14, isn't it?\r\n\tYes\u{200d}👍🏽 — שלום\"ע 🇫🇷🇩🇪!";
        assert_eq!(split(text).concat(), text);
    }

    #[test]
    fn decide_does_not_mutate() {
        let mut state = SegmenterState::new();
        assert_eq!(state.step('a', Some('b')), None);
        assert_eq!(state.pending_len(), 1);
        assert_eq!(state.decide('b', classify('b'), None), Decision::Keep);
        assert_eq!(state.decide(' ', classify(' '), None), Decision::Boundary);
        assert_eq!(state.pending_len(), 1);
        assert_eq!(state.finish().as_deref(), Some("a"));
        assert_eq!(state.finish(), None);
    }

    struct FailingSource {
        chars: Vec<char>,
        fail_on_peek: bool,
    }

    impl CodepointSource for FailingSource {
        fn read(&mut self) -> io::Result<Option<char>> {
            if self.chars.is_empty() {
                if self.fail_on_peek {
                    return Ok(None);
                }
                return Err(io::Error::new(io::ErrorKind::Other, "disk on fire"));
            }
            Ok(Some(self.chars.remove(0)))
        }

        fn peek(&mut self) -> io::Result<Option<char>> {
            if self.fail_on_peek && self.chars.is_empty() {
                return Err(io::Error::new(io::ErrorKind::Other, "peek failed"));
            }
            Ok(self.chars.first().copied())
        }
    }

    #[test]
    fn read_error_surfaces_once() {
        let source = FailingSource {
            chars: "ab cd".chars().collect(),
            fail_on_peek: false,
        };
        let mut seg = Segmenter::new(source);
        assert_eq!(seg.next_token().unwrap().as_deref(), Some("ab"));
        assert_eq!(seg.next_token().unwrap().as_deref(), Some(" "));
        let err = seg.next_token().unwrap_err();
        assert!(err.is_input_error());
        assert!(seg.next_token().unwrap().is_none());
        assert!(seg.next().is_none());
    }

    #[test]
    fn peek_error_propagates() {
        let source = FailingSource {
            chars: "ab".chars().collect(),
            fail_on_peek: true,
        };
        let results: Vec<Result<String>> = Segmenter::new(source).collect();
        assert_eq!(results.len(), 1);
        assert!(results[0].as_ref().unwrap_err().to_string().contains("peek failed"));
    }
}
