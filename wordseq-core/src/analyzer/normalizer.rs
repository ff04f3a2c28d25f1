//! Token-to-word normalization.
//!
//! The segmenter emits every piece of the input, whitespace and punctuation
//! included. The normalizer decides which tokens are words and puts them in
//! canonical form:
//!
//! 1. Tokens that are exactly one whitespace code point (or a CR LF / LF CR
//!    pair) are discarded.
//! 2. Punctuation (general category `P`) is removed.
//! 3. The rest is lower-cased one code point at a time.
//! 4. If nothing is left, the token is discarded.
//!
//! So `"Don't"` becomes `"dont"`, `"3,456.78"` becomes `"345678"`, and `","`
//! disappears. Symbols such as `$` or `+` are not punctuation and survive.
//!
//! Optionally, Latin diacritics are folded to their base letters, so that
//! `"Café"` and `"cafe"` count as the same word. This is off by default.

use super::classifier::is_punctuation;

/// Returns `true` for tokens the normalizer always drops as whitespace.
///
/// Only the exact tokens below qualify. A token such as `"  "` or `" \u{301}"`
/// is not a space token.
#[inline]
pub fn is_space_token(token: &str) -> bool {
    matches!(
        token,
        " " | "\t" | "\n" | "\x0b" | "\x0c" | "\r" | "\u{85}" | "\u{a0}" | "\r\n" | "\n\r"
    )
}

/// Configuration options for word normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// Fold Latin letters with diacritics to their base letter and drop
    /// combining marks in U+0300..=U+036F. `"Müller"` becomes `"muller"`.
    pub fold_diacritics: bool,
}

/// Turns segmenter tokens into words.
///
/// # Examples
///
/// ```
/// use wordseq_core::analyzer::{NormalizerConfig, WordNormalizer};
///
/// let normalizer = WordNormalizer::default();
/// assert_eq!(normalizer.normalize("Don't").as_deref(), Some("dont"));
/// assert_eq!(normalizer.normalize(","), None);
/// assert_eq!(normalizer.normalize(" "), None);
///
/// let folding = WordNormalizer::new(NormalizerConfig { fold_diacritics: true });
/// assert_eq!(folding.normalize("Café").as_deref(), Some("cafe"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WordNormalizer {
    config: NormalizerConfig,
}

impl WordNormalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> NormalizerConfig {
        self.config
    }

    /// Normalizes `token` into `out`, returning `false` if the token is not
    /// a word.
    ///
    /// `out` is cleared first and its capacity is reused. On `false` its
    /// contents are unspecified.
    #[inline]
    pub fn normalize_into(&self, token: &str, out: &mut String) -> bool {
        out.clear();
        if is_space_token(token) {
            return false;
        }
        out.reserve(token.len());

        if token.is_ascii() {
            out.extend(
                token
                    .chars()
                    .filter(|&c| !is_punctuation(c))
                    .map(|c| c.to_ascii_lowercase()),
            );
            return !out.is_empty();
        }

        let fold = self.config.fold_diacritics;
        for ch in token.chars().filter(|&c| !is_punctuation(c)) {
            let lowered = simple_lowercase(ch);
            if !fold {
                out.push(lowered);
            } else if let Some(folded) = fold_diacritic(lowered) {
                out.push(folded);
            }
        }
        !out.is_empty()
    }

    /// Normalizes `token`, returning `None` if it is not a word.
    #[inline]
    pub fn normalize(&self, token: &str) -> Option<String> {
        let mut out = String::with_capacity(token.len());
        self.normalize_into(token, &mut out).then_some(out)
    }
}

/// One-to-one lower-casing. Code points whose full mapping expands, such
/// as `'İ'`, keep only the leading char.
#[inline]
fn simple_lowercase(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Maps an already lower-cased Latin letter to its base letter.
///
/// Returns `None` for combining diacritical marks.
#[inline(always)]
fn fold_diacritic(c: char) -> Option<char> {
    if ('\u{0300}'..='\u{036F}').contains(&c) {
        return None;
    }

    let base = match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' | 'ā' | 'ă' | 'ą' | 'æ' => 'a',
        'ç' | 'ć' | 'č' | 'ĉ' | 'ċ' => 'c',
        'ð' | 'đ' | 'ď' => 'd',
        'é' | 'è' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ğ' | 'ĝ' | 'ġ' | 'ģ' => 'g',
        'í' | 'ì' | 'î' | 'ï' | 'ī' | 'ĭ' | 'į' | 'ı' => 'i',
        'ł' | 'ľ' | 'ĺ' | 'ļ' => 'l',
        'ñ' | 'ń' | 'ň' | 'ņ' => 'n',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' | 'ø' | 'ō' | 'ŏ' | 'ő' | 'œ' => 'o',
        'ŕ' | 'ř' | 'ŗ' => 'r',
        'ś' | 'š' | 'ş' | 'ŝ' | 'ß' => 's',
        'ť' | 'ţ' => 't',
        'ú' | 'ù' | 'û' | 'ü' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ž' | 'ż' => 'z',
        _ => c,
    };
    Some(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(token: &str) -> Option<String> {
        WordNormalizer::default().normalize(token)
    }

    fn norm_fold(token: &str) -> Option<String> {
        WordNormalizer::new(NormalizerConfig {
            fold_diacritics: true,
        })
        .normalize(token)
    }

    #[test]
    fn space_tokens_discarded() {
        for t in [" ", "\t", "\n", "\x0b", "\x0c", "\r", "\u{85}", "\u{a0}", "\r\n", "\n\r"] {
            assert!(is_space_token(t), "{t:?}");
            assert_eq!(norm(t), None, "{t:?}");
        }
    }

    #[test]
    fn only_exact_space_tokens_match() {
        assert!(!is_space_token("  "));
        assert!(!is_space_token(""));
        assert!(!is_space_token("\u{2003}"));
        assert_eq!(norm(" \u{301}").as_deref(), Some(" \u{301}"));
    }

    #[test]
    fn ascii_lowercase() {
        assert_eq!(norm("HELLO").as_deref(), Some("hello"));
        assert_eq!(norm("HeLlO").as_deref(), Some("hello"));
        assert_eq!(norm("abc123").as_deref(), Some("abc123"));
    }

    #[test]
    fn punctuation_removed() {
        assert_eq!(norm("don't").as_deref(), Some("dont"));
        assert_eq!(norm("3,456.789").as_deref(), Some("3456789"));
        assert_eq!(norm("snake_case").as_deref(), Some("snakecase"));
        assert_eq!(norm("פרד\"ס").as_deref(), Some("פרדס"));
        assert_eq!(norm("וכו׳").as_deref(), Some("וכו"));
    }

    #[test]
    fn pure_punctuation_discarded() {
        for t in [",", ".", "\"", "'", "-", "—", "።", "«", "¿"] {
            assert_eq!(norm(t), None, "{t:?}");
        }
        // U+00AD is a format character, not punctuation.
        assert_eq!(norm("·\u{ad}").as_deref(), Some("\u{ad}"));
    }

    #[test]
    fn symbols_survive() {
        assert_eq!(norm("$").as_deref(), Some("$"));
        assert_eq!(norm("+").as_deref(), Some("+"));
        assert_eq!(norm("👍🏽").as_deref(), Some("👍🏽"));
    }

    #[test]
    fn other_whitespace_survives() {
        assert_eq!(norm("\u{2003}").as_deref(), Some("\u{2003}"));
    }

    #[test]
    fn unicode_lowercase() {
        assert_eq!(norm("ПРИВЕТ").as_deref(), Some("привет"));
        assert_eq!(norm("ÜNITED").as_deref(), Some("ünited"));
        assert_eq!(norm("ΣΟΦΊΑ").as_deref(), Some("σοφία"));
    }

    #[test]
    fn lowercase_is_one_to_one() {
        assert_eq!(norm("İstanbul").as_deref(), Some("istanbul"));
        assert_eq!(norm("İstanbul"), norm("Istanbul"));
        for ch in '\0'..=char::MAX {
            let mut full = ch.to_lowercase();
            if full.len() == 1 {
                assert_eq!(Some(simple_lowercase(ch)), full.next(), "{ch:?}");
            }
        }
    }

    #[test]
    fn diacritics_preserved_by_default() {
        assert_eq!(norm("Café").as_deref(), Some("café"));
        assert_eq!(norm("Müller").as_deref(), Some("müller"));
    }

    #[test]
    fn diacritic_folding() {
        assert_eq!(norm_fold("Café").as_deref(), Some("cafe"));
        assert_eq!(norm_fold("Müller").as_deref(), Some("muller"));
        assert_eq!(norm_fold("Český").as_deref(), Some("cesky"));
        assert_eq!(norm_fold("Żółć").as_deref(), Some("zolc"));
        assert_eq!(norm_fold("straße").as_deref(), Some("strase"));
        assert_eq!(norm_fold("e\u{301}").as_deref(), Some("e"));
        assert_eq!(norm_fold("Ж").as_deref(), Some("ж"));
    }

    #[test]
    fn folding_can_empty_a_token() {
        assert_eq!(norm_fold("\u{301}"), None);
        assert_eq!(norm("\u{301}").as_deref(), Some("\u{301}"));
    }

    #[test]
    fn normalize_into_reuses_capacity() {
        let normalizer = WordNormalizer::default();
        let mut buf = String::with_capacity(64);
        let cap = buf.capacity();

        assert!(normalizer.normalize_into("HELLO", &mut buf));
        assert_eq!(buf, "hello");
        assert!(normalizer.normalize_into("World!", &mut buf));
        assert_eq!(buf, "world");
        assert!(!normalizer.normalize_into("?!", &mut buf));
        assert_eq!(buf.capacity(), cap);
    }

    #[test]
    fn idempotent() {
        let samples = ["Hello", "don't", "ÜBER", "İstanbul", "3.14", "Σ", "ﬁ"];
        for s in samples {
            let once = norm(s).unwrap();
            assert_eq!(norm(&once).as_deref(), Some(once.as_str()), "{s:?}");
        }
        for s in ["Müller", "Český", "e\u{301}"] {
            let once = norm_fold(s).unwrap();
            assert_eq!(norm_fold(&once).as_deref(), Some(once.as_str()), "{s:?}");
        }
    }

    #[test]
    fn empty_token() {
        assert_eq!(norm(""), None);
    }
}
