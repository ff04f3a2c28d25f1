//! End-to-end counting pass.
//!
//! ```text
//! CodepointSource -> Segmenter -> WordNormalizer -> SequenceWindow -> FrequencyIndex
//! ```
//!
//! [`process`] runs one pass over a source and returns the top sequences.
//! [`SequenceCounter`] is the same pipeline with the stages exposed, for
//! callers that feed tokens themselves or want stats before extraction.

use std::io::Read;

use tracing::{debug, debug_span, Span};
use wordseq_types::{RankedSequence, Result, SequenceConfig};

use crate::analyzer::{NormalizerConfig, Segmenter, SequenceWindow, WordNormalizer};
use crate::index::{FrequencyIndex, IndexStats};
use crate::source::{CharSource, CodepointSource, Utf8Source};

/// Counters for one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassMetrics {
    /// Tokens produced by the segmenter.
    pub tokens: u64,
    /// Tokens that survived normalization.
    pub words: u64,
    /// Sequences handed to the index.
    pub sequences: u64,
}

/// Streaming sequence counter.
///
/// ```
/// use wordseq_core::pipeline::SequenceCounter;
/// use wordseq_types::SequenceConfig;
///
/// let mut counter = SequenceCounter::new(&SequenceConfig::new(2, 10)).unwrap();
/// for token in ["The", " ", "cat", " ", "the", " ", "cat"] {
///     counter.feed_token(token);
/// }
/// let top = counter.finish();
/// assert_eq!(top[0].to_string(), "2 [the cat]");
/// ```
#[derive(Debug)]
pub struct SequenceCounter {
    config: SequenceConfig,
    normalizer: WordNormalizer,
    window: SequenceWindow,
    index: FrequencyIndex,
    metrics: PassMetrics,
    word_buf: String,
}

impl SequenceCounter {
    /// Creates a counter with default normalization.
    ///
    /// # Errors
    /// Returns `WordSeqError::InvalidConfiguration` if `config` is out of range.
    pub fn new(config: &SequenceConfig) -> Result<Self> {
        Self::with_normalizer(config, NormalizerConfig::default())
    }

    /// Creates a counter with custom normalization.
    pub fn with_normalizer(config: &SequenceConfig, normalizer: NormalizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config: *config,
            normalizer: WordNormalizer::new(normalizer),
            window: SequenceWindow::from_config(config)?,
            index: FrequencyIndex::new(),
            metrics: PassMetrics::default(),
            word_buf: String::with_capacity(64),
        })
    }

    /// Feeds one segmenter token.
    #[inline]
    pub fn feed_token(&mut self, token: &str) {
        self.metrics.tokens += 1;
        if !self.normalizer.normalize_into(token, &mut self.word_buf) {
            return;
        }
        self.metrics.words += 1;

        let word = self.word_buf.clone();
        if let Some(sequence) = self.window.push(word) {
            self.metrics.sequences += 1;
            self.index.register(sequence);
        }
    }

    /// Segments `source` to exhaustion, feeding every token.
    ///
    /// # Errors
    /// Returns `WordSeqError::Input` on the first read failure. The counter
    /// should be discarded afterwards.
    pub fn consume<S: CodepointSource>(&mut self, source: S) -> Result<()> {
        let mut segmenter = Segmenter::new(source);
        while let Some(token) = segmenter.next_token()? {
            self.feed_token(&token);
        }
        Ok(())
    }

    /// The `count` span a pass runs under.
    pub fn span(&self) -> Span {
        debug_span!(
            "count",
            k = self.config.sequence_size,
            top_n = self.config.top_n
        )
    }

    pub fn config(&self) -> SequenceConfig {
        self.config
    }

    #[inline]
    pub fn metrics(&self) -> PassMetrics {
        self.metrics
    }

    pub fn stats(&self) -> IndexStats {
        self.index.stats()
    }

    /// Extracts the top `top_n` sequences in rank order.
    pub fn finish(self) -> Vec<RankedSequence> {
        let stats = self.index.stats();
        debug!(
            tokens = self.metrics.tokens,
            words = self.metrics.words,
            sequences = self.metrics.sequences,
            distinct = stats.distinct_sequences,
            max_count = stats.max_count,
            "pass complete"
        );
        self.index.extract_top(self.config.top_n)
    }
}

/// Counts sequences in `source` and returns the top `config.top_n`.
///
/// # Errors
/// Fails with `InvalidConfiguration` before reading anything, or with
/// `Input` if the source fails. No partial result is returned.
pub fn process<S: CodepointSource>(
    source: S,
    config: &SequenceConfig,
) -> Result<Vec<RankedSequence>> {
    process_with(source, config, NormalizerConfig::default())
}

/// [`process`] with custom normalization.
pub fn process_with<S: CodepointSource>(
    source: S,
    config: &SequenceConfig,
    normalizer: NormalizerConfig,
) -> Result<Vec<RankedSequence>> {
    let mut counter = SequenceCounter::with_normalizer(config, normalizer)?;
    let span = counter.span();
    let _enter = span.enter();
    debug!("pass started");

    counter.consume(source)?;
    Ok(counter.finish())
}

/// Counts sequences in a UTF-8 byte stream.
pub fn process_reader<R: Read>(reader: R, config: &SequenceConfig) -> Result<Vec<RankedSequence>> {
    process(Utf8Source::from_reader(reader), config)
}

/// Counts sequences in an in-memory string.
pub fn process_str(text: &str, config: &SequenceConfig) -> Result<Vec<RankedSequence>> {
    process(CharSource::new(text.chars()), config)
}
