//! Text analysis pipeline.
//!
//! This module provides the stages between raw code points and word sequences:
//! - **Classifier**: Maps code points to word-boundary classes
//! - **Segmenter**: Splits the code-point stream at word boundaries
//! - **Normalizer**: Drops non-word tokens and canonicalizes the rest
//! - **Window**: Groups consecutive words into fixed-length sequences

pub mod classifier;
pub mod normalizer;
pub mod segmenter;
mod tables;
pub mod window;

pub use classifier::{classify, is_punctuation, CodepointClass};
pub use normalizer::{is_space_token, NormalizerConfig, WordNormalizer};
pub use segmenter::{segment, Decision, Segmenter, SegmenterState, Segments};
pub use tables::UNICODE_VERSION;
pub use window::{count_sequences, SequenceWindow};
