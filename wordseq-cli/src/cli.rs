//! CLI argument parsing for wordseq

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "wordseq")]
#[command(version)]
#[command(
    about = "Report the most frequent word sequences in text",
    long_about = "Report the most frequent word sequences in text.\n\n\
                  A filename of '-' reads stdin. With no filenames, input comes from stdin.\n\
                  Multiple inputs are read back to back as one text."
)]
pub struct Cli {
    /// Only show the N sequences with the highest count
    #[arg(short = 'n', long = "top-n", value_name = "N", default_value_t = 100)]
    pub top_n: usize,

    /// Number of words per sequence
    #[arg(
        short = 'k',
        long = "sequence-size",
        value_name = "K",
        default_value_t = 3
    )]
    pub sequence_size: usize,

    /// Fold Latin diacritics so that "café" and "cafe" count as one word
    #[arg(long = "fold-diacritics")]
    pub fold_diacritics: bool,

    /// Print pass statistics to stderr
    #[arg(long = "stats")]
    pub stats: bool,

    /// Enable debug tracing output to stderr
    #[arg(long = "debug")]
    pub debug: bool,

    /// Input files, '-' for stdin
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}
