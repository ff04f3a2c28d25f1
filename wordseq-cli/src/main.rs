use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wordseq_core::analyzer::NormalizerConfig;
use wordseq_core::pipeline::SequenceCounter;
use wordseq_core::source::Utf8Source;
use wordseq_types::SequenceConfig;

mod cli;
mod output;

use cli::Cli;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(io::stderr)
            .init();
    } else if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init();
    }
}

/// Opens every input and joins them into one stream.
///
/// All files are opened before any is read, so a missing file fails the run
/// without partial output.
fn open_inputs(paths: &[PathBuf]) -> Result<Box<dyn Read>> {
    let mut readers: Vec<Box<dyn Read>> = Vec::with_capacity(paths.len().max(1));
    for path in paths {
        if path.as_os_str() == "-" {
            readers.push(Box::new(io::stdin()));
        } else {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            readers.push(Box::new(file));
        }
    }

    let mut readers = readers.into_iter();
    let first = readers
        .next()
        .unwrap_or_else(|| Box::new(io::stdin()) as Box<dyn Read>);
    Ok(readers.fold(first, |joined, next| {
        Box::new(joined.chain(next)) as Box<dyn Read>
    }))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let config = SequenceConfig::new(cli.sequence_size, cli.top_n);
    let normalizer = NormalizerConfig {
        fold_diacritics: cli.fold_diacritics,
    };
    let mut counter = SequenceCounter::with_normalizer(&config, normalizer)?;

    let input = open_inputs(&cli.files)?;
    let span = counter.span();
    let _enter = span.enter();
    debug!(inputs = cli.files.len(), "pass started");
    counter
        .consume(Utf8Source::from_reader(input))
        .context("failed to count word sequences")?;

    if cli.stats {
        let metrics = counter.metrics();
        eprintln!(
            "{} tokens, {} words, {} sequences",
            metrics.tokens, metrics.words, metrics.sequences
        );
        eprintln!("{}", counter.stats());
    }

    let ranked = counter.finish();
    let mut out = BufWriter::new(io::stdout().lock());
    output::write_ranked(&mut out, &ranked)?;
    out.flush()?;
    Ok(())
}
