//! Corpus Benchmarking Tool
//!
//! Measures the counting pipeline on a large text file, such as a
//! Wikipedia dump or a Project Gutenberg book collection.
//!
//! ## What It Benchmarks
//!
//! 1. **Segment**: Splitting the text at word boundaries
//! 2. **Normalize**: Segmenting plus turning tokens into words
//! 3. **Pipeline**: The full pass, including sequence counting and top-N
//!    extraction
//!
//! ## Usage
//!
//! ```bash
//! # Default sequence size (3)
//! ./target/release/corpus_bench /path/to/corpus.txt
//!
//! # Bigrams
//! ./target/release/corpus_bench /path/to/corpus.txt 2
//! ```
//!
//! ## Example Output
//!
//! ```text
//! === Pipeline ===
//! --------------------------------
//! Mode        : Pipeline
//! Elapsed     : 1.214 s
//! Throughput  : 0.081 GiB/s
//! Tokens      : 23_411_907
//! Tokens/sec  : 19_284_931
//! --------------------------------
//! ```
//!
//! Invalid UTF-8 in the input is replaced before timing starts.

use std::env;
use std::fs;
use std::hint::black_box;
use std::time::{Duration, Instant};

use wordseq_core::analyzer::{segment, WordNormalizer};
use wordseq_core::pipeline::SequenceCounter;
use wordseq_types::SequenceConfig;

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;
const TOP_N: usize = 100;

fn main() -> std::io::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: corpus_bench <path> [sequence_size]");
        std::process::exit(1);
    }

    let path = &args[1];
    let sequence_size = match args.get(2).map(|k| k.parse::<usize>()) {
        None => 3,
        Some(Ok(k)) if k >= 1 => k,
        Some(_) => {
            eprintln!("sequence_size must be a positive integer");
            std::process::exit(1);
        }
    };

    println!("Loading file...");
    let bytes = fs::read(path)?;
    let input = String::from_utf8_lossy(&bytes);

    println!("File size: {}", fmt_bytes(input.len() as u64));
    println!("K:         {sequence_size}\n");

    bench_segment(&input);
    bench_normalize(&input);
    bench_pipeline(&input, SequenceConfig::new(sequence_size, TOP_N));

    Ok(())
}

fn bench_segment(input: &str) {
    println!("=== Segment ===");

    warmup(|| {
        black_box(segment(input).count());
    });

    let mut tokens = 0u64;
    let elapsed = measure(|| {
        tokens = segment(input).count() as u64;
        black_box(tokens);
    });

    print_perf("Segment", input.len(), elapsed, tokens);
}

fn bench_normalize(input: &str) {
    let normalizer = WordNormalizer::default();
    let mut word = String::with_capacity(64);

    println!("=== Normalize ===");

    let mut run = || {
        let mut words = 0u64;
        for token in segment(input) {
            if normalizer.normalize_into(&token, &mut word) {
                words += 1;
            }
        }
        black_box(words)
    };

    warmup(|| {
        run();
    });

    let mut words = 0u64;
    let elapsed = measure(|| {
        words = run();
    });

    print_perf("Normalize", input.len(), elapsed, words);
}

fn bench_pipeline(input: &str, config: SequenceConfig) {
    println!("=== Pipeline ===");

    let run = || {
        let Ok(mut counter) = SequenceCounter::new(&config) else {
            return 0;
        };
        for token in segment(input) {
            counter.feed_token(&token);
        }
        let tokens = counter.metrics().tokens;
        black_box(counter.finish());
        tokens
    };

    warmup(|| {
        run();
    });

    let mut tokens = 0u64;
    let elapsed = measure(|| {
        tokens = run();
    });

    print_perf("Pipeline", input.len(), elapsed, tokens);
}

fn warmup<F: FnMut()>(mut f: F) {
    for _ in 0..WARMUP_RUNS {
        f();
    }
}

fn measure<F: FnMut()>(mut f: F) -> Duration {
    let mut total = Duration::ZERO;

    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, tokens: u64) {
    let secs = elapsed.as_secs_f64();
    let gib = input_bytes as f64 / (1024.0 * 1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Mode        : {label}");
    println!("Elapsed     : {secs:.3} s");
    println!("Throughput  : {:.3} GiB/s", gib / secs);

    if tokens > 0 {
        println!("Tokens      : {}", fmt_count(tokens));
        println!("Tokens/sec  : {}", fmt_count((tokens as f64 / secs) as u64));
    }

    println!("--------------------------------\n");
}

fn fmt_bytes(b: u64) -> String {
    const KIB: f64 = 1024.0;
    let b_f = b as f64;
    if b_f >= KIB * KIB * KIB {
        format!("{:.2} GiB", b_f / (KIB * KIB * KIB))
    } else if b_f >= KIB * KIB {
        format!("{:.2} MiB", b_f / (KIB * KIB))
    } else if b_f >= KIB {
        format!("{:.2} KiB", b_f / KIB)
    } else {
        format!("{b} B")
    }
}

fn fmt_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }
    out
}
