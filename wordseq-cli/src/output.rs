//! Text rendering of ranked sequences.

use std::io::{self, Write};

use wordseq_types::RankedSequence;

/// Writes one line per sequence: the count right-aligned, then the words.
///
/// The count column is one character wider than the widest count, so every
/// line starts with at least one space.
pub fn write_ranked<W: Write>(out: &mut W, ranked: &[RankedSequence]) -> io::Result<()> {
    let width = ranked
        .iter()
        .map(|r| decimal_width(r.count))
        .max()
        .unwrap_or(0)
        + 1;

    for entry in ranked {
        writeln!(
            out,
            "{:>width$} [{}]",
            entry.count,
            entry.words.join(" ")
        )?;
    }
    Ok(())
}

fn decimal_width(mut n: u64) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}
