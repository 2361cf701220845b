use crate::error::NgResult;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Reads a corpus file into one string: lines are trimmed, blank lines are
/// skipped and the rest are joined with single spaces.
pub fn load_corpus<P: AsRef<Path>>(path: P) -> NgResult<String> {
    let path = path.as_ref();
    info!("📂 Loading corpus from: {}", path.display());

    let file = File::open(path)?;
    load_corpus_from_reader(BufReader::new(file))
}

pub fn load_corpus_from_reader<R: BufRead>(reader: R) -> NgResult<String> {
    let mut lines = Vec::new();
    let mut skipped = 0;

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            skipped += 1;
            continue;
        }
        lines.push(trimmed.to_string());
    }

    debug!("   -> Read {} lines, skipped {} blank.", lines.len(), skipped);
    Ok(lines.join(" "))
}
