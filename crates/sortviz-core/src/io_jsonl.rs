//! JSON Lines (NDJSON) helpers for streaming [`Step`] I/O.
//!
//! Bulk-mode traces (hundreds of elements, tens of thousands of steps) get
//! large; these functions provide memory-efficient line-by-line
//! reading/writing. Each line is a single JSON step object.
//!
//! - **Reader**: returns an iterator that *owns* its underlying reader,
//!   yielding `Result<Step>` so callers can surface per-line errors.
//!   (No borrowed iterators that outlive their buffers.)
//! - **Writer**: uses `serde_json::to_writer` to avoid intermediate
//!   allocations.
//!
//! # Formats
//! We treat both `.jsonl` and `.ndjson` as equivalent line-delimited JSON.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::types::Step;

/// Owning JSONL iterator over [`Step`]s.
///
/// Holds the file and buffered reader internally to avoid lifetime pitfalls
/// of returning a borrowed `Lines<'_>` iterator.
pub struct JsonlStepIter {
    rdr: BufReader<File>,
    buf: String,
    line_no: usize,
}

impl JsonlStepIter {
    fn new(file: File) -> Self {
        Self {
            rdr: BufReader::new(file),
            buf: String::with_capacity(8 << 10),
            line_no: 0,
        }
    }
}

impl Iterator for JsonlStepIter {
    type Item = Result<Step>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.rdr.read_line(&mut self.buf) {
            Ok(0) => None, // EOF
            Ok(_) => {
                self.line_no += 1;
                // Trim a single trailing '\n' or '\r\n'
                if self.buf.ends_with('\n') {
                    self.buf.pop();
                    if self.buf.ends_with('\r') {
                        self.buf.pop();
                    }
                }
                if self.buf.is_empty() {
                    // Allow blank lines but surface them clearly as parse errors.
                    return Some(Err(anyhow::anyhow!(
                        "parse jsonl line {}: empty line",
                        self.line_no
                    )));
                }
                let parsed: Result<Step> = serde_json::from_str(&self.buf)
                    .with_context(|| format!("parse jsonl line {}", self.line_no));
                Some(parsed)
            }
            Err(e) => Some(Err(e).with_context(|| format!("read line {}", self.line_no + 1))),
        }
    }
}

/// Stream read: one JSON object per line, yielding [`Step`] items.
///
/// Resilient to large traces: only one step is materialized at a time. Each
/// line is parsed independently; the iterator yields `Err` with a line
/// number if parsing fails.
///
/// # Errors
/// Opening the file may fail. Individual iteration items may be `Err` if a
/// particular line is malformed.
pub fn stream_steps_jsonl<P: AsRef<Path>>(path: P) -> Result<JsonlStepIter> {
    let f = File::open(path.as_ref())
        .with_context(|| format!("open {}", path.as_ref().display()))?;
    Ok(JsonlStepIter::new(f))
}

/// Write steps as JSON Lines (one object per line).
///
/// Uses `serde_json::to_writer` directly to avoid temporary `String`s.
pub fn write_steps_jsonl<P: AsRef<Path>>(path: P, steps: &[Step]) -> Result<()> {
    let f = File::create(path.as_ref())
        .with_context(|| format!("create {}", path.as_ref().display()))?;
    let mut w = BufWriter::new(f);
    for s in steps {
        serde_json::to_writer(&mut w, s).context("serialize step to json")?;
        w.write_all(b"\n").context("write newline")?;
    }
    w.flush().context("flush writer")?;
    Ok(())
}

/// Generic JSONL writer (handy if you want to dump other streams later).
pub fn write_jsonl<P: AsRef<Path>, T: Serialize>(path: P, items: &[T]) -> Result<()> {
    let f = File::create(path.as_ref())
        .with_context(|| format!("create {}", path.as_ref().display()))?;
    let mut w = BufWriter::new(f);
    for it in items {
        serde_json::to_writer(&mut w, it).context("serialize jsonl item")?;
        w.write_all(b"\n").context("write newline")?;
    }
    w.flush().context("flush writer")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tmp_jsonl(name: &str) -> std::path::PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("sortviz_core_jsonl_{}_{}.jsonl", name, rand_suffix()));
        p
    }

    #[test]
    fn jsonl_roundtrip_streams_each_step() {
        let p = tmp_jsonl("roundtrip");
        let steps = vec![
            Step {
                swapped: Some([0, 1]),
                ..Step::snapshot(&[1, 2, 3])
            },
            Step {
                sorted: Some(vec![0, 1, 2]),
                ..Step::snapshot(&[1, 2, 3])
            },
        ];
        write_steps_jsonl(&p, &steps).unwrap();

        let got: Vec<Step> = stream_steps_jsonl(&p)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(got, steps);
        let _ = std::fs::remove_file(p);
    }

    #[test]
    fn malformed_line_reports_its_number() {
        let p = tmp_jsonl("malformed");
        std::fs::write(&p, "{\"array\":[1]}\nnot json\n").unwrap();

        let results: Vec<Result<Step>> = stream_steps_jsonl(&p).unwrap().collect();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        let err = results[1].as_ref().unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
        let _ = std::fs::remove_file(p);
    }

    fn rand_suffix() -> u64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos() as u64
    }
}
