//! Serialization helpers for [`TraceFile`] artifacts.
//!
//! JSON and CBOR read/write utilities with extension-based auto-detection.
//! Unknown/missing extensions are rejected for reads and default to JSON
//! for writes.
//!
//! Extras:
//! - In-memory CBOR helpers: [`to_cbor`] / [`from_cbor`]
//! - Streaming helper: [`stream_steps_auto`] returning a boxed iterator so
//!   callers can uniformly consume JSONL/NDJSON (true streaming) or
//!   JSON/CBOR (load-then-iterate) without caring about concrete iterator
//!   types.

use crate::format::TraceFile;
use crate::types::Step;
use anyhow::{anyhow, Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Cursor};
use std::path::Path;

/// Ensure the parent directory for a file exists (no-op if none).
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating parent directory {}", display(path)))?;
        }
    }
    Ok(())
}

/// ------------------------------
/// TraceFile I/O
/// ------------------------------

/// Read a [`TraceFile`] from **JSON**.
pub fn read_trace_json<P: AsRef<Path>>(path: P) -> Result<TraceFile> {
    let path_ref = path.as_ref();
    let f = File::open(path_ref).with_context(|| format!("open {}", display(path_ref)))?;
    let rdr = BufReader::new(f);
    let v: TraceFile = serde_json::from_reader(rdr).with_context(|| "deserialize JSON trace")?;
    Ok(v)
}

/// Write a [`TraceFile`] to **JSON** (pretty).
pub fn write_trace_json<P: AsRef<Path>>(path: P, v: &TraceFile) -> Result<()> {
    let path_ref = path.as_ref();
    ensure_parent_dir(path_ref)?;
    let f = File::create(path_ref).with_context(|| format!("create {}", display(path_ref)))?;
    let w = BufWriter::new(f);
    serde_json::to_writer_pretty(w, v).with_context(|| "serialize JSON trace")?;
    Ok(())
}

/// Read a [`TraceFile`] from **CBOR**.
pub fn read_trace_cbor<P: AsRef<Path>>(path: P) -> Result<TraceFile> {
    let path_ref = path.as_ref();
    let f = File::open(path_ref).with_context(|| format!("open {}", display(path_ref)))?;
    let mut rdr = BufReader::new(f);
    let v: TraceFile =
        ciborium::de::from_reader(&mut rdr).with_context(|| "deserialize CBOR trace")?;
    Ok(v)
}

/// Write a [`TraceFile`] to **CBOR**.
pub fn write_trace_cbor<P: AsRef<Path>>(path: P, v: &TraceFile) -> Result<()> {
    let path_ref = path.as_ref();
    ensure_parent_dir(path_ref)?;
    let f = File::create(path_ref).with_context(|| format!("create {}", display(path_ref)))?;
    let mut w = BufWriter::new(f);
    ciborium::ser::into_writer(v, &mut w).with_context(|| "serialize CBOR trace")?;
    Ok(())
}

/// Auto-detect read by extension `.json` / `.cbor` (case-insensitive).
pub fn read_trace_auto<P: AsRef<Path>>(path: P) -> Result<TraceFile> {
    match ext_lower(path.as_ref()).as_deref() {
        Some("json") => read_trace_json(path),
        Some("cbor") => read_trace_cbor(path),
        Some(other) => Err(anyhow!(
            "unsupported trace extension: {} (supported: .json, .cbor)",
            other
        )),
        None => Err(anyhow!("path has no extension (expected .json or .cbor)")),
    }
}

/// Auto-detect write (defaults to **JSON** if unknown or missing).
pub fn write_trace_auto<P: AsRef<Path>>(path: P, v: &TraceFile) -> Result<()> {
    match ext_lower(path.as_ref()).as_deref() {
        Some("json") => write_trace_json(path, v),
        Some("cbor") => write_trace_cbor(path, v),
        _ => write_trace_json(path, v),
    }
}

/// ------------------------------
/// Streaming helper (boxed iterator)
/// ------------------------------

/// Return a boxed iterator over the [`Step`]s stored at `path`.
///
/// - **`.jsonl` / `.ndjson`**: true streaming via
///   [`crate::io_jsonl::stream_steps_jsonl`] (no materialization; one step
///   resident at a time).
/// - **`.json` / `.cbor`**: load the envelope, then iterate its steps
///   (compat fallback).
///
/// This uses a trait object so the concrete iterator type can differ by
/// branch.
pub fn stream_steps_auto<P: AsRef<Path>>(
    path: P,
) -> Result<Box<dyn Iterator<Item = Result<Step>> + Send>> {
    // Own the path so the iterator type doesn't capture `P`.
    let pb = path.as_ref().to_owned();

    match ext_lower(&pb).as_deref() {
        Some("jsonl") | Some("ndjson") => {
            let it = crate::io_jsonl::stream_steps_jsonl(pb)?;
            Ok(Box::new(it))
        }
        Some("json") | Some("cbor") => {
            let tf = read_trace_auto(&pb)?;
            Ok(Box::new(tf.steps.into_iter().map(Ok)))
        }
        Some(other) => Err(anyhow!(
            "unsupported trace extension: {} (supported: .json, .cbor, .jsonl, .ndjson)",
            other
        )),
        None => Err(anyhow!(
            "path has no extension (expected .json, .cbor, .jsonl, or .ndjson)"
        )),
    }
}

/// ------------------------------
/// In-memory CBOR helpers
/// ------------------------------

/// Serialize any `T: Serialize` to **CBOR bytes** using `ciborium`.
pub fn to_cbor<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    ciborium::ser::into_writer(value, &mut buf).with_context(|| "serialize CBOR (to_cbor)")?;
    Ok(buf)
}

/// Deserialize any `T: DeserializeOwned` from **CBOR bytes** using `ciborium`.
pub fn from_cbor<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut cur = Cursor::new(bytes);
    let v = ciborium::de::from_reader(&mut cur).with_context(|| "deserialize CBOR (from_cbor)")?;
    Ok(v)
}

/// Return the lowercase extension (without dot) if present.
fn ext_lower(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_ascii_lowercase())
}

/// Human-friendly path display for error messages.
fn display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
