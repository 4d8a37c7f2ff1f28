//! sortviz-core — step/trace types, I/O, and validation.
//!
//! This crate defines the **stable boundary** used across sortviz crates:
//! - canonical data types (`Step`, `Algorithm`, `TraceFile`, …),
//! - JSON/CBOR I/O (with `.jsonl/.ndjson` streaming helpers), and
//! - the trace [`Validator`] that enforces the engine contract on stored
//!   traces.
//!
//! ```no_run
//! use sortviz_core::{read_trace_auto, Validator};
//! let trace = read_trace_auto("bubble.json")?;
//! let report = Validator::strict().validate(&trace)?;
//! println!("ok: {report}");
//! # Ok::<(), anyhow::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
// Small, explicit allowlist to keep docs readable and APIs ergonomic.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::doc_markdown
)]

/// The closed set of traceable algorithms.
pub mod algorithm;
/// Versioned trace file envelope.
pub mod format;
/// JSON/CBOR helpers and auto-detecting read/write APIs.
pub mod io;
/// Streaming JSONL/NDJSON helpers for large traces.
pub mod io_jsonl;
/// Canonical step types shared across the workspace.
pub mod types;
/// Trace invariant checker.
pub mod validate;

// ---- Re-exports for workspace compatibility ----
pub use algorithm::*;
pub use format::*;
pub use io::*;
pub use types::*;
pub use validate::*;

/// Commonly-used items for quick imports.
///
/// ```rust
/// use sortviz_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        algorithm::Algorithm,
        format::{TraceFile, TRACE_VERSION},
        types::{IndexPair, Step, Value},
        validate::Validator,
    };
}
