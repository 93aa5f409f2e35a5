//! OpenTelemetry tracing with spans exported to a local OTLP JSON file.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK provider → OtlpFileExporter → RotatingFile
//! ```
//!
//! Spans are written one OTLP batch per line to `artlist-otlp.json` in the
//! data directory, or to `trace_file` when configured. The file rotates at
//! 10 MB and keeps 3 backups.
//!
//! # Level
//!
//! 1. `RUST_LOG`, when set and valid
//! 2. `trace_level` from [`Config`](crate::Config)
//! 3. `"info"`
//!
//! # Usage
//!
//! ```rust
//! use artlist::observability::init_tracing;
//! use artlist::Config;
//!
//! let dir = tempfile::tempdir()?;
//! let config = Config {
//!     trace_file: Some(dir.path().join("traces.json").display().to_string()),
//!     ..Config::default()
//! };
//! init_tracing(&config);
//!
//! tracing::info!("tracing ready");
//! # Ok::<(), std::io::Error>(())
//! ```

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;
