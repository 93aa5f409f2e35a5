//! Infrastructure layer for filesystem and environment interactions.
//!
//! Resolves where artlist keeps its files on the host: the data directory used
//! for trace output, and `~` expansion for user-supplied paths.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
