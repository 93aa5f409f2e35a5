//! artlist: pagination and search controller for a remote artworks list.
//!
//! artlist keeps the client-side state of one paginated, searchable list whose
//! items come from a remote query service:
//! - Page and previous-page cursor handling, including the service's lagging
//!   cursor convention
//! - Uncommitted search input kept apart from the committed filter term
//! - Loading state and "latest request wins" handling of query responses
//! - Derived, display-ready view state with empty defaults for partial results

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  ListController (controller)                        │  ← UI entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Query actions                                    │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Model      │   │ Source Layer  │   │ Worker Layer  │
//! │ (ui/)         │   │ (source/)     │   │ (worker/)     │
//! │ - ListView    │   │ - Executor    │   │ - Requests    │
//! │               │   │ - Wire models │   │ - Responses   │
//! │               │   │ - Fixtures    │   │ - Trace ctx   │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Data paths (infrastructure/)                     │
//! │  - Error types, items, query types (domain/)        │
//! │  - Cursor convention (domain/pagination)            │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Pagination/search state machine with event/action model
//! - [`controller`]: [`ListController`], the handle a UI holds per list
//! - [`domain`]: Core domain types (items, query types, errors, cursor convention)
//! - [`infrastructure`]: Platform utilities (paths)
//! - [`source`]: Query executor trait, wire models, fixture replay
//! - [`worker`]: Query request/response protocol and worker
//! - [`ui`]: Derived view model
//! - [`observability`]: OpenTelemetry tracing
//!
//! # Configuration
//!
//! ```toml
//! page_size = 20
//! advance_offset = 2
//! retreat_policy = "clamp-to-first-page"
//! trace_level = "debug"
//! trace_file = "~/.local/share/artlist/artlist-otlp.json"
//! ```
//!
//! # Example
//!
//! ```rust
//! use artlist::source::{GraphQlResponse, JsonFixtureSource};
//! use artlist::{initialize, Config, QueryParams};
//!
//! let response: GraphQlResponse = serde_json::from_str(r#"{ "data": { "filter_artworks": {
//!     "counts": { "total": 10 },
//!     "filtered_artworks": { "pageCursors": { "previous": { "page": 0 } }, "edges": [] }
//! } } }"#)?;
//!
//! let mut source = JsonFixtureSource::default();
//! source.insert(QueryParams::new(20, 1, None), response);
//!
//! let mut controller = initialize(&Config::default(), source)?;
//! assert!(controller.view().loading);
//!
//! futures::executor::block_on(controller.settle())?;
//! let view = controller.view();
//! assert!(!view.loading);
//! assert_eq!(view.total, 10);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Cursor Convention as Policy
//!
//! The service reports a previous-page cursor one behind the displayed page, so
//! advancing adds 2. The offset lives in [`CursorConvention`] and is
//! configurable for backends with a different convention.
//!
//! ## Pure State Machine
//!
//! The state machine never awaits. Handlers return [`Action`]s and the
//! controller runs them, which keeps every transition testable without an
//! executor.
//!
//! ## Latest Request Wins
//!
//! Every query carries an id; responses to anything but the newest one are
//! dropped, whatever order they arrive in.

pub mod app;
pub mod controller;
pub mod domain;
pub mod infrastructure;
pub mod source;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, Event, ListState, QueryPhase};
pub use controller::ListController;
pub use domain::{
    ArtlistError, Artwork, CursorConvention, QueryParams, QueryResult, Result, RetreatPolicy,
};
pub use ui::ListView;

use domain::pagination::DEFAULT_ADVANCE_OFFSET;
use serde::{Deserialize, Serialize};
use source::QueryExecutor;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Items per page of the artworks list.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Controller configuration.
///
/// Read from a TOML file, from a host-provided string map, or built in code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Items per page, fixed for the controller's lifetime. Default: 20
    pub page_size: u32,

    /// Pages between the reported previous-page cursor and the next page.
    ///
    /// `2` for the artworks service. Default: 2
    pub advance_offset: u32,

    /// Behaviour of retreating when no previous page is reported.
    ///
    /// Options: `clamp-to-first-page`, `follow-cursor`.
    /// Default: `clamp-to-first-page`
    pub retreat_policy: RetreatPolicy,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Path of the OTLP trace file. `~` is expanded.
    ///
    /// Default: `<data dir>/artlist/artlist-otlp.json`
    pub trace_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            advance_offset: DEFAULT_ADVANCE_OFFSET,
            retreat_policy: RetreatPolicy::default(),
            trace_level: None,
            trace_file: None,
        }
    }
}

impl Config {
    /// Parses configuration from a host-provided string map.
    ///
    /// Unparseable values fall back to their defaults.
    ///
    /// # Parsing Rules
    ///
    /// - `page_size`: String → `u32` (falls back to 20)
    /// - `advance_offset`: String → `u32` (falls back to 2)
    /// - `retreat_policy`: `clamp`/`clamp-to-first-page` or `cursor`/`follow-cursor`
    /// - `trace_level`, `trace_file`: String → `Option<String>`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use artlist::{Config, RetreatPolicy};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "50".to_string());
    /// map.insert("retreat_policy".to_string(), "follow-cursor".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.page_size, 50);
    /// assert_eq!(config.retreat_policy, RetreatPolicy::FollowCursor);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let page_size = config
            .get("page_size")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(defaults.page_size);

        let advance_offset = config
            .get("advance_offset")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(defaults.advance_offset);

        let retreat_policy = config
            .get("retreat_policy")
            .and_then(|s| s.parse::<RetreatPolicy>().ok())
            .unwrap_or(defaults.retreat_policy);

        Self {
            page_size,
            advance_offset,
            retreat_policy,
            trace_level: config.get("trace_level").cloned(),
            trace_file: config.get("trace_file").cloned(),
        }
    }

    /// Parses configuration from TOML. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ArtlistError::Config`] if the TOML is malformed or a value has
    /// the wrong type.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| ArtlistError::Config(format!("invalid TOML: {e}")))
    }

    /// Reads configuration from a TOML file. `~` in the path is expanded.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or
    /// [`ArtlistError::Config`] if it cannot be parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = infrastructure::expand_tilde(path.as_ref());
        tracing::debug!(path = ?path, "loading configuration");
        let contents = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&contents)
    }

    /// Checks the values the controller cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ArtlistError::Config`] if `page_size` or `advance_offset` is 0.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(ArtlistError::Config("page_size must be positive".to_string()));
        }
        if self.advance_offset == 0 {
            return Err(ArtlistError::Config(
                "advance_offset must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Page arithmetic configured for the backing service.
    #[must_use]
    pub const fn cursor_convention(&self) -> CursorConvention {
        CursorConvention::new(self.advance_offset, self.retreat_policy)
    }

    /// Resolved location of the trace file.
    #[must_use]
    pub fn trace_file_path(&self) -> PathBuf {
        self.trace_file.as_ref().map_or_else(
            || infrastructure::get_data_dir().join("artlist-otlp.json"),
            |file| infrastructure::expand_tilde(Path::new(file)),
        )
    }
}

/// Creates a controller for one list view and issues its first query.
///
/// Tracing is not initialized here; call
/// [`observability::init_tracing`] once per process if traces are wanted.
///
/// # Errors
///
/// Returns [`ArtlistError::Config`] if the configuration is invalid.
pub fn initialize<E: QueryExecutor>(config: &Config, executor: E) -> Result<ListController<E>> {
    tracing::debug!(
        page_size = config.page_size,
        advance_offset = config.advance_offset,
        retreat_policy = ?config.retreat_policy,
        "initializing list controller"
    );

    ListController::new(config, executor)
}
