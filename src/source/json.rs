//! JSON fixture replay executor.
//!
//! [`JsonFixtureSource`] answers queries from recorded responses instead of a
//! live service. Each record pairs the exact query variables with the GraphQL
//! response the service gave for them. Lookups resolve immediately, which makes
//! this the synchronous counterpart of a network-backed executor: offline
//! demos, reproducible bug reports, and tests.
//!
//! Writes use the same atomic strategy as any other on-disk state here: the
//! file is written to a temporary sibling and renamed into place.

use crate::domain::error::{ArtlistError, Result};
use crate::domain::{QueryParams, QueryResult};
use crate::source::backend::QueryExecutor;
use crate::source::models::GraphQlResponse;
use futures_util::future::BoxFuture;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Current fixture file format version.
const FIXTURE_VERSION: u32 = 1;

/// The request half of a recorded response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedRequest {
    pub variables: QueryParams,
}

/// One recorded query and the service's answer to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureEntry {
    pub request: RecordedRequest,
    pub result: GraphQlResponse,
}

impl FixtureEntry {
    #[must_use]
    pub const fn new(variables: QueryParams, result: GraphQlResponse) -> Self {
        Self {
            request: RecordedRequest { variables },
            result,
        }
    }
}

/// Fixture file container format.
///
/// ```json
/// {
///   "version": 1,
///   "responses": [
///     {
///       "request": { "variables": { "pageSize": 20, "page": 1, "term": "david bowie" } },
///       "result": { "data": { "filter_artworks": { "counts": { "total": 10 } } } }
///     }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
struct FixtureFile {
    version: u32,

    #[serde(default)]
    responses: Vec<FixtureEntry>,
}

impl Default for FixtureFile {
    fn default() -> Self {
        Self {
            version: FIXTURE_VERSION,
            responses: Vec::new(),
        }
    }
}

/// Executor that replays recorded responses.
///
/// Later entries for the same variables shadow earlier ones, so a fixture can
/// be corrected by appending.
#[derive(Debug, Clone, Default)]
pub struct JsonFixtureSource {
    /// Backing file, `None` for purely in-memory fixtures.
    file_path: Option<PathBuf>,

    data: FixtureFile,
}

impl JsonFixtureSource {
    /// Opens a fixture file, or starts an empty one if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or if
    /// it declares an unsupported version.
    pub fn open(file_path: impl Into<PathBuf>) -> Result<Self> {
        let file_path = file_path.into();
        tracing::debug!(path = ?file_path, "opening fixture source");

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("fixture file missing, starting empty");
            FixtureFile::default()
        };

        Ok(Self {
            file_path: Some(file_path),
            data,
        })
    }

    /// Builds an in-memory source from entries.
    #[must_use]
    pub fn from_entries(entries: Vec<FixtureEntry>) -> Self {
        Self {
            file_path: None,
            data: FixtureFile {
                version: FIXTURE_VERSION,
                responses: entries,
            },
        }
    }

    fn load_from_file(path: &Path) -> Result<FixtureFile> {
        let contents = std::fs::read_to_string(path)?;
        let data: FixtureFile = serde_json::from_str(&contents)?;

        if data.version != FIXTURE_VERSION {
            return Err(ArtlistError::Config(format!(
                "unsupported fixture version {} in {}",
                data.version,
                path.display()
            )));
        }

        tracing::debug!(
            version = data.version,
            responses = data.responses.len(),
            "loaded fixture data"
        );

        Ok(data)
    }

    /// Number of recorded responses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.responses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.responses.is_empty()
    }

    /// Records a response for `variables`, shadowing any earlier one.
    pub fn insert(&mut self, variables: QueryParams, result: GraphQlResponse) {
        self.data.responses.push(FixtureEntry::new(variables, result));
    }

    /// Looks up the response recorded for `params`.
    #[must_use]
    pub fn lookup(&self, params: &QueryParams) -> Option<&GraphQlResponse> {
        self.data
            .responses
            .iter()
            .rev()
            .find(|entry| &entry.request.variables == params)
            .map(|entry| &entry.result)
    }

    /// Writes the fixture back to its file atomically.
    ///
    /// # Errors
    ///
    /// Returns [`ArtlistError::Config`] for in-memory sources, or an I/O error
    /// if the temporary file cannot be written or renamed.
    pub fn save(&self) -> Result<()> {
        let file_path = self.file_path.as_ref().ok_or_else(|| {
            ArtlistError::Config("in-memory fixture source has no file to save to".to_string())
        })?;

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.data)?;
        let tmp_path = file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, file_path)?;

        tracing::debug!(path = ?file_path, responses = self.len(), "fixture saved");
        Ok(())
    }

    fn replay(&self, params: &QueryParams) -> Result<QueryResult> {
        let _span = tracing::debug_span!("fixture_replay",
            page = params.page,
            term = ?params.term
        )
        .entered();

        let response = self.lookup(params).cloned().ok_or_else(|| {
            tracing::debug!("no recorded response");
            ArtlistError::NoRecordedResponse {
                page: params.page,
                term: params.term.clone(),
            }
        })?;

        response.into_result()
    }
}

impl QueryExecutor for JsonFixtureSource {
    fn execute(&self, params: &QueryParams) -> BoxFuture<'_, Result<QueryResult>> {
        Box::pin(std::future::ready(self.replay(params)))
    }
}
