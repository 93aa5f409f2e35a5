//! Wire records of the artworks filter query.
//!
//! These types mirror the GraphQL response document field for field. They are
//! kept apart from the domain types so the normalization rules live in one
//! place: every level is optional, absent levels become `None` in
//! [`QueryResult`], and out-of-range numbers are treated as absent.
//!
//! ```text
//! data
//! └── filter_artworks
//!     ├── counts.total
//!     └── filtered_artworks
//!         ├── pageCursors.previous.page
//!         └── edges[].node { id, href, title, image.url }
//! ```

use crate::domain::error::{ArtlistError, Result};
use crate::domain::{Artwork, QueryResult};
use serde::{Deserialize, Serialize};

/// GraphQL response envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ArtworksFilterData>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphQlError>,
}

/// One entry of the GraphQL `errors` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// The `data` object of the artworks filter query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworksFilterData {
    #[serde(default)]
    pub filter_artworks: Option<FilterArtworksRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterArtworksRecord {
    #[serde(default)]
    pub counts: Option<CountsRecord>,

    #[serde(default)]
    pub filtered_artworks: Option<FilteredArtworksRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountsRecord {
    #[serde(default)]
    pub total: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilteredArtworksRecord {
    #[serde(default, rename = "pageCursors")]
    pub page_cursors: Option<PageCursorsRecord>,

    #[serde(default)]
    pub edges: Option<Vec<EdgeRecord>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCursorsRecord {
    #[serde(default)]
    pub previous: Option<PageCursorRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCursorRecord {
    #[serde(default)]
    pub page: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    #[serde(default)]
    pub node: Option<ArtworkRecord>,
}

/// An artwork node as sent by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkRecord {
    pub id: String,

    #[serde(default)]
    pub href: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub image: Option<ImageRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    #[serde(default)]
    pub url: Option<String>,
}

impl From<ArtworkRecord> for Artwork {
    fn from(record: ArtworkRecord) -> Self {
        let image_url = record.image.and_then(|image| image.url).unwrap_or_default();
        Self::new(record.id, record.href, record.title, image_url)
    }
}

impl From<ArtworksFilterData> for QueryResult {
    fn from(data: ArtworksFilterData) -> Self {
        let Some(filter) = data.filter_artworks else {
            return Self::default();
        };

        let total = filter
            .counts
            .and_then(|counts| counts.total)
            .and_then(|total| u64::try_from(total).ok());

        let (previous_page, items) = filter.filtered_artworks.map_or((None, None), |filtered| {
            let previous_page = filtered
                .page_cursors
                .and_then(|cursors| cursors.previous)
                .and_then(|previous| previous.page)
                .and_then(|page| u32::try_from(page).ok());

            let items = filtered.edges.map(|edges| {
                edges
                    .into_iter()
                    .filter_map(|edge| edge.node)
                    .map(Artwork::from)
                    .collect()
            });

            (previous_page, items)
        });

        Self {
            total,
            previous_page,
            items,
        }
    }
}

impl GraphQlResponse {
    /// Converts the envelope into a normalized result.
    ///
    /// Data wins over errors: a response carrying both is treated as a partial
    /// success and the errors are only logged.
    ///
    /// # Errors
    ///
    /// Returns [`ArtlistError::Query`] when the response has errors and no data.
    pub fn into_result(self) -> Result<QueryResult> {
        match self.data {
            Some(data) => {
                if !self.errors.is_empty() {
                    tracing::debug!(
                        error_count = self.errors.len(),
                        "query returned partial data with errors"
                    );
                }
                Ok(QueryResult::from(data))
            }
            None if self.errors.is_empty() => Ok(QueryResult::default()),
            None => {
                let messages: Vec<&str> =
                    self.errors.iter().map(|e| e.message.as_str()).collect();
                Err(ArtlistError::Query(messages.join("; ")))
            }
        }
    }
}
