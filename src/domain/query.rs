//! Query parameters and normalized query results.
//!
//! [`QueryParams`] are the variables sent to the query service on every
//! re-evaluation. [`QueryResult`] is what the service answered, normalized out
//! of its wire shape; every field is optional because the service may return a
//! partial result. Accessors fall back to the empty value of each field.

use crate::domain::Artwork;
use serde::{Deserialize, Serialize};

/// Variables of one list query.
///
/// `page_size` is fixed for a controller's lifetime; `page` and `term` change as
/// the user paginates and searches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParams {
    pub page_size: u32,
    pub page: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
}

impl QueryParams {
    #[must_use]
    pub const fn new(page_size: u32, page: u32, term: Option<String>) -> Self {
        Self {
            page_size,
            page,
            term,
        }
    }

    /// Builds the GraphQL variables object for this query.
    ///
    /// An unset term is omitted rather than sent as `null`, so the service
    /// applies no filter.
    ///
    /// # Examples
    ///
    /// ```
    /// use artlist::QueryParams;
    ///
    /// let vars = QueryParams::new(20, 1, None).to_variables();
    /// assert_eq!(vars, serde_json::json!({ "pageSize": 20, "page": 1 }));
    /// ```
    #[must_use]
    pub fn to_variables(&self) -> serde_json::Value {
        let mut variables = serde_json::Map::new();
        variables.insert("pageSize".to_string(), self.page_size.into());
        variables.insert("page".to_string(), self.page.into());
        if let Some(term) = &self.term {
            variables.insert("term".to_string(), term.clone().into());
        }
        serde_json::Value::Object(variables)
    }
}

/// Result of one list query, as reported by the query collaborator.
///
/// `None` means the service did not send the field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    /// Total number of matching items across all pages.
    pub total: Option<u64>,
    /// Page number the service reports as preceding the displayed page.
    pub previous_page: Option<u32>,
    /// Items of the displayed page, in service order.
    pub items: Option<Vec<Artwork>>,
}

impl QueryResult {
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total.unwrap_or(0)
    }

    /// Previous-page cursor; `0` when absent.
    #[must_use]
    pub fn previous_page(&self) -> u32 {
        self.previous_page.unwrap_or(0)
    }

    #[must_use]
    pub fn items(&self) -> &[Artwork] {
        self.items.as_deref().unwrap_or(&[])
    }
}
