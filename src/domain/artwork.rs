//! Artwork item model.
//!
//! An [`Artwork`] is one record of the list as returned by the query service,
//! already flattened from its GraphQL edge/node shape.

use serde::{Deserialize, Serialize};

/// A single list item.
///
/// # Fields
///
/// - `id`: Service identifier, unique within a result page
/// - `href`: Link target for the item's detail page
/// - `title`: Display title
/// - `image_url`: Thumbnail reference, empty when the service sent none
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    pub id: String,
    pub href: String,
    pub title: String,
    #[serde(default)]
    pub image_url: String,
}

impl Artwork {
    /// Creates a new artwork record.
    ///
    /// # Examples
    ///
    /// ```
    /// use artlist::Artwork;
    ///
    /// let artwork = Artwork::new("id1", "/artwork/id1", "Untitled", "");
    /// assert_eq!(artwork.title, "Untitled");
    /// assert!(!artwork.has_image());
    /// ```
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        href: impl Into<String>,
        title: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            href: href.into(),
            title: title.into(),
            image_url: image_url.into(),
        }
    }

    /// Returns `true` if the service provided an image reference.
    #[must_use]
    pub fn has_image(&self) -> bool {
        !self.image_url.is_empty()
    }
}
