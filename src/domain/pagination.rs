//! Cursor convention of the remote pagination protocol.
//!
//! The artworks service does not report the current page. It reports a
//! "previous page" cursor that lags the displayed page by one, so the next
//! page is reached by skipping both the cursor and the displayed page:
//!
//! ```text
//! displayed page:   1   2   3   4
//! previous cursor:  0   1   2   3
//! next page:        2   3   4   5   (cursor + 2)
//! ```
//!
//! The offset belongs to the service, not to the controller. A different
//! backend must derive its own offset from its cursor semantics, which is why it
//! lives in [`CursorConvention`] rather than in the handlers.

use crate::domain::error::{ArtlistError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Advance offset of the artworks service's previous-page cursor.
pub const DEFAULT_ADVANCE_OFFSET: u32 = 2;

/// What retreating does when the service reports no previous page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RetreatPolicy {
    /// Jump to the reported cursor, but never below page 1.
    #[default]
    ClampToFirstPage,

    /// Jump to the reported cursor verbatim, including page `0`.
    ///
    /// Only for services that accept page `0`.
    FollowCursor,
}

impl FromStr for RetreatPolicy {
    type Err = ArtlistError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "clamp" | "clamp-to-first-page" => Ok(Self::ClampToFirstPage),
            "cursor" | "follow-cursor" => Ok(Self::FollowCursor),
            other => Err(ArtlistError::Config(format!(
                "unknown retreat policy `{other}`"
            ))),
        }
    }
}

/// Page arithmetic for one pagination protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorConvention {
    advance_offset: u32,
    retreat_policy: RetreatPolicy,
}

impl Default for CursorConvention {
    fn default() -> Self {
        Self::new(DEFAULT_ADVANCE_OFFSET, RetreatPolicy::default())
    }
}

impl CursorConvention {
    #[must_use]
    pub const fn new(advance_offset: u32, retreat_policy: RetreatPolicy) -> Self {
        Self {
            advance_offset,
            retreat_policy,
        }
    }

    #[must_use]
    pub const fn advance_offset(&self) -> u32 {
        self.advance_offset
    }

    #[must_use]
    pub const fn retreat_policy(&self) -> RetreatPolicy {
        self.retreat_policy
    }

    /// Page to request when advancing from a result with cursor `previous_page`.
    ///
    /// # Errors
    ///
    /// Returns [`ArtlistError::PageOutOfRange`] if the target overflows `u32`.
    ///
    /// # Examples
    ///
    /// ```
    /// use artlist::CursorConvention;
    ///
    /// let convention = CursorConvention::default();
    /// assert_eq!(convention.next_page(0).unwrap(), 2);
    /// assert_eq!(convention.next_page(4).unwrap(), 6);
    /// ```
    pub fn next_page(&self, previous_page: u32) -> Result<u32> {
        previous_page.checked_add(self.advance_offset).ok_or_else(|| {
            ArtlistError::PageOutOfRange(format!(
                "cursor {previous_page} + offset {} exceeds {}",
                self.advance_offset,
                u32::MAX
            ))
        })
    }

    /// Page to request when retreating from a result with cursor `previous_page`.
    #[must_use]
    pub fn retreat_page(&self, previous_page: u32) -> u32 {
        match self.retreat_policy {
            RetreatPolicy::ClampToFirstPage => previous_page.max(1),
            RetreatPolicy::FollowCursor => previous_page,
        }
    }
}
