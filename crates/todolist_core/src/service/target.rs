//! Target collection of a request.

use crate::model::list::normalize_list_name;

/// Title and form value of the implicit default list.
pub const TODAY: &str = "Today";

/// Segment browsers request on their own; never treated as a list name.
pub const FAVICON_SEGMENT: &str = "favicon.ico";

/// The collection a request operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListTarget {
    /// Items owned directly by the item store.
    Today,
    /// A registry list, by normalized name.
    Named(String),
}

impl ListTarget {
    /// Resolves a raw path segment or form value.
    ///
    /// Blank input and anything normalizing to `Today` resolve to
    /// `ListTarget::Today`.
    pub fn resolve(raw: &str) -> Self {
        let normalized = normalize_list_name(raw.trim());
        if normalized.is_empty() || normalized == TODAY {
            Self::Today
        } else {
            Self::Named(normalized)
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Today => TODAY,
            Self::Named(name) => name,
        }
    }
}
