//! Category record, drafts, and partial updates.
//!
//! Category names are trimmed and lowercased on every write so that task
//! filtering can compare names exactly. Colors are `#RRGGBB` hex strings,
//! validated on construction and update. Categories carry no task count:
//! counts are always derived live from the task collection.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ValidationError;

/// Color assigned when a draft names none.
pub const DEFAULT_CATEGORY_COLOR: &str = "#5B21B6";

/// Unique identifier for a category, based on UUID v7 for time-ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(Uuid);

impl CategoryId {
    /// Creates a new time-ordered category identifier (UUID v7).
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Creates a `CategoryId` from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID value.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CategoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named grouping label for tasks, with a display color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Lowercase display name.
    pub name: String,
    /// `#RRGGBB` display color.
    pub color: String,
}

impl Category {
    /// Builds a category from user input, lowercasing the name and
    /// defaulting the color.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NameEmpty`] if the name is blank, or
    /// [`ValidationError::InvalidColor`] if the color is not `#RRGGBB`.
    pub fn from_draft(draft: CategoryDraft) -> Result<Self, ValidationError> {
        let name = normalize_name(&draft.name)?;
        let color = match draft.color {
            Some(color) => validate_color(color)?,
            None => DEFAULT_CATEGORY_COLOR.to_string(),
        };
        Ok(Self {
            id: CategoryId::new(),
            name,
            color,
        })
    }
}

/// User input for creating a category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryDraft {
    /// Desired name (lowercased on construction).
    pub name: String,
    /// Display color, or `None` for [`DEFAULT_CATEGORY_COLOR`].
    pub color: Option<String>,
}

impl CategoryDraft {
    /// Convenience constructor for a name-only draft.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: None,
        }
    }
}

/// A partial update to a category; absent fields keep their value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryPatch {
    /// Replacement name (lowercased on application).
    pub name: Option<String>,
    /// Replacement color.
    pub color: Option<String>,
}

impl CategoryPatch {
    /// Applies this patch to `category`, field by field.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the replacement name or color is
    /// invalid; the category is left untouched in that case.
    pub fn apply(self, category: &mut Category) -> Result<(), ValidationError> {
        let name = self.name.map(|n| normalize_name(&n)).transpose()?;
        let color = self.color.map(validate_color).transpose()?;
        if let Some(name) = name {
            category.name = name;
        }
        if let Some(color) = color {
            category.color = color;
        }
        Ok(())
    }
}

/// Trims and lowercases a category name, rejecting blank input.
fn normalize_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::NameEmpty);
    }
    Ok(trimmed.to_lowercase())
}

/// Checks that a color is a `#RRGGBB` hex string.
fn validate_color(color: String) -> Result<String, ValidationError> {
    let valid = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());
    if valid {
        Ok(color)
    } else {
        Err(ValidationError::InvalidColor(color))
    }
}
