// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Edition type record: a canonical name paired with a presentation label.

use serde::{Deserialize, Serialize};

/// Edition type of a catalogued item (e.g. "Hardcover" vs "Paperback").
///
/// Both labels are free-form and independent of each other. No validation is
/// applied; either may be empty.
///
/// Serialized as `{"name": "...", "viewName": "..."}`. Missing keys decode to
/// empty strings.
///
/// # Examples
///
/// ```
/// use homeoffice_library::models::EditionType;
///
/// let edition = EditionType::new("Hardcover", "hardcover-view");
/// assert_eq!(edition.name(), "Hardcover");
/// assert_eq!(edition.view_name(), "hardcover-view");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditionType {
    name: String,
    view_name: String,
}

impl EditionType {
    pub fn new(name: impl Into<String>, view_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            view_name: view_name.into(),
        }
    }

    /// Canonical label identifying the edition type.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Label used when presenting the edition type.
    pub fn view_name(&self) -> &str {
        &self.view_name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_view_name(&mut self, view_name: impl Into<String>) {
        self.view_name = view_name.into();
    }

    /// True while both labels are still empty, i.e. the default state.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.view_name.is_empty()
    }

    /// Split into `(name, view_name)`.
    pub fn into_parts(self) -> (String, String) {
        (self.name, self.view_name)
    }
}
